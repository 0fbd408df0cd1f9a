//! Prints the static asset build configuration as JSON for the task runner.

use campus_utils::build_config::BuildConfig;
use serde::Deserialize;
use std::env::vars;
use std::path::PathBuf;

#[derive(Deserialize)]
struct BuildEnv {
    project_root: Option<PathBuf>,
    static_files_host: String,
    browserlist: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let BuildEnv {
        project_root,
        static_files_host,
        browserlist,
    } = serde_env::from_iter(vars())?;

    let project_root = match project_root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    // Comma separated, e.g. "> 1%,last 2 versions"
    let browserlist = browserlist
        .as_deref()
        .unwrap_or("defaults")
        .split(',')
        .map(str::trim)
        .filter(|query| !query.is_empty())
        .map(str::to_owned)
        .collect();

    let config = BuildConfig::new(project_root, &static_files_host, browserlist);
    println!("{}", config.to_json()?);

    Ok(())
}
