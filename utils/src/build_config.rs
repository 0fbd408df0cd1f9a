//! Path settings for the static asset pipeline (JavaScript bundling, Sass,
//! Pug templates and the dev-server watcher).
//!
//! A [`BuildConfig`] is built once from the project root and handed to the
//! external task runner as JSON. Every field is read-only after construction.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Name of the generated Sass settings partial.
pub const SASS_STATIC_FILE_NAME: &str = "_static.scss";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPaths {
    src: Vec<String>,
    dest: String,
}

impl BuildPaths {
    pub fn src(&self) -> &[String] {
        &self.src
    }

    pub fn dest(&self) -> &str {
        &self.dest
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintPaths {
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<String>,
    src: Vec<String>,
    dest: String,
}

impl LintPaths {
    pub fn rule(&self) -> Option<&str> {
        self.rule.as_deref()
    }

    pub fn src(&self) -> &[String] {
        &self.src
    }

    pub fn dest(&self) -> &str {
        &self.dest
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPaths {
    build: BuildPaths,
    lint: LintPaths,
}

impl TaskPaths {
    pub fn build(&self) -> &BuildPaths {
        &self.build
    }

    pub fn lint(&self) -> &LintPaths {
        &self.lint
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsConfig {
    frontend: TaskPaths,
}

impl JsConfig {
    pub fn frontend(&self) -> &TaskPaths {
        &self.frontend
    }
}

/// The generated `_static.scss` partial that exposes host and root paths to Sass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SassStatic {
    file_name: String,
    data: String,
    dest: String,
}

impl SassStatic {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn dest(&self) -> &str {
        &self.dest
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SassConfig {
    build: BuildPaths,
    lint: LintPaths,
    #[serde(rename = "static")]
    static_settings: SassStatic,
}

impl SassConfig {
    pub fn build(&self) -> &BuildPaths {
        &self.build
    }

    pub fn lint(&self) -> &LintPaths {
        &self.lint
    }

    pub fn static_settings(&self) -> &SassStatic {
        &self.static_settings
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcemapsConfig {
    dest: String,
}

impl SourcemapsConfig {
    pub fn dest(&self) -> &str {
        &self.dest
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchPaths {
    src: Vec<String>,
    ignore: Vec<String>,
}

/// Dev-server restart settings: `main` is the server entry point, restarted
/// whenever anything under `watch.src` changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchConfig {
    main: String,
    watch: WatchPaths,
}

impl WatchConfig {
    pub fn main(&self) -> &str {
        &self.main
    }

    pub fn src(&self) -> &[String] {
        &self.watch.src
    }

    pub fn ignore(&self) -> &[String] {
        &self.watch.ignore
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    project_root: PathBuf,
    js: JsConfig,
    sass: SassConfig,
    pug: TaskPaths,
    browserlist: Vec<String>,
    sourcemaps: SourcemapsConfig,
    watch: WatchConfig,
}

fn glob(root: &Path, rest: &str) -> String {
    format!("{}/{rest}", root.display())
}

impl BuildConfig {
    pub fn new(
        project_root: impl Into<PathBuf>,
        static_files_host: &str,
        browserlist: Vec<String>,
    ) -> Self {
        let project_root = project_root.into();
        let root = project_root.as_path();

        let js = JsConfig {
            frontend: TaskPaths {
                build: BuildPaths {
                    src: vec![glob(root, "static/src/js/**/*.js")],
                    dest: glob(root, "static/dist/js"),
                },
                lint: LintPaths {
                    rule: Some(glob(root, "settings/lint/eslint/frontend.js")),
                    src: vec![glob(root, "static/src/js/**/*.js")],
                    dest: glob(root, "static/src/js"),
                },
            },
        };

        let sass_static_data = [
            "// this file is automatically generated".to_owned(),
            "// don't change anything because it will be overwritten next time".to_owned(),
            "// change the settings with campus-build-config".to_owned(),
            format!("$staticRoot: '{static_files_host}';"),
            format!("$projectRoot: '{}';", root.display()),
            "$font: '#{ $staticRoot }/font';".to_owned(),
            "$image: '#{ $staticRoot }/image';".to_owned(),
            "$sass: '#{ $projectRoot }/static/src/sass';".to_owned(),
        ]
        .join("\n");

        let sass = SassConfig {
            build: BuildPaths {
                src: vec![
                    glob(root, "static/src/sass/**/*.scss"),
                    format!("!{}", glob(root, "static/src/sass/components/**/*.scss")),
                ],
                dest: glob(root, "static/dist/css"),
            },
            lint: LintPaths {
                rule: Some(glob(root, "settings/lint/stylelint/stylelint.js")),
                src: vec![glob(root, "static/src/sass/**/*.scss")],
                dest: glob(root, "static/src/sass"),
            },
            static_settings: SassStatic {
                file_name: SASS_STATIC_FILE_NAME.to_owned(),
                data: sass_static_data,
                dest: glob(root, "static/src/sass/components/common"),
            },
        };

        let pug = TaskPaths {
            build: BuildPaths {
                src: vec![glob(root, "views/**/*.pug")],
                dest: glob(root, "static/dist/html"),
            },
            lint: LintPaths {
                rule: None,
                src: vec![glob(root, "views/**/*.pug")],
                dest: glob(root, "views/"),
            },
        };

        let watch = WatchConfig {
            main: glob(root, "services/src/main.rs"),
            watch: WatchPaths {
                src: std::iter::once(glob(root, "services/src/**/*.rs"))
                    .chain(pug.lint.src.iter().cloned())
                    .collect(),
                ignore: Vec::new(),
            },
        };

        Self {
            project_root,
            js,
            sass,
            pug,
            browserlist,
            sourcemaps: SourcemapsConfig {
                dest: ".".to_owned(),
            },
            watch,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn js(&self) -> &JsConfig {
        &self.js
    }

    pub fn sass(&self) -> &SassConfig {
        &self.sass
    }

    pub fn pug(&self) -> &TaskPaths {
        &self.pug
    }

    pub fn browserlist(&self) -> &[String] {
        &self.browserlist
    }

    pub fn sourcemaps(&self) -> &SourcemapsConfig {
        &self.sourcemaps
    }

    pub fn watch(&self) -> &WatchConfig {
        &self.watch
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
