//! Build metadata embedded by `build.rs`.

use crate::config::Env;

pub const BUILD_DATE: &str = env!("BUILD_DATE");
pub const BUILD_COMMIT: &str = env!("BUILD_COMMIT");
pub const BUILD_BRANCH: &str = env!("BUILD_BRANCH");

/// Value of the `x-service-version` header.
///
/// - Prod: `stable:{version}`
/// - Test/Local: `main:{commit}`
pub fn version_label(env: &Env) -> String {
    match env {
        Env::Prod => format!("stable:{}", env!("CARGO_PKG_VERSION")),
        Env::Test | Env::Local => format!("main:{BUILD_COMMIT}"),
    }
}
