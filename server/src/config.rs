use std::path::PathBuf;

pub const PROJECTS_PATH_VAR: &str = "SHOWCASE_PROJECTS_PATH";
const DEFAULT_PROJECTS_PATH: &str = "data/projects";

/// Where the project store lives: the environment at run time wins over the
/// value captured at build time, then the default.
pub fn projects_path() -> PathBuf {
    resolve_projects_path(std::env::var(PROJECTS_PATH_VAR).ok())
}

fn resolve_projects_path(runtime: Option<String>) -> PathBuf {
    runtime
        .filter(|path| !path.is_empty())
        .or_else(|| option_env!("SHOWCASE_PROJECTS_PATH").map(String::from))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECTS_PATH))
}
