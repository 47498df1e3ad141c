#[cfg(feature = "ssr")]
pub mod errors;
mod project;
mod query;

#[cfg(feature = "ssr")]
pub use errors::{Error, Result};
pub use project::{Project, Stats};
pub use query::{HomePageQuery, ProjectConnection, ProjectEdge, TOP_PROJECTS_LIMIT};

/// Directory of project files, one YAML document per project.
#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct Store {
    path: std::path::PathBuf,
    is_running_in_prod: bool,
}

#[cfg(feature = "ssr")]
impl Store {
    pub fn new(path: std::path::PathBuf, is_running_in_prod: bool) -> Self {
        Self {
            path,
            is_running_in_prod,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.path.as_path()
    }

    pub fn projects(&self) -> Result<Vec<Project>> {
        let mut projects = vec![];

        let directory = self.path.read_dir().map_err(|error| Error::IO {
            error,
            path: self.path.clone(),
        })?;
        for entry in directory {
            let entry = entry.map_err(|error| Error::IO {
                error,
                path: self.path.clone(),
            })?;
            let path = entry.path();
            if entry.file_name().to_str().is_none() {
                log::warn!("Invalid utf-8 filename in the store: {:?}", entry.file_name());
                continue;
            }
            match path.extension().and_then(|extension| extension.to_str()) {
                Some("yml") | Some("yaml") => (),
                _ => continue,
            }
            let project = match Project::read(&path) {
                Ok(project) => project,
                Err(error) => {
                    log::warn!("Skipping project: {}", error);
                    continue;
                }
            };
            if self.is_running_in_prod && project.draft {
                log::info!("Skipping draft project \"{}\"", project.slug);
                continue;
            }
            projects.push(project);
        }

        log::info!("Read {} projects from {:?}", projects.len(), self.path);
        Ok(projects)
    }

    /// Projects with the most commits first, ties broken by slug.
    pub fn top_projects(&self, limit: usize) -> Result<Vec<Project>> {
        let mut projects = self.projects()?;
        projects.sort_by(|lhs, rhs| {
            rhs.stats
                .commits
                .cmp(&lhs.stats.commits)
                .then_with(|| lhs.slug.cmp(&rhs.slug))
        });
        projects.truncate(limit);
        Ok(projects)
    }

    pub fn home_page_query(&self) -> Result<HomePageQuery> {
        self.top_projects(TOP_PROJECTS_LIMIT).map(HomePageQuery::from)
    }
}
