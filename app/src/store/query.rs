use serde::{Deserialize, Serialize};

use crate::store::Project;

/// How many projects the homepage asks the store for.
pub const TOP_PROJECTS_LIMIT: usize = 8;

/// Result of the homepage query, shaped as `{ topProjects: { edges: [{ node }] } }`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomePageQuery {
    pub top_projects: Option<ProjectConnection>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ProjectConnection {
    #[serde(default)]
    pub edges: Vec<ProjectEdge>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ProjectEdge {
    pub node: Project,
}

impl From<Vec<Project>> for HomePageQuery {
    fn from(projects: Vec<Project>) -> Self {
        let edges = projects
            .into_iter()
            .map(|node| ProjectEdge { node })
            .collect();
        Self {
            top_projects: Some(ProjectConnection { edges }),
        }
    }
}
