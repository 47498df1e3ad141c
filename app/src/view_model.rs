use crate::content::PLACEHOLDER_PROJECT_ICON;
use crate::store::{HomePageQuery, Project};

/// Flatten the query result into the internal project list, every project
/// getting the placeholder icon. A missing result gives an empty list.
pub fn internal_projects(data: Option<HomePageQuery>) -> Vec<Project> {
    let mut projects: Vec<Project> = data
        .and_then(|data| data.top_projects)
        .map(|connection| connection.edges.into_iter().map(|edge| edge.node).collect())
        .unwrap_or_default();
    for project in projects.iter_mut() {
        project.icon_url = Some(String::from(PLACEHOLDER_PROJECT_ICON));
    }
    log::debug!("internal projects: {:?}", projects);
    projects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{external_projects, recent_articles};

    fn project(title: &str, commits: u64) -> Project {
        let mut project = Project {
            title: String::from(title),
            description: format!("{title} description"),
            icon_url: Some(String::from("/images/own-icon.svg")),
            ..Default::default()
        };
        project.stats.commits = commits;
        project
    }

    #[test]
    fn keeps_order_and_sets_placeholder_icon() {
        let data = HomePageQuery::from(vec![project("A", 10), project("B", 5)]);
        let projects = internal_projects(Some(data));
        assert_eq!(2, projects.len());
        assert_eq!("A", projects[0].title);
        assert_eq!("B", projects[1].title);
        for project in &projects {
            assert_eq!(Some(PLACEHOLDER_PROJECT_ICON), project.icon_url.as_deref());
        }
    }

    #[test]
    fn length_follows_the_query() {
        for n in 0..=8 {
            let nodes: Vec<Project> = (0..n).map(|i| project(&format!("p{i}"), i)).collect();
            let projects = internal_projects(Some(HomePageQuery::from(nodes)));
            assert_eq!(n as usize, projects.len());
            assert!(projects
                .iter()
                .all(|p| p.icon_url.as_deref() == Some(PLACEHOLDER_PROJECT_ICON)));
        }
    }

    #[test]
    fn absent_query_gives_empty_list() {
        assert!(internal_projects(None).is_empty());
        assert!(internal_projects(Some(HomePageQuery::default())).is_empty());
    }

    #[test]
    fn malformed_query_gives_empty_list() {
        for json in [
            r#"{}"#,
            r#"{"topProjects": null}"#,
            r#"{"topProjects": {}}"#,
            r#"{"topProjects": {"edges": 3}}"#,
            r#"{"topProjects": {"edges": [{"node": {"title": 1}}]}}"#,
            r#"[]"#,
        ] {
            let data = serde_json::from_str::<HomePageQuery>(json).ok();
            assert!(internal_projects(data).is_empty(), "{json}");
        }
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let json = r#"{"topProjects": {"edges": [
            {"node": {"title": "A", "description": "a", "githubUrl": "https://github.com/a",
                      "stats": {"commits": 3, "lastCommit": "2020-04-01"}}}
        ]}}"#;
        let data: HomePageQuery = serde_json::from_str(json).unwrap();
        let projects = internal_projects(Some(data));
        assert_eq!(1, projects.len());
        assert_eq!(Some("https://github.com/a"), projects[0].github_url.as_deref());
        assert_eq!(3, projects[0].stats.commits);
    }

    #[test]
    fn static_lists_ignore_the_query() {
        let _ = internal_projects(Some(HomePageQuery::from(vec![project("A", 1)])));
        assert_eq!(3, external_projects().len());
        assert_eq!(3, recent_articles().len());
    }
}
