use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "ssr")]
use crate::store::{Error, Result};
#[cfg(feature = "ssr")]
use std::path::{Path, PathBuf};

/// A project as shown on the homepage, either from the curated static list or
/// from one of the store's YAML files.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub draft: bool,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default)]
    pub commits: u64,
    #[serde(default)]
    pub contributors: u64,
    #[serde(default)]
    pub releases: u64,
    #[serde(
        default,
        deserialize_with = "naive_date_from_str",
        serialize_with = "naive_date_to_str"
    )]
    pub last_commit: Option<chrono::NaiveDate>,
}

fn naive_date_from_str<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<chrono::NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    match s.as_deref() {
        None | Some("null") => Ok(None),
        Some(s) => chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn naive_date_to_str<S>(
    dt: &Option<chrono::NaiveDate>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(v) => serializer.serialize_str(v.format("%Y-%m-%d").to_string().as_str()),
        None => serializer.serialize_none(),
    }
}

#[cfg(feature = "ssr")]
impl Project {
    /// Read a project from a YAML file, the slug comes from the file name.
    pub fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|error| Error::IO {
            error,
            path: PathBuf::from(path),
        })?;
        Self::parse(&contents, path)
    }

    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        let mut project: Self =
            serde_yml::from_str(contents).map_err(|error| Error::Deserialize {
                error: format!("project is not valid YAML: {}", error),
                path: PathBuf::from(path),
            })?;

        let file_stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| Error::Deserialize {
                error: String::from("invalid utf-8 file name"),
                path: PathBuf::from(path),
            })?;
        project.slug = slug::slugify(file_stem);
        if project.link.is_none() {
            project.link = Some(format!("/projects/{}", project.slug));
        }

        Ok(project)
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn parse_fills_slug_and_link() {
        let yaml = "title: Nerd Graph Explorer\n\
                    description: Poke at the API.\n\
                    stats:\n  commits: 12\n  lastCommit: 2020-05-04\n";
        let project = Project::parse(yaml, Path::new("projects/Nerd_Graph Explorer.yml")).unwrap();
        assert_eq!("nerd-graph-explorer", project.slug);
        assert_eq!(Some("/projects/nerd-graph-explorer"), project.link.as_deref());
        assert_eq!(12, project.stats.commits);
        assert_eq!(chrono::NaiveDate::from_ymd_opt(2020, 5, 4), project.stats.last_commit);
        assert!(!project.draft);
    }

    #[test]
    fn parse_keeps_explicit_link() {
        let yaml = "title: CLI\ndescription: A CLI.\nlink: /cli\nstats:\n  lastCommit: null\n";
        let project = Project::parse(yaml, Path::new("cli.yaml")).unwrap();
        assert_eq!(Some("/cli"), project.link.as_deref());
        assert_eq!(None, project.stats.last_commit);
    }

    #[test]
    fn parse_rejects_bad_date() {
        let yaml = "title: CLI\ndescription: A CLI.\nstats:\n  lastCommit: yesterday\n";
        let error = Project::parse(yaml, Path::new("cli.yml")).unwrap_err();
        assert!(matches!(error, Error::Deserialize { .. }));
    }
}
