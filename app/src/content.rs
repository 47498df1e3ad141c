//! Hardcoded homepage content: the flagship external projects and the recent
//! articles. Neither list depends on the project store.

use serde::{Deserialize, Serialize};

use crate::store::Project;

pub const OPEN_TELEMETRY_ICON: &str = "/images/open-telemetry-icon.svg";
pub const FREE_CODE_CAMP_ICON: &str = "/images/free-code-camp-icon.svg";
pub const TENSOR_FLOW_ICON: &str = "/images/tensor-flow-icon.svg";
/// Shared icon for every project coming from the store.
pub const PLACEHOLDER_PROJECT_ICON: &str = "/images/page-heading-icon-placeholder.svg";
pub const ARTICLE_PLACEHOLDER_IMAGES: [&str; 3] = [
    "/images/article-placeholder-image-1.svg",
    "/images/article-placeholder-image-2.svg",
    "/images/article-placeholder-image-3.svg",
];
pub const VIDEO_PLACEHOLDER: &str = "/images/video-placeholder.svg";
pub const PLAY_BUTTON: &str = "/images/button-play.svg";
pub const CLOSE_ICON: &str = "/images/icon-close.svg";

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Article {
    pub title: String,
    pub snippet: String,
    pub featured_image: String,
}

fn external_project(
    title: &str,
    description: &str,
    icon: &str,
    link: &str,
    github_url: &str,
    website: &str,
) -> Project {
    Project {
        slug: String::new(),
        title: String::from(title),
        description: String::from(description),
        icon_url: Some(String::from(icon)),
        link: Some(String::from(link)),
        github_url: Some(String::from(github_url)),
        website: Some(String::from(website)),
        ..Default::default()
    }
}

pub fn external_projects() -> Vec<Project> {
    vec![
        external_project(
            "Open Telemetry",
            "New Relic has invested 30 billion hours into the development of Open Telemetry to help provide robust portable telemetry to all.",
            OPEN_TELEMETRY_ICON,
            "/open-telemetry",
            "https://github.com/open-telemetry",
            "https://opentelemetry.io/",
        ),
        external_project(
            "freeCodeCamp",
            "New Relic has invested 1,137,000 hours of engineering into freeCodeCamp to help provide educate the next generation engineers.",
            FREE_CODE_CAMP_ICON,
            "/#",
            "https://github.com/freeCodeCamp/freeCodeCamp",
            "https://www.freecodecamp.org/",
        ),
        external_project(
            "TensorFlow",
            "We <3 TensorFlow and plan to continue to invest at least 10,000 weekly into the maintenance of the platform to help train ml mipsums.",
            TENSOR_FLOW_ICON,
            "/#",
            "https://github.com/tensorflow",
            "https://www.tensorflow.org/",
        ),
    ]
}

pub fn recent_articles() -> Vec<Article> {
    let [first, second, third] = ARTICLE_PLACEHOLDER_IMAGES;
    vec![
        Article {
            featured_image: String::from(first),
            title: String::from("Why we invest in open source"),
            snippet: String::from("Curabitur blandit tempus porttitor. Fusce dapibus, tellus ac cursus commodo, tortor mauris condimentum nibh, ut fermentum massa justo sit amet risus. Aenean eu leo quam. Pellentesque ornare sem lacinia quam venenatis vestibulum."),
        },
        Article {
            featured_image: String::from(second),
            title: String::from("Open source in a pandemic"),
            snippet: String::from("Vestibulum id ligula porta felis euismod semper. Nullam id dolor id nibh ultricies vehicula ut id elit. Aenean eu leo quam. Pellentesque ornare sem lacinia quam venenatis vestibulum."),
        },
        Article {
            featured_image: String::from(third),
            title: String::from("Shipping around the globe"),
            snippet: String::from("Nullam id dolor id nibh ultricies vehicula ut id elit. Integer posuere erat a ante venenatis dapibus posuere velit aliquet. Nullam quis risus eget urna mollis ornare vel eu leo."),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_projects_are_the_three_flagships() {
        let titles: Vec<String> = external_projects().into_iter().map(|p| p.title).collect();
        assert_eq!(vec!["Open Telemetry", "freeCodeCamp", "TensorFlow"], titles);
        for project in external_projects() {
            assert!(project.icon_url.is_some());
            assert!(project.github_url.is_some());
            assert!(project.website.is_some());
        }
    }

    #[test]
    fn recent_articles_have_distinct_images() {
        let articles = recent_articles();
        assert_eq!(3, articles.len());
        assert_eq!("Why we invest in open source", articles[0].title);
        assert_eq!(
            ARTICLE_PLACEHOLDER_IMAGES.to_vec(),
            articles.iter().map(|a| a.featured_image.as_str()).collect::<Vec<_>>()
        );
    }
}
