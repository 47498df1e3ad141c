use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::Article;
use crate::store::Project;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li><A href="/">"Open Source"</A></li>
                <li><a href="/explore-projects">"Explore projects"</a></li>
                <li><a href="/open-standards">"Open standards"</a></li>
                <li><a href="/blog">"Blog"</a></li>
            </ul>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>
                <a href="#top"><small>"\u{2191} Copyright \u{24d2} 2020, New Relic, Inc. \u{2191}"</small></a>
            </p>
        </footer>
    }
}

fn project_links(project: &Project) -> impl IntoView {
    let github = project.github_url.clone().map(|url| {
        view! { <a class="project-link" href=url>"GitHub"</a> }
    });
    let website = project.website.clone().map(|url| {
        view! { <a class="project-link" href=url>"Website"</a> }
    });
    view! { <div class="project-links">{github}{website}</div> }
}

/// Cards for the flagship projects we contribute to but don't own.
#[component]
pub fn HomePageHighlights(data: Vec<Project>) -> impl IntoView {
    view! {
        <div class="home-page-highlights">
            {data
                .into_iter()
                .map(|project| {
                    let links = project_links(&project);
                    view! {
                        <div class="highlight">
                            <img class="highlight-icon" src=project.icon_url alt="" />
                            <h4 class="highlight-title">
                                <a href=project.link>{project.title}</a>
                            </h4>
                            <p class="highlight-description">{project.description}</p>
                            {links}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn HomePageInternalProjects(data: Vec<Project>) -> impl IntoView {
    view! {
        <div class="home-page-internal-projects">
            {data
                .into_iter()
                .map(|project| {
                    let links = project_links(&project);
                    let stats = format!(
                        "{} commits \u{b7} {} contributors",
                        project.stats.commits, project.stats.contributors,
                    );
                    view! {
                        <div class="internal-project">
                            <img class="internal-project-icon" src=project.icon_url alt="" />
                            <div class="internal-project-body">
                                <h4 class="internal-project-title">
                                    <a href=project.link>{project.title}</a>
                                </h4>
                                <p class="internal-project-description">{project.description}</p>
                                <small class="internal-project-stats">{stats}</small>
                                {links}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ArticlePreviews(articles: Vec<Article>) -> impl IntoView {
    view! {
        <div class="article-previews">
            {articles
                .into_iter()
                .map(|article| {
                    view! {
                        <article class="article-preview">
                            <img class="article-preview-image" src=article.featured_image alt="" />
                            <h4 class="article-preview-title">{article.title}</h4>
                            <p class="article-preview-snippet">{article.snippet}</p>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}
