use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::{ArticlePreviews, Footer, HomePageHighlights, HomePageInternalProjects, NavBar};
use crate::content;
use crate::hero::Hero;
use crate::store;
use crate::view_model;

#[component]
pub fn Index() -> impl IntoView {
    let data = Resource::new_blocking(|| (), move |_| async { get_home_page_data().await });

    view! {
        <Title text="Home" />
        <NavBar />
        <main class="home full-width">
            <Hero />

            <HomePageHighlights data=content::external_projects() />

            <div class="featured-internal-projects-container">
                <h3 class="featured-internal-projects-section-title">"Explore projects"</h3>
                <p class="featured-internal-projects-section-description">
                    "Check out some of the products that we\u{2019}re developing in open source or "
                    <A href="/explore-projects">"view all projects"</A>
                </p>
                {move || match data.get() {
                    None => leptos::either::Either::Left(view! { <p>{"Loading…"}</p> }),
                    Some(result) => {
                        let data = result
                            .inspect_err(|err| log::warn!("Could not load the top projects: {}", err))
                            .ok();
                        leptos::either::Either::Right(view! {
                            <HomePageInternalProjects data=view_model::internal_projects(data) />
                        })
                    }
                }}
            </div>

            <div class="recent-articles-container">
                <h3 class="recent-articles-section-title">"Recent articles"</h3>
                <p class="recent-articles-section-description">
                    "Aenean eu leo quam. Pellentesque ornare sem lacinia quam or "
                    <A href="/blog">"view more articles"</A>
                </p>
                <ArticlePreviews articles=content::recent_articles() />
            </div>
        </main>
        <Footer />
    }
}

#[server(prefix = "/api", endpoint = "home")]
pub async fn get_home_page_data() -> Result<store::HomePageQuery, ServerFnError> {
    let Some(store) = use_context::<store::Store>() else {
        return Err(ServerFnError::ServerError(String::from(
            "project store missing from the context",
        )));
    };
    store
        .home_page_query()
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}
