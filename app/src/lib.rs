pub mod components;
pub mod content;
#[cfg(feature = "ssr")]
pub mod context;
pub mod hero;
pub mod pages;
pub mod store;
pub mod view_model;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Explore the open source projects New Relic maintains and contributes to, and our involvement in open standards."/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body id="top">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/showcase.css"/>

        <Title formatter=|text: String| {
            if text.is_empty() {
                String::from("New Relic Open Source")
            } else {
                format!("{} | New Relic Open Source", text)
            }
        }/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                // The top projects resolve on the server so the page ships fully rendered.
                <Route
                    path=StaticSegment("")
                    view=pages::home::Index
                    ssr=SsrMode::Async
                />
            </Routes>
        </Router>
    }
}
