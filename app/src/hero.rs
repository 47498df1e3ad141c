use leptos::prelude::*;
use leptos_meta::Body;

use crate::content::{CLOSE_ICON, PLAY_BUTTON, VIDEO_PLACEHOLDER};

pub const VIDEO_EMBED_URL: &str =
    "https://www.youtube-nocookie.com/embed/7wnav6Fu9T0?showinfo=0&modestbranding=1&rel=0&controls=0";
pub const VIDEO_ACTIVE_BODY_CLASS: &str = "hero-video-active";

/// Whether the hero video overlay is open (and playing).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeroVideoState {
    active: bool,
}

impl HeroVideoState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn open(&mut self) {
        self.active = true;
    }

    pub fn close(&mut self) {
        self.active = false;
    }

    pub fn embed_url(&self) -> String {
        if self.active {
            format!("{}&autoplay=1", VIDEO_EMBED_URL)
        } else {
            String::from(VIDEO_EMBED_URL)
        }
    }

    pub fn body_class(&self) -> &'static str {
        if self.active {
            VIDEO_ACTIVE_BODY_CLASS
        } else {
            ""
        }
    }
}

/// Heading, copy and the click-to-play video poster.
#[component]
pub fn Hero() -> impl IntoView {
    let video = RwSignal::new(HeroVideoState::default());

    view! {
        <Body {..} class=move || video.get().body_class() />
        <div class="hero-container">
            <div class="homepage-hero-copy">
                <h2 class="homepage-hero-heading">"The future of observability is open."</h2>
                <p class="homepage-hero-body-copy">
                    "New Relic \u{2764}\u{fe0f}'s open source. We "
                    <a href="https://github.com/newrelic/opensource-website">"built"</a>
                    " this site to make it easy for " <em>"you"</em> " to "
                    <a href="/explore-projects">"explore hundreds of projects"</a>
                    " we're maintaining as well as our involvement in "
                    <a href="/open-standards">"open standards"</a>
                    ", working in " <strong>"open"</strong>
                    " to deliver on the promise of a more perfect Internet together. "
                    <a href="/blog">"Learn more"</a> "."
                </p>
            </div>
            <div
                class="homepage-hero-video"
                style=format!("background-image: url({})", VIDEO_PLACEHOLDER)
                on:click=move |_| video.update(HeroVideoState::open)
            >
                <img
                    src=CLOSE_ICON
                    alt="close icon"
                    class="modal-close-button"
                    // The icon sits inside the poster, whose handler would reopen the video.
                    on:click=move |ev| {
                        ev.stop_propagation();
                        video.update(HeroVideoState::close);
                    }
                />
                <img src=PLAY_BUTTON alt="play video" class="play-button" />
                <div class="iframe-container">
                    <iframe
                        class="hero-video-iframe"
                        width="1000"
                        height="562.704471"
                        src=move || video.get().embed_url()
                        allow="accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture"
                    ></iframe>
                </div>
            </div>
        </div>
        <div class="video-modal-overlay" on:click=move |_| video.update(HeroVideoState::close)></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive_without_autoplay() {
        let state = HeroVideoState::default();
        assert!(!state.is_active());
        assert!(!state.embed_url().contains("autoplay"));
        assert_eq!("", state.body_class());
    }

    #[test]
    fn open_then_close() {
        let mut state = HeroVideoState::default();
        state.open();
        assert!(state.is_active());
        assert!(state.embed_url().ends_with("&autoplay=1"));
        assert!(state.embed_url().starts_with(VIDEO_EMBED_URL));
        assert_eq!(VIDEO_ACTIVE_BODY_CLASS, state.body_class());

        state.close();
        assert!(!state.is_active());
        assert_eq!(VIDEO_EMBED_URL, state.embed_url());
    }

    #[test]
    fn repeated_clicks_are_idempotent() {
        let mut state = HeroVideoState::default();
        state.open();
        state.open();
        assert!(state.is_active());
        state.close();
        state.close();
        assert!(!state.is_active());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn renders_inactive_video_without_autoplay() {
        Owner::new().with(|| {
            leptos_meta::provide_meta_context();
            let html = view! { <Hero/> }.to_html();
            let src = VIDEO_EMBED_URL.replace('&', "&amp;");
            assert!(html.contains(&format!("src=\"{}\"", src)), "{html}");
            assert!(!html.contains("autoplay=1"));
            assert!(html.contains("class=\"video-modal-overlay\""));
        });
    }
}
