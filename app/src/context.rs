use leptos::prelude::LeptosOptions;

use crate::store;

/// Axum state shared by the Leptos routes and the server function handler.
#[derive(Clone, Debug)]
pub struct Context {
    pub leptos_options: LeptosOptions,
    pub store: store::Store,
}

// `derive(FromRef)` would need axum's macros feature.
impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}
