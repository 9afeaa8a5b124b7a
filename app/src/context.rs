use content::{settings::Settings, Source};
use leptos::prelude::LeptosOptions;

#[derive(Clone, Debug)]
pub struct Context {
    pub leptos_options: LeptosOptions,
    pub settings: Settings,
    pub source: Source,
}

impl Context {
    pub fn new(leptos_options: LeptosOptions, settings: Settings) -> Self {
        let source = Source::from_settings(&settings);
        Self {
            leptos_options,
            settings,
            source,
        }
    }

    /// Make the settings and the content source reachable from components
    /// and server functions.
    pub fn provide(&self) {
        leptos::prelude::provide_context(self.settings.clone());
        leptos::prelude::provide_context(self.source.clone());
    }
}

// Looks like we could use `derive(FromRef)` on `Context` if we enabled the macros feature on axum.
impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}
