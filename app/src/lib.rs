pub mod components;
#[cfg(feature = "ssr")]
pub mod context;
pub mod navigation;
pub mod pages;
pub mod sections;

use content::settings::Settings;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment,
};

pub const PAGE_TITLE: &str = "Anirudra Choudhury | Engineering Automation | Solution Architect";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Only the pages rendered through the app routes get the settings, error
    // pages fall back to serving assets from the root.
    let base_path = use_context::<Settings>()
        .map(|settings| settings.base_path)
        .unwrap_or_default();
    let stylesheet = format!(
        "{}/{}/{}.css",
        base_path, options.site_pkg_dir, options.output_name
    );

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Solution Architect specializing in PLM/PDM systems, automation, and digital transformation."/>
                // id=leptos means cargo-leptos will hot-reload this stylesheet
                <link id="leptos" rel="stylesheet" href=stylesheet/>
                <AutoReload options=options.clone() />
                <HydrationScripts options root=base_path/>
                <MetaTags/>
            </head>
            <body>
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
        <Title text=PAGE_TITLE/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                // Out of order streaming: the page shell and its spinners go
                // out first, each section is streamed in once content loaded.
                <Route
                    path=StaticSegment("")
                    view=pages::home::Index
                    ssr=SsrMode::OutOfOrder
                />
            </Routes>
        </Router>
    }
}
