use chrono::Datelike;
use content::Section;
use leptos::prelude::*;

use crate::navigation::Navigation;
use crate::sections::OWNER_NAME;

#[component]
pub fn NavBar(navigation: Navigation) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="brand">{OWNER_NAME}</div>
            <ul>
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li>
                                <button
                                    class:active=move || navigation.with(|n| n.active() == section)
                                    on:click=move |_| navigation.update(|n| n.navigate(section))
                                >
                                    {section.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
pub fn Spinner(label: &'static str) -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <div class="spinner"></div>
            <p>{label}</p>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();
    view! {
        <footer>
            <p>
                {format!("\u{a9} 2015-{year} {OWNER_NAME}. All rights reserved.")}<br/>
                "Built with Rust and Leptos."<br/>
                {format!("This site and its content are the property of {OWNER_NAME}.")}
            </p>
        </footer>
    }
}
