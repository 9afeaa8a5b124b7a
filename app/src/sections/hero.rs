use content::Section;
use leptos::prelude::*;

use crate::navigation::Navigation;

const SPECIALTIES: [(&str, &str); 3] = [
    ("cog", "Autodesk Vault Expert"),
    ("code", "Full-Stack Developer"),
    ("database", "PLM/PDM Specialist"),
];

#[component]
pub fn Hero(navigation: Navigation) -> impl IntoView {
    view! {
        <section id=Section::Home.id() class="hero">
            <div class="hero-content">
                <h1>"Engineering" <br/> <span class="accent">"Automation"</span></h1>
                <p class="tagline">
                    "Solution Architect specializing in PLM/PDM systems, automation, and digital transformation."
                    <br/>
                    <span class="highlight">"Turning manual workflows into self-running systems."</span>
                </p>
                <ul class="specialties">
                    {SPECIALTIES
                        .into_iter()
                        .map(|(icon, name)| view! { <li class=format!("badge badge-{icon}")>{name}</li> })
                        .collect_view()}
                </ul>
                <div class="actions">
                    <button
                        class="primary"
                        on:click=move |_| navigation.update(|n| n.navigate(Section::Projects))
                    >
                        "View Projects" <span class="arrow">{"\u{2192}"}</span>
                    </button>
                    <button
                        class="secondary"
                        on:click=move |_| navigation.update(|n| n.navigate(Section::Contact))
                    >
                        "Get In Touch"
                    </button>
                </div>
            </div>
            <div class="scroll-hint" aria-hidden="true">{"\u{2304}"}</div>
        </section>
    }
}
