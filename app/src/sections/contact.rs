use content::Section;
use leptos::prelude::*;

use crate::sections::{EMAIL, GITHUB_URL, LINKEDIN_URL};

const SERVICES: [(&str, &str); 3] = [
    (
        "PLM/PDM Solutions",
        "Autodesk Vault customization, migration strategies, and system optimization",
    ),
    (
        "Process Automation",
        "Custom scripts, workflow automation, and digital transformation",
    ),
    (
        "Full-Stack Development",
        "Web applications, dashboards, and integration solutions",
    ),
];

#[component]
pub fn Contact() -> impl IntoView {
    let mailto = format!("mailto:{EMAIL}");
    view! {
        <section id=Section::Contact.id() class="contact">
            <h2>"Let's Build Something Amazing"</h2>
            <p class="pitch">
                "Ready to transform your engineering processes? Whether you need PLM/PDM consultation, custom automation solutions, or full-stack development, I'm here to help."
            </p>
            <ul class="contact-links">
                <li><a href=mailto>"Email Me"</a></li>
                <li><a href=LINKEDIN_URL>"LinkedIn"</a></li>
                <li><a href=GITHUB_URL>"GitHub"</a></li>
            </ul>
            <div class="services">
                <h3>"What I Can Help With"</h3>
                <div class="service-grid">
                    {SERVICES
                        .into_iter()
                        .map(|(title, description)| {
                            view! {
                                <div>
                                    <h4>{title}</h4>
                                    <p>{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
