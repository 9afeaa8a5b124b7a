use content::Experience;
use leptos::prelude::*;

#[component]
pub fn ExperienceTimeline(experience: Vec<Experience>) -> impl IntoView {
    view! {
        <div class="timeline">
            {experience
                .into_iter()
                .map(|entry| {
                    view! {
                        <article class="experience-card">
                            <header>
                                <div>
                                    <h3>{entry.role}</h3>
                                    <span class="company">{entry.company}</span>
                                    <span class="location">{entry.location}</span>
                                </div>
                                // free text, e.g. "2019 - Present"
                                <span class="period">{entry.period}</span>
                            </header>
                            <ul class="highlights">
                                {entry
                                    .highlights
                                    .into_iter()
                                    .map(|highlight| view! { <li class="highlight">{highlight}</li> })
                                    .collect_view()}
                            </ul>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}
