use content::Project;
use leptos::prelude::*;

#[component]
pub fn ProjectGrid(projects: Vec<Project>) -> impl IntoView {
    view! {
        <div class="project-grid">
            {projects
                .into_iter()
                .map(|project| {
                    let label = format!("Open {} project", project.title);
                    view! {
                        <article class="project-card">
                            <header>
                                <span class="category">{project.category}</span>
                                <span class="year">{project.year}</span>
                                <a
                                    href=project.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=label
                                >
                                    {"\u{2197}"}
                                </a>
                            </header>
                            <h3>{project.title}</h3>
                            <p>{project.description}</p>
                            <ul class="technologies">
                                {project
                                    .technologies
                                    .into_iter()
                                    .map(|technology| view! { <li>{technology}</li> })
                                    .collect_view()}
                            </ul>
                            <p class="impact">"Impact: " {project.impact}</p>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}
