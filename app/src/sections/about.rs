use content::{display::skill_bar_width, Skill};
use leptos::prelude::*;

#[component]
pub fn AboutText() -> impl IntoView {
    view! {
        <div class="about-columns">
            <div>
                <h3>"Engineering Background"</h3>
                <p>
                    "Started as a mechanical engineer with a passion for automation. From designing utensil polishing machines to building complex PLM systems, I've always looked for ways to make processes more efficient."
                </p>
                <p>
                    "My journey combines hands-on mechanical design experience with modern software development, giving me a deep understanding of both engineering workflows and the technology needed to optimize them."
                </p>
            </div>
            <div>
                <h3>"Technical Evolution"</h3>
                <p>
                    "Evolved from Excel macros and VBA scripts to building full-stack applications. Specialized in Autodesk Vault customization, having automated migrations of 3000+ parts and built enterprise-grade monitoring systems."
                </p>
                <p>
                    "Currently working as a Solution Architect, helping organizations transform their engineering processes through intelligent automation and modern PLM/PDM implementations."
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn SkillGrid(skills: Vec<Skill>) -> impl IntoView {
    view! {
        <div class="skill-grid">
            {skills
                .into_iter()
                .map(|skill| {
                    let width = format!("width: {}%", skill_bar_width(skill.level));
                    view! {
                        <div class="skill-card">
                            <div class="skill-header">
                                <span class="skill-name">{skill.name}</span>
                                <span class="skill-category">{skill.category}</span>
                            </div>
                            <div class="skill-track">
                                <div class="skill-bar" style=width></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
