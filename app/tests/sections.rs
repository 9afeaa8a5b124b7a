#![cfg(feature = "ssr")]

use app::sections::{BlogList, ExperienceTimeline, ProjectGrid, SkillGrid};
use content::{Blog, Experience, Project, Skill};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

fn project(id: i64, title: &str) -> Project {
    Project {
        id,
        title: String::from(title),
        description: String::from("d"),
        technologies: vec![String::from("A"), String::from("B")],
        category: String::from("Backend"),
        impact: String::from("none"),
        year: String::from("2023"),
        url: String::from("#"),
    }
}

fn skill(name: &str, level: i32) -> Skill {
    Skill {
        name: String::from(name),
        level,
        category: String::from("Lang"),
    }
}

#[test]
fn one_card_per_project_in_received_order() {
    let projects = vec![project(7, "Vault Migrator"), project(3, "Job Monitor")];
    let html = view! { <ProjectGrid projects /> }.to_html();

    assert_eq!(html.matches(r#"class="project-card""#).count(), 2);
    let first = html.find("Vault Migrator").unwrap();
    let second = html.find("Job Monitor").unwrap();
    assert!(first < second);
    assert!(html.contains(r#"aria-label="Open Vault Migrator project""#));
    assert!(html.contains(r#"rel="noopener noreferrer""#));
}

#[test]
fn single_project_titled_x() {
    let html = view! { <ProjectGrid projects=vec![project(1, "X")] /> }.to_html();
    assert_eq!(html.matches(r#"class="project-card""#).count(), 1);
    assert!(html.contains(">X<"));
    assert!(html.contains("Impact: "));
}

#[test]
fn empty_collections_render_no_items() {
    let projects = view! { <ProjectGrid projects=vec![] /> }.to_html();
    let blogs = view! { <BlogList blogs=vec![] /> }.to_html();
    let skills = view! { <SkillGrid skills=vec![] /> }.to_html();
    let experience = view! { <ExperienceTimeline experience=vec![] /> }.to_html();

    assert!(!projects.contains("project-card"));
    assert!(!blogs.contains("blog-card"));
    assert!(!skills.contains("skill-card"));
    assert!(!experience.contains("experience-card"));
}

#[test]
fn skill_bars_follow_the_level() {
    let skills = vec![skill("None", 0), skill("Some", 45), skill("All", 100), skill("Too much", 140)];
    let html = view! { <SkillGrid skills /> }.to_html();

    assert_eq!(html.matches(r#"class="skill-card""#).count(), 4);
    assert!(html.contains("width: 0%"));
    assert!(html.contains("width: 45%"));
    assert_eq!(html.matches("width: 100%").count(), 2);
    assert!(!html.contains("width: 140%"));
}

#[test]
fn blog_rows_show_a_readable_date() {
    let blogs = vec![
        Blog {
            id: 2,
            title: String::from("Newer"),
            url: String::from("/newer"),
            date: String::from("2024-03-04"),
            description: String::from("n"),
        },
        Blog {
            id: 1,
            title: String::from("Older"),
            url: String::from("/older"),
            date: String::from("not a date"),
            description: String::from("o"),
        },
    ];
    let html = view! { <BlogList blogs /> }.to_html();

    assert_eq!(html.matches(r#"class="blog-card""#).count(), 2);
    assert!(html.find("Newer").unwrap() < html.find("Older").unwrap());
    assert!(html.contains("Mar 4, 2024"));
    assert!(html.contains("not a date"));
}

#[test]
fn experience_lists_every_highlight() {
    let experience = vec![Experience {
        company: String::from("Acme"),
        role: String::from("Engineer"),
        period: String::from("2020 - Present"),
        location: String::from("Remote"),
        highlights: vec![String::from("one"), String::from("two"), String::from("three")],
    }];
    let html = view! { <ExperienceTimeline experience /> }.to_html();

    assert_eq!(html.matches(r#"class="experience-card""#).count(), 1);
    assert_eq!(html.matches(r#"class="highlight""#).count(), 3);
    assert!(html.contains("2020 - Present"));
}
