use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub impact: String,
    pub year: String,
    pub url: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub url: String,
    /// ISO date as sent by the endpoint, see [`crate::display::display_date`].
    pub date: String,
    pub description: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent. Stored as received, clamped when rendered.
    /// Fractional levels are not accepted and fail the whole collection.
    pub level: i32,
    pub category: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub highlights: Vec<String>,
}

/// The four record sets, each backing one section of the page.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Blogs,
    Skills,
    Experience,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Projects,
        Collection::Blogs,
        Collection::Skills,
        Collection::Experience,
    ];

    /// Path segment of the endpoint serving this collection.
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Blogs => "blogs",
            Collection::Skills => "skills",
            Collection::Experience => "experiences",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Collection::Projects => "projects",
            Collection::Blogs => "blog posts",
            Collection::Skills => "skills",
            Collection::Experience => "experience",
        };
        f.write_str(name)
    }
}
