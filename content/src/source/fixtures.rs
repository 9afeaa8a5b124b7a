use std::time::Duration;

use crate::model::Collection;
use crate::source::{ContentSource, Result};

const PROJECTS: &str = include_str!("../../fixtures/projects.json");
const BLOGS: &str = include_str!("../../fixtures/blogs.json");
const SKILLS: &str = include_str!("../../fixtures/skills.json");
const EXPERIENCE: &str = include_str!("../../fixtures/experiences.json");

/// Content compiled into the binary, for demos and for running without the
/// endpoints.
#[derive(Clone, Debug)]
pub struct FixtureSource {
    delay: Duration,
}

impl FixtureSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn body(collection: Collection) -> &'static str {
        match collection {
            Collection::Projects => PROJECTS,
            Collection::Blogs => BLOGS,
            Collection::Skills => SKILLS,
            Collection::Experience => EXPERIENCE,
        }
    }
}

impl ContentSource for FixtureSource {
    async fn fetch(&self, collection: Collection) -> Result<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(String::from(Self::body(collection)))
    }
}
