use serde::{Deserialize, Serialize};

use crate::model::{Blog, Collection, Experience, Project, Skill};

/// Everything the page shows for one visit.
///
/// A fresh view starts from [`ViewState::loading`], the loader then hands
/// back a complete snapshot with `is_loading` cleared. Collections are only
/// ever replaced as a whole.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub projects: Vec<Project>,
    pub blogs: Vec<Blog>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    /// Sections render their spinner instead of records while set.
    pub is_loading: bool,
    /// One entry per collection that could not be loaded. Never shown to the
    /// visitor, the matching section just stays empty.
    pub failures: Vec<LoadFailure>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct LoadFailure {
    pub collection: Collection,
    pub reason: String,
}

impl ViewState {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    /// A settled state where nothing could be loaded at all, e.g. when the
    /// loader itself was unreachable.
    pub fn unavailable(reason: &str) -> Self {
        Self {
            failures: Collection::ALL
                .into_iter()
                .map(|collection| LoadFailure {
                    collection,
                    reason: String::from(reason),
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Projects => self.projects.len(),
            Collection::Blogs => self.blogs.len(),
            Collection::Skills => self.skills.len(),
            Collection::Experience => self.experience.len(),
        }
    }

    pub fn has_failed(&self, collection: Collection) -> bool {
        self.failures
            .iter()
            .any(|failure| failure.collection == collection)
    }
}
