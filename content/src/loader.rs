use serde::de::DeserializeOwned;

use crate::model::{Blog, Collection, Experience, Project, Skill};
use crate::source::{ContentSource, Error, Result};
use crate::state::{LoadFailure, ViewState};

/// Fetch and decode a single collection.
pub async fn fetch_collection<T, S>(source: &S, collection: Collection) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: ContentSource,
{
    let body = source.fetch(collection).await?;
    serde_json::from_str(&body).map_err(|error| Error::Decode {
        collection,
        error: error.to_string(),
    })
}

/// Load every collection concurrently and wait for all of them to settle.
///
/// This never fails: a collection that could not be loaded is left empty and
/// listed in [`ViewState::failures`]. The returned state is never loading.
pub async fn load<S: ContentSource>(source: &S) -> ViewState {
    let (projects, blogs, skills, experience) = tokio::join!(
        fetch_collection::<Project, _>(source, Collection::Projects),
        fetch_collection::<Blog, _>(source, Collection::Blogs),
        fetch_collection::<Skill, _>(source, Collection::Skills),
        fetch_collection::<Experience, _>(source, Collection::Experience),
    );

    let mut failures = vec![];
    let state = ViewState {
        projects: settle(projects, &mut failures),
        blogs: settle(blogs, &mut failures),
        skills: settle(skills, &mut failures),
        experience: settle(experience, &mut failures),
        is_loading: false,
        failures,
    };
    if state.failures.is_empty() {
        log::info!(
            "loaded {} projects, {} blog posts, {} skills and {} experience records",
            state.projects.len(),
            state.blogs.len(),
            state.skills.len(),
            state.experience.len(),
        );
    }

    state
}

fn settle<T>(result: Result<Vec<T>>, failures: &mut Vec<LoadFailure>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(error) => {
            log::warn!("{}", error);
            failures.push(LoadFailure {
                collection: error.collection(),
                reason: error.to_string(),
            });
            vec![]
        }
    }
}
