pub mod errors;
mod fixtures;
mod remote;

pub use errors::{Error, Result};
pub use fixtures::FixtureSource;
pub use remote::RemoteSource;

use std::future::Future;

use crate::model::Collection;
use crate::settings::{ContentMode, Settings};

/// Somewhere the four collections can be read from.
///
/// A source hands back the raw JSON body of a collection, decoding is left
/// to the loader so every source fails the same way on bad records.
pub trait ContentSource {
    fn fetch(&self, collection: Collection) -> impl Future<Output = Result<String>> + Send;
}

/// The source picked by the settings.
#[derive(Clone, Debug)]
pub enum Source {
    Remote(RemoteSource),
    Fixtures(FixtureSource),
}

impl Source {
    pub fn from_settings(settings: &Settings) -> Self {
        match &settings.content {
            ContentMode::Remote { base_url } => Source::Remote(RemoteSource::new(base_url)),
            ContentMode::Fixtures { delay } => Source::Fixtures(FixtureSource::new(*delay)),
        }
    }
}

impl ContentSource for Source {
    async fn fetch(&self, collection: Collection) -> Result<String> {
        match self {
            Source::Remote(source) => source.fetch(collection).await,
            Source::Fixtures(source) => source.fetch(collection).await,
        }
    }
}
