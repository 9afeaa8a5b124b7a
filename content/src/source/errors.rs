use crate::model::Collection;

/// A content-fetch failure, the only error the loader knows about.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Could not fetch {collection}: {error}")]
    Transport { collection: Collection, error: String },

    #[error("Could not fetch {collection}: endpoint answered with status {status}")]
    Status { collection: Collection, status: u16 },

    #[error("Could not decode {collection}: {error}")]
    Decode { collection: Collection, error: String },
}

impl Error {
    pub fn collection(&self) -> Collection {
        match self {
            Error::Transport { collection, .. }
            | Error::Status { collection, .. }
            | Error::Decode { collection, .. } => *collection,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
