use crate::model::Collection;
use crate::source::{ContentSource, Error, Result};

/// Reads collections from `{base_url}/{collection}/` over HTTP.
#[derive(Clone, Debug)]
pub struct RemoteSource {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: String::from(base_url.trim_end_matches('/')),
        }
    }

    pub fn url(&self, collection: Collection) -> String {
        format!("{}/{}/", self.base_url, collection.path())
    }
}

impl ContentSource for RemoteSource {
    async fn fetch(&self, collection: Collection) -> Result<String> {
        let url = self.url(collection);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|error| Error::Transport {
                collection,
                error: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                collection,
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|error| Error::Transport {
            collection,
            error: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_keep_the_trailing_slash() {
        let source = RemoteSource::new("https://example.com/api/");
        assert_eq!(source.url(Collection::Projects), "https://example.com/api/projects/");
        assert_eq!(source.url(Collection::Experience), "https://example.com/api/experiences/");
    }
}
