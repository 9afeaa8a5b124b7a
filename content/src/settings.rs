use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_CONTENT_URL: &str = "https://anirudrachoudhury.vercel.app/api";
pub const DEFAULT_FIXTURE_DELAY: Duration = Duration::from_millis(1000);
/// Prefix the site is published under in production.
pub const PROD_BASE_PATH: &str = "/MyPortFolio";

/// Where the page content comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentMode {
    Remote { base_url: String },
    /// Embedded records, served after a simulated delay (demo builds).
    Fixtures { delay: Duration },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub content: ContentMode,
    /// Prepended to static asset urls, empty or starting with a `/`.
    pub base_path: String,
}

impl Settings {
    /// Read the settings from `FOLIO_*` environment variables.
    pub fn from_env(is_running_in_prod: bool) -> Result<Self> {
        Self::from_lookup(is_running_in_prod, |key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(is_running_in_prod: bool, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = lookup("FOLIO_CONTENT_MODE").unwrap_or_else(|| String::from("remote"));
        let content = match mode.trim() {
            "remote" => ContentMode::Remote {
                base_url: lookup("FOLIO_CONTENT_URL")
                    .unwrap_or_else(|| String::from(DEFAULT_CONTENT_URL)),
            },
            "fixtures" => ContentMode::Fixtures {
                delay: match lookup("FOLIO_FIXTURE_DELAY_MS") {
                    Some(value) => value
                        .trim()
                        .parse::<u64>()
                        .map(Duration::from_millis)
                        .with_context(|| {
                            format!("FOLIO_FIXTURE_DELAY_MS must be a number of milliseconds, got `{value}'")
                        })?,
                    None => DEFAULT_FIXTURE_DELAY,
                },
            },
            other => anyhow::bail!("FOLIO_CONTENT_MODE must be `remote' or `fixtures', got `{other}'"),
        };

        let base_path = match lookup("FOLIO_BASE_PATH") {
            Some(value) => normalize_base_path(&value),
            None if is_running_in_prod => String::from(PROD_BASE_PATH),
            None => String::new(),
        };

        Ok(Self { content, base_path })
    }

    pub fn asset_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_path, path.trim_start_matches('/'))
    }
}

fn normalize_base_path(value: &str) -> String {
    let trimmed = value.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
