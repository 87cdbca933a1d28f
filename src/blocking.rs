//! Blocking Runeforge client.
//!
//! Same surface as [`crate::RuneClient`] over `reqwest::blocking`, for
//! callers without an async runtime. Must not be constructed inside one.

use std::path::PathBuf;

use log::{debug, info};

use crate::cache;
use crate::catalog::{self, Catalog};
use crate::client::{RUNEFORGE_URL, USER_AGENT};
use crate::error::{Error, Result};
use crate::page;
use crate::record::BuildRecord;

/// A blocking client which fetches a champion's optimal rune pages from
/// Runeforge.
///
/// # Example
///
/// ```no_run
/// # fn run() -> lolrune::Result<()> {
/// let client = lolrune::blocking::RuneClient::new()?;
/// let builds = client.get_runes("bard")?;
/// println!("{}", builds[0].title);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RuneClient {
    http: reqwest::blocking::Client,
    catalog: Catalog,
    cache_path: Option<PathBuf>,
}

impl RuneClient {
    /// Fetch the index page and build a fresh catalog.
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::new();
        let catalog = fetch_catalog(&http)?;
        info!("constructed blocking rune client, {} champions cataloged", catalog.len());
        Ok(Self {
            http,
            catalog,
            cache_path: None,
        })
    }

    /// Build a client over an already-built catalog, skipping the initial
    /// index fetch.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            catalog,
            cache_path: None,
        }
    }

    /// Like [`RuneClient::new`], but load the catalog from `path` when a
    /// usable cache exists there, and keep the file updated on rebuilds.
    pub fn with_cache(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let http = reqwest::blocking::Client::new();
        let catalog = match cache::load(&path)? {
            Some(catalog) => {
                debug!("loaded catalog cache from {}", path.display());
                catalog
            }
            None => {
                let catalog = fetch_catalog(&http)?;
                cache::save(&path, &catalog)?;
                catalog
            }
        };
        Ok(Self {
            http,
            catalog,
            cache_path: Some(path),
        })
    }

    /// Rebuild the catalog from the live index page, build-then-swap, and
    /// rewrite a configured cache file.
    pub fn update_catalog(&mut self) -> Result<()> {
        let catalog = fetch_catalog(&self.http)?;
        self.catalog = catalog;
        if let Some(path) = &self.cache_path {
            cache::save(path, &self.catalog)?;
        }
        info!("catalog updated, {} champions", self.catalog.len());
        Ok(())
    }

    /// The current champion → detail-URL catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Fetch and parse every rune page for `champion_name`.
    ///
    /// Returns [`Error::UnknownChampion`] carrying the caller's literal
    /// input when the normalized key is absent from the catalog.
    pub fn get_runes(&self, champion_name: &str) -> Result<Vec<BuildRecord>> {
        let key = catalog::normalize_key(champion_name);
        let links = self
            .catalog
            .get(&key)
            .ok_or_else(|| Error::UnknownChampion(champion_name.to_string()))?;

        let mut builds = Vec::with_capacity(links.len());
        for link in links {
            let html = get(&self.http, link)?;
            builds.push(page::parse_build_page(&html, Some(link))?);
        }
        Ok(builds)
    }
}

fn get(http: &reqwest::blocking::Client, url: &str) -> Result<String> {
    debug!("GET {url}");
    let response = http
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::UpstreamUnavailable {
            status: status.as_u16(),
        });
    }
    Ok(response.text()?)
}

fn fetch_catalog(http: &reqwest::blocking::Client) -> Result<Catalog> {
    let html = get(http, RUNEFORGE_URL)?;
    catalog::build_catalog(&html)
}
