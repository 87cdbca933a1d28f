//! Asynchronous Runeforge client.

use std::path::PathBuf;

use log::{debug, info};

use crate::cache;
use crate::catalog::{self, Catalog};
use crate::error::{Error, Result};
use crate::page;
use crate::record::BuildRecord;

/// Index page every catalog build starts from.
pub(crate) const RUNEFORGE_URL: &str = "http://runeforge.gg/";

/// Runeforge serves a different page to clients without a browser UA.
pub(crate) const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:57.0) Gecko/20100101 Firefox/57.0";

/// A non-blocking client which fetches a champion's optimal rune pages
/// from Runeforge.
///
/// The catalog of champion → detail-page links is built once at
/// construction and replaced wholesale by [`RuneClient::update_catalog`].
///
/// # Example
///
/// ```no_run
/// # async fn run() -> lolrune::Result<()> {
/// let client = lolrune::RuneClient::new().await?;
/// for build in client.get_runes("bard").await? {
///     println!("{}: {}", build.name, build.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RuneClient {
    http: reqwest::Client,
    catalog: Catalog,
    cache_path: Option<PathBuf>,
}

impl RuneClient {
    /// Fetch the index page and build a fresh catalog.
    pub async fn new() -> Result<Self> {
        let http = reqwest::Client::new();
        let catalog = fetch_catalog(&http).await?;
        info!("constructed rune client, {} champions cataloged", catalog.len());
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
            http: reqwest::Client::new(),
            catalog,
            cache_path: None,
        }
    }

    /// Like [`RuneClient::new`], but load the catalog from `path` when a
    /// usable cache exists there, and keep the file updated on rebuilds.
    pub async fn with_cache(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let http = reqwest::Client::new();
        let catalog = match cache::load(&path)? {
            Some(catalog) => {
                debug!("loaded catalog cache from {}", path.display());
                catalog
            }
            None => {
                let catalog = fetch_catalog(&http).await?;
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

    /// Rebuild the catalog from the live index page.
    ///
    /// The in-memory mapping is replaced atomically: the new catalog is
    /// built completely, then swapped in. A configured cache file is
    /// rewritten afterwards.
    pub async fn update_catalog(&mut self) -> Result<()> {
        let catalog = fetch_catalog(&self.http).await?;
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
    /// The name is normalized the same way catalog keys are, so
    /// `"Kha'Zix"` and `"khazix"` resolve identically. Returns
    /// [`Error::UnknownChampion`] carrying the caller's literal input when
    /// the key is absent.
    pub async fn get_runes(&self, champion_name: &str) -> Result<Vec<BuildRecord>> {
        let key = catalog::normalize_key(champion_name);
        let links = self
            .catalog
            .get(&key)
            .ok_or_else(|| Error::UnknownChampion(champion_name.to_string()))?;

        let mut builds = Vec::with_capacity(links.len());
        for link in links {
            let html = get(&self.http, link).await?;
            builds.push(page::parse_build_page(&html, Some(link))?);
        }
        Ok(builds)
    }
}

/// GET `url` with the fixed browser user-agent, surfacing non-success
/// statuses as [`Error::UpstreamUnavailable`].
async fn get(http: &reqwest::Client, url: &str) -> Result<String> {
    debug!("GET {url}");
    let response = http
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::UpstreamUnavailable {
            status: status.as_u16(),
        });
    }
    Ok(response.text().await?)
}

async fn fetch_catalog(http: &reqwest::Client) -> Result<Catalog> {
    let html = get(http, RUNEFORGE_URL).await?;
    catalog::build_catalog(&html)
}
