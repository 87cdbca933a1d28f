//! # lolrune
//!
//! Clients for gathering optimal rune pages for League of Legends
//! champions, scraped from [Runeforge](http://runeforge.gg).
//!
//! The core is two pure functions over already-fetched HTML: [`build_catalog`]
//! turns the index page into a champion → detail-URL mapping, and
//! [`parse_build_page`] turns one detail page into a [`BuildRecord`]. The
//! [`RuneClient`] (async) and [`blocking::RuneClient`] facades add the HTTP
//! fetching and optional catalog caching around that pair.
//!
//! ## Quick Start
//!
//! ```rust
//! use lolrune::parse_build_page;
//!
//! let html = r#"
//!   <h1 class="champion-header--title">Bard</h1>
//!   <h2 class="loadout-title">Gimmie All Those Chimes</h2>
//!   <p>Map Roaming and kill pressure.</p>
//!   <h2 class="rune-path--name">Domination</h2>
//!   <h2 class="rune-path--name">Sorcery</h2>
//!   <a class="rune-name">Electrocute</a>
//!   <a class="rune-name">Cheap Shot</a>
//!   <a class="rune-name">Zombie Ward</a>
//!   <a class="rune-name">Relentless Hunter</a>
//!   <a class="rune-name">Scorch</a>
//!   <a class="rune-name">Manaflow Band</a>
//!   <a class="rune-name">Gathering Storm</a>
//! "#;
//!
//! let build = parse_build_page(html, None)?;
//! assert_eq!(build.name, "Bard");
//! assert_eq!(build.primary_tree.keystone.as_deref(), Some("Electrocute"));
//! # Ok::<(), lolrune::Error>(())
//! ```
//!
//! Both core functions are side-effect free and hold no cross-call state,
//! so they can run concurrently across unrelated inputs without
//! coordination. The parsers have zero tolerance for structural drift in
//! the scraped markup; see [`Error::StructuralMismatch`].

mod error;
mod record;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Catalog building from the index page.
pub mod catalog;

/// Detail-page parsing.
pub mod page;

/// Catalog persistence (the `rune_links.json` cache).
pub mod cache;

/// Blocking client facade.
pub mod blocking;

mod client;

// Public API - re-exports
pub use catalog::Catalog;
pub use client::RuneClient;
pub use error::{Error, Result};
pub use record::{BuildRecord, TreeSelection};

/// Builds the champion catalog from index-page HTML.
///
/// Thin re-export of [`catalog::build_catalog`]; see that function for the
/// extraction rules and guarantees.
pub fn build_catalog(index_html: &str) -> Result<Catalog> {
    catalog::build_catalog(index_html)
}

/// Parses one champion detail page into a [`BuildRecord`].
///
/// `source_url`, when given, is recorded on the result and attached to any
/// structural error for diagnostics.
pub fn parse_build_page(detail_html: &str, source_url: Option<&str>) -> Result<BuildRecord> {
    page::parse_build_page(detail_html, source_url)
}
