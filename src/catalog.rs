//! Catalog building from the Runeforge index page.
//!
//! The index page lists every champion either as a single-build entry
//! (`li.champion`, one anchor straight to a detail page) or as a multi-build
//! entry (`div.champion-modal-open`, a `data-loadouts` attribute holding a
//! JSON array of loadouts). Building the catalog is a single traversal of
//! the parsed document plus key normalization; it is rebuilt wholesale on
//! every call, never merged incrementally.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use url::Url;

use crate::dom;
use crate::error::{Error, Result};

/// Mapping from normalized champion key to that champion's detail-page URLs,
/// in the order they appear on the index page. Keys are lowercase and
/// alphanumeric-only; every value is non-empty.
pub type Catalog = BTreeMap<String, Vec<String>>;

/// Scraped keys that do not match the game's official champion name.
/// Applied as a post-processing pass over the merged catalog, so future
/// corrections are additive.
///
/// Wukong is keyed by Riot's internal asset name on the index page, so the
/// portrait filename surfaces him as `monkeyking`.
const KEY_CORRECTIONS: &[(&str, &str)] = &[("monkeyking", "wukong")];

/// Extracts the champion token from a portrait `background-image` style,
/// e.g. `background-image: url(.../uploads/2017/11/Bard_0-123x123.jpg);`
/// captures `Bard`. The token is the filename stem before the skin-variant
/// suffix.
#[allow(clippy::expect_used)]
static PORTRAIT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"background-image:\s*url\(['"]?[^'")]*/([A-Za-z0-9]+)_\d+[^'")]*['"]?\)"#)
        .expect("PORTRAIT_TOKEN regex")
});

/// One element of a `data-loadouts` JSON array. Upstream attaches more
/// fields; only these two are read.
#[derive(Debug, Deserialize)]
struct LoadoutEntry {
    champion: String,
    link: String,
}

/// Build the champion catalog from the index page HTML.
///
/// Single-build entries missing their anchor or portrait token are skipped
/// silently, matching the site's stability-dependent contract. A
/// `data-loadouts` attribute that fails to decode as JSON is a
/// [`Error::StructuralMismatch`] for the whole call.
///
/// Guarantees on success: every key is lowercase alphanumeric, every value
/// is a non-empty list of absolute URLs in document order. Pure function of
/// its input; identical HTML yields an identical catalog.
pub fn build_catalog(index_html: &str) -> Result<Catalog> {
    let doc = dom::parse(index_html);

    let mut catalog = Catalog::new();

    // Champions with a single rune page.
    for node in doc.select("li.champion").nodes() {
        let entry = dom::Selection::from(*node);
        let anchor = entry.select("a");
        if !anchor.exists() {
            continue;
        }
        let Some(href) = dom::get_attribute(&anchor, "href") else {
            continue;
        };
        if !is_absolute_url(&href) {
            continue;
        }
        let portrait = anchor.select("div div");
        let Some(style) = dom::get_attribute(&portrait, "style") else {
            continue;
        };
        let Some(token) = portrait_token(&style) else {
            continue;
        };
        catalog.insert(normalize_key(&token), vec![href]);
    }

    // Champions with two or more rune pages. Processed second: on key
    // collision the multi-build entry wins.
    for node in doc.select("div.champion-modal-open").nodes() {
        let entry = dom::Selection::from(*node);
        let Some(raw) = dom::get_attribute(&entry, "data-loadouts") else {
            continue;
        };
        let loadouts: Vec<LoadoutEntry> = serde_json::from_str(&raw).map_err(|e| {
            Error::structure(format!("undecodable data-loadouts attribute: {e}"))
        })?;
        let Some(first) = loadouts.first() else {
            continue;
        };
        let key = normalize_key(&first.champion);
        let links: Vec<String> = loadouts
            .iter()
            .map(|l| l.link.clone())
            .filter(|l| is_absolute_url(l))
            .collect();
        if key.is_empty() || links.is_empty() {
            continue;
        }
        catalog.insert(key, links);
    }

    apply_corrections(&mut catalog);
    Ok(catalog)
}

/// Lowercase and strip every non-alphanumeric character.
#[must_use]
pub fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Remap scraped keys that differ from the canonical champion name.
fn apply_corrections(catalog: &mut Catalog) {
    for &(scraped, canonical) in KEY_CORRECTIONS {
        if let Some(links) = catalog.remove(scraped) {
            catalog.insert(canonical.to_string(), links);
        }
    }
}

/// Pull the champion token out of a portrait style attribute.
fn portrait_token(style: &str) -> Option<String> {
    PORTRAIT_TOKEN
        .captures(style)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Check for an absolute http(s) URL with a host.
fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }
    match Url::parse(s) {
        Ok(url) => url.host().is_some(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_key_lowercases_and_strips() {
        assert_eq!(normalize_key("Kha'Zix"), "khazix");
        assert_eq!(normalize_key("Aurelion Sol"), "aurelionsol");
        assert_eq!(normalize_key("Jarvan IV"), "jarvaniv");
    }

    #[test]
    fn portrait_token_extracts_filename_stem() {
        let style = "background-image: url(http://runeforge.gg/wp-content/uploads/2017/11/Bard_0-123x123.jpg);";
        assert_eq!(portrait_token(style).as_deref(), Some("Bard"));
    }

    #[test]
    fn portrait_token_rejects_unrelated_style() {
        assert_eq!(portrait_token("color: red;"), None);
    }

    #[test]
    fn absolute_url_requires_scheme_and_host() {
        assert!(is_absolute_url("http://runeforge.gg/loadout/bard-1/"));
        assert!(is_absolute_url("https://runeforge.gg/loadout/bard-1/"));
        assert!(!is_absolute_url("/loadout/bard-1/"));
        assert!(!is_absolute_url("ftp://runeforge.gg/x"));
        assert!(!is_absolute_url(""));
    }

    #[test]
    fn corrections_remap_scraped_key() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "monkeyking".to_string(),
            vec!["http://runeforge.gg/loadout/wukong-1/".to_string()],
        );
        apply_corrections(&mut catalog);
        assert!(!catalog.contains_key("monkeyking"));
        assert!(catalog.contains_key("wukong"));
    }
}
