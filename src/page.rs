//! Detail-page parsing into [`BuildRecord`]s.
//!
//! Selectors are fixed against the versioned Runeforge markup: the champion
//! heading, the loadout title, the first paragraph, two tree labels, and a
//! flat run of rune links where position 0 is the keystone, 1-3 the primary
//! picks, and 4-6 the secondary picks.

use crate::dom;
use crate::error::{Error, Result};
use crate::record::{BuildRecord, TreeSelection};

const CHAMPION_NAME: &str = "h1.champion-header--title";
const LOADOUT_TITLE: &str = "h2.loadout-title";
const DESCRIPTION: &str = "p";
const TREE_LABEL: &str = "h2.rune-path--name";
const RUNE_NAME: &str = "a.rune-name";

/// Number of rune links a structurally valid page carries: 1 keystone plus
/// 3 picks per tree.
const RUNE_COUNT: usize = 7;

/// Parse one champion's detail page into a [`BuildRecord`].
///
/// `source_url`, when given, is carried through for provenance and attached
/// to any structural error. The record is never partially populated: any
/// missing element or short rune list fails the whole call with
/// [`Error::StructuralMismatch`].
pub fn parse_build_page(detail_html: &str, source_url: Option<&str>) -> Result<BuildRecord> {
    let doc = dom::parse(detail_html);

    let name = dom::select_text(&doc, CHAMPION_NAME)
        .ok_or_else(|| Error::structure_at("missing champion title heading", source_url))?;
    let title = dom::select_text(&doc, LOADOUT_TITLE)
        .ok_or_else(|| Error::structure_at("missing loadout title heading", source_url))?;
    let description = dom::select_text(&doc, DESCRIPTION)
        .ok_or_else(|| Error::structure_at("missing description paragraph", source_url))?;

    let labels = dom::select_texts(&doc, TREE_LABEL);
    if labels.len() < 2 {
        return Err(Error::structure_at(
            format!("expected 2 rune tree labels, found {}", labels.len()),
            source_url,
        ));
    }

    let runes = dom::select_texts(&doc, RUNE_NAME);
    if runes.len() < RUNE_COUNT {
        return Err(Error::structure_at(
            format!("expected {RUNE_COUNT} rune links, found {}", runes.len()),
            source_url,
        ));
    }

    Ok(BuildRecord {
        name,
        title,
        description,
        source_url: source_url.map(ToOwned::to_owned),
        primary_tree: TreeSelection {
            name: labels[0].clone(),
            keystone: Some(runes[0].clone()),
            picks: runes[1..4].to_vec(),
        },
        secondary_tree: TreeSelection {
            name: labels[1].clone(),
            keystone: None,
            picks: runes[4..7].to_vec(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(runes: &[&str]) -> String {
        let links: String = runes
            .iter()
            .map(|r| format!(r##"<a class="rune-name" href="#">{r}</a>"##))
            .collect();
        format!(
            r#"
            <html><body>
              <h1 class="champion-header--title">Kalista</h1>
              <h2 class="loadout-title">Bloodshed Carries a Price</h2>
              <p>Lethality focused long range poke with [Q].</p>
              <h2 class="rune-path--name">Sorcery</h2>
              <h2 class="rune-path--name">Domination</h2>
              {links}
            </body></html>
            "#
        )
    }

    #[test]
    fn seven_runes_split_across_trees() {
        let html = page(&["Arcane Comet", "a", "b", "c", "d", "e", "f"]);
        let record = match parse_build_page(&html, None) {
            Ok(record) => record,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert_eq!(record.primary_tree.keystone.as_deref(), Some("Arcane Comet"));
        assert_eq!(record.primary_tree.picks, vec!["a", "b", "c"]);
        assert_eq!(record.secondary_tree.picks, vec!["d", "e", "f"]);
        assert_eq!(record.secondary_tree.keystone, None);
    }

    #[test]
    fn six_runes_is_a_structural_mismatch() {
        let html = page(&["Arcane Comet", "a", "b", "c", "d", "e"]);
        match parse_build_page(&html, Some("http://runeforge.gg/loadout/kalista-1/")) {
            Err(Error::StructuralMismatch { message, url }) => {
                assert!(message.contains("found 6"), "message: {message}");
                assert_eq!(url.as_deref(), Some("http://runeforge.gg/loadout/kalista-1/"));
            }
            other => panic!("expected StructuralMismatch, got {other:?}"),
        }
    }

    #[test]
    fn missing_title_heading_is_fatal() {
        let html = r#"<html><body><p>desc</p></body></html>"#;
        match parse_build_page(html, None) {
            Err(Error::StructuralMismatch { message, .. }) => {
                assert!(message.contains("champion title"), "message: {message}");
            }
            other => panic!("expected StructuralMismatch, got {other:?}"),
        }
    }
}
