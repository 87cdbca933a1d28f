//! Record types for parsed rune pages.
//!
//! These are closed structs holding exactly the fields the parsers produce;
//! any extra fields upstream may add to its markup or embedded JSON are
//! discarded rather than dynamically attached.

use serde::{Deserialize, Serialize};

/// One rune tree's contribution to a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSelection {
    /// Tree name, e.g. `"Domination"`.
    pub name: String,

    /// The headline rune. Present only on the primary tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keystone: Option<String>,

    /// The tree's remaining rune picks, document order. Always exactly 3
    /// entries when parsed from a structurally valid page.
    pub picks: Vec<String>,
}

/// One recommended rune build for a champion, parsed from a single
/// Runeforge detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRecord {
    /// Champion display name, e.g. `"Kalista"`.
    pub name: String,

    /// The title Runeforge assigns the page, e.g. `"Bloodshed Carries a Price"`.
    pub title: String,

    /// Short description of the build's intent.
    pub description: String,

    /// The URL the page was fetched from, carried through for provenance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    /// The primary tree: name, keystone, and 3 picks.
    pub primary_tree: TreeSelection,

    /// The secondary tree: name and 3 picks, no keystone.
    pub secondary_tree: TreeSelection,
}
