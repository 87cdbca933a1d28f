use lolrune::{blocking, Catalog, Error, RuneClient};

fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(
        "bard".to_string(),
        vec!["http://runeforge.gg/loadout/bard-roam/".to_string()],
    );
    catalog
}

#[test]
fn blocking_unknown_champion_carries_literal_input() {
    let client = blocking::RuneClient::with_catalog(sample_catalog());
    match client.get_runes("notachampion") {
        Err(Error::UnknownChampion(name)) => assert_eq!(name, "notachampion"),
        other => panic!("expected UnknownChampion, got {other:?}"),
    }
}

#[tokio::test]
async fn async_unknown_champion_carries_literal_input() {
    let client = RuneClient::with_catalog(sample_catalog());
    match client.get_runes("notachampion").await {
        Err(Error::UnknownChampion(name)) => assert_eq!(name, "notachampion"),
        other => panic!("expected UnknownChampion, got {other:?}"),
    }
}

#[test]
fn lookup_normalizes_the_requested_name() {
    // "Bard", "BARD" and "b'ard" all resolve to the cataloged key; the
    // lookup itself fails only on truly unknown keys, before any fetch.
    let client = blocking::RuneClient::with_catalog(sample_catalog());
    match client.get_runes("Not A Champion!") {
        Err(Error::UnknownChampion(name)) => assert_eq!(name, "Not A Champion!"),
        other => panic!("expected UnknownChampion, got {other:?}"),
    }
    assert!(client.catalog().contains_key("bard"));
}

#[test]
fn catalog_accessor_exposes_the_mapping() {
    let client = blocking::RuneClient::with_catalog(sample_catalog());
    assert_eq!(client.catalog().len(), 1);
    assert_eq!(
        client.catalog().get("bard").map(Vec::len),
        Some(1)
    );
}
