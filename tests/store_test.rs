use versegraph::graph::GraphStore;
use versegraph::ingest::{EntityRecord, FamilyEdgeRecord, SnapshotBuilder};
use versegraph::reference::ReferenceResolver;
use versegraph::types::FamilyRelation;

/// Helper: create a person record with aliases.
fn person(id: &str, name: &str, aliases: &[&str]) -> EntityRecord {
    EntityRecord::Person {
        id: id.to_string(),
        name: name.to_string(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
        gender: None,
        birth_year: None,
        death_year: None,
        description: None,
    }
}

fn place(id: &str, name: &str, aliases: &[&str]) -> EntityRecord {
    EntityRecord::Place {
        id: id.to_string(),
        name: name.to_string(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
        latitude: None,
        longitude: None,
        feature_type: None,
    }
}

fn build(builder: SnapshotBuilder) -> GraphStore {
    builder
        .build(&ReferenceResolver::standard())
        .expect("failed to build snapshot")
}

#[test]
fn test_find_person_exact_match_outranks_alias_match() {
    let mut builder = SnapshotBuilder::new();
    // "abe" matches only through its alias, which contains the query and is
    // long; the exact name match must still win.
    builder.add_entity(person("abraham", "Abraham", &[]));
    builder.add_entity(person("abe", "Abe", &["Abraham the patriarch of many nations"]));
    let store = build(builder);

    let matches = store.find_person("Abraham", 10);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].id, "abraham");
    assert_eq!(matches[1].id, "abe");
}

#[test]
fn test_find_person_is_case_insensitive() {
    let mut builder = SnapshotBuilder::new();
    builder.add_entity(person("abraham", "Abraham", &[]));
    let store = build(builder);

    assert_eq!(store.find_person("abraham", 10).len(), 1);
    assert_eq!(store.find_person("ABRAHAM", 10).len(), 1);
}

#[test]
fn test_find_person_alias_substring_match() {
    let mut builder = SnapshotBuilder::new();
    builder.add_entity(person("simon", "Simon Peter", &["Cephas", "Simon bar Jonah"]));
    let store = build(builder);

    let matches = store.find_person("cephas", 10);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, "simon");

    // Substring of an alias is enough.
    assert_eq!(store.find_person("bar jonah", 10).len(), 1);
    // The primary name only matches exactly.
    assert!(store.find_person("Simon Pete", 10).is_empty());
}

#[test]
fn test_find_person_alias_content_breaks_ties() {
    let mut builder = SnapshotBuilder::new();
    builder.add_entity(person("mary_1", "Mary", &["Mary Magdalene"]));
    builder.add_entity(person("mary_2", "Mary", &["Mary of Bethany", "sister of Martha"]));
    let store = build(builder);

    let matches = store.find_person("Mary", 10);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].id, "mary_2", "longer alias content ranks higher");
}

#[test]
fn test_find_person_family_degree_breaks_ties() {
    let mut builder = SnapshotBuilder::new();
    builder.add_entity(person("james_1", "James", &[]));
    builder.add_entity(person("james_2", "James", &[]));
    builder.add_entity(person("zebedee", "Zebedee", &[]));
    builder.add_family_edge(FamilyEdgeRecord {
        from_id: "zebedee".to_string(),
        to_id: "james_2".to_string(),
        relationship_type: FamilyRelation::FatherOf,
    });
    let store = build(builder);

    let matches = store.find_person("James", 10);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].id, "james_2", "higher family-edge degree ranks higher");
}

#[test]
fn test_find_person_respects_limit() {
    let mut builder = SnapshotBuilder::new();
    for i in 0..15 {
        builder.add_entity(person(&format!("p{i:02}"), "Jesus", &[]));
    }
    let store = build(builder);

    assert_eq!(store.find_person("Jesus", 10).len(), 10);
}

#[test]
fn test_find_person_no_match_is_empty() {
    let mut builder = SnapshotBuilder::new();
    builder.add_entity(person("abraham", "Abraham", &[]));
    let store = build(builder);

    assert!(store.find_person("Nebuchadnezzar", 10).is_empty());
    assert!(store.find_person("", 10).is_empty());
}

#[test]
fn test_find_person_deterministic_on_full_tie() {
    let mut builder = SnapshotBuilder::new();
    builder.add_entity(person("judas_2", "Judas", &[]));
    builder.add_entity(person("judas_1", "Judas", &[]));
    let store = build(builder);

    let matches = store.find_person("Judas", 10);
    let ids: Vec<&str> = matches.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["judas_1", "judas_2"], "full ties keep id order");
}

#[test]
fn test_find_place() {
    let mut builder = SnapshotBuilder::new();
    builder.add_entity(place("jerusalem", "Jerusalem", &["Salem", "Zion"]));
    builder.add_entity(place("jericho", "Jericho", &[]));
    let store = build(builder);

    let matches = store.find_place("Jerusalem", 10);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, "jerusalem");

    let by_alias = store.find_place("zion", 10);
    assert_eq!(by_alias.len(), 1);
    assert_eq!(by_alias[0].id, "jerusalem");

    assert!(store.find_place("Nineveh", 10).is_empty());
}

#[test]
fn test_identity_lookup() {
    let mut builder = SnapshotBuilder::new();
    builder.add_entity(person("abraham", "Abraham", &[]));
    let store = build(builder);

    assert_eq!(store.get_person("abraham").unwrap().name, "Abraham");
    assert!(store.get_person("missing").is_none());
}

#[test]
fn test_family_degree_counts_both_directions() {
    let mut builder = SnapshotBuilder::new();
    builder.add_entity(person("terah", "Terah", &[]));
    builder.add_entity(person("abraham", "Abraham", &[]));
    builder.add_entity(person("isaac", "Isaac", &[]));
    builder.add_family_edge(FamilyEdgeRecord {
        from_id: "terah".to_string(),
        to_id: "abraham".to_string(),
        relationship_type: FamilyRelation::FatherOf,
    });
    builder.add_family_edge(FamilyEdgeRecord {
        from_id: "abraham".to_string(),
        to_id: "isaac".to_string(),
        relationship_type: FamilyRelation::FatherOf,
    });
    let store = build(builder);

    assert_eq!(store.family_degree("abraham"), 2);
    assert_eq!(store.family_degree("terah"), 1);
    assert_eq!(store.family_degree("nobody"), 0);
}
