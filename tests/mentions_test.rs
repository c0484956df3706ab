use versegraph::graph::{GraphStore, MentionIndex};
use versegraph::ingest::{EntityRecord, MentionRecord, SnapshotBuilder};
use versegraph::reference::ReferenceResolver;
use versegraph::types::EntityKind;

fn person(id: &str, name: &str) -> EntityRecord {
    EntityRecord::Person {
        id: id.to_string(),
        name: name.to_string(),
        aliases: Vec::new(),
        gender: None,
        birth_year: None,
        death_year: None,
        description: None,
    }
}

fn mention(reference: &str, kind: EntityKind, id: &str) -> MentionRecord {
    MentionRecord {
        verse_reference: reference.to_string(),
        entity_type: kind,
        entity_id: id.to_string(),
    }
}

/// Sets up a store with mentions around Genesis 22.
fn setup_mentions() -> GraphStore {
    let mut builder = SnapshotBuilder::new();
    builder.add_entity(person("abraham", "Abraham"));
    builder.add_entity(person("isaac", "Isaac"));
    builder.add_entity(EntityRecord::Place {
        id: "moriah".to_string(),
        name: "Moriah".to_string(),
        aliases: Vec::new(),
        latitude: None,
        longitude: None,
        feature_type: None,
    });
    builder.add_entity(EntityRecord::Event {
        id: "akedah".to_string(),
        title: "Binding of Isaac".to_string(),
        start_year: None,
        duration: None,
        sort_key: None,
    });

    builder.add_mention(mention("Gen.22.1", EntityKind::Person, "abraham"));
    builder.add_mention(mention("Gen.22.1", EntityKind::Event, "akedah"));
    builder.add_mention(mention("Gen.22.2", EntityKind::Person, "abraham"));
    builder.add_mention(mention("Gen.22.2", EntityKind::Person, "isaac"));
    builder.add_mention(mention("Gen.22.2", EntityKind::Place, "moriah"));

    builder
        .build(&ReferenceResolver::standard())
        .expect("failed to build snapshot")
}

#[test]
fn test_verse_with_no_mentions_yields_empty_buckets() {
    let store = setup_mentions();
    let index = MentionIndex::new(&store);

    let entities = index.verse_entities("Gen.1.1");
    assert!(entities.is_empty());
    assert!(entities.people.is_empty());
    assert!(entities.places.is_empty());
    assert!(entities.events.is_empty());
}

#[test]
fn test_verse_level_lookup_partitions_by_kind() {
    let store = setup_mentions();
    let index = MentionIndex::new(&store);

    let entities = index.verse_entities("Gen.22.2");
    assert_eq!(entities.people.len(), 2);
    assert_eq!(entities.places.len(), 1);
    assert!(entities.events.is_empty());

    assert_eq!(entities.people[0].id, "abraham");
    assert_eq!(entities.people[0].name, "Abraham");
    assert_eq!(entities.places[0].name, "Moriah");
}

#[test]
fn test_event_names_come_from_titles() {
    let store = setup_mentions();
    let index = MentionIndex::new(&store);

    let entities = index.verse_entities("Gen.22.1");
    assert_eq!(entities.events.len(), 1);
    assert_eq!(entities.events[0].name, "Binding of Isaac");
}

#[test]
fn test_chapter_level_lookup_deduplicates_across_verses() {
    let store = setup_mentions();
    let index = MentionIndex::new(&store);

    // Abraham is mentioned in both Gen.22.1 and Gen.22.2 but must appear once.
    let entities = index.chapter_entities("Gen", 22);
    assert_eq!(entities.people.len(), 2);
    assert_eq!(entities.people[0].id, "abraham");
    assert_eq!(entities.people[1].id, "isaac");
    assert_eq!(entities.places.len(), 1);
    assert_eq!(entities.events.len(), 1);
}

#[test]
fn test_chapter_prefix_does_not_swallow_other_chapters() {
    let mut builder = SnapshotBuilder::new();
    builder.add_entity(person("adam", "Adam"));
    builder.add_entity(person("noah", "Noah"));
    builder.add_entity(person("seth", "Seth"));
    builder.add_mention(mention("Gen.1.26", EntityKind::Person, "adam"));
    builder.add_mention(mention("Gen.1.28", EntityKind::Person, "seth"));
    builder.add_mention(mention("Gen.10.1", EntityKind::Person, "noah"));
    let store = builder
        .build(&ReferenceResolver::standard())
        .expect("failed to build snapshot");

    let index = MentionIndex::new(&store);
    let chapter1 = index.chapter_entities("Gen", 1);
    let ids: Vec<&str> = chapter1.people.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["adam", "seth"], "Gen.10 keys must not match the Gen.1 prefix");

    let chapter10 = index.chapter_entities("Gen", 10);
    assert_eq!(chapter10.people.len(), 1);
    assert_eq!(chapter10.people[0].id, "noah");
}

#[test]
fn test_unresolved_mention_falls_back_to_raw_id() {
    let mut builder = SnapshotBuilder::new();
    builder.add_mention(mention("Gen.4.1", EntityKind::Person, "lost_person"));
    let store = builder
        .build(&ReferenceResolver::standard())
        .expect("failed to build snapshot");

    let entities = MentionIndex::new(&store).verse_entities("Gen.4.1");
    assert_eq!(entities.people.len(), 1);
    assert_eq!(entities.people[0].name, "lost_person");
}

#[test]
fn test_group_mentions_have_no_bucket() {
    let mut builder = SnapshotBuilder::new();
    builder.add_entity(EntityRecord::Group {
        id: "levites".to_string(),
        name: "Levites".to_string(),
    });
    builder.add_mention(mention("Num.3.6", EntityKind::Group, "levites"));
    let store = builder
        .build(&ReferenceResolver::standard())
        .expect("failed to build snapshot");

    let entities = MentionIndex::new(&store).verse_entities("Num.3.6");
    assert!(entities.is_empty());
}

#[test]
fn test_chapter_with_no_mentions_yields_empty_buckets() {
    let store = setup_mentions();
    let entities = MentionIndex::new(&store).chapter_entities("Rev", 22);
    assert!(entities.is_empty());
}
