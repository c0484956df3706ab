use versegraph::config::EngineConfig;
use versegraph::engine::StudyGraph;
use versegraph::ingest::*;
use versegraph::types::{EntityKind, FamilyRelation, PathRelation, SectionMarker, VerseRecord};

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

fn family(from: &str, to: &str, relation: FamilyRelation) -> FamilyEdgeRecord {
    FamilyEdgeRecord {
        from_id: from.to_string(),
        to_id: to.to_string(),
        relationship_type: relation,
    }
}

fn mention(reference: &str, kind: EntityKind, id: &str) -> MentionRecord {
    MentionRecord {
        verse_reference: reference.to_string(),
        entity_type: kind,
        entity_id: id.to_string(),
    }
}

/// Sets up an engine over the patriarch chain with mentions in Genesis 22.
fn setup_engine() -> StudyGraph {
    let mut builder = SnapshotBuilder::new();
    builder.add_entity(person("terah", "Terah"));
    builder.add_entity(person("abraham", "Abraham"));
    builder.add_entity(person("isaac", "Isaac"));
    builder.add_entity(person("jacob", "Jacob"));
    builder.add_family_edge(family("terah", "abraham", FamilyRelation::FatherOf));
    builder.add_family_edge(family("abraham", "isaac", FamilyRelation::FatherOf));
    builder.add_family_edge(family("isaac", "jacob", FamilyRelation::FatherOf));
    builder.add_mention(mention("Gen.22.1", EntityKind::Person, "abraham"));
    builder.add_mention(mention("Gen.22.2", EntityKind::Person, "isaac"));

    let store = builder
        .build(&versegraph::reference::ReferenceResolver::standard())
        .expect("failed to build snapshot");
    StudyGraph::new(store)
}

#[test]
fn test_normalize_through_facade() {
    let engine = setup_engine();
    assert_eq!(engine.normalize("John 3:16"), "Jhn.3.16");
    assert_eq!(engine.normalize_chapter("Romans 8"), Some("Rom.8".to_string()));
}

#[test]
fn test_entities_for_free_text_verse_citation() {
    let engine = setup_engine();
    let entities = engine.entities_for("Genesis 22:1");
    assert_eq!(entities.people.len(), 1);
    assert_eq!(entities.people[0].name, "Abraham");
}

#[test]
fn test_entities_for_chapter_citation() {
    let engine = setup_engine();
    let entities = engine.entities_for("Genesis 22");
    let names: Vec<&str> = entities.people.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Abraham", "Isaac"]);
}

#[test]
fn test_entities_for_unmentioned_verse_is_empty() {
    let engine = setup_engine();
    assert!(engine.entities_for("Gen.1.1").is_empty());
}

#[test]
fn test_entities_for_garbage_is_empty() {
    let engine = setup_engine();
    assert!(engine.entities_for("not a reference").is_empty());
}

#[test]
fn test_find_person_uses_configured_limit() {
    let mut builder = SnapshotBuilder::new();
    for i in 0..5 {
        builder.add_entity(person(&format!("p{i}"), "John"));
    }
    let store = builder
        .build(&versegraph::reference::ReferenceResolver::standard())
        .expect("failed to build snapshot");

    let config = EngineConfig {
        match_limit: 2,
        ..EngineConfig::default()
    };
    let engine = StudyGraph::with_config(store, config);
    assert_eq!(engine.find_person("John").len(), 2);
}

#[test]
fn test_ancestors_default_cap_comes_from_config() {
    // A chain longer than the default cap of 5 generations.
    let mut builder = SnapshotBuilder::new();
    for i in 0..8 {
        builder.add_entity(person(&format!("g{i}"), &format!("Generation {i}")));
    }
    for i in 0..7 {
        builder.add_family_edge(family(
            &format!("g{i}"),
            &format!("g{}", i + 1),
            FamilyRelation::FatherOf,
        ));
    }
    let store = builder
        .build(&versegraph::reference::ReferenceResolver::standard())
        .expect("failed to build snapshot");
    let engine = StudyGraph::new(store);

    let ancestors = engine.ancestors("g7", None);
    assert_eq!(ancestors.len(), 6, "default cap is 5 generations plus self");
    assert_eq!(ancestors.last().unwrap().generation, 5);

    let explicit = engine.ancestors("g7", Some(7));
    assert_eq!(explicit.len(), 8);
}

#[test]
fn test_find_path_through_facade() {
    let engine = setup_engine();
    let path = engine.find_path("abraham", "jacob", Some(5));
    assert_eq!(path.len(), 2);
    assert_eq!(path[0].relation, PathRelation::FatherOf);
    assert_eq!(path[1].to_id, "jacob");

    assert!(engine.find_path("abraham", "abraham", None).is_empty());
}

#[test]
fn test_descendants_through_facade() {
    let engine = setup_engine();
    let descendants = engine.descendants("terah", None);
    assert_eq!(descendants.len(), 4);
}

#[test]
fn test_family_and_stats_through_facade() {
    let engine = setup_engine();

    let family = engine.family_of("isaac");
    assert_eq!(family.parents.len(), 1);
    assert_eq!(family.children.len(), 1);

    let stats = engine.stats();
    assert_eq!(stats.person_count, 4);
    assert_eq!(stats.family_edge_count, 3);
    assert_eq!(stats.mention_count, 2);
    assert!(!stats.is_empty());
}

#[test]
fn test_segment_through_facade() {
    let engine = setup_engine();
    let verses = vec![VerseRecord {
        reference: "Gen.1.1".to_string(),
        book: "Gen".to_string(),
        chapter: 1,
        verse: 1,
        text: "In the beginning".to_string(),
        section_end: Some(SectionMarker::Petuchah),
    }];

    let passages = engine.segment(&verses);
    assert_eq!(passages.len(), 1);
    assert_eq!(passages[0].section_type, Some(SectionMarker::Petuchah));
}

#[test]
fn test_load_snapshot_file_through_facade() {
    let records = SnapshotRecords {
        entities: vec![person("abraham", "Abraham"), person("isaac", "Isaac")],
        family_edges: vec![family("abraham", "isaac", FamilyRelation::FatherOf)],
        ..Default::default()
    };

    let dir = tempfile::TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, serde_json::to_string(&records).unwrap())
        .expect("failed to write snapshot file");

    let engine = StudyGraph::load(&path).expect("failed to load snapshot");
    assert_eq!(engine.stats().person_count, 2);

    let matches = engine.find_person("Abraham");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, "abraham");
}
