//! Ingestion boundary.
//!
//! Upstream parsers hand the engine plain records; this module converts
//! them into the typed snapshot the query side runs against. Conversion
//! validates referential integrity, canonicalizes pair-stored relations,
//! and normalizes mention references, so queries never have to defend
//! against malformed data. Ingestion is a single-threaded batch pass.

use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::{Result, VerseGraphError};
use crate::graph::store::GraphStore;
use crate::reference::ReferenceResolver;
use crate::types::*;

/// An entity record as produced by the upstream metadata parsers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntityRecord {
    Person {
        id: String,
        name: String,
        #[serde(default)]
        aliases: Vec<String>,
        #[serde(default)]
        gender: Option<String>,
        #[serde(default)]
        birth_year: Option<i32>,
        #[serde(default)]
        death_year: Option<i32>,
        #[serde(default)]
        description: Option<String>,
    },
    Place {
        id: String,
        name: String,
        #[serde(default)]
        aliases: Vec<String>,
        #[serde(default)]
        latitude: Option<f64>,
        #[serde(default)]
        longitude: Option<f64>,
        #[serde(default)]
        feature_type: Option<String>,
    },
    Event {
        id: String,
        title: String,
        #[serde(default)]
        start_year: Option<i32>,
        #[serde(default)]
        duration: Option<String>,
        #[serde(default)]
        sort_key: Option<f64>,
    },
    Group {
        id: String,
        name: String,
    },
}

/// A directed family relation between two people.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyEdgeRecord {
    pub from_id: String,
    pub to_id: String,
    pub relationship_type: FamilyRelation,
}

/// Links a person to an event they took part in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipationRecord {
    pub person_id: String,
    pub event_id: String,
}

/// Links an event to the place where it occurred.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    pub event_id: String,
    pub place_id: String,
}

/// Links a person to a people group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipRecord {
    pub person_id: String,
    pub group_id: String,
}

/// Links a verse reference to an entity mentioned in it.
///
/// The reference may be any citation `ReferenceResolver` accepts; it is
/// normalized to a canonical key at build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentionRecord {
    pub verse_reference: String,
    pub entity_type: EntityKind,
    pub entity_id: String,
}

/// A complete set of upstream records, as serialized by the import
/// scripts. All sections are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotRecords {
    #[serde(default)]
    pub entities: Vec<EntityRecord>,
    #[serde(default)]
    pub family_edges: Vec<FamilyEdgeRecord>,
    #[serde(default)]
    pub participations: Vec<ParticipationRecord>,
    #[serde(default)]
    pub locations: Vec<LocationRecord>,
    #[serde(default)]
    pub memberships: Vec<MembershipRecord>,
    #[serde(default)]
    pub mentions: Vec<MentionRecord>,
}

/// Accumulates upstream records and builds a validated `GraphStore`.
///
/// Entities inserted twice under the same id keep the last record.
/// Validation happens in `build`: an edge referencing an unknown entity id
/// is a hard error there, except mention edges, which are tolerated with a
/// warning because mention queries define a raw-id fallback.
#[derive(Default)]
pub struct SnapshotBuilder {
    people: BTreeMap<String, Person>,
    places: BTreeMap<String, Place>,
    events: BTreeMap<String, Event>,
    groups: BTreeMap<String, Group>,
    family_edges: Vec<FamilyEdgeRecord>,
    participations: Vec<ParticipationRecord>,
    locations: Vec<LocationRecord>,
    memberships: Vec<MembershipRecord>,
    mentions: Vec<MentionRecord>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one entity record to the snapshot.
    pub fn add_entity(&mut self, record: EntityRecord) {
        match record {
            EntityRecord::Person {
                id,
                name,
                aliases,
                gender,
                birth_year,
                death_year,
                description,
            } => {
                self.people.insert(
                    id.clone(),
                    Person {
                        id,
                        name,
                        aliases,
                        gender,
                        birth_year,
                        death_year,
                        description,
                    },
                );
            }
            EntityRecord::Place {
                id,
                name,
                aliases,
                latitude,
                longitude,
                feature_type,
            } => {
                self.places.insert(
                    id.clone(),
                    Place {
                        id,
                        name,
                        aliases,
                        latitude,
                        longitude,
                        feature_type,
                    },
                );
            }
            EntityRecord::Event {
                id,
                title,
                start_year,
                duration,
                sort_key,
            } => {
                self.events.insert(
                    id.clone(),
                    Event {
                        id,
                        title,
                        start_year,
                        duration,
                        sort_key,
                    },
                );
            }
            EntityRecord::Group { id, name } => {
                self.groups.insert(id.clone(), Group { id, name });
            }
        }
    }

    pub fn add_family_edge(&mut self, record: FamilyEdgeRecord) {
        self.family_edges.push(record);
    }

    pub fn add_participation(&mut self, record: ParticipationRecord) {
        self.participations.push(record);
    }

    pub fn add_location(&mut self, record: LocationRecord) {
        self.locations.push(record);
    }

    pub fn add_membership(&mut self, record: MembershipRecord) {
        self.memberships.push(record);
    }

    pub fn add_mention(&mut self, record: MentionRecord) {
        self.mentions.push(record);
    }

    /// Adds a full record set.
    pub fn add_records(&mut self, records: SnapshotRecords) {
        for entity in records.entities {
            self.add_entity(entity);
        }
        self.family_edges.extend(records.family_edges);
        self.participations.extend(records.participations);
        self.locations.extend(records.locations);
        self.memberships.extend(records.memberships);
        self.mentions.extend(records.mentions);
    }

    /// Validates the accumulated records and builds the immutable store.
    ///
    /// Family edges with a symmetric relation (`partner_of`, `sibling_of`)
    /// are canonicalized to the lexically smaller id first and stored once
    /// per pair; exact duplicate edges of any relation are dropped. The
    /// resolver normalizes every mention reference so the mention table is
    /// keyed by canonical keys.
    pub fn build(self, resolver: &ReferenceResolver) -> Result<GraphStore> {
        let Self {
            people,
            places,
            events,
            groups,
            family_edges: raw_family,
            participations,
            locations,
            memberships,
            mentions,
        } = self;

        let mut family_edges: Vec<FamilyEdge> = Vec::with_capacity(raw_family.len());
        let mut seen_family: HashSet<(String, String, FamilyRelation)> = HashSet::new();

        for record in raw_family {
            require_person(&people, &record.from_id, "family edge")?;
            require_person(&people, &record.to_id, "family edge")?;

            let (from_id, to_id) =
                if record.relationship_type.is_symmetric() && record.to_id < record.from_id {
                    (record.to_id, record.from_id)
                } else {
                    (record.from_id, record.to_id)
                };

            if seen_family.insert((from_id.clone(), to_id.clone(), record.relationship_type)) {
                family_edges.push(FamilyEdge {
                    from_id,
                    to_id,
                    relation: record.relationship_type,
                });
            }
        }

        let mut participation_edges: Vec<ParticipationEdge> = Vec::new();
        let mut seen_participation: HashSet<(String, String)> = HashSet::new();
        for record in participations {
            require_person(&people, &record.person_id, "participation edge")?;
            require_event(&events, &record.event_id, "participation edge")?;
            if seen_participation.insert((record.person_id.clone(), record.event_id.clone())) {
                participation_edges.push(ParticipationEdge {
                    person_id: record.person_id,
                    event_id: record.event_id,
                });
            }
        }

        let mut location_edges: Vec<LocationEdge> = Vec::new();
        let mut seen_location: HashSet<(String, String)> = HashSet::new();
        for record in locations {
            require_event(&events, &record.event_id, "location edge")?;
            if !places.contains_key(&record.place_id) {
                return Err(VerseGraphError::Ingest {
                    message: "location edge references unknown place".to_string(),
                    record: format!("{} @ {}", record.event_id, record.place_id),
                });
            }
            if seen_location.insert((record.event_id.clone(), record.place_id.clone())) {
                location_edges.push(LocationEdge {
                    event_id: record.event_id,
                    place_id: record.place_id,
                });
            }
        }

        let mut membership_edges: Vec<MembershipEdge> = Vec::new();
        let mut seen_membership: HashSet<(String, String)> = HashSet::new();
        for record in memberships {
            require_person(&people, &record.person_id, "membership edge")?;
            if !groups.contains_key(&record.group_id) {
                return Err(VerseGraphError::Ingest {
                    message: "membership edge references unknown group".to_string(),
                    record: format!("{} in {}", record.person_id, record.group_id),
                });
            }
            if seen_membership.insert((record.person_id.clone(), record.group_id.clone())) {
                membership_edges.push(MembershipEdge {
                    person_id: record.person_id,
                    group_id: record.group_id,
                });
            }
        }

        let mut mention_edges: Vec<MentionEdge> = Vec::new();
        let mut seen_mention: HashSet<(String, EntityKind, String)> = HashSet::new();
        for record in mentions {
            let reference = resolver.normalize(&record.verse_reference);

            let known = match record.entity_type {
                EntityKind::Person => people.contains_key(&record.entity_id),
                EntityKind::Place => places.contains_key(&record.entity_id),
                EntityKind::Event => events.contains_key(&record.entity_id),
                EntityKind::Group => groups.contains_key(&record.entity_id),
            };
            if !known {
                warn!(
                    reference = %reference,
                    entity_id = %record.entity_id,
                    "mention references unknown entity; kept for raw-id fallback"
                );
            }

            if seen_mention.insert((
                reference.clone(),
                record.entity_type,
                record.entity_id.clone(),
            )) {
                mention_edges.push(MentionEdge {
                    verse_reference: reference,
                    entity_kind: record.entity_type,
                    entity_id: record.entity_id,
                });
            }
        }

        info!(
            people = people.len(),
            places = places.len(),
            events = events.len(),
            groups = groups.len(),
            family_edges = family_edges.len(),
            mentions = mention_edges.len(),
            "graph snapshot built"
        );

        Ok(GraphStore::new(
            people,
            places,
            events,
            groups,
            family_edges,
            participation_edges,
            location_edges,
            membership_edges,
            mention_edges,
        ))
    }
}

fn require_person(people: &BTreeMap<String, Person>, id: &str, context: &str) -> Result<()> {
    if people.contains_key(id) {
        return Ok(());
    }
    Err(VerseGraphError::Ingest {
        message: format!("{} references unknown person", context),
        record: id.to_string(),
    })
}

fn require_event(events: &BTreeMap<String, Event>, id: &str, context: &str) -> Result<()> {
    if events.contains_key(id) {
        return Ok(());
    }
    Err(VerseGraphError::Ingest {
        message: format!("{} references unknown event", context),
        record: id.to_string(),
    })
}

/// Loads a snapshot from a JSON record file produced by the import scripts.
pub fn load_snapshot(path: &Path, resolver: &ReferenceResolver) -> Result<GraphStore> {
    let file = File::open(path)?;
    let records: SnapshotRecords = serde_json::from_reader(BufReader::new(file))?;

    let mut builder = SnapshotBuilder::new();
    builder.add_records(records);
    builder.build(resolver)
}
