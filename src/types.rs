use serde::{Deserialize, Serialize};

/// Kinds of entities in the relationship graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Person,
    Place,
    Event,
    Group,
}

#[allow(clippy::should_implement_trait)]
impl EntityKind {
    /// Returns the string representation of this entity kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Person => "person",
            EntityKind::Place => "place",
            EntityKind::Event => "event",
            EntityKind::Group => "group",
        }
    }

    /// Parses a string into an `EntityKind`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<EntityKind> {
        match s {
            "person" => Some(EntityKind::Person),
            "place" => Some(EntityKind::Place),
            "event" => Some(EntityKind::Event),
            "group" => Some(EntityKind::Group),
            _ => None,
        }
    }
}

/// Directed family relations stored on family edges.
///
/// `father_of`/`mother_of` point parent to child. `partner_of` and
/// `sibling_of` are stored once per unordered pair and must be treated as
/// symmetric at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyRelation {
    FatherOf,
    MotherOf,
    PartnerOf,
    SiblingOf,
}

#[allow(clippy::should_implement_trait)]
impl FamilyRelation {
    /// Returns the string representation of this relation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FamilyRelation::FatherOf => "father_of",
            FamilyRelation::MotherOf => "mother_of",
            FamilyRelation::PartnerOf => "partner_of",
            FamilyRelation::SiblingOf => "sibling_of",
        }
    }

    /// Parses a string into a `FamilyRelation`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<FamilyRelation> {
        match s {
            "father_of" => Some(FamilyRelation::FatherOf),
            "mother_of" => Some(FamilyRelation::MotherOf),
            "partner_of" => Some(FamilyRelation::PartnerOf),
            "sibling_of" => Some(FamilyRelation::SiblingOf),
            _ => None,
        }
    }

    /// True for the parent-to-child relations followed by ancestry walks.
    pub fn is_parental(&self) -> bool {
        matches!(self, FamilyRelation::FatherOf | FamilyRelation::MotherOf)
    }

    /// True for relations stored once per unordered pair.
    pub fn is_symmetric(&self) -> bool {
        matches!(self, FamilyRelation::PartnerOf | FamilyRelation::SiblingOf)
    }
}

/// Relation labels on the steps of a relationship path.
///
/// Extends `FamilyRelation` with the derived labels produced by walking a
/// stored edge against its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathRelation {
    FatherOf,
    MotherOf,
    PartnerOf,
    SiblingOf,
    ChildOf,
    ParentOf,
}

#[allow(clippy::should_implement_trait)]
impl PathRelation {
    /// Returns the string representation of this relation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PathRelation::FatherOf => "father_of",
            PathRelation::MotherOf => "mother_of",
            PathRelation::PartnerOf => "partner_of",
            PathRelation::SiblingOf => "sibling_of",
            PathRelation::ChildOf => "child_of",
            PathRelation::ParentOf => "parent_of",
        }
    }

    /// Parses a string into a `PathRelation`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<PathRelation> {
        match s {
            "father_of" => Some(PathRelation::FatherOf),
            "mother_of" => Some(PathRelation::MotherOf),
            "partner_of" => Some(PathRelation::PartnerOf),
            "sibling_of" => Some(PathRelation::SiblingOf),
            "child_of" => Some(PathRelation::ChildOf),
            "parent_of" => Some(PathRelation::ParentOf),
            _ => None,
        }
    }

    /// The label for walking an edge of this relation in the opposite direction.
    ///
    /// `father_of` and `mother_of` both invert to the generic `child_of`;
    /// the original parent's gender is not recoverable from the child side.
    pub fn inverse(&self) -> PathRelation {
        match self {
            PathRelation::FatherOf | PathRelation::MotherOf => PathRelation::ChildOf,
            PathRelation::PartnerOf => PathRelation::PartnerOf,
            PathRelation::SiblingOf => PathRelation::SiblingOf,
            PathRelation::ChildOf => PathRelation::ParentOf,
            PathRelation::ParentOf => PathRelation::ChildOf,
        }
    }
}

impl From<FamilyRelation> for PathRelation {
    fn from(rel: FamilyRelation) -> PathRelation {
        match rel {
            FamilyRelation::FatherOf => PathRelation::FatherOf,
            FamilyRelation::MotherOf => PathRelation::MotherOf,
            FamilyRelation::PartnerOf => PathRelation::PartnerOf,
            FamilyRelation::SiblingOf => PathRelation::SiblingOf,
        }
    }
}

/// Section-end markers carried on the last verse of a liturgical or
/// paragraph unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionMarker {
    Paragraph,
    Petuchah,
    Setumah,
}

#[allow(clippy::should_implement_trait)]
impl SectionMarker {
    /// Returns the string representation of this marker.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionMarker::Paragraph => "paragraph",
            SectionMarker::Petuchah => "petuchah",
            SectionMarker::Setumah => "setumah",
        }
    }

    /// Parses a string into a `SectionMarker`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<SectionMarker> {
        match s {
            "paragraph" => Some(SectionMarker::Paragraph),
            "petuchah" => Some(SectionMarker::Petuchah),
            "setumah" => Some(SectionMarker::Setumah),
            _ => None,
        }
    }
}

/// A single tagged verse as produced by the upstream text parsers.
///
/// `reference` is the canonical `Book.Chapter.Verse` key and is unique
/// across the stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub reference: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    pub section_end: Option<SectionMarker>,
}

/// A maximal contiguous run of verses bounded by a section marker or a
/// book boundary. Derived by the segmenter, never hand-authored.
///
/// Verse ids are 1-based ordinals of the segmented input sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub reference_start: String,
    pub reference_end: String,
    pub book: String,
    pub start_verse_id: u64,
    pub end_verse_id: u64,
    pub text_combined: String,
    pub verse_count: usize,
    /// The marker that closed this passage, or `None` when it was closed by
    /// a book boundary or end of stream.
    pub section_type: Option<SectionMarker>,
}

/// A person in the relationship graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub aliases: Vec<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub description: Option<String>,
}

/// A place in the relationship graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub aliases: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub feature_type: Option<String>,
}

/// An event in the relationship graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start_year: Option<i32>,
    pub duration: Option<String>,
    pub sort_key: Option<f64>,
}

/// A people group in the relationship graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
}

/// A directed family edge between two people.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyEdge {
    pub from_id: String,
    pub to_id: String,
    pub relation: FamilyRelation,
}

/// Links a person to an event they took part in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipationEdge {
    pub person_id: String,
    pub event_id: String,
}

/// Links an event to a place where it occurred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEdge {
    pub event_id: String,
    pub place_id: String,
}

/// Links a person to a people group they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipEdge {
    pub person_id: String,
    pub group_id: String,
}

/// Links a canonical verse reference to an entity said to occur in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionEdge {
    pub verse_reference: String,
    pub entity_kind: EntityKind,
    pub entity_id: String,
}

/// One person discovered by an ancestor or descendant walk.
///
/// `relationship` is the relation of the edge that first reached the
/// person; it is `None` only for the queried person at generation 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinEntry {
    pub id: String,
    pub name: String,
    pub generation: u32,
    pub relationship: Option<FamilyRelation>,
}

/// One step of a relationship path between two people.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    pub from_id: String,
    pub to_id: String,
    pub relation: PathRelation,
    pub depth: u32,
}

/// An entity hit resolved from a mention edge.
///
/// `name` falls back to the raw entity id when the id does not resolve
/// against the entity tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionHit {
    pub id: String,
    pub name: String,
}

/// Entities mentioned in a verse or chapter, partitioned by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassageEntities {
    pub people: Vec<MentionHit>,
    pub places: Vec<MentionHit>,
    pub events: Vec<MentionHit>,
}

impl PassageEntities {
    /// True when no bucket has any hits.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.places.is_empty() && self.events.is_empty()
    }
}

/// The immediate family of a person, with symmetric relations expanded
/// in both directions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyView {
    pub parents: Vec<Person>,
    pub children: Vec<Person>,
    pub partners: Vec<Person>,
    pub siblings: Vec<Person>,
}

/// Statistics about the loaded graph snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    pub person_count: u64,
    pub place_count: u64,
    pub event_count: u64,
    pub group_count: u64,
    pub family_edge_count: u64,
    pub participation_edge_count: u64,
    pub location_edge_count: u64,
    pub membership_edge_count: u64,
    pub mention_count: u64,
}

impl GraphStats {
    /// True when no entities have been ingested.
    pub fn is_empty(&self) -> bool {
        self.person_count == 0
            && self.place_count == 0
            && self.event_count == 0
            && self.group_count == 0
    }
}
