use std::collections::{BTreeMap, HashMap};

use crate::types::*;

/// Read-only snapshot of the relationship graph.
///
/// Built once by the ingestion pass and queried concurrently afterwards;
/// no query operation mutates the store. Entity tables are keyed by the
/// upstream-assigned string ids. Adjacency indexes for the parental
/// sub-graph and the mention table are derived at construction.
#[derive(Debug)]
pub struct GraphStore {
    people: BTreeMap<String, Person>,
    places: BTreeMap<String, Place>,
    events: BTreeMap<String, Event>,
    groups: BTreeMap<String, Group>,

    family_edges: Vec<FamilyEdge>,
    participation_edges: Vec<ParticipationEdge>,
    location_edges: Vec<LocationEdge>,
    membership_edges: Vec<MembershipEdge>,
    mention_edges: Vec<MentionEdge>,

    /// child id -> (parent id, relation), from father_of/mother_of edges.
    parental_in: HashMap<String, Vec<(String, FamilyRelation)>>,
    /// parent id -> (child id, relation), from father_of/mother_of edges.
    parental_out: HashMap<String, Vec<(String, FamilyRelation)>>,
    /// Count of family edges touching each person, over both directions.
    family_degree: HashMap<String, usize>,
    /// canonical verse reference -> mentioned (kind, entity id) pairs.
    mentions_by_ref: BTreeMap<String, Vec<(EntityKind, String)>>,
}

impl GraphStore {
    /// Builds a store from validated tables, deriving the adjacency and
    /// mention indexes. Called by the ingestion builder.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        people: BTreeMap<String, Person>,
        places: BTreeMap<String, Place>,
        events: BTreeMap<String, Event>,
        groups: BTreeMap<String, Group>,
        family_edges: Vec<FamilyEdge>,
        participation_edges: Vec<ParticipationEdge>,
        location_edges: Vec<LocationEdge>,
        membership_edges: Vec<MembershipEdge>,
        mention_edges: Vec<MentionEdge>,
    ) -> Self {
        let mut parental_in: HashMap<String, Vec<(String, FamilyRelation)>> = HashMap::new();
        let mut parental_out: HashMap<String, Vec<(String, FamilyRelation)>> = HashMap::new();
        let mut family_degree: HashMap<String, usize> = HashMap::new();

        for edge in &family_edges {
            if edge.relation.is_parental() {
                parental_out
                    .entry(edge.from_id.clone())
                    .or_default()
                    .push((edge.to_id.clone(), edge.relation));
                parental_in
                    .entry(edge.to_id.clone())
                    .or_default()
                    .push((edge.from_id.clone(), edge.relation));
            }
            *family_degree.entry(edge.from_id.clone()).or_default() += 1;
            *family_degree.entry(edge.to_id.clone()).or_default() += 1;
        }

        let mut mentions_by_ref: BTreeMap<String, Vec<(EntityKind, String)>> = BTreeMap::new();
        for edge in &mention_edges {
            mentions_by_ref
                .entry(edge.verse_reference.clone())
                .or_default()
                .push((edge.entity_kind, edge.entity_id.clone()));
        }

        Self {
            people,
            places,
            events,
            groups,
            family_edges,
            participation_edges,
            location_edges,
            membership_edges,
            mention_edges,
            parental_in,
            parental_out,
            family_degree,
            mentions_by_ref,
        }
    }

    // -----------------------------------------------------------------------
    // Identity lookup
    // -----------------------------------------------------------------------

    pub fn get_person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn get_place(&self, id: &str) -> Option<&Place> {
        self.places.get(id)
    }

    pub fn get_event(&self, id: &str) -> Option<&Event> {
        self.events.get(id)
    }

    pub fn get_group(&self, id: &str) -> Option<&Group> {
        self.groups.get(id)
    }

    // -----------------------------------------------------------------------
    // Ranked name resolution
    // -----------------------------------------------------------------------

    /// Finds people by name, ranked, returning at most `limit` matches.
    ///
    /// A person matches on a case-insensitive exact primary name or a
    /// substring hit on any alias. Matches rank by: exact-name matches
    /// first; then longer combined alias content (a prominence proxy);
    /// then higher family-edge degree. Ties beyond that keep id order,
    /// so the ordering is deterministic for a fixed snapshot. An empty
    /// result means no match, never an error.
    pub fn find_person(&self, name: &str, limit: usize) -> Vec<Person> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(bool, usize, usize, &Person)> = Vec::new();

        for person in self.people.values() {
            let exact = person.name.to_lowercase() == query;
            let alias_hit = person
                .aliases
                .iter()
                .any(|a| a.to_lowercase().contains(&query));
            if !exact && !alias_hit {
                continue;
            }

            let alias_len: usize = person.aliases.iter().map(|a| a.len()).sum();
            let degree = self.family_degree(&person.id);
            scored.push((exact, alias_len, degree, person));
        }

        scored.sort_by(|a, b| (b.0, b.1, b.2).cmp(&(a.0, a.1, a.2)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, _, _, p)| p.clone())
            .collect()
    }

    /// Finds places by name with the same matching and ranking rules as
    /// `find_person`. Places carry no family edges, so the degree
    /// criterion never separates them.
    pub fn find_place(&self, name: &str, limit: usize) -> Vec<Place> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(bool, usize, &Place)> = Vec::new();

        for place in self.places.values() {
            let exact = place.name.to_lowercase() == query;
            let alias_hit = place
                .aliases
                .iter()
                .any(|a| a.to_lowercase().contains(&query));
            if !exact && !alias_hit {
                continue;
            }

            let alias_len: usize = place.aliases.iter().map(|a| a.len()).sum();
            scored.push((exact, alias_len, place));
        }

        scored.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, _, p)| p.clone())
            .collect()
    }

    // -----------------------------------------------------------------------
    // Edge access
    // -----------------------------------------------------------------------

    /// All stored family edges, in ingestion order.
    pub fn family_edges(&self) -> &[FamilyEdge] {
        &self.family_edges
    }

    pub fn participation_edges(&self) -> &[ParticipationEdge] {
        &self.participation_edges
    }

    pub fn location_edges(&self) -> &[LocationEdge] {
        &self.location_edges
    }

    pub fn membership_edges(&self) -> &[MembershipEdge] {
        &self.membership_edges
    }

    /// Parents of a person: `(parent id, relation)` pairs from the
    /// father_of/mother_of edges pointing at them, in stored-edge order.
    pub fn parents_of(&self, person_id: &str) -> &[(String, FamilyRelation)] {
        self.parental_in
            .get(person_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Children of a person: `(child id, relation)` pairs from the
    /// father_of/mother_of edges they originate, in stored-edge order.
    pub fn children_of(&self, person_id: &str) -> &[(String, FamilyRelation)] {
        self.parental_out
            .get(person_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Count of family edges touching a person, over both directions.
    pub fn family_degree(&self, person_id: &str) -> usize {
        self.family_degree.get(person_id).copied().unwrap_or(0)
    }

    /// Mentioned `(kind, entity id)` pairs for an exact canonical reference.
    pub fn mentions_for(&self, reference: &str) -> &[(EntityKind, String)] {
        self.mentions_by_ref
            .get(reference)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The full mention table keyed by canonical reference.
    pub(crate) fn mention_map(&self) -> &BTreeMap<String, Vec<(EntityKind, String)>> {
        &self.mentions_by_ref
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Counts of entities and edges in the snapshot.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            person_count: self.people.len() as u64,
            place_count: self.places.len() as u64,
            event_count: self.events.len() as u64,
            group_count: self.groups.len() as u64,
            family_edge_count: self.family_edges.len() as u64,
            participation_edge_count: self.participation_edges.len() as u64,
            location_edge_count: self.location_edges.len() as u64,
            membership_edge_count: self.membership_edges.len() as u64,
            mention_count: self.mention_edges.len() as u64,
        }
    }
}
