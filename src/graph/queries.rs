use std::cmp::Ordering;
use std::collections::HashSet;

use crate::graph::store::GraphStore;
use crate::types::*;

/// Relational queries over the participation, location, membership, and
/// family edges.
pub struct GraphQueryManager<'a> {
    store: &'a GraphStore,
}

impl<'a> GraphQueryManager<'a> {
    /// Creates a query manager backed by the given store.
    pub fn new(store: &'a GraphStore) -> Self {
        Self { store }
    }

    /// The immediate family of a person.
    ///
    /// Partner and sibling edges are stored once per pair, so both
    /// directions are expanded here. An unknown id yields an empty view.
    pub fn family_of(&self, person_id: &str) -> FamilyView {
        let mut view = FamilyView::default();

        for edge in self.store.family_edges() {
            if edge.relation.is_parental() {
                if edge.to_id == person_id {
                    self.push_person(&mut view.parents, &edge.from_id);
                } else if edge.from_id == person_id {
                    self.push_person(&mut view.children, &edge.to_id);
                }
                continue;
            }

            let other = if edge.from_id == person_id {
                &edge.to_id
            } else if edge.to_id == person_id {
                &edge.from_id
            } else {
                continue;
            };

            match edge.relation {
                FamilyRelation::PartnerOf => self.push_person(&mut view.partners, other),
                FamilyRelation::SiblingOf => self.push_person(&mut view.siblings, other),
                _ => {}
            }
        }

        view
    }

    /// Events a person took part in, ordered by sort key.
    pub fn events_for_person(&self, person_id: &str) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .store
            .participation_edges()
            .iter()
            .filter(|e| e.person_id == person_id)
            .filter_map(|e| self.store.get_event(&e.event_id).cloned())
            .collect();

        sort_events(&mut events);
        events
    }

    /// Places where an event occurred.
    pub fn places_for_event(&self, event_id: &str) -> Vec<Place> {
        self.store
            .location_edges()
            .iter()
            .filter(|e| e.event_id == event_id)
            .filter_map(|e| self.store.get_place(&e.place_id).cloned())
            .collect()
    }

    /// Events located at a place, ordered by sort key.
    pub fn events_at_place(&self, place_id: &str) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .store
            .location_edges()
            .iter()
            .filter(|e| e.place_id == place_id)
            .filter_map(|e| self.store.get_event(&e.event_id).cloned())
            .collect();

        sort_events(&mut events);
        events
    }

    /// People who took part in any event located at a place.
    ///
    /// Joins the location edges against the participation edges and
    /// deduplicates by person id, keeping first-occurrence order.
    pub fn people_at_place(&self, place_id: &str) -> Vec<Person> {
        let event_ids: HashSet<&str> = self
            .store
            .location_edges()
            .iter()
            .filter(|e| e.place_id == place_id)
            .map(|e| e.event_id.as_str())
            .collect();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut people: Vec<Person> = Vec::new();

        for edge in self.store.participation_edges() {
            if !event_ids.contains(edge.event_id.as_str()) {
                continue;
            }
            if !seen.insert(edge.person_id.as_str()) {
                continue;
            }
            if let Some(person) = self.store.get_person(&edge.person_id) {
                people.push(person.clone());
            }
        }

        people
    }

    /// Members of a people group.
    pub fn members_of(&self, group_id: &str) -> Vec<Person> {
        self.store
            .membership_edges()
            .iter()
            .filter(|e| e.group_id == group_id)
            .filter_map(|e| self.store.get_person(&e.person_id).cloned())
            .collect()
    }

    /// Groups a person belongs to.
    pub fn groups_for(&self, person_id: &str) -> Vec<Group> {
        self.store
            .membership_edges()
            .iter()
            .filter(|e| e.person_id == person_id)
            .filter_map(|e| self.store.get_group(&e.group_id).cloned())
            .collect()
    }

    fn push_person(&self, bucket: &mut Vec<Person>, id: &str) {
        if let Some(person) = self.store.get_person(id) {
            bucket.push(person.clone());
        }
    }
}

/// Orders events by sort key, with unkeyed events last.
fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| match (a.sort_key, b.sort_key) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
