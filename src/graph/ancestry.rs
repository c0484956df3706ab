use std::collections::HashSet;

use crate::graph::store::GraphStore;
use crate::types::{FamilyRelation, KinEntry};

/// Which side of the parental edges a walk follows.
enum WalkDirection {
    /// Child to parent: follow edges where the current node is the target.
    Up,
    /// Parent to child: follow edges where the current node is the source.
    Down,
}

/// Computes bounded ancestor and descendant closures over the family
/// sub-graph.
pub struct AncestryTraversal<'a> {
    store: &'a GraphStore,
}

impl<'a> AncestryTraversal<'a> {
    /// Creates a traversal backed by the given store.
    pub fn new(store: &'a GraphStore) -> Self {
        Self { store }
    }

    /// Walks up the father_of/mother_of edges from a person.
    ///
    /// Generation 0 is the queried person with no relationship label; each
    /// further generation holds the people first reached at that distance,
    /// labeled with the relation of the reaching edge. People reachable by
    /// multiple paths appear once, at their first-reached generation; ties
    /// within a generation follow stored-edge order. A person with no
    /// parental edges yields only themselves. An unknown id yields an
    /// empty list.
    pub fn ancestors(&self, person_id: &str, max_generations: u32) -> Vec<KinEntry> {
        self.walk(person_id, max_generations, WalkDirection::Up)
    }

    /// Walks down the father_of/mother_of edges from a person. Symmetric
    /// to `ancestors`.
    pub fn descendants(&self, person_id: &str, max_generations: u32) -> Vec<KinEntry> {
        self.walk(person_id, max_generations, WalkDirection::Down)
    }

    /// Generation-bounded closure shared by both walks.
    ///
    /// Terminates because each round advances the generation counter, which
    /// is capped, and the visited set prevents revisiting on cyclic data.
    fn walk(&self, person_id: &str, max_generations: u32, direction: WalkDirection) -> Vec<KinEntry> {
        let root = match self.store.get_person(person_id) {
            Some(person) => person,
            None => return Vec::new(),
        };

        let mut results = vec![KinEntry {
            id: root.id.clone(),
            name: root.name.clone(),
            generation: 0,
            relationship: None,
        }];

        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(root.id.clone());

        let mut frontier: Vec<String> = vec![root.id.clone()];

        for generation in 1..=max_generations {
            let mut next: Vec<String> = Vec::new();

            for current in &frontier {
                let neighbors: &[(String, FamilyRelation)] = match direction {
                    WalkDirection::Up => self.store.parents_of(current),
                    WalkDirection::Down => self.store.children_of(current),
                };

                for (neighbor_id, relation) in neighbors {
                    if !visited.insert(neighbor_id.clone()) {
                        continue;
                    }

                    let name = self
                        .store
                        .get_person(neighbor_id)
                        .map(|p| p.name.clone())
                        .unwrap_or_else(|| neighbor_id.clone());

                    results.push(KinEntry {
                        id: neighbor_id.clone(),
                        name,
                        generation,
                        relationship: Some(*relation),
                    });
                    next.push(neighbor_id.clone());
                }
            }

            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        results
    }
}
