use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::store::GraphStore;
use crate::types::{PathRelation, PathStep};

/// Finds the shortest relationship path between two people over the full
/// family edge set.
pub struct PathFinder<'a> {
    store: &'a GraphStore,
}

impl<'a> PathFinder<'a> {
    /// Creates a path finder backed by the given store.
    pub fn new(store: &'a GraphStore) -> Self {
        Self { store }
    }

    /// Finds the shortest path from `from_id` to `to_id` by edge count.
    ///
    /// Every stored family edge contributes a forward adjacency entry with
    /// its own relation and a reverse entry with the inverse relation, so
    /// the search crosses parent/child edges in either direction and
    /// treats partner/sibling edges as symmetric. Returns an empty list
    /// when the two ids are equal, when either id is unknown, or when no
    /// path exists within `max_depth` edges. When multiple shortest paths
    /// exist, the one found first in adjacency order wins; that order
    /// follows stored-edge order and is implementation-defined.
    ///
    /// The adjacency list is rebuilt from the edge set on every call,
    /// trading repeat work for snapshot consistency on a graph this size.
    pub fn find_path(&self, from_id: &str, to_id: &str, max_depth: u32) -> Vec<PathStep> {
        if from_id == to_id {
            return Vec::new();
        }
        if self.store.get_person(from_id).is_none() || self.store.get_person(to_id).is_none() {
            return Vec::new();
        }

        let adjacency = self.build_adjacency();

        // BFS with predecessor tracking. The predecessor map records the
        // relation actually used to reach each node, which may differ from
        // the first adjacency entry when two people share multiple edges.
        let mut visited: HashSet<&str> = HashSet::new();
        let mut predecessor: HashMap<&str, (&str, PathRelation)> = HashMap::new();
        let mut queue: VecDeque<(&str, u32)> = VecDeque::new();

        visited.insert(from_id);
        queue.push_back((from_id, 0));

        while let Some((current, depth)) = queue.pop_front() {
            if current == to_id {
                return self.reconstruct(from_id, to_id, &predecessor);
            }
            if depth >= max_depth {
                continue;
            }

            if let Some(neighbors) = adjacency.get(current) {
                for &(neighbor, relation) in neighbors {
                    if visited.insert(neighbor) {
                        predecessor.insert(neighbor, (current, relation));
                        queue.push_back((neighbor, depth + 1));
                    }
                }
            }
        }

        Vec::new()
    }

    /// Builds the bidirectional adjacency list from the full family edge set.
    fn build_adjacency(&self) -> HashMap<&'a str, Vec<(&'a str, PathRelation)>> {
        let mut adjacency: HashMap<&str, Vec<(&str, PathRelation)>> = HashMap::new();

        for edge in self.store.family_edges() {
            let forward = PathRelation::from(edge.relation);
            adjacency
                .entry(edge.from_id.as_str())
                .or_default()
                .push((edge.to_id.as_str(), forward));
            adjacency
                .entry(edge.to_id.as_str())
                .or_default()
                .push((edge.from_id.as_str(), forward.inverse()));
        }

        adjacency
    }

    /// Reconstructs the step list by walking the predecessor map back from
    /// the target.
    fn reconstruct(
        &self,
        from_id: &str,
        to_id: &str,
        predecessor: &HashMap<&str, (&str, PathRelation)>,
    ) -> Vec<PathStep> {
        let mut reversed: Vec<(String, String, PathRelation)> = Vec::new();
        let mut current = to_id;

        while current != from_id {
            let Some(&(parent, relation)) = predecessor.get(current) else {
                return Vec::new();
            };
            reversed.push((parent.to_string(), current.to_string(), relation));
            current = parent;
        }

        reversed.reverse();
        reversed
            .into_iter()
            .enumerate()
            .map(|(i, (from, to, relation))| PathStep {
                from_id: from,
                to_id: to,
                relation,
                depth: i as u32 + 1,
            })
            .collect()
    }
}
