use std::path::Path;

use tracing::debug;

use crate::config::EngineConfig;
use crate::errors::Result;
use crate::graph::{AncestryTraversal, GraphQueryManager, GraphStore, MentionIndex, PathFinder};
use crate::ingest;
use crate::passages;
use crate::reference::ReferenceResolver;
use crate::types::*;

/// Central facade that coordinates the resolver, the graph store, and the
/// traversal subsystems.
///
/// The snapshot behind a `StudyGraph` is immutable; every query method
/// takes `&self` and is safe to call from many threads without
/// coordination.
pub struct StudyGraph {
    store: GraphStore,
    resolver: ReferenceResolver,
    config: EngineConfig,
}

impl StudyGraph {
    /// Wraps a built store with the standard resolver and default config.
    pub fn new(store: GraphStore) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    /// Wraps a built store with the standard resolver and the given config.
    pub fn with_config(store: GraphStore, config: EngineConfig) -> Self {
        Self {
            store,
            resolver: ReferenceResolver::standard(),
            config,
        }
    }

    /// Wraps a built store with a caller-supplied resolver, for
    /// vocabularies other than the standard English one.
    pub fn with_resolver(
        store: GraphStore,
        resolver: ReferenceResolver,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            resolver,
            config,
        }
    }

    /// Loads a snapshot from a JSON record file and wraps it.
    pub fn load(snapshot_path: &Path) -> Result<Self> {
        let resolver = ReferenceResolver::standard();
        let store = ingest::load_snapshot(snapshot_path, &resolver)?;
        Ok(Self {
            store,
            resolver,
            config: EngineConfig::default(),
        })
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn resolver(&self) -> &ReferenceResolver {
        &self.resolver
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Reference resolution
    // -----------------------------------------------------------------------

    /// Normalizes a citation to a canonical key. See
    /// [`ReferenceResolver::normalize`].
    pub fn normalize(&self, citation: &str) -> String {
        self.resolver.normalize(citation)
    }

    /// Normalizes a chapter reference to a `Book.Chapter` prefix. See
    /// [`ReferenceResolver::normalize_chapter`].
    pub fn normalize_chapter(&self, reference: &str) -> Option<String> {
        self.resolver.normalize_chapter(reference)
    }

    // -----------------------------------------------------------------------
    // Passage segmentation
    // -----------------------------------------------------------------------

    /// Segments an ordered verse stream into passages. Offline bulk
    /// operation; see [`passages::segment`].
    pub fn segment(&self, verses: &[VerseRecord]) -> Vec<Passage> {
        passages::segment(verses)
    }

    // -----------------------------------------------------------------------
    // Entity resolution
    // -----------------------------------------------------------------------

    /// Finds people by name, ranked, capped at the configured match limit.
    pub fn find_person(&self, name: &str) -> Vec<Person> {
        self.store.find_person(name, self.config.match_limit)
    }

    /// Finds places by name, ranked, capped at the configured match limit.
    pub fn find_place(&self, name: &str) -> Vec<Place> {
        self.store.find_place(name, self.config.match_limit)
    }

    // -----------------------------------------------------------------------
    // Traversal
    // -----------------------------------------------------------------------

    /// Ancestors of a person, bounded by `max_generations` (configured
    /// default when `None`).
    pub fn ancestors(&self, person_id: &str, max_generations: Option<u32>) -> Vec<KinEntry> {
        let cap = max_generations.unwrap_or(self.config.default_generations);
        debug!(person_id, cap, "ancestor walk");
        AncestryTraversal::new(&self.store).ancestors(person_id, cap)
    }

    /// Descendants of a person, bounded by `max_generations` (configured
    /// default when `None`).
    pub fn descendants(&self, person_id: &str, max_generations: Option<u32>) -> Vec<KinEntry> {
        let cap = max_generations.unwrap_or(self.config.default_generations);
        debug!(person_id, cap, "descendant walk");
        AncestryTraversal::new(&self.store).descendants(person_id, cap)
    }

    /// Shortest relationship path between two people, bounded by
    /// `max_depth` (configured default when `None`). Empty when the people
    /// are identical, unknown, or unconnected within the cap.
    pub fn find_path(
        &self,
        person1_id: &str,
        person2_id: &str,
        max_depth: Option<u32>,
    ) -> Vec<PathStep> {
        let cap = max_depth.unwrap_or(self.config.default_path_depth);
        debug!(person1_id, person2_id, cap, "path search");
        PathFinder::new(&self.store).find_path(person1_id, person2_id, cap)
    }

    // -----------------------------------------------------------------------
    // Mentions
    // -----------------------------------------------------------------------

    /// Entities mentioned in a verse or chapter.
    ///
    /// The reference is normalized first, so free-text citations work:
    /// "John 3:16" queries the verse, "Romans 8" queries the chapter.
    /// Anything else yields empty buckets.
    pub fn entities_for(&self, reference: &str) -> PassageEntities {
        let index = MentionIndex::new(&self.store);

        let normalized = self.resolver.normalize(reference);
        if normalized.split('.').count() == 3 {
            debug!(reference = %normalized, "verse-level mention lookup");
            return index.verse_entities(&normalized);
        }

        if let Some(prefix) = self.resolver.normalize_chapter(reference) {
            if let Some((book, chapter)) = prefix.split_once('.') {
                if let Ok(chapter) = chapter.parse::<u32>() {
                    debug!(book, chapter, "chapter-level mention lookup");
                    return index.chapter_entities(book, chapter);
                }
            }
        }

        PassageEntities::default()
    }

    // -----------------------------------------------------------------------
    // Relational queries
    // -----------------------------------------------------------------------

    /// The immediate family of a person.
    pub fn family_of(&self, person_id: &str) -> FamilyView {
        GraphQueryManager::new(&self.store).family_of(person_id)
    }

    /// Events a person took part in, ordered by sort key.
    pub fn events_for_person(&self, person_id: &str) -> Vec<Event> {
        GraphQueryManager::new(&self.store).events_for_person(person_id)
    }

    /// Places where an event occurred.
    pub fn places_for_event(&self, event_id: &str) -> Vec<Place> {
        GraphQueryManager::new(&self.store).places_for_event(event_id)
    }

    /// Events located at a place, ordered by sort key.
    pub fn events_at_place(&self, place_id: &str) -> Vec<Event> {
        GraphQueryManager::new(&self.store).events_at_place(place_id)
    }

    /// People who took part in any event located at a place.
    pub fn people_at_place(&self, place_id: &str) -> Vec<Person> {
        GraphQueryManager::new(&self.store).people_at_place(place_id)
    }

    /// Members of a people group.
    pub fn members_of(&self, group_id: &str) -> Vec<Person> {
        GraphQueryManager::new(&self.store).members_of(group_id)
    }

    /// Groups a person belongs to.
    pub fn groups_for(&self, person_id: &str) -> Vec<Group> {
        GraphQueryManager::new(&self.store).groups_for(person_id)
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Counts of entities and edges in the snapshot.
    pub fn stats(&self) -> GraphStats {
        self.store.stats()
    }
}
