use std::collections::HashSet;

use crate::graph::store::GraphStore;
use crate::types::{EntityKind, MentionHit, PassageEntities};

/// Resolves "what entities are mentioned in verse/chapter X" queries over
/// the mention edges, keyed by canonical reference.
pub struct MentionIndex<'a> {
    store: &'a GraphStore,
}

impl<'a> MentionIndex<'a> {
    /// Creates a mention index backed by the given store.
    pub fn new(store: &'a GraphStore) -> Self {
        Self { store }
    }

    /// Entities mentioned in a single verse, by exact canonical key.
    ///
    /// Hits keep natural table order. A reference with no mention edges
    /// yields empty buckets, never an error.
    pub fn verse_entities(&self, reference: &str) -> PassageEntities {
        let mut entities = PassageEntities::default();

        for (kind, entity_id) in self.store.mentions_for(reference) {
            self.push_hit(&mut entities, *kind, entity_id);
        }

        entities
    }

    /// Entities mentioned anywhere in a chapter.
    ///
    /// Matches every verse key under the `Book.Chapter.` prefix and
    /// deduplicates identical `(kind, id)` pairs across verses, keeping
    /// first-seen order.
    pub fn chapter_entities(&self, book: &str, chapter: u32) -> PassageEntities {
        let prefix = format!("{}.{}.", book, chapter);
        let mut entities = PassageEntities::default();
        let mut seen: HashSet<(EntityKind, &str)> = HashSet::new();

        // Plain scan with a prefix filter: keys like "Gen.10.1" sort between
        // "Gen.1.1" and "Gen.1.2", so a range walk cannot stop at the first
        // non-matching key.
        for (reference, mentions) in self.store.mention_map() {
            if !reference.starts_with(&prefix) {
                continue;
            }
            for (kind, entity_id) in mentions {
                if seen.insert((*kind, entity_id.as_str())) {
                    self.push_hit(&mut entities, *kind, entity_id);
                }
            }
        }

        entities
    }

    /// Resolves one mention to a display name and files it in its bucket.
    ///
    /// Ids that do not resolve against the entity tables fall back to the
    /// raw id string. Group mentions have no bucket and are skipped.
    fn push_hit(&self, entities: &mut PassageEntities, kind: EntityKind, entity_id: &str) {
        match kind {
            EntityKind::Person => {
                let name = self
                    .store
                    .get_person(entity_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| entity_id.to_string());
                entities.people.push(MentionHit {
                    id: entity_id.to_string(),
                    name,
                });
            }
            EntityKind::Place => {
                let name = self
                    .store
                    .get_place(entity_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| entity_id.to_string());
                entities.places.push(MentionHit {
                    id: entity_id.to_string(),
                    name,
                });
            }
            EntityKind::Event => {
                let name = self
                    .store
                    .get_event(entity_id)
                    .map(|e| e.title.clone())
                    .unwrap_or_else(|| entity_id.to_string());
                entities.events.push(MentionHit {
                    id: entity_id.to_string(),
                    name,
                });
            }
            EntityKind::Group => {}
        }
    }
}
