/// In-memory entity and edge store with ranked name lookup.
pub mod store;

/// Bounded ancestor/descendant walks over the family sub-graph.
pub mod ancestry;

/// Shortest relationship path search over the full family edge set.
pub mod path;

/// Verse/chapter mention lookups.
pub mod mentions;

/// Family, timeline, place, and group queries.
pub mod queries;

pub use ancestry::AncestryTraversal;
pub use mentions::MentionIndex;
pub use path::PathFinder;
pub use queries::GraphQueryManager;
pub use store::GraphStore;
