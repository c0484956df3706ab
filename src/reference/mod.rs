//! Citation normalization.
//!
//! Turns free-text scripture citations ("John 3:16", "1 Cor 13:4-7") into
//! the canonical `Book.Chapter.Verse` keys used as join keys everywhere
//! else in the engine.

mod books;
mod resolver;

pub use books::BookRegistry;
pub use resolver::ReferenceResolver;
