use regex::Regex;

use super::books::BookRegistry;

/// Resolves free-text scripture citations into canonical
/// `Book.Chapter.Verse` keys.
///
/// The grammar accepts an optional leading digit on the book token
/// ("1 Corinthians"), whitespace or dots between the parts, and an
/// optional verse range whose end is discarded ("13:4-7" keys to verse 4).
/// Canonical keys themselves match the grammar, so normalization is
/// idempotent.
pub struct ReferenceResolver {
    registry: BookRegistry,
    citation: Regex,
    chapter: Regex,
}

impl ReferenceResolver {
    /// Creates a resolver over the given book registry.
    pub fn new(registry: BookRegistry) -> Self {
        let citation = Regex::new(r"^(\d?\s*[A-Za-z]+)[\s.]*(\d+)[:.](\d+)(?:-(\d+))?$")
            .expect("citation pattern is valid");
        let chapter = Regex::new(r"^(\d?\s*[A-Za-z]+)[\s.]*(\d+)$")
            .expect("chapter pattern is valid");

        Self {
            registry,
            citation,
            chapter,
        }
    }

    /// Creates a resolver over the standard 66-book registry.
    pub fn standard() -> Self {
        Self::new(BookRegistry::standard())
    }

    /// Returns the registry backing this resolver.
    pub fn registry(&self) -> &BookRegistry {
        &self.registry
    }

    /// Normalizes a citation to a canonical `Book.Chapter.Verse` key.
    ///
    /// Unknown book tokens degrade to title-casing the first three
    /// characters of the token (best-effort; the result may not be a valid
    /// code). Input that does not match the grammar at all is returned
    /// unchanged, so callers treat an unnormalized return as a lookup miss
    /// rather than an error. Never fails.
    pub fn normalize(&self, citation: &str) -> String {
        let caps = match self.citation.captures(citation.trim()) {
            Some(caps) => caps,
            None => return citation.to_string(),
        };

        let book_token = &caps[1];
        let chapter = &caps[2];
        let verse_start = &caps[3];
        // A range end in caps[4] is discarded: the key addresses the start
        // verse and callers needing ranges re-invoke per verse.

        let code = match self.registry.resolve(book_token) {
            Some(code) => code.to_string(),
            None => title_prefix(book_token),
        };

        format!("{}.{}.{}", code, chapter, verse_start)
    }

    /// Normalizes a chapter reference ("Romans 8", "Rom.8") to a `Book.Chapter`
    /// prefix, or `None` when the input is not a chapter reference.
    ///
    /// The book token is resolved by normalizing a synthetic verse-1 citation,
    /// so it accepts the same names and abbreviations as `normalize`.
    pub fn normalize_chapter(&self, reference: &str) -> Option<String> {
        let caps = self.chapter.captures(reference.trim())?;

        let book_token = &caps[1];
        let chapter = &caps[2];

        let synthetic = format!("{} {}:1", book_token, chapter);
        let normalized = self.normalize(&synthetic);
        let code = normalized.split('.').next()?;

        Some(format!("{}.{}", code, chapter))
    }

    /// True when `key` is a well-formed canonical key over a known book code.
    ///
    /// `normalize` cannot signal failure, so callers that must distinguish a
    /// canonical key from a best-effort fallback re-validate with this.
    pub fn is_canonical(&self, key: &str) -> bool {
        let parts: Vec<&str> = key.split('.').collect();
        if parts.len() != 3 {
            return false;
        }

        self.registry.is_known_code(parts[0])
            && parts[1].parse::<u32>().map(|n| n > 0).unwrap_or(false)
            && parts[2].parse::<u32>().map(|n| n > 0).unwrap_or(false)
    }
}

/// Title-cases the first three characters of a book token.
///
/// Fallback for unrecognized book names: "joh" becomes "Joh", "1 c"
/// becomes "1 C". Each letter that follows a non-letter is uppercased.
fn title_prefix(token: &str) -> String {
    let mut out = String::new();
    let mut prev_is_alpha = false;

    for ch in token.chars().take(3) {
        if ch.is_alphabetic() {
            if prev_is_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(ch);
            prev_is_alpha = false;
        }
    }

    out
}
