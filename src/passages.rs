//! Passage segmentation.
//!
//! Groups an ordered stream of tagged verses into passage spans bounded by
//! section-end markers and book boundaries. Runs once, offline, over the
//! full verse sequence; it does not participate in interactive queries.

use crate::types::{Passage, SectionMarker, VerseRecord};

/// Segments an ordered verse sequence into passages.
///
/// A passage closes when its verse carries a section-end marker, or when
/// the next verse belongs to a different book, or at end of stream. The
/// boundary check happens before a verse is appended and the marker check
/// after, so the two close rules never fire on the same scan step. The
/// returned passages exactly partition the input: every verse lands in
/// exactly one passage, in the original order.
///
/// Verse ids in the output are 1-based ordinals of the input sequence.
/// An empty input yields an empty output.
pub fn segment(verses: &[VerseRecord]) -> Vec<Passage> {
    let mut passages: Vec<Passage> = Vec::new();
    let mut current: Vec<(u64, &VerseRecord)> = Vec::new();
    let mut current_book: Option<&str> = None;

    for (index, verse) in verses.iter().enumerate() {
        let ordinal = index as u64 + 1;

        // A new book closes the open passage before this verse joins one.
        if let Some(book) = current_book {
            if book != verse.book && !current.is_empty() {
                passages.push(close_passage(&current, None));
                current.clear();
            }
        }
        current_book = Some(&verse.book);

        current.push((ordinal, verse));

        if let Some(marker) = verse.section_end {
            passages.push(close_passage(&current, Some(marker)));
            current.clear();
        }
    }

    if !current.is_empty() {
        passages.push(close_passage(&current, None));
    }

    passages
}

/// Builds a `Passage` from the accumulated verses.
///
/// `section_type` is the marker that closed the passage, or `None` when it
/// was closed by a book boundary or end of stream.
fn close_passage(verses: &[(u64, &VerseRecord)], section_type: Option<SectionMarker>) -> Passage {
    let (first_id, first) = verses[0];
    let (last_id, last) = verses[verses.len() - 1];

    let text_combined = verses
        .iter()
        .map(|(_, v)| v.text.as_str())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Passage {
        reference_start: first.reference.clone(),
        reference_end: last.reference.clone(),
        book: first.book.clone(),
        start_verse_id: first_id,
        end_verse_id: last_id,
        text_combined,
        verse_count: verses.len(),
        section_type,
    }
}
