use std::collections::HashMap;

/// The 66 canonical book codes with their accepted names and abbreviations.
///
/// Codes follow the STEP-Bible 3-letter convention: 39 Old Testament books
/// (Gen..Mal) followed by 27 New Testament books (Mat..Rev). Alias lists
/// carry the full English name first, then common abbreviations.
const BOOKS: &[(&str, &[&str])] = &[
    ("Gen", &["genesis", "gen"]),
    ("Exo", &["exodus", "exod", "ex"]),
    ("Lev", &["leviticus", "lev"]),
    ("Num", &["numbers", "num"]),
    ("Deu", &["deuteronomy", "deut", "dt"]),
    ("Jos", &["joshua", "josh"]),
    ("Jdg", &["judges", "judg"]),
    ("Rut", &["ruth"]),
    ("1Sa", &["1 samuel", "1sam", "1 sam"]),
    ("2Sa", &["2 samuel", "2sam", "2 sam"]),
    ("1Ki", &["1 kings", "1kgs", "1 kgs"]),
    ("2Ki", &["2 kings", "2kgs", "2 kgs"]),
    ("1Ch", &["1 chronicles", "1chr", "1 chr"]),
    ("2Ch", &["2 chronicles", "2chr", "2 chr"]),
    ("Ezr", &["ezra"]),
    ("Neh", &["nehemiah", "neh"]),
    ("Est", &["esther", "esth"]),
    ("Job", &["job"]),
    ("Psa", &["psalms", "psalm", "ps"]),
    ("Pro", &["proverbs", "prov", "pr"]),
    ("Ecc", &["ecclesiastes", "eccl"]),
    ("Sng", &["song of solomon", "song", "sos"]),
    ("Isa", &["isaiah", "isa"]),
    ("Jer", &["jeremiah", "jer"]),
    ("Lam", &["lamentations", "lam"]),
    ("Ezk", &["ezekiel", "ezek", "eze"]),
    ("Dan", &["daniel", "dan"]),
    ("Hos", &["hosea", "hos"]),
    ("Jol", &["joel"]),
    ("Amo", &["amos"]),
    ("Oba", &["obadiah", "obad"]),
    ("Jon", &["jonah"]),
    ("Mic", &["micah", "mic"]),
    ("Nam", &["nahum", "nah"]),
    ("Hab", &["habakkuk", "hab"]),
    ("Zep", &["zephaniah", "zeph"]),
    ("Hag", &["haggai", "hag"]),
    ("Zec", &["zechariah", "zech"]),
    ("Mal", &["malachi", "mal"]),
    ("Mat", &["matthew", "matt", "mt"]),
    ("Mrk", &["mark", "mk"]),
    ("Luk", &["luke", "lk"]),
    ("Jhn", &["john", "jn"]),
    ("Act", &["acts"]),
    ("Rom", &["romans", "rom"]),
    ("1Co", &["1 corinthians", "1cor", "1 cor"]),
    ("2Co", &["2 corinthians", "2cor", "2 cor"]),
    ("Gal", &["galatians", "gal"]),
    ("Eph", &["ephesians", "eph"]),
    ("Php", &["philippians", "phil"]),
    ("Col", &["colossians", "col"]),
    ("1Th", &["1 thessalonians", "1thess", "1 thess"]),
    ("2Th", &["2 thessalonians", "2thess", "2 thess"]),
    ("1Ti", &["1 timothy", "1tim", "1 tim"]),
    ("2Ti", &["2 timothy", "2tim", "2 tim"]),
    ("Tit", &["titus"]),
    ("Phm", &["philemon", "phlm"]),
    ("Heb", &["hebrews", "heb"]),
    ("Jas", &["james", "jas"]),
    ("1Pe", &["1 peter", "1pet", "1 pet"]),
    ("2Pe", &["2 peter", "2pet", "2 pet"]),
    ("1Jn", &["1 john", "1jn"]),
    ("2Jn", &["2 john", "2jn"]),
    ("3Jn", &["3 john", "3jn"]),
    ("Jud", &["jude"]),
    ("Rev", &["revelation", "rev"]),
];

/// Immutable registry mapping book names and abbreviations to canonical
/// 3-letter codes.
///
/// Constructed once and injected into a `ReferenceResolver`; separate
/// resolver instances can carry different vocabularies (e.g. localized
/// book names) by building their own registries.
#[derive(Debug, Clone)]
pub struct BookRegistry {
    /// Canonical codes in canon order.
    codes: Vec<String>,
    /// Lowercased alias -> canonical code. Every code is also registered
    /// as an alias of itself so canonical keys re-resolve.
    aliases: HashMap<String, String>,
}

impl BookRegistry {
    /// Builds the standard 66-book registry with English names and
    /// common abbreviations.
    pub fn standard() -> Self {
        Self::from_entries(
            BOOKS
                .iter()
                .map(|(code, names)| {
                    (
                        (*code).to_string(),
                        names.iter().map(|n| (*n).to_string()).collect(),
                    )
                })
                .collect::<Vec<_>>(),
        )
    }

    /// Builds a registry from `(code, alias list)` entries.
    ///
    /// Aliases are matched case-insensitively. The code itself is always
    /// accepted as an alias, so callers only list additional names.
    pub fn from_entries(entries: Vec<(String, Vec<String>)>) -> Self {
        let mut codes = Vec::with_capacity(entries.len());
        let mut aliases = HashMap::new();

        for (code, names) in entries {
            aliases.insert(code.to_lowercase(), code.clone());
            for name in names {
                aliases.insert(name.to_lowercase(), code.clone());
            }
            codes.push(code);
        }

        Self { codes, aliases }
    }

    /// Resolves a book token to its canonical code.
    ///
    /// The token is matched case-insensitively after trimming; returns
    /// `None` when the token is not a known name, abbreviation, or code.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.aliases
            .get(&token.trim().to_lowercase())
            .map(String::as_str)
    }

    /// True when `code` is one of the canonical codes (exact match).
    pub fn is_known_code(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// Number of books in the registry.
    pub fn book_count(&self) -> usize {
        self.codes.len()
    }

    /// Canonical codes in canon order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }
}
