//! Test builders: ergonomic constructors for `Keyword` lists and helpers
//! for taking rendered queries apart.
//!
//! These are designed for readability in test assertions, not for
//! production use.

use wordz::Keyword;

/// Fluent builder for a list of [`Keyword`] fixtures.
///
/// ```rust
/// let keywords = KeywordsBuilder::new()
///     .keyword("printer", ["printers", "printing"])
///     .keyword("ink", ["toner"])
///     .build();
/// ```
#[derive(Default)]
pub struct KeywordsBuilder {
    keywords: Vec<Keyword>,
}

impl KeywordsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword<const N: usize>(mut self, keyword: &str, synonyms: [&str; N]) -> Self {
        self.keywords.push(Keyword::new(keyword, synonyms));
        self
    }

    pub fn build(self) -> Vec<Keyword> {
        self.keywords
    }
}

/// Split a rendered query back into its tokens.
pub fn tokens(query: &str) -> Vec<&str> {
    if query.is_empty() {
        Vec::new()
    } else {
        query.split(" OR ").collect()
    }
}

/// Lower-case, trim and dedupe `terms` the way the query pipeline does.
pub fn normalized<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for term in terms {
        let t = term.as_ref().to_lowercase().trim().to_string();
        if !t.is_empty() && !out.contains(&t) {
            out.push(t);
        }
    }
    out
}
