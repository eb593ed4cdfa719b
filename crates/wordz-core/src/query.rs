//! Query compaction: turns a bag of related terms into one boolean-OR query.
//!
//! Terms sharing a character prefix ("stem") of at least four characters are
//! collapsed into `stem` + truncation marker; everything else is emitted as a
//! literal. The pipeline runs in four pure stages:
//!
//! ```text
//! raw terms ──► TermSet ──► StemIndex ──► QueryPlan ──► query string
//!  normalize     candidates   group         render(marker)
//! ```
//!
//! Every stage preserves first-seen order. Ties between equal-length stems
//! and the left-to-right token order both depend on it, so the index and the
//! token set are `indexmap` collections rather than hash-only ones.
//!
//! Lengths and prefixes are counted in `char`s.

use indexmap::{IndexMap, IndexSet};

use crate::types::TruncationMarker;

/// Terms shorter than this never propose a stem.
pub const MIN_STEM_SOURCE_LEN: usize = 5;
/// Shortest stem ever proposed.
pub const MIN_STEM_LEN: usize = 4;
/// At most this many trailing chars are cut from a term to propose a stem.
pub const MAX_TRUNCATION: usize = 3;
/// Separator placed between query tokens.
pub const OR_SEPARATOR: &str = " OR ";

// ---------------------------------------------------------------------------
// Term normalizer
// ---------------------------------------------------------------------------

/// Deduplicated, normalised terms in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: IndexSet<String>,
}

impl TermSet {
    /// Lower-case and trim every input, drop blanks, keep the first copy of
    /// each normalised value.
    pub fn normalize<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = raw
            .into_iter()
            .map(|t| t.as_ref().to_lowercase().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Stem candidate generator
// ---------------------------------------------------------------------------

/// Stem candidates in creation order, each with the indices of the terms it
/// prefixes.
#[derive(Debug, Clone, Default)]
pub struct StemIndex {
    stems: IndexMap<String, Vec<usize>>,
}

impl StemIndex {
    /// Propose stems from every term of at least [`MIN_STEM_SOURCE_LEN`]
    /// chars, then attach every term (of any length) to each stem it starts
    /// with.
    pub fn build(terms: &TermSet) -> Self {
        let mut stems: IndexMap<String, Vec<usize>> = IndexMap::new();

        for term in terms.iter() {
            let len = term.chars().count();
            if len < MIN_STEM_SOURCE_LEN {
                continue;
            }
            for cut in 1..=MAX_TRUNCATION {
                let stem_len = len - cut;
                if stem_len < MIN_STEM_LEN {
                    break;
                }
                stems.entry(char_prefix(term, stem_len).to_string()).or_default();
            }
        }

        for (index, term) in terms.iter().enumerate() {
            for (stem, members) in stems.iter_mut() {
                if term.starts_with(stem.as_str()) {
                    members.push(index);
                }
            }
        }

        Self { stems }
    }

    pub fn len(&self) -> usize {
        self.stems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }

    /// Member term indices of `stem`, in term order.
    pub fn members(&self, stem: &str) -> Option<&[usize]> {
        self.stems.get(stem).map(Vec::as_slice)
    }

    /// Stems longest first; equal lengths keep creation order.
    pub fn by_length_desc(&self) -> Vec<(&str, &[usize])> {
        let mut ordered: Vec<(&str, &[usize])> = self
            .stems
            .iter()
            .map(|(stem, members)| (stem.as_str(), members.as_slice()))
            .collect();
        // sort_by_key is stable, which is what the tie-break relies on.
        ordered.sort_by_key(|(stem, _)| std::cmp::Reverse(stem.chars().count()));
        ordered
    }
}

/// The first `n` chars of `s`.
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

// ---------------------------------------------------------------------------
// Stem grouper
// ---------------------------------------------------------------------------

/// One rendered unit of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    /// A stem consuming two or more terms.
    Stem { stem: String, members: Vec<String> },
    /// A term no stem group absorbed.
    Literal(String),
}

impl Group {
    /// Terms this group stands for.
    pub fn terms(&self) -> Vec<&str> {
        match self {
            Group::Stem { members, .. } => members.iter().map(String::as_str).collect(),
            Group::Literal(term) => vec![term.as_str()],
        }
    }

    fn render(&self, marker: TruncationMarker) -> String {
        match self {
            Group::Stem { stem, .. } => format!("{stem}{}", marker.as_char()),
            Group::Literal(term) => term.clone(),
        }
    }
}

/// Marker-independent grouping of a term list: stem groups in selection
/// order, then literals in term order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPlan {
    groups: Vec<Group>,
}

impl QueryPlan {
    /// Group `terms` greedily, longest stem first. A stem is taken only when
    /// at least two of its members are still unused; it then consumes all of
    /// them.
    pub fn build(terms: &TermSet, index: &StemIndex) -> Self {
        let mut used = vec![false; terms.len()];
        let mut groups = Vec::new();

        for (stem, members) in index.by_length_desc() {
            let unused: Vec<usize> = members.iter().copied().filter(|&m| !used[m]).collect();
            if unused.len() < 2 {
                continue;
            }
            for &m in &unused {
                used[m] = true;
            }
            groups.push(Group::Stem {
                stem: stem.to_string(),
                members: unused
                    .iter()
                    .filter_map(|&m| terms.get(m))
                    .map(str::to_string)
                    .collect(),
            });
        }

        for (i, term) in terms.iter().enumerate() {
            if !used[i] {
                groups.push(Group::Literal(term.to_string()));
            }
        }

        Self { groups }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Stems chosen, in selection order.
    pub fn stems(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().filter_map(|g| match g {
            Group::Stem { stem, .. } => Some(stem.as_str()),
            Group::Literal(_) => None,
        })
    }

    /// Terms left as literals, in term order.
    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().filter_map(|g| match g {
            Group::Literal(term) => Some(term.as_str()),
            Group::Stem { .. } => None,
        })
    }

    // -----------------------------------------------------------------------
    // Query assembler
    // -----------------------------------------------------------------------

    /// Render the plan with `marker` appended to each stem, joined by `" OR "`.
    pub fn render(&self, marker: TruncationMarker) -> String {
        let tokens: IndexSet<String> = self.groups.iter().map(|g| g.render(marker)).collect();
        tokens.into_iter().collect::<Vec<_>>().join(OR_SEPARATOR)
    }
}

/// Group `terms` without choosing a marker yet.
pub fn plan_query<I, S>(terms: I) -> QueryPlan
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let terms = TermSet::normalize(terms);
    let index = StemIndex::build(&terms);
    QueryPlan::build(&terms, &index)
}

/// Compact `terms` into a boolean-OR query using `marker` for truncated stems.
///
/// ```
/// use wordz_core::{query::compact_query, TruncationMarker};
///
/// let q = compact_query(["programmed", "programming", "software"], TruncationMarker::Plus);
/// assert_eq!(q, "programm+ OR software");
/// ```
pub fn compact_query<I, S>(terms: I, marker: TruncationMarker) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    plan_query(terms).render(marker)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
