//! Query assertion macros for wordz harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! grouping invariant a query violated.

/// Assert that a rendered query has no empty and no repeated tokens.
///
/// ```rust
/// assert_distinct_tokens!(query);
/// ```
#[macro_export]
macro_rules! assert_distinct_tokens {
    ($query:expr) => {{
        let query: &str = &$query;
        let tokens = $crate::common::tokens(query);
        for (i, token) in tokens.iter().enumerate() {
            if token.is_empty() {
                panic!("assert_distinct_tokens! failed: empty token at {i} in {query:?}");
            }
            if tokens[..i].contains(token) {
                panic!("assert_distinct_tokens! failed: {token:?} repeated in {query:?}");
            }
        }
    }};
}

/// Assert that every stem group in a plan has at least two members, each of
/// which starts with the stem.
#[macro_export]
macro_rules! assert_stem_groups_valid {
    ($plan:expr) => {{
        let plan: &wordz::query::QueryPlan = &$plan;
        for group in plan.groups() {
            if let wordz::query::Group::Stem { stem, members } = group {
                if members.len() < 2 {
                    panic!(
                        "assert_stem_groups_valid! failed: stem {stem:?} has {} member(s): {members:?}",
                        members.len()
                    );
                }
                for m in members {
                    if !m.starts_with(stem.as_str()) {
                        panic!("assert_stem_groups_valid! failed: {m:?} does not start with {stem:?}");
                    }
                }
            }
        }
    }};
}

/// Assert that the plan covers each normalised input term exactly once.
#[macro_export]
macro_rules! assert_covers_each_term_once {
    ($plan:expr, $terms:expr) => {{
        let plan: &wordz::query::QueryPlan = &$plan;
        let mut expected: Vec<String> = $crate::common::normalized(&$terms[..]);
        let mut covered: Vec<String> = plan
            .groups()
            .iter()
            .flat_map(|g| g.terms())
            .map(str::to_string)
            .collect();
        expected.sort();
        covered.sort();
        pretty_assertions::assert_eq!(covered, expected, "plan must cover each term exactly once");
    }};
}
