//! Text rendering of keyword results for each [`View`].

use std::fmt::Write as _;

use wordz_core::{KeywordResult, SearchPlatform, View};

/// Render `results` as `view`. An empty result list renders as an empty
/// string, except in the JSON view where it is `[]`.
pub fn render(results: &[KeywordResult], view: View) -> serde_json::Result<String> {
    match view {
        View::Cards => Ok(cards(results)),
        View::Orbit => Ok(queries(results, SearchPlatform::Orbit)),
        View::Google => Ok(queries(results, SearchPlatform::GooglePatents)),
        View::Json => serde_json::to_string_pretty(results),
    }
}

fn cards(results: &[KeywordResult]) -> String {
    let mut out = String::new();
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", result.keyword);
        let _ = writeln!(out, "  {}", result.synonyms.join(" / "));
    }
    out
}

fn queries(results: &[KeywordResult], platform: SearchPlatform) -> String {
    tracing::debug!(%platform, keywords = results.len(), "rendering queries");
    let width = results
        .iter()
        .map(|r| r.keyword.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for result in results {
        let _ = writeln!(out, "{:<width$}  {}", result.keyword, result.query_for(platform));
    }
    out
}
