//! Analysis pipeline: document in, keyword results out.

use wordz_core::{build_results, KeywordResult, QueryMarkers};
use wordz_extract::{DocumentText, ExtractError, KeywordSource};

/// Ask `source` for keywords in `document` and compact each keyword group
/// into one query per platform.
pub async fn analyze<S>(
    source: &S,
    document: &DocumentText,
    markers: QueryMarkers,
) -> Result<Vec<KeywordResult>, ExtractError>
where
    S: KeywordSource + ?Sized,
{
    let keywords = source.extract(document).await?;
    let results = build_results(keywords, markers);
    tracing::info!(keywords = results.len(), "analysis complete");
    Ok(results)
}
