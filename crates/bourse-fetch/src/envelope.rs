//! Search-hit envelope unwrapping.

use crate::FetchError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Unwraps `{ "hits": { "hits": [ { "_source": <record> }, ... ] } }` into
/// the ordered list of records.
///
/// No filtering is applied; records keep the order of the hit list. A hit
/// without `_source`, or whose record does not have the shape of `T`, is
/// skipped with a warning so one bad record never hides the rest of the
/// collection.
///
/// # Errors
///
/// Returns [`FetchError::MalformedResponse`] if the body is not JSON or the
/// hit list is missing.
pub fn unwrap_hits<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, FetchError> {
    let envelope: Value = serde_json::from_slice(body)
        .map_err(|e| FetchError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let hits = envelope
        .get("hits")
        .and_then(|outer| outer.get("hits"))
        .and_then(Value::as_array)
        .ok_or_else(|| FetchError::MalformedResponse("missing hits.hits list".to_string()))?;

    let mut records = Vec::with_capacity(hits.len());
    for (index, hit) in hits.iter().enumerate() {
        let Some(source) = hit.get("_source") else {
            tracing::warn!(hit = index, "skipping hit without _source");
            continue;
        };
        match T::deserialize(source) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!(hit = index, error = %e, "skipping undecodable record"),
        }
    }

    if records.len() < hits.len() {
        tracing::debug!(kept = records.len(), total = hits.len(), "unwrapped hit list");
    }
    Ok(records)
}
