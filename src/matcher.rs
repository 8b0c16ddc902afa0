//! Field-weighted fuzzy matching over record collections.
//!
//! The core measure is a bounded *infix* edit distance: the cheapest way to
//! turn the query into some substring of the field value. A prefix of a long
//! title therefore matches at distance 0, and one or two typos stay cheap,
//! while unrelated text blows past the edit budget and is dropped before the
//! full DP finishes.
//!
//! Scores are normalized to `[0, 1]` where `0.0` is an exact whole-field
//! match. A small coverage penalty separates "query equals the field" from
//! "query is buried somewhere inside it", so exact matches always rank first.
//! Field weights act as divisors on the raw score: a weight-2 title pulls a
//! record in at raw distances a weight-1 keyword string would not.

/// Penalty added when the query explains only part of the field value.
///
/// Scaled by the unmatched fraction of the field: a 6-char query inside a
/// 10-char title pays `0.15 * 0.4 = 0.06`, a whole-field match pays nothing.
/// Kept small so a short prefix of the right record still beats a sloppy
/// full-length match of the wrong one.
pub const COVERAGE_PENALTY: f64 = 0.15;

/// One searchable field value, borrowed from a record.
#[derive(Debug, Clone)]
pub enum FieldValue<'a> {
    /// A scalar text field.
    Text(&'a str),
    /// A nested list field; the best-scoring element stands in for the list.
    List(Vec<&'a str>),
    /// Field absent on this record. Never an error, simply no match.
    Missing,
}

/// A named field with its match weight and accessor.
///
/// Weights are relative: 2.0 for primary titles, 1.0 to 1.5 for secondary
/// text. The raw field score is divided by the weight before fields
/// compete, so heavier fields tolerate proportionally more edits.
pub struct FieldWeight<R: 'static> {
    pub name: &'static str,
    pub weight: f64,
    pub value: for<'r> fn(&'r R) -> FieldValue<'r>,
}

/// A record that cleared the threshold, by collection index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchCandidate {
    pub index: usize,
    pub score: f64,
}

/// Edit distance from `query` to the closest substring of `text`.
///
/// Start and end positions in `text` are free; edits inside the aligned
/// window cost 1 each. Returns `None` once the distance provably exceeds
/// `max_edits`; the row-minimum check abandons the DP early, which is
/// where most non-matching records exit.
pub fn infix_distance(query: &[char], text: &[char], max_edits: usize) -> Option<usize> {
    if query.is_empty() {
        return Some(0);
    }
    if text.is_empty() {
        return None;
    }

    // Row 0 is all zeros: a match may begin at any position in the text.
    let mut dp: Vec<usize> = vec![0; text.len() + 1];
    for (i, qc) in query.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut row_min = dp[0];

        for (j, tc) in text.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(qc != tc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            if dp[j + 1] < row_min {
                row_min = dp[j + 1];
            }
        }

        if row_min > max_edits {
            return None;
        }
    }

    // The match may end at any position, so take the best cell of the row.
    let best = dp.iter().copied().min().unwrap_or(query.len());
    (best <= max_edits).then_some(best)
}

/// Normalized score of `query` against one field value, lower is better.
fn field_score(query: &[char], text: &str, max_edits: usize) -> Option<f64> {
    let text: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
    if text.is_empty() {
        return None;
    }

    let distance = infix_distance(query, &text, max_edits)?;
    let qlen = query.len() as f64;
    let tlen = text.len() as f64;
    let coverage = qlen.min(tlen) / tlen;
    let score = distance as f64 / qlen + COVERAGE_PENALTY * (1.0 - coverage);
    Some(score.min(1.0))
}

/// Match every record in a collection against `query`.
///
/// A record's score is its best weighted field score; the record is kept
/// when that score is at or below `threshold`. Candidates come back sorted
/// ascending, and the sort is stable: records that tie keep their
/// collection order, so output is deterministic for a given snapshot.
pub fn match_collection<R>(
    records: &[R],
    fields: &[FieldWeight<R>],
    query: &str,
    threshold: f64,
) -> Vec<MatchCandidate> {
    let query: Vec<char> = query.trim().chars().flat_map(char::to_lowercase).collect();
    if query.is_empty() {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let mut best: Option<f64> = None;

        for field in fields {
            let max_edits = (threshold * field.weight * query.len() as f64).floor() as usize;
            let raw = match (field.value)(record) {
                FieldValue::Text(text) => field_score(&query, text, max_edits),
                FieldValue::List(items) => items
                    .iter()
                    .filter_map(|item| field_score(&query, item, max_edits))
                    .min_by(f64::total_cmp),
                FieldValue::Missing => None,
            };

            if let Some(raw) = raw {
                let weighted = raw / field.weight;
                best = Some(best.map_or(weighted, |b| b.min(weighted)));
            }
        }

        if let Some(score) = best {
            if score <= threshold {
                candidates.push(MatchCandidate { index, score });
            }
        }
    }

    candidates.sort_by(|a, b| a.score.total_cmp(&b.score));
    candidates
}
