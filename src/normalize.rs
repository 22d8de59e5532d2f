//! CSV normalization: two tabular layouts, one canonical edge list.
//!
//! Link exports arrive in one of two shapes. The *interleaved* layout puts
//! the source page in the first column and repeats `(destination, anchor)`
//! column pairs after it. The *blocked* layout groups all destination
//! columns together and all anchor columns together, each column name
//! carrying a trailing link ordinal ("URL Destino 1", "Anchor 1", ...).
//! Both converge on the same `Vec<Edge>`; duplicates survive because they
//! feed the frequency displays downstream.

use crate::error::NormalizeError;
use crate::models::Edge;
use regex::Regex;
use std::collections::HashMap;

// ============================================================================
// Layout Detection
// ============================================================================

/// The two recognized column layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Source column first, then `(destination, anchor)` pairs.
    Interleaved,
    /// A block of ordinal-suffixed destination columns and a parallel block
    /// of ordinal-suffixed anchor columns.
    Blocked,
}

/// Column names that mark a destination-URL column, with a trailing ordinal.
/// Spanish variants come from the original exports this tool was built for.
fn destination_pattern() -> Regex {
    Regex::new(r"(?i)^\s*(?:url\s*destino|destino|destination(?:\s*url)?|target(?:\s*url)?|link\s*url)\s*[_\-. ]*(\d+)\s*$")
        .unwrap()
}

/// Column names that mark an anchor-text column, with a trailing ordinal.
fn anchor_pattern() -> Regex {
    Regex::new(r"(?i)^\s*(?:anchor(?:\s*text)?|texto\s*ancla|ancla)\s*[_\-. ]*(\d+)\s*$")
        .unwrap()
}

/// Detect which layout a header row describes.
///
/// Blocked wins when any ordinal-suffixed destination column is present;
/// otherwise a header with at least three columns (source plus one pair) is
/// read as interleaved. Anything else is unrecognizable.
pub fn detect_layout(headers: &csv::StringRecord) -> Result<LayoutKind, NormalizeError> {
    let dest_re = destination_pattern();
    if headers.iter().any(|h| dest_re.is_match(h)) {
        return Ok(LayoutKind::Blocked);
    }
    if headers.len() >= 3 {
        return Ok(LayoutKind::Interleaved);
    }
    Err(NormalizeError::Format(format!(
        "expected either ordinal-tagged destination/anchor columns or a \
         source column followed by destination/anchor pairs, got {} column(s)",
        headers.len()
    )))
}

// ============================================================================
// Normalization
// ============================================================================

/// Parse an uploaded CSV into the canonical edge list.
///
/// Fails with `NormalizeError::Format` when neither layout can be matched.
/// Rows with a blank source and cells with a blank destination are skipped,
/// never fatal; an empty result is a valid "no links found" dataset.
pub fn normalize(data: &[u8]) -> Result<Vec<Edge>, NormalizeError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(NormalizeError::Format("empty header row".to_string()));
    }

    let layout = detect_layout(&headers)?;
    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record?);
    }

    let edges = match layout {
        LayoutKind::Interleaved => parse_interleaved(&headers, &records),
        LayoutKind::Blocked => parse_blocked(&headers, &records),
    };

    tracing::debug!(
        layout = ?layout,
        rows = records.len(),
        edges = edges.len(),
        "normalized CSV"
    );

    Ok(edges)
}

/// Interleaved layout: column 0 is the source page, then pairs at offsets
/// (1,2), (3,4), ... A trailing destination column without an anchor partner
/// is ignored. A pair contributes an edge only if its destination cell trims
/// non-empty; a short row simply runs out of pairs.
fn parse_interleaved(headers: &csv::StringRecord, records: &[csv::StringRecord]) -> Vec<Edge> {
    let cols = headers.len();
    let mut edges = Vec::new();

    for record in records {
        let source = record.get(0).unwrap_or("").trim();
        if source.is_empty() {
            continue;
        }

        let mut i = 1;
        while i + 1 < cols {
            let target = record.get(i).unwrap_or("").trim();
            if !target.is_empty() {
                let anchor = record.get(i + 1).unwrap_or("");
                edges.push(Edge::new(source, target, anchor));
            }
            i += 2;
        }
    }

    edges
}

/// Blocked layout: unpivot the anchor columns into `(row, ordinal) -> text`
/// long form, then walk the destination columns and join on `(row, ordinal)`.
/// A destination ordinal with no anchor column joins against the empty
/// string; a blank joined destination is dropped.
fn parse_blocked(headers: &csv::StringRecord, records: &[csv::StringRecord]) -> Vec<Edge> {
    let dest_re = destination_pattern();
    let anchor_re = anchor_pattern();

    let mut dest_cols: Vec<(u32, usize)> = Vec::new();
    let mut anchor_cols: Vec<(u32, usize)> = Vec::new();
    let mut source_col = None;

    for (idx, name) in headers.iter().enumerate() {
        if let Some(caps) = dest_re.captures(name) {
            if let Ok(ord) = caps[1].parse() {
                dest_cols.push((ord, idx));
            }
        } else if let Some(caps) = anchor_re.captures(name) {
            if let Ok(ord) = caps[1].parse() {
                anchor_cols.push((ord, idx));
            }
        } else if source_col.is_none() {
            // First untagged column carries the source page.
            source_col = Some(idx);
        }
    }
    dest_cols.sort_unstable();
    let source_col = source_col.unwrap_or(0);

    // Unpivot anchors: (row, ordinal) -> trimmed text.
    let mut anchors: HashMap<(usize, u32), &str> = HashMap::new();
    for (row, record) in records.iter().enumerate() {
        for &(ord, idx) in &anchor_cols {
            anchors.insert((row, ord), record.get(idx).unwrap_or("").trim());
        }
    }

    let mut edges = Vec::new();
    for (row, record) in records.iter().enumerate() {
        let source = record.get(source_col).unwrap_or("").trim();
        if source.is_empty() {
            continue;
        }
        for &(ord, idx) in &dest_cols {
            let target = record.get(idx).unwrap_or("").trim();
            if target.is_empty() {
                continue;
            }
            let anchor = anchors.get(&(row, ord)).copied().unwrap_or("");
            edges.push(Edge::new(source, target, anchor));
        }
    }

    edges
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;
