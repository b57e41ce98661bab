//! Enumeration of feasible cutting patterns.
//!
//! A pattern assigns a count to each piece size such that the pieces plus
//! the kerf charge for every cut beyond the first fit on one master unit:
//!
//! ```text
//! Σ counts[i]·width[i] + max(0, Σcounts[i] − 1)·kerf ≤ master_length
//! ```
//!
//! which is equivalent to `Σ counts[i]·(width[i]+kerf) ≤ master_length + kerf`.
//! The search works on the transformed form, walking sizes in descending
//! width order and bounding each count by the remaining capacity before
//! recursing. Every feasible non-empty pattern is produced exactly once.

use super::models::Pattern;

/// Enumerates all feasible non-empty patterns over scaled integer lengths.
///
/// A width larger than `master_length` simply appears in no pattern; it is
/// the model builder's job to turn the resulting gap into an infeasibility
/// report.
pub fn enumerate(master_length: i64, kerf: i64, widths: &[i64]) -> Vec<Pattern> {
    let capacity = master_length + kerf;
    let effective: Vec<i64> = widths.iter().map(|&w| w + kerf).collect();

    // Descending width order prunes fastest; counts are still emitted in
    // the caller's index order.
    let mut order: Vec<usize> = (0..widths.len()).collect();
    order.sort_by(|&a, &b| widths[b].cmp(&widths[a]));

    let mut patterns = Vec::new();
    let mut counts = vec![0u32; widths.len()];
    descend(&order, &effective, 0, capacity, &mut counts, &mut patterns);

    log::debug!(
        "enumerated {} patterns over {} sizes",
        patterns.len(),
        widths.len()
    );
    patterns
}

fn descend(
    order: &[usize],
    effective: &[i64],
    depth: usize,
    remaining: i64,
    counts: &mut Vec<u32>,
    out: &mut Vec<Pattern>,
) {
    if depth == order.len() {
        if counts.iter().any(|&c| c > 0) {
            out.push(Pattern::new(counts.clone()));
        }
        return;
    }

    let size = order[depth];
    let max_count = remaining / effective[size];
    for count in 0..=max_count {
        counts[size] = count as u32;
        descend(
            order,
            effective,
            depth + 1,
            remaining - count * effective[size],
            counts,
            out,
        );
    }
    counts[size] = 0;
}
