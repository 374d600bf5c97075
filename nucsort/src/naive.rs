// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// Computes the suffix array of the rank-encoded `text` by sorting suffixes directly.
///
/// Each suffix is represented by its start offset and compared as a view into `text`, so no
/// suffix is ever copied. Comparison stops at the first differing rank. A suffix that is a strict
/// prefix of another sorts first, which can only happen if `text` lacks a unique terminator.
///
/// This operation is *O*(*n*² log(*n*)) in the worst case and exists mainly as a reference to
/// check [`doubling`](crate::doubling::doubling) against.
///
/// `text.len()` must fit in a `u32`.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub(crate) fn naive(text: &[u8]) -> Vec<u32> {
    let mut suffix_array: Vec<u32> = (0..text.len() as u32).collect();

    // Offsets are unique, so there are no ties for an unstable sort to reorder
    suffix_array.sort_unstable_by(|&a, &b| text[a as usize..].cmp(&text[b as usize..]));

    suffix_array
}
