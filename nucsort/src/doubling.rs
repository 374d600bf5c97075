// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use tracing::{debug, trace};

use crate::alphabet::ALPHABET_SIZE;

/// Computes the suffix array of the rank-encoded `text` using prefix doubling.
///
/// The algorithm is implemented as described in the [article] Suffix Arrays: A New Method for
/// On-Line String Searches by Udi Manber and Gene Myers. Suffixes are first bucketed by their
/// leading symbol. Each following round takes buckets of suffixes sharing a prefix of length `H`
/// and splits them into buckets sharing a prefix of length `2H`, using the already sorted order of
/// the suffixes `H` positions further right. It runs in *O*(*n* log(*n*)) time.
///
/// Unlike some presentations of the algorithm, the last element of `text` does not need to be a
/// unique terminator: a suffix that is a strict prefix of another suffix sorts first, exactly as
/// it does under plain lexicographic comparison.
///
/// Every element of `text` must be less than [`ALPHABET_SIZE`] and `text.len()` must fit in a
/// `u32`.
///
/// [article]: https://doi.org/10.1137/0222058
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub(crate) fn doubling(text: &[u8]) -> Vec<u32> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut working_set = WorkingSet::new(text);

    let mut depth = 1;
    while depth < text.len() {
        // Positions that are not bucket heads belong to a bucket that is not yet sorted
        let unsorted = working_set.unsorted();
        if unsorted == 0 {
            break;
        }
        debug!(depth, unsorted, "refining buckets");

        working_set.refine(depth);
        depth *= 2;
    }

    debug_assert!(
        working_set.is_consistent(),
        "position and rank arrays must be inverses",
    );

    working_set.position
}

/// The arrays needed to sort a single text
///
/// "Position" refers to an index into the partially sorted order and "offset" refers to an index
/// into the text. A bucket is a maximal run of positions starting at a head position.
struct WorkingSet {
    /// The offset at each position
    position: Vec<u32>,
    /// The position of each offset
    ///
    /// Outside of a call to [`WorkingSet::refine()`] this is the exact inverse of `position`.
    rank: Vec<u32>,
    /// Whether each position starts a bucket
    head: Vec<bool>,
    /// Whether each position starts a bucket after the current round
    split: Vec<bool>,
    /// The number of offsets moved into each bucket in the current round, indexed by the position
    /// of the bucket's head
    count: Vec<u32>,
}

impl WorkingSet {
    /// Sorts the offsets of `text` by their first symbol.
    fn new(text: &[u8]) -> Self {
        let len = text.len();

        // Count each symbol, then turn the counts into bucket starts
        let mut bucket = [0u32; ALPHABET_SIZE];
        for &symbol in text {
            bucket[symbol as usize] += 1;
        }
        let mut sum = 0;
        for x in bucket.iter_mut() {
            let size = *x;
            *x = sum;
            sum += size;
        }

        // Distribute the offsets in increasing order so the sort is stable
        let mut position = vec![0; len];
        for (offset, &symbol) in text.iter().enumerate() {
            position[bucket[symbol as usize] as usize] = offset as u32;
            bucket[symbol as usize] += 1;
        }

        let mut rank = vec![0; len];
        for (i, &offset) in position.iter().enumerate() {
            rank[offset as usize] = i as u32;
        }

        let head: Vec<bool> = (0..len)
            .map(|i| i == 0 || text[position[i] as usize] != text[position[i - 1] as usize])
            .collect();
        trace!(
            buckets = head.iter().filter(|&&h| h).count(),
            "bucketed by first symbol",
        );

        Self {
            position,
            rank,
            head,
            split: vec![false; len],
            count: vec![0; len],
        }
    }

    /// Returns the number of positions that are not bucket heads.
    fn unsorted(&self) -> usize {
        self.head.iter().filter(|&&h| !h).count()
    }

    /// Returns the position one past the end of the bucket starting at `start`.
    fn bucket_end(&self, start: usize) -> usize {
        self.head[start + 1..]
            .iter()
            .position(|&h| h)
            .map_or(self.head.len(), |i| start + 1 + i)
    }

    /// Splits every bucket of suffixes sharing a prefix of length `depth` into buckets of suffixes
    /// sharing a prefix of length `2 * depth`.
    ///
    /// `depth` must be less than the length of the text.
    fn refine(&mut self, depth: usize) {
        let len = self.position.len();

        // Point every offset at the head of its bucket. From here until the end of the round,
        // `rank` holds the next slot of an offset that has not moved yet.
        let mut start = 0;
        for i in 0..len {
            if self.head[i] {
                start = i;
            }
            self.rank[self.position[i] as usize] = start as u32;
        }
        self.count.fill(0);
        self.split.fill(false);

        // The suffix at `len - depth` is exactly `depth` symbols long, so it is a prefix of every
        // other suffix in its bucket and sorts first
        self.advance(len - depth);

        // Walk the buckets in sorted order. The suffix at `offset - depth` sorts by its own bucket
        // first and by the suffix at `offset` second, so moving each one to the next free slot of
        // its bucket in this order sorts it by its first `2 * depth` symbols.
        let mut left = 0;
        while left < len {
            let right = self.bucket_end(left);

            for i in left..right {
                if let Some(offset) = (self.position[i] as usize).checked_sub(depth) {
                    self.advance(offset);
                }
            }

            // Offsets moved out of the same bucket into the same target bucket landed in adjacent
            // slots and still share a prefix of length `2 * depth`. Only the first of those slots
            // starts a new bucket.
            for i in left..right {
                if let Some(offset) = (self.position[i] as usize).checked_sub(depth) {
                    let slot = self.rank[offset] as usize;
                    if self.split[slot] {
                        for j in slot + 1..len {
                            if self.head[j] || !self.split[j] {
                                break;
                            }
                            self.split[j] = false;
                        }
                    }
                }
            }

            left = right;
        }

        for (offset, &rank) in self.rank.iter().enumerate() {
            self.position[rank as usize] = offset as u32;
        }

        // Buckets only ever split
        for (head, &split) in self.head.iter_mut().zip(&self.split) {
            *head |= split;
        }
    }

    /// Moves `offset` into the next free slot of its bucket.
    fn advance(&mut self, offset: usize) {
        let start = self.rank[offset] as usize;
        let slot = start + self.count[start] as usize;
        self.count[start] += 1;
        self.rank[offset] = slot as u32;
        self.split[slot] = true;
    }

    fn is_consistent(&self) -> bool {
        self.position
            .iter()
            .enumerate()
            .all(|(i, &offset)| self.rank[offset as usize] as usize == i)
            && self.head.first() == Some(&true)
    }
}
