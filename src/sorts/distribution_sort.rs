//! Most-significant-byte first American flag sort.
//!
//! Each pass counts the elements of a range into 257 buckets (one per byte
//! plus one for exhausted keys), permutes them into place with cycle-leader
//! swaps and queues every bucket that still needs work on the next level.
//! Ranges at or below the distribution threshold are finished by the hybrid
//! sort comparing the remaining levels.

use super::hybrid_sort::hybrid_sort;
use crate::capabilities::{Capabilities, Order};
use crate::error::SortError;
use crate::sorter::{into_ok, RadixSorter};
use crate::tuning_parameters::TuningParameters;
use crate::utils::{
    bucket_index, compare_levels, exhausted_bucket, get_counts, get_end_offsets, get_prefix_sums,
    homogenous_bucket, ByKey, Counts, Identity, LevelReader, RADIX_BUCKETS,
};
use crate::RadixKey;
use arbitrary_chunks::ArbitraryChunks;
use log::trace;
use std::cmp::Ordering;
use std::convert::Infallible;

fn comparative_sort<T, R>(
    bucket: &mut [T],
    reader: &R,
    level: usize,
    order: Order,
    tuning: &TuningParameters,
) where
    R: LevelReader<T>,
{
    if bucket.len() < 2 {
        return;
    }

    let mut is_less = |a: &T, b: &T| {
        let ord = match order {
            Order::Ascending => compare_levels(reader, a, b, level),
            Order::Descending => compare_levels(reader, b, a, level),
        };

        Ok::<_, Infallible>(ord == Ordering::Less)
    };

    into_ok(hybrid_sort(bucket, &mut is_less, tuning));
}

/// Moves every element into its bucket. `counts` must be exact for `bucket`.
fn american_flag_pass<T, R>(bucket: &mut [T], reader: &R, level: usize, order: Order, counts: &Counts)
where
    R: LevelReader<T>,
{
    let mut heads = get_prefix_sums(counts);
    let ends = get_end_offsets(counts, &heads);

    for b in 0..RADIX_BUCKETS {
        while heads[b] < ends[b] {
            let target = bucket_index(reader.level(&bucket[heads[b]], level), order);

            if target == b {
                heads[b] += 1;
            } else {
                debug_assert!(heads[target] < ends[target]);
                bucket.swap(heads[b], heads[target]);
                heads[target] += 1;
            }
        }
    }
}

pub(crate) fn distribution_sort<T, R>(v: &mut [T], reader: &R, order: Order, tuning: &TuningParameters)
where
    R: LevelReader<T>,
{
    let threshold = tuning.distribution_threshold.max(1);
    let exhausted = exhausted_bucket(order);

    if v.len() <= threshold {
        comparative_sort(v, reader, 0, order, tuning);
        return;
    }

    let mut stack = vec![(0usize, v.len(), 0usize)];

    while let Some((start, end, level)) = stack.pop() {
        let bucket = &mut v[start..end];
        let (counts, already_sorted) = get_counts(bucket, reader, level, order);

        if let Some(only) = homogenous_bucket(&counts) {
            if only != exhausted {
                trace!("({}) homogenous level, {} elements", level, bucket.len());
                stack.push((start, end, level + 1));
            }

            continue;
        }

        if already_sorted {
            trace!("({}) already grouped, {} elements", level, bucket.len());
        } else {
            trace!("({}) american flag pass, {} elements", level, bucket.len());
            american_flag_pass(bucket, reader, level, order, &counts);
        }

        // Exhausted keys tie on every remaining level, so their bucket is done.
        let (lo, hi, sizes) = match order {
            Order::Ascending => (counts[exhausted], bucket.len(), &counts[1..]),
            Order::Descending => (0, bucket.len() - counts[exhausted], &counts[..exhausted]),
        };

        let mut offset = start + lo;
        for chunk in bucket[lo..hi].arbitrary_chunks_mut(sizes) {
            let len = chunk.len();

            if len <= threshold {
                comparative_sort(chunk, reader, level + 1, order, tuning);
            } else {
                stack.push((offset, offset + len, level + 1));
            }

            offset += len;
        }
    }
}

/// Non-comparison sort for keys with a radix decomposition.
///
/// Only the natural order of the key, or its reverse, is available: there is
/// no comparator entry point. Not stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistributionSorter {
    tuning: TuningParameters,
}

impl DistributionSorter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tuning(tuning: TuningParameters) -> Result<Self, SortError> {
        tuning.validate()?;

        Ok(Self { tuning })
    }

    pub fn tuning(&self) -> &TuningParameters {
        &self.tuning
    }
}

impl RadixSorter for DistributionSorter {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            accepts_comparator: false,
            ..Capabilities::general()
        }
    }

    fn sort_radix<T>(&self, v: &mut [T], order: Order)
    where
        T: RadixKey,
    {
        distribution_sort(v, &Identity, order, &self.tuning);
    }

    fn sort_by_radix_key<T, K, P>(&self, v: &mut [T], key: P, order: Order)
    where
        K: RadixKey,
        P: Fn(&T) -> K,
    {
        distribution_sort(v, &ByKey(key), order, &self.tuning);
    }
}
