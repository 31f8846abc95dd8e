//! Pattern-defeating quicksort over an explicit work stack.
//!
//! Ranges are partitioned around a median-of-three (ninther for longer ranges)
//! pivot. Unbalanced partitions shuffle a few elements to break adversarial
//! patterns and use up the range's limit; once that is exhausted the range is
//! finished with heapsort. Ranges at or below the small-sort bound go to the
//! network or low-comparison banks.

use super::heap_sort::heap_sort;
use super::insertion_sort::{insert_head, insert_tail, insertion_sort_shift_left};
use super::low_comparisons_sort::{low_comparisons_sort, MAX_LOW_COMPARISONS_SIZE};
use super::network_sort::{network_sort, MAX_NETWORK_SIZE};
use crate::capabilities::Capabilities;
use crate::error::SortError;
use crate::sorter::{IsLess, Sorter};
use crate::tuning_parameters::TuningParameters;
use std::mem;

/// Ranges below this are always handed to a small sort.
const MIN_SMALL_SORT_LEN: usize = 16;

#[derive(Debug, Clone, Copy)]
struct Task {
    lo: usize,
    hi: usize,
    limit: u32,
    was_balanced: bool,
    was_partitioned: bool,
}

#[inline]
fn small_sort<T, F>(v: &mut [T], is_less: &mut F, tuning: &TuningParameters) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    let len = v.len();

    if len <= tuning.network_threshold.min(MAX_NETWORK_SIZE) {
        network_sort(v, is_less)
    } else if len <= MAX_LOW_COMPARISONS_SIZE {
        low_comparisons_sort(v, is_less)
    } else {
        insertion_sort_shift_left(v, 1, is_less)
    }
}

/// Partially sorts a slice by shifting several out-of-order elements around.
///
/// Returns `true` if the slice is sorted at the end.
fn partial_insertion_sort<T, F>(v: &mut [T], is_less: &mut F) -> Result<bool, F::Error>
where
    F: IsLess<T>,
{
    // Maximum number of adjacent out-of-order pairs that will get shifted.
    const MAX_STEPS: usize = 5;
    // Shorter slices are not worth shifting.
    const SHORTEST_SHIFTING: usize = 50;

    let len = v.len();
    let mut i = 1;

    for _ in 0..MAX_STEPS {
        while i < len && !is_less.is_less(&v[i], &v[i - 1])? {
            i += 1;
        }

        if i == len {
            return Ok(true);
        }

        if len < SHORTEST_SHIFTING {
            return Ok(false);
        }

        v.swap(i - 1, i);

        if i >= 2 {
            insert_tail(&mut v[..i], is_less)?;
            insert_head(&mut v[i..], is_less)?;
        }
    }

    Ok(false)
}

/// Scatters a few elements around to break patterns that cause unbalanced
/// partitions.
fn break_patterns<T>(v: &mut [T]) {
    let len = v.len();
    if len < 8 {
        return;
    }

    // Xorshift, seeded by the length so the result is deterministic.
    let mut random = len as u64;
    let mut gen_usize = || {
        random ^= random << 13;
        random ^= random >> 7;
        random ^= random << 17;
        random as usize
    };

    let modulus = len.next_power_of_two();
    let pos = len / 4 * 2;

    for i in 0..3 {
        let mut other = gen_usize() & (modulus - 1);
        if other >= len {
            other -= len;
        }

        v.swap(pos - 1 + i, other);
    }
}

#[inline]
fn sort2<T, F>(
    v: &[T],
    a: &mut usize,
    b: &mut usize,
    swaps: &mut usize,
    is_less: &mut F,
) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    if is_less.is_less(&v[*b], &v[*a])? {
        mem::swap(a, b);
        *swaps += 1;
    }

    Ok(())
}

#[inline]
fn sort3<T, F>(
    v: &[T],
    a: &mut usize,
    b: &mut usize,
    c: &mut usize,
    swaps: &mut usize,
    is_less: &mut F,
) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    sort2(v, a, b, swaps, is_less)?;
    sort2(v, b, c, swaps, is_less)?;
    sort2(v, a, b, swaps, is_less)
}

#[inline]
fn sort_adjacent<T, F>(v: &[T], a: &mut usize, swaps: &mut usize, is_less: &mut F) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    let mut lo = *a - 1;
    let mut hi = *a + 1;
    sort3(v, &mut lo, a, &mut hi, swaps, is_less)
}

/// Picks a pivot index and reports whether the slice looks already sorted.
///
/// A slice whose samples were all strictly descending is reversed first.
fn choose_pivot<T, F>(v: &mut [T], is_less: &mut F) -> Result<(usize, bool), F::Error>
where
    F: IsLess<T>,
{
    // Minimum length to choose the median-of-medians method.
    const SHORTEST_MEDIAN_OF_MEDIANS: usize = 50;
    const MAX_SWAPS: usize = 4 * 3;

    let len = v.len();
    let mut a = len / 4;
    let mut b = len / 4 * 2;
    let mut c = len / 4 * 3;
    let mut swaps = 0;

    if len >= 8 {
        if len >= SHORTEST_MEDIAN_OF_MEDIANS {
            sort_adjacent(v, &mut a, &mut swaps, is_less)?;
            sort_adjacent(v, &mut b, &mut swaps, is_less)?;
            sort_adjacent(v, &mut c, &mut swaps, is_less)?;
        }

        sort3(v, &mut a, &mut b, &mut c, &mut swaps, is_less)?;
    }

    if swaps < MAX_SWAPS {
        Ok((b, swaps == 0))
    } else {
        v.reverse();
        Ok((len - 1 - b, true))
    }
}

/// Partitions `v` into elements smaller than `v[pivot]`, the pivot, and
/// elements not smaller than it.
///
/// Returns the final pivot position and whether `v` was already partitioned.
fn partition<T, F>(v: &mut [T], pivot: usize, is_less: &mut F) -> Result<(usize, bool), F::Error>
where
    F: IsLess<T>,
{
    v.swap(0, pivot);

    let (pivot_slot, rest) = v.split_at_mut(1);
    let pivot = &pivot_slot[0];

    let mut l = 0;
    let mut r = rest.len();

    while l < r && is_less.is_less(&rest[l], pivot)? {
        l += 1;
    }
    while l < r && !is_less.is_less(&rest[r - 1], pivot)? {
        r -= 1;
    }

    let was_partitioned = l >= r;

    // Invariant: rest[..l] < pivot <= rest[r..].
    while l < r {
        r -= 1;
        rest.swap(l, r);
        l += 1;

        while l < r && is_less.is_less(&rest[l], pivot)? {
            l += 1;
        }
        while l < r && !is_less.is_less(&rest[r - 1], pivot)? {
            r -= 1;
        }
    }

    v.swap(0, l);

    Ok((l, was_partitioned))
}

/// Moves every element equal to `v[pivot]` to the front, assuming no element
/// is smaller than the pivot. Returns the number of such elements.
fn partition_equal<T, F>(v: &mut [T], pivot: usize, is_less: &mut F) -> Result<usize, F::Error>
where
    F: IsLess<T>,
{
    v.swap(0, pivot);

    let (pivot_slot, rest) = v.split_at_mut(1);
    let pivot = &pivot_slot[0];

    let mut l = 0;
    let mut r = rest.len();

    loop {
        while l < r && !is_less.is_less(pivot, &rest[l])? {
            l += 1;
        }
        while l < r && is_less.is_less(pivot, &rest[r - 1])? {
            r -= 1;
        }

        if l >= r {
            break;
        }

        r -= 1;
        rest.swap(l, r);
        l += 1;
    }

    Ok(l + 1)
}

pub(crate) fn hybrid_sort<T, F>(
    v: &mut [T],
    is_less: &mut F,
    tuning: &TuningParameters,
) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    let len = v.len();
    let small_len = tuning
        .low_comparisons_threshold
        .clamp(MIN_SMALL_SORT_LEN, MAX_LOW_COMPARISONS_SIZE);

    if len <= small_len {
        return small_sort(v, is_less, tuning);
    }

    // The larger side of each split waits here while the smaller side is
    // finished, which keeps the stack logarithmic in `len`.
    let mut stack = vec![Task {
        lo: 0,
        hi: len,
        limit: usize::BITS - len.leading_zeros(),
        was_balanced: true,
        was_partitioned: true,
    }];

    while let Some(task) = stack.pop() {
        let Task {
            mut lo,
            mut hi,
            mut limit,
            mut was_balanced,
            mut was_partitioned,
        } = task;

        loop {
            let len = hi - lo;

            if len <= small_len {
                small_sort(&mut v[lo..hi], is_less, tuning)?;
                break;
            }

            if limit == 0 {
                heap_sort(&mut v[lo..hi], is_less)?;
                break;
            }

            // Everything before `lo` is in its final place, and `v[lo - 1]`
            // is not greater than anything in the range.
            let (head, tail) = v.split_at_mut(lo);
            let pred = head.last();
            let range = &mut tail[..len];

            if !was_balanced {
                break_patterns(range);
                limit -= 1;
            }

            let (pivot, likely_sorted) = choose_pivot(range, is_less)?;

            if was_balanced
                && was_partitioned
                && likely_sorted
                && partial_insertion_sort(range, is_less)?
            {
                break;
            }

            if let Some(pred) = pred {
                if !is_less.is_less(pred, &range[pivot])? {
                    lo += partition_equal(range, pivot, is_less)?;
                    continue;
                }
            }

            let (mid, partitioned) = partition(range, pivot, is_less)?;
            was_balanced = mid.min(len - mid) >= len / 8;
            was_partitioned = partitioned;

            let pivot_at = lo + mid;
            let (left, right) = ((lo, pivot_at), (pivot_at + 1, hi));

            let (smaller, larger) = if pivot_at - lo < hi - (pivot_at + 1) {
                (left, right)
            } else {
                (right, left)
            };

            stack.push(Task {
                lo: larger.0,
                hi: larger.1,
                limit,
                was_balanced,
                was_partitioned,
            });

            lo = smaller.0;
            hi = smaller.1;
        }
    }

    Ok(())
}

/// The default general-purpose sorter. Unstable, in place, *O*(*n* \* log(*n*))
/// worst case.
#[derive(Debug, Clone, Copy, Default)]
pub struct HybridSorter {
    tuning: TuningParameters,
}

impl HybridSorter {
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

impl Sorter for HybridSorter {
    fn capabilities(&self) -> Capabilities {
        Capabilities::general()
    }

    fn try_sort_by<T, E, F>(&self, v: &mut [T], mut is_less: F) -> Result<(), E>
    where
        F: FnMut(&T, &T) -> Result<bool, E>,
    {
        hybrid_sort(v, &mut is_less, &self.tuning)
    }
}
