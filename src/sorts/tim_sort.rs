//! Natural merge sort in the style of timsort.
//!
//! The input is cut into runs as it is found: non-descending runs are kept,
//! strictly descending runs are reversed in place. Runs shorter than
//! `MIN_RUN` are extended with binary insertion. Runs are kept on a stack and
//! merged in place with [`sym_merge`] whenever the stack breaks timsort's
//! length rules, so presorted input is handled in *O*(*n*) comparisons.

use super::insertion_sort::binary_insertion_sort;
use super::merge_sort::sym_merge;
use crate::capabilities::Capabilities;
use crate::sorter::{IsLess, Sorter};

const MIN_RUN: usize = 16;

#[derive(Clone, Copy, Debug)]
struct Run {
    start: usize,
    len: usize,
}

/// Length of the run at the start of `v` and whether it is strictly
/// descending. Only strictly descending runs may be reversed without losing
/// stability.
fn find_run<T, F>(v: &[T], is_less: &mut F) -> Result<(usize, bool), F::Error>
where
    F: IsLess<T>,
{
    let len = v.len();

    if len < 2 {
        return Ok((len, false));
    }

    let mut end = 2;

    if is_less.is_less(&v[1], &v[0])? {
        while end < len && is_less.is_less(&v[end], &v[end - 1])? {
            end += 1;
        }

        Ok((end, true))
    } else {
        while end < len && !is_less.is_less(&v[end], &v[end - 1])? {
            end += 1;
        }

        Ok((end, false))
    }
}

/// Index of the lower of the two runs to merge next, if any.
///
/// The last run of the input forces merging everything that is left.
fn collapse(runs: &[Run], stop: usize) -> Option<usize> {
    let n = runs.len();

    if n >= 2
        && (runs[n - 1].start + runs[n - 1].len == stop
            || runs[n - 2].len <= runs[n - 1].len
            || (n >= 3 && runs[n - 3].len <= runs[n - 2].len + runs[n - 1].len)
            || (n >= 4 && runs[n - 4].len <= runs[n - 3].len + runs[n - 2].len))
    {
        if n >= 3 && runs[n - 3].len < runs[n - 1].len {
            Some(n - 3)
        } else {
            Some(n - 2)
        }
    } else {
        None
    }
}

pub(crate) fn tim_sort<T, F>(v: &mut [T], is_less: &mut F) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    let len = v.len();

    if len < 2 {
        return Ok(());
    }

    let mut runs: Vec<Run> = Vec::new();
    let mut start = 0;

    while start < len {
        let (run_len, descending) = find_run(&v[start..], is_less)?;
        let mut end = start + run_len;

        if descending {
            v[start..end].reverse();
        }

        if run_len < MIN_RUN {
            end = (start + MIN_RUN).min(len);
            binary_insertion_sort(&mut v[start..end], run_len, is_less)?;
        }

        runs.push(Run {
            start,
            len: end - start,
        });
        start = end;

        while let Some(r) = collapse(&runs, len) {
            let left = runs[r];
            let right = runs[r + 1];
            let mid = right.start;
            let end = right.start + right.len;

            // Runs that already meet in order need no merge.
            if is_less.is_less(&v[mid], &v[mid - 1])? {
                sym_merge(v, left.start, mid, end, is_less)?;
            }

            runs[r + 1] = Run {
                start: left.start,
                len: left.len + right.len,
            };
            runs.remove(r);
        }
    }

    debug_assert!(runs.len() == 1 && runs[0].start == 0 && runs[0].len == len);

    Ok(())
}

/// Stable, in place and adaptive to existing runs in either direction.
/// *O*(*n*) comparisons on presorted input, *O*(*n* \* log²(*n*)) data
/// movement worst case.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimSorter;

impl Sorter for TimSorter {
    fn capabilities(&self) -> Capabilities {
        Capabilities::general().stable()
    }

    fn try_sort_by<T, E, F>(&self, v: &mut [T], mut is_less: F) -> Result<(), E>
    where
        F: FnMut(&T, &T) -> Result<bool, E>,
    {
        tim_sort(v, &mut is_less)
    }
}
