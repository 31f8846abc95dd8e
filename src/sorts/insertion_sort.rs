use crate::capabilities::{Capabilities, IteratorCategory};
use crate::sorter::{IsLess, Sorter};

/// Moves the last element of `v` left into the sorted prefix `v[..len - 1]`,
/// scanning from the back. Equal elements are not passed, so this is stable.
#[inline]
pub(crate) fn insert_tail<T, F>(v: &mut [T], is_less: &mut F) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    if v.len() < 2 {
        return Ok(());
    }

    let last = v.len() - 1;
    let mut hole = last;

    while hole > 0 && is_less.is_less(&v[last], &v[hole - 1])? {
        hole -= 1;
    }

    v[hole..].rotate_right(1);

    Ok(())
}

/// Moves the first element of `v` right into the sorted suffix `v[1..]`.
#[inline]
pub(crate) fn insert_head<T, F>(v: &mut [T], is_less: &mut F) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    let len = v.len();
    let mut hole = 0;

    while hole + 1 < len && is_less.is_less(&v[hole + 1], &v[0])? {
        hole += 1;
    }

    v[..=hole].rotate_left(1);

    Ok(())
}

/// Like [`insert_tail`] but finds the slot with a binary search, trading data
/// movement for fewer comparisons.
#[inline]
pub(crate) fn binary_insert_tail<T, F>(v: &mut [T], is_less: &mut F) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    if v.len() < 2 {
        return Ok(());
    }

    let last = v.len() - 1;
    let mut lo = 0;
    let mut hi = last;

    // Upper bound: the first element strictly greater than `v[last]`.
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if is_less.is_less(&v[last], &v[mid])? {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    v[lo..].rotate_right(1);

    Ok(())
}

/// Sorts `v` assuming `v[..offset]` is already sorted.
pub(crate) fn insertion_sort_shift_left<T, F>(
    v: &mut [T],
    offset: usize,
    is_less: &mut F,
) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    for i in offset.max(1)..v.len() {
        insert_tail(&mut v[..=i], is_less)?;
    }

    Ok(())
}

pub(crate) fn binary_insertion_sort<T, F>(
    v: &mut [T],
    offset: usize,
    is_less: &mut F,
) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    for i in offset.max(1)..v.len() {
        binary_insert_tail(&mut v[..=i], is_less)?;
    }

    Ok(())
}

/// Stable insertion sort. Quadratic, intended for short or nearly sorted input.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSorter;

impl Sorter for InsertionSorter {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            iterator_category: IteratorCategory::Bidirectional,
            ..Capabilities::general().stable()
        }
    }

    fn try_sort_by<T, E, F>(&self, v: &mut [T], mut is_less: F) -> Result<(), E>
    where
        F: FnMut(&T, &T) -> Result<bool, E>,
    {
        insertion_sort_shift_left(v, 1, &mut is_less)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::{
        sort_comparison_suite_up_to, validate_patterns, validate_stable_sort,
    };

    #[test]
    pub fn test_insertion_sort() {
        sort_comparison_suite_up_to(2_000, |v| InsertionSorter.sort(v));
    }

    #[test]
    pub fn test_insertion_sort_patterns() {
        validate_patterns(500, |v| InsertionSorter.sort(v));
    }

    #[test]
    pub fn test_binary_insertion_sort() {
        sort_comparison_suite_up_to(2_000, |v| {
            binary_insertion_sort(v, 1, &mut |a: &u32, b: &u32| Ok::<_, ()>(a < b)).unwrap()
        });
    }

    #[test]
    pub fn test_insertion_sort_is_stable() {
        validate_stable_sort(1_000, |v, is_less| InsertionSorter.sort_by(v, is_less));
        validate_stable_sort(1_000, |v, is_less| {
            binary_insertion_sort(v, 1, &mut |a: &_, b: &_| Ok::<_, ()>(is_less(a, b))).unwrap()
        });
    }

    #[test]
    pub fn test_insert_head() {
        let mut v = vec![9, 1, 3, 5, 9, 12];
        insert_head(&mut v, &mut |a: &i32, b: &i32| Ok::<_, ()>(a < b)).unwrap();
        assert_eq!(v, vec![1, 3, 5, 9, 9, 12]);
    }
}
