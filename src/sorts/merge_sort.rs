use super::insertion_sort::insertion_sort_shift_left;
use crate::capabilities::Capabilities;
use crate::sorter::{IsLess, Sorter};

/// Runs of this length are insertion sorted before merging starts.
const BLOCK_SIZE: usize = 20;

/// Merges the sorted runs `v[a..m]` and `v[m..b]` in place using rotations
/// (SymMerge, Kim & Kutzner 2004). Stable.
pub(crate) fn sym_merge<T, F>(v: &mut [T], a: usize, m: usize, b: usize, is_less: &mut F) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    if m - a == 1 {
        // First index in v[m..b] not less than v[a].
        let mut i = m;
        let mut j = b;
        while i < j {
            let h = i + (j - i) / 2;
            if is_less.is_less(&v[h], &v[a])? {
                i = h + 1;
            } else {
                j = h;
            }
        }

        v[a..i].rotate_left(1);
        return Ok(());
    }

    if b - m == 1 {
        // First index in v[a..m] greater than v[m].
        let mut i = a;
        let mut j = m;
        while i < j {
            let h = i + (j - i) / 2;
            if !is_less.is_less(&v[m], &v[h])? {
                i = h + 1;
            } else {
                j = h;
            }
        }

        v[i..=m].rotate_right(1);
        return Ok(());
    }

    let mid = a + (b - a) / 2;
    let n = mid + m;
    let (mut start, mut r) = if m > mid { (n - b, mid) } else { (a, m) };
    let p = n - 1;

    while start < r {
        let c = start + (r - start) / 2;
        if !is_less.is_less(&v[p - c], &v[c])? {
            start = c + 1;
        } else {
            r = c;
        }
    }

    let end = n - start;
    if start < m && m < end {
        v[start..end].rotate_left(m - start);
    }
    if a < start && start < mid {
        sym_merge(v, a, start, mid, is_less)?;
    }
    if mid < end && end < b {
        sym_merge(v, mid, end, b, is_less)?;
    }

    Ok(())
}

/// Bottom-up stable merge sort without auxiliary buffers.
pub(crate) fn merge_sort<T, F>(v: &mut [T], is_less: &mut F) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    let len = v.len();

    for block in v.chunks_mut(BLOCK_SIZE) {
        insertion_sort_shift_left(block, 1, is_less)?;
    }

    let mut width = BLOCK_SIZE;
    while width < len {
        let mut a = 0;
        while a + width < len {
            let b = (a + 2 * width).min(len);
            sym_merge(v, a, a + width, b, is_less)?;
            a = b;
        }

        width *= 2;
    }

    Ok(())
}

/// Stable, in place, *O*(*n* \* log²(*n*)) comparisons worst case.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSorter;

impl Sorter for MergeSorter {
    fn capabilities(&self) -> Capabilities {
        Capabilities::general().stable()
    }

    fn try_sort_by<T, E, F>(&self, v: &mut [T], mut is_less: F) -> Result<(), E>
    where
        F: FnMut(&T, &T) -> Result<bool, E>,
    {
        merge_sort(v, &mut is_less)
    }
}
