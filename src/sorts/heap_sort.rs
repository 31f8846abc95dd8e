use crate::capabilities::Capabilities;
use crate::sorter::{IsLess, Sorter};

#[inline]
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= v.len() {
            return Ok(());
        }

        if child + 1 < v.len() && is_less.is_less(&v[child], &v[child + 1])? {
            child += 1;
        }

        if !is_less.is_less(&v[node], &v[child])? {
            return Ok(());
        }

        v.swap(node, child);
        node = child;
    }
}

/// Heapsort, *O*(*n* \* log(*n*)) for every input. This is also the fallback
/// taken by the hybrid sort once it has seen too many bad partitions.
pub(crate) fn heap_sort<T, F>(v: &mut [T], is_less: &mut F) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    let len = v.len();

    for i in (0..len / 2).rev() {
        sift_down(v, i, is_less)?;
    }

    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, is_less)?;
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSorter;

impl Sorter for HeapSorter {
    fn capabilities(&self) -> Capabilities {
        Capabilities::general()
    }

    fn try_sort_by<T, E, F>(&self, v: &mut [T], mut is_less: F) -> Result<(), E>
    where
        F: FnMut(&T, &T) -> Result<bool, E>,
    {
        heap_sort(v, &mut is_less)
    }
}
