use super::hybrid_sort::hybrid_sort;
use super::insertion_sort::binary_insertion_sort;
use super::network_sort::{network_sort, MAX_NETWORK_SIZE};
use crate::capabilities::Capabilities;
use crate::sorter::{IsLess, Sorter};
use crate::tuning_parameters::TuningParameters;

/// Largest input handled by the low-comparison bank.
pub const MAX_LOW_COMPARISONS_SIZE: usize = 64;

/// Sorts a prefix with a network, then binary-inserts the remainder.
///
/// The comparison count stays well below the quadratic worst case of plain
/// insertion sort. Not stable, since the network step may reorder equal keys.
pub(crate) fn low_comparisons_sort<T, F>(v: &mut [T], is_less: &mut F) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    if len > MAX_LOW_COMPARISONS_SIZE {
        debug_assert!(
            false,
            "low comparisons sort used on {} elements (max {})",
            len, MAX_LOW_COMPARISONS_SIZE
        );

        return hybrid_sort(v, is_less, &TuningParameters::default());
    }

    let prefix = (len - 1).min(MAX_NETWORK_SIZE);
    network_sort(&mut v[..prefix], is_less)?;
    binary_insertion_sort(v, prefix, is_less)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LowComparisonsSorter;

impl Sorter for LowComparisonsSorter {
    fn capabilities(&self) -> Capabilities {
        Capabilities::general().bounded(0, MAX_LOW_COMPARISONS_SIZE)
    }

    fn try_sort_by<T, E, F>(&self, v: &mut [T], mut is_less: F) -> Result<(), E>
    where
        F: FnMut(&T, &T) -> Result<bool, E>,
    {
        low_comparisons_sort(v, &mut is_less)
    }
}
