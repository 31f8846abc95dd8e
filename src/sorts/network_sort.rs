use super::hybrid_sort::hybrid_sort;
use super::network_tables::NETWORKS;
use crate::capabilities::Capabilities;
use crate::sorter::{IsLess, Sorter};
use crate::tuning_parameters::TuningParameters;

/// Largest input handled by the network bank.
pub const MAX_NETWORK_SIZE: usize = 32;

/// A fixed, data-independent sequence of compare-exchange operations sorting
/// exactly [`SortingNetwork::size`] elements.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SortingNetwork {
    size: usize,
    comparators: &'static [(u8, u8)],
}

impl SortingNetwork {
    pub fn for_size(size: usize) -> Option<Self> {
        NETWORKS.get(size).map(|comparators| Self {
            size,
            comparators,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Position pairs `(a, b)` with `a < b`, applied in order.
    pub fn comparators(&self) -> &'static [(u8, u8)] {
        self.comparators
    }

    pub fn comparator_count(&self) -> usize {
        self.comparators.len()
    }

    /// Number of parallel layers when each comparator is scheduled as early
    /// as its inputs allow.
    pub fn depth(&self) -> usize {
        let mut ready = [0usize; MAX_NETWORK_SIZE];
        let mut depth = 0;

        for &(a, b) in self.comparators {
            let layer = ready[a as usize].max(ready[b as usize]) + 1;
            ready[a as usize] = layer;
            ready[b as usize] = layer;
            depth = depth.max(layer);
        }

        depth
    }

    #[inline]
    pub(crate) fn apply<T, F>(&self, v: &mut [T], is_less: &mut F) -> Result<(), F::Error>
    where
        F: IsLess<T>,
    {
        debug_assert_eq!(v.len(), self.size);

        for &(a, b) in self.comparators {
            swap_if(v, a as usize, b as usize, is_less)?;
        }

        Ok(())
    }
}

#[inline(always)]
pub(crate) fn swap_if<T, F>(v: &mut [T], a: usize, b: usize, is_less: &mut F) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    if is_less.is_less(&v[b], &v[a])? {
        v.swap(a, b);
    }

    Ok(())
}

/// Sorts `v` with the network matching its length.
pub(crate) fn network_sort<T, F>(v: &mut [T], is_less: &mut F) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    match SortingNetwork::for_size(v.len()) {
        Some(network) => network.apply(v, is_less),
        None => {
            debug_assert!(
                false,
                "no sorting network for {} elements (max {})",
                v.len(),
                MAX_NETWORK_SIZE
            );

            hybrid_sort(v, is_less, &TuningParameters::default())
        }
    }
}

/// The network bank as a sorter: any input of at most [`MAX_NETWORK_SIZE`] elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkSorter;

impl Sorter for NetworkSorter {
    fn capabilities(&self) -> Capabilities {
        Capabilities::general().bounded(0, MAX_NETWORK_SIZE)
    }

    fn try_sort_by<T, E, F>(&self, v: &mut [T], mut is_less: F) -> Result<(), E>
    where
        F: FnMut(&T, &T) -> Result<bool, E>,
    {
        network_sort(v, &mut is_less)
    }
}

/// A sorter for exactly `N` elements. Sizes above [`MAX_NETWORK_SIZE`] fail
/// to compile as soon as the sorter is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedNetworkSorter<const N: usize>;

impl<const N: usize> FixedNetworkSorter<N> {
    const SIZE_CHECK: () = assert!(N <= MAX_NETWORK_SIZE, "no sorting network for this size");

    pub fn network(&self) -> SortingNetwork {
        #[allow(clippy::let_unit_value)]
        let () = Self::SIZE_CHECK;

        SortingNetwork {
            size: N,
            comparators: NETWORKS[N],
        }
    }
}

impl<const N: usize> Sorter for FixedNetworkSorter<N> {
    fn capabilities(&self) -> Capabilities {
        #[allow(clippy::let_unit_value)]
        let () = Self::SIZE_CHECK;

        Capabilities {
            fixed_size: true,
            ..Capabilities::general().bounded(N, N)
        }
    }

    fn try_sort_by<T, E, F>(&self, v: &mut [T], mut is_less: F) -> Result<(), E>
    where
        F: FnMut(&T, &T) -> Result<bool, E>,
    {
        debug_assert_eq!(v.len(), N, "FixedNetworkSorter<{}> used on {} elements", N, v.len());

        if v.len() == N {
            self.network().apply(v, &mut is_less)
        } else {
            network_sort(v, &mut is_less)
        }
    }
}
