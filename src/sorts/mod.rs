mod distribution_sort;
mod heap_sort;
mod hybrid_sort;
mod insertion_sort;
mod low_comparisons_sort;
mod merge_sort;
mod network_sort;
mod network_tables;
mod tim_sort;

pub(crate) use distribution_sort::distribution_sort;
pub use distribution_sort::DistributionSorter;
pub(crate) use heap_sort::heap_sort;
pub use heap_sort::HeapSorter;
pub(crate) use hybrid_sort::hybrid_sort;
pub use hybrid_sort::HybridSorter;
pub(crate) use insertion_sort::insertion_sort_shift_left;
pub use insertion_sort::InsertionSorter;
pub(crate) use low_comparisons_sort::low_comparisons_sort;
pub use low_comparisons_sort::{LowComparisonsSorter, MAX_LOW_COMPARISONS_SIZE};
pub(crate) use merge_sort::merge_sort;
pub use merge_sort::MergeSorter;
pub(crate) use network_sort::network_sort;
pub use network_sort::{FixedNetworkSorter, NetworkSorter, SortingNetwork, MAX_NETWORK_SIZE};
pub(crate) use tim_sort::tim_sort;
pub use tim_sort::TimSorter;
