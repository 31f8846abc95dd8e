//! # sortkit
//!
//! sortkit is a collection of in-memory sorting algorithms behind one sorter
//! interface: sorting networks for tiny inputs, a low-comparison small sort
//! just above them, a pattern-defeating hybrid quicksort for everything else
//! and an MSB radix (distribution) sort for keys with an ordered byte
//! representation.
//!
//! ## Usage
//!
//! In the simplest case, call `my_vec.adaptive_sort()` or `sortkit::sort(&mut my_vec)`.
//! The dispatcher picks an algorithm from the input length.
//!
//! ```
//! use sortkit::SortExt;
//!
//! let mut v = vec![5, 3, 9, 1];
//! v.adaptive_sort();
//! assert_eq!(v, vec![1, 3, 5, 9]);
//! ```
//!
//! Every comparison algorithm is also available directly through the
//! [`Sorter`] trait, which takes an optional comparison and projection.
//! [`DistributionSorter`] implements [`RadixSorter`] instead, which only
//! offers a key's natural order or its reverse:
//!
//! ```
//! use sortkit::{DistributionSorter, HybridSorter, RadixSorter, Sorter};
//!
//! let mut words = vec!["pear", "fig", "banana"];
//! HybridSorter::new().sort_by_key(&mut words, |w| w.len());
//! assert_eq!(words, vec!["fig", "pear", "banana"]);
//!
//! DistributionSorter::new().sort_descending(&mut words);
//! assert_eq!(words, vec!["pear", "fig", "banana"]);
//! ```
//!
//! For more control, use the builder. Configuration problems are reported
//! before the data is touched:
//!
//! ```
//! use sortkit::{Algorithm, SortExt};
//!
//! let mut v: Vec<u64> = (0..1_000).rev().collect();
//! v.sort_builder()
//!     .with_algorithm(Algorithm::Distribution)
//!     .sort_radix()
//!     .unwrap();
//! assert!(v.windows(2).all(|w| w[0] <= w[1]));
//!
//! let err = v
//!     .sort_builder()
//!     .with_algorithm(Algorithm::Distribution)
//!     .sort_by(|a, b| a % 10 < b % 10);
//! assert!(err.is_err());
//! ```
//!
//! ## Default Implementations
//!
//! `RadixKey` is implemented out-of-the-box for:
//!
//!  * `u8`, `u16`, `u32`, `u64`, `u128`, `usize`
//!  * `i8`, `i16`, `i32`, `i64`, `i128`, `isize`
//!  * `f32`, `f64` (total order, `-0.0` before `0.0`)
//!  * `bool`, `char`
//!  * `[u8; N]`, `[u8]`, `Vec<u8>`, `str`, `String`
//!  * `[u16]`, `Vec<u16>`, `[u32]`, `Vec<u32>`, `[char]`, `Vec<char>` (wide strings)
//!  * `&K` for any of the above
//!
//! ### Implementing `RadixKey`
//!
//! To be able to distribution sort custom types, implement `RadixKey`.
//! `get_level` returns the key's bytes from the most significant one, and
//! `None` once the key is exhausted.
//!
//! ```
//! use sortkit::{DistributionSorter, RadixKey, RadixSorter};
//!
//! struct Point {
//!     x: u16,
//!     y: u8,
//! }
//!
//! impl RadixKey for Point {
//!     #[inline]
//!     fn get_level(&self, level: usize) -> Option<u8> {
//!         match level {
//!             0 => Some((self.x >> 8) as u8),
//!             1 => Some(self.x as u8),
//!             2 => Some(self.y),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut points = vec![Point { x: 300, y: 1 }, Point { x: 2, y: 9 }, Point { x: 2, y: 3 }];
//! DistributionSorter::new().sort(&mut points);
//! assert_eq!(points[0].y, 3);
//! ```
//!
//! ## Logging
//!
//! Dispatch decisions are logged at `debug` level and distribution passes at
//! `trace` level through the `log` facade. No logger is installed.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

mod capabilities;
mod director;
mod error;
mod radix_key;
mod radix_key_impl;
mod sort_builder;
mod sorter;
mod sorts;
mod tuner;
pub mod tuners;
mod tuning_parameters;
mod utils;


pub use capabilities::{Capabilities, Comparison, IteratorCategory, Order, OrderingFacts};
pub use director::{DefaultSorter, SmallArrayAdapter};
pub use error::SortError;
pub use radix_key::RadixKey;
pub use sort_builder::SortBuilder;
pub use sorter::{IsLess, RadixSorter, Sorter};
pub use sorts::{
    DistributionSorter, FixedNetworkSorter, HeapSorter, HybridSorter, InsertionSorter,
    LowComparisonsSorter, MergeSorter, NetworkSorter, SortingNetwork, TimSorter,
    MAX_LOW_COMPARISONS_SIZE, MAX_NETWORK_SIZE,
};
pub use tuner::{Algorithm, Tuner, TuningParams};
pub use tuning_parameters::TuningParameters;

/// Sorts `v` in ascending order with the dispatching sorter. Not stable.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    DefaultSorter::new().sort(v);
}

pub fn sort_by<T, F>(v: &mut [T], is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    DefaultSorter::new().sort_by(v, is_less);
}

pub fn sort_by_key<T, K, P>(v: &mut [T], key: P)
where
    K: Ord,
    P: FnMut(&T) -> K,
{
    DefaultSorter::new().sort_by_key(v, key);
}

pub trait SortExt<T> {
    /// Sorts in ascending order, picking the algorithm from the input length.
    fn adaptive_sort(&mut self)
    where
        T: Ord;

    fn adaptive_sort_by<F>(&mut self, is_less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// Sorts radix keys in ascending order with [`DistributionSorter`].
    fn distribution_sort(&mut self)
    where
        T: RadixKey;

    fn sort_builder(&mut self) -> SortBuilder<'_, T>;
}

impl<T> SortExt<T> for [T] {
    fn adaptive_sort(&mut self)
    where
        T: Ord,
    {
        sort(self);
    }

    fn adaptive_sort_by<F>(&mut self, is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        sort_by(self, is_less);
    }

    fn distribution_sort(&mut self)
    where
        T: RadixKey,
    {
        DistributionSorter::new().sort(self);
    }

    fn sort_builder(&mut self) -> SortBuilder<'_, T> {
        SortBuilder::new(self)
    }
}

impl<T> SortExt<T> for Vec<T> {
    fn adaptive_sort(&mut self)
    where
        T: Ord,
    {
        self.as_mut_slice().adaptive_sort();
    }

    fn adaptive_sort_by<F>(&mut self, is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.as_mut_slice().adaptive_sort_by(is_less);
    }

    fn distribution_sort(&mut self)
    where
        T: RadixKey,
    {
        self.as_mut_slice().distribution_sort();
    }

    fn sort_builder(&mut self) -> SortBuilder<'_, T> {
        SortBuilder::new(self.as_mut_slice())
    }
}
