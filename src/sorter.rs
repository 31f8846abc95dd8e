use crate::capabilities::{Capabilities, Order};
use crate::RadixKey;
use std::convert::Infallible;

/// A strict weak ordering used by every comparison-based algorithm in the crate.
///
/// Implemented for any `FnMut(&T, &T) -> Result<bool, E>`. Returning `Ok(true)`
/// means `a` orders strictly before `b`. An `Err` aborts the sort immediately
/// and is handed back to the caller.
pub trait IsLess<T> {
    type Error;

    fn is_less(&mut self, a: &T, b: &T) -> Result<bool, Self::Error>;
}

impl<T, E, F> IsLess<T> for F
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    type Error = E;

    #[inline(always)]
    fn is_less(&mut self, a: &T, b: &T) -> Result<bool, E> {
        self(a, b)
    }
}

#[inline(always)]
pub(crate) fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(v) => v,
        Err(never) => match never {},
    }
}

/// The uniform call contract shared by all sorters.
///
/// Implementors only provide [`Sorter::try_sort_by`]; the natural-order,
/// projection and infallible variants are derived from it. A sorter owns no
/// data and can be shared freely: every call works on the caller's slice only.
///
/// Elements are only ever swapped or rotated, so when a comparison fails or
/// panics the slice still holds every original element exactly once, in an
/// unspecified order.
pub trait Sorter {
    fn capabilities(&self) -> Capabilities;

    fn try_sort_by<T, E, F>(&self, v: &mut [T], is_less: F) -> Result<(), E>
    where
        F: FnMut(&T, &T) -> Result<bool, E>;

    fn sort_by<T, F>(&self, v: &mut [T], mut is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        into_ok(self.try_sort_by(v, |a, b| Ok(is_less(a, b))));
    }

    fn sort<T>(&self, v: &mut [T])
    where
        T: Ord,
    {
        self.sort_by(v, T::lt);
    }

    fn sort_descending<T>(&self, v: &mut [T])
    where
        T: Ord,
    {
        self.sort_by(v, |a, b| b.lt(a));
    }

    /// Sorts by the natural order of `key(element)`. The key is recomputed
    /// for every comparison.
    fn sort_by_key<T, K, P>(&self, v: &mut [T], mut key: P)
    where
        K: Ord,
        P: FnMut(&T) -> K,
    {
        self.sort_by(v, |a, b| key(a).lt(&key(b)));
    }

    /// Sorts by `is_less` applied to the projected keys.
    fn sort_by_projection<T, K, P, C>(&self, v: &mut [T], mut key: P, mut is_less: C)
    where
        P: FnMut(&T) -> K,
        C: FnMut(&K, &K) -> bool,
    {
        self.sort_by(v, |a, b| {
            let ka = key(a);
            let kb = key(b);
            is_less(&ka, &kb)
        });
    }
}

/// The call contract of sorters that only order [`RadixKey`]s by their own
/// order or its reverse.
///
/// There is no comparator entry point, so asking such a sorter for any other
/// ordering does not compile.
pub trait RadixSorter {
    fn capabilities(&self) -> Capabilities;

    fn sort_radix<T>(&self, v: &mut [T], order: Order)
    where
        T: RadixKey;

    /// Sorts by `key(element)`. The key is recomputed every time it is read.
    fn sort_by_radix_key<T, K, P>(&self, v: &mut [T], key: P, order: Order)
    where
        K: RadixKey,
        P: Fn(&T) -> K;

    fn sort<T>(&self, v: &mut [T])
    where
        T: RadixKey,
    {
        self.sort_radix(v, Order::Ascending);
    }

    fn sort_descending<T>(&self, v: &mut [T])
    where
        T: RadixKey,
    {
        self.sort_radix(v, Order::Descending);
    }

    fn sort_by_key<T, K, P>(&self, v: &mut [T], key: P)
    where
        K: RadixKey,
        P: Fn(&T) -> K,
    {
        self.sort_by_radix_key(v, key, Order::Ascending);
    }

    fn sort_by_key_descending<T, K, P>(&self, v: &mut [T], key: P)
    where
        K: RadixKey,
        P: Fn(&T) -> K,
    {
        self.sort_by_radix_key(v, key, Order::Descending);
    }
}
