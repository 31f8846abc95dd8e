use crate::capabilities::{Capabilities, Order, OrderingFacts};
use crate::error::SortError;
use crate::sorter::{into_ok, IsLess, RadixSorter, Sorter};
use crate::sorts::{
    distribution_sort, heap_sort, hybrid_sort, insertion_sort_shift_left, low_comparisons_sort,
    merge_sort, network_sort, tim_sort, MAX_LOW_COMPARISONS_SIZE, MAX_NETWORK_SIZE,
};
use crate::tuner::{Algorithm, Tuner, TuningParams};
use crate::tuners::StandardTuner;
use crate::tuning_parameters::TuningParameters;
use crate::utils::{compare_levels, ByKey, Identity, LevelReader};
use crate::RadixKey;
use log::debug;
use std::cmp::Ordering;
use std::convert::Infallible;

/// Runs `algorithm` through the comparison seam.
///
/// Choices that cannot serve the call fall back to the hybrid sort: a bounded
/// bank given too many elements, or an algorithm that is not comparison
/// based and so has no comparator entry point.
#[inline]
pub(crate) fn run_sort<T, F>(
    algorithm: Algorithm,
    v: &mut [T],
    is_less: &mut F,
    tuning: &TuningParameters,
) -> Result<(), F::Error>
where
    F: IsLess<T>,
{
    if !algorithm.is_comparison_based() {
        debug!("{:?} needs a radix key, using hybrid sort", algorithm);
        return hybrid_sort(v, is_less, tuning);
    }

    match algorithm {
        Algorithm::Network if v.len() <= MAX_NETWORK_SIZE => network_sort(v, is_less),
        Algorithm::LowComparisons if v.len() <= MAX_LOW_COMPARISONS_SIZE => {
            low_comparisons_sort(v, is_less)
        }
        Algorithm::Network | Algorithm::LowComparisons => {
            debug!(
                "{:?} cannot sort {} elements, using hybrid sort",
                algorithm,
                v.len()
            );
            hybrid_sort(v, is_less, tuning)
        }
        Algorithm::Hybrid | Algorithm::Distribution => hybrid_sort(v, is_less, tuning),
        Algorithm::Heap => heap_sort(v, is_less),
        Algorithm::Insertion => insertion_sort_shift_left(v, 1, is_less),
        Algorithm::Merge => merge_sort(v, is_less),
        Algorithm::Tim => tim_sort(v, is_less),
    }
}

/// Like [`run_sort`], for keys read through a [`LevelReader`]. Comparison
/// algorithms compare level by level so every choice agrees on the order.
#[inline]
pub(crate) fn run_radix_sort<T, R>(
    algorithm: Algorithm,
    v: &mut [T],
    reader: &R,
    order: Order,
    tuning: &TuningParameters,
) where
    R: LevelReader<T>,
{
    if !algorithm.is_comparison_based() {
        distribution_sort(v, reader, order, tuning);
        return;
    }

    let mut is_less = |a: &T, b: &T| {
        let ord = match order {
            Order::Ascending => compare_levels(reader, a, b, 0),
            Order::Descending => compare_levels(reader, b, a, 0),
        };

        Ok::<_, Infallible>(ord == Ordering::Less)
    };

    into_ok(run_sort(algorithm, v, &mut is_less, tuning));
}

/// Asks `tuner` for an algorithm, holding it to the stability requirement.
#[inline]
pub(crate) fn pick_algorithm(tuner: &(dyn Tuner + Send + Sync), params: &TuningParams) -> Algorithm {
    let algorithm = tuner.pick_algorithm(params);

    if params.stable && !algorithm.is_stable() {
        debug!(
            "tuner picked unstable {:?} for a stable sort of {} elements, using merge sort",
            algorithm, params.input_len
        );

        return Algorithm::Merge;
    }

    debug!("sorting {} elements with {:?}", params.input_len, algorithm);

    algorithm
}

/// The dispatching sorter: asks its tuner for an algorithm on every call.
#[derive(Clone, Copy)]
pub struct DefaultSorter<'a> {
    tuner: &'a (dyn Tuner + Send + Sync),
    tuning: TuningParameters,
}

impl Default for DefaultSorter<'static> {
    fn default() -> Self {
        Self {
            tuner: &StandardTuner,
            tuning: TuningParameters::default(),
        }
    }
}

impl DefaultSorter<'static> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> DefaultSorter<'a> {
    pub fn with_tuner(tuner: &'a (dyn Tuner + Send + Sync)) -> Self {
        Self {
            tuner,
            tuning: TuningParameters::default(),
        }
    }

    pub fn with_tuning(mut self, tuning: TuningParameters) -> Result<Self, SortError> {
        tuning.validate()?;
        self.tuning = tuning;

        Ok(self)
    }

    pub fn tuning(&self) -> &TuningParameters {
        &self.tuning
    }
}

impl Sorter for DefaultSorter<'_> {
    fn capabilities(&self) -> Capabilities {
        Capabilities::general()
    }

    fn try_sort_by<T, E, F>(&self, v: &mut [T], mut is_less: F) -> Result<(), E>
    where
        F: FnMut(&T, &T) -> Result<bool, E>,
    {
        let params = TuningParams {
            input_len: v.len(),
            requested: None,
            facts: OrderingFacts::custom(),
            stable: false,
            thresholds: self.tuning,
        };

        let algorithm = pick_algorithm(self.tuner, &params);

        run_sort(algorithm, v, &mut is_less, &self.tuning)
    }
}

/// Sorts inputs the network bank covers with a network, everything else with
/// the wrapped sorter.
///
/// Wraps either a [`Sorter`] or a [`RadixSorter`] and offers the same call
/// contract as the wrapped sorter. Radix keys sorted by a network are compared
/// level by level.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallArrayAdapter<S> {
    fallback: S,
}

impl<S> SmallArrayAdapter<S> {
    pub fn new(fallback: S) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> &S {
        &self.fallback
    }
}

impl<S> Sorter for SmallArrayAdapter<S>
where
    S: Sorter,
{
    fn capabilities(&self) -> Capabilities {
        let inner = self.fallback.capabilities();

        Capabilities {
            is_always_stable: false,
            minimum_size: 0,
            accepts_comparator: true,
            accepts_projection: true,
            fixed_size: false,
            ..inner
        }
    }

    fn try_sort_by<T, E, F>(&self, v: &mut [T], mut is_less: F) -> Result<(), E>
    where
        F: FnMut(&T, &T) -> Result<bool, E>,
    {
        if v.len() <= MAX_NETWORK_SIZE {
            network_sort(v, &mut is_less)
        } else {
            self.fallback.try_sort_by(v, is_less)
        }
    }
}

impl<S> RadixSorter for SmallArrayAdapter<S>
where
    S: RadixSorter,
{
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            is_always_stable: false,
            minimum_size: 0,
            fixed_size: false,
            ..self.fallback.capabilities()
        }
    }

    fn sort_radix<T>(&self, v: &mut [T], order: Order)
    where
        T: RadixKey,
    {
        if v.len() <= MAX_NETWORK_SIZE {
            run_radix_sort(Algorithm::Network, v, &Identity, order, &TuningParameters::default());
        } else {
            self.fallback.sort_radix(v, order);
        }
    }

    fn sort_by_radix_key<T, K, P>(&self, v: &mut [T], key: P, order: Order)
    where
        K: RadixKey,
        P: Fn(&T) -> K,
    {
        if v.len() <= MAX_NETWORK_SIZE {
            run_radix_sort(Algorithm::Network, v, &ByKey(key), order, &TuningParameters::default());
        } else {
            self.fallback.sort_by_radix_key(v, key, order);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::{DistributionSorter, HeapSorter, MergeSorter, TimSorter};
    use crate::utils::test_utils::{
        gen_inputs, sort_comparison_suite, sort_comparison_suite_up_to, validate_patterns,
        validate_sort, validate_stable_sort, SingleAlgoTuner,
    };
    use crate::utils::Identity;

    const ALL_ALGORITHMS: [Algorithm; 8] = [
        Algorithm::Network,
        Algorithm::LowComparisons,
        Algorithm::Hybrid,
        Algorithm::Distribution,
        Algorithm::Heap,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Tim,
    ];

    #[test]
    pub fn test_default_sorter() {
        sort_comparison_suite(|v| DefaultSorter::new().sort(v));
        validate_patterns(10_000, |v| DefaultSorter::new().sort(v));
    }

    #[test]
    pub fn test_every_forced_algorithm_sorts() {
        for algo in ALL_ALGORITHMS {
            let tuner = SingleAlgoTuner { algo };
            let max_len = if algo == Algorithm::Insertion { 2_000 } else { 100_000 };

            sort_comparison_suite_up_to(max_len, |v| DefaultSorter::with_tuner(&tuner).sort(v));
        }
    }

    #[test]
    pub fn test_run_radix_sort_every_algorithm() {
        for algo in ALL_ALGORITHMS {
            for order in [Order::Ascending, Order::Descending] {
                let mut v = gen_inputs(1_500, 4);
                let mut expected = v.clone();
                expected.sort_unstable();
                if order == Order::Descending {
                    expected.reverse();
                }

                run_radix_sort(algo, &mut v, &Identity, order, &TuningParameters::default());

                assert_eq!(v, expected, "{:?} {:?}", algo, order);
            }
        }
    }

    #[test]
    pub fn test_pick_algorithm_keeps_stability() {
        let tuner = SingleAlgoTuner {
            algo: Algorithm::Hybrid,
        };
        let params = TuningParams {
            input_len: 1_000,
            requested: None,
            facts: OrderingFacts::custom(),
            stable: true,
            thresholds: TuningParameters::default(),
        };

        assert_eq!(pick_algorithm(&tuner, &params), Algorithm::Merge);
        assert_eq!(
            pick_algorithm(&tuner, &TuningParams { stable: false, ..params.clone() }),
            Algorithm::Hybrid
        );
    }

    #[test]
    pub fn test_stable_algorithms_through_run_sort() {
        for algo in [Algorithm::Insertion, Algorithm::Merge, Algorithm::Tim] {
            validate_stable_sort(1_000, |v, is_less| {
                into_ok(run_sort(
                    algo,
                    v,
                    &mut |a: &(u8, usize), b: &(u8, usize)| Ok::<_, Infallible>(is_less(a, b)),
                    &TuningParameters::default(),
                ))
            });
        }
    }

    #[test]
    pub fn test_small_array_adapter() {
        let sorter = SmallArrayAdapter::new(MergeSorter);
        assert!(!Sorter::capabilities(&sorter).is_always_stable);

        sort_comparison_suite(|v| Sorter::sort(&sorter, v));
        validate_sort(vec![3u32, 1, 2], |v| Sorter::sort(&SmallArrayAdapter::new(HeapSorter), v));
        validate_sort(gen_inputs(5_000, 0), |v| Sorter::sort(&SmallArrayAdapter::new(TimSorter), v));
    }

    #[test]
    pub fn test_small_array_adapter_over_radix_sorter() {
        let sorter = SmallArrayAdapter::new(DistributionSorter::new());
        let caps = RadixSorter::capabilities(&sorter);
        assert!(!caps.accepts_comparator);
        assert!(!caps.fixed_size);

        sort_comparison_suite(|v| RadixSorter::sort(&sorter, v));

        for len in [0, 1, MAX_NETWORK_SIZE, MAX_NETWORK_SIZE + 1, 1_000] {
            let mut v = gen_inputs(len, 8);
            let mut expected = v.clone();
            expected.sort_unstable_by(|a, b| b.cmp(a));

            RadixSorter::sort_descending(&sorter, &mut v);
            assert_eq!(v, expected, "len {}", len);

            let mut words: Vec<String> = v.iter().map(|x| format!("{:x}", x)).collect();
            let mut expected = words.clone();
            expected.sort_unstable();

            RadixSorter::sort_by_key(&sorter, &mut words, |w| w.clone());
            assert_eq!(words, expected, "len {}", len);
        }
    }

    #[test]
    pub fn test_default_sorter_with_tuning() {
        let tuning = TuningParameters::new()
            .with_network_threshold(4)
            .with_low_comparisons_threshold(8);
        let sorter = DefaultSorter::new().with_tuning(tuning).unwrap();

        assert_eq!(sorter.tuning(), &tuning);
        sort_comparison_suite_up_to(10_000, |v| sorter.sort(v));
    }

    #[test]
    pub fn test_default_sorter_rejects_invalid_tuning() {
        let tuning = TuningParameters::new().with_network_threshold(MAX_NETWORK_SIZE + 1);

        assert!(matches!(
            DefaultSorter::new().with_tuning(tuning),
            Err(SortError::InvalidTuning {
                name: "network_threshold",
                ..
            })
        ));
    }

    #[test]
    pub fn test_run_sort_falls_back_without_radix_key() {
        assert!(!Algorithm::Distribution.is_comparison_based());

        validate_sort(gen_inputs(10_000, 4), |v| {
            into_ok(run_sort(
                Algorithm::Distribution,
                v,
                &mut |a: &u32, b: &u32| Ok::<_, Infallible>(a < b),
                &TuningParameters::default(),
            ))
        });
    }
}
