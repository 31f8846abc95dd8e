use crate::capabilities::{Order, OrderingFacts};
use crate::director::{pick_algorithm, run_radix_sort, run_sort};
use crate::error::SortError;
use crate::sorter::into_ok;
use crate::sorts::{MAX_LOW_COMPARISONS_SIZE, MAX_NETWORK_SIZE};
use crate::tuner::{Algorithm, Tuner, TuningParams};
use crate::tuners::StandardTuner;
use crate::tuning_parameters::TuningParameters;
use crate::utils::{ByKey, Identity};
use crate::RadixKey;
use std::convert::Infallible;

/// Configures a single sort call.
///
/// Every terminal method checks the whole configuration before touching the
/// data, so an `Err` leaves the slice exactly as it was.
pub struct SortBuilder<'a, T> {
    data: &'a mut [T],
    tuner: &'a (dyn Tuner + Send + Sync),
    tuning: TuningParameters,
    requested: Option<Algorithm>,
    order: Order,
    stable: bool,
}

impl<'a, T> SortBuilder<'a, T> {
    pub(crate) fn new(data: &'a mut [T]) -> Self {
        Self {
            data,
            tuner: &StandardTuner,
            tuning: TuningParameters::default(),
            requested: None,
            order: Order::Ascending,
            stable: false,
        }
    }

    pub fn with_tuner(mut self, tuner: &'a (dyn Tuner + Send + Sync)) -> Self {
        self.tuner = tuner;

        self
    }

    pub fn with_tuning(mut self, tuning: TuningParameters) -> Self {
        self.tuning = tuning;

        self
    }

    /// Requests a general algorithm. Inputs small enough for the network or
    /// low-comparison banks still go there unless a bank is requested itself.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.requested = Some(algorithm);

        self
    }

    pub fn ascending(mut self) -> Self {
        self.order = Order::Ascending;

        self
    }

    pub fn descending(mut self) -> Self {
        self.order = Order::Descending;

        self
    }

    /// Equal elements keep their input order.
    pub fn stable(mut self) -> Self {
        self.stable = true;

        self
    }

    fn check(&self, facts: OrderingFacts) -> Result<TuningParams, SortError> {
        self.tuning.validate()?;

        let len = self.data.len();

        if let Some(algorithm) = self.requested {
            if algorithm == Algorithm::Distribution && !facts.supports_distribution() {
                return Err(SortError::CapabilityMismatch {
                    algorithm,
                    reason: "needs a radix key sorted in natural or reverse order",
                });
            }

            if self.stable && !algorithm.is_stable() {
                return Err(SortError::CapabilityMismatch {
                    algorithm,
                    reason: "not a stable algorithm",
                });
            }

            let max = match algorithm {
                Algorithm::Network => Some(MAX_NETWORK_SIZE),
                Algorithm::LowComparisons => Some(MAX_LOW_COMPARISONS_SIZE),
                _ => None,
            };

            if let Some(max) = max.filter(|&max| len > max) {
                return Err(SortError::UnsupportedLength {
                    algorithm,
                    len,
                    max,
                });
            }
        }

        Ok(TuningParams {
            input_len: len,
            requested: self.requested,
            facts,
            stable: self.stable,
            thresholds: self.tuning,
        })
    }

    /// Sorts by `T`'s own order.
    pub fn sort(self) -> Result<(), SortError>
    where
        T: Ord,
    {
        let params = self.check(OrderingFacts::natural(self.order))?;
        let algorithm = pick_algorithm(self.tuner, &params);
        let descending = self.order == Order::Descending;

        into_ok(run_sort(
            algorithm,
            self.data,
            &mut |a: &T, b: &T| Ok::<_, Infallible>(if descending { b < a } else { a < b }),
            &self.tuning,
        ));

        Ok(())
    }

    /// Sorts by a strict weak ordering. `descending()` reverses it.
    pub fn sort_by<F>(self, mut is_less: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let params = self.check(OrderingFacts::custom())?;
        let algorithm = pick_algorithm(self.tuner, &params);
        let descending = self.order == Order::Descending;

        into_ok(run_sort(
            algorithm,
            self.data,
            &mut |a: &T, b: &T| {
                Ok::<_, Infallible>(if descending {
                    is_less(b, a)
                } else {
                    is_less(a, b)
                })
            },
            &self.tuning,
        ));

        Ok(())
    }

    /// Sorts by the natural order of `key(element)`, recomputed for every
    /// comparison.
    pub fn sort_by_key<K, P>(self, mut key: P) -> Result<(), SortError>
    where
        K: Ord,
        P: FnMut(&T) -> K,
    {
        let params = self.check(OrderingFacts::natural(self.order).with_projection())?;
        let algorithm = pick_algorithm(self.tuner, &params);
        let descending = self.order == Order::Descending;

        into_ok(run_sort(
            algorithm,
            self.data,
            &mut |a: &T, b: &T| {
                let (ka, kb) = (key(a), key(b));
                Ok::<_, Infallible>(if descending { kb < ka } else { ka < kb })
            },
            &self.tuning,
        ));

        Ok(())
    }

    /// Like [`SortBuilder::sort`] for radix keys. This is the only entry
    /// point besides [`SortBuilder::sort_by_radix_key`] that may run
    /// distribution sort.
    pub fn sort_radix(self) -> Result<(), SortError>
    where
        T: RadixKey,
    {
        let params = self.check(OrderingFacts::natural(self.order).with_radix_key())?;
        let algorithm = pick_algorithm(self.tuner, &params);

        run_radix_sort(algorithm, self.data, &Identity, self.order, &self.tuning);

        Ok(())
    }

    pub fn sort_by_radix_key<K, P>(self, key: P) -> Result<(), SortError>
    where
        K: RadixKey,
        P: Fn(&T) -> K,
    {
        let facts = OrderingFacts::natural(self.order)
            .with_projection()
            .with_radix_key();
        let params = self.check(facts)?;
        let algorithm = pick_algorithm(self.tuner, &params);

        run_radix_sort(algorithm, self.data, &ByKey(key), self.order, &self.tuning);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::SortError;
    use crate::tuner::Algorithm;
    use crate::tuning_parameters::TuningParameters;
    use crate::utils::test_utils::{gen_inputs, validate_sort, validate_stable_sort, SingleAlgoTuner};
    use crate::SortExt;

    #[test]
    pub fn test_builder_default_sort() {
        validate_sort(gen_inputs(100_000, 0), |v| v.sort_builder().sort().unwrap());
        validate_sort(gen_inputs(100_000, 8), |v| v.sort_builder().sort_radix().unwrap());
    }

    #[test]
    pub fn test_builder_descending() {
        let mut v = gen_inputs(10_000, 0);
        let mut expected = v.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));

        let mut radix = v.clone();
        v.sort_builder().descending().sort().unwrap();
        assert_eq!(v, expected);

        radix
            .sort_builder()
            .descending()
            .with_algorithm(Algorithm::Distribution)
            .sort_radix()
            .unwrap();
        assert_eq!(radix, expected);
    }

    #[test]
    pub fn test_builder_distribution_needs_radix_key() {
        let mut v = gen_inputs(1_000, 0);
        let original = v.clone();

        let err = v
            .sort_builder()
            .with_algorithm(Algorithm::Distribution)
            .sort_by(|a, b| a < b)
            .unwrap_err();

        assert!(matches!(
            err,
            SortError::CapabilityMismatch {
                algorithm: Algorithm::Distribution,
                ..
            }
        ));
        assert_eq!(v, original);

        let err = v
            .sort_builder()
            .with_algorithm(Algorithm::Distribution)
            .sort()
            .unwrap_err();
        assert!(matches!(err, SortError::CapabilityMismatch { .. }));
    }

    #[test]
    pub fn test_builder_stable() {
        let mut v: Vec<(u8, usize)> = gen_inputs(20_000, 0)
            .iter()
            .enumerate()
            .map(|(i, x)| ((x % 7) as u8, i))
            .collect();

        v.sort_builder().stable().sort_by_key(|p| p.0).unwrap();
        assert!(v.windows(2).all(|w| w[0] < w[1]));

        v.sort_builder().stable().descending().sort_by(|a, b| a.0 < b.0).unwrap();
        assert!(v
            .windows(2)
            .all(|w| w[0].0 > w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1)));
    }

    #[test]
    pub fn test_builder_stable_rejects_unstable_request() {
        let mut v = vec![3, 1, 2];

        let err = v
            .sort_builder()
            .stable()
            .with_algorithm(Algorithm::Hybrid)
            .sort()
            .unwrap_err();

        assert_eq!(
            err,
            SortError::CapabilityMismatch {
                algorithm: Algorithm::Hybrid,
                reason: "not a stable algorithm",
            }
        );
        assert_eq!(v, vec![3, 1, 2]);
    }

    #[test]
    pub fn test_builder_bank_length_limits() {
        let mut v = gen_inputs(33, 0);
        let original = v.clone();

        let err = v
            .sort_builder()
            .with_algorithm(Algorithm::Network)
            .sort()
            .unwrap_err();
        assert_eq!(
            err,
            SortError::UnsupportedLength {
                algorithm: Algorithm::Network,
                len: 33,
                max: 32,
            }
        );
        assert_eq!(v, original);

        v.sort_builder()
            .with_algorithm(Algorithm::LowComparisons)
            .sort()
            .unwrap();
        assert!(v.windows(2).all(|w| w[0] <= w[1]));

        let mut v = gen_inputs(65, 0);
        assert!(matches!(
            v.sort_builder()
                .with_algorithm(Algorithm::LowComparisons)
                .sort(),
            Err(SortError::UnsupportedLength { max: 64, .. })
        ));
    }

    #[test]
    pub fn test_builder_invalid_tuning() {
        let mut v = gen_inputs(100, 0);
        let original = v.clone();

        let err = v
            .sort_builder()
            .with_tuning(TuningParameters::new().with_network_threshold(64))
            .sort()
            .unwrap_err();

        assert!(matches!(err, SortError::InvalidTuning { .. }));
        assert_eq!(v, original);
    }

    #[test]
    pub fn test_builder_stable_tim_sort() {
        validate_stable_sort(20_000, |v, is_less| {
            v.sort_builder()
                .stable()
                .with_algorithm(Algorithm::Tim)
                .sort_by(is_less)
                .unwrap()
        });

        let mut v: Vec<u32> = (0..10_000).rev().collect();
        v.sort_builder().with_algorithm(Algorithm::Tim).descending().sort().unwrap();
        assert_eq!(v, (0..10_000).rev().collect::<Vec<_>>());
    }

    #[test]
    pub fn test_builder_with_tuner() {
        for algo in [Algorithm::Heap, Algorithm::Merge, Algorithm::Distribution] {
            let tuner = SingleAlgoTuner { algo };

            validate_sort(gen_inputs(10_000, 0), |v| {
                v.sort_builder().with_tuner(&tuner).sort().unwrap()
            });
            validate_sort(gen_inputs(10_000, 0), |v| {
                v.sort_builder().with_tuner(&tuner).sort_radix().unwrap()
            });
        }
    }

    #[test]
    pub fn test_builder_radix_key_projection() {
        let mut v: Vec<(String, u32)> = gen_inputs(5_000, 0)
            .into_iter()
            .map(|x| (format!("{:x}", x), x))
            .collect();

        v.sort_builder()
            .with_algorithm(Algorithm::Distribution)
            .sort_by_radix_key(|p| p.1)
            .unwrap();

        assert!(v.windows(2).all(|w| w[0].1 <= w[1].1));
    }
}
