use crate::error::SortError;
use crate::sorts::{MAX_LOW_COMPARISONS_SIZE, MAX_NETWORK_SIZE};

/// Length thresholds separating the algorithm banks.
///
/// These are benchmark-tuned defaults, not correctness requirements. Any
/// combination accepted by [`TuningParameters::validate`] sorts correctly.
///
/// The `with_tuning` constructors of the sorters and [`SortBuilder`](crate::SortBuilder)
/// reject anything `validate` rejects. Values set directly on the fields skip
/// that check and are clamped by the algorithms instead. A bank picked for
/// more elements than it holds hands the input to the hybrid sort. A
/// distribution threshold of 0 acts as 1.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TuningParameters {
    /// Inputs up to this length go straight to a sorting network.
    pub network_threshold: usize,
    /// Inputs up to this length use the low-comparison bank.
    pub low_comparisons_threshold: usize,
    /// Distribution buckets up to this length are finished by comparison sort.
    pub distribution_threshold: usize,
}

impl Default for TuningParameters {
    fn default() -> Self {
        Self {
            network_threshold: Self::network_threshold(),
            low_comparisons_threshold: Self::low_comparisons_threshold(),
            distribution_threshold: Self::distribution_threshold(),
        }
    }
}

impl TuningParameters {
    pub fn new() -> Self {
        Self::default()
    }

    fn network_threshold() -> usize {
        MAX_NETWORK_SIZE
    }

    fn low_comparisons_threshold() -> usize {
        40
    }

    fn distribution_threshold() -> usize {
        128
    }

    pub fn with_network_threshold(mut self, threshold: usize) -> Self {
        self.network_threshold = threshold;
        self
    }

    pub fn with_low_comparisons_threshold(mut self, threshold: usize) -> Self {
        self.low_comparisons_threshold = threshold;
        self
    }

    pub fn with_distribution_threshold(mut self, threshold: usize) -> Self {
        self.distribution_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), SortError> {
        if self.network_threshold > MAX_NETWORK_SIZE {
            return Err(SortError::InvalidTuning {
                name: "network_threshold",
                reason: format!(
                    "{} exceeds the largest network ({})",
                    self.network_threshold, MAX_NETWORK_SIZE
                ),
            });
        }

        if self.low_comparisons_threshold < self.network_threshold {
            return Err(SortError::InvalidTuning {
                name: "low_comparisons_threshold",
                reason: format!(
                    "{} is below network_threshold ({})",
                    self.low_comparisons_threshold, self.network_threshold
                ),
            });
        }

        if self.low_comparisons_threshold > MAX_LOW_COMPARISONS_SIZE {
            return Err(SortError::InvalidTuning {
                name: "low_comparisons_threshold",
                reason: format!(
                    "{} exceeds the low-comparison bank ({})",
                    self.low_comparisons_threshold, MAX_LOW_COMPARISONS_SIZE
                ),
            });
        }

        if self.distribution_threshold == 0 {
            return Err(SortError::InvalidTuning {
                name: "distribution_threshold",
                reason: "must be at least 1".to_owned(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_default_is_valid() {
        assert_eq!(TuningParameters::default().validate(), Ok(()));
    }

    #[test]
    pub fn test_rejects_oversized_network() {
        let err = TuningParameters::new()
            .with_network_threshold(MAX_NETWORK_SIZE + 1)
            .with_low_comparisons_threshold(MAX_LOW_COMPARISONS_SIZE)
            .validate()
            .unwrap_err();

        assert!(matches!(
            err,
            SortError::InvalidTuning {
                name: "network_threshold",
                ..
            }
        ));
    }

    #[test]
    pub fn test_rejects_inverted_thresholds() {
        let err = TuningParameters::new()
            .with_network_threshold(16)
            .with_low_comparisons_threshold(8)
            .validate()
            .unwrap_err();

        assert!(matches!(
            err,
            SortError::InvalidTuning {
                name: "low_comparisons_threshold",
                ..
            }
        ));
    }

    #[test]
    pub fn test_rejects_zero_distribution_threshold() {
        assert!(TuningParameters::new()
            .with_distribution_threshold(0)
            .validate()
            .is_err());
    }
}
