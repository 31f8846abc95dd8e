//! `StandardTuner` represents the default routing of sort calls offered by sortkit.
//!
//! StandardTuner algorithm choice is:
//!  * sorting networks for the smallest inputs
//!  * the low-comparison bank just above them
//!  * the requested general algorithm otherwise, hybrid sort by default
//!  * whenever stability is required, the requested stable algorithm, else
//!    insertion sort for small inputs and merge sort for the rest

use crate::tuner::{Algorithm, Tuner, TuningParams};

pub struct StandardTuner;
impl Tuner for StandardTuner {
    #[inline]
    fn pick_algorithm(&self, p: &TuningParams) -> Algorithm {
        if p.stable {
            return match p.requested {
                Some(a) if a.is_stable() => a,
                _ if p.input_len <= p.thresholds.low_comparisons_threshold => Algorithm::Insertion,
                _ => Algorithm::Merge,
            };
        }

        match p.requested {
            Some(Algorithm::Network) => return Algorithm::Network,
            Some(Algorithm::LowComparisons) => return Algorithm::LowComparisons,
            _ => {}
        }

        if p.input_len <= p.thresholds.network_threshold {
            return Algorithm::Network;
        } else if p.input_len <= p.thresholds.low_comparisons_threshold {
            return Algorithm::LowComparisons;
        }

        match p.requested {
            Some(Algorithm::Distribution) if p.facts.supports_distribution() => {
                Algorithm::Distribution
            }
            Some(Algorithm::Distribution) | None => Algorithm::Hybrid,
            Some(a) => a,
        }
    }
}
