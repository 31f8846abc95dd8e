use crate::capabilities::OrderingFacts;
use crate::tuning_parameters::TuningParameters;

#[derive(Clone)]
pub struct TuningParams {
    pub input_len: usize,
    /// General algorithm explicitly selected by the caller, if any.
    pub requested: Option<Algorithm>,
    pub facts: OrderingFacts,
    pub stable: bool,
    pub thresholds: TuningParameters,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Algorithm {
    Network,
    LowComparisons,
    Hybrid,
    Distribution,
    Heap,
    Insertion,
    Merge,
    Tim,
}

impl Algorithm {
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Insertion | Algorithm::Merge | Algorithm::Tim)
    }

    pub fn is_comparison_based(self) -> bool {
        !matches!(self, Algorithm::Distribution)
    }
}

pub trait Tuner {
    fn pick_algorithm(&self, p: &TuningParams) -> Algorithm;
}
