use crate::tuner::{Algorithm, Tuner, TuningParams};
use block_pseudorand::block_rand;
use nanorand::{Rng, WyRand};
use rayon::prelude::*;
use std::fmt::Debug;

pub struct SingleAlgoTuner {
    pub(crate) algo: Algorithm,
}

impl Tuner for SingleAlgoTuner {
    #[inline]
    fn pick_algorithm(&self, _p: &TuningParams) -> Algorithm {
        self.algo
    }
}

/// Random `u32`s, the lower half shifted right and the upper half shifted
/// left by `shift` to produce long runs of shared bytes.
pub fn gen_inputs(n: usize, shift: u32) -> Vec<u32> {
    if n == 0 {
        return Vec::new();
    }

    let mut inputs: Vec<u32> = block_rand(n);

    inputs[0..(n / 2)].par_iter_mut().for_each(|v| *v >>= shift);
    inputs[(n / 2)..n].par_iter_mut().for_each(|v| *v <<= shift);

    inputs
}

const SUITE_LENGTHS: [usize; 22] = [
    0, 1, 2, 3, 5, 8, 16, 31, 32, 33, 40, 41, 63, 64, 65, 100, 128, 129, 1_000, 5_000, 10_000,
    100_000,
];

pub fn gen_input_set(max_len: usize, shift: u32) -> Vec<Vec<u32>> {
    SUITE_LENGTHS
        .iter()
        .filter(|&&n| n <= max_len)
        .map(|&n| gen_inputs(n, shift))
        .collect()
}

pub fn validate_sort<T, F>(mut inputs: Vec<T>, sort_fn: F)
where
    T: Ord + Clone + Debug,
    F: Fn(&mut [T]),
{
    let mut expected = inputs.clone();
    expected.sort();

    sort_fn(&mut inputs);

    assert!(
        inputs.windows(2).all(|w| w[0] <= w[1]),
        "output of length {} is not sorted",
        inputs.len()
    );
    assert_eq!(inputs, expected);
}

pub fn sort_comparison_suite_up_to<F>(max_len: usize, sort_fn: F)
where
    F: Fn(&mut [u32]),
{
    for shift in [0, 8, 16, 24, 28, 31] {
        for s in gen_input_set(max_len, shift) {
            validate_sort(s, &sort_fn);
        }
    }
}

pub fn sort_comparison_suite<F>(sort_fn: F)
where
    F: Fn(&mut [u32]),
{
    sort_comparison_suite_up_to(usize::MAX, sort_fn);
}

/// The twelve benchmark distributions, by name.
pub fn gen_patterns(len: usize) -> Vec<(&'static str, Vec<i32>)> {
    let n = len as i32;
    let mut rng = WyRand::new_seed(len as u64);

    let mut shuffled: Vec<i32> = (0..n).collect();
    rng.shuffle(&mut shuffled);

    let mut shuffled_16: Vec<i32> = (0..n).map(|i| i % 16).collect();
    rng.shuffle(&mut shuffled_16);

    let sawtooth_limit = if len < 2 {
        1
    } else {
        ((len as f64 / (len as f64).log2() * 1.1) as i32).max(1)
    };

    vec![
        ("shuffled_int", shuffled),
        ("shuffled_16_values_int", shuffled_16),
        ("all_equal_int", vec![0; len]),
        ("ascending_int", (0..n).collect()),
        ("descending_int", (0..n).rev().collect()),
        (
            "pipe_organ_int",
            (0..n / 2).chain((n / 2..n).map(|i| n - i)).collect(),
        ),
        ("push_front_int", (1..n).chain((n > 0).then_some(0)).collect()),
        (
            "push_middle_int",
            (0..n)
                .filter(|&i| i != n / 2)
                .chain((n > 0).then_some(n / 2))
                .collect(),
        ),
        (
            "ascending_sawtooth_int",
            (0..n).map(|i| i % sawtooth_limit).collect(),
        ),
        (
            "descending_sawtooth_int",
            (0..n).rev().map(|i| i % sawtooth_limit).collect(),
        ),
        (
            "alternating_int",
            (0..n).map(|i| if i % 2 == 0 { -i } else { i }).collect(),
        ),
        (
            "alternating_16_values_int",
            (0..n)
                .map(|i| if i % 2 == 0 { -(i % 16) } else { i % 16 })
                .collect(),
        ),
    ]
}

pub fn validate_patterns<F>(len: usize, sort_fn: F)
where
    F: Fn(&mut [i32]),
{
    for (name, mut input) in gen_patterns(len) {
        let mut expected = input.clone();
        expected.sort();

        sort_fn(&mut input);

        assert_eq!(input, expected, "pattern {} of length {}", name, len);
    }
}

/// Sorts `(key, original index)` pairs on the key alone and checks that equal
/// keys keep their input order.
pub fn validate_stable_sort<F>(len: usize, sort_fn: F)
where
    F: Fn(&mut [(u8, usize)], fn(&(u8, usize), &(u8, usize)) -> bool),
{
    let mut rng = WyRand::new_seed(len as u64);
    let keys: Vec<u8> = (0..len).map(|_| rng.generate::<u8>()).collect();

    for modulus in [2u8, 16, 255] {
        let mut input: Vec<(u8, usize)> = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (k % modulus, i))
            .collect();

        sort_fn(&mut input, |a, b| a.0 < b.0);

        // (key, index) order is exactly what a stable sort on the key gives.
        assert!(
            input.windows(2).all(|w| w[0] < w[1]),
            "unstable result for length {} with {} keys",
            len,
            modulus
        );
    }
}
