#![allow(dead_code)]

use block_pseudorand::block_rand;
use criterion::{AxisScale, BatchSize, BenchmarkId, Criterion, PlotConfiguration, Throughput};
use nanorand::{Rng, WyRand};
use rayon::prelude::*;
use std::time::Duration;

pub fn gen_inputs(n: usize, shift: u32) -> Vec<u32> {
    let mut inputs: Vec<u32> = block_rand(n);

    inputs[0..(n / 2)].par_iter_mut().for_each(|v| *v >>= shift);
    inputs[(n / 2)..n].par_iter_mut().for_each(|v| *v <<= shift);

    inputs
}

pub fn gen_bench_input_set(shift: u32) -> Vec<Vec<u32>> {
    let n = 10_000_000;
    let half = n / 2;
    let inputs = gen_inputs(n, shift);

    // Middle values are used for the case where shift is provided
    let mut out = vec![
        inputs[(half - 50)..(half + 50)].to_vec(),
        inputs[(half - 2_500)..(half + 2_500)].to_vec(),
        inputs[(half - 25_000)..(half + 25_000)].to_vec(),
        inputs[(half - 250_000)..(half + 250_000)].to_vec(),
        inputs,
    ];

    out.reverse();

    out
}

pub type Distribution = fn(usize, &mut WyRand) -> Vec<i32>;

fn shuffled_int(size: usize, rng: &mut WyRand) -> Vec<i32> {
    let mut v: Vec<i32> = (0..size as i32).collect();
    rng.shuffle(&mut v);
    v
}

fn shuffled_16_values_int(size: usize, rng: &mut WyRand) -> Vec<i32> {
    let mut v: Vec<i32> = (0..size as i32).map(|i| i % 16).collect();
    rng.shuffle(&mut v);
    v
}

fn all_equal_int(size: usize, _rng: &mut WyRand) -> Vec<i32> {
    vec![0; size]
}

fn ascending_int(size: usize, _rng: &mut WyRand) -> Vec<i32> {
    (0..size as i32).collect()
}

fn descending_int(size: usize, _rng: &mut WyRand) -> Vec<i32> {
    (0..size as i32).rev().collect()
}

fn pipe_organ_int(size: usize, _rng: &mut WyRand) -> Vec<i32> {
    let n = size as i32;
    (0..n / 2).chain((n / 2..n).map(|i| n - i)).collect()
}

fn push_front_int(size: usize, _rng: &mut WyRand) -> Vec<i32> {
    let n = size as i32;
    (1..n).chain((n > 0).then_some(0)).collect()
}

fn push_middle_int(size: usize, _rng: &mut WyRand) -> Vec<i32> {
    let n = size as i32;
    (0..n)
        .filter(|&i| i != n / 2)
        .chain((n > 0).then_some(n / 2))
        .collect()
}

fn sawtooth_limit(size: usize) -> i32 {
    if size < 2 {
        return 1;
    }

    ((size as f64 / (size as f64).log2() * 1.1) as i32).max(1)
}

fn ascending_sawtooth_int(size: usize, _rng: &mut WyRand) -> Vec<i32> {
    let limit = sawtooth_limit(size);
    (0..size as i32).map(|i| i % limit).collect()
}

fn descending_sawtooth_int(size: usize, _rng: &mut WyRand) -> Vec<i32> {
    let limit = sawtooth_limit(size);
    (0..size as i32).rev().map(|i| i % limit).collect()
}

fn alternating_int(size: usize, _rng: &mut WyRand) -> Vec<i32> {
    (0..size as i32)
        .map(|i| if i % 2 == 0 { -i } else { i })
        .collect()
}

fn alternating_16_values_int(size: usize, _rng: &mut WyRand) -> Vec<i32> {
    (0..size as i32)
        .map(|i| if i % 2 == 0 { -(i % 16) } else { i % 16 })
        .collect()
}

pub const DISTRIBUTIONS: [(&str, Distribution); 12] = [
    ("shuffled_int", shuffled_int),
    ("shuffled_16_values_int", shuffled_16_values_int),
    ("all_equal_int", all_equal_int),
    ("ascending_int", ascending_int),
    ("descending_int", descending_int),
    ("pipe_organ_int", pipe_organ_int),
    ("push_front_int", push_front_int),
    ("push_middle_int", push_middle_int),
    ("ascending_sawtooth_int", ascending_sawtooth_int),
    ("descending_sawtooth_int", descending_sawtooth_int),
    ("alternating_int", alternating_int),
    ("alternating_16_values_int", alternating_16_values_int),
];

pub fn bench_common<T>(
    c: &mut Criterion,
    input_sets: &[Vec<T>],
    group: &str,
    tests: Vec<(&str, Box<dyn Fn(Vec<T>)>)>,
) where
    T: Clone,
{
    let mut group = c.benchmark_group(group);
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(5));
    group.warm_up_time(Duration::from_secs(1));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for set in input_sets.iter() {
        let l = set.len();
        group.throughput(Throughput::Elements(l as u64));

        for t in tests.iter() {
            group.bench_with_input(BenchmarkId::new(t.0, l), set, |bench, set| {
                bench.iter_batched(|| set.clone(), &*t.1, BatchSize::SmallInput);
            });
        }
    }

    group.finish();
}

pub fn bench_small<T>(
    c: &mut Criterion,
    group: &str,
    inputs: Vec<Vec<T>>,
    tests: Vec<(&str, Box<dyn Fn(&mut [T])>)>,
) where
    T: Clone,
{
    let total: u64 = inputs.iter().map(|s| s.len() as u64).sum();

    let mut group = c.benchmark_group(group);
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(3));
    group.warm_up_time(Duration::from_secs(1));
    group.throughput(Throughput::Elements(total));

    for t in tests.iter() {
        group.bench_with_input(BenchmarkId::new(t.0, total), &0u32, |bench, _| {
            bench.iter_batched(
                || inputs.clone(),
                |mut sets| {
                    for set in sets.iter_mut() {
                        (t.1)(set);
                    }
                    sets
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}
