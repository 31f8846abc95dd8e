use crate::capabilities::Order;
use crate::RadixKey;
use std::cmp::Ordering;

/// One bucket per byte value plus one for keys that ran out of bytes.
pub const RADIX_BUCKETS: usize = 257;

pub type Counts = [usize; RADIX_BUCKETS];

/// Reads the radix levels of an element, either directly or through a key
/// function.
pub trait LevelReader<T> {
    fn level(&self, item: &T, level: usize) -> Option<u8>;
}

pub struct Identity;

impl<T> LevelReader<T> for Identity
where
    T: RadixKey,
{
    #[inline(always)]
    fn level(&self, item: &T, level: usize) -> Option<u8> {
        item.get_level(level)
    }
}

/// Levels of `key(item)`. The key is recomputed on every read.
pub struct ByKey<F>(pub F);

impl<T, K, F> LevelReader<T> for ByKey<F>
where
    K: RadixKey,
    F: Fn(&T) -> K,
{
    #[inline(always)]
    fn level(&self, item: &T, level: usize) -> Option<u8> {
        (self.0)(item).get_level(level)
    }
}

/// Maps a level value to its bucket. Exhausted keys come first when ascending
/// and last when descending.
#[inline(always)]
pub fn bucket_index(byte: Option<u8>, order: Order) -> usize {
    match (order, byte) {
        (Order::Ascending, None) => 0,
        (Order::Ascending, Some(b)) => b as usize + 1,
        (Order::Descending, Some(b)) => 255 - b as usize,
        (Order::Descending, None) => RADIX_BUCKETS - 1,
    }
}

#[inline]
pub fn exhausted_bucket(order: Order) -> usize {
    bucket_index(None, order)
}

#[inline]
pub fn get_prefix_sums(counts: &Counts) -> Counts {
    let mut sums = [0usize; RADIX_BUCKETS];

    let mut running_total = 0;
    for (i, c) in counts.iter().enumerate() {
        sums[i] = running_total;
        running_total += c;
    }

    sums
}

#[inline]
pub fn get_end_offsets(counts: &Counts, prefix_sums: &Counts) -> Counts {
    let mut end_offsets = [0usize; RADIX_BUCKETS];

    end_offsets[..RADIX_BUCKETS - 1].copy_from_slice(&prefix_sums[1..]);
    end_offsets[RADIX_BUCKETS - 1] = counts[RADIX_BUCKETS - 1] + prefix_sums[RADIX_BUCKETS - 1];

    end_offsets
}

/// Counts bucket sizes at `level`, also reporting whether the elements are
/// already grouped in bucket order.
#[inline]
pub fn get_counts<T, R>(bucket: &[T], reader: &R, level: usize, order: Order) -> (Counts, bool)
where
    R: LevelReader<T>,
{
    let mut already_sorted = true;
    let mut continue_from = bucket.len();
    let mut counts_1 = [0usize; RADIX_BUCKETS];
    let mut last = 0usize;

    for (i, item) in bucket.iter().enumerate() {
        let b = bucket_index(reader.level(item, level), order);
        counts_1[b] += 1;

        if b < last {
            continue_from = i + 1;
            already_sorted = false;
            break;
        }

        last = b;
    }

    if continue_from == bucket.len() {
        return (counts_1, already_sorted);
    }

    let mut counts_2 = [0usize; RADIX_BUCKETS];
    let mut counts_3 = [0usize; RADIX_BUCKETS];
    let mut counts_4 = [0usize; RADIX_BUCKETS];
    let chunks = bucket[continue_from..].chunks_exact(4);
    let rem = chunks.remainder();

    chunks.into_iter().for_each(|chunk| {
        counts_1[bucket_index(reader.level(&chunk[0], level), order)] += 1;
        counts_2[bucket_index(reader.level(&chunk[1], level), order)] += 1;
        counts_3[bucket_index(reader.level(&chunk[2], level), order)] += 1;
        counts_4[bucket_index(reader.level(&chunk[3], level), order)] += 1;
    });

    rem.iter().for_each(|item| {
        counts_1[bucket_index(reader.level(item, level), order)] += 1;
    });

    for i in 0..RADIX_BUCKETS {
        counts_1[i] += counts_2[i] + counts_3[i] + counts_4[i];
    }

    (counts_1, already_sorted)
}

/// The only non-empty bucket, if all elements share one.
#[inline]
pub fn homogenous_bucket(counts: &Counts) -> Option<usize> {
    let mut seen = None;
    for (i, c) in counts.iter().enumerate() {
        if *c > 0 {
            if seen.is_some() {
                return None;
            }

            seen = Some(i);
        }
    }

    seen
}

/// Compares two elements level by level, starting at `level`.
#[inline]
pub fn compare_levels<T, R>(reader: &R, a: &T, b: &T, mut level: usize) -> Ordering
where
    R: LevelReader<T>,
{
    loop {
        match (reader.level(a, level), reader.level(b, level)) {
            (None, None) => return Ordering::Equal,
            (x, y) if x != y => return x.cmp(&y),
            _ => level += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_get_counts_correctly_marks_already_sorted() {
        let data: Vec<u8> = vec![0, 5, 2, 3, 1];
        let (counts, already_sorted) = get_counts(&data, &Identity, 0, Order::Ascending);
        assert!(!already_sorted);
        assert_eq!(counts.iter().sum::<usize>(), 5);
        assert_eq!(counts[6], 1);

        let data: Vec<u8> = vec![0, 0, 1, 1, 2];
        let (_, already_sorted) = get_counts(&data, &Identity, 0, Order::Ascending);
        assert!(already_sorted);

        let (_, already_sorted) = get_counts(&data, &Identity, 0, Order::Descending);
        assert!(!already_sorted);
    }

    #[test]
    pub fn test_get_counts_unrolled_tail() {
        let data: Vec<u16> = (0..1_003).rev().collect();
        let (counts, already_sorted) = get_counts(&data, &Identity, 0, Order::Ascending);

        assert!(!already_sorted);
        assert_eq!(counts.iter().sum::<usize>(), 1_003);
        assert_eq!(counts[1], 256);
        assert_eq!(counts[4], 1_003 - 3 * 256);
    }

    #[test]
    pub fn test_bucket_index() {
        assert_eq!(bucket_index(None, Order::Ascending), 0);
        assert_eq!(bucket_index(Some(0), Order::Ascending), 1);
        assert_eq!(bucket_index(Some(255), Order::Ascending), 256);
        assert_eq!(bucket_index(Some(255), Order::Descending), 0);
        assert_eq!(bucket_index(Some(0), Order::Descending), 255);
        assert_eq!(exhausted_bucket(Order::Descending), 256);
    }

    #[test]
    pub fn test_prefix_sums_and_end_offsets() {
        let mut counts = [0usize; RADIX_BUCKETS];
        counts[0] = 2;
        counts[3] = 5;
        counts[256] = 1;

        let sums = get_prefix_sums(&counts);
        let ends = get_end_offsets(&counts, &sums);

        assert_eq!((sums[0], ends[0]), (0, 2));
        assert_eq!((sums[3], ends[3]), (2, 7));
        assert_eq!((sums[256], ends[256]), (7, 8));
    }

    #[test]
    pub fn test_homogenous_bucket() {
        let mut counts = [0usize; RADIX_BUCKETS];
        assert_eq!(homogenous_bucket(&counts), None);

        counts[9] = 4;
        assert_eq!(homogenous_bucket(&counts), Some(9));

        counts[10] = 1;
        assert_eq!(homogenous_bucket(&counts), None);
    }

    #[test]
    pub fn test_compare_levels() {
        assert_eq!(compare_levels(&Identity, &"abc", &"abd", 0), Ordering::Less);
        assert_eq!(compare_levels(&Identity, &"ab", &"abc", 0), Ordering::Less);
        assert_eq!(compare_levels(&Identity, &"xbc", &"abc", 1), Ordering::Equal);
        assert_eq!(compare_levels(&ByKey(|x: &i32| *x), &-1, &1, 0), Ordering::Less);
    }
}
