//! Static facts about sorters and about the ordering a caller asks for.
//!
//! [`Capabilities`] describes an algorithm: whether it is stable, which input
//! lengths it handles and whether it honours caller-supplied comparisons.
//! [`OrderingFacts`] describes a single call: the comparison requested, whether
//! a projection is in play and whether the key has a radix decomposition.
//! Both are only read at dispatch time.

/// Access pattern an algorithm needs from the sequence it sorts.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub enum IteratorCategory {
    Forward,
    Bidirectional,
    RandomAccess,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Capabilities {
    /// Equal elements keep their relative input order for every input.
    pub is_always_stable: bool,
    pub minimum_size: usize,
    /// `None` when the algorithm has no upper bound on input length.
    pub maximum_size: Option<usize>,
    /// The algorithm is specialised for one exact input length.
    pub fixed_size: bool,
    pub accepts_comparator: bool,
    pub accepts_projection: bool,
    pub iterator_category: IteratorCategory,
}

impl Capabilities {
    /// Unbounded, comparison-based, unstable, random access.
    pub const fn general() -> Self {
        Self {
            is_always_stable: false,
            minimum_size: 0,
            maximum_size: None,
            fixed_size: false,
            accepts_comparator: true,
            accepts_projection: true,
            iterator_category: IteratorCategory::RandomAccess,
        }
    }

    pub const fn stable(mut self) -> Self {
        self.is_always_stable = true;
        self
    }

    pub const fn bounded(mut self, minimum_size: usize, maximum_size: usize) -> Self {
        self.minimum_size = minimum_size;
        self.maximum_size = Some(maximum_size);
        self
    }

    #[inline]
    pub fn accepts_len(&self, len: usize) -> bool {
        len >= self.minimum_size && self.maximum_size.map_or(true, |max| len <= max)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

/// The comparison relation of one sort call.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Comparison {
    /// The key's own `Ord`, possibly reversed.
    Natural(Order),
    /// Any caller-supplied strict weak ordering.
    Custom,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct OrderingFacts {
    pub comparison: Comparison,
    pub projection_is_identity: bool,
    /// The sorted key implements [`RadixKey`](crate::RadixKey).
    pub has_radix_key: bool,
}

impl OrderingFacts {
    pub fn natural(order: Order) -> Self {
        Self {
            comparison: Comparison::Natural(order),
            projection_is_identity: true,
            has_radix_key: false,
        }
    }

    pub fn custom() -> Self {
        Self {
            comparison: Comparison::Custom,
            projection_is_identity: true,
            has_radix_key: false,
        }
    }

    pub fn with_projection(mut self) -> Self {
        self.projection_is_identity = false;
        self
    }

    pub fn with_radix_key(mut self) -> Self {
        self.has_radix_key = true;
        self
    }

    /// Distribution sort handles natural or reverse-natural order over a
    /// radix key, never an arbitrary comparator.
    #[inline]
    pub fn supports_distribution(&self) -> bool {
        self.has_radix_key && matches!(self.comparison, Comparison::Natural(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_accepts_len() {
        let caps = Capabilities::general();
        assert!(caps.accepts_len(0));
        assert!(caps.accepts_len(usize::MAX));

        let caps = Capabilities::general().bounded(4, 4);
        assert!(!caps.accepts_len(3));
        assert!(caps.accepts_len(4));
        assert!(!caps.accepts_len(5));
    }

    #[test]
    pub fn test_supports_distribution() {
        assert!(!OrderingFacts::natural(Order::Ascending).supports_distribution());
        assert!(OrderingFacts::natural(Order::Descending)
            .with_radix_key()
            .supports_distribution());
        assert!(OrderingFacts::natural(Order::Ascending)
            .with_projection()
            .with_radix_key()
            .supports_distribution());
        assert!(!OrderingFacts::custom().with_radix_key().supports_distribution());
    }
}
