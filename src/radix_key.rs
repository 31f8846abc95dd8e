/// A key with an ordered binary representation, consumed one byte at a time.
///
/// `get_level(0)` must return the most significant byte, `get_level(1)` the
/// next one and so on. Comparing two keys level by level must give the same
/// result as comparing the keys themselves. Once a key runs out of bytes it
/// returns `None`; a shorter key orders before any longer key sharing its
/// prefix. Fixed-width keys return `None` for every level past their width.
///
/// ```
/// use sortkit::RadixKey;
///
/// struct Version {
///     major: u8,
///     minor: u8,
/// }
///
/// impl RadixKey for Version {
///     #[inline]
///     fn get_level(&self, level: usize) -> Option<u8> {
///         match level {
///             0 => Some(self.major),
///             1 => Some(self.minor),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait RadixKey {
    fn get_level(&self, level: usize) -> Option<u8>;
}
