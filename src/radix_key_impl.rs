use crate::RadixKey;

macro_rules! radix_key_unsigned {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline]
                fn get_level(&self, level: usize) -> Option<u8> {
                    const LEVELS: usize = <$t>::BITS as usize / 8;

                    if level < LEVELS {
                        Some((self >> ((LEVELS - 1 - level) * 8)) as u8)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

macro_rules! radix_key_signed {
    ($($t:ty => $u:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline]
                fn get_level(&self, level: usize) -> Option<u8> {
                    // Flipping the sign bit maps MIN..=MAX onto 0..=unsigned MAX.
                    ((*self as $u) ^ (1 << (<$u>::BITS - 1))).get_level(level)
                }
            }
        )*
    };
}

radix_key_unsigned!(u8, u16, u32, u64, u128, usize);
radix_key_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

impl RadixKey for f32 {
    #[inline]
    fn get_level(&self, level: usize) -> Option<u8> {
        let bits = self.to_bits();
        let ordered = if bits >> 31 == 1 { !bits } else { bits ^ (1 << 31) };

        ordered.get_level(level)
    }
}

impl RadixKey for f64 {
    #[inline]
    fn get_level(&self, level: usize) -> Option<u8> {
        let bits = self.to_bits();
        let ordered = if bits >> 63 == 1 { !bits } else { bits ^ (1 << 63) };

        ordered.get_level(level)
    }
}

impl RadixKey for bool {
    #[inline]
    fn get_level(&self, level: usize) -> Option<u8> {
        (*self as u8).get_level(level)
    }
}

impl RadixKey for char {
    #[inline]
    fn get_level(&self, level: usize) -> Option<u8> {
        (*self as u32).get_level(level)
    }
}

impl<const N: usize> RadixKey for [u8; N] {
    #[inline]
    fn get_level(&self, level: usize) -> Option<u8> {
        self.get(level).copied()
    }
}

impl RadixKey for [u8] {
    #[inline]
    fn get_level(&self, level: usize) -> Option<u8> {
        self.get(level).copied()
    }
}

impl RadixKey for Vec<u8> {
    #[inline]
    fn get_level(&self, level: usize) -> Option<u8> {
        self.get(level).copied()
    }
}

// Sequences of wider units emit each unit most significant byte first, so
// they sort like the sequences themselves and shorter ones go first.
macro_rules! radix_key_wide_units {
    ($($t:ty => $unit:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline]
                fn get_level(&self, level: usize) -> Option<u8> {
                    const WIDTH: usize = std::mem::size_of::<$unit>();

                    let unit = self.get(level / WIDTH)?;
                    <$unit as RadixKey>::get_level(unit, level % WIDTH)
                }
            }
        )*
    };
}

radix_key_wide_units!([u16] => u16, Vec<u16> => u16, [u32] => u32, Vec<u32> => u32, [char] => char, Vec<char> => char);

// UTF-8 byte order matches code point order, so strings sort by their bytes.
impl RadixKey for str {
    #[inline]
    fn get_level(&self, level: usize) -> Option<u8> {
        self.as_bytes().get(level).copied()
    }
}

impl RadixKey for String {
    #[inline]
    fn get_level(&self, level: usize) -> Option<u8> {
        self.as_bytes().get(level).copied()
    }
}

impl<K> RadixKey for &K
where
    K: RadixKey + ?Sized,
{
    #[inline]
    fn get_level(&self, level: usize) -> Option<u8> {
        (**self).get_level(level)
    }
}
