use bytes::BufMut;
use std::{fmt::Debug, ops::BitXor};

/// A fixed-width unsigned machine word the cipher operates on.
///
/// Every piece of RC5 arithmetic happens modulo `2^w`, where `w` is
/// [`Word::BITS`]. Implementations exist for `u16`, `u32` and `u64`, which
/// cover the word sizes of the published cipher.
pub trait Word: Copy + Eq + Default + Debug + BitXor<Output = Self> + Send + Sync + 'static {
    /// Word size `w` in bits.
    const BITS: u32;

    /// Word size `u = w / 8` in bytes.
    const BYTES: usize;

    /// The all-zero word.
    const ZERO: Self;

    /// Magic constant `P_w = Odd((e - 2) * 2^w)`.
    const P: Self;

    /// Magic constant `Q_w = Odd((phi - 1) * 2^w)`.
    const Q: Self;

    /// Addition modulo `2^w`.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Subtraction modulo `2^w`.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Rotates left by `amount mod w` bits.
    fn rotl(self, amount: Self) -> Self;

    /// Rotates right by `amount mod w` bits.
    fn rotr(self, amount: Self) -> Self;

    /// Loads up to [`Word::BYTES`] little-endian bytes, zero-padding the
    /// high end when fewer are given. Extra bytes are ignored.
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Appends the word to `buffer` in little-endian order.
    fn put_le(self, buffer: &mut impl BufMut);

    /// Widens the word to `u64` without loss.
    fn to_u64(self) -> u64;

    /// Narrows a `u64` into the word, or `None` if it does not fit in `w` bits.
    fn try_from_u64(value: u64) -> Option<Self>;
}

macro_rules! impl_word {
    ($ty:ty, $p:expr, $q:expr, $put:ident) => {
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const BYTES: usize = std::mem::size_of::<$ty>();
            const ZERO: Self = 0;
            const P: Self = $p;
            const Q: Self = $q;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$ty>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn rotl(self, amount: Self) -> Self {
                // Masking both shifts keeps them below `w`, so a zero amount
                // degenerates to `x | x`.
                let mask = Self::BITS - 1;
                let shift = (amount as u32) & mask;
                (self << shift) | (self >> ((Self::BITS - shift) & mask))
            }

            #[inline(always)]
            fn rotr(self, amount: Self) -> Self {
                let mask = Self::BITS - 1;
                let shift = (amount as u32) & mask;
                (self >> shift) | (self << ((Self::BITS - shift) & mask))
            }

            fn from_le_slice(bytes: &[u8]) -> Self {
                let mut buffer = [0u8; std::mem::size_of::<$ty>()];
                let length = bytes.len().min(Self::BYTES);
                buffer[..length].copy_from_slice(&bytes[..length]);
                <$ty>::from_le_bytes(buffer)
            }

            #[inline(always)]
            fn put_le(self, buffer: &mut impl BufMut) {
                buffer.$put(self);
            }

            #[inline(always)]
            fn to_u64(self) -> u64 {
                u64::from(self)
            }

            #[inline(always)]
            fn try_from_u64(value: u64) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }
        }
    };
}

impl_word!(u16, 0xB7E1, 0x9E37, put_u16_le);
impl_word!(u32, 0xB7E1_5163, 0x9E37_79B9, put_u32_le);
impl_word!(u64, 0xB7E1_5162_8AED_2A6B, 0x9E37_79B9_7F4A_7C15, put_u64_le);

/// A single cipher block: two words, `A` first.
pub type Block<W> = [W; 2];

/// Rotates the `w`-bit word `x` left by `y mod w` bits.
///
/// # Example
/// ```
/// assert_eq!(rc5_cipher::rotl(0x8000_0001u32, 1), 0x0000_0003);
/// assert_eq!(rc5_cipher::rotl(0x8000_0001u32, 33), 0x0000_0003);
/// ```
#[inline(always)]
pub fn rotl<W: Word>(x: W, y: W) -> W {
    x.rotl(y)
}

/// Rotates the `w`-bit word `x` right by `y mod w` bits.
#[inline(always)]
pub fn rotr<W: Word>(x: W, y: W) -> W {
    x.rotr(y)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rotation amounts that exercise zero, in-range, boundary and wrapped counts.
    fn amounts<W: Word>() -> Vec<u64> {
        let bits = W::BITS as u64;
        vec![0, 1, 3, bits - 1, bits, bits + 1, 2 * bits + 5, u64::MAX]
    }

    fn assert_rotations_invert<W: Word>(samples: &[W]) {
        for &x in samples {
            for amount in amounts::<W>() {
                // Narrow the amount to the word the way data-derived values arrive.
                let y = W::from_le_slice(&amount.to_le_bytes());

                assert_eq!(rotr(rotl(x, y), y), x, "rotr∘rotl for {x:?} by {amount}");
                assert_eq!(rotl(rotr(x, y), y), x, "rotl∘rotr for {x:?} by {amount}");
            }
        }
    }

    #[test]
    fn test_rotations_are_inverse_for_all_word_sizes() {
        assert_rotations_invert::<u16>(&[0, 1, 0x8001, 0xBEEF, u16::MAX]);
        assert_rotations_invert::<u32>(&[0, 1, 0x8000_0001, 0xDEAD_BEEF, u32::MAX]);
        assert_rotations_invert::<u64>(&[0, 1, 0x8000_0000_0000_0001, 0x0123_4567_89AB_CDEF, u64::MAX]);
    }

    #[test]
    fn test_rotation_by_zero_is_noop() {
        assert_eq!(rotl(0xBEEFu16, 0), 0xBEEF);
        assert_eq!(rotr(0xDEAD_BEEFu32, 0), 0xDEAD_BEEF);
        assert_eq!(rotl(0x0123_4567_89AB_CDEFu64, 0), 0x0123_4567_89AB_CDEF);
    }

    #[test]
    fn test_rotation_amount_wraps_at_word_size() {
        // Rotating by exactly `w` is a full turn.
        assert_eq!(rotl(0x1234u16, 16), 0x1234);
        assert_eq!(rotr(0x1234_5678u32, 32), 0x1234_5678);

        // Only the low `log2(w)` bits of the amount matter.
        assert_eq!(rotl(0x8000_0001u32, 0xFFFF_FFE1), 0x0000_0003);
        assert_eq!(rotr(0x0000_0003u32, 0xFFFF_FFE1), 0x8000_0001);
    }

    #[test]
    fn test_rotations_match_core_rotate() {
        let x = 0xA5C3_0F96_1E2D_3C4Bu64;

        for amount in 0..200u64 {
            let expected_left = x.rotate_left((amount % 64) as u32);
            let expected_right = x.rotate_right((amount % 64) as u32);

            assert_eq!(rotl(x, amount), expected_left);
            assert_eq!(rotr(x, amount), expected_right);
        }
    }

    #[test]
    fn test_from_le_slice_zero_pads_short_input() {
        assert_eq!(u32::from_le_slice(&[0x01, 0x02, 0x03, 0x04]), 0x0403_0201);
        assert_eq!(u32::from_le_slice(&[0x0C, 0x0D, 0x0E]), 0x000E_0D0C);
        assert_eq!(u16::from_le_slice(&[]), 0);
        assert_eq!(u64::from_le_slice(&[0xFF]), 0xFF);
    }

    #[test]
    fn test_put_le_writes_little_endian() {
        let mut buffer = Vec::new();
        0x0403_0201u32.put_le(&mut buffer);
        0x0605u16.put_le(&mut buffer);

        assert_eq!(buffer, vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
    }

    #[test]
    fn test_try_from_u64_rejects_wide_values() {
        assert_eq!(u16::try_from_u64(0xFFFF), Some(0xFFFF));
        assert_eq!(u16::try_from_u64(0x1_0000), None);
        assert_eq!(u32::try_from_u64(0x1_0000_0000), None);
        assert_eq!(u64::try_from_u64(u64::MAX), Some(u64::MAX));
    }

    #[test]
    fn test_magic_constants_are_odd() {
        assert_eq!(u16::P & 1, 1);
        assert_eq!(u16::Q & 1, 1);
        assert_eq!(u32::P & 1, 1);
        assert_eq!(u32::Q & 1, 1);
        assert_eq!(u64::P & 1, 1);
        assert_eq!(u64::Q & 1, 1);
    }

    #[test]
    fn test_magic_constants_for_32_bit_words() {
        assert_eq!(u32::P, 0xB7E15163);
        assert_eq!(u32::Q, 0x9E3779B9);
    }
}
