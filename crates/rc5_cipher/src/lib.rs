//! RC5 block cipher core: parameter resolution, key schedule and the
//! encrypt/decrypt round transforms.
//!
//! RC5 is parameterised by a word size `w` (16, 32 or 64 bits), a round count
//! `r` and a key length `b` in bytes, conventionally written `RC5-w/r/b`. It is
//! built from modular addition, exclusive-or and rotations whose amounts come
//! from the data being processed.
//!
//! Two context types are provided:
//! - [`Rc5`], with the word type fixed at compile time;
//! - [`CipherContext`], which selects the word size at runtime.
//!
//! Both operate on exactly one two-word block per call. Chaining blocks,
//! padding and key management are left to the caller.

mod context;
mod decrypt;
mod encrypt;
mod error;
mod expand_key;
mod parameters;
mod rc5;
mod word;

pub use context::CipherContext;
pub use decrypt::decrypt;
pub use encrypt::encrypt;
pub use error::{InvalidParameter, Rc5Error};
pub use expand_key::{KeyTable, expand_key};
pub use parameters::{Parameters, WordSize};
pub use rc5::Rc5;
pub use word::{Block, Word, rotl, rotr};

#[cfg(test)]
mod tests {
    use super::*;

    /// Number of bit positions in which two blocks differ.
    fn bit_distance(lhs: Block<u32>, rhs: Block<u32>) -> u32 {
        (lhs[0] ^ rhs[0]).count_ones() + (lhs[1] ^ rhs[1]).count_ones()
    }

    #[test]
    fn test_plaintext_bit_flip_avalanches() {
        let cipher = Rc5::<u32>::with_key(12, b"avalanche check!").unwrap();
        let plaintext = [0x0123_4567, 0x89AB_CDEF];
        let base = cipher.encrypt(plaintext).unwrap();

        let total: u32 = (0..64)
            .map(|bit| {
                let mut flipped = plaintext;
                flipped[bit / 32] ^= 1 << (bit % 32);
                bit_distance(base, cipher.encrypt(flipped).unwrap())
            })
            .sum();

        // About half of the 64 output bits should change on average.
        let average = total as f64 / 64.0;
        assert!((24.0..=40.0).contains(&average), "average {average}");
    }

    #[test]
    fn test_key_bit_flip_avalanches() {
        let key = *b"avalanche check!";
        let plaintext = [0x0123_4567, 0x89AB_CDEF];
        let base = Rc5::<u32>::with_key(12, &key)
            .unwrap()
            .encrypt(plaintext)
            .unwrap();

        let total: u32 = (0..128)
            .map(|bit| {
                let mut flipped = key;
                flipped[bit / 8] ^= 1 << (bit % 8);
                let cipher = Rc5::<u32>::with_key(12, &flipped).unwrap();
                bit_distance(base, cipher.encrypt(plaintext).unwrap())
            })
            .sum();

        let average = total as f64 / 128.0;
        assert!((24.0..=40.0).contains(&average), "average {average}");
    }
}
