use std::fmt;

use crate::{InvalidParameter, Word};

/// Word sizes supported by the rotation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordSize {
    /// 16-bit words, 32-bit blocks.
    W16,
    /// 32-bit words, 64-bit blocks.
    W32,
    /// 64-bit words, 128-bit blocks.
    W64,
}

impl WordSize {
    /// Resolves a word size given in bits.
    ///
    /// # Errors
    /// - [`InvalidParameter::UnsupportedWordSize`]: if `bits` is not 16, 32 or 64.
    pub const fn from_bits(bits: u32) -> Result<Self, InvalidParameter> {
        match bits {
            16 => Ok(Self::W16),
            32 => Ok(Self::W32),
            64 => Ok(Self::W64),
            other => Err(InvalidParameter::UnsupportedWordSize(other)),
        }
    }

    /// Word size `w` in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::W16 => u16::BITS,
            Self::W32 => u32::BITS,
            Self::W64 => u64::BITS,
        }
    }

    /// Word size `u` in bytes.
    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// The magic constants `(P_w, Q_w)`, widened to `u64`.
    pub fn magic_constants(self) -> (u64, u64) {
        match self {
            Self::W16 => (u16::P.to_u64(), u16::Q.to_u64()),
            Self::W32 => (u32::P.to_u64(), u32::Q.to_u64()),
            Self::W64 => (u64::P.to_u64(), u64::Q.to_u64()),
        }
    }
}

/// Resolved `w/r/b` parameters together with the derived sizes `c` and `t`.
///
/// Every derived quantity is recomputed from the inputs; nothing falls back
/// to the RC5-32/12/16 defaults unless those are what was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameters {
    word_size: WordSize,
    rounds: u32,
    key_length: usize,
    key_words: usize,
    table_len: usize,
}

impl Parameters {
    /// Resolves `(w, r, b)` into a full parameter set.
    ///
    /// # Parameters
    /// - `word_size_bits`: word size `w`, one of 16, 32 or 64.
    /// - `rounds`: round count `r`, any non-negative value.
    /// - `key_length`: key length `b` in bytes, any non-negative value.
    ///
    /// # Errors
    /// - [`InvalidParameter::UnsupportedWordSize`]: if `w` is not 16, 32 or 64.
    /// - [`InvalidParameter::TableTooLarge`]: if `2(r + 1)` overflows `usize`.
    pub fn new(
        word_size_bits: u32,
        rounds: u32,
        key_length: usize,
    ) -> Result<Self, InvalidParameter> {
        let word_size = WordSize::from_bits(word_size_bits)?;

        // c = max(1, ceil(8b / w)); an empty key still occupies one zero word.
        let key_words = key_length.div_ceil(word_size.bytes()).max(1);

        // t = 2(r + 1), which only overflows on targets narrower than 64 bits.
        let table_len = usize::try_from(rounds)
            .ok()
            .and_then(|rounds| rounds.checked_add(1))
            .and_then(|rounds| rounds.checked_mul(2))
            .ok_or(InvalidParameter::TableTooLarge(rounds))?;

        Ok(Self {
            word_size,
            rounds,
            key_length,
            key_words,
            table_len,
        })
    }

    /// Word size `w`.
    pub const fn word_size(&self) -> WordSize {
        self.word_size
    }

    /// Round count `r`.
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Key length `b` in bytes.
    pub const fn key_length(&self) -> usize {
        self.key_length
    }

    /// Key length `c` in words.
    pub const fn key_words(&self) -> usize {
        self.key_words
    }

    /// Expanded table length `t`.
    pub const fn table_len(&self) -> usize {
        self.table_len
    }

    /// Bytes per block, two words.
    pub const fn block_len(&self) -> usize {
        2 * self.word_size.bytes()
    }
}

impl Default for Parameters {
    /// RC5-32/12/16, the nominal configuration.
    fn default() -> Self {
        Self {
            word_size: WordSize::W32,
            rounds: 12,
            key_length: 16,
            key_words: 4,
            table_len: 26,
        }
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RC5-{}/{}/{}",
            self.word_size.bits(),
            self.rounds,
            self.key_length
        )
    }
}
