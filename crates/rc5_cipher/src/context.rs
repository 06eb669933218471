use bytes::Bytes;
use log::warn;

use crate::{Block, InvalidParameter, Parameters, Rc5, Rc5Error, Word, WordSize};

/// An RC5 context whose word size is chosen at runtime.
///
/// This is the surface a front end drives: it supplies `(w, r, b)`, raw key
/// bytes and two-word blocks, and receives two-word results. Words travel as
/// `u64` and are checked against the context's word size on the way in.
///
/// # Example
/// ```
/// use rc5_cipher::CipherContext;
///
/// let mut context = CipherContext::create(16, 16, 8).unwrap();
/// context.expand(&[0, 1, 2, 3, 4, 5, 6, 7]).unwrap();
///
/// let ciphertext = context.encrypt([0x0100, 0x0302]).unwrap();
/// assert_eq!(ciphertext, [0xA823, 0x2ED7]);
/// ```
#[derive(Debug, Clone)]
pub enum CipherContext {
    /// RC5 over 16-bit words.
    W16(Rc5<u16>),
    /// RC5 over 32-bit words.
    W32(Rc5<u32>),
    /// RC5 over 64-bit words.
    W64(Rc5<u64>),
}

/// Runs `$body` against whichever typed context `$context` wraps.
macro_rules! dispatch {
    ($context:expr, $cipher:ident => $body:expr) => {
        match $context {
            CipherContext::W16($cipher) => $body,
            CipherContext::W32($cipher) => $body,
            CipherContext::W64($cipher) => $body,
        }
    };
}

impl CipherContext {
    /// Resolves `(w, r, b)` and creates an unexpanded context.
    ///
    /// Any `r` and `b` are accepted; the context's tables are sized from them.
    ///
    /// # Errors
    /// - [`Rc5Error::InvalidParameter`]: if `w` is not 16, 32 or 64, or the
    ///   table for `r` cannot be addressed on this target.
    pub fn create(
        word_size_bits: u32,
        rounds: u32,
        key_length: usize,
    ) -> Result<Self, Rc5Error> {
        let parameters = Parameters::new(word_size_bits, rounds, key_length).inspect_err(|err| {
            warn!(
                "Rejected RC5 parameters w = {}, r = {}, b = {}: {}",
                word_size_bits, rounds, key_length, err
            )
        })?;

        Ok(Self::from_parameters(parameters))
    }

    /// Creates an unexpanded context from already resolved parameters.
    ///
    /// The variant follows `parameters.word_size()`, so the word type always
    /// matches and this cannot fail.
    pub fn from_parameters(parameters: Parameters) -> Self {
        match parameters.word_size() {
            WordSize::W16 => Self::W16(Rc5::unexpanded(parameters)),
            WordSize::W32 => Self::W32(Rc5::unexpanded(parameters)),
            WordSize::W64 => Self::W64(Rc5::unexpanded(parameters)),
        }
    }

    /// Expands `key` into a fresh key table, replacing any previous one.
    ///
    /// # Errors
    /// - [`Rc5Error::InvalidParameter`]: if `key` is not `b` bytes long; the
    ///   previous table, if any, stays in use.
    pub fn expand(&mut self, key: &[u8]) -> Result<(), Rc5Error> {
        dispatch!(self, cipher => cipher.expand(key))
    }

    /// Encrypts one two-word block.
    ///
    /// # Errors
    /// - [`Rc5Error::InvalidParameter`]: if a word does not fit in `w` bits.
    /// - [`Rc5Error::NotInitialized`]: if no key has been expanded.
    pub fn encrypt(&self, plaintext: [u64; 2]) -> Result<[u64; 2], Rc5Error> {
        dispatch!(self, cipher => cipher.encrypt(narrow(plaintext)?).map(widen))
    }

    /// Decrypts one two-word block.
    ///
    /// # Errors
    /// - [`Rc5Error::InvalidParameter`]: if a word does not fit in `w` bits.
    /// - [`Rc5Error::NotInitialized`]: if no key has been expanded.
    pub fn decrypt(&self, ciphertext: [u64; 2]) -> Result<[u64; 2], Rc5Error> {
        dispatch!(self, cipher => cipher.decrypt(narrow(ciphertext)?).map(widen))
    }

    /// Encrypts one block of `2u` little-endian bytes.
    ///
    /// # Errors
    /// See [`Rc5::encrypt_bytes`].
    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> Result<Bytes, Rc5Error> {
        dispatch!(self, cipher => cipher.encrypt_bytes(plaintext))
    }

    /// Decrypts one block of `2u` little-endian bytes.
    ///
    /// # Errors
    /// See [`Rc5::decrypt_bytes`].
    pub fn decrypt_bytes(&self, ciphertext: &[u8]) -> Result<Bytes, Rc5Error> {
        dispatch!(self, cipher => cipher.decrypt_bytes(ciphertext))
    }

    /// The resolved parameters of this context.
    pub fn parameters(&self) -> &Parameters {
        dispatch!(self, cipher => cipher.parameters())
    }

    /// Word size `w` in bits.
    pub fn word_size(&self) -> u32 {
        self.parameters().word_size().bits()
    }

    /// Key length `b` in bytes.
    pub fn key_length(&self) -> usize {
        self.parameters().key_length()
    }

    /// Whether a key has been expanded.
    pub fn is_expanded(&self) -> bool {
        dispatch!(self, cipher => cipher.is_expanded())
    }
}

impl Default for CipherContext {
    /// An unexpanded RC5-32/12/16 context.
    fn default() -> Self {
        Self::W32(Rc5::default())
    }
}

fn narrow<W: Word>(block: [u64; 2]) -> Result<Block<W>, InvalidParameter> {
    let narrow_word = |value: u64| {
        W::try_from_u64(value).ok_or(InvalidParameter::WordOutOfRange {
            value,
            bits: W::BITS,
        })
    };

    Ok([narrow_word(block[0])?, narrow_word(block[1])?])
}

fn widen<W: Word>(block: Block<W>) -> [u64; 2] {
    [block[0].to_u64(), block[1].to_u64()]
}
