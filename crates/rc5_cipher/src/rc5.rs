use bytes::{Bytes, BytesMut};
use log::debug;

use crate::{
    Block, InvalidParameter, KeyTable, Parameters, Rc5Error, Word, decrypt, encrypt, expand_key,
};

/// An RC5 context for a word type fixed at compile time.
///
/// The context starts without a key table; [`Rc5::expand`] builds one, and
/// every call to it replaces the previous table in full. Encrypting or
/// decrypting before the first expansion fails with
/// [`Rc5Error::NotInitialized`].
///
/// # Example
/// ```
/// use rc5_cipher::Rc5;
///
/// let mut cipher = Rc5::<u32>::new(12, 16).unwrap();
/// cipher.expand(&[0u8; 16]).unwrap();
///
/// let ciphertext = cipher.encrypt([0, 0]).unwrap();
/// assert_eq!(ciphertext, [0xEEDBA521, 0x6D8F4B15]);
/// assert_eq!(cipher.decrypt(ciphertext).unwrap(), [0, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Rc5<W: Word> {
    parameters: Parameters,
    table: Option<KeyTable<W>>,
}

impl<W: Word> Rc5<W> {
    /// Creates a context for `r` rounds and a `b`-byte key with `w = W::BITS`.
    ///
    /// # Errors
    /// - [`Rc5Error::InvalidParameter`]: if the table for `rounds` cannot be
    ///   addressed on this target.
    pub fn new(rounds: u32, key_length: usize) -> Result<Self, Rc5Error> {
        Self::from_parameters(Parameters::new(W::BITS, rounds, key_length)?)
    }

    /// Creates a context from already resolved parameters.
    ///
    /// # Errors
    /// - [`Rc5Error::InvalidParameter`]: if `parameters` describe a word size
    ///   other than `W`.
    pub fn from_parameters(parameters: Parameters) -> Result<Self, Rc5Error> {
        let bits = parameters.word_size().bits();
        if bits != W::BITS {
            return Err(InvalidParameter::UnsupportedWordSize(bits).into());
        }

        Ok(Self::unexpanded(parameters))
    }

    /// Creates an unexpanded context; `parameters` must describe `W`.
    pub(crate) fn unexpanded(parameters: Parameters) -> Self {
        debug_assert_eq!(parameters.word_size().bits(), W::BITS);

        debug!(
            "Created {} context (c = {}, t = {})",
            parameters,
            parameters.key_words(),
            parameters.table_len()
        );

        Self {
            parameters,
            table: None,
        }
    }

    /// Creates a context sized for `key` and expands it right away.
    ///
    /// # Errors
    /// Same as [`Rc5::new`].
    pub fn with_key(rounds: u32, key: &[u8]) -> Result<Self, Rc5Error> {
        let mut cipher = Self::new(rounds, key.len())?;
        cipher.expand(key)?;
        Ok(cipher)
    }

    /// Expands `key` into a fresh key table, replacing any previous one.
    ///
    /// On error the context is left exactly as it was.
    ///
    /// # Errors
    /// - [`Rc5Error::InvalidParameter`]: if `key` is not `b` bytes long.
    pub fn expand(&mut self, key: &[u8]) -> Result<(), Rc5Error> {
        let table = expand_key(&self.parameters, key)?;

        let replaced = self.table.replace(table).is_some();

        debug!(
            "{} key schedule {}",
            self.parameters,
            if replaced { "rebuilt" } else { "built" }
        );

        Ok(())
    }

    /// Encrypts one two-word block.
    ///
    /// # Errors
    /// - [`Rc5Error::NotInitialized`]: if no key has been expanded.
    pub fn encrypt(&self, plaintext: Block<W>) -> Result<Block<W>, Rc5Error> {
        Ok(encrypt(plaintext, self.table()?))
    }

    /// Decrypts one two-word block.
    ///
    /// # Errors
    /// - [`Rc5Error::NotInitialized`]: if no key has been expanded.
    pub fn decrypt(&self, ciphertext: Block<W>) -> Result<Block<W>, Rc5Error> {
        Ok(decrypt(ciphertext, self.table()?))
    }

    /// Encrypts one block given as `2u` bytes holding two little-endian words.
    ///
    /// # Errors
    /// - [`Rc5Error::InvalidBlockSize`]: if `plaintext` is not exactly one block.
    /// - [`Rc5Error::NotInitialized`]: if no key has been expanded.
    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> Result<Bytes, Rc5Error> {
        self.transform_bytes(plaintext, encrypt)
    }

    /// Decrypts one block given as `2u` bytes holding two little-endian words.
    ///
    /// # Errors
    /// - [`Rc5Error::InvalidBlockSize`]: if `ciphertext` is not exactly one block.
    /// - [`Rc5Error::NotInitialized`]: if no key has been expanded.
    pub fn decrypt_bytes(&self, ciphertext: &[u8]) -> Result<Bytes, Rc5Error> {
        self.transform_bytes(ciphertext, decrypt)
    }

    /// The resolved parameters of this context.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Word size `w` in bits.
    pub fn word_size(&self) -> u32 {
        W::BITS
    }

    /// Key length `b` in bytes.
    pub fn key_length(&self) -> usize {
        self.parameters.key_length()
    }

    /// The magic constants `(P_w, Q_w)` seeding the key schedule.
    pub fn magic_constants(&self) -> (W, W) {
        (W::P, W::Q)
    }

    /// Whether a key has been expanded.
    pub fn is_expanded(&self) -> bool {
        self.table.is_some()
    }

    /// The current key table, if a key has been expanded.
    pub fn key_table(&self) -> Option<&KeyTable<W>> {
        self.table.as_ref()
    }

    fn table(&self) -> Result<&KeyTable<W>, Rc5Error> {
        self.table.as_ref().ok_or(Rc5Error::NotInitialized)
    }

    fn transform_bytes(
        &self,
        input: &[u8],
        transform: fn(Block<W>, &KeyTable<W>) -> Block<W>,
    ) -> Result<Bytes, Rc5Error> {
        let block_len = self.parameters.block_len();
        if input.len() != block_len {
            return Err(Rc5Error::InvalidBlockSize {
                expected: block_len,
                actual: input.len(),
            });
        }

        let (left, right) = input.split_at(W::BYTES);
        let [a, b] = transform(
            [W::from_le_slice(left), W::from_le_slice(right)],
            self.table()?,
        );

        let mut output = BytesMut::with_capacity(block_len);
        a.put_le(&mut output);
        b.put_le(&mut output);

        Ok(output.freeze())
    }
}

impl Default for Rc5<u32> {
    /// An unexpanded RC5-32/12/16 context.
    fn default() -> Self {
        Self {
            parameters: Parameters::default(),
            table: None,
        }
    }
}
