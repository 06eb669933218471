use log::trace;

use crate::{InvalidParameter, Parameters, Word};

/// Number of passes the mixing step makes over the larger of `S` and `L`.
const MIXING_PASSES: usize = 3;

/// Fixed rotation applied to the table half of each mixing step.
const TABLE_ROTATION: u8 = 3;

/// The expanded key table `S`: exactly `t = 2(r + 1)` words.
///
/// A table is only ever produced whole by [`expand_key`]; there is no way to
/// patch individual entries afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyTable<W: Word> {
    words: Box<[W]>,
}

impl<W: Word> KeyTable<W> {
    /// The table entries, `S[0]` first.
    pub fn words(&self) -> &[W] {
        &self.words
    }

    /// Table length `t`.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; a table holds at least `S[0]` and `S[1]`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Round count `r` this table was sized for.
    pub fn rounds(&self) -> usize {
        self.words.len() / 2 - 1
    }

    /// The two subkeys consumed by round `round` (`S[2i]`, `S[2i + 1]`).
    ///
    /// Round `0` is the initial whitening step.
    #[inline(always)]
    pub(crate) fn round_keys(&self, round: usize) -> (W, W) {
        (self.words[2 * round], self.words[2 * round + 1])
    }
}

impl<W: Word> std::fmt::Debug for KeyTable<W> {
    // Only the shape; the entries are key material.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyTable")
            .field("len", &self.words.len())
            .finish_non_exhaustive()
    }
}

/// Expands a `b`-byte secret key into the table `S` for the given parameters.
///
/// # Parameters
/// - `parameters`: resolved `w/r/b`; `w` must match `W`.
/// - `key`: the secret key, exactly `b` bytes.
///
/// # Errors
/// - [`InvalidParameter::UnsupportedWordSize`]: if `parameters` were resolved
///   for a different word size than `W`.
/// - [`InvalidParameter::KeyLengthMismatch`]: if `key.len() != b`.
pub fn expand_key<W: Word>(
    parameters: &Parameters,
    key: &[u8],
) -> Result<KeyTable<W>, InvalidParameter> {
    if parameters.word_size().bits() != W::BITS {
        return Err(InvalidParameter::UnsupportedWordSize(
            parameters.word_size().bits(),
        ));
    }

    if key.len() != parameters.key_length() {
        return Err(InvalidParameter::KeyLengthMismatch {
            expected: parameters.key_length(),
            actual: key.len(),
        });
    }

    let table_len = parameters.table_len();

    // Load the key little-endian into `c` words; the last one is zero-padded.
    let mut key_words: Vec<W> = key.chunks(W::BYTES).map(W::from_le_slice).collect();
    if key_words.is_empty() {
        key_words.push(W::ZERO);
    }
    debug_assert_eq!(key_words.len(), parameters.key_words());

    // The key-independent arithmetic progression seeded by P and stepped by Q.
    let mut table = Vec::with_capacity(table_len);
    let mut entry = W::P;
    for _ in 0..table_len {
        table.push(entry);
        entry = entry.wrapping_add(W::Q);
    }

    // Mix the key words into the table. `a` and `b` carry the running state
    // from one step to the next; `i` and `j` walk `S` and `L` cyclically.
    let mut a = W::ZERO;
    let mut b = W::ZERO;
    let mut i = 0;
    let mut j = 0;

    // Three passes over whichever of `S` and `L` is longer.
    let steps = MIXING_PASSES * table_len.max(key_words.len());
    let table_rotation = W::from_le_slice(&[TABLE_ROTATION]);

    for _ in 0..steps {
        // Fold the running state into the table entry with a fixed rotation.
        a = table[i].wrapping_add(a).wrapping_add(b).rotl(table_rotation);
        table[i] = a;

        // Data-dependent rotation: the amount is the running sum, masked by `rotl`.
        let sum = a.wrapping_add(b);
        b = key_words[j].wrapping_add(sum).rotl(sum);
        key_words[j] = b;

        // Both indices wrap independently, since `t` and `c` usually differ.
        i = (i + 1) % table_len;
        j = (j + 1) % key_words.len();
    }

    trace!(
        "Expanded {} key schedule: {} table words after {} mixing steps",
        parameters,
        table_len,
        steps
    );

    Ok(KeyTable {
        words: table.into_boxed_slice(),
    })
}
