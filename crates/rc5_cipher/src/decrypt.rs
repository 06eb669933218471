use crate::{Block, KeyTable, Word};

/// Decrypts one two-word block with an expanded key table.
///
/// Runs the rounds of [`encrypt`](crate::encrypt) backwards, `i = r` down to
/// `1`, subtracting each subkey before undoing its rotation:
///
/// ```text
/// B = rotr(B - S[2i + 1], A) ^ A
/// A = rotr(A - S[2i], B) ^ B
/// ```
///
/// and finally removes the whitening with `S[1]` and `S[0]`.
///
/// # Parameters
/// - `ciphertext`: the block to decrypt, `A` first.
/// - `table`: the expanded key table the block was encrypted with.
///
/// # Returns
/// The plaintext block.
pub fn decrypt<W: Word>(ciphertext: Block<W>, table: &KeyTable<W>) -> Block<W> {
    // Split the block into its two halves.
    let [mut a, mut b] = ciphertext;

    // Undo the rounds from last to first.
    for round in (1..=table.rounds()).rev() {
        let (key_a, key_b) = table.round_keys(round);

        // B was updated last, so it is restored first, while A still holds
        // the value it was rotated by.
        b = b.wrapping_sub(key_b).rotr(a) ^ a;

        // Then restore A using the recovered B.
        a = a.wrapping_sub(key_a).rotr(b) ^ b;
    }

    // Remove the initial whitening.
    let (whiten_a, whiten_b) = table.round_keys(0);
    b = b.wrapping_sub(whiten_b);
    a = a.wrapping_sub(whiten_a);

    // Reassemble the plaintext block, A first.
    [a, b]
}
