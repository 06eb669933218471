use crate::{Block, KeyTable, Word};

/// Encrypts one two-word block with an expanded key table.
///
/// After the initial whitening with `S[0]` and `S[1]`, each of the `r` rounds
/// rotates one half by the current value of the other half:
///
/// ```text
/// A = rotl(A ^ B, B) + S[2i]
/// B = rotl(B ^ A, A) + S[2i + 1]
/// ```
///
/// `A` is updated before it feeds the update of `B`. With `r = 0` only the
/// whitening step runs.
///
/// # Parameters
/// - `plaintext`: the block to encrypt, `A` first.
/// - `table`: the expanded key table; its length fixes the round count.
///
/// # Returns
/// The ciphertext block.
pub fn encrypt<W: Word>(plaintext: Block<W>, table: &KeyTable<W>) -> Block<W> {
    // Split the block into its two halves.
    let [mut a, mut b] = plaintext;

    // Whiten both halves with the first two table entries.
    let (whiten_a, whiten_b) = table.round_keys(0);
    a = a.wrapping_add(whiten_a);
    b = b.wrapping_add(whiten_b);

    // Run the rounds; the table length decides how many.
    for round in 1..=table.rounds() {
        let (key_a, key_b) = table.round_keys(round);

        // Mix B into A, rotate by B, then add the round's first subkey.
        a = (a ^ b).rotl(b).wrapping_add(key_a);

        // Same for B, using the A just computed.
        b = (b ^ a).rotl(a).wrapping_add(key_b);
    }

    // Reassemble the ciphertext block, A first.
    [a, b]
}
