//! The RC5 block cipher.
//!
//! This crate bundles the cipher core ([`cipher`]) and its TOML-backed
//! parameter settings ([`settings`]). Most users only need the [`prelude`].
//!
//! # Example
//! ```
//! use rc5::prelude::*;
//!
//! let mut context = CipherContext::create(32, 12, 16).unwrap();
//! context.expand(&[0u8; 16]).unwrap();
//!
//! let ciphertext = context.encrypt([0, 0]).unwrap();
//! assert_eq!(ciphertext, [0xEEDBA521, 0x6D8F4B15]);
//! assert_eq!(context.decrypt(ciphertext).unwrap(), [0, 0]);
//! ```

pub use rc5_cipher as cipher;
pub use rc5_settings as settings;

/// Commonly used types, re-exported in one place.
pub mod prelude {
    pub use rc5_cipher::{
        Block, CipherContext, InvalidParameter, KeyTable, Parameters, Rc5, Rc5Error, Word,
        WordSize, decrypt, encrypt, expand_key, rotl, rotr,
    };
    pub use rc5_settings::CipherSettings;
}
