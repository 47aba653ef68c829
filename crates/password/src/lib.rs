//! Pronounceable password generation in the style of the classic
//! `pwgen` program.
//!
//! Passwords chain vowel and consonant sounds from a fixed table of
//! [phonetic elements](crate::elements) and mix in one digit, one
//! capital letter and one special character at random positions;
//! whole attempts are retried until every requirement is satisfied.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod elements;
mod error;
pub mod generator;
mod identity;
mod random;

pub use error::Error;
pub use generator::{phonetic_password, PhoneticGenerator};
pub use identity::{GeneratorId, GENERATOR_ID, GENERATOR_NAME};
pub use random::RandomSource;

pub use secrecy;

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Digits drawn when injecting the required number.
#[doc(hidden)]
pub const DIGITS: &[char] =
    &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Fixed set drawn when injecting the required special character.
#[doc(hidden)]
pub const SPECIAL_CHARACTERS: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-',
    '.', '/', ':', ';', '<', '=', '>', '?', '@', '[', '\\', ']', '^',
    '_', '`', '{', '|', '}', '~',
];
