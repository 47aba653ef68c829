//! Identity shared with host application generator registries.
use crate::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifier of a password generator in a host registry.
///
/// String encoding is a `0x` prefix followed by the 16 bytes
/// hex encoded.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Hash, Eq, PartialEq)]
#[serde(try_from = "String", into = "String")]
pub struct GeneratorId([u8; 16]);

impl GeneratorId {
    /// Encode this identifier in the padded base64 form hosts use
    /// when keying stored generator profiles.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }

    /// Decode an identifier from the padded base64 form.
    pub fn from_base64(value: &str) -> Result<Self> {
        let bytes = STANDARD.decode(value)?;
        let buffer: [u8; 16] = bytes.as_slice().try_into()?;
        Ok(Self(buffer))
    }
}

/// Identity of the phonetic generator in host registries.
///
/// The value is fixed for all versions of the library so hosts can
/// durably key stored profiles to this generator.
pub const GENERATOR_ID: GeneratorId = GeneratorId([
    0x3b, 0x9a, 0xac, 0x37, 0xa2, 0x0b, 0x4e, 0x46, 0x82, 0x45, 0x58,
    0x6e, 0xed, 0x5a, 0x63, 0x76,
]);

/// Name hosts display for the phonetic generator.
pub const GENERATOR_NAME: &str = "Phonetic (pwgen)";

impl fmt::Display for GeneratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for GeneratorId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if !s.starts_with("0x") {
            return Err(Error::BadGeneratorIdPrefix);
        }
        let bytes = hex::decode(&s[2..])?;
        let buffer: [u8; 16] = bytes.as_slice().try_into()?;
        Ok(Self(buffer))
    }
}

impl TryFrom<String> for GeneratorId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<GeneratorId> for String {
    fn from(value: GeneratorId) -> Self {
        value.to_string()
    }
}

impl From<[u8; 16]> for GeneratorId {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl From<GeneratorId> for [u8; 16] {
    fn from(value: GeneratorId) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for GeneratorId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
