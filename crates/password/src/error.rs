use thiserror::Error;

/// Errors generated by the phonetic password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a target length is too small for an
    /// attempt to ever place every required character class.
    #[error("password length {0} is too small, minimum is {1}")]
    PasswordLengthTooSmall(usize, usize),

    /// Error generated when parsing a generator identifier that
    /// does not begin with the 0x prefix.
    #[error("generator identifier is not prefixed with 0x")]
    BadGeneratorIdPrefix,

    /// Error generated converting from hexadecimal.
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),

    /// Error generated decoding from base64.
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    /// Error generated converting byte slices to fixed length arrays.
    #[error(transparent)]
    TryFromSlice(#[from] std::array::TryFromSliceError),
}
