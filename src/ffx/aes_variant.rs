//! AES with the key size picked from the key.

use aes::{Aes128, Aes192, Aes256};

use super::{ConfigError, DomainViolation, FpeInteger, DEFAULT_ROUNDS};

/// An [`FpeInteger`] keyed with AES-128, AES-192 or AES-256, selected by
/// whether the key is 16, 24 or 32 bytes long.
#[derive(Clone)]
pub enum AesFpeInteger {
    /// A 16-byte key.
    Aes128(FpeInteger<Aes128>),
    /// A 24-byte key.
    Aes192(FpeInteger<Aes192>),
    /// A 32-byte key.
    Aes256(FpeInteger<Aes256>),
}

macro_rules! dispatch {
    ($self:expr, $fpe:ident => $e:expr) => {
        match $self {
            AesFpeInteger::Aes128($fpe) => $e,
            AesFpeInteger::Aes192($fpe) => $e,
            AesFpeInteger::Aes256($fpe) => $e,
        }
    };
}

impl AesFpeInteger {
    /// Creates a new object for the domain `[0, radix^width)`, using
    /// [`DEFAULT_ROUNDS`] rounds.
    pub fn new(key: &[u8], radix: u32, width: u32) -> Result<Self, ConfigError> {
        Self::with_rounds(key, DEFAULT_ROUNDS, radix, width)
    }

    /// Creates a new object for the domain `[0, radix^width)` with the given
    /// number of Feistel rounds.
    ///
    /// Returns [`ConfigError::InvalidKeyLength`] unless the key is 16, 24 or
    /// 32 bytes long.
    pub fn with_rounds(
        key: &[u8],
        rounds: u32,
        radix: u32,
        width: u32,
    ) -> Result<Self, ConfigError> {
        Ok(match key.len() {
            16 => AesFpeInteger::Aes128(FpeInteger::with_rounds(key, rounds, radix, width)?),
            24 => AesFpeInteger::Aes192(FpeInteger::with_rounds(key, rounds, radix, width)?),
            32 => AesFpeInteger::Aes256(FpeInteger::with_rounds(key, rounds, radix, width)?),
            len => return Err(ConfigError::InvalidKeyLength(len)),
        })
    }

    /// Creates a new object for the domain `[0, 2^width)`, using
    /// [`DEFAULT_ROUNDS`] rounds.
    ///
    /// As with [`FpeInteger::binary`], widths above 64 read the whole
    /// encrypted block in each round.
    pub fn binary(key: &[u8], width: u32) -> Result<Self, ConfigError> {
        Self::new(key, 2, width)
    }

    /// Encrypts the given message.
    pub fn encrypt(&self, message: u128) -> Result<u128, DomainViolation> {
        dispatch!(self, fpe => fpe.encrypt(message))
    }

    /// Decrypts the given ciphertext.
    pub fn decrypt(&self, ciphertext: u128) -> Result<u128, DomainViolation> {
        dispatch!(self, fpe => fpe.decrypt(ciphertext))
    }

    /// The radix of the domain.
    pub fn radix(&self) -> u32 {
        dispatch!(self, fpe => fpe.radix())
    }

    /// The number of radix digits in the domain.
    pub fn width(&self) -> u32 {
        dispatch!(self, fpe => fpe.width())
    }

    /// The number of Feistel rounds.
    pub fn rounds(&self) -> u32 {
        dispatch!(self, fpe => fpe.rounds())
    }

    /// The number of values in the domain, `radix^width`.
    pub fn domain_size(&self) -> u128 {
        dispatch!(self, fpe => fpe.domain_size())
    }
}
