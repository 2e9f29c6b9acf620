//! Format-preserving encryption of integers in `[0, radix^width)`, using an
//! unbalanced Feistel network keyed by a 128-bit block cipher.
//!
//! Each round encrypts the round index and one half of the message as a
//! single block, reduces the ciphertext modulo the size of the other half,
//! and adds it into that half. This follows the general shape of AES-FFX
//! "method 2" (addition rather than XOR), but is not compatible with any of
//! the FFX or FF1 standards.

use cipher::{consts::U16, BlockCipher, BlockEncrypt, BlockSizeUser, KeyInit};

#[cfg(test)]
use static_assertions::const_assert;

mod domain;
mod error;
mod round;
pub use error::{ConfigError, DomainViolation, Error};

#[cfg(feature = "aes")]
mod aes_variant;
#[cfg(feature = "aes")]
pub use self::aes_variant::AesFpeInteger;


#[cfg(test)]
mod rounds;

use domain::{Domain, Half};
use round::{Extraction, RoundFunction};

/// The number of Feistel rounds used unless another count is requested.
pub const DEFAULT_ROUNDS: u32 = 10;

/// The message width, in bits, used by the binary variant unless another
/// width is requested.
pub const DEFAULT_BINARY_WIDTH: u32 = 32;

#[cfg(test)]
const_assert!(DEFAULT_BINARY_WIDTH <= domain::MAX_DOMAIN_BITS);

/// Which half feeds the round function, and which half it updates.
///
/// Rounds alternate strictly, so the pair used by any round is determined by
/// the parity of its index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Halves {
    from: Half,
    to: Half,
}

impl Halves {
    /// The pair used by round 0.
    const FIRST: Halves = Halves {
        from: Half::Low,
        to: Half::High,
    };

    /// The pair used by the given round.
    fn at_round(round: u32) -> Self {
        if round % 2 == 0 {
            Halves::FIRST
        } else {
            Halves::FIRST.swapped()
        }
    }

    fn swapped(self) -> Self {
        Halves {
            from: self.to,
            to: self.from,
        }
    }
}

/// A struct for performing integer FPE encryption and decryption operations.
///
/// The configuration is fixed at construction; `encrypt` and `decrypt` take
/// `&self` and may be called concurrently from several threads.
#[derive(Clone)]
pub struct FpeInteger<CIPH> {
    prf: RoundFunction<CIPH>,
    domain: Domain,
    rounds: u32,
}

impl<CIPH: BlockCipher + KeyInit> FpeInteger<CIPH> {
    /// Creates a new object for the domain `[0, radix^width)`, using
    /// [`DEFAULT_ROUNDS`] rounds.
    ///
    /// Returns an error if the key is not valid for `CIPH`, if the radix is
    /// less than 2, if the width is zero, or if `radix^width > 2^96`.
    pub fn new(key: &[u8], radix: u32, width: u32) -> Result<Self, ConfigError> {
        Self::with_rounds(key, DEFAULT_ROUNDS, radix, width)
    }

    /// Creates a new object for the domain `[0, radix^width)` with the given
    /// number of Feistel rounds.
    ///
    /// Zero rounds is accepted, and makes encryption the identity.
    pub fn with_rounds(
        key: &[u8],
        rounds: u32,
        radix: u32,
        width: u32,
    ) -> Result<Self, ConfigError> {
        let ciph =
            CIPH::new_from_slice(key).map_err(|_| ConfigError::InvalidKeyLength(key.len()))?;
        let domain = Domain::new(radix, width)?;
        let extraction = Extraction::for_domain(domain.size());
        Ok(FpeInteger {
            prf: RoundFunction::new(ciph, extraction),
            domain,
            rounds,
        })
    }

    /// Creates a new object for the domain `[0, 2^width)`, using
    /// [`DEFAULT_ROUNDS`] rounds.
    ///
    /// [`DEFAULT_BINARY_WIDTH`] gives the 32-bit domain.
    ///
    /// This is the general construction with radix 2, so widths above 64 read
    /// the whole encrypted block in each round. Ciphertexts agree with a
    /// binary-only variant that always reads 64 bits only for widths up to 64.
    pub fn binary(key: &[u8], width: u32) -> Result<Self, ConfigError> {
        Self::new(key, 2, width)
    }
}

impl<CIPH> FpeInteger<CIPH> {
    /// The radix of the domain.
    pub fn radix(&self) -> u32 {
        self.domain.radix()
    }

    /// The number of radix digits in the domain.
    pub fn width(&self) -> u32 {
        self.domain.width()
    }

    /// The number of Feistel rounds.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// The number of values in the domain, `radix^width`.
    pub fn domain_size(&self) -> u128 {
        self.domain.size()
    }

    fn check_domain(&self, value: u128) -> Result<(), DomainViolation> {
        if self.domain.contains(value) {
            Ok(())
        } else {
            Err(DomainViolation {
                value,
                domain_size: self.domain.size(),
            })
        }
    }
}

impl<CIPH: BlockEncrypt + BlockSizeUser<BlockSize = U16>> FpeInteger<CIPH> {
    /// Encrypts the given message.
    ///
    /// Returns an error if the message is not in `[0, radix^width)`.
    pub fn encrypt(&self, message: u128) -> Result<u128, DomainViolation> {
        self.check_domain(message)?;

        let mut work = self.domain.split(message);
        let mut halves = Halves::FIRST;
        for round in 0..self.rounds {
            debug_assert_eq!(halves, Halves::at_round(round));
            let Halves { from, to } = halves;
            let y = self
                .prf
                .output(round, work.get(from), self.domain.modulus(to));
            work.set(to, self.domain.add_mod(to, work.get(to), y));
            halves = halves.swapped();
        }

        Ok(self.domain.join(work))
    }

    /// Decrypts the given ciphertext.
    ///
    /// Returns an error if the ciphertext is not in `[0, radix^width)`.
    pub fn decrypt(&self, ciphertext: u128) -> Result<u128, DomainViolation> {
        self.check_domain(ciphertext)?;

        let mut work = self.domain.split(ciphertext);
        // Start from the pair that encryption used in its last round.
        let mut halves = Halves::at_round(self.rounds.saturating_sub(1));
        for round in (0..self.rounds).rev() {
            debug_assert_eq!(halves, Halves::at_round(round));
            let Halves { from, to } = halves;
            let y = self
                .prf
                .output(round, work.get(from), self.domain.modulus(to));
            work.set(to, self.domain.sub_mod(to, work.get(to), y));
            halves = halves.swapped();
        }

        Ok(self.domain.join(work))
    }
}

/// Encrypts `message` in the domain `[0, radix^width)` without keeping the
/// configured object around.
///
/// Callers encrypting more than one message should construct an
/// [`FpeInteger`] once instead.
pub fn encrypt<CIPH>(
    key: &[u8],
    rounds: u32,
    radix: u32,
    width: u32,
    message: u128,
) -> Result<u128, Error>
where
    CIPH: BlockCipher + BlockEncrypt + BlockSizeUser<BlockSize = U16> + KeyInit,
{
    let fpe = FpeInteger::<CIPH>::with_rounds(key, rounds, radix, width)?;
    Ok(fpe.encrypt(message)?)
}

/// Decrypts `ciphertext` in the domain `[0, radix^width)` without keeping the
/// configured object around.
pub fn decrypt<CIPH>(
    key: &[u8],
    rounds: u32,
    radix: u32,
    width: u32,
    ciphertext: u128,
) -> Result<u128, Error>
where
    CIPH: BlockCipher + BlockEncrypt + BlockSizeUser<BlockSize = U16> + KeyInit,
{
    let fpe = FpeInteger::<CIPH>::with_rounds(key, rounds, radix, width)?;
    Ok(fpe.decrypt(ciphertext)?)
}
