//! Mixed-radix split of a message into the two Feistel halves.

use num_integer::Integer;
use num_traits::checked_pow;

use super::ConfigError;

/// The largest supported domain is `[0, 2^MAX_DOMAIN_BITS)`.
pub(super) const MAX_DOMAIN_BITS: u32 = 96;
/// Each half is packed into a 64-bit word by the round function.
const MAX_HALF_BITS: u32 = 64;

/// One of the two halves of the working pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Half {
    /// `message mod radix^ceil(width / 2)`
    Low,
    /// `message div radix^ceil(width / 2)`
    High,
}

impl Half {
    fn index(self) -> usize {
        match self {
            Half::Low => 0,
            Half::High => 1,
        }
    }
}

/// The two halves of a message while it is being transformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Work([u64; 2]);

impl Work {
    pub(super) fn get(&self, half: Half) -> u64 {
        self.0[half.index()]
    }

    pub(super) fn set(&mut self, half: Half, value: u64) {
        self.0[half.index()] = value;
    }
}

/// The message domain `[0, radix^width)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Domain {
    radix: u32,
    width: u32,
    size: u128,
    /// `[radix^ceil(width / 2), radix^floor(width / 2)]`; the low half gets
    /// the extra digit when the width is odd.
    modulos: [u128; 2],
}

impl Domain {
    pub(super) fn new(radix: u32, width: u32) -> Result<Self, ConfigError> {
        if radix < 2 {
            return Err(ConfigError::InvalidRadix(radix));
        }
        if width < 1 {
            return Err(ConfigError::InvalidWidth(width));
        }

        let too_large = ConfigError::DomainTooLarge { radix, width };
        let pow = |e: u32| checked_pow(u128::from(radix), e as usize).ok_or(too_large);

        let size = pow(width)?;
        if size > 1u128 << MAX_DOMAIN_BITS {
            return Err(too_large);
        }
        let modulos = [pow((width + 1) / 2)?, pow(width / 2)?];
        // ceil(w / 2) <= 2w / 3 for every w >= 1, so a domain of at most 2^96
        // leaves each half at most 2^64.
        debug_assert!(modulos[0] <= 1u128 << MAX_HALF_BITS);

        Ok(Domain {
            radix,
            width,
            size,
            modulos,
        })
    }

    pub(super) fn radix(&self) -> u32 {
        self.radix
    }

    pub(super) fn width(&self) -> u32 {
        self.width
    }

    pub(super) fn size(&self) -> u128 {
        self.size
    }

    pub(super) fn contains(&self, value: u128) -> bool {
        value < self.size
    }

    pub(super) fn modulus(&self, half: Half) -> u128 {
        self.modulos[half.index()]
    }

    /// Splits `message` into its two halves.
    ///
    /// The caller MUST ensure that `message` is in the domain.
    pub(super) fn split(&self, message: u128) -> Work {
        debug_assert!(self.contains(message));
        let (high, low) = message.div_rem(&self.modulos[0]);
        let high = high % self.modulos[1];
        // Both halves are below their modulus, which is at most 2^64.
        Work([low as u64, high as u64])
    }

    /// Joins two halves back into a message. Inverse of [`Domain::split`].
    pub(super) fn join(&self, work: Work) -> u128 {
        u128::from(work.get(Half::High)) * self.modulos[0] + u128::from(work.get(Half::Low))
    }

    /// Computes `(a + b) mod modulus(half)`.
    pub(super) fn add_mod(&self, half: Half, a: u64, b: u64) -> u64 {
        let m = self.modulus(half);
        ((u128::from(a) + u128::from(b)) % m) as u64
    }

    /// Computes `(a - b) mod modulus(half)`, for `a, b < modulus(half)`.
    pub(super) fn sub_mod(&self, half: Half, a: u64, b: u64) -> u64 {
        let m = self.modulus(half);
        debug_assert!(u128::from(b) < m);
        ((u128::from(a) + m - u128::from(b)) % m) as u64
    }
}
