use core::fmt;

/// Errors that can occur while constructing an [`FpeInteger`](super::FpeInteger).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The key length was not accepted by the block cipher.
    InvalidKeyLength(usize),
    /// The radix was less than 2.
    InvalidRadix(u32),
    /// The width was zero.
    InvalidWidth(u32),
    /// radix^width exceeds 2^96.
    DomainTooLarge {
        /// The requested radix.
        radix: u32,
        /// The requested width.
        width: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidKeyLength(len) => {
                write!(f, "A key of {} bytes is not valid for this block cipher", len)
            }
            ConfigError::InvalidRadix(radix) => {
                write!(f, "The radix {} is not in the range 2..", radix)
            }
            ConfigError::InvalidWidth(width) => {
                write!(f, "The width {} is not in the range 1..", width)
            }
            ConfigError::DomainTooLarge { radix, width } => write!(
                f,
                "The domain {}^{} is larger than 2^{}",
                radix,
                width,
                super::domain::MAX_DOMAIN_BITS
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Error indicating that a message or ciphertext was outside `[0, radix^width)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomainViolation {
    pub(super) value: u128,
    pub(super) domain_size: u128,
}

impl DomainViolation {
    /// The rejected value.
    pub fn value(&self) -> u128 {
        self.value
    }

    /// The number of values in the configured domain.
    pub fn domain_size(&self) -> u128 {
        self.domain_size
    }
}

impl fmt::Display for DomainViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The value {} is not in the domain [0, {})",
            self.value, self.domain_size
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DomainViolation {}

/// Errors returned by the one-shot [`encrypt`](super::encrypt) and
/// [`decrypt`](super::decrypt) functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The parameters were rejected.
    Config(ConfigError),
    /// The input was outside the domain.
    Domain(DomainViolation),
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DomainViolation> for Error {
    fn from(e: DomainViolation) -> Self {
        Error::Domain(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => e.fmt(f),
            Error::Domain(e) => e.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
            Error::Domain(e) => Some(e),
        }
    }
}
