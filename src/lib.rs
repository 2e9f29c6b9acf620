//! Format-preserving encryption of bounded integers.
//!
//! This crate follows the overall principles of AES-FFX "method 2", but does
//! not conform to the proposed FFX-A2, FFX-A10 or FFX\[radix\] standards, nor
//! to NIST FF1/FF3.
//!
//! # Example
//!
//! ```
//! extern crate aes;
//! extern crate fpe_ffx;
//!
//! use aes::Aes128;
//! use fpe_ffx::ffx::FpeInteger;
//!
//! let key = *b"testtesttestaaaa";
//! let radix = 10;
//! let width = 7;
//!
//! let fpe = FpeInteger::<Aes128>::new(&key, radix, width).unwrap();
//! let ct = fpe.encrypt(0).unwrap();
//! assert_eq!(ct, 731134);
//!
//! let pt = fpe.decrypt(ct).unwrap();
//! assert_eq!(pt, 0);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)] // refuse to compile if documentation is missing

#[cfg(feature = "std")]
extern crate std;

pub mod ffx;
