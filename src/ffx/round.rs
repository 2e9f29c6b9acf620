//! The Feistel round function.

use cipher::{consts::U16, Block, BlockEncrypt, BlockSizeUser};

/// How a pseudorandom integer is read out of an encrypted block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Extraction {
    /// The upper 8 bytes of the block, as a little-endian `u64`.
    Narrow,
    /// All 16 bytes of the block, as a little-endian `u128`.
    Wide,
}

impl Extraction {
    /// Picks the narrowest extraction that keeps the bias of the final
    /// reduction small for a domain of `size` values.
    pub(super) fn for_domain(size: u128) -> Self {
        // A power of two divides 2^128, so reducing 64 bits by it is unbiased.
        if size <= 1u128 << 32 || (size <= 1u128 << 64 && size.is_power_of_two()) {
            Extraction::Narrow
        } else {
            Extraction::Wide
        }
    }

    fn read(self, block: &[u8]) -> u128 {
        match self {
            Extraction::Narrow => {
                let mut bytes = [0; 8];
                bytes.copy_from_slice(&block[8..16]);
                u128::from(u64::from_le_bytes(bytes))
            }
            Extraction::Wide => {
                let mut bytes = [0; 16];
                bytes.copy_from_slice(&block[..16]);
                u128::from_le_bytes(bytes)
            }
        }
    }
}

#[derive(Clone)]
pub(super) struct RoundFunction<CIPH> {
    ciph: CIPH,
    extraction: Extraction,
}

impl<CIPH> RoundFunction<CIPH> {
    pub(super) fn new(ciph: CIPH, extraction: Extraction) -> Self {
        RoundFunction { ciph, extraction }
    }

    #[cfg(test)]
    pub(super) fn extraction(&self) -> Extraction {
        self.extraction
    }
}

impl<CIPH: BlockEncrypt + BlockSizeUser<BlockSize = U16>> RoundFunction<CIPH> {
    /// Returns a pseudorandom value in `[0, modulus)` derived from the round
    /// index and the value of the untouched half.
    ///
    /// `modulus` must be in `[1, 2^64]`.
    pub(super) fn output(&self, round: u32, value: u64, modulus: u128) -> u64 {
        let mut block = Block::<CIPH>::default();
        block[..8].copy_from_slice(&u64::from(round).to_le_bytes());
        block[8..].copy_from_slice(&value.to_le_bytes());
        self.ciph.encrypt_block(&mut block);

        (self.extraction.read(&block) % modulus) as u64
    }
}
