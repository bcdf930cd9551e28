use sha1::{Digest, Sha1};

/// Deterministic seed derived from an identifier.
///
/// SHA-1 is only used as a well distributed, stable mixing function here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashSeed {
    digest: [u8; 20],
}

impl HashSeed {
    pub fn from_identifier(identifier: &str) -> Self {
        let mut digest = [0u8; 20];
        digest.copy_from_slice(&Sha1::digest(identifier.as_bytes()));

        Self { digest }
    }

    /// Sum of the digest bytes, at most `20 * 255`.
    pub fn sum(&self) -> u32 {
        self.digest.iter().map(|&b| u32::from(b)).sum()
    }

    /// Base hue in degrees, always in `0..360`.
    pub fn hue(&self) -> u16 {
        // sum() is bounded by 5100 so the remainder always fits
        (self.sum() % 360) as u16
    }

    /// Raw digest byte, wrapping around the digest length.
    pub fn byte(&self, index: usize) -> u8 {
        self.digest[index % self.digest.len()]
    }

    /// Digest byte mapped onto `[0, 1]`.
    pub fn unit(&self, index: usize) -> f64 {
        f64::from(self.byte(index)) / f64::from(u8::MAX)
    }
}
