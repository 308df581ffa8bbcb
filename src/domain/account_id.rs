//! Identity of a pool participant.

use core::fmt;

/// Identity of a caller: the account that pays into or is paid out of
/// the pool, and that holds pool shares.
///
/// Wraps a fixed-size `[u8; 32]` byte array (public key, address hash, or
/// any other 32-byte identity the host chooses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for AccountId {
    /// Shortened form: the first four bytes in hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02x}{:02x}{:02x}{:02x}…",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_shortened() {
        let id = AccountId::from_bytes([0x0a; 32]);
        assert_eq!(id.to_string(), "0x0a0a0a0a…");
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(AccountId::from_bytes([0u8; 32]) < AccountId::from_bytes([1u8; 32]));
    }
}
