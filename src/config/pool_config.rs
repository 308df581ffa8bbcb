//! Configuration for a constant-product pool.

use crate::domain::{AssetId, AssetPair, FeeTier};
use crate::error::AmmError;

/// Immutable parameters of a constant-product pool.
///
/// Defines which two assets the pool trades (in A/B order) and the swap
/// fee. Reserves are not configured: a pool always starts empty and is
/// seeded by its first deposit.
///
/// # Validation
///
/// - The two assets must be distinct.
/// - The fee must be below 10 000 bp (enforced by [`FeeTier`]).
///
/// With the `serde` feature the config deserializes from a flat record and
/// is validated on the way in:
///
/// ```json
/// { "asset_a": [1, 1, …], "asset_b": [2, 2, …], "fee_bps": 30 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PoolConfigRecord", into = "PoolConfigRecord")
)]
pub struct PoolConfig {
    assets: AssetPair,
    fee_tier: FeeTier,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    pub fn new(assets: AssetPair, fee_tier: FeeTier) -> Result<Self, AmmError> {
        let config = Self { assets, fee_tier };
        config.validate()?;
        Ok(config)
    }

    /// Shorthand for building the pair and the config in one step.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the assets are equal.
    pub fn for_assets(
        asset_a: AssetId,
        asset_b: AssetId,
        fee_tier: FeeTier,
    ) -> Result<Self, AmmError> {
        Self::new(AssetPair::new(asset_a, asset_b)?, fee_tier)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the assets are equal.
    /// - [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.assets.asset_a() == self.assets.asset_b() {
            return Err(AmmError::InvalidConfiguration(
                "asset pair requires two distinct assets",
            ));
        }
        FeeTier::new(self.fee_tier.basis_points())?;
        Ok(())
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn assets(&self) -> &AssetPair {
        &self.assets
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }
}

/// Flat serialized form of [`PoolConfig`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PoolConfigRecord {
    asset_a: AssetId,
    asset_b: AssetId,
    fee_bps: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<PoolConfigRecord> for PoolConfig {
    type Error = AmmError;

    fn try_from(record: PoolConfigRecord) -> Result<Self, Self::Error> {
        Self::for_assets(
            record.asset_a,
            record.asset_b,
            FeeTier::try_from(record.fee_bps)?,
        )
    }
}

#[cfg(feature = "serde")]
impl From<PoolConfig> for PoolConfigRecord {
    fn from(config: PoolConfig) -> Self {
        Self {
            asset_a: config.assets.asset_a(),
            asset_b: config.assets.asset_b(),
            fee_bps: config.fee_tier.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::BasisPoints;

    fn id(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 32])
    }

    #[test]
    fn valid_config() {
        let Ok(cfg) = PoolConfig::for_assets(id(1), id(2), FeeTier::TIER_0_30_PERCENT) else {
            panic!("expected Ok");
        };
        assert_eq!(cfg.assets().asset_a(), id(1));
        assert_eq!(cfg.assets().asset_b(), id(2));
        assert_eq!(cfg.fee_tier().basis_points(), BasisPoints::new(30));
    }

    #[test]
    fn identical_assets_rejected() {
        let result = PoolConfig::for_assets(id(1), id(1), FeeTier::ZERO);
        assert!(matches!(result, Err(AmmError::InvalidConfiguration(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_and_validates() {
        let json = serde_json::json!({
            "asset_a": vec![1u8; 32],
            "asset_b": vec![2u8; 32],
            "fee_bps": 30,
        });
        let Ok(cfg) = serde_json::from_value::<PoolConfig>(json) else {
            panic!("expected valid config");
        };
        assert_eq!(cfg.fee_tier(), FeeTier::TIER_0_30_PERCENT);

        let bad_fee = serde_json::json!({
            "asset_a": vec![1u8; 32],
            "asset_b": vec![2u8; 32],
            "fee_bps": 10_000,
        });
        assert!(serde_json::from_value::<PoolConfig>(bad_fee).is_err());

        let same_asset = serde_json::json!({
            "asset_a": vec![3u8; 32],
            "asset_b": vec![3u8; 32],
            "fee_bps": 30,
        });
        assert!(serde_json::from_value::<PoolConfig>(same_asset).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_flat() {
        let Ok(cfg) = PoolConfig::for_assets(id(1), id(2), FeeTier::TIER_1_00_PERCENT) else {
            panic!("expected Ok");
        };
        let Ok(json) = serde_json::to_value(cfg) else {
            panic!("serializable");
        };
        assert_eq!(json["fee_bps"], 100);
        assert_eq!(json["asset_b"][0], 2);
    }
}
