use alloy_consensus::TxEnvelope;

/// The sender-recovery scheme valid for a transaction at a given height.
///
/// The scheme is resolved from the block height against the chain's upgrade
/// schedule, not from the transaction's own type field alone: a legacy
/// transaction is only replay protected once EIP-155 has activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigningScheme {
    /// Pre-replay-protection legacy signing.
    Legacy,
    /// Replay-protected legacy signing (EIP-155).
    ReplayProtectedLegacy,
    /// Access-list signing (EIP-2930).
    AccessList,
    /// Dynamic-fee signing (EIP-1559).
    DynamicFee,
}

/// The heights at which the schema-shaping protocol upgrades of a chain
/// activate.
///
/// This is chain-rules configuration data, loaded by the bootstrap and
/// handed to the normalizer; [`Self::mainnet`] ships the Ethereum mainnet
/// schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpgradeSchedule {
    /// The height at which replay-protected legacy signing activates
    /// (EIP-155, Spurious Dragon).
    pub replay_protection_height: u64,
    /// The height at which access-list transactions activate (EIP-2930,
    /// Berlin).
    pub access_list_height: u64,
    /// The height at which the fee market activates (EIP-1559, London),
    /// introducing `base_fee_per_gas` and dynamic-fee transactions.
    pub fee_market_height: u64,
}

impl UpgradeSchedule {
    /// Creates a new schedule from activation heights.
    pub const fn new(
        replay_protection_height: u64,
        access_list_height: u64,
        fee_market_height: u64,
    ) -> Self {
        Self { replay_protection_height, access_list_height, fee_market_height }
    }

    /// The Ethereum mainnet upgrade schedule.
    pub const fn mainnet() -> Self {
        Self::new(2_675_000, 12_244_000, 12_965_000)
    }

    /// Returns whether the fee market is active at the provided height.
    pub const fn fee_market_active(&self, height: u64) -> bool {
        height >= self.fee_market_height
    }

    /// Resolves the signing scheme for a transaction included at the
    /// provided height.
    ///
    /// Returns `None` when no scheme is active for the transaction at that
    /// height: a replay-protected legacy transaction before EIP-155, a typed
    /// transaction before its activation, or a transaction type the mirror
    /// does not model.
    pub fn signing_scheme(&self, height: u64, tx: &TxEnvelope) -> Option<SigningScheme> {
        match tx {
            TxEnvelope::Legacy(signed) => match signed.tx().chain_id {
                None => Some(SigningScheme::Legacy),
                Some(_) if height >= self.replay_protection_height => {
                    Some(SigningScheme::ReplayProtectedLegacy)
                }
                Some(_) => None,
            },
            TxEnvelope::Eip2930(_) if height >= self.access_list_height => {
                Some(SigningScheme::AccessList)
            }
            TxEnvelope::Eip1559(_) if height >= self.fee_market_height => {
                Some(SigningScheme::DynamicFee)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_consensus::{Signed, TxEip1559, TxEip2930, TxLegacy};
    use alloy_primitives::{Signature, B256, U256};

    fn signature() -> Signature {
        Signature::new(U256::from(1), U256::from(1), false)
    }

    fn legacy(chain_id: Option<u64>) -> TxEnvelope {
        let tx = TxLegacy { chain_id, ..Default::default() };
        TxEnvelope::Legacy(Signed::new_unchecked(tx, signature(), B256::ZERO))
    }

    fn access_list() -> TxEnvelope {
        let tx = TxEip2930 { chain_id: 1, ..Default::default() };
        TxEnvelope::Eip2930(Signed::new_unchecked(tx, signature(), B256::ZERO))
    }

    fn dynamic_fee() -> TxEnvelope {
        let tx = TxEip1559 { chain_id: 1, ..Default::default() };
        TxEnvelope::Eip1559(Signed::new_unchecked(tx, signature(), B256::ZERO))
    }

    #[test]
    fn test_legacy_scheme_by_replay_protection() {
        let schedule = UpgradeSchedule::mainnet();

        // Unprotected legacy transactions are valid in any era.
        assert_eq!(schedule.signing_scheme(0, &legacy(None)), Some(SigningScheme::Legacy));
        assert_eq!(
            schedule.signing_scheme(schedule.fee_market_height, &legacy(None)),
            Some(SigningScheme::Legacy)
        );

        // Replay-protected legacy transactions only after EIP-155.
        assert_eq!(
            schedule.signing_scheme(schedule.replay_protection_height - 1, &legacy(Some(1))),
            None
        );
        assert_eq!(
            schedule.signing_scheme(schedule.replay_protection_height, &legacy(Some(1))),
            Some(SigningScheme::ReplayProtectedLegacy)
        );
    }

    #[test]
    fn test_typed_schemes_at_activation_boundaries() {
        let schedule = UpgradeSchedule::mainnet();

        assert_eq!(schedule.signing_scheme(schedule.access_list_height - 1, &access_list()), None);
        assert_eq!(
            schedule.signing_scheme(schedule.access_list_height, &access_list()),
            Some(SigningScheme::AccessList)
        );

        assert_eq!(schedule.signing_scheme(schedule.fee_market_height - 1, &dynamic_fee()), None);
        assert_eq!(
            schedule.signing_scheme(schedule.fee_market_height, &dynamic_fee()),
            Some(SigningScheme::DynamicFee)
        );
    }

    #[test]
    fn test_fee_market_activation() {
        let schedule = UpgradeSchedule::new(10, 20, 30);
        assert!(!schedule.fee_market_active(29));
        assert!(schedule.fee_market_active(30));
    }
}
