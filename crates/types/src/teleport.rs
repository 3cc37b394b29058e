// This file is part of Bifrost.
//
// Bifrost is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// Bifrost is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with Bifrost.
// If not, see https://www.gnu.org/licenses/.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::RetryableGasParams;

/// Parameters of an L1 -> L2 -> L3 teleportation
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeleportParams {
    /// The token being bridged, on L1
    pub l1_token: Address,
    /// L1 address of the token L3 uses to pay for gas.
    ///
    /// `Address::ZERO` when L3 uses the native currency.
    pub l3_fee_token_l1_addr: Address,
    /// L1 -> L2 token gateway router
    pub l1l2_router: Address,
    /// Amount of `l1_token` to bridge
    pub amount: U256,
    /// Retryable gas parameters, the L3 leg must be filled in by the caller
    pub gas_params: RetryableGasParams,
}

impl TeleportParams {
    /// The teleportation type implied by the bridged token and the L3 fee token
    pub fn teleportation_type(&self) -> TeleportationType {
        TeleportationType::from_fee_token(self.l1_token, self.l3_fee_token_l1_addr)
    }
}

/// Kind of teleportation, selects how the required funds are paid
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TeleportationType {
    /// L3 uses the native currency for fees
    #[default]
    Standard,
    /// The bridged token is the L3 fee token
    OnlyCustomFee,
    /// L3 uses a custom fee token that is not the bridged token
    NonFeeTokenToCustomFee,
}

impl TeleportationType {
    /// Determine the teleportation type from the bridged token and the L1 address of
    /// the L3 fee token.
    pub fn from_fee_token(l1_token: Address, l3_fee_token_l1_addr: Address) -> Self {
        if l3_fee_token_l1_addr.is_zero() {
            Self::Standard
        } else if l3_fee_token_l1_addr == l1_token {
            Self::OnlyCustomFee
        } else {
            Self::NonFeeTokenToCustomFee
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use alloy_primitives::address;

    use super::*;

    const TOKEN: Address = address!("1000000000000000000000000000000000000001");
    const FEE_TOKEN: Address = address!("2000000000000000000000000000000000000002");

    #[test]
    fn test_type_from_fee_token() {
        assert_eq!(
            TeleportationType::from_fee_token(TOKEN, Address::ZERO),
            TeleportationType::Standard
        );
        assert_eq!(
            TeleportationType::from_fee_token(TOKEN, TOKEN),
            TeleportationType::OnlyCustomFee
        );
        assert_eq!(
            TeleportationType::from_fee_token(TOKEN, FEE_TOKEN),
            TeleportationType::NonFeeTokenToCustomFee
        );
    }

    #[test]
    fn test_params_teleportation_type() {
        let params = TeleportParams {
            l1_token: TOKEN,
            l3_fee_token_l1_addr: FEE_TOKEN,
            ..Default::default()
        };
        assert_eq!(
            params.teleportation_type(),
            TeleportationType::NonFeeTokenToCustomFee
        );
    }

    #[test]
    fn test_type_strings() {
        assert_eq!(
            TeleportationType::from_str("only_custom_fee").unwrap(),
            TeleportationType::OnlyCustomFee
        );
        assert_eq!(
            TeleportationType::NonFeeTokenToCustomFee.to_string(),
            "non_fee_token_to_custom_fee"
        );
        assert!(TeleportationType::from_str("custom").is_err());
    }
}
