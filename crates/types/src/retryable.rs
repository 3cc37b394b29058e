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

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Gas limits and submission costs of every retryable in a teleportation.
///
/// The L1 -> L2 legs are filled in by the gas planner, the L2 -> L3 leg and the
/// forwarder factory leg are supplied by the caller.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetryableGasParams {
    /// Gas limit of the L1 -> L2 token bridge retryable
    pub l1l2_token_bridge_gas_limit: u64,
    /// Max submission cost of the L1 -> L2 token bridge retryable
    pub l1l2_token_bridge_max_submission_cost: U256,
    /// Gas limit of the L1 -> L2 fee token bridge retryable
    pub l1l2_fee_token_bridge_gas_limit: u64,
    /// Max submission cost of the L1 -> L2 fee token bridge retryable
    pub l1l2_fee_token_bridge_max_submission_cost: U256,
    /// Gas limit of the L2 forwarder factory retryable
    pub l2_forwarder_factory_gas_limit: u64,
    /// Max submission cost of the L2 forwarder factory retryable
    pub l2_forwarder_factory_max_submission_cost: U256,
    /// Gas limit of the L2 -> L3 token bridge retryable
    pub l2l3_token_bridge_gas_limit: u64,
    /// Max submission cost of the L2 -> L3 token bridge retryable
    pub l2l3_token_bridge_max_submission_cost: U256,
    /// Gas price bid for retryables redeemed on L2
    pub l2_gas_price_bid: U256,
    /// Gas price bid for retryables redeemed on L3
    pub l3_gas_price_bid: U256,
}

/// Funds required to execute a teleportation
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredFunds {
    /// Amount of the native currency required, in wei
    pub native: U256,
    /// Amount of the L3 fee token required
    pub fee_token: U256,
}

/// A fully estimated L1 -> L2 retryable ticket, ready to be signed and sent to the inbox
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryableTicket {
    /// Address that pays for and refunds the ticket
    pub sender: Address,
    /// Destination of the L2 call
    pub to: Address,
    /// Value sent with the L2 call
    pub l2_call_value: U256,
    /// Max submission cost
    pub max_submission_cost: U256,
    /// L2 gas limit
    pub gas_limit: u64,
    /// L2 max fee per gas
    pub max_fee_per_gas: U256,
    /// Total amount of fee token the inbox pulls: submission, execution and call value
    pub token_total_fee_amount: U256,
    /// L2 calldata
    pub data: Bytes,
    /// Encoded `createRetryableTicket` call for the inbox
    pub calldata: Bytes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_params_partial_json() {
        let params: RetryableGasParams = serde_json::from_str(
            r#"{
                "l2l3TokenBridgeGasLimit": 300000,
                "l2l3TokenBridgeMaxSubmissionCost": "0x64",
                "l3GasPriceBid": "0x3b9aca00"
            }"#,
        )
        .unwrap();

        assert_eq!(params.l2l3_token_bridge_gas_limit, 300_000);
        assert_eq!(params.l2l3_token_bridge_max_submission_cost, U256::from(100));
        assert_eq!(params.l3_gas_price_bid, U256::from(1_000_000_000));
        assert_eq!(params.l1l2_token_bridge_gas_limit, 0);
        assert_eq!(params.l2_gas_price_bid, U256::ZERO);
    }
}
