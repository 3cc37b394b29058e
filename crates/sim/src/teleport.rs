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
use bifrost_contracts::arbitrum::{L1OrbitCustomGateway, L1OrbitGatewayRouter};
use bifrost_provider::{read_contract, ChainClient};
use bifrost_types::{
    RequiredFunds, RetryableGasParams, RetryableSettings, TeleportParams, TeleportationType,
};
use bifrost_utils::eth::apply_l1_to_l2_alias;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    calculate_required_funds, calculate_retryable_gas_limit, calculate_retryable_submission_fee,
    funds::l2l3_token_bridge_cost, EstimationResult, GasEstimationError, RetryableGasRequest,
};

/// Contracts and accounts taking part in a teleportation
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TeleportAddresses {
    /// L1 teleporter contract, the source of every L1 -> L2 token transfer
    pub teleporter: Address,
    /// Per request L2 forwarder, the recipient of every L1 -> L2 token transfer
    pub l2_forwarder: Address,
    /// L1 account signing the teleportation
    pub signer: Address,
}

/// Completed gas parameters of a teleportation and the funds it requires
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeleportationPlan {
    /// Kind of teleportation the funds were computed for
    pub teleportation_type: TeleportationType,
    /// Gas parameters with the L1 -> L2 legs filled in
    pub gas_params: RetryableGasParams,
    /// Funds required to execute the teleportation
    pub required_funds: RequiredFunds,
}

/// Estimates the L1 -> L2 retryables of an L1 -> L2 -> L3 teleportation.
///
/// Gateways and outbound calldata are read from L1, gas limits are simulated on L2.
#[derive(Debug)]
pub struct TeleportationGasPlanner<L1, L2> {
    l1_client: L1,
    l2_client: L2,
    addresses: TeleportAddresses,
    settings: RetryableSettings,
}

impl<L1, L2> TeleportationGasPlanner<L1, L2>
where
    L1: ChainClient,
    L2: ChainClient,
{
    /// Create a new planner
    pub fn new(
        l1_client: L1,
        l2_client: L2,
        addresses: TeleportAddresses,
        settings: RetryableSettings,
    ) -> Self {
        Self {
            l1_client,
            l2_client,
            addresses,
            settings,
        }
    }

    /// Estimate the gas limit and max submission cost of the retryable bridging the
    /// teleported token to L2.
    #[instrument(skip_all, fields(token = %params.l1_token))]
    pub async fn l1l2_token_bridge_gas_params(
        &self,
        params: &TeleportParams,
        l1_base_fee: U256,
    ) -> EstimationResult<(u64, U256)> {
        let gateway = self.gateway(params.l1l2_router, params.l1_token).await?;
        let outbound_calldata = self
            .outbound_calldata(gateway, params.l1_token, params.amount)
            .await?;
        let max_submission_cost = calculate_retryable_submission_fee(
            &outbound_calldata,
            l1_base_fee,
            self.settings.submission_fee_percent_increase,
        )?;

        // The token gateway knows its L2 counterpart, read it from L1.
        let counterpart_gateway = read_contract(
            &self.l1_client,
            gateway,
            L1OrbitCustomGateway::counterpartGatewayCall {},
        )
        .await?
        ._0;
        debug!(%gateway, %counterpart_gateway, %max_submission_cost, "resolved token gateway");

        let request = RetryableGasRequest {
            sender: gateway,
            to: counterpart_gateway,
            l2_call_value: U256::ZERO,
            excess_fee_refund_address: self.addresses.l2_forwarder,
            call_value_refund_address: apply_l1_to_l2_alias(self.addresses.teleporter),
            data: outbound_calldata,
        };
        let gas_limit = calculate_retryable_gas_limit(
            &self.l2_client,
            &request,
            self.settings.gas_limit_percent_increase,
        )
        .await?;

        Ok((gas_limit, max_submission_cost))
    }

    /// Estimate the gas limit and max submission cost of the retryable bridging the L3
    /// fee token to L2.
    ///
    /// The amount bridged is the L3 execution budget, so the L2 -> L3 gas limit and the
    /// L3 gas price bid must already be set in `params.gas_params`.
    #[instrument(skip_all, fields(fee_token = %params.l3_fee_token_l1_addr))]
    pub async fn l1l2_fee_token_bridge_gas_params(
        &self,
        params: &TeleportParams,
        l1_base_fee: U256,
    ) -> EstimationResult<(u64, U256)> {
        let fee_token = params.l3_fee_token_l1_addr;
        if fee_token.is_zero() {
            return Err(GasEstimationError::InvalidInput(
                "teleportation has no L3 fee token".to_string(),
            ));
        }
        let gas_params = &params.gas_params;
        if gas_params.l2l3_token_bridge_gas_limit == 0 || gas_params.l3_gas_price_bid.is_zero() {
            return Err(GasEstimationError::MissingL3GasParams);
        }
        let fee_amount = U256::from(gas_params.l2l3_token_bridge_gas_limit)
            .checked_mul(gas_params.l3_gas_price_bid)
            .ok_or(GasEstimationError::Overflow("L3 fee amount"))?;

        // The fee token moves through the bridged token's gateway.
        let gateway = self.gateway(params.l1l2_router, params.l1_token).await?;
        let outbound_calldata = self
            .outbound_calldata(gateway, fee_token, fee_amount)
            .await?;
        let max_submission_cost = calculate_retryable_submission_fee(
            &outbound_calldata,
            l1_base_fee,
            self.settings.submission_fee_percent_increase,
        )?;

        // Unlike the token leg, the fee token gateway's L2 counterpart is its aliased
        // address and is never read from L1.
        let counterpart_gateway = apply_l1_to_l2_alias(gateway);
        debug!(%gateway, %counterpart_gateway, %fee_amount, %max_submission_cost, "resolved fee token gateway");

        let request = RetryableGasRequest {
            sender: gateway,
            to: counterpart_gateway,
            l2_call_value: U256::ZERO,
            excess_fee_refund_address: counterpart_gateway,
            call_value_refund_address: apply_l1_to_l2_alias(self.addresses.signer),
            data: outbound_calldata,
        };
        let gas_limit = calculate_retryable_gas_limit(
            &self.l2_client,
            &request,
            self.settings.gas_limit_percent_increase,
        )
        .await?;

        Ok((gas_limit, max_submission_cost))
    }

    /// Fill in the L1 -> L2 legs of `params.gas_params` and compute the required funds.
    ///
    /// The L1 base fee is read once and shared by every leg. The fee token leg is only
    /// estimated for `NonFeeTokenToCustomFee` teleportations that send an L3 message.
    #[instrument(skip_all, fields(token = %params.l1_token, amount = %params.amount))]
    pub async fn plan(&self, params: &TeleportParams) -> EstimationResult<TeleportationPlan> {
        let teleportation_type = params.teleportation_type();
        let l1_base_fee = self.l1_client.suggest_base_fee().await?;
        debug!(%teleportation_type, %l1_base_fee, "planning teleportation");

        let mut gas_params = params.gas_params.clone();

        let (gas_limit, max_submission_cost) =
            self.l1l2_token_bridge_gas_params(params, l1_base_fee).await?;
        gas_params.l1l2_token_bridge_gas_limit = gas_limit;
        gas_params.l1l2_token_bridge_max_submission_cost = max_submission_cost;

        if teleportation_type == TeleportationType::NonFeeTokenToCustomFee
            && !l2l3_token_bridge_cost(&gas_params)?.is_zero()
        {
            let (gas_limit, max_submission_cost) = self
                .l1l2_fee_token_bridge_gas_params(params, l1_base_fee)
                .await?;
            gas_params.l1l2_fee_token_bridge_gas_limit = gas_limit;
            gas_params.l1l2_fee_token_bridge_max_submission_cost = max_submission_cost;
        }

        let required_funds = calculate_required_funds(&gas_params, teleportation_type)?;
        debug!(native = %required_funds.native, fee_token = %required_funds.fee_token, "required funds");

        Ok(TeleportationPlan {
            teleportation_type,
            gas_params,
            required_funds,
        })
    }

    async fn gateway(&self, router: Address, token: Address) -> EstimationResult<Address> {
        Ok(read_contract(
            &self.l1_client,
            router,
            L1OrbitGatewayRouter::getGatewayCall { token },
        )
        .await?
        .gateway)
    }

    async fn outbound_calldata(
        &self,
        gateway: Address,
        token: Address,
        amount: U256,
    ) -> EstimationResult<Bytes> {
        Ok(read_contract(
            &self.l1_client,
            gateway,
            L1OrbitCustomGateway::getOutboundCalldataCall {
                token,
                from: self.addresses.teleporter,
                to: self.addresses.l2_forwarder,
                amount,
                data: Bytes::new(),
            },
        )
        .await?
        .outboundCalldata)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;
    use alloy_sol_types::SolCall;
    use alloy_transport::TransportError;
    use bifrost_contracts::arbitrum::NodeInterface;
    use bifrost_provider::{EvmCall, MockChainClient, ProviderError, ProviderResult};

    use super::*;

    const ROUTER: Address = address!("0100000000000000000000000000000000000001");
    const TOKEN: Address = address!("0200000000000000000000000000000000000002");
    const FEE_TOKEN: Address = address!("0300000000000000000000000000000000000003");
    const TOKEN_GATEWAY: Address = address!("0400000000000000000000000000000000000004");
    const COUNTERPART_GATEWAY: Address = address!("0600000000000000000000000000000000000006");
    const TELEPORTER: Address = address!("0700000000000000000000000000000000000007");
    const L2_FORWARDER: Address = address!("0800000000000000000000000000000000000008");
    const SIGNER: Address = address!("0900000000000000000000000000000000000009");

    const L1_BASE_FEE: u64 = 10;
    const OUTBOUND_CALLDATA_LEN: usize = 100;
    // (1400 + 6 * 100) * 10, plus 300%
    const SUBMISSION_COST: u64 = 80_000;
    const L2_ESTIMATE: u64 = 50_000;
    // plus 100%
    const GAS_LIMIT: u64 = 100_000;

    fn addresses() -> TeleportAddresses {
        TeleportAddresses {
            teleporter: TELEPORTER,
            l2_forwarder: L2_FORWARDER,
            signer: SIGNER,
        }
    }

    fn params(fee_token: Address) -> TeleportParams {
        TeleportParams {
            l1_token: TOKEN,
            l3_fee_token_l1_addr: fee_token,
            l1l2_router: ROUTER,
            amount: U256::from(TOKEN_AMOUNT),
            gas_params: RetryableGasParams {
                l2_forwarder_factory_gas_limit: 10,
                l2_forwarder_factory_max_submission_cost: U256::from(5),
                l2l3_token_bridge_gas_limit: 1_000,
                l2l3_token_bridge_max_submission_cost: U256::from(7),
                l2_gas_price_bid: U256::from(2),
                l3_gas_price_bid: U256::from(3),
                ..Default::default()
            },
        }
    }

    // Teleported amount and the L3 execution budget: l2l3 gas limit * l3 gas price bid
    const TOKEN_AMOUNT: u64 = 1_000_000;
    const FEE_AMOUNT: u64 = 3_000;

    fn outbound_token(call: &EvmCall) -> Option<Address> {
        (call.data[..4] == L1OrbitCustomGateway::getOutboundCalldataCall::SELECTOR).then(|| {
            L1OrbitCustomGateway::getOutboundCalldataCall::abi_decode(&call.data, true)
                .unwrap()
                .token
        })
    }

    // Serves the router and the token gateway on L1, asserting the arguments of every read.
    // Both legs resolve the gateway of the teleported token.
    fn l1_call(call: &EvmCall) -> ProviderResult<Bytes> {
        let selector = &call.data[..4];
        if selector == L1OrbitGatewayRouter::getGatewayCall::SELECTOR {
            assert_eq!(call.to, ROUTER);
            let decoded =
                L1OrbitGatewayRouter::getGatewayCall::abi_decode(&call.data, true).unwrap();
            assert_eq!(decoded.token, TOKEN);
            Ok(L1OrbitGatewayRouter::getGatewayCall::abi_encode_returns(&(TOKEN_GATEWAY,)).into())
        } else if selector == L1OrbitCustomGateway::getOutboundCalldataCall::SELECTOR {
            assert_eq!(call.to, TOKEN_GATEWAY);
            let decoded =
                L1OrbitCustomGateway::getOutboundCalldataCall::abi_decode(&call.data, true)
                    .unwrap();
            let expected_amount = if decoded.token == FEE_TOKEN {
                FEE_AMOUNT
            } else {
                assert_eq!(decoded.token, TOKEN);
                TOKEN_AMOUNT
            };
            assert_eq!(decoded.from, TELEPORTER);
            assert_eq!(decoded.to, L2_FORWARDER);
            assert_eq!(decoded.amount, U256::from(expected_amount));
            assert!(decoded.data.is_empty());
            let outbound = Bytes::from(vec![0xaa; OUTBOUND_CALLDATA_LEN]);
            Ok(L1OrbitCustomGateway::getOutboundCalldataCall::abi_encode_returns(&(outbound,)).into())
        } else if selector == L1OrbitCustomGateway::counterpartGatewayCall::SELECTOR {
            assert_eq!(call.to, TOKEN_GATEWAY);
            Ok(
                L1OrbitCustomGateway::counterpartGatewayCall::abi_encode_returns(&(
                    COUNTERPART_GATEWAY,
                ))
                .into(),
            )
        } else {
            panic!("unexpected L1 call {call:?}");
        }
    }


    fn decode_retryable(call: &EvmCall) -> NodeInterface::estimateRetryableTicketCall {
        NodeInterface::estimateRetryableTicketCall::abi_decode(&call.data, true).unwrap()
    }

    #[tokio::test]
    async fn test_token_bridge_gas_params() {
        let params = params(Address::ZERO);
        let mut l1 = MockChainClient::default();
        l1.expect_call().times(3).returning(l1_call);

        let mut l2 = MockChainClient::default();
        l2.expect_estimate_gas()
            .withf(|call: &EvmCall| {
                let retryable = decode_retryable(call);
                call.from == Some(TOKEN_GATEWAY)
                    && retryable.sender == TOKEN_GATEWAY
                    && retryable.to == COUNTERPART_GATEWAY
                    && retryable.l2CallValue.is_zero()
                    && retryable.excessFeeRefundAddress == L2_FORWARDER
                    && retryable.callValueRefundAddress == apply_l1_to_l2_alias(TELEPORTER)
                    && retryable.data.len() == OUTBOUND_CALLDATA_LEN
            })
            .times(1)
            .returning(|_| Ok(L2_ESTIMATE));

        let planner =
            TeleportationGasPlanner::new(l1, l2, addresses(), RetryableSettings::default());
        let (gas_limit, max_submission_cost) = planner
            .l1l2_token_bridge_gas_params(&params, U256::from(L1_BASE_FEE))
            .await
            .unwrap();

        assert_eq!(gas_limit, GAS_LIMIT);
        assert_eq!(max_submission_cost, U256::from(SUBMISSION_COST));
    }

    #[tokio::test]
    async fn test_fee_token_bridge_gas_params() {
        let params = params(FEE_TOKEN);

        // router lookup and outbound calldata only, the counterpart is never read
        let mut l1 = MockChainClient::default();
        l1.expect_call().times(2).returning(|call| {
            if let Some(token) = outbound_token(call) {
                assert_eq!(token, FEE_TOKEN);
            }
            l1_call(call)
        });

        let mut l2 = MockChainClient::default();
        l2.expect_estimate_gas()
            .withf(|call: &EvmCall| {
                let retryable = decode_retryable(call);
                let aliased_gateway = apply_l1_to_l2_alias(TOKEN_GATEWAY);
                call.from == Some(TOKEN_GATEWAY)
                    && retryable.sender == TOKEN_GATEWAY
                    && retryable.to == aliased_gateway
                    && retryable.l2CallValue.is_zero()
                    && retryable.excessFeeRefundAddress == aliased_gateway
                    && retryable.callValueRefundAddress == apply_l1_to_l2_alias(SIGNER)
            })
            .times(1)
            .returning(|_| Ok(L2_ESTIMATE));

        let planner =
            TeleportationGasPlanner::new(l1, l2, addresses(), RetryableSettings::default());
        let (gas_limit, max_submission_cost) = planner
            .l1l2_fee_token_bridge_gas_params(&params, U256::from(L1_BASE_FEE))
            .await
            .unwrap();

        assert_eq!(gas_limit, GAS_LIMIT);
        assert_eq!(max_submission_cost, U256::from(SUBMISSION_COST));
    }

    #[tokio::test]
    async fn test_fee_token_bridge_requires_l3_params() {
        let mut params = params(FEE_TOKEN);
        params.gas_params.l3_gas_price_bid = U256::ZERO;

        let planner = TeleportationGasPlanner::new(
            MockChainClient::default(),
            MockChainClient::default(),
            addresses(),
            RetryableSettings::default(),
        );
        let err = planner
            .l1l2_fee_token_bridge_gas_params(&params, U256::from(L1_BASE_FEE))
            .await
            .unwrap_err();
        assert!(matches!(err, GasEstimationError::MissingL3GasParams));

        params.gas_params.l3_gas_price_bid = U256::from(3);
        params.gas_params.l2l3_token_bridge_gas_limit = 0;
        let err = planner
            .l1l2_fee_token_bridge_gas_params(&params, U256::from(L1_BASE_FEE))
            .await
            .unwrap_err();
        assert!(matches!(err, GasEstimationError::MissingL3GasParams));
    }

    #[tokio::test]
    async fn test_fee_token_bridge_requires_fee_token() {
        let planner = TeleportationGasPlanner::new(
            MockChainClient::default(),
            MockChainClient::default(),
            addresses(),
            RetryableSettings::default(),
        );
        let err = planner
            .l1l2_fee_token_bridge_gas_params(&params(Address::ZERO), U256::from(L1_BASE_FEE))
            .await
            .unwrap_err();
        assert!(matches!(err, GasEstimationError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_token_bridge_gateway_error() {
        let mut l1 = MockChainClient::default();
        l1.expect_call()
            .times(1)
            .returning(|_| Err(TransportError::local_usage_str("connection refused").into()));

        let planner = TeleportationGasPlanner::new(
            l1,
            MockChainClient::default(),
            addresses(),
            RetryableSettings::default(),
        );
        let err = planner
            .l1l2_token_bridge_gas_params(&params(Address::ZERO), U256::from(L1_BASE_FEE))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GasEstimationError::Provider(ProviderError::Rpc(_))
        ));
    }

    #[tokio::test]
    async fn test_plan_non_fee_token_to_custom_fee() {
        let params = params(FEE_TOKEN);

        let mut l1 = MockChainClient::default();
        l1.expect_suggest_base_fee()
            .times(1)
            .returning(|| Ok(U256::from(L1_BASE_FEE)));
        // token leg: router, outbound calldata, counterpart; fee token leg: router, outbound calldata
        l1.expect_call().times(5).returning(l1_call);

        let mut l2 = MockChainClient::default();
        l2.expect_estimate_gas()
            .withf(|call: &EvmCall| call.from == Some(TOKEN_GATEWAY))
            .times(2)
            .returning(|_| Ok(L2_ESTIMATE));

        let planner =
            TeleportationGasPlanner::new(l1, l2, addresses(), RetryableSettings::default());
        let plan = planner.plan(&params).await.unwrap();

        assert_eq!(
            plan.teleportation_type,
            TeleportationType::NonFeeTokenToCustomFee
        );
        assert_eq!(plan.gas_params.l1l2_token_bridge_gas_limit, GAS_LIMIT);
        assert_eq!(
            plan.gas_params.l1l2_token_bridge_max_submission_cost,
            U256::from(SUBMISSION_COST)
        );
        assert_eq!(plan.gas_params.l1l2_fee_token_bridge_gas_limit, GAS_LIMIT);
        assert_eq!(
            plan.gas_params.l1l2_fee_token_bridge_max_submission_cost,
            U256::from(SUBMISSION_COST)
        );
        // forwarder 5 + 10 * 2, token and fee token legs 80000 + 100000 * 2 each
        assert_eq!(plan.required_funds.native, U256::from(560_025));
        // l2l3 7 + 1000 * 3
        assert_eq!(plan.required_funds.fee_token, U256::from(3_007));
    }

    #[tokio::test]
    async fn test_plan_standard_skips_fee_token_leg() {
        let params = params(Address::ZERO);

        let mut l1 = MockChainClient::default();
        l1.expect_suggest_base_fee()
            .times(1)
            .returning(|| Ok(U256::from(L1_BASE_FEE)));
        l1.expect_call()
            .times(3)
            .returning(l1_call);

        let mut l2 = MockChainClient::default();
        l2.expect_estimate_gas()
            .times(1)
            .returning(|_| Ok(L2_ESTIMATE));

        let planner =
            TeleportationGasPlanner::new(l1, l2, addresses(), RetryableSettings::default());
        let plan = planner.plan(&params).await.unwrap();

        assert_eq!(plan.teleportation_type, TeleportationType::Standard);
        assert_eq!(plan.gas_params.l1l2_fee_token_bridge_gas_limit, 0);
        // forwarder 25, token 280000, l2l3 3007
        assert_eq!(plan.required_funds.native, U256::from(283_032));
        assert_eq!(plan.required_funds.fee_token, U256::ZERO);
    }

    #[tokio::test]
    async fn test_plan_base_fee_error() {
        let mut l1 = MockChainClient::default();
        l1.expect_suggest_base_fee()
            .times(1)
            .returning(|| Err(ProviderError::Decode("bad gas price".to_string())));

        let planner = TeleportationGasPlanner::new(
            l1,
            MockChainClient::default(),
            addresses(),
            RetryableSettings::default(),
        );
        let err = planner.plan(&params(FEE_TOKEN)).await.unwrap_err();
        assert!(matches!(
            err,
            GasEstimationError::Provider(ProviderError::Decode(_))
        ));
    }
}
