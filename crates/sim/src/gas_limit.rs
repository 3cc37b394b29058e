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
use alloy_sol_types::SolCall;
use bifrost_contracts::arbitrum::NodeInterface;
use bifrost_provider::{ChainClient, EvmCall};
use bifrost_types::constants::{NODE_INTERFACE_ADDRESS, ONE_ETHER};
use bifrost_utils::math;
use tracing::{debug, instrument};

use crate::{EstimationResult, GasEstimationError};

/// Retryable ticket to simulate on the destination chain
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RetryableGasRequest {
    /// Address submitting the ticket on the source chain
    pub sender: Address,
    /// Destination of the L2 call
    pub to: Address,
    /// Value sent with the L2 call
    pub l2_call_value: U256,
    /// Receives unused submission and execution fees
    pub excess_fee_refund_address: Address,
    /// Receives the call value if the ticket is cancelled or times out
    pub call_value_refund_address: Address,
    /// L2 calldata
    pub data: Bytes,
}

/// Estimate the gas limit of a retryable ticket on its destination chain.
///
/// Simulates `NodeInterface.estimateRetryableTicket` with a deposit of the call value
/// plus one ether, the same deposit the Arbitrum SDK estimator uses, then increases
/// the estimate by `percent_increase`. Errors from the chain are returned as is.
#[instrument(skip_all, fields(sender = %request.sender, to = %request.to))]
pub async fn calculate_retryable_gas_limit<C>(
    client: &C,
    request: &RetryableGasRequest,
    percent_increase: u32,
) -> EstimationResult<u64>
where
    C: ChainClient + ?Sized,
{
    let deposit = request
        .l2_call_value
        .checked_add(ONE_ETHER)
        .ok_or(GasEstimationError::Overflow("retryable deposit"))?;

    let call = NodeInterface::estimateRetryableTicketCall {
        sender: request.sender,
        deposit,
        to: request.to,
        l2CallValue: request.l2_call_value,
        excessFeeRefundAddress: request.excess_fee_refund_address,
        callValueRefundAddress: request.call_value_refund_address,
        data: request.data.clone(),
    };
    let estimate = client
        .estimate_gas(&EvmCall {
            from: Some(request.sender),
            to: NODE_INTERFACE_ADDRESS,
            data: call.abi_encode().into(),
        })
        .await?;

    let gas_limit = math::increase_by_percent(U256::from(estimate), percent_increase)
        .and_then(|buffered| u64::try_from(buffered).ok())
        .ok_or(GasEstimationError::Overflow("retryable gas limit"))?;
    debug!(estimate, gas_limit, "estimated retryable gas limit");

    Ok(gas_limit)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, bytes};
    use alloy_transport::TransportError;
    use bifrost_provider::{MockChainClient, ProviderError};

    use super::*;

    fn request() -> RetryableGasRequest {
        RetryableGasRequest {
            sender: address!("1000000000000000000000000000000000000001"),
            to: address!("2000000000000000000000000000000000000002"),
            l2_call_value: U256::from(5),
            excess_fee_refund_address: address!("3000000000000000000000000000000000000003"),
            call_value_refund_address: address!("4000000000000000000000000000000000000004"),
            data: bytes!("deadbeef"),
        }
    }

    #[tokio::test]
    async fn test_gas_limit_buffered() {
        let req = request();
        let expected = req.clone();

        let mut client = MockChainClient::default();
        client
            .expect_estimate_gas()
            .withf(move |call: &EvmCall| {
                let Ok(decoded) =
                    NodeInterface::estimateRetryableTicketCall::abi_decode(&call.data, true)
                else {
                    return false;
                };
                call.from == Some(expected.sender)
                    && call.to == NODE_INTERFACE_ADDRESS
                    && decoded.sender == expected.sender
                    && decoded.deposit == expected.l2_call_value + ONE_ETHER
                    && decoded.to == expected.to
                    && decoded.l2CallValue == expected.l2_call_value
                    && decoded.excessFeeRefundAddress == expected.excess_fee_refund_address
                    && decoded.callValueRefundAddress == expected.call_value_refund_address
                    && decoded.data == expected.data
            })
            .times(1)
            .returning(|_| Ok(100_000));

        let gas_limit = calculate_retryable_gas_limit(&client, &req, 100)
            .await
            .unwrap();
        assert_eq!(gas_limit, 200_000);
    }

    #[tokio::test]
    async fn test_gas_limit_error_propagated() {
        let mut client = MockChainClient::default();
        client
            .expect_estimate_gas()
            .times(1)
            .returning(|_| Err(TransportError::local_usage_str("execution reverted").into()));

        let err = calculate_retryable_gas_limit(&client, &request(), 100)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GasEstimationError::Provider(ProviderError::Rpc(_))
        ));
        assert!(err.to_string().contains("execution reverted"));
    }

    #[tokio::test]
    async fn test_gas_limit_overflow() {
        let mut client = MockChainClient::default();
        client.expect_estimate_gas().returning(|_| Ok(u64::MAX));

        let err = calculate_retryable_gas_limit(&client, &request(), 100)
            .await
            .unwrap_err();
        assert!(matches!(err, GasEstimationError::Overflow(_)));
    }
}
