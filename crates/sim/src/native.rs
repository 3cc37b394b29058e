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
use bifrost_contracts::arbitrum::ERC20Inbox;
use bifrost_provider::ChainClient;
use bifrost_types::{RetryableSettings, RetryableTicket};
use tracing::{debug, instrument};

use crate::{
    calculate_retryable_gas_limit, calculate_retryable_submission_fee, EstimationResult,
    GasEstimationError, RetryableGasRequest,
};

/// Build a single hop L1 -> L2 retryable ticket paid in the L2 native token.
///
/// `sender` submits the ticket and receives both refunds. The returned ticket holds the
/// encoded `ERC20Inbox.createRetryableTicket` call, ready to be signed and sent to the
/// inbox, along with every number used to build it.
#[instrument(skip_all, fields(sender = %sender, to = %to))]
pub async fn native_token_bridge_calldata<L1, L2>(
    l1_client: &L1,
    l2_client: &L2,
    sender: Address,
    to: Address,
    l2_call_value: U256,
    data: Bytes,
    settings: &RetryableSettings,
) -> EstimationResult<RetryableTicket>
where
    L1: ChainClient + ?Sized,
    L2: ChainClient + ?Sized,
{
    let l1_base_fee = l1_client.suggest_base_fee().await?;
    let l2_base_fee = l2_client.suggest_base_fee().await?;

    let request = RetryableGasRequest {
        sender,
        to,
        l2_call_value,
        excess_fee_refund_address: sender,
        call_value_refund_address: sender,
        data: data.clone(),
    };
    let gas_limit = calculate_retryable_gas_limit(
        l2_client,
        &request,
        settings.gas_limit_percent_increase,
    )
    .await?;
    let max_submission_cost = calculate_retryable_submission_fee(
        &data,
        l1_base_fee,
        settings.submission_fee_percent_increase,
    )?;

    let token_total_fee_amount = U256::from(gas_limit)
        .checked_mul(l2_base_fee)
        .and_then(|execution| execution.checked_add(max_submission_cost))
        .and_then(|fees| fees.checked_add(l2_call_value))
        .ok_or(GasEstimationError::Overflow("token total fee amount"))?;
    debug!(
        %l1_base_fee,
        %l2_base_fee,
        gas_limit,
        %max_submission_cost,
        %token_total_fee_amount,
        "estimated native token bridge retryable"
    );

    let calldata = ERC20Inbox::createRetryableTicketCall {
        to,
        l2CallValue: l2_call_value,
        maxSubmissionCost: max_submission_cost,
        excessFeeRefundAddress: sender,
        callValueRefundAddress: sender,
        gasLimit: U256::from(gas_limit),
        maxFeePerGas: l2_base_fee,
        tokenTotalFeeAmount: token_total_fee_amount,
        data: data.clone(),
    }
    .abi_encode();

    Ok(RetryableTicket {
        sender,
        to,
        l2_call_value,
        max_submission_cost,
        gas_limit,
        max_fee_per_gas: l2_base_fee,
        token_total_fee_amount,
        data,
        calldata: calldata.into(),
    })
}
