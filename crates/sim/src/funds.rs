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

use alloy_primitives::U256;
use bifrost_types::{RequiredFunds, RetryableGasParams, TeleportationType};

use crate::{EstimationResult, GasEstimationError};

/// Total cost of a single retryable: its submission cost plus its execution budget
pub(crate) fn retryable_cost(
    max_submission_cost: U256,
    gas_price_bid: U256,
    gas_limit: u64,
) -> EstimationResult<U256> {
    gas_price_bid
        .checked_mul(U256::from(gas_limit))
        .and_then(|execution| execution.checked_add(max_submission_cost))
        .ok_or(GasEstimationError::Overflow("retryable cost"))
}

/// Cost of the L2 -> L3 token bridge retryable, paid with the L3 gas price bid
pub(crate) fn l2l3_token_bridge_cost(gas_params: &RetryableGasParams) -> EstimationResult<U256> {
    retryable_cost(
        gas_params.l2l3_token_bridge_max_submission_cost,
        gas_params.l3_gas_price_bid,
        gas_params.l2l3_token_bridge_gas_limit,
    )
}

/// Calculate the native currency and fee token a teleportation requires.
///
/// Every teleportation sends the forwarder factory and token bridge retryables to L2,
/// paid in the native currency. The L2 -> L3 retryable is paid in the native currency
/// for `Standard`, and in the fee token otherwise. `NonFeeTokenToCustomFee` also pays
/// for the retryable that brings the fee token to L2, unless no L3 message is sent.
pub fn calculate_required_funds(
    gas_params: &RetryableGasParams,
    teleportation_type: TeleportationType,
) -> EstimationResult<RequiredFunds> {
    let l1l2_fee_token_bridge_cost = retryable_cost(
        gas_params.l1l2_fee_token_bridge_max_submission_cost,
        gas_params.l2_gas_price_bid,
        gas_params.l1l2_fee_token_bridge_gas_limit,
    )?;
    let l1l2_token_bridge_cost = retryable_cost(
        gas_params.l1l2_token_bridge_max_submission_cost,
        gas_params.l2_gas_price_bid,
        gas_params.l1l2_token_bridge_gas_limit,
    )?;
    let l2_forwarder_factory_cost = retryable_cost(
        gas_params.l2_forwarder_factory_max_submission_cost,
        gas_params.l2_gas_price_bid,
        gas_params.l2_forwarder_factory_gas_limit,
    )?;
    let l2l3_token_bridge_cost = l2l3_token_bridge_cost(gas_params)?;

    let native = l2_forwarder_factory_cost
        .checked_add(l1l2_token_bridge_cost)
        .ok_or(GasEstimationError::Overflow("required native funds"))?;

    let funds = match teleportation_type {
        TeleportationType::Standard => RequiredFunds {
            native: native
                .checked_add(l2l3_token_bridge_cost)
                .ok_or(GasEstimationError::Overflow("required native funds"))?,
            fee_token: U256::ZERO,
        },
        TeleportationType::OnlyCustomFee => RequiredFunds {
            native,
            fee_token: l2l3_token_bridge_cost,
        },
        TeleportationType::NonFeeTokenToCustomFee if !l2l3_token_bridge_cost.is_zero() => {
            RequiredFunds {
                native: native
                    .checked_add(l1l2_fee_token_bridge_cost)
                    .ok_or(GasEstimationError::Overflow("required native funds"))?,
                fee_token: l2l3_token_bridge_cost,
            }
        }
        TeleportationType::NonFeeTokenToCustomFee => RequiredFunds {
            native,
            fee_token: U256::ZERO,
        },
    };

    Ok(funds)
}
