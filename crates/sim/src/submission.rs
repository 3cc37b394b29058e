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
use bifrost_types::constants::{
    SUBMISSION_FEE_BASE_MULTIPLIER, SUBMISSION_FEE_PER_BYTE_MULTIPLIER,
};
use bifrost_utils::math;

use crate::{EstimationResult, GasEstimationError};

/// Calculate the max submission cost of a retryable carrying `calldata`.
///
/// The inbox charges `(1400 + 6 * len(calldata)) * base_fee`, see
/// https://github.com/OffchainLabs/nitro-contracts/blob/main/src/bridge/Inbox.sol#L323
/// The result is increased by `percent_increase` to absorb base fee movement
/// before the ticket lands.
pub fn calculate_retryable_submission_fee(
    calldata: &[u8],
    base_fee: U256,
    percent_increase: u32,
) -> EstimationResult<U256> {
    let multiplier = u64::try_from(calldata.len())
        .ok()
        .and_then(|len| len.checked_mul(SUBMISSION_FEE_PER_BYTE_MULTIPLIER))
        .and_then(|per_byte| per_byte.checked_add(SUBMISSION_FEE_BASE_MULTIPLIER))
        .ok_or(GasEstimationError::Overflow("submission fee multiplier"))?;

    let fee = U256::from(multiplier)
        .checked_mul(base_fee)
        .ok_or(GasEstimationError::Overflow("submission fee"))?;

    math::increase_by_percent(fee, percent_increase)
        .ok_or(GasEstimationError::Overflow("buffered submission fee"))
}
