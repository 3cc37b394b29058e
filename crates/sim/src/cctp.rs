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
use bifrost_contracts::cctp::TokenMessenger;
use bifrost_types::ChainDomain;
use bifrost_utils::eth::pad_address_to_bytes32;

use crate::{EstimationResult, GasEstimationError};

/// Encode a CCTP `TokenMessenger.depositForBurn` call minting `amount` of the burned
/// token to `recipient` on `destination_domain`.
pub fn deposit_for_burn_calldata(
    amount: U256,
    destination_domain: ChainDomain,
    recipient: Address,
    burn_token: Address,
) -> EstimationResult<Bytes> {
    if amount.is_zero() {
        return Err(GasEstimationError::InvalidInput(
            "burn amount must be greater than zero".to_string(),
        ));
    }

    let call = TokenMessenger::depositForBurnCall {
        amount,
        destinationDomain: destination_domain.into(),
        mintRecipient: pad_address_to_bytes32(recipient),
        burnToken: burn_token,
    };
    Ok(call.abi_encode().into())
}
