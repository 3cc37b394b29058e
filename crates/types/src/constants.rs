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

//! Protocol constants for retryable tickets

use alloy_primitives::{address, Address, U256};
pub use bifrost_utils::eth::L1_TO_L2_ALIAS_OFFSET;

/// Address of the Arbitrum `NodeInterface` precompile.
///
/// This contract does not exist on-chain, it is a virtual interface only reachable
/// through `eth_call` and `eth_estimateGas`.
pub const NODE_INTERFACE_ADDRESS: Address = address!("00000000000000000000000000000000000000C8");

/// One unit of the native currency (1 ether, in wei).
///
/// Added to the L2 call value as the deposit when estimating a retryable, the same
/// safety deposit the Arbitrum SDK uses:
/// https://github.com/OffchainLabs/arbitrum-sdk/blob/0da65020438fc3e46728ea182f1b4dcf04e3cb7f/src/lib/message/L1ToL2MessageGasEstimator.ts#L154
pub const ONE_ETHER: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Fixed part of the retryable submission fee multiplier.
///
/// From https://github.com/OffchainLabs/nitro-contracts/blob/main/src/bridge/Inbox.sol#L323
pub const SUBMISSION_FEE_BASE_MULTIPLIER: u64 = 1400;

/// Per calldata byte part of the retryable submission fee multiplier.
pub const SUBMISSION_FEE_PER_BYTE_MULTIPLIER: u64 = 6;

/// Default percent increase applied to retryable submission fees
pub const DEFAULT_SUBMISSION_FEE_PERCENT_INCREASE: u32 = 300;

/// Default percent increase applied to retryable gas limits
pub const DEFAULT_GAS_LIMIT_PERCENT_INCREASE: u32 = 100;
