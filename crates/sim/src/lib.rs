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

#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]
//! Fee, gas and funds estimation for Arbitrum retryable tickets.
//!
//! Includes implementations for:
//!
//! - Retryable submission fee calculation
//! - Retryable gas limit estimation through the `NodeInterface` precompile
//! - Gas planning for L1 -> L2 -> L3 teleportations
//! - Aggregation of the funds a teleportation requires
//! - Single hop native token bridge and CCTP burn calldata

mod cctp;
pub use cctp::deposit_for_burn_calldata;

mod error;
pub use error::{EstimationResult, GasEstimationError};

mod funds;
pub use funds::calculate_required_funds;

mod gas_limit;
pub use gas_limit::{calculate_retryable_gas_limit, RetryableGasRequest};

mod native;
pub use native::native_token_bridge_calldata;

mod submission;
pub use submission::calculate_retryable_submission_fee;

mod teleport;
pub use teleport::{TeleportAddresses, TeleportationGasPlanner, TeleportationPlan};
