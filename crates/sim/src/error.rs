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

use bifrost_provider::ProviderError;

/// Result type for retryable estimation
pub type EstimationResult<T> = Result<T, GasEstimationError>;

/// Error type for retryable fee and gas estimation
#[derive(Debug, thiserror::Error)]
pub enum GasEstimationError {
    /// A chain query failed
    #[error(transparent)]
    Provider(#[from] ProviderError),
    /// Structurally invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A computed value does not fit its type
    #[error("overflow computing {0}")]
    Overflow(&'static str),
    /// The fee token leg was requested before the L2 -> L3 leg was estimated
    #[error("L2 -> L3 gas limit and L3 gas price bid must be set to estimate the fee token leg")]
    MissingL3GasParams,
}
