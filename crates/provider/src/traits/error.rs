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

use alloy_transport::TransportError;

/// Result of a provider method call
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Error enumeration for the ChainClient trait
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// RPC error, including reverts reported by the node
    #[error(transparent)]
    Rpc(#[from] TransportError),
    /// A contract returned data that could not be decoded
    #[error("failed to decode contract return: {0}")]
    Decode(String),
    /// Internal errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
