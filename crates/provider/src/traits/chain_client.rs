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

//! Trait for the chain queries the retryable gas engine depends on.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::error::{ProviderError, ProviderResult};

/// A call simulated against a chain, never broadcast
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EvmCall {
    /// The caller, if the call depends on it
    pub from: Option<Address>,
    /// The address to call
    pub to: Address,
    /// Call data
    pub data: Bytes,
}

/// Trait for querying a single chain.
///
/// Implementations hold no state the engine relies on: every method is a fresh
/// query, and errors are returned as is without retries.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait::async_trait]
pub trait ChainClient: Send + Sync {
    /// Get the base fee currently suggested by the node
    async fn suggest_base_fee(&self) -> ProviderResult<U256>;

    /// Estimate the gas used by a call via `eth_estimateGas`
    async fn estimate_gas(&self, call: &EvmCall) -> ProviderResult<u64>;

    /// Execute a read-only call via `eth_call`
    async fn call(&self, call: &EvmCall) -> ProviderResult<Bytes>;
}

/// Call a view function on a contract and decode its return value
pub async fn read_contract<C, P>(client: &P, address: Address, call: C) -> ProviderResult<C::Return>
where
    C: SolCall + Send,
    P: ChainClient + ?Sized,
{
    let request = EvmCall {
        from: None,
        to: address,
        data: call.abi_encode().into(),
    };
    let ret = client.call(&request).await?;

    C::abi_decode_returns(&ret, true)
        .map_err(|e| ProviderError::Decode(format!("{} on {address}: {e}", C::SIGNATURE)))
}
