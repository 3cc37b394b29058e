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

use std::marker::PhantomData;

use alloy_primitives::{Bytes, TxKind, U256};
use alloy_provider::Provider as AlloyProvider;
use alloy_rpc_types_eth::{TransactionInput, TransactionRequest};
use alloy_transport::Transport;
use anyhow::Context;
use tracing::instrument;

use crate::{ChainClient, EvmCall, ProviderResult};

/// Chain client implementation using [alloy-provider](https://github.com/alloy-rs/alloy-rs)
#[derive(Clone)]
pub struct AlloyChainClient<AP, T> {
    inner: AP,
    _marker: PhantomData<T>,
}

impl<AP, T> AlloyChainClient<AP, T> {
    /// Create a new `AlloyChainClient`
    pub fn new(inner: AP) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<AP, T> From<AP> for AlloyChainClient<AP, T>
where
    T: Transport + Clone,
    AP: AlloyProvider<T>,
{
    fn from(inner: AP) -> Self {
        Self::new(inner)
    }
}

fn to_request(call: &EvmCall) -> TransactionRequest {
    TransactionRequest {
        from: call.from,
        to: Some(TxKind::Call(call.to)),
        input: TransactionInput::new(call.data.clone()),
        ..Default::default()
    }
}

#[async_trait::async_trait]
impl<AP, T> ChainClient for AlloyChainClient<AP, T>
where
    T: Transport + Clone,
    AP: AlloyProvider<T>,
{
    #[instrument(skip_all)]
    async fn suggest_base_fee(&self) -> ProviderResult<U256> {
        Ok(U256::from(self.inner.get_gas_price().await?))
    }

    #[instrument(skip_all, fields(to = %call.to))]
    async fn estimate_gas(&self, call: &EvmCall) -> ProviderResult<u64> {
        let tx = to_request(call);
        let gas = self.inner.estimate_gas(&tx).await?;
        Ok(u64::try_from(gas).context("estimated gas overflows u64")?)
    }

    #[instrument(skip_all, fields(to = %call.to))]
    async fn call(&self, call: &EvmCall) -> ProviderResult<Bytes> {
        let tx = to_request(call);
        Ok(self.inner.call(&tx).await?)
    }
}
