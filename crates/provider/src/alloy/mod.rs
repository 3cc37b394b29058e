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

use std::time::Duration;

use alloy_provider::{Provider as AlloyProvider, ProviderBuilder};
use alloy_rpc_client::RpcClient;
use alloy_transport_http::Http;
use anyhow::Context;
use reqwest::Client;
use url::Url;

use crate::ChainClient;

pub(crate) mod chain_client;
use chain_client::AlloyChainClient;

/// Create a new alloy chain client from a given RPC URL
pub fn new_alloy_chain_client(
    rpc_url: &str,
    provider_client_timeout_seconds: u64,
) -> anyhow::Result<impl ChainClient + Clone> {
    let provider = new_alloy_provider(rpc_url, provider_client_timeout_seconds)?;
    Ok(AlloyChainClient::<_, Http<Client>>::new(provider))
}

/// Create a new alloy provider from a given RPC URL.
///
/// Requests time out after `provider_client_timeout_seconds` and are never retried.
pub fn new_alloy_provider(
    rpc_url: &str,
    provider_client_timeout_seconds: u64,
) -> anyhow::Result<impl AlloyProvider<Http<Client>> + Clone> {
    let url = Url::parse(rpc_url).context("invalid rpc url")?;
    let http_client = Client::builder()
        .timeout(Duration::from_secs(provider_client_timeout_seconds))
        .build()
        .context("failed to build http client")?;
    let transport = Http::with_client(http_client, url);
    let client = RpcClient::new(transport, false);
    let provider = ProviderBuilder::new().on_client(client);
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rpc_url() {
        assert!(new_alloy_provider("not a url", 10).is_err());
        assert!(new_alloy_chain_client("localhost:8545", 10).is_err());
    }

    #[test]
    fn test_valid_rpc_url() {
        assert!(new_alloy_provider("http://localhost:8545", 10).is_ok());
    }
}
