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

//! Traits for the provider module.

mod chain_client;
#[cfg(any(test, feature = "test-utils"))]
pub use chain_client::MockChainClient;
pub use chain_client::{read_contract, ChainClient, EvmCall};

mod error;
pub use error::{ProviderError, ProviderResult};
