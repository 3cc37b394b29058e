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

use alloy_primitives::{Address, U256};
use bifrost_types::ChainDomain;
use clap::Args;
use serde::Serialize;

use super::json;

#[derive(Debug, Args)]
pub(crate) struct CctpArgs {
    /// Amount of the token to burn
    #[arg(long)]
    amount: U256,

    /// Destination domain: 0 for Ethereum, 3 for Arbitrum
    #[arg(long)]
    domain: u32,

    /// Recipient of the minted tokens on the destination domain
    #[arg(long)]
    recipient: Address,

    /// Token to burn
    #[arg(long)]
    token: Address,

    /// CCTP TokenMessenger contract
    #[arg(long)]
    token_messenger: Address,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BurnCall {
    to: Address,
    destination_domain: String,
    calldata: String,
}

pub(crate) fn run(args: CctpArgs) -> anyhow::Result<()> {
    let domain = ChainDomain::try_from(args.domain)?;
    let calldata =
        bifrost_sim::deposit_for_burn_calldata(args.amount, domain, args.recipient, args.token)?;

    json::print_json(&BurnCall {
        to: args.token_messenger,
        destination_domain: domain.to_string(),
        calldata: const_hex::encode_prefixed(&calldata),
    })
}
