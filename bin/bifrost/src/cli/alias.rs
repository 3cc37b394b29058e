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

use alloy_primitives::Address;
use anyhow::Context;
use bifrost_utils::eth::{address_from_slice, apply_l1_to_l2_alias};
use clap::Args;
use serde::Serialize;

use super::json;

#[derive(Debug, Args)]
pub(crate) struct AliasArgs {
    /// Hex encoded L1 address
    #[arg(long)]
    address: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AliasedAddress {
    l1_address: Address,
    l2_address: Address,
}

pub(crate) fn run(args: AliasArgs) -> anyhow::Result<()> {
    json::print_json(&alias(&args.address)?)
}

fn alias(address: &str) -> anyhow::Result<AliasedAddress> {
    let bytes = const_hex::decode(address).context("address is not valid hex")?;
    let l1_address = address_from_slice(&bytes)?;

    Ok(AliasedAddress {
        l1_address,
        l2_address: apply_l1_to_l2_alias(l1_address),
    })
}
