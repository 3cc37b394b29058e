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

use alloy_primitives::{Address, Bytes, U256};
use bifrost_sim::{TeleportAddresses, TeleportationGasPlanner};
use bifrost_types::{RetryableGasParams, RetryableTicket, TeleportParams};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use super::{json, settings, CommonArgs};

#[derive(Debug, Parser)]
pub(crate) struct ArbitrumCliArgs {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build the inbox calldata of a single hop L1 -> L2 retryable ticket
    #[command(name = "message")]
    Message(MessageArgs),
    /// Estimate the retryables and funds of an L1 -> L2 -> L3 teleportation
    #[command(name = "teleport")]
    Teleport(TeleportArgs),
}

#[derive(Debug, Args)]
struct MessageArgs {
    /// ERC20Inbox of the L2 chain, target of the printed calldata
    #[arg(long)]
    inbox: Address,

    /// Account submitting the ticket, also receives all refunds
    #[arg(long)]
    from: Address,

    /// Destination of the L2 call
    #[arg(long)]
    to: Address,

    /// Value sent with the L2 call, in wei
    #[arg(long, default_value = "0")]
    value: U256,

    /// Hex encoded L2 calldata
    #[arg(long, default_value = "0x")]
    calldata: Bytes,
}

#[derive(Debug, Args)]
struct TeleportArgs {
    /// L1 token to teleport
    #[arg(long)]
    token: Address,

    /// Amount of the token to teleport
    #[arg(long)]
    amount: U256,

    /// L1 address of the L3 fee token, zero when L3 pays fees in the native currency
    #[arg(long, default_value_t = Address::ZERO)]
    fee_token: Address,

    /// L1 -> L2 gateway router
    #[arg(long)]
    router: Address,

    /// L1 teleporter contract
    #[arg(long)]
    teleporter: Address,

    /// L2 forwarder of this teleportation
    #[arg(long)]
    l2_forwarder: Address,

    /// Account signing the teleportation
    #[arg(long)]
    signer: Address,

    /// JSON file with the caller supplied gas parameters: the L2 -> L3 leg, the
    /// forwarder factory leg and the L2 and L3 gas price bids
    #[arg(long)]
    gas_params: Option<String>,
}

/// A ticket together with the inbox its calldata is sent to
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InboxCall {
    inbox: Address,
    #[serde(flatten)]
    ticket: RetryableTicket,
}

pub(crate) async fn run(args: ArbitrumCliArgs, common: &CommonArgs) -> anyhow::Result<()> {
    let settings = settings::resolve_settings(common.settings.as_deref())?;
    let l1_client = common.l1_client()?;
    let l2_client = common.l2_client()?;

    match args.command {
        Command::Message(args) => {
            let ticket = bifrost_sim::native_token_bridge_calldata(
                &l1_client,
                &l2_client,
                args.from,
                args.to,
                args.value,
                args.calldata,
                &settings,
            )
            .await?;
            json::print_json(&InboxCall {
                inbox: args.inbox,
                ticket,
            })?;
        }
        Command::Teleport(args) => {
            let gas_params = match &args.gas_params {
                Some(path) => json::get_json_config::<RetryableGasParams>(path)?,
                None => RetryableGasParams::default(),
            };
            let params = TeleportParams {
                l1_token: args.token,
                l3_fee_token_l1_addr: args.fee_token,
                l1l2_router: args.router,
                amount: args.amount,
                gas_params,
            };
            let addresses = TeleportAddresses {
                teleporter: args.teleporter,
                l2_forwarder: args.l2_forwarder,
                signer: args.signer,
            };

            let planner =
                TeleportationGasPlanner::new(l1_client, l2_client, addresses, settings);
            let plan = planner.plan(&params).await?;
            json::print_json(&plan)?;
        }
    }

    Ok(())
}
