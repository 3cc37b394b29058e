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

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

mod alias;
mod arbitrum;
mod cctp;
mod json;
mod settings;
mod tracing;

use alias::AliasArgs;
use arbitrum::ArbitrumCliArgs;
use bifrost_provider::ChainClient;
use cctp::CctpArgs;

/// Main entry point for the CLI
///
/// Parses the CLI arguments and runs the appropriate subcommand.
pub async fn run() -> anyhow::Result<()> {
    let opt = Cli::parse();
    let _guard = tracing::configure_logging(&opt.logs)?;
    tracing::debug!("Parsed CLI options: {:#?}", opt);

    match opt.command {
        Command::Arbitrum(args) => arbitrum::run(args, &opt.common).await?,
        Command::Cctp(args) => cctp::run(args)?,
        Command::Alias(args) => alias::run(args)?,
    }

    Ok(())
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Arbitrum retryable tickets
    ///
    /// Estimates single hop messages and L1 -> L2 -> L3 teleportations.
    #[command(name = "arbitrum")]
    Arbitrum(ArbitrumCliArgs),

    /// CCTP burn calldata
    #[command(name = "cctp")]
    Cctp(CctpArgs),

    /// Print the L2 alias of an L1 address
    #[command(name = "alias")]
    Alias(AliasArgs),
}

/// CLI common options
#[derive(Debug, Args)]
#[command(next_help_heading = "Common")]
pub struct CommonArgs {
    /// L1 node HTTP URL
    #[arg(long = "l1_rpc", name = "l1_rpc", env = "L1_RPC", global = true)]
    l1_rpc: Option<String>,

    /// L2 node HTTP URL
    #[arg(long = "l2_rpc", name = "l2_rpc", env = "L2_RPC", global = true)]
    l2_rpc: Option<String>,

    /// Timeout of a single RPC request, in seconds
    #[arg(
        long = "rpc_timeout_seconds",
        name = "rpc_timeout_seconds",
        env = "RPC_TIMEOUT_SECONDS",
        default_value = "10",
        global = true
    )]
    rpc_timeout_seconds: u64,

    /// Retryable settings file path
    ///
    /// Values can be overridden with `BIFROST_*` environment variables.
    #[arg(long = "settings", name = "settings", env = "SETTINGS", global = true)]
    settings: Option<String>,
}

impl CommonArgs {
    fn l1_client(&self) -> anyhow::Result<impl ChainClient + Clone> {
        let url = self.l1_rpc.as_deref().context("--l1_rpc is required")?;
        bifrost_provider::new_alloy_chain_client(url, self.rpc_timeout_seconds)
    }

    fn l2_client(&self) -> anyhow::Result<impl ChainClient + Clone> {
        let url = self.l2_rpc.as_deref().context("--l2_rpc is required")?;
        bifrost_provider::new_alloy_chain_client(url, self.rpc_timeout_seconds)
    }
}

/// CLI options for logging
#[derive(Debug, Args)]
#[command(next_help_heading = "Logging")]
pub struct LogsArgs {
    /// Log file
    ///
    /// If not provided, logs will be written to stderr
    #[arg(
        long = "log.file",
        name = "log.file",
        env = "LOG_FILE",
        default_value = None,
        global = true
    )]
    file: Option<String>,

    /// Log JSON
    ///
    /// If set, logs will be written in JSON format
    #[arg(
        long = "log.json",
        name = "log.json",
        env = "LOG_JSON",
        required = false,
        num_args = 0,
        global = true
    )]
    json: bool,
}

/// CLI options
#[derive(Debug, Parser)]
#[command(version, about = "Bifrost bridge estimation tool")]
pub struct Cli {
    #[clap(subcommand)]
    command: Command,

    #[clap(flatten)]
    common: CommonArgs,

    #[clap(flatten)]
    logs: LogsArgs,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_alias() {
        let cli = Cli::try_parse_from([
            "bifrost",
            "alias",
            "--address",
            "0x0000000000000000000000000000000000000001",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Alias(_)));
        assert_eq!(cli.common.rpc_timeout_seconds, 10);
    }
}
