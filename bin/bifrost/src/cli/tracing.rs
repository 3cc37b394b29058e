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

use std::io;

pub use tracing::*;
use tracing::{subscriber, subscriber::Interest, Metadata, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, FmtSubscriber, Layer};

use super::LogsArgs;

/// Install the global subscriber for a single bifrost command.
///
/// Estimates and calldata are printed as JSON on stdout, so log lines go to
/// `--log.file` when set and to stderr otherwise. Verbosity comes from `RUST_LOG`.
/// The returned guard flushes the writer and must live until the command ends.
pub fn configure_logging(logs: &LogsArgs) -> anyhow::Result<WorkerGuard> {
    let (writer, guard) = match &logs.file {
        Some(path) => tracing_appender::non_blocking(tracing_appender::rolling::never(".", path)),
        None => tracing_appender::non_blocking(io::stderr()),
    };

    let builder = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer);
    if logs.json {
        subscriber::set_global_default(builder.json().finish().with(RpcTransportFilter))?;
    } else {
        subscriber::set_global_default(builder.pretty().finish().with(RpcTransportFilter))?;
    }

    // Dependencies that still emit through `log`
    LogTracer::init()?;

    Ok(guard)
}

/// HTTP and TLS crates under the alloy RPC client. At debug level they log every
/// request an estimate makes and drown out the estimator spans.
const RPC_TRANSPORT_TARGETS: &[&str] = &["h2", "hyper", "hyper_util", "reqwest", "rustls"];

fn is_rpc_transport_target(target: &str) -> bool {
    RPC_TRANSPORT_TARGETS
        .iter()
        .any(|prefix| target.starts_with(prefix))
}

/// Silences `RPC_TRANSPORT_TARGETS` whatever `RUST_LOG` says.
struct RpcTransportFilter;

impl<S: Subscriber> Layer<S> for RpcTransportFilter {
    fn register_callsite(&self, metadata: &'static Metadata<'static>) -> Interest {
        if is_rpc_transport_target(metadata.target()) {
            Interest::never()
        } else {
            Interest::always()
        }
    }
}
