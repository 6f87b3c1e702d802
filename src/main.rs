// SPDX-License-Identifier: GPL-3.0-only

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> cosmic::iced::Result {
    if let Err(err) = init_logging() {
        eprintln!("time-progress: logging disabled: {err:#}");
    }
    time_progress::run()
}

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer());
    tracing::subscriber::set_global_default(subscriber).context("installing tracing subscriber")?;
    tracing_log::LogTracer::init().context("bridging log records")?;
    Ok(())
}
