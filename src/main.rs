use std::sync::Arc;

use clap::Parser;
use cli::Cli;
use color_eyre::Result;
use tracing::info;

use crate::{app::App, config::Config, store::{CounterStore, SharedCounter}};

mod app;
mod cli;
mod components;
mod config;
mod errors;
mod framework;
mod logging;
mod store;
mod tui;

#[tokio::main]
async fn main() -> Result<()> {
    errors::init()?;
    logging::init()?;

    let args = Cli::parse();
    let mut config = Config::new()?;
    args.apply(&mut config.counter);

    info!(
        "Using config directory {:?}, data directory {:?}",
        config.config.config_dir, config.config.data_dir
    );

    let store = SharedCounter::from_config(&config.counter);
    info!(
        "Counter store starts at {} ({:?})",
        store.count(),
        store.lower_bound()
    );

    let mut app = App::new(config, Arc::new(store), !args.no_mouse);
    app.run().await?;
    Ok(())
}
