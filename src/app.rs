use std::sync::Arc;

use serde::Deserialize;
use strum::Display;

use crate::{
    components::home::HomePage,
    config::Config,
    framework::Runtime,
    store::CounterStore,
};

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Display, Deserialize)]
pub enum Mode {
    #[default]
    #[serde(alias = "home")]
    Home,
}

/// The application shell: mounts the home page on a runtime and runs it.
pub struct App {
    runtime: Runtime,
}

impl App {
    pub fn new(config: Config, store: Arc<dyn CounterStore>, mouse: bool) -> Self {
        let home = HomePage::new(store);
        Self {
            runtime: Runtime::new(vec![Box::new(home)], config, Mode::Home).mouse(mouse),
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        self.runtime.run().await
    }
}
