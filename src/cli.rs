use clap::Parser;

use crate::{
    config::{CounterConfig, get_config_dir, get_data_dir},
    store::LowerBound,
};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Starting value of the counter
    #[arg(short, long, value_name = "INT", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Never decrement the counter below this value
    #[arg(long, value_name = "INT", allow_negative_numbers = true)]
    pub floor: Option<i64>,

    /// Leave the mouse to the terminal instead of capturing clicks
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Command-line values win over the config file.
    pub fn apply(&self, counter: &mut CounterConfig) {
        if let Some(count) = self.count {
            counter.initial = count;
        }
        if let Some(floor) = self.floor {
            counter.lower_bound = LowerBound::Floor(floor);
        }
    }
}

const VERSION_MESSAGE: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> String {
    let author = clap::crate_authors!();
    let describe = option_env!("VERGEN_GIT_DESCRIBE").unwrap_or("unknown");
    let build_date = option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown");

    let config_dir_path = get_config_dir().display().to_string();
    let data_dir_path = get_data_dir().display().to_string();

    format!(
        "\
{VERSION_MESSAGE}-{describe} ({build_date})

Authors: {author}

Config directory: {config_dir_path}
Data directory: {data_dir_path}"
    )
}
