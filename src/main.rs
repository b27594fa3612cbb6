//! Terminal client for a task management REST API.
//!
//! Sign up or log in, then list, create, view, edit and delete tasks. The
//! session token is kept in the configuration file so the next start skips
//! the login screen.

mod api;
mod app;
mod config;
mod error;
mod events;
mod logger;
mod state;
mod ui;
mod utils;

use anyhow::Result;
use app::App;
use clap::{crate_version, App as Cli, Arg};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("tasks-tui")
        .version(crate_version!())
        .about("A terminal user interface for a task management REST API")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding the configuration file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("api-url")
                .long("api-url")
                .value_name("URL")
                .env("TASKS_TUI_API_URL")
                .help("Base URL of the task API, overriding the configuration file")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(api_url) = matches.value_of("api-url") {
        config.override_api_url(api_url)?;
    }

    App::start(config).await?;
    Ok(())
}
