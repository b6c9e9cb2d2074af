mod api;
mod cli_messages;
mod config;
mod consts;
mod controller;
mod environment;
mod events;
mod logging;
mod poller;
mod price;
mod renderer;
mod session;
mod ui;
mod view;

use crate::config::{Config, get_config_path};
use crate::consts::dashboard_consts::polling;
use crate::controller::DashboardController;
use crate::environment::Environment;
use crate::session::{
    SessionSettings, build_controller, console, run_headless_mode, run_tui_mode, setup_session,
};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;
use std::time::Duration;

/// Environment variable selecting the default API deployment (`local` or a URL).
const ENVIRONMENT_VAR: &str = "PRICE_DASHBOARD_ENVIRONMENT";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal dashboard for a remote price API
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard and poll recent prices
    Start {
        /// Base URL of the price API (`local` or an http(s) URL)
        #[arg(long, value_name = "URL", value_parser = Environment::parse_api_url)]
        api_url: Option<Environment>,

        /// Number of recent prices shown in the table
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        limit: Option<u32>,

        /// Seconds between recent price polls
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval_secs: Option<u64>,

        /// Print updates to the console instead of drawing the dashboard
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Enable background colors in the dashboard
        #[arg(long, action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Ask the server to collect a price now, then print the refreshed data
    FetchNow {
        /// Base URL of the price API (`local` or an http(s) URL)
        #[arg(long, value_name = "URL", value_parser = Environment::parse_api_url)]
        api_url: Option<Environment>,
    },
    /// Print stored prices from the last few hours
    History {
        /// Size of the window in hours
        #[arg(long, default_value_t = polling::DEFAULT_HISTORY_HOURS, value_parser = clap::value_parser!(u32).range(1..))]
        hours: u32,

        /// Base URL of the price API (`local` or an http(s) URL)
        #[arg(long, value_name = "URL", value_parser = Environment::parse_api_url)]
        api_url: Option<Environment>,
    },
    /// Check that the price API is reachable
    Status {
        /// Base URL of the price API (`local` or an http(s) URL)
        #[arg(long, value_name = "URL", value_parser = Environment::parse_api_url)]
        api_url: Option<Environment>,
    },
    /// Save the price API base URL to the configuration file
    SetApi {
        /// Base URL of the price API (`local` or an http(s) URL)
        #[arg(long, value_name = "URL", value_parser = Environment::parse_api_url)]
        url: Environment,
    },
    /// Delete the configuration file
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start {
            api_url,
            limit,
            interval_secs,
            headless,
            with_background,
        } => {
            let config = load_config(&config_path)?;
            let settings = SessionSettings {
                environment: resolve_environment(api_url, &config)?,
                recent_limit: limit.unwrap_or_else(|| config.clamped_recent_limit()),
                poll_interval: interval_secs
                    .map(Duration::from_secs)
                    .unwrap_or_else(|| config.poll_interval()),
            };

            if headless {
                logging::init_console_logger();
                let session = setup_session(settings)?;
                run_headless_mode(session).await
            } else {
                let session = setup_session(settings)?;
                run_tui_mode(session, with_background).await
            }
        }
        Command::FetchNow { api_url } => {
            logging::init_console_logger();
            let config = load_config(&config_path)?;
            let environment = resolve_environment(api_url, &config)?;
            run_once(environment, config.clamped_recent_limit(), |controller| async move {
                controller.trigger_manual_refresh().await.map(|_| ())
            })
            .await
        }
        Command::History { hours, api_url } => {
            logging::init_console_logger();
            let config = load_config(&config_path)?;
            let environment = resolve_environment(api_url, &config)?;
            run_once(environment, config.clamped_recent_limit(), |controller| async move {
                controller.fetch_price_history(hours).await.map(|_| ())
            })
            .await
        }
        Command::Status { api_url } => {
            logging::init_console_logger();
            let config = load_config(&config_path)?;
            let environment = resolve_environment(api_url, &config)?;
            run_once(environment, config.clamped_recent_limit(), |controller| async move {
                controller.check_status().await.map(|_| ())
            })
            .await
        }
        Command::SetApi { url } => {
            let mut config = load_config(&config_path)?;
            config.api_url = url.api_url();
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("API URL saved", "{}", config.api_url);
            Ok(())
        }
        Command::Reset => {
            if !config_path.exists() {
                print_cmd_warn!("Nothing to reset", "{} does not exist", config_path.display());
                return Ok(());
            }
            print_cmd_info!("Resetting", "Deleting {}", config_path.display());
            Config::clear(&config_path)?;
            print_cmd_success!("Configuration cleared", "");
            Ok(())
        }
    }
}

fn load_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    Config::load_or_default(path).map_err(|e| format!("Failed to load config: {}", e).into())
}

/// Pick the API deployment: command line flag, then config file, then environment variable.
fn resolve_environment(
    api_url: Option<Environment>,
    config: &Config,
) -> Result<Environment, Box<dyn Error>> {
    if let Some(environment) = api_url {
        return Ok(environment);
    }
    if let Some(stored) = config.api_url() {
        return Environment::parse_api_url(&stored)
            .map_err(|e| format!("{} (from the config file; fix it with `set-api`)", e).into());
    }
    Ok(std::env::var(ENVIRONMENT_VAR)
        .ok()
        .and_then(|value| value.parse::<Environment>().ok())
        .unwrap_or_default())
}

/// Run a single controller operation and print everything it renders.
async fn run_once<F, Fut>(
    environment: Environment,
    recent_limit: u32,
    operation: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(DashboardController) -> Fut,
    Fut: std::future::Future<Output = Result<(), api::error::ApiError>>,
{
    let (controller, updates, mut receiver) = build_controller(environment, recent_limit)?;
    drop(updates);

    let printer = tokio::spawn(async move {
        while let Some(update) = receiver.recv().await {
            console::print_update(&update);
        }
    });

    // The controller owns the last senders, so the printer finishes once it is dropped.
    let result = operation(controller).await;
    let _ = printer.await;

    result.map_err(|e| {
        print_cmd_error!("Request failed", &e.to_string());
        e.into()
    })
}

