//! Session setup and initialization

use crate::api::PriceApiClient;
use crate::consts::dashboard_consts::UPDATE_QUEUE_SIZE;
use crate::controller::DashboardController;
use crate::environment::Environment;
use crate::poller::{Poller, PollerHandle};
use crate::renderer::{ChannelRenderer, Update, UpdateSender};
use std::error::Error;
use std::time::Duration;
use tokio::sync::mpsc;

/// Resolved settings for a dashboard session
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub environment: Environment,
    pub recent_limit: u32,
    pub poll_interval: Duration,
}

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Receives render updates and diagnostic events
    pub update_receiver: mpsc::Receiver<Update>,
    /// Handle to the running poller
    pub poller: PollerHandle,
    /// Settings the session was started with
    pub settings: SessionSettings,
}

/// Build a controller that renders into a fresh update channel.
pub fn build_controller(
    environment: Environment,
    recent_limit: u32,
) -> Result<(DashboardController, UpdateSender, mpsc::Receiver<Update>), Box<dyn Error>> {
    let api = PriceApiClient::new(environment)?;
    let (sender, receiver) = mpsc::channel::<Update>(UPDATE_QUEUE_SIZE);
    let updates = UpdateSender::new(sender);
    let controller = DashboardController::new(
        Box::new(api),
        Box::new(ChannelRenderer::new(updates.clone())),
        updates.clone(),
        recent_limit,
    );
    Ok((controller, updates, receiver))
}

/// Sets up a polling session
///
/// This function handles:
/// 1. HTTP client and controller construction
/// 2. Starting the poller (initial load, then periodic polls)
///
/// Must be called from within a tokio runtime.
pub fn setup_session(settings: SessionSettings) -> Result<SessionData, Box<dyn Error>> {
    let (controller, updates, update_receiver) =
        build_controller(settings.environment.clone(), settings.recent_limit)?;
    let poller = Poller::new(controller, updates, settings.poll_interval).start();

    Ok(SessionData {
        update_receiver,
        poller,
        settings,
    })
}
