//! Headless mode execution

use super::{
    SessionData,
    console::print_update,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use std::error::Error;

/// Runs the dashboard in headless mode
///
/// This function handles:
/// 1. Console output of every render pass
/// 2. Ctrl+C shutdown handling
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - Headless mode failed
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting(
        "headless",
        &session.settings.environment.api_url(),
        session.settings.poll_interval.as_secs(),
    );

    // Event loop: print updates until Ctrl+C
    loop {
        tokio::select! {
            update = session.update_receiver.recv() => match update {
                Some(update) => print_update(&update),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    if !session.poller.is_running() {
        log::warn!("Polling loop exited before shutdown");
    }

    print_session_shutdown();
    session.poller.stop().await;
    print_session_exit_success();

    Ok(())
}
