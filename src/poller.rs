//! Polling loop
//!
//! A [`Poller`] owns the controller and its timer. Starting it yields a
//! [`PollerHandle`], the only way to request a manual refresh or to stop the
//! loop. All requests run on the poller's single task, so renders land in the
//! order their requests were issued.

use crate::consts::dashboard_consts::COMMAND_QUEUE_SIZE;
use crate::controller::DashboardController;
use crate::events::{Event, Source};
use crate::renderer::UpdateSender;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;

/// Commands accepted by a running poller.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PollerCommand {
    /// Trigger server-side collection, then reload both views.
    RefreshNow,
}

pub struct Poller {
    controller: DashboardController,
    updates: UpdateSender,
    period: Duration,
}

impl Poller {
    pub fn new(controller: DashboardController, updates: UpdateSender, period: Duration) -> Self {
        Self {
            controller,
            updates,
            period,
        }
    }

    /// Spawn the loop: initial load, then a recent prices poll every `period`.
    pub fn start(self) -> PollerHandle {
        let shutdown = CancellationToken::new();
        let (commands, command_receiver) = mpsc::channel(COMMAND_QUEUE_SIZE);
        let join_handle = tokio::spawn(self.run(command_receiver, shutdown.clone()));
        PollerHandle {
            commands,
            shutdown,
            join_handle: Some(join_handle),
        }
    }

    async fn run(self, mut commands: mpsc::Receiver<PollerCommand>, shutdown: CancellationToken) {
        tokio::select! {
            _ = shutdown.cancelled() => return,
            _ = self.initial_load() => {}
        }

        self.updates
            .send_event(Event::waiting(
                Source::Poller,
                format!("Polling recent prices every {}s", self.period.as_secs()),
            ))
            .await;

        // First tick fires one full period after the initial load.
        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let limit = self.controller.recent_limit();

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    tokio::select! {
                        _ = shutdown.cancelled() => break,
                        _ = self.controller.fetch_recent_prices(limit) => {}
                    }
                }
                Some(command) = commands.recv() => match command {
                    PollerCommand::RefreshNow => {
                        tokio::select! {
                            _ = shutdown.cancelled() => break,
                            _ = self.controller.trigger_manual_refresh() => {}
                        }
                    }
                },
            }
        }
    }

    async fn initial_load(&self) {
        let _ = self.controller.check_status().await;
        self.controller.load_initial().await;
    }
}

/// Owned handle to a running poller. Dropping it stops the loop.
#[derive(Debug)]
pub struct PollerHandle {
    commands: mpsc::Sender<PollerCommand>,
    shutdown: CancellationToken,
    join_handle: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Queue a manual refresh. Returns `false` if the queue is full or the loop has stopped.
    pub fn refresh_now(&self) -> bool {
        self.commands.try_send(PollerCommand::RefreshNow).is_ok()
    }

    pub fn is_running(&self) -> bool {
        self.join_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the loop and wait for its task to finish.
    pub async fn stop(mut self) {
        self.shutdown.cancel();
        if let Some(handle) = self.join_handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
