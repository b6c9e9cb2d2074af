//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::poller::PollerHandle;
use crate::renderer::Update;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::view::RefreshControl;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub poll_interval: Duration,
    pub recent_limit: u32,
}

impl UIConfig {
    pub fn new(with_background_color: bool, poll_interval: Duration, recent_limit: u32) -> Self {
        Self {
            with_background_color,
            poll_interval,
            recent_limit,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying prices.
    Dashboard,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state; fed from the start so the splash does not drop the initial load.
    dashboard: DashboardState,

    /// Receives render updates from the poller.
    update_receiver: mpsc::Receiver<Update>,

    /// Handle to the running poller.
    poller: PollerHandle,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        update_receiver: mpsc::Receiver<Update>,
        poller: PollerHandle,
        ui_config: UIConfig,
    ) -> Self {
        let dashboard = DashboardState::new(environment.clone(), Instant::now(), ui_config);
        Self {
            environment,
            current_screen: Screen::Splash,
            dashboard,
            update_receiver,
            poller,
        }
    }

    /// Request a manual refresh unless one is already queued or in flight.
    ///
    /// The control goes busy as soon as the command is queued; the poller's
    /// own idle render re-enables it once the refresh has finished.
    fn request_refresh(&mut self) {
        if self.dashboard.refresh_control().is_enabled() && self.poller.refresh_now() {
            self.dashboard.set_refresh_control(RefreshControl::Busy);
        }
    }

    /// Apply every update received since the last frame.
    fn drain_updates(&mut self) {
        while let Ok(update) = self.update_receiver.try_recv() {
            self.dashboard.add_update(update);
        }
        self.dashboard.update();
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    let result = loop {
        app.drain_updates();

        if let Err(e) = terminal.draw(|f| render(f, &app)) {
            break Err(e);
        }

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        match event::poll(Duration::from_millis(100)) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => break Err(e),
        }
        let key = match event::read() {
            Ok(Event::Key(key)) => key,
            Ok(_) => continue,
            Err(e) => break Err(e),
        };

        // Skip events that are not KeyEventKind::Press
        if key.kind == event::KeyEventKind::Release {
            continue;
        }

        // Handle exit events
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            break Ok(());
        }

        match app.current_screen {
            // Any key press will skip the splash screen
            Screen::Splash => app.current_screen = Screen::Dashboard,
            Screen::Dashboard => {
                if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')) {
                    app.request_refresh();
                }
            }
        }
    };

    app.poller.stop().await;
    result
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f, &app.environment.api_url()),
        Screen::Dashboard => render_dashboard(f, &app.dashboard),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPriceApi;
    use crate::controller::DashboardController;
    use crate::poller::Poller;
    use crate::price::{ApiStatus, FetchAck, PricePoint};
    use crate::renderer::{ChannelRenderer, UpdateSender};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::sleep;

    /// API whose recent prices request blocks for `latest_delay`.
    fn slow_api(latest_delay: Duration, fetch_now_calls: Arc<AtomicUsize>) -> MockPriceApi {
        let mut api = MockPriceApi::new();
        api.expect_status().returning(|| {
            Ok(ApiStatus {
                success: true,
                message: None,
                version: None,
            })
        });
        api.expect_current_price()
            .returning(|| Ok(PricePoint::new(100.0)));
        api.expect_latest_prices().returning(move |_| {
            std::thread::sleep(latest_delay);
            Ok(vec![PricePoint::new(100.0)])
        });
        api.expect_fetch_now().returning(move || {
            fetch_now_calls.fetch_add(1, Ordering::SeqCst);
            Ok(FetchAck::default())
        });
        api
    }

    fn app_with(api: MockPriceApi) -> App {
        let (tx, rx) = mpsc::channel(1024);
        let updates = UpdateSender::new(tx);
        let controller = DashboardController::new(
            Box::new(api),
            Box::new(ChannelRenderer::new(updates.clone())),
            updates.clone(),
            10,
        );
        let poller = Poller::new(controller, updates, Duration::from_secs(3600)).start();
        App::new(
            Environment::Local,
            rx,
            poller,
            UIConfig::new(false, Duration::from_secs(3600), 10),
        )
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    // Repeated presses while the initial load is still running queue a single refresh.
    async fn test_repeated_refresh_presses_trigger_once() {
        let fetch_now_calls = Arc::new(AtomicUsize::new(0));
        let mut app = app_with(slow_api(Duration::from_millis(300), fetch_now_calls.clone()));
        app.current_screen = Screen::Dashboard;

        for _ in 0..3 {
            app.drain_updates();
            app.request_refresh();
            assert_eq!(app.dashboard.refresh_control(), RefreshControl::Busy);
            sleep(Duration::from_millis(20)).await;
        }

        // Initial load, then the refresh with its own slow follow-up poll.
        sleep(Duration::from_millis(900)).await;
        app.drain_updates();
        assert_eq!(app.dashboard.refresh_control(), RefreshControl::Idle);
        app.poller.stop().await;

        assert_eq!(fetch_now_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    // Once the refresh has finished the control accepts a new press.
    async fn test_refresh_allowed_again_after_idle() {
        let fetch_now_calls = Arc::new(AtomicUsize::new(0));
        let mut app = app_with(slow_api(Duration::ZERO, fetch_now_calls.clone()));

        app.request_refresh();
        sleep(Duration::from_millis(200)).await;
        app.drain_updates();
        assert!(app.dashboard.refresh_control().is_enabled());

        app.request_refresh();
        sleep(Duration::from_millis(200)).await;
        app.poller.stop().await;

        assert_eq!(fetch_now_calls.load(Ordering::SeqCst), 2);
    }
}
