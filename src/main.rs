use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    sync::Mutex,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Friends & Teams TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/friendstui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (j/k, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

mod app;
mod handlers;
mod ui;
mod utils;

use friendstui::api::FriendsClient;
use friendstui::config::{find_config_path, Config};
use friendstui::logic;
use friendstui::model::{self, ConnectionState};
use friendstui::services::{self, ApiRequest, ApiResponse, Priority};
use friendstui::Tab;

pub struct App {
    pub model: model::Model,

    config: Config,
    base_url: String,
    api_tx: mpsc::UnboundedSender<ApiRequest>,
    api_rx: mpsc::UnboundedReceiver<ApiResponse>,

    last_reconnect_attempt: Instant,
    reconnect_delay: Duration,
    last_periodic_refresh: Instant,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        let client = FriendsClient::new(
            config.base_url.clone(),
            config.token(),
            config.request_timeout(),
        )?;
        let base_url = client.base_url().to_string();

        let (api_tx, api_rx) = services::spawn_api_service(client);

        let model = model::Model::new(config.vim_mode, config.initial_tab(), config.initial_sort());

        let mut app = App {
            model,
            config,
            base_url,
            api_tx,
            api_rx,
            last_reconnect_attempt: Instant::now(),
            reconnect_delay: logic::retry::INITIAL_RECONNECT_DELAY,
            last_periodic_refresh: Instant::now(),
        };

        info!("Starting against {}", app.base_url);
        app.refresh_friends(Priority::Medium);
        if app.model.current_tab() == Tab::Colleagues {
            app.ensure_colleagues_loaded();
        }

        Ok(app)
    }

    /// Send a request to the background worker
    fn send_request(&self, request: ApiRequest) -> bool {
        if self.api_tx.send(request).is_err() {
            tracing::error!("API service is not running");
            return false;
        }
        true
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key(self, key)
    }

    /// Handle API response from background service
    /// Delegated to handlers::api module
    fn handle_api_response(&mut self, response: ApiResponse) {
        handlers::handle_api_response(self, response)
    }

    /// Retry the friends fetch with exponential backoff while disconnected
    fn tick_reconnect(&mut self) {
        if self.model.friends.is_connected() {
            // Connected - reset reconnect delay for next disconnection
            self.reconnect_delay = logic::retry::INITIAL_RECONNECT_DELAY;
            return;
        }

        if self.model.performance.loading_friends
            || self.last_reconnect_attempt.elapsed() < self.reconnect_delay
        {
            return;
        }

        // Calculate next delay before updating state so the banner shows it
        let next_delay = logic::retry::next_reconnect_delay(self.reconnect_delay);

        let (attempt, last_error) = match &self.model.friends.connection_state {
            ConnectionState::Disconnected { message, .. } => (1, Some(message.clone())),
            ConnectionState::Connecting {
                attempt,
                last_error,
                ..
            } => (attempt + 1, last_error.clone()),
            ConnectionState::Connected => return,
        };

        debug!(
            "Reconnect attempt {} (delay {:?}, next {:?})",
            attempt, self.reconnect_delay, next_delay
        );

        self.model.friends.connection_state = ConnectionState::Connecting {
            attempt,
            last_error,
            next_retry_secs: next_delay.as_secs(),
        };

        self.refresh_friends(Priority::Medium);
        self.last_reconnect_attempt = Instant::now();
        self.reconnect_delay = next_delay;
    }

    /// Background refresh on the configured interval
    fn tick_periodic_refresh(&mut self) {
        if !self.model.friends.is_connected() {
            return;
        }
        // Don't reshuffle the list under an open popup or mid-keystroke
        if self.model.has_modal()
            || self.model.performance.last_user_action.elapsed() < Duration::from_secs(1)
        {
            return;
        }
        if logic::retry::should_refresh(
            self.last_periodic_refresh.elapsed(),
            self.config.refresh_interval_secs,
        ) {
            debug!("Periodic refresh");
            self.refresh_friends(Priority::Low);
            self.last_periodic_refresh = Instant::now();
        }
    }
}

/// Route tracing output to the debug log file (the terminal belongs to the UI)
fn init_tracing(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let path = utils::get_debug_log_path();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("friendstui=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    init_tracing(args.debug)?;

    // Determine config file path
    let config_path = find_config_path(args.config.as_deref())?;
    info!("Loading config from {}", config_path.display());

    let mut config = Config::load(&config_path)?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            info!("Quitting");
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            app.handle_api_response(response);
        }

        app.tick_reconnect();
        app.tick_periodic_refresh();

        // Poll briefly so worker responses show up promptly
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        // Let the worker task make progress between frames
        tokio::task::yield_now().await;
    }

    Ok(())
}
