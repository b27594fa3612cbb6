use crate::api::Api;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{CustomLogger, LogBuffer};
use crate::state::State;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let logs = LogBuffer::default();
        CustomLogger::init(logs.clone(), config.log_level_filter()?)?;

        info!("Starting application...");
        if let Some(path) = config.file_path() {
            info!("Using configuration file {}", path.display());
        }
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', available: {}",
                config.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        });
        let has_access_token = config.access_token.is_some();
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(
                tx.clone(),
                has_access_token,
                logs,
                theme,
            ))),
            config,
        };
        app.start_network(rx)?;
        if has_access_token {
            tx.send(NetworkEvent::FetchTasks)?;
        }
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) -> AppResult<()> {
        debug!("Creating new thread for asynchronous networking...");
        let mut api = Api::new(&self.config.api_url, self.config.request_timeout())?;
        api.set_access_token(self.config.access_token.clone());
        if api.has_access_token() {
            debug!("Restored session token from configuration.");
        }
        let mut config = self.config.clone();
        let cloned_state = Arc::clone(&self.state);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        std::thread::spawn(move || {
            runtime.block_on(async {
                let mut network_event_handler =
                    NetworkEventHandler::new(&cloned_state, &mut api, &mut config);
                while let Ok(network_event) = net_receiver.recv() {
                    if let Err(e) = network_event_handler.handle(network_event).await {
                        error!("Failed to handle network event: {}", e);
                    }
                }
            })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored whether the
    /// loop ends with an exit request or an error.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode().map_err(|e| AppError::Terminal(e.to_string()))?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.render_loop(&mut terminal).await;

        disable_raw_mode().map_err(|e| AppError::Terminal(e.to_string()))?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Draw the current state and apply the next terminal event until exit
    /// is requested.
    ///
    async fn render_loop(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                return Ok(());
            }
        }
    }
}
