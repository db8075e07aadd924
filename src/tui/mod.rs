//! TUI (Text User Interface) to chat with the question-answering backend.

mod app;
mod constants;
mod draw;
mod handlers;
mod query_result;
mod shortcuts;
mod text;

#[allow(unused_imports)]
pub use app::App;

use std::io;
use std::sync::Arc;

use crossterm::event::{self, Event};
use crossterm::execute;
use tokio::runtime::Runtime;

use crate::core::backend::BackendClient;
use crate::core::config::Config;

use draw::draw;
use handlers::{HandleResult, PendingQuery};

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for async HTTP calls.
pub fn run(config: Arc<Config>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let backend_client = Arc::new(BackendClient::new(config.as_ref()));
    let mut app = App::new();
    let mut pending_query: Option<PendingQuery> = None;

    // Ask the backend which model is serving; the result (or error text)
    // lands in the header whenever it arrives.
    let mut pending_probe = Some(handlers::spawn_status_probe(
        &rt,
        Arc::clone(&backend_client),
    ));

    loop {
        if let Some(ref probe_rx) = pending_probe
            && let Ok(result) = probe_rx.try_recv()
        {
            query_result::handle_probe_result(&mut app, result);
            pending_probe = None;
        }

        if let Some(ref query) = pending_query
            && let Ok(outcome) = query.result_rx.try_recv()
        {
            query_result::handle_query_outcome(&mut app, outcome);
            pending_query = None;
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(std::time::Duration::from_millis(
            constants::EVENT_POLL_TIMEOUT_MS,
        ))? && let Event::Key(key) = event::read()?
        {
            let result = handlers::handle_key(
                key,
                &mut app,
                &backend_client,
                &mut pending_query,
                &rt,
            );
            if result == HandleResult::Break {
                break;
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
