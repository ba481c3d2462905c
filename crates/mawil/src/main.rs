use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use mawil::app::{self, App};
use mawil::domain::content::ContentStore;
use mawil::infra::config::AssistantConfig;
use mawil::infra::logging;
use mawil::infra::text_generator::GeminiClient;
use mawil::runtime::{self, EventResult};
use mawil::ui;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

const TICK_RATE: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> io::Result<()> {
    logging::init(&app::mawil_home())?;

    let content = Arc::new(ContentStore::load_embedded().map_err(io::Error::other)?);
    let config = AssistantConfig::from_env();
    if !config.has_api_key() {
        warn!("no assistant API key configured; replies will fall back to the apology");
    }
    let text_generator = Arc::new(GeminiClient::new(config.clone()));
    let mut app = App::new(content, text_generator, config.request_timeout);
    info!(model = %config.model, "starting mawil");

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("mawil exited");

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            && runtime::handle_key(app, key) == EventResult::Quit
        {
            return Ok(());
        }

        app.process_pending_app_events();
    }
}
