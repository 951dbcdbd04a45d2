use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use mentio::app::App;
use mentio::config;

/// Comment composer with @mention autocompletion.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// User search endpoint, e.g. http://localhost:8000/users/search.
    /// Overrides the config file; mentions are disabled when neither is set.
    search_url: Option<String>,

    /// Debounce interval between typing and searching, in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_debug_logging();

    let cli = Cli::parse();
    let mut config = config::load()?;
    if cli.search_url.is_some() {
        config.search.url = cli.search_url;
    }
    if let Some(debounce_ms) = cli.debounce_ms {
        config.search.debounce_ms = debounce_ms;
    }

    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, &config);

    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, config: &config::Config) -> Result<()> {
    let mut app = App::new(config);

    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    // Stop the search worker threads before leaving the alternate screen.
    app.destroy();

    Ok(())
}

/// Log to a file in debug builds; stderr would corrupt the TUI.
#[cfg(debug_assertions)]
fn init_debug_logging() {
    use std::fs::File;

    if let Ok(file) = File::create("mentio-debug.log") {
        let _ = env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init();
    }
}
