//! Terminal UI for wakeru that resolves coordinates to a service zone.

mod app;
mod input;
mod ui;

use std::{
    env,
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration as StdDuration,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use env_logger::{Env, Target};
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use wakeru_core::{
    model::{Language, ZoneId},
    ports::FileSource,
    registry::ZoneRegistry,
    service::ZoneService,
};
use wakeru_zones_beppu as beppu;

use crate::app::App;
use crate::input::Action;

#[derive(Parser)]
#[command(name = "wakeru", version, about, long_about = None)]
struct Args {
    /// JSON zone definition to use instead of the built-in Beppu zones
    #[arg(long)]
    zones: Option<PathBuf>,

    /// Display language (en, ja, ko, zh)
    #[arg(long, default_value = "en")]
    lang: Language,

    /// Previously saved zone id to show in the header
    #[arg(long)]
    home_zone: Option<String>,

    /// Log file (filter with `RUST_LOG`)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| env::temp_dir().join("wakeru-tui.log"));
    init_logging(&log_path)?;

    // Registry is validated here; a bad definition never reaches the UI.
    let registry = match &args.zones {
        Some(path) => ZoneRegistry::load(&FileSource::new(path)),
        None => beppu::registry(),
    }
    .context("failed to load zone definitions")?;
    info!("loaded {} zones", registry.len());

    let service = Arc::new(ZoneService::new(Arc::new(registry)));

    let home_zone = args.home_zone.map(ZoneId::new);
    let stale_home = home_zone
        .as_ref()
        .filter(|id| service.zone(id).is_none())
        .cloned();
    let home_zone = home_zone.filter(|id| service.zone(id).is_some());

    // App state
    let mut app = App::new(service, args.lang, home_zone);
    if let Some(id) = stale_home {
        warn!("saved zone {id} is not in the registry");
        app.error_message = Some(format!("Saved zone {id} is no longer available"));
    }

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            match input::handle_key_event(key, &mut app) {
                Action::Quit => break,
                Action::None => {}
                Action::Resolve => app.resolve(),
            }
        }
    }

    Ok(())
}
