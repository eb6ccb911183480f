//! Equityboard TUI binary: compose a dashboard and paint it in the terminal.
//!
//! Keys: `q`/`Esc` quit, `r` regenerate.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use equityboard_core::config::DashboardConfig;
use equityboard_core::data::{DashboardInputs, FixtureSource, SyntheticSource};
use equityboard_tui::{draw, handle_key_event, App, Feed};

#[derive(Parser, Debug)]
#[command(name = "equityboard-tui", about = "Terminal equity dashboard")]
struct Args {
    /// TOML config with [source], [palette], [tooltip], [axis] and [grid] tables.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the synthetic seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the synthetic point count.
    #[arg(long)]
    points: Option<usize>,

    /// Render fixed inputs from a JSON file instead of the synthetic source.
    #[arg(long)]
    input: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<DashboardConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            DashboardConfig::from_toml_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(DashboardConfig::default()),
    }
}

fn build_feed(args: &Args, config: &DashboardConfig) -> Result<Feed> {
    if let Some(path) = &args.input {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading inputs {}", path.display()))?;
        let inputs: DashboardInputs = serde_json::from_str(&text)
            .with_context(|| format!("parsing inputs {}", path.display()))?;
        let name = path.display().to_string();
        return Ok(Feed::Fixed(FixtureSource::named(name, inputs)));
    }

    let mut source = config.source.clone();
    if let Some(seed) = args.seed {
        source.seed = seed;
    }
    if let Some(points) = args.points {
        source.points = points;
    }
    Ok(Feed::Synthetic(SyntheticSource::new(source)))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    let feed = build_feed(&args, &config)?;
    let mut app = App::new(feed, config.style_tokens());

    // Restore the terminal before printing a panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(app, key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
