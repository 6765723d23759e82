use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tracing::Level;

use swx_monitor::report::{json, plain, summary};
use swx_monitor::ui::{self, Theme};
use swx_monitor::{events, run_cycle, App, FeedSource, HttpSource, Overrides, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// `label: value` listing
    Plain,
    /// Aligned listing with colored propagation verdicts
    Summary,
    /// Machine-readable fields and verdicts
    Json,
    /// Interactive chart view with scheduled refresh
    Dashboard,
}

#[derive(Parser, Debug)]
#[command(name = "swx")]
#[command(about = "Solar-terrestrial conditions and HF propagation outlook from hamqsl.com")]
struct Args {
    /// Presentation mode
    #[arg(short, long, value_enum, default_value_t = Mode::Summary)]
    mode: Mode,

    /// Path to a settings file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dashboard refresh interval (e.g., "2h", "30m"), overrides the settings file
    #[arg(short, long)]
    refresh: Option<String>,

    /// Disable colors in summary mode
    #[arg(long)]
    no_color: bool,

    /// Write logs to this file (the only log output in dashboard mode)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(args.verbose, args.log_file.as_deref(), args.mode)?;

    let overrides = Overrides {
        refresh_interval: args.refresh.clone(),
    };
    let settings = Settings::load(args.config.as_deref(), &overrides)?;
    let mut source = HttpSource::new()?;

    match args.mode {
        Mode::Dashboard => run_dashboard(source, &settings),
        mode => {
            let assessment = run_cycle(&mut source)?;
            let mut out = io::stdout().lock();
            match mode {
                Mode::Plain => plain::render(&mut out, &assessment.snapshot)?,
                Mode::Json => json::render(&mut out, &assessment, source.description())?,
                _ => {
                    let style = summary::SummaryStyle {
                        label_width: settings.label_width,
                        value_width: settings.value_width,
                        color: !args.no_color && io::stdout().is_terminal(),
                    };
                    summary::render(&mut out, &assessment, style)?;
                }
            }
            out.flush()?;
            Ok(())
        }
    }
}

/// Install the log subscriber.
///
/// Text modes log to stderr. The dashboard owns the terminal, so it only
/// logs when a file is given.
fn init_tracing(verbose: u8, log_file: Option<&Path>, mode: Mode) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if mode == Mode::Dashboard => {}
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn run_dashboard(source: HttpSource, settings: &Settings) -> Result<()> {
    // Query the background before raw mode takes over the terminal
    let theme = Theme::from_choice(settings.theme);
    run_tui(Box::new(source), settings.refresh()?, theme)
}

/// Run the TUI with the given feed source
fn run_tui(source: Box<dyn FeedSource>, refresh_interval: Duration, theme: Theme) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    let mut app = App::new(source, refresh_interval, theme);
    tracing::info!(source = app.source_description(), "dashboard started");

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            if area.width < ui::common::MIN_WIDTH || area.height < ui::common::MIN_HEIGHT {
                ui::common::render_too_small(frame, area);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Min(8),    // Dashboard
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::dashboard::render(frame, app, chunks[1]);
            ui::common::render_status_bar(frame, app, chunks[2]);

            if app.error.is_some() {
                ui::common::render_error(frame, app, area);
            } else if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Scheduled refresh; the first one is due straight away
        if app.tick(Instant::now()) {
            continue;
        }

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(250))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}
