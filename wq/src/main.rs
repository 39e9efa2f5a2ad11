mod app;
mod config;
mod output;
mod ui;

use app::App;
use clap::Parser;
use config::{config_path, get_default_config_toml, load_config};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use libwhois_lookup::{LookupConfig, LookupCoordinator, LookupMode, LookupState, WhoisApi};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "wq")]
#[command(about = "WHOIS Query - domain registration and contact lookups", long_about = None)]
struct Args {
    /// Domain to look up; without it the interactive screen opens
    domain: Option<String>,

    /// Which record to fetch: domain or contact
    #[arg(long = "type", short = 't', default_value = "domain")]
    mode: LookupMode,

    /// Output results as NDJSON (one JSON object per line)
    #[arg(long, short = 'j')]
    json: bool,

    /// Open the interactive screen even when a domain is given
    #[arg(long)]
    tui: bool,

    /// List recent lookups recorded by the API server
    #[arg(long)]
    history: bool,

    /// Number of history entries to request (1-100)
    #[arg(long, default_value_t = 20)]
    limit: u32,

    /// Base URL of the lookup API (overrides the config file)
    #[arg(long)]
    api_base: Option<String>,

    /// Write logs to this file (the interactive screen logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default config to stdout and exit
    #[arg(long)]
    print_default_config: bool,

    /// Write the default config to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

impl Args {
    fn interactive(&self) -> bool {
        !self.history && (self.tui || self.domain.is_none())
    }
}

fn init_logging(log_file: Option<&Path>, interactive: bool) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if !interactive => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

/// 1 when the lookup ended with an error, 0 otherwise.
fn lookup_status(state: &LookupState) -> u8 {
    u8::from(state.error.is_some())
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.print_default_config {
        println!("{}", get_default_config_toml());
        return Ok(ExitCode::SUCCESS);
    }

    if args.write_default_config {
        if let Some(path) = config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, get_default_config_toml())?;
            println!("Default config written to: {}", path.display());
        } else {
            eprintln!("Error: Could not determine config path");
            return Ok(ExitCode::FAILURE);
        }
        return Ok(ExitCode::SUCCESS);
    }

    init_logging(args.log_file.as_deref(), args.interactive())?;

    let lookup_config = load_config().lookup_config(args.api_base.clone());
    tracing::debug!(api_base = %lookup_config.api_base, "resolved config");

    let rt = tokio::runtime::Runtime::new()?;
    let status = rt.block_on(async {
        if args.history {
            return run_history(&lookup_config, args.limit, args.json).await;
        }

        match args.domain {
            Some(domain) if !args.tui => run_once(&lookup_config, &domain, args.mode, args.json).await,
            domain => run_tui(&lookup_config, domain, args.mode).await,
        }
    })?;
    drop(rt);

    Ok(ExitCode::from(status))
}

async fn run_once(
    config: &LookupConfig,
    domain: &str,
    mode: LookupMode,
    json: bool,
) -> Result<u8, Box<dyn std::error::Error>> {
    let state = libwhois_lookup::lookup(config, domain, mode).await?;

    if json {
        println!("{}", output::lookup_line(&libwhois_lookup::normalize_domain(domain), mode, &state)?);
        io::stdout().flush()?;
    } else {
        print!("{}", output::render_text(&state, true));
    }

    Ok(lookup_status(&state))
}

async fn run_history(config: &LookupConfig, limit: u32, json: bool) -> Result<u8, Box<dyn std::error::Error>> {
    let api = WhoisApi::new(config)?;
    let items = match api.history(limit).await {
        Ok(items) => items,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(1);
        }
    };

    let mut stdout = io::stdout().lock();
    for entry in &items {
        if json {
            writeln!(stdout, "{}", serde_json::to_string(entry)?)?;
        } else {
            writeln!(stdout, "{}", output::history_line(entry))?;
        }
    }
    stdout.flush()?;
    Ok(0)
}

async fn run_tui(
    config: &LookupConfig,
    initial_domain: Option<String>,
    mode: LookupMode,
) -> Result<u8, Box<dyn std::error::Error>> {
    let coordinator = LookupCoordinator::new(config)?;
    let autostart = initial_domain.is_some();
    let mut app = App::new(coordinator, initial_domain, mode);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    if autostart {
        if let Some(request) = app.submit() {
            start_lookup(&app.coordinator, request);
        }
    }

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(0)
}

fn start_lookup(coordinator: &LookupCoordinator, request: app::LookupRequest) {
    let coordinator = coordinator.clone();
    tokio::spawn(async move {
        coordinator.lookup(&request.domain, request.mode).await;
    });
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.on_tick();

        let state = app.coordinator.snapshot();
        terminal.draw(|f| ui::ui(f, app, &state))?;

        if app.quit {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(request) = app.handle_key(key) {
                    start_lookup(&app.coordinator, request);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_lookup_exits_non_zero() {
        let failed = LookupState {
            error: Some("domain not found".into()),
            ..Default::default()
        };
        assert_eq!(lookup_status(&failed), 1);
        assert_eq!(lookup_status(&LookupState::default()), 0);
    }

    #[test]
    fn domain_argument_selects_one_shot_mode() {
        let args = Args::parse_from(["wq", "amazon.com", "--type", "contact"]);
        assert!(!args.interactive());
        assert_eq!(args.mode, LookupMode::Contact);

        assert!(Args::parse_from(["wq"]).interactive());
        assert!(Args::parse_from(["wq", "amazon.com", "--tui"]).interactive());
        assert!(!Args::parse_from(["wq", "--history"]).interactive());
    }
}
