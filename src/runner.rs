// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    io::{stdin, stdout, Write},
    path::PathBuf,
    time::Duration,
};

use log::{info, warn};

use crate::app::App;
use crate::config::{find_config, GcConfig};
use crate::errors::GcError;
use crate::gc::analyze;
use crate::prompt::Console;
use crate::report::{write_report, ReportFormat};
use crate::seq::fasta::read_fasta_file;
use crate::ui::{
    key_handling::{handle_key_press, handle_paste},
    render::render_ui,
    UI,
};

use clap::Parser;

use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};

use ratatui::{
    prelude::{CrosstermBackend, Rect, Terminal},
    TerminalOptions, Viewport,
};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// FASTA file to analyze directly (no prompts)
    seq_fname: Option<PathBuf>,

    /// Show key bindings of the form interface and exit successfully
    #[arg(short = 'b', long = "show-bindings")]
    show_bindings: bool,

    /// Form interface (terminal UI) instead of the console prompts
    #[arg(long)]
    tui: bool,

    /// Report format
    #[arg(short, long = "format", default_value_t = ReportFormat::Text,
        help = "Report format [text|json] (or just t|j); default: text",
        hide_default_value = true,
        hide_possible_values = true,
    )]
    format: ReportFormat,

    /// Also save a generated random sequence as FASTA to this path
    #[arg(long = "save-random")]
    save_random: Option<PathBuf>,

    /// Configuration file (default: .gccomputeconfig in $HOME, then in the current directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed terminal width (mostly used for testing/debugging)
    #[arg(short, long, requires = "height")]
    width: Option<u16>,

    /// Fixed terminal height ("tall" -- -h is already used)
    #[arg(short = 't', long, requires = "width")]
    height: Option<u16>,

    /// Poll wait time [ms]
    #[clap(long = "poll-wait-time", default_value_t = 50)]
    poll_wait_time: u64,
}

// An explicitly requested config file must be valid; a discovered one that is broken is reported
// and the defaults are used instead.
fn load_config(cli: &Cli) -> Result<(GcConfig, Option<String>), GcError> {
    if let Some(path) = &cli.config {
        let config = GcConfig::from_file(path).map_err(|e| match e {
            GcError::Io(e) => GcError::Config(format!("{}: {}", path.display(), e)),
            e => e,
        })?;
        info!("Read config from {}", path.display());
        return Ok((config, None));
    }
    match find_config() {
        Some(path) => match GcConfig::from_file(&path) {
            Ok(config) => {
                info!("Read config from {}", path.display());
                Ok((config, None))
            }
            Err(e) => {
                warn!("Ignoring {}: {}", path.display(), e);
                let msg = format!("Error reading {}: {}", path.display(), e);
                Ok((GcConfig::default(), Some(msg)))
            }
        },
        None => Ok((GcConfig::default(), None)),
    }
}

pub fn run() -> Result<(), GcError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();

    if cli.show_bindings {
        println!("{}", crate::ui::USER_GUIDE);
        return Ok(());
    }

    let (config, config_err) = load_config(&cli)?;

    if let Some(seq_filename) = &cli.seq_fname {
        if let Some(msg) = &config_err {
            eprintln!("{}", msg);
        }
        let collection = read_fasta_file(seq_filename, config.duplicate_headers)?;
        let results = analyze(&collection);
        let mut out = stdout().lock();
        write_report(&mut out, &results, cli.format)?;
        out.flush()?;
        return Ok(());
    }

    if cli.tui {
        return run_tui(&cli, config, config_err);
    }

    if let Some(msg) = &config_err {
        eprintln!("{}", msg);
    }
    let mut console = Console::new(stdin().lock(), stdout().lock(), config);
    console.set_format(cli.format);
    console.set_save_random(cli.save_random.clone());
    console.run_session()?;
    Ok(())
}

fn run_tui(cli: &Cli, config: GcConfig, config_err: Option<String>) -> Result<(), GcError> {
    let mut app = App::new(config);

    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;
    enable_raw_mode()?;

    let backend = CrosstermBackend::new(stdout());
    // Fix viewport dimensions IFF supplied (mainly for tests)
    let viewport = match (cli.width, cli.height) {
        (Some(width), Some(height)) => Viewport::Fixed(Rect::new(0, 0, width, height)),
        _ => Viewport::Fullscreen,
    };
    let mut terminal = Terminal::with_options(backend, TerminalOptions { viewport })?;
    terminal.clear()?;

    let mut app_ui = UI::new(&mut app);
    if let Some(msg) = config_err {
        app_ui.show_error(msg);
    }

    let poll_wait = Duration::from_millis(cli.poll_wait_time);
    terminal.draw(|f| render_ui(f, &mut app_ui))?;

    // main loop
    loop {
        if event::poll(poll_wait)? {
            match event::read()? {
                event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // handle_key_press() returns true IFF user quits
                    if handle_key_press(&mut app_ui, key) {
                        break;
                    }
                }
                event::Event::Paste(text) => handle_paste(&mut app_ui, &text),
                event::Event::Resize(_, _) => {}
                _ => continue,
            }
            terminal.draw(|f| render_ui(f, &mut app_ui))?;
        }
    }

    disable_raw_mode()?;
    stdout().execute(DisableBracketedPaste)?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}
