use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use cnpj_cleaner::app::App;
use cnpj_cleaner::batch;
use cnpj_cleaner::config::Config;
use cnpj_cleaner::error::CleanerError;
use cnpj_cleaner::input::{stdin, ClipboardBackend, SystemClipboard};
use cnpj_cleaner::logging::{self, LogTarget};
use cnpj_cleaner::ui::TuiManager;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Exit status when `--strict` finds invalid lines
const EXIT_INVALID: u8 = 2;

#[derive(Parser)]
#[command(name = "cnpj-cleaner", version)]
#[command(about = "Strip CNPJ formatting into `cgc <digits>` lines and flag bad check digits")]
struct Cli {
    /// Read all of stdin and print the cleaned result
    #[arg(long, conflicts_with = "clipboard")]
    stdin: bool,

    /// Clean the current clipboard text and print the result
    #[arg(long)]
    clipboard: bool,

    /// In batch mode, also copy the cleaned result to the clipboard
    #[arg(long)]
    copy: bool,

    /// Skip checksum validation
    #[arg(long)]
    no_validate: bool,

    /// In batch mode, exit with status 2 when any line is invalid
    #[arg(long)]
    strict: bool,

    /// Write logs to this file (filter via CNPJ_CLEANER_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

enum Mode {
    Tui,
    Stdin,
    Clipboard,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.clipboard {
            Mode::Clipboard
        } else if self.stdin || !io::stdin().is_terminal() {
            Mode::Stdin
        } else {
            Mode::Tui
        }
    }

    /// Flags that only mean something when the result is printed, not shown in the TUI.
    fn batch_only_flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.copy {
            flags.push("--copy");
        }
        if self.strict {
            flags.push("--strict");
        }
        flags
    }

    fn config(&self) -> Config {
        let mut config = Config::default();
        config.cleaning.validate = !self.no_validate;
        config
    }

    fn log_target(&self, mode: &Mode) -> LogTarget {
        match (&self.log_file, mode) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, Mode::Tui) => LogTarget::Disabled,
            (None, _) => LogTarget::Stderr,
        }
    }
}

fn run_batch(cli: &Cli, mode: &Mode, config: &Config) -> Result<ExitCode, CleanerError> {
    let mut clipboard = SystemClipboard::new();
    let text = match mode {
        Mode::Clipboard => clipboard.get_text()?,
        _ => stdin::read_stdin()?,
    };

    let copy_target: Option<&mut dyn ClipboardBackend> = if cli.copy {
        Some(&mut clipboard)
    } else {
        None
    };

    let report = batch::run(
        &text,
        config.cleaning.options(),
        copy_target,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    if cli.strict && report.invalid_count() > 0 {
        return Ok(ExitCode::from(EXIT_INVALID));
    }
    Ok(ExitCode::SUCCESS)
}

fn run_tui(config: Config) -> Result<ExitCode, CleanerError> {
    let mut app = App::new(config, Box::new(SystemClipboard::new()));
    let mut tui = TuiManager::new()?;

    tui.run_event_loop(&mut app)?;

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mode = cli.mode();
    let config = cli.config();

    if matches!(mode, Mode::Tui) {
        let flags = cli.batch_only_flags();
        if !flags.is_empty() {
            Cli::command()
                .error(
                    ErrorKind::ArgumentConflict,
                    format!(
                        "{} only apply to batch mode (use --stdin or --clipboard, or pipe input)",
                        flags.join(" and ")
                    ),
                )
                .exit();
        }
    }

    let log_target = cli.log_target(&mode);
    if let Err(e) = logging::init(&log_target) {
        eprintln!("cnpj-cleaner: {}", e);
        return ExitCode::FAILURE;
    }

    let result = match mode {
        Mode::Tui => run_tui(config),
        _ => run_batch(&cli, &mode, &config),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            // A stderr subscriber would print the same failure twice.
            if !log_target.writes_to_stderr() {
                error!(error = %e, "run failed");
            }
            eprintln!("cnpj-cleaner: {}", e);
            ExitCode::FAILURE
        }
    }
}
