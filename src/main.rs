use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};

use typist::{Profile, Typist};
use typist::chance::{Chance, RandomChance};
use typist::clock::{Interrupt, SystemClock};
use typist::config::{Settings, SettingsLayer};
use typist::logging;
use typist::session;

/// How long a Ctrl+C waits for the current keystroke to wind down.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// Exit status after Ctrl+C (128 + SIGINT).
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Parser)]
#[command(name = "typist", version, about = "Type like a human, typos included.")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Accuracy of the simulated keystrokes, between 0 and 1
    #[arg(
        short,
        long,
        global = true,
        env = "TYPIST_ACCURACY",
        allow_negative_numbers = true
    )]
    accuracy: Option<f64>,

    /// Average words per minute (one word is five keystrokes)
    #[arg(
        short,
        long,
        global = true,
        env = "TYPIST_WPM",
        allow_negative_numbers = true
    )]
    wpm: Option<i64>,

    /// Seed the random generator for a reproducible run
    #[arg(long, global = true, env = "TYPIST_SEED")]
    seed: Option<u64>,

    /// TOML config file (default: <config dir>/typist/config.toml)
    #[arg(short, long, global = true, env = "TYPIST_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    fn layer(&self) -> SettingsLayer {
        SettingsLayer {
            wpm: self.wpm,
            accuracy: self.accuracy,
            seed: self.seed,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Emulate typing standard input (or the contents of a file) to standard output
    Type {
        /// File to type instead of standard input
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let file_layer = SettingsLayer::discover(cli.config.as_deref())?;
    let settings = Settings::from_layers(&[cli.layer(), file_layer]);
    debug!(
        wpm = settings.wpm,
        accuracy = settings.accuracy,
        seed = ?settings.seed,
        "resolved settings"
    );
    let profile = settings.profile()?;

    match cli.command {
        Command::Type { file } => type_input(profile, settings.seed, file).await,
    }
}

async fn type_input(profile: Profile, seed: Option<u64>, path: Option<PathBuf>) -> Result<()> {
    let file = match &path {
        Some(path) => {
            info!(path = %path.display(), "typing file");
            let file =
                File::open(path).with_context(|| format!("cannot read {}", path.display()))?;
            Some(file)
        }
        None => {
            info!("typing standard input");
            None
        }
    };

    let interrupt = Interrupt::new();
    let clock = SystemClock::interruptible(interrupt.clone());

    let mut job = tokio::task::spawn_blocking(move || {
        let chance: Box<dyn Chance> = match seed {
            Some(seed) => Box::new(RandomChance::seeded(seed)),
            None => Box::new(RandomChance::new()),
        };
        let mut typist = Typist::with_parts(profile, clock, chance);
        let mut out = io::stdout().lock();
        match file {
            Some(file) => session::type_lines(&mut typist, BufReader::new(file), &mut out),
            None => session::type_lines(&mut typist, io::stdin().lock(), &mut out),
        }
    });

    tokio::select! {
        result = &mut job => {
            let typed = result.context("typing task panicked")??;
            debug!(lines = typed, "done");
            Ok(())
        }
        _ = tokio::signal::ctrl_c() => {
            interrupt.trigger();
            // A typist mid-pause stops at once; one blocked on input does not.
            if let Ok(Ok(Err(err))) = tokio::time::timeout(SHUTDOWN_GRACE, job).await {
                if !err.is_interrupted() {
                    warn!(error = %err, "typing stopped early");
                }
            }
            warn!("interrupted");
            eprintln!("\ninterrupted");
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
    }
}
