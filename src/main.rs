// Journal - interactive journaling assistant
// Main entry point

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use crossterm::style::Stylize;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use journal::cli::TerminalPrompter;
use journal::collect::{Prompter, ScriptedPrompter};
use journal::config::{load_prompt_book, load_settings, Settings};
use journal::errors::JournalError;
use journal::goals::GoalBook;
use journal::session::{run_session, Section};

#[derive(Parser, Debug)]
#[command(name = "journal", version)]
#[command(about = "Guided daily journaling from a configurable prompt set")]
struct Cli {
    /// Settings file (default: ~/.journal/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Prompt document, overriding `prompts_path` from settings
    #[arg(long, value_name = "PATH", global = true)]
    prompts: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,

    /// Flags for a bare `journal`, same as `journal run`
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run today's journal session (default)
    Run(RunArgs),
    /// Validate the prompt configuration without asking anything
    Check,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Goal collection file
    #[arg(long, value_name = "PATH")]
    goals: Option<PathBuf>,

    /// Directory for the daily answer documents
    #[arg(long, value_name = "DIR")]
    entries_dir: Option<PathBuf>,

    /// Number of multiline prompts to draw
    #[arg(long, value_name = "N")]
    sample: Option<usize>,

    /// Seed for prompt sampling, for reproducible runs
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Answer from a JSON array of replies instead of the terminal
    #[arg(long, value_name = "PATH")]
    replay: Option<PathBuf>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(prompts) = cli.prompts {
        settings.prompts_path = Some(prompts);
    }

    match cli.command {
        Some(Command::Run(args)) => run(settings, args),
        Some(Command::Check) => check(&settings),
        None => run(settings, cli.run),
    }
}

fn check(settings: &Settings) -> Result<()> {
    let book = load_prompt_book(settings)?;
    println!("{} prompt configuration is valid", "✓".green());
    for (section, count) in book.summary() {
        println!("  {:<12} {}", section.key(), count);
    }
    Ok(())
}

fn run(mut settings: Settings, args: RunArgs) -> Result<()> {
    if let Some(goals) = args.goals {
        settings.goals_path = goals;
    }
    if let Some(dir) = args.entries_dir {
        settings.entries_dir = dir;
    }
    if let Some(sample) = args.sample {
        settings.sample_multiline = sample;
    }

    let book = load_prompt_book(&settings)?;
    let mut goal_book = GoalBook::load(settings.goals_path.clone())
        .with_context(|| format!("Failed to load goals from {}", settings.goals_path.display()))?;

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let date = Local::now().date_naive();

    let mut scripted = None;
    let mut terminal = None;
    let io: &mut dyn Prompter = match &args.replay {
        Some(path) => scripted.insert(
            ScriptedPrompter::load(path)
                .with_context(|| format!("Failed to load replies from {}", path.display()))?,
        ),
        None => {
            if !std::io::stdin().is_terminal() {
                bail!("stdin is not a terminal; use --replay <file.json> for non-interactive runs");
            }
            terminal.insert(TerminalPrompter::new()?)
        }
    };

    let outcome = match run_session(
        &book,
        goal_book.goals(),
        &settings.run_options(),
        &mut rng,
        io,
        date,
    ) {
        Ok(outcome) => outcome,
        Err(JournalError::InputClosed) => {
            eprintln!("{}", "Input closed; nothing was saved.".yellow());
            return Ok(());
        }
        Err(err) => return Err(err).context("Journal run failed"),
    };

    if let Some(script) = &scripted {
        if script.remaining() > 0 {
            warn!(unused = script.remaining(), "replay file has unused replies");
        }
    }

    let saved = outcome
        .transcript
        .save(&settings.entries_dir)
        .context("Failed to save journal entry")?;
    info!(path = %saved.display(), "saved journal entry");

    if let Some(goals) = outcome.goals {
        goal_book.replace_all(goals);
        goal_book.save().with_context(|| {
            format!("Failed to save goals to {}", goal_book.path().display())
        })?;
    }

    let goal_note = if book.prompts(Section::Goals).is_empty() {
        String::new()
    } else {
        format!(", {} goals tracked", goal_book.goals().len())
    };
    println!(
        "{} {} answers saved to {}{}",
        "✓".green(),
        outcome.transcript.len(),
        saved.display(),
        goal_note
    );
    Ok(())
}
