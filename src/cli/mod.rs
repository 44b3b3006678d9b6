pub mod confirm;
pub mod render;
pub mod shell;

use std::{fmt::Display, path::PathBuf};

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use chrono_english::parse_date_string;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use confirm::StdinConfirmer;
use render::{render_view, View};
use tracing::level_filters::LevelFilter;

use crate::{
    challenge::{entities::ChecklistItem, Command},
    session::{
        confirm::{AssumeYes, Confirmer},
        Session,
    },
    storage::{file_store::FileStore, KeyValueStore},
    utils::{
        clock::DefaultClock,
        dir::create_application_default_path,
        logging::{enable_logging, CLI_PREFIX},
        time::parse_iso,
    },
};

#[derive(Parser, Debug)]
#[command(name = "seventyfive", version, long_about = None)]
#[command(about = "Tracker for the 75 day self-improvement challenge", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(
        long,
        global = true,
        help = "Application directory. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Enable logging")]
    log: bool,
    #[arg(short, long, global = true, help = "Answer yes to every confirmation")]
    yes: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
pub enum Commands {
    #[command(about = "Set the start date and the baseline weight")]
    Start {
        #[arg(
            long,
            short,
            help = "First day of the challenge, today when omitted. Examples are \"2024-01-01\", \"today\", \"yesterday\", \"15/03/2025\""
        )]
        date: Option<String>,
        #[arg(long, short, allow_hyphen_values = true, help = "Baseline weight")]
        weight: Option<String>,
        #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
        date_style: DateStyle,
    },
    #[command(about = "Show the dashboard and today's checklist")]
    Status,
    #[command(about = "Tick a checklist item for today")]
    Check {
        item: ChecklistItem,
        #[arg(long, help = "Untick the item instead")]
        undo: bool,
    },
    #[command(about = "Set how many half liter cups of water were drunk today")]
    Water {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=8))]
        cups: u8,
    },
    #[command(about = "Attach today's progress photo")]
    Photo { path: PathBuf },
    #[command(about = "Mark today as complete. Every task has to be done")]
    Done,
    #[command(about = "Restart the challenge from day 1, keeping the start date")]
    Reset,
    #[command(about = "Log today's weight")]
    Weight {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    #[command(about = "List all 75 days")]
    Days,
    #[command(about = "Show completion and streak")]
    Stats,
    #[command(about = "Show the weight log")]
    Weights,
    #[command(about = "Start an interactive session")]
    Shell,
}

enum Request {
    Mutation(Command),
    View(View),
    Shell,
}

impl Commands {
    /// Relative start dates such as "yesterday" are resolved against `now`.
    fn into_request(self, now: DateTime<Local>) -> Result<Request> {
        let request = match self {
            Commands::Start {
                date,
                weight,
                date_style,
            } => Request::Mutation(Command::SetStart {
                date: parse_start_date(date, date_style, now)?,
                weight,
            }),
            Commands::Status => Request::View(View::Status),
            Commands::Check { item, undo } => {
                Request::Mutation(Command::SetCheck { item, done: !undo })
            }
            Commands::Water { cups } => Request::Mutation(Command::SetWater { cups }),
            Commands::Photo { path } => Request::Mutation(Command::UploadPhoto { path }),
            Commands::Done => Request::Mutation(Command::MarkDayDone),
            Commands::Reset => Request::Mutation(Command::Reset),
            Commands::Weight { value } => Request::Mutation(Command::LogWeight { input: value }),
            Commands::Days => Request::View(View::Days),
            Commands::Stats => Request::View(View::Stats),
            Commands::Weights => Request::View(View::Weights),
            Commands::Shell => Request::Shell,
        };
        Ok(request)
    }
}

/// Accepts ISO dates first and falls back to natural language.
fn parse_start_date(
    date: Option<String>,
    date_style: DateStyle,
    now: DateTime<Local>,
) -> Result<Option<NaiveDate>> {
    let Some(date) = date else {
        return Ok(None);
    };
    if let Some(date) = parse_iso(&date) {
        return Ok(Some(date));
    }
    match parse_date_string(&date, now, date_style.into()) {
        Ok(v) => Ok(Some(v.date_naive())),
        Err(e) => Err(Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!("Failed to validate start date {e}"),
            )
            .into()),
    }
}

/// View worth showing after a command went through.
fn view_after(command: &Command) -> View {
    match command {
        Command::LogWeight { .. } => View::Weights,
        _ => View::Status,
    }
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let app_dir = args.dir.map_or_else(create_application_default_path, Ok)?;
    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(CLI_PREFIX, &app_dir, logging_level, args.log)?;

    let confirmer: Box<dyn Confirmer> = if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirmer)
    };
    let store = FileStore::new(app_dir)?;
    let mut session = Session::open(store, Box::new(DefaultClock), confirmer).await?;

    match args.commands {
        Commands::Shell => shell::run_shell(&mut session).await,
        command => {
            execute(&mut session, command).await?;
            if let Some(notice) = session.notice() {
                println!("{}", render::notice(notice));
            }
            Ok(())
        }
    }
}

/// Runs a parsed command against the session and prints what changed.
pub async fn execute<S: KeyValueStore>(session: &mut Session<S>, command: Commands) -> Result<()> {
    match command.into_request(session.manager().now())? {
        Request::View(view) => println!("{}", render_view(view, session.manager())),
        Request::Mutation(command) => {
            let view = view_after(&command);
            if session.dispatch(command).await?.is_ok() {
                println!("{}", render_view(view, session.manager()));
            }
        }
        Request::Shell => println!("Already in a shell."),
    }
    Ok(())
}
