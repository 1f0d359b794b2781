mod app;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use finals::exams::Priority;
use finals::prefs::ViewMode;

#[derive(Parser)]
#[command(name = "finals", about = "Exam tracking and countdown dashboard", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum PriorityArg {
    High,
    Normal,
    Low,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::High => Priority::High,
            PriorityArg::Normal => Priority::Normal,
            PriorityArg::Low => Priority::Low,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ViewModeArg {
    List,
    Grid,
}

impl From<ViewModeArg> for ViewMode {
    fn from(arg: ViewModeArg) -> Self {
        match arg {
            ViewModeArg::List => ViewMode::List,
            ViewModeArg::Grid => ViewMode::Grid,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Show the exam dashboard
    List {
        /// Only exams still ahead
        #[arg(long)]
        upcoming: bool,
        /// Include started exams even when hide-completed is set
        #[arg(long)]
        all: bool,
    },

    /// Show one exam with its topic checklist
    Show {
        /// Course name (case-insensitive prefix match)
        course: String,
    },

    /// Show the next upcoming exam and its countdown
    Next,

    /// Live countdown, refreshed every second
    Watch {
        /// Watch a specific course instead of the next exam
        course: Option<String>,
    },

    /// Add a new exam
    Add {
        /// Course name
        course: String,
        /// Exam date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Start time (HH:MM)
        #[arg(long)]
        time: String,
        /// Where the exam takes place
        #[arg(long)]
        location: String,
        #[arg(long, value_enum, default_value = "normal")]
        priority: PriorityArg,
        /// Midterm grade, if already known
        #[arg(long)]
        midterm: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Edit fields of an existing exam
    Edit {
        /// Course name (case-insensitive prefix match)
        course: String,
        /// New course name
        #[arg(long)]
        name: Option<String>,
        /// Exam date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Start time (HH:MM)
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long, value_enum)]
        priority: Option<PriorityArg>,
        /// Midterm grade (pass an empty string to clear)
        #[arg(long)]
        midterm: Option<String>,
        /// Notes (pass an empty string to clear)
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete an exam and its topics
    Delete {
        /// Course name (case-insensitive prefix match)
        course: String,
    },

    /// Manage a course's study topics
    #[command(subcommand)]
    Topic(TopicCommand),

    /// Get or set the dashboard view mode
    View {
        #[arg(value_enum)]
        mode: Option<ViewModeArg>,
    },

    /// Get or set whether started exams are hidden from the dashboard
    HideCompleted {
        #[arg(value_enum)]
        state: Option<OnOff>,
    },
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OnOff {
    On,
    Off,
}

#[derive(Subcommand)]
enum TopicCommand {
    /// Add a study topic to a course
    Add {
        course: String,
        /// Topic text
        text: String,
    },
    /// Toggle a topic's completed state
    Done {
        course: String,
        /// Topic text (case-insensitive prefix match)
        topic: String,
    },
    /// Remove a topic from a course
    Remove {
        course: String,
        /// Topic text (case-insensitive prefix match)
        topic: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut app = app::App::new(cli.data_dir.as_deref())?;

    match cli.command {
        Command::List { upcoming, all } => {
            commands::list::run(&mut app, upcoming, all, &cli.format)?;
        }
        Command::Show { course } => {
            commands::show::run(&app, &course, &cli.format)?;
        }
        Command::Next => {
            commands::next::run(&app, &cli.format)?;
        }
        Command::Watch { course } => {
            commands::watch::run(&app, course.as_deref())?;
        }
        Command::Add {
            course,
            date,
            time,
            location,
            priority,
            midterm,
            notes,
        } => {
            commands::add::run(
                &mut app, &course, &date, &time, &location, priority, midterm, notes,
                &cli.format,
            )?;
        }
        Command::Edit {
            course,
            name,
            date,
            time,
            location,
            priority,
            midterm,
            notes,
        } => {
            let fields = commands::edit::EditFields {
                name,
                date,
                time,
                location,
                priority,
                midterm,
                notes,
            };
            commands::edit::run(&mut app, &course, fields, &cli.format)?;
        }
        Command::Delete { course } => {
            commands::delete::run(&mut app, &course)?;
        }
        Command::Topic(subcmd) => match subcmd {
            TopicCommand::Add { course, text } => {
                commands::topic::run_add(&mut app, &course, &text)?;
            }
            TopicCommand::Done { course, topic } => {
                commands::topic::run_done(&mut app, &course, &topic)?;
            }
            TopicCommand::Remove { course, topic } => {
                commands::topic::run_remove(&mut app, &course, &topic)?;
            }
        },
        Command::View { mode } => {
            commands::prefs::run_view(&app, mode.map(Into::into))?;
        }
        Command::HideCompleted { state } => {
            let state = state.map(|s| matches!(s, OnOff::On));
            commands::prefs::run_hide_completed(&app, state)?;
        }
    }

    Ok(())
}
