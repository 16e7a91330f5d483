mod handlers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taskboard::config::{Config, Overrides};
use taskboard::logging::init_logging;

#[derive(Parser)]
#[command(name = "taskboard", version, about = "Your to-do list, ordered by what is due")]
struct Cli {
    /// Data directory holding the task store [env: TASKBOARD_DIR]
    #[arg(long, global = true)]
    dir: Option<PathBuf>,
    /// Evaluate as of this instant (YYYY-MM-DD or YYYY-MM-DDTHH:MM) [env: TASKBOARD_NOW]
    #[arg(long, global = true)]
    now: Option<String>,
    /// Log filter, e.g. "debug" [env: TASKBOARD_LOG, RUST_LOG]
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Initialize the task store
    Init,
    /// Add a new task
    Add {
        title: String,
        /// General, Trabajo, Estudio, Personal, Otros, or any label
        #[arg(long, short = 'c')]
        category: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long, short = 'd')]
        due: Option<String>,
        #[arg(long, short = 'D')]
        description: Option<String>,
    },
    /// List tasks, soonest due first
    List {
        /// Only this category ("Todas" for all)
        #[arg(long, short = 'c')]
        category: Option<String>,
        /// Show full descriptions
        #[arg(long)]
        expand: bool,
        #[arg(long)]
        json: bool,
    },
    /// List completed tasks
    Completed {
        #[arg(long)]
        json: bool,
    },
    /// Mark a task completed, or pending again
    Toggle { id: i64 },
    /// Change fields of a task
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, short = 'c')]
        category: Option<String>,
        #[arg(long, short = 'd', conflicts_with = "clear_due")]
        due: Option<String>,
        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
        #[arg(long, short = 'D')]
        description: Option<String>,
    },
    /// Delete a task
    Delete { id: i64 },
    /// Show the statistics dashboard
    Stats {
        /// Read tasks from a JSON snapshot instead of the store
        #[arg(long)]
        from: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Load tasks from a JSON snapshot
    Import { file: PathBuf },
    /// Print all tasks as a JSON snapshot
    Export,
    /// Start a session
    Login { username: String },
    /// End the current session
    Logout,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::resolve(Overrides {
        data_dir: cli.dir,
        log_level: cli.log_level,
        now: cli.now,
    })?;
    init_logging(&config.log_level)?;

    match cli.command {
        Commands::Init
        | Commands::Add { .. }
        | Commands::Toggle { .. }
        | Commands::Edit { .. }
        | Commands::Delete { .. }
        | Commands::Import { .. }
        | Commands::Login { .. }
        | Commands::Logout => dispatch_write_ops(&config, cli.command),
        Commands::List { .. }
        | Commands::Completed { .. }
        | Commands::Stats { .. }
        | Commands::Export => dispatch_read_ops(&config, cli.command),
    }
}

fn dispatch_write_ops(config: &Config, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init => handlers::init::handle(config),
        Commands::Add {
            title,
            category,
            due,
            description,
        } => handlers::add::handle(
            config,
            &title,
            category.as_deref(),
            due.as_deref(),
            description.as_deref(),
        ),
        Commands::Toggle { id } => handlers::toggle::handle(config, id),
        Commands::Edit {
            id,
            title,
            category,
            due,
            clear_due,
            description,
        } => handlers::edit::handle(
            config,
            id,
            handlers::edit::EditArgs {
                title: title.as_deref(),
                category: category.as_deref(),
                due: due.as_deref(),
                clear_due,
                description: description.as_deref(),
            },
        ),
        Commands::Delete { id } => handlers::delete::handle(config, id),
        Commands::Import { file } => handlers::import::handle(config, &file),
        Commands::Login { username } => handlers::login::handle(config, &username),
        Commands::Logout => handlers::logout::handle(config),
        _ => unreachable!("Invalid write command dispatch"),
    }
}

fn dispatch_read_ops(config: &Config, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List {
            category,
            expand,
            json,
        } => handlers::list::handle(config, category.as_deref(), expand, json),
        Commands::Completed { json } => handlers::completed::handle(config, json),
        Commands::Stats { from, json } => handlers::stats::handle(config, from.as_deref(), json),
        Commands::Export => handlers::export::handle(config),
        _ => unreachable!("Invalid read command dispatch"),
    }
}
