//! Command-line surface over `minutes_core`.
//!
//! # Responsibility
//! - Build the startup configuration (env + flags) in one place.
//! - Map subcommands onto core services; no business logic lives here.

use clap::{Parser, Subcommand};
use minutes_core::db::{open_db, open_db_in_memory};
use minutes_core::{
    extract_action_items, health_report, init_logging, AppConfig, DatabaseLocation,
    SqliteTaskRepository, SqliteTranscriptRepository, Task, TaskService, TaskStatus,
    TranscriptService, TranscriptWithTasks,
};
use rusqlite::Connection;
use std::error::Error;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "minutes",
    version,
    about = "Extract and track action items from meeting transcripts"
)]
struct Cli {
    /// Database file to use; overrides the MINUTES_DB environment variable.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ingest a transcript file (`-` for stdin) and store its action items.
    Ingest { file: PathBuf },
    /// Extract action items from a transcript without storing anything.
    Extract {
        file: PathBuf,
        /// Emit machine-readable JSON instead of plain lines.
        #[arg(long)]
        json: bool,
    },
    /// List stored tasks, newest first.
    Tasks {
        /// Filter by status: `open` or `done`.
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Mark a task as done.
    Done { id: Uuid },
    /// Reopen a completed task.
    Reopen { id: Uuid },
    /// Delete one task; its transcript stays.
    RmTask { id: Uuid },
    /// Delete a transcript together with all of its tasks.
    RmTranscript { id: Uuid },
    /// Show recent transcripts with their tasks.
    Recent {
        #[arg(long, default_value_t = 5)]
        limit: u32,
    },
    /// Report backend, database and extractor health.
    Status,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(db) = &cli.db {
        config.database = DatabaseLocation::File(db.clone());
    }

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("warning: {err}");
        }
    }
    log::debug!(
        "event=cli_start module=cli status=ok version={}",
        env!("CARGO_PKG_VERSION")
    );

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Extract { file, json } => {
            let text = read_input(&file)?;
            let items = extract_action_items(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else if items.is_empty() {
                println!("no action items found");
            } else {
                for item in &items {
                    println!(
                        "- {} (owner: {}, due: {})",
                        item.task,
                        item.owner.as_deref().unwrap_or("-"),
                        item.due_date.as_deref().unwrap_or("-")
                    );
                }
            }
            Ok(())
        }
        Command::Ingest { file } => {
            let text = read_input(&file)?;
            let conn = open_connection(config)?;
            let service = transcript_service(&conn)?;
            let outcome = service.ingest(&text)?;
            println!(
                "stored transcript {} with {} task(s)",
                outcome.transcript.uuid,
                outcome.tasks.len()
            );
            for task in &outcome.tasks {
                print_task(task);
            }
            Ok(())
        }
        Command::Tasks { status, limit } => {
            let status = status.as_deref().map(parse_status).transpose()?;
            let conn = open_connection(config)?;
            let service = TaskService::new(SqliteTaskRepository::try_new(&conn)?);
            let tasks = service.list_tasks(status, limit)?;
            if tasks.is_empty() {
                println!("no tasks");
            }
            for task in &tasks {
                print_task(task);
            }
            Ok(())
        }
        Command::Done { id } => {
            let conn = open_connection(config)?;
            let service = TaskService::new(SqliteTaskRepository::try_new(&conn)?);
            let task = service.set_status(id, TaskStatus::Done)?;
            print_task(&task);
            Ok(())
        }
        Command::Reopen { id } => {
            let conn = open_connection(config)?;
            let service = TaskService::new(SqliteTaskRepository::try_new(&conn)?);
            let task = service.set_status(id, TaskStatus::Open)?;
            print_task(&task);
            Ok(())
        }
        Command::RmTask { id } => {
            let conn = open_connection(config)?;
            let service = TaskService::new(SqliteTaskRepository::try_new(&conn)?);
            service.delete_task(id)?;
            println!("deleted task {id}");
            Ok(())
        }
        Command::RmTranscript { id } => {
            let conn = open_connection(config)?;
            let service = transcript_service(&conn)?;
            service.delete_transcript(id)?;
            println!("deleted transcript {id} and its tasks");
            Ok(())
        }
        Command::Recent { limit } => {
            let conn = open_connection(config)?;
            let service = transcript_service(&conn)?;
            for entry in service.list_recent_with_tasks(limit)? {
                print_transcript(&entry);
            }
            Ok(())
        }
        Command::Status => {
            let conn = open_connection(config)?;
            let report = health_report(&conn);
            println!("backend:   {}", report.backend);
            println!("database:  {}", report.database);
            println!("extractor: {}", report.extractor);
            if !report.all_ok() {
                return Err("one or more components are unhealthy".into());
            }
            Ok(())
        }
    }
}

fn open_connection(config: &AppConfig) -> Result<Connection, Box<dyn Error>> {
    let conn = match &config.database {
        DatabaseLocation::File(path) => open_db(path)?,
        DatabaseLocation::Memory => open_db_in_memory()?,
    };
    Ok(conn)
}

fn transcript_service<'conn>(
    conn: &'conn Connection,
) -> Result<
    TranscriptService<SqliteTranscriptRepository<'conn>, SqliteTaskRepository<'conn>>,
    Box<dyn Error>,
> {
    Ok(TranscriptService::new(
        SqliteTranscriptRepository::try_new(conn)?,
        SqliteTaskRepository::try_new(conn)?,
    ))
}

fn parse_status(value: &str) -> Result<TaskStatus, Box<dyn Error>> {
    TaskStatus::parse_db_str(value)
        .ok_or_else(|| format!("status must be 'open' or 'done', got `{value}`").into())
}

fn read_input(file: &PathBuf) -> Result<String, Box<dyn Error>> {
    let text = if file.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(file)?
    };
    Ok(text)
}

fn print_task(task: &Task) {
    println!(
        "[{}] {} | {} (owner: {}, due: {})",
        task.status.as_db_str(),
        task.uuid,
        task.description,
        task.owner.as_deref().unwrap_or("-"),
        task.due_date.as_deref().unwrap_or("-")
    );
}

fn print_transcript(entry: &TranscriptWithTasks) {
    let preview: String = entry.transcript.text.chars().take(60).collect();
    println!("transcript {} | {preview}", entry.transcript.uuid);
    for task in &entry.tasks {
        print_task(task);
    }
}
