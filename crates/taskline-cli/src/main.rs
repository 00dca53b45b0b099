use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use flexi_logger::{Logger, LoggerHandle};
use log::warn;

use taskline_core::command::{parse_command, Command, CommandError};
use taskline_core::config::resolve_data_file;
use taskline_core::list::{tasks_to_json, ListError, TaskList};
use taskline_core::storage::{Storage, StorageError};
use taskline_core::task::{Task, TaskError};

mod ui;

#[derive(Parser)]
#[command(name = "taskline", version, about = "Line-based task tracker")]
struct Cli {
    /// Task file path; defaults to the configured or built-in location.
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let _logger = init_logging();
    let cli = Cli::parse();

    let root = std::env::current_dir()?;
    let path = resolve_data_file(&root, cli.file.as_deref());
    let storage = Storage::open(path)?;
    let mut list = match storage.load() {
        Ok(tasks) => TaskList::from_tasks(tasks),
        Err(StorageError::NotFound(_)) => TaskList::new(),
        Err(err) => return Err(err.into()),
    };

    println!("{}", ui::greeting());
    for line in io::stdin().lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Bye) => break,
            Ok(Command::List) => println!("{}", ui::listing(list.all())),
            Ok(Command::Export) => println!("{}", tasks_to_json(list.all())),
            Ok(Command::AddTodo { description }) => {
                println!("{}", add_task(Task::todo(description), &mut list, &storage));
            }
            Ok(Command::AddDeadline { description, by }) => {
                println!(
                    "{}",
                    add_task(Task::deadline(description, by), &mut list, &storage)
                );
            }
            Ok(Command::AddEvent {
                description,
                from,
                to,
            }) => {
                println!(
                    "{}",
                    add_task(Task::event(description, from, to), &mut list, &storage)
                );
            }
            Ok(Command::Mark { index }) => {
                println!("{}", mark_task(&mut list, &storage, index, true));
            }
            Ok(Command::Unmark { index }) => {
                println!("{}", mark_task(&mut list, &storage, index, false));
            }
            Ok(Command::Delete { index }) => {
                println!("{}", delete_task(&mut list, &storage, index));
            }
            Err(CommandError::Empty) => {}
            Err(CommandError::Unknown(_)) => println!("{}", ui::unknown_command()),
            Err(err) => println!("{}", ui::error(&err.to_string())),
        }
    }
    println!("{}", ui::farewell());
    Ok(())
}

fn add_task(
    constructed: Result<Task, TaskError>,
    list: &mut TaskList,
    storage: &Storage,
) -> String {
    let task = match constructed {
        Ok(task) => task,
        Err(err) => return ui::error(&err.to_string()),
    };
    let size = list.add(task);
    let message = ui::added(&list.all()[size - 1], size);
    with_save(list, storage, message)
}

fn mark_task(list: &mut TaskList, storage: &Storage, index: usize, done: bool) -> String {
    let outcome = if done {
        list.mark_at(index)
    } else {
        list.unmark_at(index)
    };
    let message = match outcome {
        Ok(task) if done => ui::marked(task),
        Ok(task) => ui::unmarked(task),
        Err(ListError::OutOfRange(_)) => return ui::invalid_task_number(),
    };
    with_save(list, storage, message)
}

fn delete_task(list: &mut TaskList, storage: &Storage, index: usize) -> String {
    let message = match list.remove(index) {
        Ok((task, size)) => ui::removed(&task, size),
        Err(ListError::OutOfRange(_)) => return ui::invalid_task_number(),
    };
    with_save(list, storage, message)
}

/// Flushes the whole list to disk after a mutation. A failed write is
/// reported and logged but does not end the session.
fn with_save(list: &TaskList, storage: &Storage, message: String) -> String {
    match storage.save_all(list.all()) {
        Ok(()) => message,
        Err(err) => {
            warn!(
                "failed to save tasks to {}: {}",
                storage.path().display(),
                err
            );
            format!(
                "{}\n{}",
                message,
                ui::error(&format!("Something went wrong saving your tasks: {}", err))
            )
        }
    }
}

fn init_logging() -> Option<LoggerHandle> {
    Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.start())
        .ok()
}
