use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("The {0} command needs a task number")]
    MissingIndex(&'static str),
    #[error("Not a task number: {0}")]
    InvalidIndex(String),
    #[error("The description of a {0} cannot be empty")]
    EmptyDescription(&'static str),
    #[error("The {0} command needs a {1} part")]
    MissingPart(&'static str, &'static str),
}

/// One user command, parsed but not yet applied. Indices are 1-based as
/// typed by the user; range checking happens against the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    AddTodo { description: String },
    AddDeadline { description: String, by: String },
    AddEvent { description: String, from: String, to: String },
    Mark { index: usize },
    Unmark { index: usize },
    Delete { index: usize },
    Export,
    Bye,
}

pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CommandError::Empty);
    }
    let (word, rest) = match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    };
    match word {
        "list" if rest.is_empty() => Ok(Command::List),
        "export" if rest.is_empty() => Ok(Command::Export),
        "bye" if rest.is_empty() => Ok(Command::Bye),
        "mark" => Ok(Command::Mark {
            index: parse_index("mark", rest)?,
        }),
        "unmark" => Ok(Command::Unmark {
            index: parse_index("unmark", rest)?,
        }),
        "delete" => Ok(Command::Delete {
            index: parse_index("delete", rest)?,
        }),
        "todo" => {
            if rest.is_empty() {
                return Err(CommandError::EmptyDescription("todo"));
            }
            Ok(Command::AddTodo {
                description: rest.to_string(),
            })
        }
        "deadline" => parse_deadline(rest),
        "event" => parse_event(rest),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_index(command: &'static str, rest: &str) -> Result<usize, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingIndex(command));
    }
    rest.parse::<usize>()
        .map_err(|_| CommandError::InvalidIndex(rest.to_string()))
}

fn parse_deadline(rest: &str) -> Result<Command, CommandError> {
    let (description, by) = rest
        .split_once("/by")
        .ok_or(CommandError::MissingPart("deadline", "/by"))?;
    let description = description.trim();
    let by = by.trim();
    if description.is_empty() {
        return Err(CommandError::EmptyDescription("deadline"));
    }
    if by.is_empty() {
        return Err(CommandError::MissingPart("deadline", "/by"));
    }
    Ok(Command::AddDeadline {
        description: description.to_string(),
        by: by.to_string(),
    })
}

fn parse_event(rest: &str) -> Result<Command, CommandError> {
    let (description, range) = rest
        .split_once("/from")
        .ok_or(CommandError::MissingPart("event", "/from"))?;
    let (from, to) = range
        .split_once("/to")
        .ok_or(CommandError::MissingPart("event", "/to"))?;
    let description = description.trim();
    let from = from.trim();
    let to = to.trim();
    if description.is_empty() {
        return Err(CommandError::EmptyDescription("event"));
    }
    if from.is_empty() {
        return Err(CommandError::MissingPart("event", "/from"));
    }
    if to.is_empty() {
        return Err(CommandError::MissingPart("event", "/to"));
    }
    Ok(Command::AddEvent {
        description: description.to_string(),
        from: from.to_string(),
        to: to.to_string(),
    })
}
