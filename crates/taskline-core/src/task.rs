use thiserror::Error;

/// The literal field separator in the persisted line format.
pub const FIELD_SEPARATOR: &str = " | ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task description cannot be empty")]
    EmptyDescription,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskParseError {
    #[error("Unknown task category: {0}")]
    UnknownCategory(String),
    #[error("Task line has too few fields: {0}")]
    MissingFields(String),
    #[error("Event time range must be <from>-<to>: {0}")]
    BadTimeRange(String),
    #[error(transparent)]
    Invalid(#[from] TaskError),
}

/// Category-specific payload. The category is fixed at construction and
/// decides which extra fields exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: String },
    Event { from: String, to: String },
}

impl TaskKind {
    /// The one-letter category tag used in both display and storage.
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Result<Self, TaskError> {
        Self::new(description.into(), TaskKind::Todo)
    }

    pub fn deadline(
        description: impl Into<String>,
        by: impl Into<String>,
    ) -> Result<Self, TaskError> {
        let by = by.into();
        if by.trim().is_empty() {
            return Err(TaskError::MissingField("by"));
        }
        Self::new(description.into(), TaskKind::Deadline { by })
    }

    pub fn event(
        description: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, TaskError> {
        let from = from.into();
        let to = to.into();
        if from.trim().is_empty() {
            return Err(TaskError::MissingField("from"));
        }
        if to.trim().is_empty() {
            return Err(TaskError::MissingField("to"));
        }
        Self::new(description.into(), TaskKind::Event { from, to })
    }

    fn new(description: String, kind: TaskKind) -> Result<Self, TaskError> {
        if description.trim().is_empty() {
            return Err(TaskError::EmptyDescription);
        }
        Ok(Self {
            description,
            done: false,
            kind,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn category(&self) -> char {
        self.kind.tag()
    }

    pub fn mark(&mut self) {
        self.done = true;
    }

    pub fn unmark(&mut self) {
        self.done = false;
    }

    /// Human-readable one-liner, e.g. `[D][X] submit report (by: 2024-12-01)`.
    pub fn display_line(&self) -> String {
        let status = if self.done { 'X' } else { ' ' };
        match &self.kind {
            TaskKind::Todo => format!("[T][{}] {}", status, self.description),
            TaskKind::Deadline { by } => {
                format!("[D][{}] {} (by: {})", status, self.description, by)
            }
            TaskKind::Event { from, to } => format!(
                "[E][{}] {} (from: {} to: {})",
                status, self.description, from, to
            ),
        }
    }

    /// Persisted form, newline-terminated. Exact inverse of
    /// [`Task::parse_save_line`].
    pub fn save_line(&self) -> String {
        let status = if self.done { '1' } else { '0' };
        match &self.kind {
            TaskKind::Todo => format!("T | {} | {}\n", status, self.description),
            TaskKind::Deadline { by } => {
                format!("D | {} | {} | {}\n", status, self.description, by)
            }
            TaskKind::Event { from, to } => {
                format!("E | {} | {} | {}-{}\n", status, self.description, from, to)
            }
        }
    }

    /// Parses one persisted line (without its trailing newline).
    ///
    /// Fields are split on the literal `" | "`. Any status other than `"0"`
    /// counts as done. The Event range splits on the first hyphen; a `from`
    /// containing a hyphen corrupts silently (known limitation of the
    /// format). Fields beyond what the category needs are ignored.
    pub fn parse_save_line(line: &str) -> Result<Self, TaskParseError> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() < 3 {
            return Err(TaskParseError::MissingFields(line.to_string()));
        }
        let description = fields[2];
        let mut task = match fields[0] {
            "T" => Task::todo(description)?,
            "D" => {
                let by = fields
                    .get(3)
                    .ok_or_else(|| TaskParseError::MissingFields(line.to_string()))?;
                Task::deadline(description, *by)?
            }
            "E" => {
                let range = fields
                    .get(3)
                    .ok_or_else(|| TaskParseError::MissingFields(line.to_string()))?;
                let (from, to) = range
                    .split_once('-')
                    .ok_or_else(|| TaskParseError::BadTimeRange((*range).to_string()))?;
                Task::event(description, from, to)?
            }
            other => return Err(TaskParseError::UnknownCategory(other.to_string())),
        };
        if fields[1] != "0" {
            task.mark();
        }
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn constructors_reject_missing_fields() {
        assert_eq!(Task::todo("  "), Err(TaskError::EmptyDescription));
        assert_eq!(
            Task::deadline("submit report", ""),
            Err(TaskError::MissingField("by"))
        );
        assert_eq!(
            Task::event("team sync", "", "1000"),
            Err(TaskError::MissingField("from"))
        );
        assert_eq!(
            Task::event("team sync", "0900", " "),
            Err(TaskError::MissingField("to"))
        );
    }

    #[test]
    fn mark_and_unmark_are_idempotent() {
        let mut task = Task::todo("read book").expect("task");
        assert!(!task.is_done());
        task.mark();
        task.mark();
        assert!(task.is_done());
        task.unmark();
        task.unmark();
        assert!(!task.is_done());
    }

    #[test]
    fn display_line_shows_category_and_status() {
        let mut todo = Task::todo("read book").expect("task");
        assert_eq!(todo.display_line(), "[T][ ] read book");
        todo.mark();
        assert_eq!(todo.display_line(), "[T][X] read book");

        let deadline = Task::deadline("submit report", "2024-12-01").expect("task");
        assert_eq!(
            deadline.display_line(),
            "[D][ ] submit report (by: 2024-12-01)"
        );

        let event = Task::event("team sync", "0900", "1000").expect("task");
        assert_eq!(
            event.display_line(),
            "[E][ ] team sync (from: 0900 to: 1000)"
        );
    }

    #[test]
    fn save_line_round_trips_every_variant() {
        let mut deadline = Task::deadline("submit report", "2024-12-01").expect("task");
        deadline.mark();
        let tasks = [
            Task::todo("read book").expect("task"),
            deadline,
            Task::event("team sync", "0900", "1000").expect("task"),
        ];
        for task in &tasks {
            let line = task.save_line();
            assert!(line.ends_with('\n'));
            let parsed = Task::parse_save_line(line.trim_end()).expect("parse");
            assert_eq!(&parsed, task);
        }
    }

    #[test]
    fn parse_save_line_reads_example_lines() {
        let task = Task::parse_save_line("D | 1 | submit report | 2024-12-01").expect("parse");
        assert!(task.is_done());
        assert_eq!(task.description(), "submit report");
        assert_eq!(
            task.kind(),
            &TaskKind::Deadline {
                by: "2024-12-01".to_string()
            }
        );

        let task = Task::parse_save_line("E | 0 | team sync | 0900-1000").expect("parse");
        assert_eq!(
            task.kind(),
            &TaskKind::Event {
                from: "0900".to_string(),
                to: "1000".to_string()
            }
        );
    }

    #[test]
    fn parse_save_line_treats_any_nonzero_status_as_done() {
        let task = Task::parse_save_line("T | done | read book").expect("parse");
        assert!(task.is_done());
    }

    #[test]
    fn parse_save_line_rejects_unknown_category() {
        let err = Task::parse_save_line("X | 0 | mystery").expect_err("unknown category");
        assert_eq!(err, TaskParseError::UnknownCategory("X".to_string()));
    }

    #[test]
    fn parse_save_line_rejects_short_and_malformed_lines() {
        assert!(matches!(
            Task::parse_save_line("T | 0"),
            Err(TaskParseError::MissingFields(_))
        ));
        assert!(matches!(
            Task::parse_save_line("D | 0 | submit report"),
            Err(TaskParseError::MissingFields(_))
        ));
        assert!(matches!(
            Task::parse_save_line("E | 0 | team sync | 09001000"),
            Err(TaskParseError::BadTimeRange(_))
        ));
    }

    #[test]
    fn event_range_splits_on_first_hyphen() {
        let task = Task::parse_save_line("E | 0 | standup | 09-00-1000").expect("parse");
        assert_eq!(
            task.kind(),
            &TaskKind::Event {
                from: "09".to_string(),
                to: "00-1000".to_string()
            }
        );
    }
}
