use thiserror::Error;

use crate::task::{Task, TaskKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("No task with number {0}")]
    OutOfRange(usize),
}

/// Ordered, mutable task collection. Insertion order is the display and
/// storage order. All indices are 1-based, matching what the user sees.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task and returns the new size.
    pub fn add(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len()
    }

    /// Removes the task at a 1-based index, returning it with the new size.
    pub fn remove(&mut self, index: usize) -> Result<(Task, usize), ListError> {
        self.check_index(index)?;
        let task = self.tasks.remove(index - 1);
        Ok((task, self.tasks.len()))
    }

    pub fn mark_at(&mut self, index: usize) -> Result<&Task, ListError> {
        self.check_index(index)?;
        let task = &mut self.tasks[index - 1];
        task.mark();
        Ok(task)
    }

    pub fn unmark_at(&mut self, index: usize) -> Result<&Task, ListError> {
        self.check_index(index)?;
        let task = &mut self.tasks[index - 1];
        task.unmark();
        Ok(task)
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index == 0 || index > self.tasks.len() {
            return Err(ListError::OutOfRange(index));
        }
        Ok(())
    }
}

pub fn tasks_to_json(tasks: &[Task]) -> String {
    let payload: Vec<serde_json::Value> = tasks.iter().map(task_to_json_value).collect();
    serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "[]".to_string())
}

fn task_to_json_value(task: &Task) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    map.insert(
        "category".to_string(),
        serde_json::Value::String(task.category().to_string()),
    );
    map.insert("done".to_string(), serde_json::Value::Bool(task.is_done()));
    map.insert(
        "description".to_string(),
        serde_json::Value::String(task.description().to_string()),
    );
    match task.kind() {
        TaskKind::Todo => {}
        TaskKind::Deadline { by } => {
            map.insert("by".to_string(), serde_json::Value::String(by.clone()));
        }
        TaskKind::Event { from, to } => {
            map.insert("from".to_string(), serde_json::Value::String(from.clone()));
            map.insert("to".to_string(), serde_json::Value::String(to.clone()));
        }
    }
    serde_json::Value::Object(map)
}
