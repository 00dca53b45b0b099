//! User-facing message rendering. Every function is pure; only the main
//! loop prints.

use taskline_core::task::Task;

const DIVIDER: &str = "____________________________________________________________";

fn framed(body: &str) -> String {
    format!("{}\n{}\n{}", DIVIDER, body, DIVIDER)
}

pub fn greeting() -> String {
    framed("Hello! I'm Taskline\nWhat can I do for you?")
}

pub fn farewell() -> String {
    framed("Bye. Hope to see you again soon!")
}

pub fn added(task: &Task, size: usize) -> String {
    framed(&format!(
        "Got it. I've added this task:\n  {}\nNow you have {} tasks in the list.",
        task.display_line(),
        size
    ))
}

pub fn removed(task: &Task, size: usize) -> String {
    framed(&format!(
        "Noted. I've removed this task:\n  {}\nNow you have {} tasks in the list.",
        task.display_line(),
        size
    ))
}

pub fn marked(task: &Task) -> String {
    framed(&format!(
        "Nice! I've marked this task as done:\n  {}",
        task.display_line()
    ))
}

pub fn unmarked(task: &Task) -> String {
    framed(&format!(
        "OK, I've marked this task as not done yet:\n  {}",
        task.display_line()
    ))
}

pub fn listing(tasks: &[Task]) -> String {
    let mut body = String::from("Here are the tasks in your list:");
    for (idx, task) in tasks.iter().enumerate() {
        body.push_str(&format!("\n{}. {}", idx + 1, task.display_line()));
    }
    framed(&body)
}

pub fn invalid_task_number() -> String {
    framed("OOPS!!! The task number is invalid.")
}

pub fn unknown_command() -> String {
    framed("OOPS!!! I'm sorry, but I don't know what that means :-(")
}

pub fn error(message: &str) -> String {
    framed(&format!("OOPS!!! {}", message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_numbers_tasks_from_one() {
        let tasks = vec![
            Task::todo("read book").expect("task"),
            Task::deadline("submit report", "2024-12-01").expect("task"),
        ];
        let rendered = listing(&tasks);
        assert!(rendered.contains("1. [T][ ] read book"));
        assert!(rendered.contains("2. [D][ ] submit report (by: 2024-12-01)"));
    }

    #[test]
    fn messages_are_framed_by_dividers() {
        let rendered = greeting();
        assert!(rendered.starts_with(DIVIDER));
        assert!(rendered.ends_with(DIVIDER));

        let task = Task::todo("read book").expect("task");
        assert!(added(&task, 1).contains("Now you have 1 tasks in the list."));
    }
}
