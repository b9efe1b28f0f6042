// ABOUTME: Markdown task parser for the weekly-deck application
// ABOUTME: Extracts tasks and their sections from a weekly status markdown file

use log::info;

/// Start marker for the author-facing format notes block. Everything from
/// this line to the next `---` is excluded from parsing.
const FORMAT_SPEC_PREFIX: &str = "**格式規範";

/// One reported work item, rendered later as one slide.
///
/// `sections` is an explicitly ordered list rather than a map: the order the
/// subsections appeared in the source document is the order they must be
/// looked up and displayed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub sections: Vec<(String, Vec<String>)>,
}

impl Task {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// Look up a section's content lines by title. A duplicated title
    /// resolves to its last occurrence.
    pub fn section(&self, title: &str) -> Option<&[String]> {
        self.sections
            .iter()
            .rev()
            .find(|(t, _)| t == title)
            .map(|(_, lines)| lines.as_slice())
    }
}

/// Parser state. Content lines are only legal in `InSection`; a section only
/// becomes visible on the task once it is flushed by a transition out of
/// `InSection` (next header, separator, or end of input).
enum State {
    Outside,
    InTask {
        task: Task,
    },
    InSection {
        task: Task,
        title: String,
        lines: Vec<String>,
    },
}

impl State {
    /// Close the open section (if any) and hand back the open task (if any).
    fn into_task(self) -> Option<Task> {
        match self {
            State::Outside => None,
            State::InTask { task } => Some(task),
            State::InSection {
                mut task,
                title,
                lines,
            } => {
                task.sections.push((title, lines));
                Some(task)
            }
        }
    }
}

/// Parse a weekly status markdown document into an ordered list of tasks.
///
/// Recognized structure, first match wins per line:
/// - `---` alone on a line terminates the current task (or the format block),
/// - `## ` headings containing `Task`, `任務`, or `:` open a task,
/// - `### ` headings open a subsection of the current task,
/// - lines indented by 2+ spaces are content of the open subsection.
///
/// Anything else is ignored. Malformed input never errors; unattached
/// headings and content are silently dropped.
pub fn parse(text: &str) -> Vec<Task> {
    let mut tasks = Vec::new();
    let mut state = State::Outside;
    let mut in_format_spec = false;

    for line in text.lines() {
        // Horizontal rule: ends the format block, or flushes the open task.
        if line.trim() == "---" {
            if in_format_spec {
                in_format_spec = false;
            } else if let Some(task) =
                std::mem::replace(&mut state, State::Outside).into_task()
            {
                tasks.push(task);
            }
            continue;
        }

        if in_format_spec || line.starts_with(FORMAT_SPEC_PREFIX) {
            in_format_spec = true;
            continue;
        }

        if let Some(name) = task_header(line) {
            if let Some(done) = std::mem::replace(&mut state, State::Outside).into_task() {
                tasks.push(done);
            }
            state = State::InTask {
                task: Task::new(name),
            };
        } else if let Some(title) = line.strip_prefix("### ") {
            // A subsection with no open task has nothing to attach to.
            state = match std::mem::replace(&mut state, State::Outside).into_task() {
                Some(task) => State::InSection {
                    task,
                    title: title.trim().to_string(),
                    lines: Vec::new(),
                },
                None => State::Outside,
            };
        } else if line.starts_with("  ") && !line.trim().is_empty() {
            if let State::InSection { lines, .. } = &mut state {
                lines.push(line.trim().to_string());
            }
        }
        // Blank lines and unindented prose fall through untouched.
    }

    if let Some(task) = state.into_task() {
        tasks.push(task);
    }

    info!("Parsed {} tasks from markdown input", tasks.len());
    tasks
}

/// A task header is a level-2 heading that names a task: it contains the
/// literal `Task`, the localized `任務`, or a `name: detail` colon.
fn task_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("## ")?;
    if line.contains("Task") || line.contains("任務") || line.contains(':') {
        Some(rest.trim())
    } else {
        None
    }
}
