use crate::grammar::{self, Field, Priority};

use super::{ExtractedField, Section};

/// A single task parsed from a design document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Position of the section in the document (0-indexed, unique).
    pub seq: usize,
    /// Index written in the section heading.
    pub number: u64,
    /// Title from the section heading.
    pub name: String,
    /// Task identifier from the `タスクID` field (empty when absent).
    pub id: String,
    pub priority: Priority,
    /// Identifiers of tasks this one depends on.
    pub dependencies: Vec<String>,
    /// Free-text assignee hint from the `担当` field.
    pub assignee_hint: Option<String>,
    pub description: String,
    pub input: String,
    pub output: String,
    pub completion_criteria: String,
}

impl Task {
    /// Create a task with every field at its default.
    pub fn new(seq: usize, number: u64, name: impl Into<String>) -> Self {
        Self {
            seq,
            number,
            name: name.into(),
            id: String::new(),
            priority: Priority::default(),
            dependencies: Vec::new(),
            assignee_hint: None,
            description: String::new(),
            input: String::new(),
            output: String::new(),
            completion_criteria: String::new(),
        }
    }

    /// Build a task from a section and the fields extracted from its body.
    pub fn from_section(seq: usize, section: &Section<'_>, fields: Vec<ExtractedField>) -> Self {
        let mut task = Task::new(seq, section.number, section.title);
        for ExtractedField { field, value } in fields {
            task.apply(field, value);
        }
        task
    }

    fn apply(&mut self, field: Field, value: String) {
        match field {
            Field::Id => self.id = value,
            Field::Priority => self.priority = Priority::classify(&value),
            Field::Dependencies => self.dependencies = parse_dependencies(&value),
            Field::Assignee => {
                if !value.is_empty() {
                    self.assignee_hint = Some(value);
                }
            }
            Field::Description => self.description = value,
            Field::Input => self.input = value,
            Field::Output => self.output = value,
            Field::CompletionCriteria => self.completion_criteria = value,
        }
    }

    /// Dependencies joined with commas, or the no-dependency placeholder.
    pub fn dependencies_display(&self) -> String {
        if self.dependencies.is_empty() {
            grammar::NO_DEPENDENCY_DISPLAY.to_string()
        } else {
            self.dependencies.join(", ")
        }
    }
}

/// Split a dependency value into identifiers.
///
/// The no-dependency sentinel yields an empty list; otherwise the value is
/// split on commas and each piece trimmed. Empty pieces are dropped.
pub(super) fn parse_dependencies(value: &str) -> Vec<String> {
    if grammar::is_no_dependency(value) {
        return Vec::new();
    }
    value
        .split(',')
        .map(str::trim)
        .filter(|dep| !dep.is_empty())
        .map(String::from)
        .collect()
}
