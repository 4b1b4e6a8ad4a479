//! Dependency graph built from parsed tasks.
//!
//! Each task identifier maps to the identifiers it depends on and the
//! identifiers of known tasks that depend on it. References to unknown
//! identifiers are kept on the `depends_on` side only.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::task::Task;

/// Edges of a single graph entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyEntry {
    pub depends_on: Vec<String>,
    pub depended_by: Vec<String>,
}

/// Mapping from task identifier to its dependency edges.
///
/// Serializes as a plain JSON object keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    entries: BTreeMap<String, DependencyEntry>,
}

impl DependencyGraph {
    /// Build the graph in two passes: one entry per task, then back-edges.
    ///
    /// Tasks without an identifier share the empty-string key; a later task
    /// with the same identifier replaces an earlier entry's `depends_on`.
    pub fn build(tasks: &[Task]) -> Self {
        let mut entries: BTreeMap<String, DependencyEntry> = BTreeMap::new();

        for task in tasks {
            entries.insert(
                task.id.clone(),
                DependencyEntry {
                    depends_on: task.dependencies.clone(),
                    depended_by: Vec::new(),
                },
            );
        }

        for task in tasks {
            for dep in &task.dependencies {
                if let Some(entry) = entries.get_mut(dep) {
                    entry.depended_by.push(task.id.clone());
                }
            }
        }

        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&DependencyEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dependency identifiers that match no known task.
    pub fn dangling(&self) -> Vec<&str> {
        let mut dangling: Vec<&str> = self
            .entries
            .values()
            .flat_map(|entry| entry.depends_on.iter())
            .map(String::as_str)
            .filter(|dep| !self.entries.contains_key(*dep))
            .collect();
        dangling.sort_unstable();
        dangling.dedup();
        dangling
    }

    /// Pretty-printed JSON with non-ASCII text kept verbatim.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
