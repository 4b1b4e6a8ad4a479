//! Three-way task assignment.
//!
//! Assignment runs in two passes over the parsed tasks and returns its
//! decisions as a value; the tasks themselves are never modified.
//!
//! 1. Hint pass: a task whose `担当` text names a role goes to that role.
//! 2. Heuristic pass: the first third of the remaining high-priority tasks
//!    go to `parent`; everything left (rest of high, then medium, then low)
//!    alternates between `child1` and `child2`.

use std::collections::BTreeMap;

use crate::grammar::{Priority, Role};
use crate::task::Task;

/// How a task's role was decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentSource {
    /// The assignee hint named the role; holds the hint text.
    Hint(String),
    /// Placed by the priority heuristic.
    Heuristic,
}

/// The role decision for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignee {
    pub role: Role,
    pub source: AssignmentSource,
}

impl Assignee {
    /// Label shown for this decision: the hint text, or the fixed role label.
    pub fn label(&self) -> &str {
        match &self.source {
            AssignmentSource::Hint(text) => text,
            AssignmentSource::Heuristic => self.role.heuristic_label(),
        }
    }
}

/// Result of assigning a task list, keyed by task sequence number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    buckets: [Vec<usize>; 3],
    decisions: BTreeMap<usize, Assignee>,
}

impl Assignment {
    /// Sequence numbers assigned to a role, in assignment order.
    pub fn bucket(&self, role: Role) -> &[usize] {
        &self.buckets[role.index()]
    }

    /// Tasks assigned to a role, in assignment order.
    pub fn tasks_for<'a>(&self, role: Role, tasks: &'a [Task]) -> Vec<&'a Task> {
        let by_seq: BTreeMap<usize, &Task> = tasks.iter().map(|t| (t.seq, t)).collect();
        self.bucket(role)
            .iter()
            .filter_map(|seq| by_seq.get(seq).copied())
            .collect()
    }

    pub fn assignee(&self, seq: usize) -> Option<&Assignee> {
        self.decisions.get(&seq)
    }

    /// Display label for a task, if it was assigned.
    pub fn label(&self, seq: usize) -> Option<&str> {
        self.assignee(seq).map(Assignee::label)
    }

    /// Number of tasks assigned overall.
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Record a decision. A task already decided is left untouched.
    fn place(&mut self, seq: usize, role: Role, source: AssignmentSource) {
        if self.decisions.contains_key(&seq) {
            return;
        }
        self.decisions.insert(seq, Assignee { role, source });
        self.buckets[role.index()].push(seq);
    }
}

/// Assign every task to exactly one role.
pub fn assign(tasks: &[Task]) -> Assignment {
    let mut assignment = Assignment::default();

    // Hint pass, in document order. Unrecognized hints fall through.
    for task in tasks {
        if let Some(hint) = task.assignee_hint.as_deref() {
            if let Some(role) = Role::from_hint(hint) {
                assignment.place(task.seq, role, AssignmentSource::Hint(hint.to_string()));
            }
        }
    }

    let unassigned: Vec<&Task> = tasks
        .iter()
        .filter(|t| assignment.assignee(t.seq).is_none())
        .collect();
    let tier = |priority: Priority| {
        unassigned
            .iter()
            .copied()
            .filter(|t| t.priority == priority)
            .collect::<Vec<_>>()
    };
    let high = tier(Priority::High);
    let medium = tier(Priority::Medium);
    let low = tier(Priority::Low);

    let parent_share = high.len() / 3;
    for task in &high[..parent_share] {
        assignment.place(task.seq, Role::Parent, AssignmentSource::Heuristic);
    }

    let remainder = high[parent_share..]
        .iter()
        .chain(medium.iter())
        .chain(low.iter());
    for (i, task) in remainder.enumerate() {
        let role = if i % 2 == 0 { Role::Child1 } else { Role::Child2 };
        assignment.place(task.seq, role, AssignmentSource::Heuristic);
    }

    assignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn task(seq: usize, priority: Priority, hint: Option<&str>) -> Task {
        let mut task = Task::new(seq, seq as u64 + 1, format!("task {}", seq));
        task.id = format!("t{}", seq);
        task.priority = priority;
        task.assignee_hint = hint.map(String::from);
        task
    }

    fn assert_partition(assignment: &Assignment, count: usize) {
        let mut all: Vec<usize> = Role::ALL
            .iter()
            .flat_map(|r| assignment.bucket(*r).iter().copied())
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..count).collect::<Vec<_>>());
    }

    #[test]
    fn test_hint_pass_places_by_marker() {
        let tasks = vec![
            task(0, Priority::Low, Some("子2")),
            task(1, Priority::Low, Some("Parent")),
            task(2, Priority::Low, Some("child1")),
        ];
        let a = assign(&tasks);

        assert_eq!(a.bucket(Role::Parent), &[1]);
        assert_eq!(a.bucket(Role::Child1), &[2]);
        assert_eq!(a.bucket(Role::Child2), &[0]);
        assert_eq!(a.label(1), Some("Parent"));
        assert_eq!(
            a.assignee(0).unwrap().source,
            AssignmentSource::Hint("子2".to_string())
        );
    }

    #[test]
    fn test_first_third_of_high_goes_to_parent() {
        let tasks: Vec<Task> = (0..7).map(|i| task(i, Priority::High, None)).collect();
        let a = assign(&tasks);

        assert_eq!(a.bucket(Role::Parent), &[0, 1]);
        assert_eq!(a.bucket(Role::Child1), &[2, 4, 6]);
        assert_eq!(a.bucket(Role::Child2), &[3, 5]);
        assert_eq!(a.label(0), Some("親Claude"));
        assert_eq!(a.label(2), Some("子Claude1"));
        assert_eq!(a.label(3), Some("子Claude2"));
    }

    #[test]
    fn test_remainder_order_is_high_then_medium_then_low() {
        let tasks = vec![
            task(0, Priority::Low, None),
            task(1, Priority::Medium, None),
            task(2, Priority::High, None),
            task(3, Priority::Medium, None),
            task(4, Priority::Low, None),
        ];
        let a = assign(&tasks);

        // One high task: floor(1/3) = 0 go to parent.
        assert!(a.bucket(Role::Parent).is_empty());
        // Remainder: [2, 1, 3, 0, 4]
        assert_eq!(a.bucket(Role::Child1), &[2, 3, 4]);
        assert_eq!(a.bucket(Role::Child2), &[1, 0]);
        assert_partition(&a, 5);
    }

    #[test]
    fn test_hinted_tasks_precede_heuristic_ones_in_bucket() {
        let tasks = vec![
            task(0, Priority::High, None),
            task(1, Priority::High, None),
            task(2, Priority::High, None),
            task(3, Priority::Medium, Some("親")),
        ];
        let a = assign(&tasks);

        assert_eq!(a.bucket(Role::Parent), &[3, 0]);
        assert_eq!(a.bucket(Role::Child1), &[1]);
        assert_eq!(a.bucket(Role::Child2), &[2]);
    }

    #[test]
    fn test_unrecognized_hint_falls_through_to_heuristic() {
        let tasks = vec![
            task(0, Priority::Medium, Some("誰か")),
            task(1, Priority::Medium, Some("子Claude1")),
        ];
        let a = assign(&tasks);

        assert_eq!(a.bucket(Role::Child1), &[0]);
        assert_eq!(a.bucket(Role::Child2), &[1]);
        assert_eq!(a.label(0), Some("子Claude1"));
        assert_eq!(a.label(1), Some("子Claude2"));
        // The parsed hint itself is untouched.
        assert_eq!(tasks[0].assignee_hint.as_deref(), Some("誰か"));
        assert_partition(&a, 2);
    }

    #[test]
    fn test_empty_task_list() {
        let a = assign(&[]);
        assert!(a.is_empty());
        for role in Role::ALL {
            assert!(a.bucket(role).is_empty());
        }
    }

    #[test]
    fn test_partition_is_total_for_mixed_input() {
        let priorities = [Priority::High, Priority::Medium, Priority::Low];
        let hints = [None, Some("parent"), None, Some("unknown"), Some("child2")];
        let tasks: Vec<Task> = (0..30)
            .map(|i| task(i, priorities[i % 3], hints[i % hints.len()]))
            .collect();
        let a = assign(&tasks);

        assert_eq!(a.len(), 30);
        assert_partition(&a, 30);
    }

    #[test]
    fn test_tasks_for_returns_bucket_order() {
        let tasks = vec![
            task(0, Priority::Low, None),
            task(1, Priority::High, Some("child1")),
        ];
        let a = assign(&tasks);
        let child1: Vec<usize> = a.tasks_for(Role::Child1, &tasks).iter().map(|t| t.seq).collect();
        assert_eq!(child1, vec![1, 0]);
    }
}
