//! Text schedule chart.
//!
//! The bar offset depends only on the priority tier; it is a visual
//! grouping, not a timeline derived from dependencies.

use std::fmt::Write;

use crate::assign::Assignment;
use crate::grammar::{self, Priority};
use crate::task::Task;

const HEADER: &str =
    "タスク     担当      優先度  依存  |----週1----|----週2----|----週3----|";
const RULE_WIDTH: usize = 75;
const BAR: &str = "████████████";
const TIER_INDENT: usize = 4;

/// Tasks in chart order: high priority first, then the rest, each in
/// document order.
pub fn chart_order(tasks: &[Task]) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by_key(|t| (t.priority != Priority::High, t.seq));
    ordered
}

/// Render the schedule chart as a fenced markdown block.
pub fn render(tasks: &[Task], assignment: &Assignment) -> String {
    let mut out = String::from("# タスクスケジュール（ガントチャート）\n\n```\n");
    let _ = writeln!(out, "{}", HEADER);
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    for task in chart_order(tasks) {
        let assignee = assignment
            .label(task.seq)
            .unwrap_or(grammar::UNASSIGNED_DISPLAY);
        let deps = task.dependencies.join(",");
        let _ = writeln!(
            out,
            "{:<10} {} {:<6} {:<5} |{}|",
            task.id,
            truncate(&format!("{:<10}", assignee), 10),
            task.priority.as_str(),
            truncate(&deps, 5),
            bar(task.priority)
        );
    }

    out.push_str("```\n");
    out
}

/// The bar for a priority tier, indented by tier.
pub fn bar(priority: Priority) -> String {
    format!("{}{}", " ".repeat(priority.tier() * TIER_INDENT), BAR)
}

/// First `max` characters of `s`.
fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
