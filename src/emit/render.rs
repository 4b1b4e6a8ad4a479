use std::fmt::Write;

use crate::assign::Assignment;
use crate::grammar::Role;
use crate::task::Task;

/// Shown in a role listing with no tasks.
pub const NO_TASKS_NOTICE: &str = "現在割り当てられたタスクはありません。";

/// Render the task listing for one role.
pub fn role_listing(role: Role, tasks: &[&Task], generated_at: Option<&str>) -> String {
    let mut out = String::new();
    let _ = write!(out, "# {}のタスク一覧\n\n", role);
    push_generated_at(&mut out, generated_at);

    if tasks.is_empty() {
        out.push_str(NO_TASKS_NOTICE);
        out.push('\n');
        return out;
    }

    out.push_str("## 割り当てタスク\n\n");
    for task in tasks {
        let _ = writeln!(out, "### {}: {}", task.id, task.name);
        let _ = writeln!(out, "- **優先度**: {}", task.priority);
        let _ = writeln!(out, "- **依存関係**: {}", task.dependencies_display());
        let _ = writeln!(out, "- **概要**: {}", task.description);
        let _ = writeln!(out, "- **入力**: {}", task.input);
        let _ = writeln!(out, "- **出力**: {}", task.output);
        let _ = write!(out, "- **完了条件**: {}\n\n", task.completion_criteria);
    }
    out
}

/// Render the combined role-to-task map.
pub fn task_map(tasks: &[Task], assignment: &Assignment, generated_at: Option<&str>) -> String {
    let mut out = String::from("# タスク割り当てマップ\n\n");
    push_generated_at(&mut out, generated_at);

    for role in Role::ALL {
        let _ = writeln!(out, "## {}", role);
        for task in assignment.tasks_for(role, tasks) {
            let _ = writeln!(out, "{}", summary_line(task));
        }
        out.push('\n');
    }
    out
}

/// `- <id>: <name> (優先度: <priority>)`
pub fn summary_line(task: &Task) -> String {
    format!("- {}: {} (優先度: {})", task.id, task.name, task.priority)
}

fn push_generated_at(out: &mut String, generated_at: Option<&str>) {
    if let Some(ts) = generated_at {
        let _ = write!(out, "生成日時: {}\n\n", ts);
    }
}
