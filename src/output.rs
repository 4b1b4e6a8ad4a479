use spec_splitter::color::{self, emoji};
use spec_splitter::emit::summary_line;
use spec_splitter::grammar::Role;
use spec_splitter::pipeline::{Progress, RunReport};
use spec_splitter::SplitError;

/// Print one line of progress narration.
pub(crate) fn print_progress(progress: Progress) {
    match progress {
        Progress::Parsing => println!("開発設計書を解析中..."),
        Progress::Parsed { tasks } => {
            println!("{}個のタスクを検出しました", color::number(tasks))
        }
        Progress::AnalyzingDependencies => println!("依存関係を分析中..."),
        Progress::Assigning => println!("タスクを割り当て中..."),
        Progress::WritingFiles => println!("タスクファイルを生成中..."),
        Progress::WritingGantt => println!("ガントチャートを生成中..."),
    }
}

/// Print the per-role assignment summary and where the files went.
pub(crate) fn print_summary(report: &RunReport) {
    println!();
    println!("=== {} ===", color::label("割り当て結果"));
    for role in Role::ALL {
        let tasks = report.tasks_for(role);
        println!(
            "{} {}: {}タスク",
            emoji::TEAM,
            color::role(role),
            color::number(tasks.len())
        );
        for task in tasks {
            println!("  {}", summary_line(task));
        }
    }

    let dangling = report.graph.dangling();
    if !dangling.is_empty() {
        println!();
        println!(
            "{} {}: {}",
            emoji::LINK,
            color::warning("未定義の依存タスク"),
            dangling.join(", ")
        );
    }

    println!();
    println!(
        "{} タスクファイルが '{}' に生成されました",
        emoji::FOLDER,
        color::success(&report.layout.root.display().to_string())
    );
}

/// Print a fatal error to stderr.
pub(crate) fn print_error(err: &SplitError) {
    match err {
        SplitError::InputNotFound(path) => eprintln!(
            "{}",
            color::error(&format!(
                "エラー: 設計書ファイル '{}' が見つかりません",
                path.display()
            ))
        ),
        other => eprintln!("{}", color::error(&format!("error: {}", other))),
    }
}
