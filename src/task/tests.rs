use pretty_assertions::assert_eq;

use super::model::parse_dependencies;
use super::*;
use crate::grammar::{Field, Priority};

const FULL_SECTION: &str = "\
# 開発設計書

### タスク1: 認証APIの実装
- タスクID: auth_api
- 優先度: 高
- 依存関係: なし
- 担当: 親Claude
- 概要: ログインとログアウトのAPIを実装する
- 入力: ユーザー情報
- 出力: JWTトークン
- 完了条件: 単体テストが通ること
";

#[test]
fn test_split_sections_counts_headings() {
    let doc = "### タスク1: A\nbody a\n### タスク2: B\nbody b\n### タスク3: C\n";
    let sections = split_sections(doc);
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0].number, 1);
    assert_eq!(sections[0].title, "A");
    assert_eq!(sections[0].body, "body a\n");
    assert_eq!(sections[1].body, "body b\n");
    assert_eq!(sections[2].title, "C");
    assert_eq!(sections[2].body, "");
}

#[test]
fn test_split_sections_keeps_trailing_content() {
    let doc = "### タスク1: Only\nline one\n\nline two without newline";
    let sections = split_sections(doc);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].body, "line one\n\nline two without newline");
}

#[test]
fn test_split_sections_ignores_preamble_and_other_headings() {
    let doc = "# Title\n## Overview\n### Notes\ntext\n### タスク7: Real\nbody\n";
    let sections = split_sections(doc);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].number, 7);
    assert!(sections[0].body.starts_with("body"));
}

#[test]
fn test_split_sections_full_width_colon_and_crlf() {
    let doc = "### タスク2：全角コロン\r\n- タスクID: t2\r\n";
    let sections = split_sections(doc);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "全角コロン");
    assert_eq!(sections[0].number, 2);
}

#[test]
fn test_split_sections_empty_document() {
    assert!(split_sections("").is_empty());
    assert!(split_sections("no headings here\n").is_empty());
}

#[test]
fn test_extract_fields_all_present() {
    let sections = split_sections(FULL_SECTION);
    let fields = extract_fields(sections[0].body);
    let get = |f: Field| {
        fields
            .iter()
            .find(|e| e.field == f)
            .map(|e| e.value.as_str())
    };

    assert_eq!(get(Field::Id), Some("auth_api"));
    assert_eq!(get(Field::Priority), Some("高"));
    assert_eq!(get(Field::Dependencies), Some("なし"));
    assert_eq!(get(Field::Assignee), Some("親Claude"));
    assert_eq!(get(Field::Description), Some("ログインとログアウトのAPIを実装する"));
    assert_eq!(get(Field::Input), Some("ユーザー情報"));
    assert_eq!(get(Field::Output), Some("JWTトークン"));
    assert_eq!(get(Field::CompletionCriteria), Some("単体テストが通ること"));
}

#[test]
fn test_extract_fields_any_order_and_missing() {
    let body = "- 出力: report.md\n- タスクID: t9\n";
    let fields = extract_fields(body);
    assert_eq!(fields.len(), 2);
    assert!(fields.contains(&ExtractedField { field: Field::Id, value: "t9".into() }));
    assert!(fields.contains(&ExtractedField {
        field: Field::Output,
        value: "report.md".into()
    }));
}

#[test]
fn test_extract_fields_multiline_value() {
    let body = "- 概要: first line\n  second line\n\n  third line\n- 入力: data\n";
    let fields = extract_fields(body);
    let desc = fields.iter().find(|e| e.field == Field::Description).unwrap();
    assert_eq!(desc.value, "first line\n  second line\n\n  third line");
    let input = fields.iter().find(|e| e.field == Field::Input).unwrap();
    assert_eq!(input.value, "data");
}

#[test]
fn test_extract_fields_value_on_next_line() {
    let body = "- 概要:\n  wrapped text\n- 出力:\n- 完了条件: done\n";
    let fields = extract_fields(body);
    let desc = fields.iter().find(|e| e.field == Field::Description).unwrap();
    assert_eq!(desc.value, "wrapped text");
    let output = fields.iter().find(|e| e.field == Field::Output).unwrap();
    assert_eq!(output.value, "");
}

#[test]
fn test_extract_fields_keeps_nested_bullets() {
    let body = "- 概要: 認証を作る\n  - JWT発行\n  - リフレッシュ\n- 出力: token\n";
    let fields = extract_fields(body);
    let desc = fields.iter().find(|e| e.field == Field::Description).unwrap();
    assert_eq!(desc.value, "認証を作る\n  - JWT発行\n  - リフレッシュ");
}

#[test]
fn test_parse_document_nested_list_values() {
    let doc = "### タスク1: A\n- タスクID: a\n- 概要:\n  - ログイン画面\n  - ログアウト\n- 完了条件:\n  - テスト通過\n  - レビュー承認\n";
    let tasks = parse_document(doc);
    assert_eq!(tasks[0].description, "- ログイン画面\n  - ログアウト");
    assert_eq!(tasks[0].completion_criteria, "- テスト通過");
}

#[test]
fn test_completion_criteria_is_first_line() {
    let body = "- 完了条件: CIが通る\n  レビューも済む\n";
    let fields = extract_fields(body);
    let criteria = fields
        .iter()
        .find(|e| e.field == Field::CompletionCriteria)
        .unwrap();
    assert_eq!(criteria.value, "CIが通る");
}

#[test]
fn test_extract_fields_word_and_token_on_next_line() {
    let body = "- タスクID:\n  t7\n- 優先度:\n  高\n";
    let fields = extract_fields(body);
    assert!(fields.contains(&ExtractedField { field: Field::Id, value: "t7".into() }));
    assert!(fields.contains(&ExtractedField { field: Field::Priority, value: "高".into() }));

    let tasks = parse_document("### タスク1: A\n- 優先度:\n  高\n");
    assert_eq!(tasks[0].priority, Priority::High);
}

#[test]
fn test_extract_fields_empty_token_skips_next_item() {
    let fields = extract_fields("- 優先度:\n- 依存関係: t1\n");
    assert!(fields.iter().all(|e| e.field != Field::Priority));
}

#[test]
fn test_extract_fields_bold_labels() {
    let body = "- **タスクID**: bold1\n- **優先度:** 低\n";
    let fields = extract_fields(body);
    assert!(fields.contains(&ExtractedField { field: Field::Id, value: "bold1".into() }));
    assert!(fields.contains(&ExtractedField { field: Field::Priority, value: "低".into() }));
}

#[test]
fn test_extract_fields_label_needs_separator() {
    // "担当者" is not the assignee label.
    let fields = extract_fields("- 担当者: someone\n");
    assert!(fields.iter().all(|e| e.field != Field::Assignee));
}

#[test]
fn test_parse_document_full_task() {
    let tasks = parse_document(FULL_SECTION);
    assert_eq!(tasks.len(), 1);
    let task = &tasks[0];
    assert_eq!(task.seq, 0);
    assert_eq!(task.number, 1);
    assert_eq!(task.name, "認証APIの実装");
    assert_eq!(task.id, "auth_api");
    assert_eq!(task.priority, Priority::High);
    assert!(task.dependencies.is_empty());
    assert_eq!(task.assignee_hint.as_deref(), Some("親Claude"));
    assert_eq!(task.completion_criteria, "単体テストが通ること");
}

#[test]
fn test_parse_document_section_without_fields() {
    let tasks = parse_document("### タスク3: Bare\nnothing useful here\n");
    assert_eq!(tasks.len(), 1);
    let expected = Task::new(0, 3, "Bare");
    assert_eq!(tasks[0], expected);
}

#[test]
fn test_parse_document_seq_follows_document_order() {
    let doc = "### タスク5: E\n### タスク2: B\n### タスク5: E2\n";
    let tasks = parse_document(doc);
    let seqs: Vec<usize> = tasks.iter().map(|t| t.seq).collect();
    let numbers: Vec<u64> = tasks.iter().map(|t| t.number).collect();
    assert_eq!(seqs, vec![0, 1, 2]);
    assert_eq!(numbers, vec![5, 2, 5]);
}

#[test]
fn test_parse_dependencies() {
    assert!(parse_dependencies("なし").is_empty());
    assert!(parse_dependencies("NONE").is_empty());
    assert_eq!(parse_dependencies("task1"), vec!["task1"]);
    assert_eq!(parse_dependencies(" task1 ,task2,  task3 "), vec!["task1", "task2", "task3"]);
    assert_eq!(parse_dependencies("task1,,task2,"), vec!["task1", "task2"]);
}

#[test]
fn test_dependencies_display() {
    let mut task = Task::new(0, 1, "x");
    assert_eq!(task.dependencies_display(), "なし");
    task.dependencies = vec!["a".into(), "b".into()];
    assert_eq!(task.dependencies_display(), "a, b");
}

#[test]
fn test_empty_assignee_is_none() {
    let tasks = parse_document("### タスク1: A\n- 担当:\n- 概要: x\n");
    assert_eq!(tasks[0].assignee_hint, None);
}
