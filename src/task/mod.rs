//! Design document parser.
//!
//! A document is split into task sections by the `### タスク<N>: <title>`
//! heading, then each section body is scanned for labelled fields:
//! - `- タスクID: task1`
//! - `- 優先度: 高`
//! - `- 依存関係: task0, task2` (or `なし`)
//! - `- 担当: 親Claude`
//! - `- 概要: ...`, `- 入力: ...`, `- 出力: ...`, `- 完了条件: ...`
//!
//! Missing or malformed fields never fail parsing; they keep their defaults.

mod model;
mod parse;

#[cfg(test)]
mod tests;

pub use model::Task;
pub use parse::{extract_fields, parse_document, split_sections, ExtractedField, Section};
