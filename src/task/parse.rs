use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::grammar::{self, Field, ValueShape};

use super::Task;

/// Section heading: `### タスク<N>: <title>` at the start of a line.
static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"(?m)^{}([0-9]+)[ \t]*[:：][ \t]*(.+?)[ \t]*\r?$",
        regex::escape(grammar::SECTION_HEADING)
    );
    Regex::new(&pattern).expect("section heading pattern is valid")
});

/// One compiled pattern per field label.
///
/// A label may sit behind a list marker and markdown bold, and is followed
/// by a colon (ASCII or full-width) and/or horizontal whitespace. Word and
/// token values may also start on the following line.
static FIELD_RES: Lazy<HashMap<Field, Regex>> = Lazy::new(|| {
    Field::ALL
        .into_iter()
        .map(|field| {
            let prefix = format!(
                r"(?m)^[ \t]*(?:[-*+][ \t]+)?(?:\*\*)?{}(?:(?:\*\*)?[ \t]*[:：](?:\*\*)?|(?:\*\*)?[ \t])[ \t]*",
                regex::escape(field.label())
            );
            let pattern = match field.shape() {
                ValueShape::Word => format!(r"{}(?:(\w+)|\r?\n[ \t]*(\w+))", prefix),
                ValueShape::Token => format!(r"{}(?:(\S+)|\r?\n[ \t]*([^\s-]\S*))", prefix),
                ValueShape::Text | ValueShape::Line => prefix,
            };
            let re = Regex::new(&pattern).expect("field label pattern is valid");
            (field, re)
        })
        .collect()
});

/// A task section located in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// Index from the heading.
    pub number: u64,
    /// Title from the heading.
    pub title: &'a str,
    /// Everything after the heading line up to the next heading or end of document.
    pub body: &'a str,
}

/// A field value found in a section body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedField {
    pub field: Field,
    pub value: String,
}

/// Split a document into task sections.
///
/// Sections are non-overlapping and cover the document from the first
/// heading to the end; text before the first heading is ignored.
pub fn split_sections(content: &str) -> Vec<Section<'_>> {
    let headings: Vec<_> = HEADING_RE.captures_iter(content).collect();
    let mut sections = Vec::with_capacity(headings.len());

    for (i, caps) in headings.iter().enumerate() {
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        let body_start = next_line_start(content, whole.end);
        let body_end = headings
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(content.len(), |m| m.start());

        // An index too large for u64 still yields a section.
        let number = caps
            .get(1)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);
        let title = caps.get(2).map_or("", |m| m.as_str());

        sections.push(Section {
            number,
            title,
            body: &content[body_start..body_end.max(body_start)],
        });
    }

    sections
}

/// Extract every recognized field from a section body.
///
/// Fields are searched independently, so order and gaps do not matter; the
/// first occurrence of each label wins.
pub fn extract_fields(body: &str) -> Vec<ExtractedField> {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            extract_field(body, field).map(|value| ExtractedField { field, value })
        })
        .collect()
}

fn extract_field(body: &str, field: Field) -> Option<String> {
    let re = FIELD_RES.get(&field)?;
    match field.shape() {
        ValueShape::Word | ValueShape::Token => re
            .captures(body)
            .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str().to_string()),
        ValueShape::Text => {
            let m = re.find(body)?;
            let rest = &body[m.end()..];
            Some(rest[..text_value_end(rest)].trim().to_string())
        }
        ValueShape::Line => {
            let m = re.find(body)?;
            let rest = &body[m.end()..];
            let value = rest[..text_value_end(rest)].trim();
            Some(value.lines().next().unwrap_or("").trim_end().to_string())
        }
    }
}

/// Byte offset where a free-text value ends: the start of the first later
/// line that opens a top-level list item, or the end of the input.
///
/// Indented sub-items belong to the value.
fn text_value_end(rest: &str) -> usize {
    let mut offset = 0;
    for (i, line) in rest.split_inclusive('\n').enumerate() {
        if i > 0 && line.starts_with('-') {
            return offset;
        }
        offset += line.len();
    }
    rest.len()
}

fn next_line_start(content: &str, from: usize) -> usize {
    match content[from..].find('\n') {
        Some(pos) => from + pos + 1,
        None => content.len(),
    }
}

/// Parse a whole design document into tasks, in document order.
pub fn parse_document(content: &str) -> Vec<Task> {
    split_sections(content)
        .iter()
        .enumerate()
        .map(|(seq, section)| Task::from_section(seq, section, extract_fields(section.body)))
        .collect()
}
