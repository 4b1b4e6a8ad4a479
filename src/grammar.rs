//! The fixed token table recognized in design documents.
//!
//! Every marker here is matched by substring containment (or, for the
//! no-dependency sentinel, by whole-value equality) after lowercasing. The
//! table is the whole grammar: there is no configuration for it.

/// Heading marker that opens a task section: `### タスク<N>: <title>`.
pub const SECTION_HEADING: &str = "### タスク";

/// Values of the dependency field meaning "no dependencies".
pub const NO_DEPENDENCY: &[&str] = &["なし", "none"];

/// Placeholder written for an empty dependency list.
pub const NO_DEPENDENCY_DISPLAY: &str = "なし";

/// Label written in the schedule chart for a task without an assignee.
pub const UNASSIGNED_DISPLAY: &str = "未割当";

/// Field labels recognized inside a task section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Priority,
    Dependencies,
    Assignee,
    Description,
    Input,
    Output,
    CompletionCriteria,
}

impl Field {
    /// All fields, in the order they are rendered.
    pub const ALL: [Field; 8] = [
        Field::Id,
        Field::Priority,
        Field::Dependencies,
        Field::Assignee,
        Field::Description,
        Field::Input,
        Field::Output,
        Field::CompletionCriteria,
    ];

    /// The label anchor that introduces this field.
    pub fn label(self) -> &'static str {
        match self {
            Field::Id => "タスクID",
            Field::Priority => "優先度",
            Field::Dependencies => "依存関係",
            Field::Assignee => "担当",
            Field::Description => "概要",
            Field::Input => "入力",
            Field::Output => "出力",
            Field::CompletionCriteria => "完了条件",
        }
    }

    /// How the field's value is delimited.
    pub fn shape(self) -> ValueShape {
        match self {
            Field::Id => ValueShape::Word,
            Field::Priority => ValueShape::Token,
            Field::CompletionCriteria => ValueShape::Line,
            _ => ValueShape::Text,
        }
    }
}

/// Value shape of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// A run of word characters.
    Word,
    /// A run of non-whitespace characters.
    Token,
    /// Free text up to the next top-level list item or end of section.
    Text,
    /// The first line of free text.
    Line,
}

/// Priority tier of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    const HIGH_MARKERS: &'static [&'static str] = &["高", "high"];
    const LOW_MARKERS: &'static [&'static str] = &["低", "low"];

    /// Classify a free-text priority value.
    ///
    /// High markers are tested before low markers; anything else is medium.
    pub fn classify(value: &str) -> Self {
        let lower = value.to_lowercase();
        if contains_any(&lower, Self::HIGH_MARKERS) {
            Priority::High
        } else if contains_any(&lower, Self::LOW_MARKERS) {
            Priority::Low
        } else {
            Priority::Medium
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Indentation steps of the schedule bar for this tier.
    pub fn tier(self) -> usize {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three output roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Parent,
    Child1,
    Child2,
}

impl Role {
    /// All roles in bucket order.
    pub const ALL: [Role; 3] = [Role::Parent, Role::Child1, Role::Child2];

    /// Directory and display name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Parent => "parent",
            Role::Child1 => "child1",
            Role::Child2 => "child2",
        }
    }

    /// Latin and native-language markers recognized in an assignee hint.
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            Role::Parent => &["parent", "親"],
            Role::Child1 => &["child1", "子1"],
            Role::Child2 => &["child2", "子2"],
        }
    }

    /// Label written for tasks placed by the heuristic pass.
    pub fn heuristic_label(self) -> &'static str {
        match self {
            Role::Parent => "親Claude",
            Role::Child1 => "子Claude1",
            Role::Child2 => "子Claude2",
        }
    }

    /// Match an assignee hint against the role markers.
    ///
    /// The first role whose markers appear in the hint wins.
    pub fn from_hint(hint: &str) -> Option<Role> {
        let lower = hint.to_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| contains_any(&lower, role.markers()))
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a dependency value is the no-dependency sentinel.
pub fn is_no_dependency(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    NO_DEPENDENCY.contains(&normalized.as_str())
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
