//! Output highlight taxonomy.
//!
//! This module defines the closed set of highlight kinds exposed at the protocol
//! boundary, the declared-name subtypes, and the exclusion groups a request may name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of declared symbols, other than classes, that get their own highlight kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredNameKind {
    Delegate,
    Enum,
    EnumMember,
    Interface,
    Module,
    Struct,
    TypeParameter,
    Constant,
    Event,
    Field,
    Local,
    Method,
    Namespace,
    Parameter,
    Property,
}

impl DeclaredNameKind {
    /// Wire name of the highlight kind, e.g. `"struct name"`.
    pub fn as_str(self) -> &'static str {
        match self {
            DeclaredNameKind::Delegate => "delegate name",
            DeclaredNameKind::Enum => "enum name",
            DeclaredNameKind::EnumMember => "enum member name",
            DeclaredNameKind::Interface => "interface name",
            DeclaredNameKind::Module => "module name",
            DeclaredNameKind::Struct => "struct name",
            DeclaredNameKind::TypeParameter => "type parameter name",
            DeclaredNameKind::Constant => "constant name",
            DeclaredNameKind::Event => "event name",
            DeclaredNameKind::Field => "field name",
            DeclaredNameKind::Local => "local name",
            DeclaredNameKind::Method => "method name",
            DeclaredNameKind::Namespace => "namespace name",
            DeclaredNameKind::Parameter => "parameter name",
            DeclaredNameKind::Property => "property name",
        }
    }
}

/// Highlight kind attached to every emitted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputCategory {
    Keyword,
    Identifier,
    /// Identifier bound to a class or other type declaration
    ClassName,
    DeclaredName(DeclaredNameKind),
    Operator,
    Punctuation,
    Number,
    String,
    Comment,
}

impl OutputCategory {
    /// Wire name of the highlight kind.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputCategory::Keyword => "keyword",
            OutputCategory::Identifier => "identifier",
            OutputCategory::ClassName => "class name",
            OutputCategory::DeclaredName(kind) => kind.as_str(),
            OutputCategory::Operator => "operator",
            OutputCategory::Punctuation => "punctuation",
            OutputCategory::Number => "number",
            OutputCategory::String => "string",
            OutputCategory::Comment => "comment",
        }
    }

    /// True for every identifier bound to a declared symbol.
    ///
    /// This is the only predicate the `Name` exclusion group consults, so new
    /// declared-name subtypes take part in it automatically.
    pub fn is_name(self) -> bool {
        match self {
            OutputCategory::ClassName | OutputCategory::DeclaredName(_) => true,
            OutputCategory::Keyword
            | OutputCategory::Identifier
            | OutputCategory::Operator
            | OutputCategory::Punctuation
            | OutputCategory::Number
            | OutputCategory::String
            | OutputCategory::Comment => false,
        }
    }
}

impl fmt::Display for OutputCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification groups a request can exclude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExcludeClassification {
    Keyword,
    Punctuation,
    Operator,
    Identifier,
    Name,
}

impl ExcludeClassification {
    /// Whether spans of `category` belong to this group.
    pub fn contains(self, category: OutputCategory) -> bool {
        match self {
            ExcludeClassification::Keyword => category == OutputCategory::Keyword,
            ExcludeClassification::Punctuation => category == OutputCategory::Punctuation,
            ExcludeClassification::Operator => category == OutputCategory::Operator,
            ExcludeClassification::Identifier => category == OutputCategory::Identifier,
            ExcludeClassification::Name => category.is_name(),
        }
    }
}
