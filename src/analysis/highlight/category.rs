//! Mapping from front-end classifications to highlight kinds.
//!
//! The mapping is an exhaustive match over [`RawCategory`]; a new front-end category
//! fails to compile here instead of silently falling back to a default kind.

use std::collections::HashSet;

use super::legend::{DeclaredNameKind, OutputCategory};
use super::raw::{RawCategory, RawToken, SymbolKind};

/// Symbol kinds whose bound identifiers are highlighted as declared names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredNames {
    kinds: HashSet<SymbolKind>,
}

/// Type-like symbol kinds promoted when nothing else is configured.
pub const DEFAULT_DECLARED_NAMES: &[SymbolKind] = &[
    SymbolKind::Class,
    SymbolKind::Delegate,
    SymbolKind::Enum,
    SymbolKind::Interface,
    SymbolKind::Module,
    SymbolKind::Struct,
    SymbolKind::TypeParameter,
];

impl DeclaredNames {
    pub fn promotes(&self, kind: SymbolKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// No identifier is ever promoted; every binding maps to `identifier`.
    pub fn none() -> Self {
        Self {
            kinds: HashSet::new(),
        }
    }
}

impl Default for DeclaredNames {
    fn default() -> Self {
        DEFAULT_DECLARED_NAMES.iter().copied().collect()
    }
}

impl FromIterator<SymbolKind> for DeclaredNames {
    fn from_iter<I: IntoIterator<Item = SymbolKind>>(iter: I) -> Self {
        Self {
            kinds: iter.into_iter().collect(),
        }
    }
}

/// Map one raw token to its highlight kind.
///
/// Only the token's own category and binding are consulted; children are mapped
/// independently by the caller.
pub fn map_category(token: &RawToken, declared: &DeclaredNames) -> OutputCategory {
    match token.category {
        RawCategory::Keyword | RawCategory::ControlKeyword | RawCategory::PreprocessorKeyword => {
            OutputCategory::Keyword
        }
        RawCategory::Identifier => match token.binding {
            Some(kind) if declared.promotes(kind) => declared_name(kind),
            _ => OutputCategory::Identifier,
        },
        RawCategory::Operator | RawCategory::OperatorOverloaded => OutputCategory::Operator,
        RawCategory::Punctuation
        | RawCategory::InterpolationOpenBrace
        | RawCategory::InterpolationCloseBrace => OutputCategory::Punctuation,
        RawCategory::NumericLiteral => OutputCategory::Number,
        RawCategory::StringLiteral
        | RawCategory::VerbatimStringLiteral
        | RawCategory::CharacterLiteral
        | RawCategory::StringEscapeCharacter
        | RawCategory::InterpolatedString
        | RawCategory::InterpolatedStringStart
        | RawCategory::InterpolatedStringText
        | RawCategory::InterpolatedStringEnd => OutputCategory::String,
        RawCategory::Comment | RawCategory::XmlDocComment | RawCategory::ExcludedCode => {
            OutputCategory::Comment
        }
    }
}

fn declared_name(kind: SymbolKind) -> OutputCategory {
    let subtype = match kind {
        SymbolKind::Class => return OutputCategory::ClassName,
        SymbolKind::Delegate => DeclaredNameKind::Delegate,
        SymbolKind::Enum => DeclaredNameKind::Enum,
        SymbolKind::EnumMember => DeclaredNameKind::EnumMember,
        SymbolKind::Interface => DeclaredNameKind::Interface,
        SymbolKind::Module => DeclaredNameKind::Module,
        SymbolKind::Struct => DeclaredNameKind::Struct,
        SymbolKind::TypeParameter => DeclaredNameKind::TypeParameter,
        SymbolKind::Constant => DeclaredNameKind::Constant,
        SymbolKind::Event => DeclaredNameKind::Event,
        SymbolKind::Field => DeclaredNameKind::Field,
        SymbolKind::Local => DeclaredNameKind::Local,
        SymbolKind::Method => DeclaredNameKind::Method,
        SymbolKind::Namespace => DeclaredNameKind::Namespace,
        SymbolKind::Parameter => DeclaredNameKind::Parameter,
        SymbolKind::Property => DeclaredNameKind::Property,
    };
    OutputCategory::DeclaredName(subtype)
}
