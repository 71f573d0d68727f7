//! Raw classifications as reported by the front-end.
//!
//! A classification pass yields a forest of [`RawToken`]s. Composite lexemes such as
//! interpolated strings carry their sub-lexemes as ordered children.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::HighlightError;

/// Classification labels the front-end may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawCategory {
    Keyword,
    ControlKeyword,
    PreprocessorKeyword,
    Identifier,
    Operator,
    OperatorOverloaded,
    Punctuation,
    NumericLiteral,
    StringLiteral,
    VerbatimStringLiteral,
    CharacterLiteral,
    StringEscapeCharacter,
    /// Container for a whole interpolated string; normally has children
    InterpolatedString,
    InterpolatedStringStart,
    InterpolatedStringText,
    InterpolatedStringEnd,
    InterpolationOpenBrace,
    InterpolationCloseBrace,
    Comment,
    XmlDocComment,
    ExcludedCode,
}

const ALL: &[RawCategory] = &[
    RawCategory::Keyword,
    RawCategory::ControlKeyword,
    RawCategory::PreprocessorKeyword,
    RawCategory::Identifier,
    RawCategory::Operator,
    RawCategory::OperatorOverloaded,
    RawCategory::Punctuation,
    RawCategory::NumericLiteral,
    RawCategory::StringLiteral,
    RawCategory::VerbatimStringLiteral,
    RawCategory::CharacterLiteral,
    RawCategory::StringEscapeCharacter,
    RawCategory::InterpolatedString,
    RawCategory::InterpolatedStringStart,
    RawCategory::InterpolatedStringText,
    RawCategory::InterpolatedStringEnd,
    RawCategory::InterpolationOpenBrace,
    RawCategory::InterpolationCloseBrace,
    RawCategory::Comment,
    RawCategory::XmlDocComment,
    RawCategory::ExcludedCode,
];

impl RawCategory {
    /// The label used for this category on the wire.
    pub fn label(self) -> &'static str {
        match self {
            RawCategory::Keyword => "keyword",
            RawCategory::ControlKeyword => "keyword - control",
            RawCategory::PreprocessorKeyword => "preprocessor keyword",
            RawCategory::Identifier => "identifier",
            RawCategory::Operator => "operator",
            RawCategory::OperatorOverloaded => "operator - overloaded",
            RawCategory::Punctuation => "punctuation",
            RawCategory::NumericLiteral => "number",
            RawCategory::StringLiteral => "string",
            RawCategory::VerbatimStringLiteral => "string - verbatim",
            RawCategory::CharacterLiteral => "char",
            RawCategory::StringEscapeCharacter => "string - escape character",
            RawCategory::InterpolatedString => "string - interpolated",
            RawCategory::InterpolatedStringStart => "string - interpolation start",
            RawCategory::InterpolatedStringText => "string - interpolated text",
            RawCategory::InterpolatedStringEnd => "string - interpolation end",
            RawCategory::InterpolationOpenBrace => "punctuation - interpolation open",
            RawCategory::InterpolationCloseBrace => "punctuation - interpolation close",
            RawCategory::Comment => "comment",
            RawCategory::XmlDocComment => "xml doc comment",
            RawCategory::ExcludedCode => "excluded code",
        }
    }
}

impl FromStr for RawCategory {
    type Err = HighlightError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .copied()
            .find(|category| category.label() == label)
            .ok_or_else(|| HighlightError::unmapped_category(label))
    }
}

/// Kind of declared symbol an identifier is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SymbolKind {
    Class,
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

/// One classified lexeme, possibly decomposed into sub-lexemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    /// Absolute byte offset of the first byte
    pub start: u32,
    /// Absolute byte offset one past the last byte
    pub end: u32,
    pub category: RawCategory,
    /// Declared symbol the lexeme is bound to, if any
    pub binding: Option<SymbolKind>,
    pub children: Vec<RawToken>,
}

impl RawToken {
    pub fn leaf(start: u32, end: u32, category: RawCategory) -> Self {
        Self {
            start,
            end,
            category,
            binding: None,
            children: Vec::new(),
        }
    }

    /// A composite lexeme covering `start..end` whose children replace it in the output.
    pub fn composite(start: u32, end: u32, category: RawCategory, children: Vec<RawToken>) -> Self {
        Self {
            start,
            end,
            category,
            binding: None,
            children,
        }
    }

    pub fn bound_to(mut self, kind: SymbolKind) -> Self {
        self.binding = Some(kind);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Serialized form of a [`RawToken`], with the category still as a label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedToken {
    pub start: u32,
    pub end: u32,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<SymbolKind>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ClassifiedToken>,
}

impl TryFrom<ClassifiedToken> for RawToken {
    type Error = HighlightError;

    fn try_from(token: ClassifiedToken) -> Result<Self, Self::Error> {
        let category = token.category.parse()?;
        let children = token
            .children
            .into_iter()
            .map(RawToken::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RawToken {
            start: token.start,
            end: token.end,
            category,
            binding: token.symbol,
            children,
        })
    }
}

impl From<&RawToken> for ClassifiedToken {
    fn from(token: &RawToken) -> Self {
        ClassifiedToken {
            start: token.start,
            end: token.end,
            category: token.category.label().to_string(),
            symbol: token.binding,
            children: token.children.iter().map(ClassifiedToken::from).collect(),
        }
    }
}
