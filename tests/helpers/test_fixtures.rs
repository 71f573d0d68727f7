//! Source fixtures and their classification forests.
//!
//! Each fixture pairs a small C#-like source text with the forest a front-end
//! classifier would report for it.

use semantic_highlight::{RawCategory, RawToken, SymbolKind};

/// Builds leaf tokens by locating each lexeme after the previous one.
pub struct TokenCursor<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }

    /// Leaf token for the next occurrence of `lexeme`.
    pub fn take(&mut self, lexeme: &str, category: RawCategory) -> RawToken {
        let start = self.source[self.offset..]
            .find(lexeme)
            .map(|relative| self.offset + relative)
            .unwrap_or_else(|| panic!("lexeme {:?} not found after {}", lexeme, self.offset));
        let end = start + lexeme.len();
        self.offset = end;
        RawToken::leaf(start as u32, end as u32, category)
    }

    pub fn bound(&mut self, lexeme: &str, kind: SymbolKind) -> RawToken {
        self.take(lexeme, RawCategory::Identifier).bound_to(kind)
    }
}

/// Wrap sub-lexemes in an interpolated-string composite spanning all of them.
pub fn interpolated(children: Vec<RawToken>) -> RawToken {
    let start = children.first().map_or(0, |t| t.start);
    let end = children.last().map_or(0, |t| t.end);
    RawToken::composite(start, end, RawCategory::InterpolatedString, children)
}

pub const CLASS_SOURCE: &str = "class C1 { int n = true; }";

pub fn class_tokens() -> Vec<RawToken> {
    let mut cursor = TokenCursor::new(CLASS_SOURCE);
    vec![
        cursor.take("class", RawCategory::Keyword),
        cursor.bound("C1", SymbolKind::Class),
        cursor.take("{", RawCategory::Punctuation),
        cursor.take("int", RawCategory::Keyword),
        cursor.bound("n", SymbolKind::Field),
        cursor.take("=", RawCategory::Operator),
        cursor.take("true", RawCategory::Keyword),
        cursor.take(";", RawCategory::Punctuation),
        cursor.take("}", RawCategory::Punctuation),
    ]
}

pub const INTERPOLATION_SOURCE: &str = "string s = $\"{5}\";";

pub fn interpolation_tokens() -> Vec<RawToken> {
    let mut cursor = TokenCursor::new(INTERPOLATION_SOURCE);
    let keyword = cursor.take("string", RawCategory::Keyword);
    let name = cursor.bound("s", SymbolKind::Local);
    let assign = cursor.take("=", RawCategory::Operator);
    let literal = interpolated(vec![
        cursor.take("$\"", RawCategory::InterpolatedStringStart),
        cursor.take("{", RawCategory::InterpolationOpenBrace),
        cursor.take("5", RawCategory::NumericLiteral),
        cursor.take("}", RawCategory::InterpolationCloseBrace),
        cursor.take("\"", RawCategory::InterpolatedStringEnd),
    ]);
    let semicolon = cursor.take(";", RawCategory::Punctuation);
    vec![keyword, name, assign, literal, semicolon]
}

/// Five lines; the block comment runs from line 3 into line 4.
pub const MULTILINE_SOURCE: &str = "class C1\n{\n    int n = 1;\n    /* note\n    */ }";

pub fn multiline_tokens() -> Vec<RawToken> {
    let mut cursor = TokenCursor::new(MULTILINE_SOURCE);
    vec![
        cursor.take("class", RawCategory::Keyword),
        cursor.bound("C1", SymbolKind::Class),
        cursor.take("{", RawCategory::Punctuation),
        cursor.take("int", RawCategory::Keyword),
        cursor.take("n", RawCategory::Identifier),
        cursor.take("=", RawCategory::Operator),
        cursor.take("1", RawCategory::NumericLiteral),
        cursor.take(";", RawCategory::Punctuation),
        cursor.take("/* note\n    */", RawCategory::Comment),
        cursor.take("}", RawCategory::Punctuation),
    ]
}

/// A mix of every kind of name, a nested interpolation and several lines.
pub const MIXED_SOURCE: &str = "struct P<T> {\n  // x\n  T v = $\"a{v}b{$\"{1}\"}\";\n  E e = E.A + 2;\n}\n";

pub fn mixed_tokens() -> Vec<RawToken> {
    let mut cursor = TokenCursor::new(MIXED_SOURCE);
    let mut tokens = vec![
        cursor.take("struct", RawCategory::Keyword),
        cursor.bound("P", SymbolKind::Struct),
        cursor.take("<", RawCategory::Punctuation),
        cursor.bound("T", SymbolKind::TypeParameter),
        cursor.take(">", RawCategory::Punctuation),
        cursor.take("{", RawCategory::Punctuation),
        cursor.take("// x", RawCategory::Comment),
        cursor.bound("T", SymbolKind::TypeParameter),
        cursor.bound("v", SymbolKind::Field),
        cursor.take("=", RawCategory::Operator),
    ];

    let start = cursor.take("$\"", RawCategory::InterpolatedStringStart);
    let text_a = cursor.take("a", RawCategory::InterpolatedStringText);
    let open_v = cursor.take("{", RawCategory::InterpolationOpenBrace);
    let v = cursor.bound("v", SymbolKind::Field);
    let close_v = cursor.take("}", RawCategory::InterpolationCloseBrace);
    let text_b = cursor.take("b", RawCategory::InterpolatedStringText);
    let open_inner = cursor.take("{", RawCategory::InterpolationOpenBrace);
    let inner = interpolated(vec![
        cursor.take("$\"", RawCategory::InterpolatedStringStart),
        cursor.take("{", RawCategory::InterpolationOpenBrace),
        cursor.take("1", RawCategory::NumericLiteral),
        cursor.take("}", RawCategory::InterpolationCloseBrace),
        cursor.take("\"", RawCategory::InterpolatedStringEnd),
    ]);
    let close_inner = cursor.take("}", RawCategory::InterpolationCloseBrace);
    let end = cursor.take("\"", RawCategory::InterpolatedStringEnd);
    tokens.push(interpolated(vec![
        start, text_a, open_v, v, close_v, text_b, open_inner, inner, close_inner, end,
    ]));

    tokens.extend([
        cursor.take(";", RawCategory::Punctuation),
        cursor.bound("E", SymbolKind::Enum),
        cursor.bound("e", SymbolKind::Local),
        cursor.take("=", RawCategory::Operator),
        cursor.bound("E", SymbolKind::Enum),
        cursor.take(".", RawCategory::Operator),
        cursor.bound("A", SymbolKind::EnumMember),
        cursor.take("+", RawCategory::Operator),
        cursor.take("2", RawCategory::NumericLiteral),
        cursor.take(";", RawCategory::Punctuation),
        cursor.take("}", RawCategory::Punctuation),
    ]);
    tokens
}

/// Number of leaf tokens in a forest.
pub fn leaf_count(tokens: &[RawToken]) -> usize {
    tokens
        .iter()
        .map(|token| {
            if token.is_leaf() {
                1
            } else {
                leaf_count(&token.children)
            }
        })
        .sum()
}
