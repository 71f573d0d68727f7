use crate::text::{IndexedText, PositionEncoding, PositionView};

/// Immutable snapshot of one loaded source buffer
#[derive(Debug)]
pub struct Document {
    file_name: String,
    version: Option<i32>,
    text: IndexedText,
}

impl Document {
    /// Create a new document with just text
    pub fn new(file_name: impl Into<String>, text: String) -> Self {
        Self {
            file_name: file_name.into(),
            version: None,
            text: IndexedText::new(text),
        }
    }

    /// Create a new document with version
    pub fn with_version(file_name: impl Into<String>, text: String, version: i32) -> Self {
        Self {
            version: Some(version),
            ..Self::new(file_name, text)
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Get the text content
    pub fn text(&self) -> &str {
        self.text.text()
    }

    /// Get the document version
    pub fn version(&self) -> Option<i32> {
        self.version
    }

    pub fn indexed_text(&self) -> &IndexedText {
        &self.text
    }

    /// Get a position mapper for this document
    pub fn position_mapper(&self, encoding: PositionEncoding) -> PositionView<'_> {
        self.text.view(encoding)
    }
}
