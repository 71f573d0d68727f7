use serde::{Deserialize, Serialize};

use crate::analysis::highlight::{ExcludeClassification, HighlightSpan};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightRequest {
    pub file_name: String,
    /// 0-based lines to restrict output to; absent or empty means all lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_classifications: Option<Vec<ExcludeClassification>>,
}

impl HighlightRequest {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    pub fn with_lines(mut self, lines: impl IntoIterator<Item = u32>) -> Self {
        self.lines = Some(lines.into_iter().collect());
        self
    }

    pub fn excluding(
        mut self,
        excluded: impl IntoIterator<Item = ExcludeClassification>,
    ) -> Self {
        self.exclude_classifications = Some(excluded.into_iter().collect());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightResponse {
    pub highlights: Vec<HighlightSpanDto>,
}

/// Wire form of a [`HighlightSpan`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSpanDto {
    pub kind: String,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl From<&HighlightSpan> for HighlightSpanDto {
    fn from(span: &HighlightSpan) -> Self {
        Self {
            kind: span.category.as_str().to_string(),
            start_line: span.start_line,
            start_column: span.start_column,
            end_line: span.end_line,
            end_column: span.end_column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_from_camel_case() {
        let json = r#"{
            "fileName": "Program.cs",
            "lines": [0, 3],
            "excludeClassifications": ["Name", "Punctuation"]
        }"#;
        let request: HighlightRequest = serde_json::from_str(json).unwrap();

        assert_eq!(
            request,
            HighlightRequest::new("Program.cs")
                .with_lines([0, 3])
                .excluding([
                    ExcludeClassification::Name,
                    ExcludeClassification::Punctuation
                ])
        );
    }

    #[test]
    fn test_request_optional_fields_default_to_none() {
        let request: HighlightRequest =
            serde_json::from_str(r#"{ "fileName": "a.cs" }"#).unwrap();
        assert_eq!(request.lines, None);
        assert_eq!(request.exclude_classifications, None);
    }

    #[test]
    fn test_unknown_exclusion_group_is_rejected() {
        let json = r#"{ "fileName": "a.cs", "excludeClassifications": ["Comment"] }"#;
        assert!(serde_json::from_str::<HighlightRequest>(json).is_err());
    }
}
