use serde::{Deserialize, Serialize};

/// One curated question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable unique identifier, a lowercase kebab-case slug.
    pub id: String,
    /// Free-text grouping label. May be empty.
    #[serde(default)]
    pub category: String,
    /// Canonical prompt this entry answers.
    pub question: String,
    /// Verbatim answer text, returned unmodified.
    pub answer: String,
    /// Source URLs in display order.
    #[serde(default)]
    pub sources: Vec<String>,
}

impl Entry {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        sources: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            question: question.into(),
            answer: answer.into(),
            sources,
        }
    }

    /// Text the index vectorizes for this entry.
    pub fn document_text(&self) -> String {
        format!("{} {}", self.question, self.answer)
    }
}
