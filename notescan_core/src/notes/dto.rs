use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::summary::dto::SummaryResult;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub full_text: String,
    pub created_at: DateTime<Utc>,
}

/// A summarized scan that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub title: String,
    pub summary: String,
    pub full_text: String,
}

impl From<(SummaryResult, String)> for NewNote {
    fn from(parts: (SummaryResult, String)) -> Self {
        let (result, full_text) = parts;
        Self {
            title: result.title,
            summary: result.summary,
            full_text,
        }
    }
}
