use super::dto::Note;

/// Plain-text form of a note for sharing with other apps.
pub fn format_share_message(note: &Note) -> String {
    format!(
        "{}\n\n{}\n\nFull Text:\n{}",
        note.title, note.summary, note.full_text
    )
}

/// One-line listing entry: date, id and title.
pub fn format_list_entry(note: &Note) -> String {
    format!(
        "{}  {}  {}",
        note.created_at.format("%Y-%m-%d %H:%M"),
        note.id,
        note.title
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_note() -> Note {
        Note {
            id: "3f2a".to_string(),
            title: "Meeting notes".to_string(),
            summary: "Budget approved.".to_string(),
            full_text: "Budget approved. Lunch was late.".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_format_share_message() {
        assert_eq!(
            format_share_message(&sample_note()),
            "Meeting notes\n\nBudget approved.\n\nFull Text:\nBudget approved. Lunch was late."
        );
    }

    #[test]
    fn test_format_list_entry() {
        assert_eq!(
            format_list_entry(&sample_note()),
            "2025-03-14 09:30  3f2a  Meeting notes"
        );
    }
}
