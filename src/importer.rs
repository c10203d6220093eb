/// Self-contained type definitions for the Google Keep Takeout note schema.
///
/// Storage format: one JSON object per note, stored as standalone files under
/// `Takeout/Keep/` in the unpacked archive (e.g. `Shopping list.json`).
///
/// The schema is undocumented and every field is best-effort optional: notes
/// written by older Keep versions omit fields freely, text notes have no
/// `listContent`, checklist notes have no `textContent`, and timestamps show
/// up both as JSON numbers and as decimal strings depending on export
/// vintage. Unknown fields (color, annotations, attachments, ...) are
/// ignored.
use serde::Deserialize;

/// Epoch timestamp in microseconds, as found in `createdTimestampUsec` and
/// `userEditedTimestampUsec`.
///
/// Accepts either a JSON number or a numeric string; anything else fails
/// deserialization for the whole note, which the batch loop reports as that
/// file's error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampUsec(pub i64);

impl<'de> Deserialize<'de> for TimestampUsec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let value = serde_json::Value::deserialize(deserializer)?;
        match &value {
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(TimestampUsec)
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", n))),
            serde_json::Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(TimestampUsec)
                .map_err(|_| D::Error::custom(format!("timestamp is not numeric: {:?}", s))),
            other => Err(D::Error::custom(format!(
                "expected a number or numeric string for timestamp, got: {}",
                other
            ))),
        }
    }
}

/// One entry of a checklist note.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub is_checked: bool,
}

/// A label (tag) attached to a note. Takeout stores the name only; label
/// colors and ids never reach the export.
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

/// The full note document as written by Takeout.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeepNote {
    #[serde(default)]
    pub title: Option<String>,

    /// Free-form body of a text note. Keep encodes soft line breaks as
    /// single `\n`.
    #[serde(default)]
    pub text_content: Option<String>,

    /// Items of a checklist note, in display order.
    #[serde(default)]
    pub list_content: Vec<ListItem>,

    #[serde(default)]
    pub labels: Vec<Label>,

    #[serde(default)]
    pub is_pinned: bool,

    #[serde(default)]
    pub is_archived: bool,

    #[serde(default)]
    pub created_timestamp_usec: Option<TimestampUsec>,

    #[serde(default)]
    pub user_edited_timestamp_usec: Option<TimestampUsec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_full_note_when_deserializing_then_all_fields_parsed() {
        let json = r#"{
            "title": "Groceries",
            "textContent": "milk\neggs",
            "listContent": [
                {"text": "milk", "isChecked": true},
                {"text": "eggs", "isChecked": false}
            ],
            "labels": [{"name": "home"}, {"name": "shopping"}],
            "isPinned": true,
            "isArchived": false,
            "createdTimestampUsec": 1571512178922000,
            "userEditedTimestampUsec": "1571512258963000"
        }"#;

        let note: KeepNote = serde_json::from_str(json).unwrap();

        assert_eq!(note.title.as_deref(), Some("Groceries"));
        assert_eq!(note.text_content.as_deref(), Some("milk\neggs"));
        assert_eq!(note.list_content.len(), 2);
        assert!(note.list_content[0].is_checked);
        assert_eq!(note.list_content[1].text, "eggs");
        assert_eq!(note.labels[1].name, "shopping");
        assert!(note.is_pinned);
        assert!(!note.is_archived);
        assert_eq!(
            note.created_timestamp_usec,
            Some(TimestampUsec(1571512178922000))
        );
        assert_eq!(
            note.user_edited_timestamp_usec,
            Some(TimestampUsec(1571512258963000))
        );
    }

    #[test]
    fn given_empty_object_when_deserializing_then_all_defaults() {
        let note: KeepNote = serde_json::from_str("{}").unwrap();

        assert!(note.title.is_none());
        assert!(note.text_content.is_none());
        assert!(note.list_content.is_empty());
        assert!(note.labels.is_empty());
        assert!(!note.is_pinned);
        assert!(!note.is_archived);
        assert!(note.created_timestamp_usec.is_none());
        assert!(note.user_edited_timestamp_usec.is_none());
    }

    #[test]
    fn given_string_timestamp_when_deserializing_then_parsed_as_integer() {
        let note: KeepNote = serde_json::from_str(r#"{"createdTimestampUsec": "42"}"#).unwrap();
        assert_eq!(note.created_timestamp_usec, Some(TimestampUsec(42)));
    }

    #[test]
    fn given_non_numeric_timestamp_when_deserializing_then_fails() {
        let result = serde_json::from_str::<KeepNote>(r#"{"createdTimestampUsec": "soon"}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<KeepNote>(r#"{"createdTimestampUsec": [1]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn given_unknown_fields_when_deserializing_then_ignored() {
        let json = r#"{
            "title": "T",
            "color": "DEFAULT",
            "isTrashed": false,
            "annotations": [{"source": "WEBLINK"}]
        }"#;

        let note: KeepNote = serde_json::from_str(json).unwrap();
        assert_eq!(note.title.as_deref(), Some("T"));
    }

    #[test]
    fn given_label_without_name_when_deserializing_then_fails() {
        let result = serde_json::from_str::<KeepNote>(r#"{"labels": [{}]}"#);
        assert!(result.is_err());
    }
}
