//! Recycle bin records

use serde::{Deserialize, Serialize};
use crate::catalog::{AppEntry, AppKind};
use crate::persistence::Timestamp;

/// What kind of program was recycled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecycledKind {
    About,
    Art,
}

/// An icon that was dropped on the recycle bin
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecycledProgram {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: RecycledKind,
    pub deleted_at: Timestamp,
}

impl RecycledProgram {
    /// Record for `app` deleted at `now`; `None` if the app cannot be recycled
    pub fn for_app(app: &AppEntry, now: Timestamp) -> Option<Self> {
        let kind = match app.kind {
            AppKind::About => RecycledKind::About,
            AppKind::Portfolio => RecycledKind::Art,
            _ => return None,
        };

        Some(Self {
            id: app.id.clone(),
            title: app.title.clone(),
            kind,
            deleted_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_for_app_kinds() {
        let catalog = Catalog::default();
        let now = Timestamp::from_millis(0);

        let about = RecycledProgram::for_app(catalog.get("about").unwrap(), now).unwrap();
        assert_eq!(about.kind, RecycledKind::About);

        let art = RecycledProgram::for_app(catalog.get("digital-art").unwrap(), now).unwrap();
        assert_eq!(art.kind, RecycledKind::Art);
        assert_eq!(art.title, "Digital Art");

        assert!(RecycledProgram::for_app(catalog.get("snake").unwrap(), now).is_none());
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{"id":"about","title":"About","type":"about","deletedAt":"2024-01-01T00:00:00.000Z"}"#;
        let program: RecycledProgram = serde_json::from_str(json).unwrap();
        assert_eq!(program.kind, RecycledKind::About);
        assert_eq!(program.deleted_at.to_iso_string(), "2024-01-01T00:00:00.000Z");
    }
}
