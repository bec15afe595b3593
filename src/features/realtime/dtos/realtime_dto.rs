use serde::Serialize;

use crate::features::files::dtos::FilesUpdatedEvent;

/// Server-to-client WebSocket frame: `{"event": "...", "data": {...}}`
#[derive(Debug, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum RealtimeMessage {
    FilesUpdated(FilesUpdatedEvent),
}

impl RealtimeMessage {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<FilesUpdatedEvent> for RealtimeMessage {
    fn from(event: FilesUpdatedEvent) -> Self {
        RealtimeMessage::FilesUpdated(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::files::dtos::FileResponseDto;
    use chrono::Utc;
    use serde_json::{json, Value};
    use uuid::Uuid;

    #[test]
    fn test_delete_frame() {
        let id = Uuid::new_v4();
        let frame = RealtimeMessage::from(FilesUpdatedEvent::Delete { id })
            .to_json()
            .unwrap();
        let value: Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(
            value,
            json!({ "event": "files_updated", "data": { "action": "delete", "id": id } })
        );
    }

    #[test]
    fn test_upload_frame_carries_record() {
        let file = FileResponseDto {
            id: Uuid::new_v4(),
            title: "Soil Mechanics".to_string(),
            subject: "Agronomy".to_string(),
            semester: "3".to_string(),
            year: "2".to_string(),
            file_url: "https://x/file.pdf".to_string(),
            file_name: "soil.pdf".to_string(),
            created_at: Utc::now(),
            user_id: "u1".to_string(),
            slug: None,
        };
        let frame = RealtimeMessage::from(FilesUpdatedEvent::Upload { file: file.clone() })
            .to_json()
            .unwrap();
        let value: Value = serde_json::from_str(&frame).unwrap();

        assert_eq!(value["event"], "files_updated");
        assert_eq!(value["data"]["action"], "upload");
        assert_eq!(value["data"]["file"]["id"], json!(file.id));
        assert_eq!(value["data"]["file"]["user_id"], "u1");
    }
}
