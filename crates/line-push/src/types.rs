//! Types for the LINE Messaging API push endpoint.

use serde::{Deserialize, Serialize};

/// A text message segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextMessage {
    /// Segment type; always "text" here.
    #[serde(rename = "type")]
    pub message_type: String,

    /// Message content.
    pub text: String,
}

impl TextMessage {
    /// Create a text segment.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            message_type: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Body of a push message request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushRequest {
    /// Recipient: user, group, or room identifier.
    pub to: String,

    /// Message segments to deliver.
    pub messages: Vec<TextMessage>,
}

impl PushRequest {
    /// Create a push request carrying a single text segment.
    pub fn text(to: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            messages: vec![TextMessage::new(text)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_request_wire_shape() {
        let request = PushRequest::text("C1234567890", "事故通報");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "to": "C1234567890",
                "messages": [{"type": "text", "text": "事故通報"}]
            })
        );
    }

    #[test]
    fn test_text_message_type_field() {
        let message = TextMessage::new("hello");
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains(r#""type":"text""#));
    }
}
