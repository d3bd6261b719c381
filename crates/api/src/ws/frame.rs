//! JSON wire frames.
//!
//! Every frame in either direction is `{"event": <name>, "data": <payload>}`.

use axum::extract::ws::Message;
use serde::Serialize;

/// Build a Text frame carrying a named event and its payload.
pub fn text_frame(event: &str, data: impl Serialize) -> Message {
    let data = serde_json::to_value(data).unwrap_or(serde_json::Value::Null);
    let body = serde_json::json!({ "event": event, "data": data });
    Message::Text(body.to_string().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn frame_wraps_event_and_data() {
        let msg = text_frame("message_sent", json!({"content": "hi"}));
        let Message::Text(text) = msg else {
            panic!("expected a Text frame");
        };
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["event"], "message_sent");
        assert_eq!(parsed["data"]["content"], "hi");
    }
}
