use serde::{Deserialize, Serialize};

/// Fixed message carried by the completion event.
pub const COMPLETION_MESSAGE: &str = "Text streaming completed!";

/// Events pushed over an SSE connection while streaming text.
///
/// Untagged so each variant serializes as the flat JSON object clients
/// expect in the `data:` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StreamEvent {
    /// One character of the input text, with its 1-based position.
    Character {
        character: String,
        position: usize,
        total: usize,
    },
    /// Sent exactly once, after the last character.
    Complete {
        message: String,
        total_characters: usize,
    },
}

impl StreamEvent {
    pub fn character(character: char, position: usize, total: usize) -> Self {
        Self::Character {
            character: character.to_string(),
            position,
            total,
        }
    }

    pub fn complete(total_characters: usize) -> Self {
        Self::Complete {
            message: COMPLETION_MESSAGE.to_string(),
            total_characters,
        }
    }

    pub fn to_sse_data(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_event_wire_shape() {
        let event = StreamEvent::character('h', 1, 2);
        assert_eq!(
            event.to_sse_data(),
            r#"{"character":"h","position":1,"total":2}"#
        );
    }

    #[test]
    fn complete_event_wire_shape() {
        let event = StreamEvent::complete(2);
        assert_eq!(
            event.to_sse_data(),
            r#"{"message":"Text streaming completed!","total_characters":2}"#
        );
    }

    #[test]
    fn character_event_preserves_unicode() {
        let event = StreamEvent::character('é', 3, 5);
        assert_eq!(
            event.to_sse_data(),
            r#"{"character":"é","position":3,"total":5}"#
        );
    }
}
