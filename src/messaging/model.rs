/**
 * Message Model
 *
 * A direct message from one account to another.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A direct message between two accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message ID (UUID)
    pub id: Uuid,
    /// Account that sent the message
    pub sender_id: Uuid,
    /// Account the message was sent to
    pub receiver_id: Uuid,
    /// Message text
    pub body: String,
    /// When the message was created
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Build a fresh message with a new id and the current timestamp
    pub fn new(sender_id: Uuid, receiver_id: Uuid, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender_id,
            receiver_id,
            body,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_carries_endpoints() {
        let sender = Uuid::new_v4();
        let receiver = Uuid::new_v4();
        let message = Message::new(sender, receiver, "hey".to_string());

        assert_eq!(message.sender_id, sender);
        assert_eq!(message.receiver_id, receiver);
        assert_eq!(message.body, "hey");
        assert_ne!(message.id, Uuid::nil());
    }
}
