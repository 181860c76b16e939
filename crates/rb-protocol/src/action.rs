//! Wire format of the action webhook spoken by the dialogue engine.
//!
//! The engine posts the name of the action to run plus its conversation
//! tracker (known slots, latest raw message); the server answers with
//! slot-set events and the texts to utter back to the user.

use serde::{Deserialize, Serialize};

use crate::slots::ReservationSlots;

/// Request posted by the dialogue engine to `POST /webhook`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    /// Name of the custom action to run, e.g. "action_reserve_table".
    pub next_action: String,
    pub tracker: Tracker,
}

/// Conversation state as seen by the dialogue engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tracker {
    #[serde(default)]
    pub sender_id: String,
    #[serde(default)]
    pub slots: ReservationSlots,
    #[serde(default)]
    pub latest_message: LatestMessage,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatestMessage {
    #[serde(default)]
    pub text: String,
}

/// Webhook reply: tracker events to apply plus bot utterances.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    pub events: Vec<Event>,
    pub responses: Vec<BotMessage>,
}

impl ActionResponse {
    /// Response carrying a single utterance and no events.
    pub fn with_message(text: impl Into<String>) -> Self {
        ActionResponse {
            events: Vec::new(),
            responses: vec![BotMessage { text: text.into() }],
        }
    }

    pub fn push_slot(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.events.push(Event::Slot {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn push_message(&mut self, text: impl Into<String>) {
        self.responses.push(BotMessage { text: text.into() });
    }
}

/// Tracker event emitted back to the dialogue engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Slot { name: String, value: String },
}

/// A single text utterance for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotMessage {
    pub text: String,
}
