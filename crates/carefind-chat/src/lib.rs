//! Conversational interface for CareFind.
//!
//! Turns free-text symptom descriptions into canned replies with hospital
//! suggestions, confirms simulated bookings, and drives a presentation
//! layer through the [`Renderer`] contract.

pub mod engine;
pub mod error;
pub mod render;
pub mod response;
pub mod rules;
pub mod session;
pub mod types;

pub use engine::ConversationEngine;
pub use error::ChatError;
pub use render::{RecordedEvent, RecordingRenderer, RenderEvent, Renderer};
pub use response::{FixedPicker, PhrasePicker, SeededPicker, ACKNOWLEDGEMENTS};
pub use session::{ChatSession, Latency};
pub use types::{BotReply, ChatTurn, Transcript, TurnKind, Utterance};
