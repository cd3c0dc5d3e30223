//! Presentation adapter: one user's conversation with the engine.
//!
//! Validates input at the boundary, keeps the transcript, paces replies
//! with optional artificial latency, and reports everything to a
//! [`Renderer`]. The engine itself never waits.

use std::sync::Arc;
use std::time::Duration;

use carefind_core::config::ChatConfig;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::engine::ConversationEngine;
use crate::error::ChatError;
use crate::render::{RenderEvent, Renderer};
use crate::response::NOT_FOUND_NOTICE;
use crate::types::{ChatTurn, Transcript, TurnKind, Utterance};

/// Default cap on utterance length in characters.
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 2000;

/// Artificial pauses used to make replies feel less instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latency {
    /// Before a bot reply, while the pending indicator is shown.
    pub typing: Duration,
    /// Before a booking confirmation.
    pub booking: Duration,
}

impl Latency {
    pub const NONE: Latency = Latency {
        typing: Duration::ZERO,
        booking: Duration::ZERO,
    };

    pub fn from_config(config: &ChatConfig) -> Self {
        Self {
            typing: Duration::from_millis(config.typing_delay_ms),
            booking: Duration::from_millis(config.booking_delay_ms),
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

pub struct ChatSession<R> {
    id: Uuid,
    engine: Arc<ConversationEngine>,
    transcript: Transcript,
    renderer: R,
    latency: Latency,
    max_message_chars: usize,
}

impl<R: Renderer> ChatSession<R> {
    /// New session with no latency and the default length limit.
    pub fn new(engine: Arc<ConversationEngine>, renderer: R) -> Self {
        let id = Uuid::new_v4();
        info!(session_id = %id, "Chat session started");
        Self {
            id,
            engine,
            transcript: Transcript::new(),
            renderer,
            latency: Latency::NONE,
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
        }
    }

    /// New session paced and limited according to `config`.
    pub fn from_config(engine: Arc<ConversationEngine>, renderer: R, config: &ChatConfig) -> Self {
        Self::new(engine, renderer)
            .with_latency(Latency::from_config(config))
            .with_max_message_chars(config.max_message_chars)
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_max_message_chars(mut self, max: usize) -> Self {
        self.max_message_chars = max;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Handle a "submit utterance" event.
    ///
    /// Blank or over-long input is rejected before anything is recorded or
    /// rendered. Returns the bot turn.
    pub async fn submit(&mut self, raw: &str) -> Result<&ChatTurn, ChatError> {
        let utterance = match Utterance::parse(raw, self.max_message_chars) {
            Ok(u) => u,
            Err(e) => {
                warn!(session_id = %self.id, error = %e, "Rejected utterance");
                return Err(e);
            }
        };

        let user_turn = self.transcript.push(ChatTurn::user(&utterance));
        self.renderer.render(RenderEvent::UserTurn(user_turn));

        self.renderer.render(RenderEvent::Pending(true));
        pause(self.latency.typing).await;
        let bot_turn = {
            let reply = self.engine.handle(&utterance);
            ChatTurn::bot(&reply)
        };
        self.renderer.render(RenderEvent::Pending(false));

        debug!(
            session_id = %self.id,
            suggestions = bot_turn.hospitals().len(),
            "Bot turn appended"
        );
        let bot_turn = self.transcript.push(bot_turn);
        self.renderer.render(RenderEvent::BotTurn(bot_turn));
        Ok(bot_turn)
    }

    /// Handle a "book hospital" event with the id as the UI carries it.
    ///
    /// An unknown id renders a notice right away and returns the error;
    /// nothing is appended to the transcript. Only a successful booking
    /// waits out the booking latency.
    pub async fn book(&mut self, raw_id: &str) -> Result<&ChatTurn, ChatError> {
        match self.engine.confirm_booking_raw(raw_id) {
            Ok(text) => {
                pause(self.latency.booking).await;
                info!(session_id = %self.id, hospital_id = raw_id.trim(), "Booking initiated");
                let turn = self.transcript.push(ChatTurn::confirmation(text));
                self.renderer.render(RenderEvent::ConfirmationTurn(turn));
                Ok(turn)
            }
            Err(e) => {
                self.renderer.render(RenderEvent::Notice(NOT_FOUND_NOTICE));
                Err(e)
            }
        }
    }

    /// Render every turn again, oldest first.
    pub fn replay(&mut self) {
        for turn in self.transcript.turns() {
            let event = match turn.kind {
                TurnKind::User { .. } => RenderEvent::UserTurn(turn),
                TurnKind::Bot { .. } => RenderEvent::BotTurn(turn),
                TurnKind::Confirmation { .. } => RenderEvent::ConfirmationTurn(turn),
            };
            self.renderer.render(event);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RecordedEvent, RecordingRenderer};
    use crate::response::{FixedPicker, ACKNOWLEDGEMENTS};
    use carefind_core::Directory;

    fn session() -> ChatSession<RecordingRenderer> {
        let engine = ConversationEngine::new(Arc::new(Directory::seed()), Box::new(FixedPicker(1)));
        ChatSession::new(Arc::new(engine), RecordingRenderer::new())
    }

    // ---- Latency ----

    #[test]
    fn test_latency_from_default_config() {
        let latency = Latency::from_config(&ChatConfig::default());
        assert_eq!(latency.typing, Duration::from_millis(2000));
        assert_eq!(latency.booking, Duration::from_millis(500));
    }

    #[test]
    fn test_latency_none_is_zero() {
        assert!(Latency::NONE.typing.is_zero());
        assert_eq!(Latency::NONE, Latency::default());
    }

    // ---- submit ----

    #[tokio::test]
    async fn test_submit_event_order() {
        let mut s = session();
        s.submit("I have chest pain").await.unwrap();

        let events = &s.renderer().events;
        assert_eq!(events.len(), 4);
        assert!(matches!(&events[0], RecordedEvent::UserTurn(t) if t.text() == "I have chest pain"));
        assert_eq!(events[1], RecordedEvent::Pending(true));
        assert_eq!(events[2], RecordedEvent::Pending(false));
        match &events[3] {
            RecordedEvent::BotTurn(t) => {
                assert_eq!(t.text(), ACKNOWLEDGEMENTS[1]);
                assert_eq!(t.hospitals().len(), 2);
            }
            other => panic!("expected bot turn, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_trims_before_recording() {
        let mut s = session();
        s.submit("   hello   ").await.unwrap();
        assert_eq!(s.transcript().turns()[0].text(), "hello");
    }

    #[tokio::test]
    async fn test_blank_submit_renders_nothing() {
        let mut s = session();
        let err = s.submit("   ").await.unwrap_err();
        assert!(matches!(err, ChatError::EmptyMessage));
        assert!(s.renderer().events.is_empty());
        assert!(s.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_too_long_submit_rejected() {
        let mut s = session().with_max_message_chars(5);
        let err = s.submit("headache").await.unwrap_err();
        assert!(matches!(err, ChatError::MessageTooLong(5)));
        assert!(s.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_submit_with_small_latency() {
        let mut s = session().with_latency(Latency {
            typing: Duration::from_millis(5),
            booking: Duration::from_millis(5),
        });
        let turn = s.submit("hello").await.unwrap();
        assert!(turn.hospitals().is_empty());
        s.book("1").await.unwrap();
        assert_eq!(s.transcript().len(), 3);
    }

    // ---- book ----

    #[tokio::test]
    async fn test_book_known_hospital() {
        let mut s = session();
        let turn = s.book("2").await.unwrap();
        assert!(turn.text().contains("Advanced Heart Institute"));
        assert!(matches!(
            s.renderer().events.last(),
            Some(RecordedEvent::ConfirmationTurn(_))
        ));
    }

    #[tokio::test]
    async fn test_book_unknown_hospital_renders_notice() {
        let mut s = session();
        let err = s.book("999").await.unwrap_err();
        assert!(matches!(err, ChatError::HospitalNotFound(_)));
        assert!(s.transcript().is_empty());
        assert_eq!(
            s.renderer().events,
            vec![RecordedEvent::Notice(NOT_FOUND_NOTICE.to_string())]
        );
    }

    #[tokio::test]
    async fn test_unknown_booking_skips_booking_latency() {
        let mut s = session().with_latency(Latency {
            typing: Duration::ZERO,
            booking: Duration::from_secs(30),
        });
        let outcome = tokio::time::timeout(Duration::from_secs(1), s.book("999"))
            .await
            .expect("unknown id should not wait for the booking delay");
        assert!(matches!(outcome, Err(ChatError::HospitalNotFound(_))));
        assert_eq!(
            s.renderer().events,
            vec![RecordedEvent::Notice(NOT_FOUND_NOTICE.to_string())]
        );
    }

    // ---- transcript / replay ----

    #[tokio::test]
    async fn test_transcript_only_grows() {
        let mut s = session();
        s.submit("my kid is sick").await.unwrap();
        let first_ids: Vec<Uuid> = s.transcript().turns().iter().map(|t| t.id).collect();
        let _ = s.book("nope").await;
        s.book("4").await.unwrap();
        s.submit("thanks").await.unwrap();

        let turns = s.transcript().turns();
        assert_eq!(turns.len(), 5);
        let prefix: Vec<Uuid> = turns[..2].iter().map(|t| t.id).collect();
        assert_eq!(prefix, first_ids);
    }

    #[tokio::test]
    async fn test_replay_renders_all_turns() {
        let mut s = session();
        s.submit("hello").await.unwrap();
        s.book("3").await.unwrap();
        s.renderer_mut().events.clear();

        s.replay();
        let events = &s.renderer().events;
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], RecordedEvent::UserTurn(_)));
        assert!(matches!(events[1], RecordedEvent::BotTurn(_)));
        assert!(matches!(events[2], RecordedEvent::ConfirmationTurn(_)));
    }

    #[test]
    fn test_from_config_applies_limits() {
        let engine = Arc::new(ConversationEngine::with_seed(
            Arc::new(Directory::seed()),
            Some(1),
        ));
        let config = ChatConfig {
            max_message_chars: 10,
            ..ChatConfig::default()
        };
        let s = ChatSession::from_config(engine, RecordingRenderer::new(), &config);
        assert_eq!(s.max_message_chars, 10);
        assert_eq!(s.latency.booking, Duration::from_millis(500));
    }
}
