//! Outbound presentation contract.
//!
//! A [`ChatSession`](crate::session::ChatSession) reports everything the UI
//! should show as [`RenderEvent`]s. How they are drawn is up to the
//! [`Renderer`].

use serde::Serialize;

use crate::types::ChatTurn;

/// Something the presentation layer should show.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum RenderEvent<'a> {
    UserTurn(&'a ChatTurn),
    BotTurn(&'a ChatTurn),
    ConfirmationTurn(&'a ChatTurn),
    /// Advisory "assistant is typing" indicator.
    Pending(bool),
    /// Recoverable problem the user should hear about.
    Notice(&'a str),
}

pub trait Renderer {
    fn render(&mut self, event: RenderEvent<'_>);
}

/// Owned copy of a [`RenderEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedEvent {
    UserTurn(ChatTurn),
    BotTurn(ChatTurn),
    ConfirmationTurn(ChatTurn),
    Pending(bool),
    Notice(String),
}

/// Renderer that just keeps every event, for tests and headless embedding.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<RecordedEvent>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, event: RenderEvent<'_>) {
        let owned = match event {
            RenderEvent::UserTurn(t) => RecordedEvent::UserTurn(t.clone()),
            RenderEvent::BotTurn(t) => RecordedEvent::BotTurn(t.clone()),
            RenderEvent::ConfirmationTurn(t) => RecordedEvent::ConfirmationTurn(t.clone()),
            RenderEvent::Pending(on) => RecordedEvent::Pending(on),
            RenderEvent::Notice(text) => RecordedEvent::Notice(text.to_string()),
        };
        self.events.push(owned);
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, event: RenderEvent<'_>) {
        (**self).render(event);
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, event: RenderEvent<'_>) {
        (**self).render(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_renderer_keeps_order() {
        let turn = ChatTurn::confirmation("done".to_string());
        let mut r = RecordingRenderer::new();
        r.render(RenderEvent::Pending(true));
        r.render(RenderEvent::ConfirmationTurn(&turn));
        r.render(RenderEvent::Notice("careful"));
        assert_eq!(
            r.events,
            vec![
                RecordedEvent::Pending(true),
                RecordedEvent::ConfirmationTurn(turn),
                RecordedEvent::Notice("careful".to_string()),
            ]
        );
    }

    #[test]
    fn test_render_event_json_shape() {
        let json = serde_json::to_value(RenderEvent::Pending(false)).unwrap();
        assert_eq!(json["event"], "pending");
        assert_eq!(json["payload"], false);

        let turn = ChatTurn::confirmation("ok".to_string());
        let json = serde_json::to_value(RenderEvent::ConfirmationTurn(&turn)).unwrap();
        assert_eq!(json["event"], "confirmation_turn");
        assert_eq!(json["payload"]["text"], "ok");
    }

    #[test]
    fn test_boxed_renderer_forwards() {
        let mut inner = RecordingRenderer::new();
        {
            let mut boxed: Box<dyn Renderer + '_> = Box::new(&mut inner);
            boxed.render(RenderEvent::Notice("x"));
        }
        assert_eq!(inner.events.len(), 1);
    }
}
