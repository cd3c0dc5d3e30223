//! Terminal and JSON-lines renderers for the interactive session.

use std::io::Write;

use carefind_chat::{ChatTurn, RenderEvent, Renderer};
use carefind_core::types::HospitalRecord;

/// Format one hospital listing as a text card.
pub fn format_card(hospital: &HospitalRecord) -> String {
    format!(
        "  ┌ {} ({})  [{}]\n  │ 📍 {}   ⏰ {}   ⭐ {}   📞 {}\n  │ {}\n  └ /book {}",
        hospital.name,
        hospital.specialty,
        hospital.availability,
        hospital.distance,
        hospital.wait_time,
        hospital.rating,
        hospital.phone,
        hospital.address,
        hospital.id,
    )
}

fn format_bot_turn(turn: &ChatTurn) -> String {
    let mut lines = vec![format!("bot> {}", turn.text())];
    lines.extend(turn.hospitals().iter().map(format_card));
    lines.join("\n")
}

/// Human-readable transcript on any writer (stdout in the binary).
pub struct TerminalRenderer<W> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, event: RenderEvent<'_>) {
        match event {
            RenderEvent::UserTurn(turn) => self.emit(&format!("you> {}", turn.text())),
            RenderEvent::BotTurn(turn) => self.emit(&format_bot_turn(turn)),
            RenderEvent::ConfirmationTurn(turn) => self.emit(&format!("bot> {}", turn.text())),
            RenderEvent::Pending(true) => self.emit("bot is typing..."),
            RenderEvent::Pending(false) => {}
            RenderEvent::Notice(text) => self.emit(&format!("!! {}", text)),
        }
    }
}

/// One JSON object per event, newline separated.
pub struct JsonRenderer<W> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, event: RenderEvent<'_>) {
        let result = serde_json::to_writer(&mut self.out, &event)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(self.out))
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to write render event");
        }
    }
}
