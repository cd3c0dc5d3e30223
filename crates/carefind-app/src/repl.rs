//! Interactive loop: reads lines, routes them to the chat session.

use carefind_chat::{ChatError, ChatSession, RenderEvent, Renderer};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// What one input line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Say(&'a str),
    Book(&'a str),
    History,
    Help,
    Quit,
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (trimmed, ""),
        };
        match head {
            "/book" => Command::Book(rest),
            "/history" => Command::History,
            "/help" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            _ => Command::Say(line),
        }
    }
}

pub const HELP: &str =
    "Describe how you feel. Commands: /book <id>, /history, /help, /quit";

/// Drive `session` from `input` until EOF or `/quit`.
pub async fn run<R, I>(session: &mut ChatSession<R>, input: I) -> std::io::Result<()>
where
    R: Renderer,
    I: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => session.renderer_mut().render(RenderEvent::Notice(HELP)),
            Command::History => session.replay(),
            Command::Book(id) => {
                if let Err(e) = session.book(id).await {
                    tracing::debug!(error = %e, "Booking not completed");
                }
            }
            Command::Say(text) => match session.submit(text).await {
                Ok(_) => {}
                // Blank lines are dropped at the boundary.
                Err(ChatError::EmptyMessage) => {}
                Err(e) => {
                    let notice = e.to_string();
                    session.renderer_mut().render(RenderEvent::Notice(&notice));
                }
            },
        }
    }
    tracing::info!(turns = session.transcript().len(), "Session ended");
    Ok(())
}
