use crate::errors::StoryError;
use crate::models::{Story, StoryId};
use crate::streaming::frame::{FrameError, StreamFrame};
use crate::types::{Topic, ToastLevel, TopicRequest};

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Streaming,
    Finalizing,
    Done(Story),
    Failed(StoryError),
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Done(_) | Phase::Failed(_))
    }
}

/// What the socket reports to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Opened,
    Received(String),
    TransportError,
    Closed,
}

/// Work the session asks its host to carry out after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write this text frame to the socket.
    Send(String),
    /// A token was appended to the buffer.
    Appended(String),
    Entered(Phase),
    Notify { level: ToastLevel, message: String },
    /// The socket is no longer needed.
    Release,
    /// Move to the finished story once the completion banner has been shown.
    Redirect(StoryId),
}

/// One generation attempt: the topic, the text streamed so far, and the phase.
#[derive(Debug, Clone)]
pub struct StreamingSession {
    topic: Topic,
    text: String,
    phase: Phase,
}

impl StreamingSession {
    pub fn new(topic: Topic) -> Self {
        StreamingSession {
            topic,
            text: String::new(),
            phase: Phase::Idle,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn story(&self) -> Option<&Story> {
        match &self.phase {
            Phase::Done(story) => Some(story),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&StoryError> {
        match &self.phase {
            Phase::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Advances the machine by one event. Terminal phases absorb everything.
    pub fn apply(&mut self, event: SessionEvent) -> Vec<Effect> {
        if self.phase.is_terminal() {
            return Vec::new();
        }

        match event {
            SessionEvent::Opened => self.open(),
            SessionEvent::Received(text) => self.receive(&text),
            SessionEvent::TransportError | SessionEvent::Closed => {
                self.fail(StoryError::Connection)
            }
        }
    }

    fn open(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Idle {
            return Vec::new();
        }

        let request = TopicRequest {
            topic: self.topic.clone(),
        };
        match serde_json::to_string(&request) {
            Ok(frame) => {
                self.phase = Phase::Streaming;
                vec![Effect::Send(frame), Effect::Entered(Phase::Streaming)]
            }
            Err(e) => self.fail(StoryError::Protocol(e.to_string())),
        }
    }

    fn receive(&mut self, text: &str) -> Vec<Effect> {
        if self.phase == Phase::Idle {
            log::warn!("frame arrived before the socket opened; ignoring");
            return Vec::new();
        }

        let frame = match StreamFrame::parse(text) {
            Ok(frame) => frame,
            Err(FrameError::Unreadable(reason)) => {
                log::warn!("ignoring unreadable stream frame: {reason}");
                return Vec::new();
            }
            Err(e @ FrameError::Malformed { .. }) => {
                return self.fail(StoryError::Protocol(e.to_string()));
            }
        };

        match frame {
            StreamFrame::Token(token) => {
                if self.phase != Phase::Streaming {
                    log::debug!("token after story_done; ignoring");
                    return Vec::new();
                }
                self.text.push_str(&token);
                vec![Effect::Appended(token)]
            }
            StreamFrame::StoryDone => {
                if self.phase != Phase::Streaming {
                    return Vec::new();
                }
                self.phase = Phase::Finalizing;
                vec![Effect::Entered(Phase::Finalizing)]
            }
            StreamFrame::Complete(story) => {
                log::info!("story {} generated for topic '{}'", story.id, self.topic);
                let id = story.id;
                self.phase = Phase::Done(story);
                vec![
                    Effect::Entered(self.phase.clone()),
                    Effect::Notify {
                        level: ToastLevel::Success,
                        message: "Story created successfully!".to_string(),
                    },
                    Effect::Release,
                    Effect::Redirect(id),
                ]
            }
            StreamFrame::Error(message) => self.fail(StoryError::Backend(message)),
            StreamFrame::Unrecognized(kind) => {
                log::debug!("ignoring stream frame of type '{kind}'");
                Vec::new()
            }
        }
    }

    fn fail(&mut self, error: StoryError) -> Vec<Effect> {
        log::error!("story stream for '{}' failed: {error}", self.topic);
        let message = error.to_string();
        self.phase = Phase::Failed(error);
        vec![
            Effect::Entered(self.phase.clone()),
            Effect::Notify {
                level: ToastLevel::Error,
                message,
            },
            Effect::Release,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> StreamingSession {
        StreamingSession::new(Topic::parse("a lighthouse keeper").unwrap())
    }

    fn token(text: &str) -> SessionEvent {
        SessionEvent::Received(
            serde_json::json!({ "type": "token", "payload": text }).to_string(),
        )
    }

    fn story_done() -> SessionEvent {
        SessionEvent::Received(r#"{"type":"story_done"}"#.to_string())
    }

    fn complete(id: i64) -> SessionEvent {
        SessionEvent::Received(
            serde_json::json!({
                "type": "complete",
                "payload": {"id": id, "title": "T", "text": "Once upon a time", "questions": []}
            })
            .to_string(),
        )
    }

    fn backend_error(message: &str) -> SessionEvent {
        SessionEvent::Received(
            serde_json::json!({ "type": "error", "payload": message }).to_string(),
        )
    }

    #[test]
    fn test_open_sends_topic_and_starts_streaming() {
        let mut session = session();
        let effects = session.apply(SessionEvent::Opened);
        assert_eq!(
            effects,
            vec![
                Effect::Send(r#"{"topic":"a lighthouse keeper"}"#.to_string()),
                Effect::Entered(Phase::Streaming),
            ]
        );
        assert_eq!(session.phase(), &Phase::Streaming);
    }

    #[test]
    fn test_full_generation_scenario() {
        let mut session = session();
        session.apply(SessionEvent::Opened);
        session.apply(token("Once "));
        session.apply(token("upon a time"));
        session.apply(story_done());
        assert_eq!(session.phase(), &Phase::Finalizing);

        let effects = session.apply(complete(42));
        assert!(matches!(session.phase(), Phase::Done(_)));
        assert_eq!(session.text(), "Once upon a time");
        assert_eq!(session.story().map(|story| story.id), Some(42));
        assert!(effects.contains(&Effect::Release));
        assert_eq!(effects.last(), Some(&Effect::Redirect(42)));
    }

    #[test]
    fn test_buffer_is_concatenation_of_tokens() {
        let mut session = session();
        session.apply(SessionEvent::Opened);
        let tokens = ["The ", "fox ", "", "jumped", " 🦊", "\n"];
        let mut expected = String::new();
        for piece in tokens {
            session.apply(token(piece));
            expected.push_str(piece);
            assert_eq!(session.text(), expected);
        }
    }

    #[test]
    fn test_complete_accepted_while_streaming() {
        let mut session = session();
        session.apply(SessionEvent::Opened);
        session.apply(token("Short."));
        session.apply(complete(7));
        assert_eq!(session.story().map(|story| story.id), Some(7));
    }

    #[test]
    fn test_backend_error_leaves_buffer_untouched() {
        let mut session = session();
        session.apply(SessionEvent::Opened);
        let effects = session.apply(backend_error("rate limited"));
        assert_eq!(
            session.phase(),
            &Phase::Failed(StoryError::Backend("rate limited".to_string()))
        );
        assert_eq!(session.error().map(|e| e.to_string()).as_deref(), Some("rate limited"));
        assert_eq!(session.text(), "");
        assert!(effects.contains(&Effect::Notify {
            level: ToastLevel::Error,
            message: "rate limited".to_string(),
        }));
    }

    #[test]
    fn test_terminal_phases_absorb_input() {
        let mut done = session();
        done.apply(SessionEvent::Opened);
        done.apply(complete(1));
        let finished = done.phase().clone();
        for event in [token("more"), backend_error("late"), SessionEvent::Closed, SessionEvent::Opened, complete(2)] {
            assert!(done.apply(event).is_empty());
            assert_eq!(done.phase(), &finished);
        }

        let mut failed = session();
        failed.apply(SessionEvent::Opened);
        failed.apply(SessionEvent::TransportError);
        for event in [token("more"), complete(3), SessionEvent::Closed] {
            assert!(failed.apply(event).is_empty());
        }
        assert_eq!(failed.phase(), &Phase::Failed(StoryError::Connection));
        assert_eq!(failed.text(), "");
    }

    #[test]
    fn test_close_before_complete_is_connection_error() {
        let mut session = session();
        session.apply(SessionEvent::Opened);
        session.apply(token("Half a st"));
        session.apply(story_done());
        session.apply(SessionEvent::Closed);
        assert_eq!(session.phase(), &Phase::Failed(StoryError::Connection));
        assert_eq!(session.text(), "Half a st");
    }

    #[test]
    fn test_failure_before_open() {
        let mut session = session();
        session.apply(SessionEvent::TransportError);
        assert_eq!(session.phase(), &Phase::Failed(StoryError::Connection));
    }

    #[test]
    fn test_unknown_and_unreadable_frames_are_ignored() {
        let mut session = session();
        session.apply(SessionEvent::Opened);
        session.apply(token("A"));
        assert!(session
            .apply(SessionEvent::Received(r#"{"type":"progress","payload":50}"#.to_string()))
            .is_empty());
        assert!(session
            .apply(SessionEvent::Received("<html>".to_string()))
            .is_empty());
        assert_eq!(session.phase(), &Phase::Streaming);
        assert_eq!(session.text(), "A");
    }

    #[test]
    fn test_tokens_after_story_done_do_not_grow_buffer() {
        let mut session = session();
        session.apply(SessionEvent::Opened);
        session.apply(token("The end."));
        session.apply(story_done());
        assert!(session.apply(token(" Or is it?")).is_empty());
        assert_eq!(session.text(), "The end.");
        assert_eq!(session.phase(), &Phase::Finalizing);
    }

    #[test]
    fn test_malformed_complete_fails_session() {
        let mut session = session();
        session.apply(SessionEvent::Opened);
        session.apply(SessionEvent::Received(
            r#"{"type":"complete","payload":"oops"}"#.to_string(),
        ));
        assert!(matches!(session.phase(), Phase::Failed(StoryError::Protocol(_))));
        assert_eq!(session.story(), None);
    }

    #[test]
    fn test_frames_before_open_are_ignored() {
        let mut session = session();
        assert!(session.apply(token("early")).is_empty());
        assert_eq!(session.phase(), &Phase::Idle);
    }
}
