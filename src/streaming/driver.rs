use std::collections::VecDeque;

use crate::errors::StoryError;
use crate::streaming::session::{Effect, SessionEvent, StreamingSession};

/// The socket side of a session.
pub trait Transport {
    fn send(&self, text: &str) -> Result<(), StoryError>;
    /// True while the connection is still connecting or open.
    fn is_active(&self) -> bool;
    fn close(&mut self);
}

/// Owns a session together with its socket.
///
/// The socket is released exactly once, either when the session reaches a
/// terminal phase or when the driver is dropped (the hosting view went away).
/// After release every event is ignored.
pub struct SessionDriver<T: Transport> {
    session: StreamingSession,
    transport: T,
    released: bool,
}

impl<T: Transport> SessionDriver<T> {
    pub fn new(session: StreamingSession, transport: T) -> Self {
        SessionDriver {
            session,
            transport,
            released: false,
        }
    }

    pub fn session(&self) -> &StreamingSession {
        &self.session
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Feeds one socket event through the session, performs the socket-facing
    /// effects itself and hands the rest back to the view.
    pub fn dispatch(&mut self, event: SessionEvent) -> Vec<Effect> {
        if self.released {
            return Vec::new();
        }

        let mut pending: VecDeque<Effect> = self.session.apply(event).into();
        let mut for_view = Vec::with_capacity(pending.len());

        while let Some(effect) = pending.pop_front() {
            match effect {
                Effect::Send(frame) => {
                    if let Err(e) = self.transport.send(&frame) {
                        log::error!("failed to write to story socket: {e}");
                        pending.extend(self.session.apply(SessionEvent::TransportError));
                    }
                }
                Effect::Release => self.release(),
                other => for_view.push(other),
            }
        }

        for_view
    }

    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if self.transport.is_active() {
            log::debug!("closing story socket");
            self.transport.close();
        }
    }
}

impl<T: Transport> Drop for SessionDriver<T> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streaming::session::Phase;
    use crate::types::Topic;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct SocketLog {
        sent: Vec<String>,
        closes: usize,
        active: bool,
        fail_sends: bool,
    }

    struct MockTransport(Rc<RefCell<SocketLog>>);

    impl Transport for MockTransport {
        fn send(&self, text: &str) -> Result<(), StoryError> {
            let mut log = self.0.borrow_mut();
            if log.fail_sends {
                return Err(StoryError::Transport("socket is closing".to_string()));
            }
            log.sent.push(text.to_string());
            Ok(())
        }

        fn is_active(&self) -> bool {
            self.0.borrow().active
        }

        fn close(&mut self) {
            let mut log = self.0.borrow_mut();
            log.closes += 1;
            log.active = false;
        }
    }

    fn driver() -> (SessionDriver<MockTransport>, Rc<RefCell<SocketLog>>) {
        let log = Rc::new(RefCell::new(SocketLog {
            active: true,
            ..SocketLog::default()
        }));
        let session = StreamingSession::new(Topic::parse("owls").unwrap());
        (SessionDriver::new(session, MockTransport(log.clone())), log)
    }

    fn token(text: &str) -> SessionEvent {
        SessionEvent::Received(serde_json::json!({ "type": "token", "payload": text }).to_string())
    }

    #[test]
    fn test_open_writes_topic_frame() {
        let (mut driver, log) = driver();
        let effects = driver.dispatch(SessionEvent::Opened);
        assert_eq!(log.borrow().sent, vec![r#"{"topic":"owls"}"#.to_string()]);
        assert_eq!(effects, vec![Effect::Entered(Phase::Streaming)]);
    }

    #[test]
    fn test_unmount_while_streaming_closes_once() {
        let (mut driver, log) = driver();
        driver.dispatch(SessionEvent::Opened);
        driver.dispatch(token("Hoo"));
        drop(driver);
        assert_eq!(log.borrow().closes, 1);
    }

    #[test]
    fn test_no_transitions_after_release() {
        let (mut driver, log) = driver();
        driver.dispatch(SessionEvent::Opened);
        driver.dispatch(token("Hoo"));
        driver.release();
        driver.release();

        assert!(driver.dispatch(token(" hoo")).is_empty());
        assert!(driver.dispatch(SessionEvent::Closed).is_empty());
        assert_eq!(driver.session().text(), "Hoo");
        assert_eq!(driver.session().phase(), &Phase::Streaming);

        drop(driver);
        assert_eq!(log.borrow().closes, 1);
    }

    #[test]
    fn test_completion_releases_socket() {
        let (mut driver, log) = driver();
        driver.dispatch(SessionEvent::Opened);
        let effects = driver.dispatch(SessionEvent::Received(
            r#"{"type":"complete","payload":{"id":9,"title":"Owls","text":"Hoo","questions":[]}}"#
                .to_string(),
        ));
        assert!(driver.is_released());
        assert_eq!(log.borrow().closes, 1);
        assert!(!effects.contains(&Effect::Release));
        assert_eq!(effects.last(), Some(&Effect::Redirect(9)));

        drop(driver);
        assert_eq!(log.borrow().closes, 1);
    }

    #[test]
    fn test_closed_socket_is_not_closed_again() {
        let (mut driver, log) = driver();
        driver.dispatch(SessionEvent::Opened);
        log.borrow_mut().active = false;
        driver.dispatch(SessionEvent::Closed);
        assert!(driver.is_released());
        assert_eq!(log.borrow().closes, 0);
        assert_eq!(driver.session().phase(), &Phase::Failed(StoryError::Connection));
    }

    #[test]
    fn test_failed_send_fails_session() {
        let (mut driver, log) = driver();
        log.borrow_mut().fail_sends = true;
        let effects = driver.dispatch(SessionEvent::Opened);
        assert_eq!(driver.session().phase(), &Phase::Failed(StoryError::Connection));
        assert!(effects.contains(&Effect::Entered(Phase::Failed(StoryError::Connection))));
        assert_eq!(log.borrow().closes, 1);
    }
}
