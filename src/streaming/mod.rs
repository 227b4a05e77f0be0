//! Live story generation over a WebSocket.
//!
//! [`session`] holds the pure state machine, [`driver`] ties it to a
//! [`driver::Transport`] and owns the socket for the session's lifetime, and
//! [`socket`] is the browser WebSocket transport.

pub mod driver;
pub mod frame;
pub mod session;
pub mod socket;

pub use driver::{SessionDriver, Transport};
pub use frame::{FrameError, StreamFrame};
pub use session::{Effect, Phase, SessionEvent, StreamingSession};

use std::time::Duration;

/// How long the completion banner stays up before moving to the finished story.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);
