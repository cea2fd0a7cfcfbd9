//! Feeding a session from an event channel.
//!
//! The session itself is synchronous. [`run`] waits for whichever comes
//! first, the next input event or the pending display revert, and handles it
//! to completion before waiting again.

use flume::Receiver;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

use crate::calculator::{DisplaySurface, Session};
use crate::input::InputEvent;

/// Drive `session` until every sender of `events` is dropped.
///
/// Returns the session with any pending revert applied.
pub async fn run<D: DisplaySurface>(
    mut session: Session<D>,
    events: Receiver<InputEvent>,
) -> Session<D> {
    loop {
        let deadline = session.transient_deadline();
        let wake = deadline.map(Instant::from_std).unwrap_or_else(Instant::now);

        tokio::select! {
            event = events.recv_async() => match event {
                Ok(event) => session.handle(event),
                Err(_) => break,
            },
            _ = sleep_until(wake), if deadline.is_some() => {
                session.revert_if_due(std::time::Instant::now());
            }
        }
    }

    debug!("input closed");
    session.flush_transient();
    session
}
