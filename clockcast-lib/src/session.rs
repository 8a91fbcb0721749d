//! Control-loop state for the broadcaster.
//!
//! Graceful shutdown is modelled as explicit transitions
//! (Running → Draining → Stopped) instead of relying on signal delivery
//! timing: a terminate request yields exactly one sentinel send, after
//! which the session refuses further work.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Draining,
    Stopped,
}

/// External stimulus observed by the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Tick,
    Terminate,
}

/// What the control loop should do in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendAction {
    /// Build and send a live time frame.
    Time,
    /// Build and send the session-end sentinel, then stop.
    Sentinel,
    Nothing,
}

#[derive(Debug)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_stopped(&self) -> bool {
        self.state == SessionState::Stopped
    }

    /// Advance the machine with an observed event.
    pub fn handle(&mut self, event: SessionEvent) -> SendAction {
        match (self.state, event) {
            (SessionState::Running, SessionEvent::Tick) => SendAction::Time,
            (SessionState::Running, SessionEvent::Terminate) => {
                self.state = SessionState::Draining;
                SendAction::Sentinel
            }
            // Draining and Stopped ignore everything further.
            _ => SendAction::Nothing,
        }
    }

    /// Mark the sentinel send as finished (success or logged failure).
    pub fn sentinel_sent(&mut self) {
        if self.state == SessionState::Draining {
            self.state = SessionState::Stopped;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
