//! Session journal: what happened, in order, with timestamps.
//!
//! Every controller transition appends one [`FlowEvent`]. The journal is the
//! raw material for bug reports ("attach the session journal") and for
//! [`JournalReplay`], which re-walks a recorded session one frame at a time.

use chrono::{DateTime, Utc};
use rumbo_core::{Role, Service, StepId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A discrete event in a booking session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: FlowEventKind,
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FlowEventKind {
    /// A new session opened for a role.
    SessionStarted { session: Uuid, role: Role },
    /// A service flow was chosen within the session.
    ServiceStarted { service: Service },
    /// The step pointer moved.
    StepEntered {
        #[serde(skip_serializing_if = "Option::is_none")]
        from: Option<StepId>,
        to: StepId,
    },
    /// Back to idle without ending the session.
    FlowReset,
    /// The session closed.
    SessionEnded { session: Uuid },
}

/// Append-only record of one or more sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowJournal {
    events: Vec<FlowEvent>,
}

impl FlowJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a kind stamped with the current wall-clock time.
    pub fn record(&mut self, kind: FlowEventKind) {
        self.events.push(FlowEvent {
            at: Utc::now(),
            kind,
        });
    }

    pub fn push(&mut self, event: FlowEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[FlowEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Serialize the whole journal, oldest first.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(&self.events)
    }
}

/// One replayed moment: the event plus the step pointer after it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayFrame {
    pub step: Option<StepId>,
    pub event: FlowEvent,
}

/// Re-walks a journal, reconstructing the step pointer frame by frame.
///
/// The replay is a virtual cursor: nothing is derived or rendered, it just
/// answers "where was the user after event N".
///
/// # Example
///
/// ```rust,ignore
/// let mut replay = JournalReplay::new(controller.journal().clone());
/// while let Some(frame) = replay.next_frame() {
///     println!("{:?} -> {:?}", frame.event.kind, frame.step);
/// }
/// ```
pub struct JournalReplay {
    journal: FlowJournal,
    cursor: usize,
    step: Option<StepId>,
}

impl JournalReplay {
    pub fn new(journal: FlowJournal) -> Self {
        JournalReplay {
            journal,
            cursor: 0,
            step: None,
        }
    }

    /// Advance the replay by one event. Returns `None` when exhausted.
    pub fn next_frame(&mut self) -> Option<ReplayFrame> {
        let event = self.journal.events().get(self.cursor)?.clone();
        self.cursor += 1;

        match &event.kind {
            FlowEventKind::StepEntered { to, .. } => self.step = Some(to.clone()),
            FlowEventKind::SessionStarted { .. }
            | FlowEventKind::FlowReset
            | FlowEventKind::SessionEnded { .. } => self.step = None,
            FlowEventKind::ServiceStarted { .. } => {}
        }

        Some(ReplayFrame {
            step: self.step.clone(),
            event,
        })
    }

    /// Back to the first frame.
    pub fn rewind(&mut self) {
        self.cursor = 0;
        self.step = None;
    }
}
