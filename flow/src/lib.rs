//! Rumbo Flow - The Booking Flow Controller
//!
//! This crate defines the **runtime** side of Rumbo:
//! - `FlowController`: session state plus transition operations
//! - `FlowState`: the current step / role / service snapshot
//! - `FlowJournal` + `JournalReplay`: recorded sessions, step by step
//! - `SharedFlow`: a clonable handle for composition roots
//!
//! **IMPORTANT**: This layer is Pure Rust - no HTTP, no IO, no Async.
//! Every transition is a synchronous state swap on the calling thread.

pub mod controller;
pub mod journal;
pub mod shared;
pub mod state;

pub mod prelude {
    pub use crate::controller::FlowController;
    pub use crate::journal::{FlowEvent, FlowEventKind, FlowJournal, JournalReplay};
    pub use crate::shared::SharedFlow;
    pub use crate::state::FlowState;
}

pub use controller::FlowController;
pub use journal::{FlowEvent, FlowEventKind, FlowJournal, JournalReplay, ReplayFrame};
pub use shared::SharedFlow;
pub use state::FlowState;
