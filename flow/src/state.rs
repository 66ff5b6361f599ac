//! Session state: one pointer, one persona, one service.

use rumbo_core::{Role, Service, StepId};
use serde::{Deserialize, Serialize};

/// Snapshot of where a session currently stands.
///
/// `current == None` is the implicit idle state: no active step, no sheet.
/// The role is sticky across resets; the service is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowState {
    pub current: Option<StepId>,
    pub role: Role,
    pub service: Option<Service>,
}

impl FlowState {
    pub fn idle(role: Role) -> Self {
        FlowState {
            current: None,
            role,
            service: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }
}
