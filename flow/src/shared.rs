//! Shared handle for hosts that hand one store to many consumers.
//!
//! The controller itself is single-writer by design: the UI runtime
//! serializes event handling, so no locking happens inside it. The handle
//! exists for composition roots that want to clone one reference into
//! several components.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::controller::FlowController;

/// Cheaply clonable handle to a single [`FlowController`].
///
/// # Example
///
/// ```rust,ignore
/// let flow = SharedFlow::new(FlowController::new(catalog, plan, viewport));
///
/// let handle = flow.clone(); // hand this to a component
/// handle.write().start(Role::Customer);
/// let snaps = handle.read().view().snap_points.clone();
/// ```
#[derive(Debug, Clone)]
pub struct SharedFlow {
    inner: Arc<RwLock<FlowController>>,
}

impl SharedFlow {
    pub fn new(controller: FlowController) -> Self {
        SharedFlow {
            inner: Arc::new(RwLock::new(controller)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, FlowController> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, FlowController> {
        self.inner.write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rumbo_core::{Role, RoutePlan, StepCatalog, Viewport};

    #[test]
    fn test_clones_observe_the_same_session() {
        let catalog = StepCatalog::builder().build().unwrap();
        let plan = RoutePlan::builder()
            .entry(Role::Customer, "home")
            .build()
            .unwrap();
        let flow = SharedFlow::new(FlowController::new(
            catalog,
            plan,
            Viewport::new(390.0, 844.0).unwrap(),
        ));

        let handle = flow.clone();
        handle.write().start(Role::Customer);

        assert_eq!(
            flow.read().current_step().map(|step| step.as_str().to_string()),
            Some("home".to_string())
        );
        assert_eq!(flow.read().session_id(), handle.read().session_id());
    }
}
