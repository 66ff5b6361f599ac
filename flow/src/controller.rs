//! The flow controller: an explicit store, not a global.
//!
//! One [`FlowController`] owns the catalog, the route plan, the session
//! state and the derived-view cache. The host constructs it at its
//! composition root and hands it to the view layer; every transition is a
//! synchronous, infallible method call on the calling thread.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut flow = FlowController::new(catalog, plan, viewport);
//! flow.start(Role::Customer);
//! flow.start_service(Service::Transport);
//! flow.next();
//! let view = flow.view(); // memoized StepView for the current step
//! ```

use ahash::AHashMap;
use rumbo_core::{
    FlowManifest, GestureDefaults, Role, Route, RoutePlan, Service, StepCatalog, StepId, StepView,
    Viewport,
};
use uuid::Uuid;

use crate::journal::{FlowEventKind, FlowJournal};
use crate::state::FlowState;

/// Drives which step is active and exposes the derived view for it.
///
/// All transition operations are total: bad inputs saturate or fall back
/// with a `warn!`, they never panic and never return errors.
#[derive(Debug)]
pub struct FlowController {
    catalog: StepCatalog,
    plan: RoutePlan,
    viewport: Viewport,
    state: FlowState,
    session: Option<Uuid>,
    /// Origins recorded by off-route `go_to` jumps; `back()` unwinds these
    /// before walking the route.
    jump_stack: Vec<StepId>,
    gestures: GestureDefaults,
    journal: FlowJournal,
    view_cache: AHashMap<StepId, StepView>,
    closed_view: StepView,
}

impl FlowController {
    pub fn new(catalog: StepCatalog, plan: RoutePlan, viewport: Viewport) -> Self {
        let mut controller = FlowController {
            closed_view: StepView::closed(viewport),
            view_cache: AHashMap::new(),
            catalog,
            plan,
            viewport,
            state: FlowState::idle(Role::Customer),
            session: None,
            jump_stack: Vec::new(),
            gestures: GestureDefaults::all(false),
            journal: FlowJournal::new(),
        };
        controller.rebuild_views();
        controller
    }

    pub fn from_manifest(manifest: FlowManifest, viewport: Viewport) -> Self {
        FlowController::new(manifest.catalog, manifest.plan, viewport)
    }

    // ===== Session lifecycle =====

    /// Open a session for a role and enter its entry step.
    ///
    /// Calling while a session is active restarts: the previous session is
    /// journaled as ended and a fresh session id is issued.
    pub fn start(&mut self, role: Role) {
        if let Some(previous) = self.session.take() {
            tracing::debug!(rumbo.session = %previous, "Restarting: ending previous session");
            self.journal
                .record(FlowEventKind::SessionEnded { session: previous });
        }

        let session = Uuid::new_v4();
        self.session = Some(session);
        self.state = FlowState::idle(role);
        self.jump_stack.clear();
        self.gestures = GestureDefaults::all(false);
        self.journal
            .record(FlowEventKind::SessionStarted { session, role });
        tracing::info!(rumbo.session = %session, rumbo.role = %role, "Flow session started");

        match self.plan.entry(role).cloned() {
            Some(entry) => self.enter(entry),
            None => {
                tracing::warn!(rumbo.role = %role, "No entry step configured for role; staying idle")
            }
        }
    }

    /// Choose a service flow within the active session.
    pub fn start_service(&mut self, service: Service) {
        self.start_service_as(service, self.state.role);
    }

    /// Choose a service flow, optionally switching persona.
    pub fn start_service_as(&mut self, service: Service, role: Role) {
        if self.session.is_none() {
            tracing::warn!(rumbo.service = %service, "start_service() without an active session; call start() first");
            return;
        }
        let Some(route) = self.plan.route(role, service) else {
            tracing::warn!(rumbo.role = %role, rumbo.service = %service, "No route configured; staying put");
            return;
        };
        let Some(entry) = route.first().cloned() else {
            return; // plans reject empty routes
        };

        if role != self.state.role {
            tracing::debug!(from = %self.state.role, to = %role, "Switching role");
        }
        self.state.role = role;
        self.state.service = Some(service);
        self.jump_stack.clear();
        self.journal
            .record(FlowEventKind::ServiceStarted { service });
        tracing::info!(rumbo.role = %role, rumbo.service = %service, "Service flow started");
        self.enter(entry);
    }

    /// Back to idle: clears the step pointer, the service and any jump
    /// origins. Keeps the role and the session.
    pub fn reset(&mut self) {
        if self.session.is_none() {
            tracing::debug!("reset() without an active session; nothing to do");
            return;
        }
        self.clear_flow();
        self.journal.record(FlowEventKind::FlowReset);
        tracing::info!(rumbo.role = %self.state.role, "Flow reset to idle");
    }

    /// End the session: [`reset`](Self::reset) plus dropping the session id.
    pub fn stop(&mut self) {
        let Some(session) = self.session.take() else {
            tracing::warn!("stop() without an active session; ignoring");
            return;
        };
        self.clear_flow();
        self.journal.record(FlowEventKind::SessionEnded { session });
        tracing::info!(rumbo.session = %session, "Flow session ended");
    }

    // ===== Navigation =====

    /// Advance along the active `(role, service)` route. Saturates at the
    /// end: stays put with a `warn!`, never wraps.
    pub fn next(&mut self) {
        let Some(current) = self.state.current.clone() else {
            tracing::warn!("next() called while idle; ignoring");
            return;
        };
        let Some(service) = self.state.service else {
            tracing::warn!(rumbo.step = %current, "next() without an active service; staying put");
            return;
        };
        let role = self.state.role;
        let Some(route) = self.plan.route(role, service) else {
            tracing::warn!(rumbo.role = %role, rumbo.service = %service, "No route configured; staying put");
            return;
        };

        match route.next_after(current.as_str()).cloned() {
            Some(to) => self.enter(to),
            None if route.contains(current.as_str()) => {
                tracing::warn!(rumbo.step = %current, "Already at the end of the route; staying put");
            }
            None => {
                tracing::warn!(rumbo.step = %current, "Step is off the active route; next() has nowhere to go");
            }
        }
    }

    /// Step backwards: unwinds the newest jump origin first, then walks the
    /// route. Saturates at the route start.
    pub fn back(&mut self) {
        let Some(current) = self.state.current.clone() else {
            tracing::warn!("back() called while idle; ignoring");
            return;
        };

        if let Some(origin) = self.jump_stack.pop() {
            tracing::debug!(rumbo.step = %current, back_to = %origin, "Returning to jump origin");
            self.enter(origin);
            return;
        }

        let Some(service) = self.state.service else {
            tracing::warn!(rumbo.step = %current, "back() without an active service; staying put");
            return;
        };
        let role = self.state.role;
        let Some(route) = self.plan.route(role, service) else {
            tracing::warn!(rumbo.role = %role, rumbo.service = %service, "No route configured; staying put");
            return;
        };

        match route.prev_before(current.as_str()).cloned() {
            Some(to) => self.enter(to),
            None if route.contains(current.as_str()) => {
                tracing::warn!(rumbo.step = %current, "Already at the start of the route; staying put");
            }
            None => {
                tracing::warn!(rumbo.step = %current, "Step is off the active route with no recorded origin; staying put");
            }
        }
    }

    /// Jump directly to a step id, on or off the active route.
    ///
    /// Jumping off-route records the current step as an origin so `back()`
    /// can return to it; rejoining the route clears recorded origins.
    pub fn go_to(&mut self, step: impl Into<StepId>) {
        let to = step.into();
        if self.session.is_none() {
            tracing::warn!(rumbo.step = %to, "go_to() without an active session; ignoring");
            return;
        }

        let on_route = self
            .active_route()
            .is_some_and(|route| route.contains(to.as_str()));
        if on_route {
            self.jump_stack.clear();
        } else if let Some(origin) = self.state.current.clone() {
            self.jump_stack.push(origin);
        }
        self.enter(to);
    }

    // ===== Derived views =====

    /// The memoized view for the current step, or the closed view when idle.
    pub fn view(&self) -> &StepView {
        match &self.state.current {
            Some(id) => self.view_of(id),
            None => &self.closed_view,
        }
    }

    /// Swap the projection surface and rebuild the view cache.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.rebuild_views();
        tracing::debug!(
            width = %viewport.width(),
            height = %viewport.height(),
            "Viewport changed; view cache rebuilt"
        );
    }

    // ===== Gesture runtime =====

    /// Current gesture enablement: seeded from the step's defaults on every
    /// transition, then freely toggled by the host.
    pub fn gestures(&self) -> GestureDefaults {
        self.gestures
    }

    pub fn set_scroll_enabled(&mut self, enabled: bool) {
        self.gestures.scroll = enabled;
    }

    pub fn set_handle_panning_enabled(&mut self, enabled: bool) {
        self.gestures.handle_panning = enabled;
    }

    pub fn set_content_panning_enabled(&mut self, enabled: bool) {
        self.gestures.content_panning = enabled;
    }

    // ===== Accessors =====

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn current_step(&self) -> Option<&StepId> {
        self.state.current.as_ref()
    }

    pub fn role(&self) -> Role {
        self.state.role
    }

    pub fn service(&self) -> Option<Service> {
        self.state.service
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    pub fn plan(&self) -> &RoutePlan {
        &self.plan
    }

    pub fn journal(&self) -> &FlowJournal {
        &self.journal
    }

    // ===== Internals =====

    /// The single transition point: every operation that moves the step
    /// pointer funnels through here.
    fn enter(&mut self, to: StepId) {
        if !self.catalog.contains(to.as_str()) {
            tracing::warn!(rumbo.step = %to, "Step is not in the catalog; rendering the fallback sheet");
        }
        let from = self.state.current.take();
        let seeded = self.view_of(&to).gestures;
        self.gestures = seeded;
        tracing::debug!(rumbo.step = %to, from = ?from, "Entered step");
        self.state.current = Some(to.clone());
        self.journal.record(FlowEventKind::StepEntered { from, to });
    }

    fn view_of(&self, id: &StepId) -> &StepView {
        self.view_cache
            .get(id.as_str())
            .unwrap_or(&self.closed_view)
    }

    fn active_route(&self) -> Option<&Route> {
        let service = self.state.service?;
        self.plan.route(self.state.role, service)
    }

    fn clear_flow(&mut self) {
        self.state.current = None;
        self.state.service = None;
        self.jump_stack.clear();
        self.gestures = GestureDefaults::all(false);
    }

    /// The catalog is immutable, so every step's view is derived once here
    /// and again only when the viewport changes.
    fn rebuild_views(&mut self) {
        self.closed_view = StepView::closed(self.viewport);
        self.view_cache = self
            .catalog
            .iter()
            .map(|(id, config)| (id.clone(), StepView::derive(config, self.viewport)))
            .collect();
    }
}
