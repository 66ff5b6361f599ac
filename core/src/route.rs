//! Routes: the ordered step sequences the controller walks.
//!
//! A [`Route`] is one `(role, service)` journey from first screen to last.
//! A [`RoutePlan`] bundles every route plus each role's entry step. Plans
//! are configuration data. The controller consumes them but never defines
//! them; `rumbo-std` ships the standard plans and the manifest loader can
//! produce custom ones.

use ahash::AHashMap;
use serde::Serialize;

use crate::error::PlanError;
use crate::step::{Role, Service, StepId};

/// Ordered, non-empty step sequence for one `(role, service)` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct Route {
    steps: Vec<StepId>,
}

impl Route {
    fn new(steps: Vec<StepId>) -> Self {
        Route { steps }
    }

    pub fn steps(&self) -> &[StepId] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// First step of the journey. `None` never happens for plan-built
    /// routes, which reject empty sequences.
    pub fn first(&self) -> Option<&StepId> {
        self.steps.first()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// The step after `id`, or `None` when `id` is last or off this route.
    pub fn next_after(&self, id: &str) -> Option<&StepId> {
        let position = self.position(id)?;
        self.steps.get(position + 1)
    }

    /// The step before `id`, or `None` when `id` is first or off this route.
    pub fn prev_before(&self, id: &str) -> Option<&StepId> {
        let position = self.position(id)?;
        position.checked_sub(1).and_then(|prev| self.steps.get(prev))
    }
}

/// Entry steps and routes for every `(role, service)` the product serves.
///
/// # Example
///
/// ```rust,ignore
/// let plan = RoutePlan::builder()
///     .entry(Role::Customer, "select_service")
///     .route(Role::Customer, Service::Transport, [
///         "confirm_origin",
///         "confirm_destination",
///         "CUSTOMER_TRANSPORT_OFERTAS",
///     ])
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoutePlan {
    entries: AHashMap<Role, StepId>,
    routes: AHashMap<(Role, Service), Route>,
}

impl RoutePlan {
    pub fn builder() -> RoutePlanBuilder {
        RoutePlanBuilder::new()
    }

    /// The step a role lands on when its flow starts, before any service is
    /// chosen.
    pub fn entry(&self, role: Role) -> Option<&StepId> {
        self.entries.get(&role)
    }

    pub fn route(&self, role: Role, service: Service) -> Option<&Route> {
        self.routes.get(&(role, service))
    }

    /// Services a role has routes for, in declaration-independent order.
    pub fn services(&self, role: Role) -> Vec<Service> {
        Service::ALL
            .into_iter()
            .filter(|service| self.routes.contains_key(&(role, *service)))
            .collect()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

/// Collects entries and routes, validating the whole plan in
/// [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RoutePlanBuilder {
    entries: Vec<(Role, StepId)>,
    routes: Vec<(Role, Service, Vec<StepId>)>,
}

impl RoutePlanBuilder {
    pub fn new() -> Self {
        RoutePlanBuilder::default()
    }

    /// Set the entry step for a role. Later calls override earlier ones.
    pub fn entry(mut self, role: Role, step: impl Into<StepId>) -> Self {
        self.entries.push((role, step.into()));
        self
    }

    pub fn route<I, S>(mut self, role: Role, service: Service, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StepId>,
    {
        self.routes
            .push((role, service, steps.into_iter().map(Into::into).collect()));
        self
    }

    /// Validate and freeze the plan.
    ///
    /// Rejects empty routes, duplicate `(role, service)` declarations, and
    /// roles that have routes but no entry step.
    pub fn build(self) -> Result<RoutePlan, PlanError> {
        let mut entries = AHashMap::new();
        for (role, step) in self.entries {
            entries.insert(role, step);
        }

        let mut routes: AHashMap<(Role, Service), Route> =
            AHashMap::with_capacity(self.routes.len());
        for (role, service, steps) in self.routes {
            if steps.is_empty() {
                return Err(PlanError::EmptyRoute { role, service });
            }
            if routes.insert((role, service), Route::new(steps)).is_some() {
                return Err(PlanError::DuplicateRoute { role, service });
            }
        }

        for (role, _) in routes.keys() {
            if !entries.contains_key(role) {
                return Err(PlanError::MissingEntry { role: *role });
            }
        }

        Ok(RoutePlan { entries, routes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport_plan() -> RoutePlan {
        RoutePlan::builder()
            .entry(Role::Customer, "select_service")
            .route(
                Role::Customer,
                Service::Transport,
                ["confirm_origin", "confirm_destination", "offers"],
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_route_walks_forward_and_back() {
        let plan = transport_plan();
        let route = plan.route(Role::Customer, Service::Transport).unwrap();

        assert_eq!(route.first().unwrap().as_str(), "confirm_origin");
        assert_eq!(
            route.next_after("confirm_origin").unwrap().as_str(),
            "confirm_destination"
        );
        assert_eq!(
            route.prev_before("offers").unwrap().as_str(),
            "confirm_destination"
        );
        // Ends saturate to None.
        assert!(route.next_after("offers").is_none());
        assert!(route.prev_before("confirm_origin").is_none());
        // Off-route ids walk nowhere.
        assert!(route.next_after("somewhere_else").is_none());
    }

    #[test]
    fn test_entry_is_per_role() {
        let plan = transport_plan();
        assert_eq!(plan.entry(Role::Customer).unwrap().as_str(), "select_service");
        assert!(plan.entry(Role::Driver).is_none());
    }

    #[test]
    fn test_services_lists_only_declared_routes() {
        let plan = transport_plan();
        assert_eq!(plan.services(Role::Customer), [Service::Transport]);
        assert!(plan.services(Role::Driver).is_empty());
    }

    #[test]
    fn test_empty_route_is_rejected() {
        let err = RoutePlan::builder()
            .entry(Role::Customer, "idle")
            .route(Role::Customer, Service::Transport, Vec::<&str>::new())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            PlanError::EmptyRoute {
                role: Role::Customer,
                service: Service::Transport
            }
        ));
    }

    #[test]
    fn test_duplicate_route_is_rejected() {
        let err = RoutePlan::builder()
            .entry(Role::Customer, "idle")
            .route(Role::Customer, Service::Transport, ["a"])
            .route(Role::Customer, Service::Transport, ["b"])
            .build()
            .unwrap_err();
        assert!(matches!(err, PlanError::DuplicateRoute { .. }));
    }

    #[test]
    fn test_routes_require_an_entry_step() {
        let err = RoutePlan::builder()
            .route(Role::Driver, Service::Transport, ["driver_home"])
            .build()
            .unwrap_err();
        assert!(matches!(err, PlanError::MissingEntry { role: Role::Driver }));
    }
}
