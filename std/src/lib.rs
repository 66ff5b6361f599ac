//! Rumbo Std - Standard Catalogs
//!
//! The step vocabulary and route plans the booking product ships with, for
//! both personas:
//! - `standard_catalog()`: every customer and driver step, validated
//! - `standard_plan()`: entry steps plus per-service routes
//!
//! Hosts with custom flows load a TOML manifest instead; these tables are
//! the built-in defaults and the fixtures everything else is tested over.

use rumbo_core::{RoutePlan, StepCatalog};

pub mod customer;
pub mod driver;
pub mod prelude;

/// The full built-in step catalog for both personas.
pub fn standard_catalog() -> StepCatalog {
    let builder = StepCatalog::builder();
    let builder = customer::register_steps(builder);
    let builder = driver::register_steps(builder);
    builder
        .build()
        .expect("built-in step catalog is statically valid")
}

/// The built-in route plan: customer and driver entries plus one route per
/// `(role, service)` pair.
pub fn standard_plan() -> RoutePlan {
    let builder = RoutePlan::builder();
    let builder = customer::register_routes(builder);
    let builder = driver::register_routes(builder);
    builder
        .build()
        .expect("built-in route plan is statically valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rumbo_core::{Role, Service, StepKind};

    #[test]
    fn test_standard_tables_build() {
        let catalog = standard_catalog();
        let plan = standard_plan();
        assert_eq!(catalog.len(), 31); // 24 customer + 7 driver
        assert_eq!(plan.route_count(), 8); // 4 services x 2 roles
        assert_eq!(plan.services(Role::Customer).len(), 4);
        assert_eq!(plan.services(Role::Driver).len(), 4);
    }

    #[test]
    fn test_idle_is_a_hidden_sheet() {
        let catalog = standard_catalog();
        let config = catalog.get(customer::steps::IDLE);
        assert!(!config.sheet.visible);
    }

    #[test]
    fn test_searching_steps_are_locked_and_tagged() {
        let catalog = standard_catalog();
        for id in [
            customer::steps::TRANSPORT_BUSCANDO_CONDUCTOR,
            customer::steps::DELIVERY_BUSCANDO_CONDUCTOR,
            customer::steps::MANDADO_BUSCANDO_CONDUCTOR,
            customer::steps::ENVIO_BUSCANDO_CONDUCTOR,
        ] {
            let config = catalog.get(id);
            assert_eq!(config.kind, StepKind::SearchingDriver, "{id}");
            assert!(!config.sheet.show_handle, "{id}");
            assert!(!config.sheet.allow_drag, "{id}");
            assert_eq!(config.sheet.min_height, config.sheet.max_height, "{id}");
        }
    }

    #[test]
    fn test_explicit_kinds_agree_with_the_legacy_vocabulary() {
        // The authored tags must match what identifier-classification would
        // have said, so manifest-authored and built-in catalogs agree.
        let catalog = standard_catalog();
        for (id, config) in catalog.iter() {
            let classified = StepKind::classify(id.as_str());
            if classified != StepKind::Generic {
                assert_eq!(config.kind, classified, "{id}");
            }
        }
    }

    #[test]
    fn test_confirmation_steps_are_tagged() {
        let catalog = standard_catalog();
        assert_eq!(
            catalog.get(customer::steps::CONFIRM_ORIGIN).kind,
            StepKind::Confirmation
        );
        assert_eq!(
            catalog.get(customer::steps::CONFIRM_DESTINATION).kind,
            StepKind::Confirmation
        );
    }

    #[test]
    fn test_every_route_step_is_in_the_catalog() {
        let catalog = standard_catalog();
        let plan = standard_plan();
        for role in Role::ALL {
            for service in plan.services(role) {
                let route = plan.route(role, service).unwrap();
                for step in route.steps() {
                    assert!(catalog.contains(step.as_str()), "{role}/{service}: {step}");
                }
            }
        }
    }

    #[test]
    fn test_handoff_steps_stay_off_the_routes() {
        let plan = standard_plan();
        for service in plan.services(Role::Driver) {
            let route = plan.route(Role::Driver, service).unwrap();
            assert!(!route.contains(driver::steps::ENTREGA_PAQUETE));
            assert!(!route.contains(driver::steps::ENTREGA_FIRMA));
        }
    }

    #[test]
    fn test_signature_step_keeps_its_handle() {
        let catalog = standard_catalog();
        let config = catalog.get(driver::steps::ENTREGA_FIRMA);
        assert!(config.sheet.show_handle);
        assert!(!config.sheet.allow_drag);
    }

    #[test]
    fn test_errand_route_skips_the_destination_leg() {
        let plan = standard_plan();
        let route = plan.route(Role::Customer, Service::Errand).unwrap();
        assert!(!route.contains(customer::steps::CONFIRM_DESTINATION));
        assert_eq!(
            route.first().unwrap().as_str(),
            customer::steps::CONFIRM_ORIGIN
        );
    }
}
