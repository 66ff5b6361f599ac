//! The driver-side step vocabulary, sheet geometry and routes.
//!
//! Driver steps are shared across services: the same availability/offer/
//! pickup/trip/summary spine drives every job type. The delivery handoff
//! steps (`DRIVER_ENTREGA_*`) are deliberately kept off the routes; the host
//! reaches them with `go_to` and `back()` returns to wherever the driver
//! jumped from.

use rumbo_core::{
    CatalogBuilder, Role, RoutePlanBuilder, Service, SheetConfig, StepConfig, StepKind,
    TransitionSpec,
};

/// Step identifiers for the driver persona.
pub mod steps {
    pub const DISPONIBLE: &str = "DRIVER_DISPONIBLE";
    pub const OFERTA_DETALLE: &str = "DRIVER_OFERTA_DETALLE";
    pub const EN_CAMINO_RECOGIDA: &str = "DRIVER_EN_CAMINO_RECOGIDA";
    pub const VIAJE_EN_CURSO: &str = "DRIVER_VIAJE_EN_CURSO";
    pub const RESUMEN: &str = "DRIVER_RESUMEN";

    // Delivery handoff sub-flow, reached via go_to.
    pub const ENTREGA_PAQUETE: &str = "DRIVER_ENTREGA_PAQUETE";
    pub const ENTREGA_FIRMA: &str = "DRIVER_ENTREGA_FIRMA";
}

fn disponible() -> StepConfig {
    StepConfig::new(
        StepKind::Generic,
        SheetConfig::open(140.0, 260.0, 600.0),
        TransitionSpec::slide(200),
    )
}

fn oferta_detalle() -> StepConfig {
    StepConfig::new(
        StepKind::Generic,
        SheetConfig::open(260.0, 420.0, 720.0),
        TransitionSpec::slide(200),
    )
}

fn en_camino_recogida() -> StepConfig {
    StepConfig::new(
        StepKind::Tracking,
        SheetConfig::open(140.0, 260.0, 560.0),
        TransitionSpec::slide(200),
    )
}

fn viaje_en_curso() -> StepConfig {
    StepConfig::new(
        StepKind::Tracking,
        SheetConfig::open(120.0, 220.0, 560.0),
        TransitionSpec::slide(200),
    )
}

fn resumen() -> StepConfig {
    StepConfig::new(
        StepKind::Summary,
        SheetConfig::open(320.0, 480.0, 720.0),
        TransitionSpec::fade(220),
    )
}

fn entrega_paquete() -> StepConfig {
    StepConfig::new(
        StepKind::Generic,
        SheetConfig::open(200.0, 380.0, 680.0),
        TransitionSpec::slide(200),
    )
}

fn entrega_firma() -> StepConfig {
    // Signature capture: the sheet must not move under the pen, but the
    // handle stays visible so the step still reads as a sheet.
    StepConfig::new(
        StepKind::Generic,
        SheetConfig::fixed(520.0).no_drag(),
        TransitionSpec::fade(180),
    )
}

pub(crate) fn register_steps(builder: CatalogBuilder) -> CatalogBuilder {
    builder
        .step(steps::DISPONIBLE, disponible())
        .step(steps::OFERTA_DETALLE, oferta_detalle())
        .step(steps::EN_CAMINO_RECOGIDA, en_camino_recogida())
        .step(steps::VIAJE_EN_CURSO, viaje_en_curso())
        .step(steps::RESUMEN, resumen())
        .step(steps::ENTREGA_PAQUETE, entrega_paquete())
        .step(steps::ENTREGA_FIRMA, entrega_firma())
}

pub(crate) fn register_routes(mut plan: RoutePlanBuilder) -> RoutePlanBuilder {
    plan = plan.entry(Role::Driver, steps::DISPONIBLE);
    for service in Service::ALL {
        plan = plan.route(
            Role::Driver,
            service,
            [
                steps::DISPONIBLE,
                steps::OFERTA_DETALLE,
                steps::EN_CAMINO_RECOGIDA,
                steps::VIAJE_EN_CURSO,
                steps::RESUMEN,
            ],
        );
    }
    plan
}
