//! The customer-side step vocabulary, sheet geometry and routes.
//!
//! Step identifiers are the historical ones the mobile clients log and the
//! backend echoes back; keep them verbatim. Classification is authored
//! explicitly per step, never inferred from the identifier.

use rumbo_core::{
    BlurSpec, BlurTint, CatalogBuilder, GradientSpec, Role, RoutePlanBuilder, Service, SheetConfig,
    StepConfig, StepKind, TransitionSpec,
};

/// Step identifiers for the customer persona.
pub mod steps {
    // Shared by every service flow.
    pub const IDLE: &str = "idle";
    pub const SELECT_SERVICE: &str = "select_service";
    pub const CONFIRM_ORIGIN: &str = "confirm_origin";
    pub const CONFIRM_DESTINATION: &str = "confirm_destination";

    // Transport (ride hailing).
    pub const TRANSPORT_OFERTAS: &str = "CUSTOMER_TRANSPORT_OFERTAS";
    pub const TRANSPORT_BUSCANDO_CONDUCTOR: &str = "CUSTOMER_TRANSPORT_BUSCANDO_CONDUCTOR";
    pub const TRANSPORT_CONDUCTOR_EN_CAMINO: &str = "CUSTOMER_TRANSPORT_CONDUCTOR_EN_CAMINO";
    pub const TRANSPORT_VIAJE_EN_CURSO: &str = "CUSTOMER_TRANSPORT_VIAJE_EN_CURSO";
    pub const TRANSPORT_RESUMEN: &str = "CUSTOMER_TRANSPORT_RESUMEN";

    // Delivery.
    pub const DELIVERY_OFERTAS: &str = "CUSTOMER_DELIVERY_OFERTAS";
    pub const DELIVERY_BUSCANDO_CONDUCTOR: &str = "CUSTOMER_DELIVERY_BUSCANDO_CONDUCTOR";
    pub const DELIVERY_CONDUCTOR_EN_CAMINO: &str = "CUSTOMER_DELIVERY_CONDUCTOR_EN_CAMINO";
    pub const DELIVERY_VIAJE_EN_CURSO: &str = "CUSTOMER_DELIVERY_VIAJE_EN_CURSO";
    pub const DELIVERY_RESUMEN: &str = "CUSTOMER_DELIVERY_RESUMEN";

    // Errand ("mandado").
    pub const MANDADO_OFERTAS: &str = "CUSTOMER_MANDADO_OFERTAS";
    pub const MANDADO_BUSCANDO_CONDUCTOR: &str = "CUSTOMER_MANDADO_BUSCANDO_CONDUCTOR";
    pub const MANDADO_CONDUCTOR_EN_CAMINO: &str = "CUSTOMER_MANDADO_CONDUCTOR_EN_CAMINO";
    pub const MANDADO_VIAJE_EN_CURSO: &str = "CUSTOMER_MANDADO_VIAJE_EN_CURSO";
    pub const MANDADO_RESUMEN: &str = "CUSTOMER_MANDADO_RESUMEN";

    // Parcel ("envío").
    pub const ENVIO_OFERTAS: &str = "CUSTOMER_ENVIO_OFERTAS";
    pub const ENVIO_BUSCANDO_CONDUCTOR: &str = "CUSTOMER_ENVIO_BUSCANDO_CONDUCTOR";
    pub const ENVIO_CONDUCTOR_EN_CAMINO: &str = "CUSTOMER_ENVIO_CONDUCTOR_EN_CAMINO";
    pub const ENVIO_VIAJE_EN_CURSO: &str = "CUSTOMER_ENVIO_VIAJE_EN_CURSO";
    pub const ENVIO_RESUMEN: &str = "CUSTOMER_ENVIO_RESUMEN";
}

// ===== Shared geometry =====
//
// The five phases share geometry across services; only the identifiers
// differ.

fn idle() -> StepConfig {
    StepConfig::new(StepKind::Generic, SheetConfig::hidden(), TransitionSpec::none())
}

fn select_service() -> StepConfig {
    StepConfig::new(
        StepKind::Generic,
        SheetConfig::open(140.0, 320.0, 620.0),
        TransitionSpec::slide(200),
    )
}

fn confirmation() -> StepConfig {
    StepConfig::new(
        StepKind::Confirmation,
        SheetConfig::open(120.0, 260.0, 520.0),
        TransitionSpec::fade(180),
    )
}

fn ofertas() -> StepConfig {
    StepConfig::new(
        StepKind::Generic,
        SheetConfig::open(180.0, 420.0, 700.0)
            .with_gradient(GradientSpec::new(["#00000000", "#000000B3"])),
        TransitionSpec::slide(200),
    )
}

fn buscando_conductor() -> StepConfig {
    // Locked while matching runs: fixed height, no handle, no dismissal.
    StepConfig::new(
        StepKind::SearchingDriver,
        SheetConfig::fixed(260.0)
            .no_handle()
            .no_drag()
            .with_blur(BlurSpec::new(45).tinted(BlurTint::Dark)),
        TransitionSpec::fade(180),
    )
}

fn conductor_en_camino() -> StepConfig {
    StepConfig::new(
        StepKind::Tracking,
        SheetConfig::open(160.0, 280.0, 560.0),
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

pub(crate) fn register_steps(builder: CatalogBuilder) -> CatalogBuilder {
    builder
        .step(steps::IDLE, idle())
        .step(steps::SELECT_SERVICE, select_service())
        .step(steps::CONFIRM_ORIGIN, confirmation())
        .step(steps::CONFIRM_DESTINATION, confirmation())
        // Transport
        .step(steps::TRANSPORT_OFERTAS, ofertas())
        .step(steps::TRANSPORT_BUSCANDO_CONDUCTOR, buscando_conductor())
        .step(steps::TRANSPORT_CONDUCTOR_EN_CAMINO, conductor_en_camino())
        .step(steps::TRANSPORT_VIAJE_EN_CURSO, viaje_en_curso())
        .step(steps::TRANSPORT_RESUMEN, resumen())
        // Delivery
        .step(steps::DELIVERY_OFERTAS, ofertas())
        .step(steps::DELIVERY_BUSCANDO_CONDUCTOR, buscando_conductor())
        .step(steps::DELIVERY_CONDUCTOR_EN_CAMINO, conductor_en_camino())
        .step(steps::DELIVERY_VIAJE_EN_CURSO, viaje_en_curso())
        .step(steps::DELIVERY_RESUMEN, resumen())
        // Errand
        .step(steps::MANDADO_OFERTAS, ofertas())
        .step(steps::MANDADO_BUSCANDO_CONDUCTOR, buscando_conductor())
        .step(steps::MANDADO_CONDUCTOR_EN_CAMINO, conductor_en_camino())
        .step(steps::MANDADO_VIAJE_EN_CURSO, viaje_en_curso())
        .step(steps::MANDADO_RESUMEN, resumen())
        // Parcel
        .step(steps::ENVIO_OFERTAS, ofertas())
        .step(steps::ENVIO_BUSCANDO_CONDUCTOR, buscando_conductor())
        .step(steps::ENVIO_CONDUCTOR_EN_CAMINO, conductor_en_camino())
        .step(steps::ENVIO_VIAJE_EN_CURSO, viaje_en_curso())
        .step(steps::ENVIO_RESUMEN, resumen())
}

pub(crate) fn register_routes(plan: RoutePlanBuilder) -> RoutePlanBuilder {
    plan.entry(Role::Customer, steps::SELECT_SERVICE)
        .route(
            Role::Customer,
            Service::Transport,
            [
                steps::CONFIRM_ORIGIN,
                steps::CONFIRM_DESTINATION,
                steps::TRANSPORT_OFERTAS,
                steps::TRANSPORT_BUSCANDO_CONDUCTOR,
                steps::TRANSPORT_CONDUCTOR_EN_CAMINO,
                steps::TRANSPORT_VIAJE_EN_CURSO,
                steps::TRANSPORT_RESUMEN,
            ],
        )
        .route(
            Role::Customer,
            Service::Delivery,
            [
                steps::CONFIRM_ORIGIN,
                steps::CONFIRM_DESTINATION,
                steps::DELIVERY_OFERTAS,
                steps::DELIVERY_BUSCANDO_CONDUCTOR,
                steps::DELIVERY_CONDUCTOR_EN_CAMINO,
                steps::DELIVERY_VIAJE_EN_CURSO,
                steps::DELIVERY_RESUMEN,
            ],
        )
        .route(
            Role::Customer,
            Service::Errand,
            [
                // Errands have no destination leg; the driver shops and
                // returns to the origin.
                steps::CONFIRM_ORIGIN,
                steps::MANDADO_OFERTAS,
                steps::MANDADO_BUSCANDO_CONDUCTOR,
                steps::MANDADO_CONDUCTOR_EN_CAMINO,
                steps::MANDADO_VIAJE_EN_CURSO,
                steps::MANDADO_RESUMEN,
            ],
        )
        .route(
            Role::Customer,
            Service::Parcel,
            [
                steps::CONFIRM_ORIGIN,
                steps::CONFIRM_DESTINATION,
                steps::ENVIO_OFERTAS,
                steps::ENVIO_BUSCANDO_CONDUCTOR,
                steps::ENVIO_CONDUCTOR_EN_CAMINO,
                steps::ENVIO_VIAJE_EN_CURSO,
                steps::ENVIO_RESUMEN,
            ],
        )
}
