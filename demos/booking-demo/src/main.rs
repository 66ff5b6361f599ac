//! booking-demo
//!
//! Walks a customer transport trip and a driver parcel handoff through the
//! flow engine, then replays the recorded journal.

use anyhow::Result;
use rumbo::flow::ReplayFrame;
use rumbo::prelude::*;
use rumbo::std::{customer, driver};

fn main() -> Result<()> {
    rumbo::observe::init_stdout_tracing();

    let viewport = Viewport::new(390.0, 844.0)?;

    customer_trip(viewport)?;
    driver_handoff(viewport)?;

    Ok(())
}

// ============================================================
// Customer: transport
// ============================================================

fn customer_trip(viewport: Viewport) -> Result<()> {
    println!("=== Customer requests a transport trip ===");

    let mut flow = FlowController::new(standard_catalog(), standard_plan(), viewport);
    flow.start(Role::Customer);
    print_step(&flow);

    flow.start_service(Service::Transport);
    print_step(&flow);

    // Walk the whole route; next() saturates at the summary step.
    while flow.current_step().map(StepId::as_str) != Some(customer::steps::TRANSPORT_RESUMEN) {
        flow.next();
        print_step(&flow);
    }

    println!("--- State snapshot ---");
    println!("{}", serde_json::to_string_pretty(flow.state())?);

    flow.stop();
    replay(flow.journal().clone());
    Ok(())
}

// ============================================================
// Driver: parcel handoff
// ============================================================

fn driver_handoff(viewport: Viewport) -> Result<()> {
    println!("=== Driver delivers a parcel ===");

    let mut flow = FlowController::new(standard_catalog(), standard_plan(), viewport);
    flow.start(Role::Driver);
    flow.start_service(Service::Parcel);
    print_step(&flow);

    flow.next(); // offer details
    flow.next(); // heading to pickup
    flow.next(); // trip in progress
    print_step(&flow);

    // The handoff sub-flow lives off the route; back() retraces the jumps.
    flow.go_to(driver::steps::ENTREGA_PAQUETE);
    print_step(&flow);
    flow.go_to(driver::steps::ENTREGA_FIRMA);
    print_step(&flow);

    flow.back();
    flow.back();
    print_step(&flow);

    flow.next(); // trip summary
    print_step(&flow);

    flow.stop();
    Ok(())
}

// ============================================================
// Output helpers
// ============================================================

fn print_step(flow: &FlowController) {
    let step = flow.current_step().map(StepId::as_str).unwrap_or("<idle>");
    let view = flow.view();
    let snaps: Vec<String> = view.snap_points.iter().map(ToString::to_string).collect();
    let mut line = format!(
        "  {step:<34} snaps={snaps:?} index={} {}ms/{}",
        view.index,
        view.motion.duration_ms,
        view.motion.easing.name()
    );
    if view.flags.searching_driver {
        line.push_str("  [searching: gestures locked]");
    }
    println!("{line}");
}

fn replay(journal: FlowJournal) {
    println!("--- Replay: {} events ---", journal.len());
    let mut replay = JournalReplay::new(journal);
    while let Some(ReplayFrame { step, event }) = replay.next_frame() {
        let at = step.as_ref().map(StepId::as_str).unwrap_or("<idle>");
        println!("  {:<28} -> {at}", label(&event.kind));
    }
}

fn label(kind: &FlowEventKind) -> String {
    match kind {
        FlowEventKind::SessionStarted { role, .. } => format!("session_started({role})"),
        FlowEventKind::ServiceStarted { service } => format!("service_started({service})"),
        FlowEventKind::StepEntered { to, .. } => format!("step_entered({to})"),
        FlowEventKind::FlowReset => "flow_reset".to_string(),
        FlowEventKind::SessionEnded { .. } => "session_ended".to_string(),
    }
}
