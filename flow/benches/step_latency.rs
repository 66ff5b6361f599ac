//! Hot-path benchmarks: view derivation and controller transitions.
//!
//! The view layer re-reads these on every gesture frame, so derivation and
//! the memoized lookup are the numbers that matter.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rumbo_core::{Role, Service, StepView, Viewport};
use rumbo_flow::FlowController;
use rumbo_std::{customer, standard_catalog, standard_plan};

fn view_derivation(c: &mut Criterion) {
    let catalog = standard_catalog();
    let viewport = Viewport::new(390.0, 844.0).unwrap();
    let config = catalog.get(customer::steps::TRANSPORT_OFERTAS);

    c.bench_function("derive_step_view", |b| {
        b.iter(|| StepView::derive(black_box(config), black_box(viewport)))
    });

    c.bench_function("derive_full_catalog", |b| {
        b.iter(|| {
            for (_, config) in catalog.iter() {
                black_box(StepView::derive(config, viewport));
            }
        })
    });
}

fn controller_transitions(c: &mut Criterion) {
    let viewport = Viewport::new(390.0, 844.0).unwrap();

    c.bench_function("controller_build", |b| {
        b.iter(|| FlowController::new(standard_catalog(), standard_plan(), black_box(viewport)))
    });

    c.bench_function("route_walk", |b| {
        b.iter_batched(
            || {
                let mut flow = FlowController::new(standard_catalog(), standard_plan(), viewport);
                flow.start(Role::Customer);
                flow
            },
            |mut flow| {
                flow.start_service(Service::Transport);
                for _ in 0..6 {
                    flow.next();
                }
                black_box(flow.view().index);
                flow
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("memoized_view", |b| {
        let mut flow = FlowController::new(standard_catalog(), standard_plan(), viewport);
        flow.start(Role::Customer);
        flow.start_service(Service::Transport);
        b.iter(|| black_box(flow.view().snap_points.len()))
    });
}

criterion_group!(benches, view_derivation, controller_transitions);
criterion_main!(benches);
