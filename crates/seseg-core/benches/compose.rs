//! Composition throughput for typical and pathological class value trees.

use criterion::{criterion_group, criterion_main, Criterion};
use seseg_core::{class_map, compose_json, seseg, ClassValue};
use std::hint::black_box;

/// A component-sized input: a base class, a handful of conditional flags,
/// and a nested `className` group.
fn component_classes() -> Vec<ClassValue> {
    vec![
        "btn".into(),
        ClassValue::from(class_map! {
            "btn-primary" => true,
            "btn-disabled" => false,
            "btn-loading" => 0,
            "className" => vec!["rounded", "shadow-sm"],
        }),
        vec![ClassValue::Absent, "px-4".into(), vec!["py-2"].into()].into(),
    ]
}

fn deep_sequence(depth: usize) -> ClassValue {
    let mut value = ClassValue::from("leaf");
    for _ in 0..depth {
        value = ClassValue::Sequence(vec![value, "x".into()]);
    }
    value
}

fn bench_compose(c: &mut Criterion) {
    let component = component_classes();
    c.bench_function("compose_component", |b| {
        b.iter(|| seseg(black_box(&component)))
    });

    let wide: Vec<ClassValue> = (0..500).map(|i| ClassValue::from(format!("c{i}"))).collect();
    c.bench_function("compose_wide_500", |b| b.iter(|| seseg(black_box(&wide))));

    let deep = [deep_sequence(200)];
    c.bench_function("compose_deep_200", |b| b.iter(|| seseg(black_box(&deep))));

    let json = r#"["btn", {"btn-primary": true, "btn-disabled": false, "className": ["rounded", "shadow-sm"]}, [null, "px-4", ["py-2"]]]"#;
    c.bench_function("compose_json_component", |b| {
        b.iter(|| compose_json(black_box(json)))
    });
}

criterion_group!(benches, bench_compose);
criterion_main!(benches);
