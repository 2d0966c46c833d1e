//! Assembly benchmarks.

use blueprint_codegen::assemble;
use blueprint_core::{default_config, ComponentKind, ComponentNode, Shorthand};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn wide_tree(cards: usize) -> Vec<ComponentNode> {
    let mut list = ComponentNode::new("list", ComponentKind::ScrollableContainer);
    for i in 0..cards {
        list = list.with_child(
            ComponentNode::new(format!("card-{}", i), ComponentKind::Card)
                .with_shorthand(Shorthand::Padding, 16)
                .with_style("borderRadius", 8)
                .with_child(ComponentNode::new(format!("title-{}", i), ComponentKind::Text).with_text("Task"))
                .with_child(ComponentNode::new(format!("done-{}", i), ComponentKind::Button).with_text("Done")),
        );
    }
    vec![list]
}

fn assemble_small(c: &mut Criterion) {
    let tree = wide_tree(5);
    let config = default_config();
    c.bench_function("assemble_small", |b| {
        b.iter(|| assemble(black_box(&tree), black_box(&config)))
    });
}

fn assemble_large(c: &mut Criterion) {
    let tree = wide_tree(500);
    let config = default_config();
    c.bench_function("assemble_large", |b| {
        b.iter(|| assemble(black_box(&tree), black_box(&config)))
    });
}

criterion_group!(benches, assemble_small, assemble_large);
criterion_main!(benches);
