use criterion::{Criterion, criterion_group, criterion_main};
use markdown_toolbar_engine::{
    Command, CommandEngine, DocumentSession, MarkdownRenderer, MemoryStore,
};
mod common;

fn bench_command_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("commands");
    group.sample_size(10);

    let engine = CommandEngine::default();
    let content = common::generate_markdown_content(100);
    let middle = content.chars().count() / 2;

    group.bench_function("bold_at_caret", |b| {
        b.iter(|| {
            let result = engine.apply(
                std::hint::black_box(&content),
                middle..middle,
                &Command::Bold,
            );
            std::hint::black_box(result)
        });
    });

    group.bench_function("heading_retoggle", |b| {
        b.iter(|| {
            let result = engine.apply(
                std::hint::black_box(&content),
                middle..middle,
                &Command::Heading(3),
            );
            std::hint::black_box(result)
        });
    });

    let lines = common::generate_plain_lines(1000);
    let whole = 0..lines.chars().count();
    group.bench_function("ordered_list_1000_lines", |b| {
        b.iter(|| {
            let result = engine.apply(
                std::hint::black_box(&lines),
                whole.clone(),
                &Command::OrderedList,
            );
            std::hint::black_box(result)
        });
    });

    group.bench_function("session_apply_and_render", |b| {
        let mut session = DocumentSession::new(
            CommandEngine::default(),
            MarkdownRenderer::default(),
            MemoryStore::new(),
        );
        session.replace_all(&content).unwrap();
        b.iter(|| {
            let patch = session.apply_command(&Command::HorizontalRule);
            std::hint::black_box(patch)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_command_operations);
criterion_main!(benches);
