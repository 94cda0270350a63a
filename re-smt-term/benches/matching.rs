use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use re_smt_term::{hir::Matcher, re::Re};

fn any() -> Re {
    Re::union(Re::range('\0', '\t'), Re::range('\u{b}', '\u{ff}'))
}

pub fn criterion_benchmark(c: &mut Criterion) {
    // .*[0-9]{2,4}px.*
    let re = Re::concat_all(vec![
        Re::star(any()),
        Re::repeat(Re::range('0', '9'), 2, 4),
        Re::literal("px"),
        Re::star(any()),
    ]);
    let haystack = "width: 1280px; height: auto";
    assert!(re.is_match(haystack));
    c.bench_function("is_match_derivative", |b| {
        b.iter(|| re.is_match(black_box(haystack)))
    });

    let matcher = Matcher::new(&re).unwrap();
    assert!(matcher.is_match(haystack));
    c.bench_function("is_match_hir", |b| {
        b.iter(|| matcher.is_match(black_box(haystack)))
    });

    c.bench_function("simplify", |b| b.iter(|| black_box(&re).simplify()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
