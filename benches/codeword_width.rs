use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_pdf417::{CandidateAnchors, Point, max_codeword_width, min_codeword_width};

fn resolved_octet() -> CandidateAnchors {
    std::array::from_fn(|i| Some(Point::new(17.3 * i as f32, 42.0)))
}

fn sparse_octet() -> CandidateAnchors {
    let mut anchors = resolved_octet();
    anchors[0] = None;
    anchors[3] = None;
    anchors[6] = None;
    anchors
}

fn bench_width_resolved(c: &mut Criterion) {
    let anchors = resolved_octet();
    c.bench_function("codeword_width_resolved", |b| {
        b.iter(|| {
            (
                min_codeword_width(black_box(&anchors)),
                max_codeword_width(black_box(&anchors)),
            )
        })
    });
}

fn bench_width_sparse(c: &mut Criterion) {
    let anchors = sparse_octet();
    c.bench_function("codeword_width_sparse", |b| {
        b.iter(|| {
            (
                min_codeword_width(black_box(&anchors)),
                max_codeword_width(black_box(&anchors)),
            )
        })
    });
}

criterion_group!(benches, bench_width_resolved, bench_width_sparse);
criterion_main!(benches);
