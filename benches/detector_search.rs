use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use isohedral_tiles::factorize_boundary;

const SCENARIOS: &[(&str, &str)] = &[
    ("translation", "rrddrurddrdllldldluullurrruluu"),
    (
        "half_turn",
        "rddrurdruuurdrdrdrdldrddrdllululdddluldluullurrulllllurruuur",
    ),
    (
        "quarter_turn",
        "druuurddrurrddrdlldrrrdlddrdldluldluullurullurulluur",
    ),
    (
        "type_one_reflection",
        "rrrdrdddrurdddddlulddlullldluululuuurururu",
    ),
    (
        "type_two_reflection",
        "ruuurddrrddldrrrdlddddllluuldddlulluuuuluulurrrurd",
    ),
];

fn bench_detectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorize_boundary");
    for (name, word) in SCENARIOS {
        group.bench_with_input(BenchmarkId::from_parameter(name), word, |b, word| {
            b.iter(|| factorize_boundary(word).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_detectors);
criterion_main!(benches);
