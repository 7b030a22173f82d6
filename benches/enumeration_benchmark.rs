use criterion::{black_box, criterion_group, criterion_main, Criterion};

use supercell_lattice::config::SYMMETRY_TOLERANCE;
use supercell_lattice::lattice::simple_cubic_lattice;
use supercell_lattice::supercell::{HermiteCounter, SupercellEnumerator};

fn bench_hermite_sweep(c: &mut Criterion) {
    c.bench_function("hermite_counter_det_12", |b| {
        b.iter(|| {
            let mut counter = HermiteCounter::new(black_box(12), 3).unwrap();
            let mut count = 0usize;
            while counter.valid() {
                count += 1;
                counter.advance();
            }
            count
        })
    });
}

fn bench_unique_walk(c: &mut Criterion) {
    let unit = simple_cubic_lattice(1.0).unwrap();
    let enumerator = SupercellEnumerator::new(unit, SYMMETRY_TOLERANCE, 1, 9).unwrap();

    c.bench_function("unique_supercells_to_volume_8", |b| {
        b.iter(|| enumerator.begin().count())
    });
}

criterion_group!(benches, bench_hermite_sweep, bench_unique_walk);
criterion_main!(benches);
