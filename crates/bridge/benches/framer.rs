use criterion::{black_box, criterion_group, criterion_main, Criterion};

use remora_bridge::{FramingMode, LineFramer};

pub fn benchmark_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("framer_write");

    for mode in [FramingMode::WholeBuffer, FramingMode::PerLine] {
        for (name, chunks) in FRAMER_OUTPUTS {
            group.bench_function(format!("{mode}/{name}"), |b| {
                b.iter(|| {
                    let mut units = 0usize;
                    let mut framer = LineFramer::new(mode, |unit: String| {
                        units += black_box(unit).len();
                    });

                    for chunk in chunks {
                        framer.write(black_box(chunk));
                    }

                    drop(framer);
                    units
                })
            });
        }
    }
}

criterion_group!(benches, benchmark_write);
criterion_main!(benches);

const FRAMER_OUTPUTS: [(&str, &[&str]); 3] = [
    ("bestmove", &["bestmove e2e4 ponder e7e5\n"]),
    (
        "handshake",
        &["id name remora\n", "id author remora developers\n", "uciok\n"],
    ),
    (
        "info_chunked",
        &[
            "info depth 12 ",
            "seldepth 18 ",
            "score cp 34 ",
            "nodes 1048576 ",
            "pv e2e4 e7e5 g1f3 b8c6\ninfo depth 13",
            " seldepth 20\n",
        ],
    ),
];
