use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ivrit_core::{translate_str, KeywordTable};

const SNIPPET: &str = "\
מספר מונה = 0;
# לולאה ראשית
בזמןש (מונה < 10) {
    אם (מונה > 5) {
        תדפיס מונה;
    } אחרת {
        תדפיס שלום;
    }
    מונה = מונה + 1;
}
תחזיר מונה;
";

fn bench_translate(c: &mut Criterion) {
    let table = KeywordTable::global();
    let mut group = c.benchmark_group("translate_str");
    for repeat in [1usize, 16, 256] {
        let source = SNIPPET.repeat(repeat);
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &source, |b, src| {
            b.iter(|| translate_str(src, table, '#').unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_translate);
criterion_main!(benches);
