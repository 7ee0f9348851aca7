use criterion::{black_box, criterion_group, criterion_main, Criterion};
use souper_draft::cards::loader;
use souper_draft::core::DraftRng;
use souper_draft::draft::{chemistry, DraftSession};

const CARDS: &str = include_str!("../data/cards.txt");

fn scoring(c: &mut Criterion) {
    let catalog = loader::parse_catalog(CARDS).expect("bundled catalog should parse");

    c.bench_function("parse_catalog", |b| {
        b.iter(|| loader::parse_catalog(black_box(CARDS)))
    });

    c.bench_function("full_draft", |b| {
        let mut rng = DraftRng::new(42);
        b.iter(|| {
            let mut session = DraftSession::new();
            while !session.finished_draft() {
                session.start_round(&catalog, &mut rng).expect("pool large enough");
                session.pick(0).expect("slot 0 exists");
                session.pick(0).expect("slot 0 is held");
            }
            (session.total_rating(), session.total_chemistry())
        })
    });

    let draft: Vec<_> = catalog.iter().take(5).map(|c| (**c).clone()).collect();
    c.bench_function("chemistry", |b| b.iter(|| chemistry(black_box(&draft), 5)));
}

criterion_group!(benches, scoring);
criterion_main!(benches);
