use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fs::File;
use xfill::{solve, Puzzle, WordList};

fn load_words() -> WordList {
    let file = File::open("testdata/words.json").unwrap();
    let words: Vec<String> = serde_json::from_reader(file).unwrap();
    WordList::new(words)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let words = load_words();
    let puzzle = Puzzle::new(vec![vec![true; 3]; 3]).unwrap();

    c.bench_function("fill 3x3", |b| {
        b.iter(|| solve(black_box(&puzzle), black_box(&words)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
