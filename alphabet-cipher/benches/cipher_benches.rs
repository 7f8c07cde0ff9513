use alphabet_cipher::{AlphabetCipher, CipherTable};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_cipher(c: &mut Criterion) {
    let mut group = c.benchmark_group("alphabet_cipher");

    group.bench_function("build_table", |b| {
        b.iter(|| black_box(CipherTable::new()));
    });

    let message = "meetmeontuesdayeveningatseven".repeat(32);
    group.bench_function("encode_paragraph", |b| {
        b.iter(|| {
            let out = AlphabetCipher::encode(black_box("vigilance"), black_box(&message))
                .expect("keyword is non-empty");
            black_box(out);
        });
    });

    let ciphertext =
        AlphabetCipher::encode("vigilance", &message).expect("keyword is non-empty");
    group.bench_function("decipher_paragraph", |b| {
        b.iter(|| {
            let keyword = AlphabetCipher::decipher(black_box(&ciphertext), black_box(&message))
                .expect("inputs have equal length");
            black_box(keyword);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cipher);
criterion_main!(benches);
