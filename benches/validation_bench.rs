use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phoneintel::{FixedJitter, IntelligenceAggregator, PHONE_VALIDATOR};

use phonenumber::{self as rlp, Mode};

fn setup_numbers() -> Vec<&'static str> {
    vec![
        "+1 650 253 0000",
        "+44 20 8765 4321",
        "+44 7400 123456",
        "+41 44 668 18 00",
        "+49 1512 3456789",
        "+81 90 1234 5678",
        "not a phone number",
        "12345",
    ]
}

fn validation_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();

    let mut group = c.benchmark_group("Validation");

    group.bench_function("phoneintel: validate", |b| {
        b.iter(|| {
            for number in &numbers {
                PHONE_VALIDATOR.validate(black_box(number));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse + format", |b| {
        b.iter(|| {
            for number in &numbers {
                if let Ok(parsed) = rlp::parse(None, black_box(number)) {
                    if rlp::is_valid(&parsed) {
                        black_box(parsed.format().mode(Mode::International).to_string());
                        black_box(parsed.format().mode(Mode::National).to_string());
                    }
                }
            }
        })
    });
    group.finish();
}

fn aggregation_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let aggregator = IntelligenceAggregator::default().with_jitter(FixedJitter::zero());
    let numbers = setup_numbers();
    let (aggregator, numbers) = (&aggregator, &numbers);

    c.bench_function("phoneintel: offline get_intelligence", |b| {
        b.to_async(&runtime).iter(|| async move {
            for number in numbers {
                black_box(aggregator.get_intelligence(black_box(number)).await);
            }
        })
    });
}

criterion_group!(benches, validation_benchmark, aggregation_benchmark);
criterion_main!(benches);
