use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sigmoid_nn::{
    matrix::Matrix2,
    neural::{config::NeuralNetConfig, NeuralNet},
};

fn and_gate() -> (Matrix2<f64>, Matrix2<f64>) {
    (
        Matrix2::from_array([[0, 0], [0, 1], [1, 0], [1, 1]]).into(),
        Matrix2::from_array([[0], [0], [0], [1]]).into(),
    )
}

/// `samples` points on a grid in [0, 1)^2 labelled by which side of x = y they fall.
fn diagonal(samples: usize) -> (Matrix2<f64>, Matrix2<f64>) {
    let side = (samples as f64).sqrt().ceil() as usize;
    let inputs = Matrix2::from_fn(samples, 2, |row, col| {
        let cell = if col == 0 { row % side } else { row / side };
        cell as f64 / side as f64
    });
    let labels = Matrix2::from_fn(samples, 2, |row, col| {
        let above = inputs[(row, 1)] > inputs[(row, 0)];
        ((col == 1) == above) as u8 as f64
    });
    (inputs, labels)
}

fn train(config: NeuralNetConfig, inputs: &Matrix2<f64>, labels: &Matrix2<f64>) {
    let mut net = NeuralNet::new(config);
    assert_eq!(Ok(()), net.train(inputs, labels));
}

fn bench_forward(c: &mut Criterion) {
    let (inputs, labels) = and_gate();

    let mut small = NeuralNet::new(NeuralNetConfig::new(2, 1, 2, 0, 0.5).unwrap());
    small.train(&inputs, &labels).unwrap();

    let mut medium = NeuralNet::new(NeuralNetConfig::new(2, 1, 20, 0, 0.5).unwrap());
    medium.train(&inputs, &labels).unwrap();

    let input_small = Matrix2::new(10, 2);
    let input_medium = Matrix2::new(1_000, 2);

    c.bench_function("predict small 10 inputs", |b| {
        b.iter(|| black_box(&small).predict(black_box(&input_small)))
    });
    c.bench_function("predict small 1,000 inputs", |b| {
        b.iter(|| black_box(&small).predict(black_box(&input_medium)))
    });

    c.bench_function("predict medium 10 inputs", |b| {
        b.iter(|| black_box(&medium).predict(black_box(&input_small)))
    });
    c.bench_function("predict medium 1,000 inputs", |b| {
        b.iter(|| black_box(&medium).predict(black_box(&input_medium)))
    });
}

fn bench_tiny(c: &mut Criterion) {
    let (inputs, labels) = and_gate();

    c.bench_function("tiny 10 epochs", |b| {
        b.iter(|| {
            let config = NeuralNetConfig::new(2, 1, 2, black_box(10), 0.5).unwrap();
            train(config, &inputs, &labels)
        })
    });
    c.bench_function("tiny 2,000 epochs", |b| {
        b.iter(|| {
            let config = NeuralNetConfig::new(2, 1, 2, black_box(2_000), 0.5).unwrap();
            train(config, &inputs, &labels)
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let (inputs, labels) = diagonal(400);

    c.bench_function("400 samples 10 epochs", |b| {
        b.iter(|| {
            let config = NeuralNetConfig::new(2, 2, 10, black_box(10), 0.01).unwrap();
            train(config, &inputs, &labels)
        })
    });
    c.bench_function("400 samples 100 epochs", |b| {
        b.iter(|| {
            let config = NeuralNetConfig::new(2, 2, 10, black_box(100), 0.01).unwrap();
            train(config, &inputs, &labels)
        })
    });
}

criterion_group!(benches, bench_forward, bench_tiny, bench_batch);
criterion_main!(benches);
