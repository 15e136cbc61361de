use std::hint::black_box;

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use portan::library::Frequency;
use portan::library::MeanVarianceOptimiser;
use portan::library::OsqpSolver;
use portan::library::PriceMatrix;
use portan::library::Rate;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use rand_distr::Distribution;
use rand_distr::Normal;

const DAYS: usize = 252;

/// Geometric Brownian paths, one row per instrument.
fn prices(instruments: usize, days: usize) -> PriceMatrix {
  let mut rng = StdRng::seed_from_u64(42);
  let rows = (0..instruments)
    .map(|_| {
      let drift = rng.gen_range(0.0..0.001);
      let volatility = rng.gen_range(0.005..0.03);
      let normal = Normal::new(drift, volatility).unwrap();
      let mut price = 100.0;
      (0..days)
        .map(|_| {
          price *= f64::exp(normal.sample(&mut rng));
          price
        })
        .collect::<Vec<f64>>()
    })
    .collect::<Vec<_>>();
  PriceMatrix::from_floats(rows).unwrap()
}

fn bench_statistics(c: &mut Criterion) {
  let mut group = c.benchmark_group("Statistics");

  for &n in &[2, 10, 50] {
    let prices = prices(n, DAYS);
    group.bench_with_input(BenchmarkId::new("growth", n), &prices, |b, prices| {
      b.iter(|| black_box(prices.growth().unwrap()));
    });

    let rates = prices.growth().unwrap();
    group.bench_with_input(BenchmarkId::new("covariances", n), &rates, |b, rates| {
      b.iter(|| black_box(rates.covariances().unwrap()));
    });
    group.bench_with_input(BenchmarkId::new("correlations", n), &rates, |b, rates| {
      b.iter(|| black_box(rates.correlations().unwrap()));
    });
  }

  group.finish();
}

fn bench_optimise(c: &mut Criterion) {
  let mut group = c.benchmark_group("MVO_optimise");
  let minimum = Rate::new(0.0)
    .unwrap()
    .convert(Frequency::Annual, Frequency::Daily)
    .unwrap();

  for &n in &[2, 10, 50] {
    let rates = prices(n, DAYS).growth().unwrap();
    let optimiser = MeanVarianceOptimiser::with_solver(OsqpSolver::default());
    group.bench_with_input(BenchmarkId::new("osqp", n), &rates, |b, rates| {
      b.iter(|| black_box(optimiser.optimise(rates, minimum)));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_statistics, bench_optimise);
criterion_main!(benches);
