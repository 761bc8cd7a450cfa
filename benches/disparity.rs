extern crate image;
use disparity_map::core::*;
use disparity_map::{DisparityCalculator, IntensityGrid};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array2;

fn texture(x: usize, y: usize) -> u8 {
    let mut h = (x as u32).wrapping_mul(0x9E37_79B1) ^ (y as u32).wrapping_mul(0x85EB_CA77);
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^= h >> 12;
    (h % 255) as u8 + 1
}

pub fn disparity_bench(c: &mut Criterion) {
    let left = IntensityGrid::from_array(Array2::from_shape_fn((120, 160), |(y, x)| texture(x, y)))
        .unwrap();
    let right = IntensityGrid::from_array(Array2::from_shape_fn((120, 160), |(y, x)| {
        texture(x.saturating_sub(6), y)
    }))
    .unwrap();
    let option = DisparityOption::new(0, 16).set_tolerance(1).build();
    let calculator = DisparityCalculator::new(Some(option)).unwrap();
    c.bench_function("disparity map 160x120 bench", |b| {
        b.iter(|| calculator.calculate(black_box(&left), black_box(&right)))
    });
}
criterion_group!(benches, disparity_bench);
criterion_main!(benches);
