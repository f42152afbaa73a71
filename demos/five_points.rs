extern crate poly_interp;

use num_bigint::BigInt;
use num_rational::BigRational;
use poly_interp::{interpolate, Curve, CurveOptions, Sample};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let xs: Vec<BigRational> = [-1, 0, 1, 2, 3].into_iter().map(integer).collect();
    let ys: Vec<BigRational> = [-1, 2, 1, 4, 5].into_iter().map(integer).collect();

    let f = interpolate(0, &xs, &ys).unwrap();
    for (x, y) in xs.iter().zip(&ys) {
        assert_eq!(&f.evaluate(x), y);
    }

    let points: Vec<Sample<f64>> = [(-1.0, -1.0), (0.0, 2.0), (1.0, 1.0), (2.0, 4.0), (3.0, 5.0)]
        .into_iter()
        .map(Sample::from)
        .collect();
    let curve = Curve::new(&f, &points, CurveOptions::default());

    println!("# {}", curve.get_title());
    println!("# points: {}", curve.labels().join(" "));
    println!("x;y");
    for sample in curve.get_samples() {
        println!("{:.2};{:.2}", sample.get_x(), sample.get_y());
    }
}

fn integer(value: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(value))
}
