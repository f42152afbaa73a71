extern crate poly_interp;

use poly_interp::{interpolate, Curve, CurveOptions, Sample};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let n = 10;
    let xs: Vec<f64> = (0..2 * n).map(|i| -1.0 + i as f64 / n as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (x * n as f64).sin()).collect();

    let f = interpolate(0, &xs, &ys).unwrap();
    let curve = Curve::new(&f, &Sample::zip(&xs, &ys), CurveOptions::default());

    println!("x;y");
    for sample in curve.get_samples() {
        println!("{:.3};{:.3}", sample.get_x(), sample.get_y());
    }
}
