extern crate poly_interp;

use poly_interp::{interpolate, RationalFunction};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let f = interpolate::<RationalFunction>(3, &[], &[]).unwrap();

    println!("y = {}", f);
    for (power, coefficient) in f.coefficients().iter().enumerate() {
        println!("a{} = {}", power, coefficient);
    }
}
