extern crate poly_interp;

use poly_interp::{Curve, CurveOptions, Polynomial};

fn main() {
    let polynomials = vec![
        Polynomial::new(vec![1.0, 1.0]),
        Polynomial::new(vec![1.0, 0.0, 1.0]),
        Polynomial::new(vec![1.0, 0.0, 0.0, 1.0]),
    ];
    let options = CurveOptions { steps: 22, ..CurveOptions::default() };

    for polynomial in &polynomials {
        let curve = Curve::new(polynomial, &[], options);

        println!("# {}", curve.get_title());
        println!("x;y");
        for sample in curve.get_samples() {
            println!("{:.2};{:.2}", sample.get_x(), sample.get_y());
        }
    }
}
