use cubic_splines::{Axis, BoundaryCondition, Interpolant1D, SplineOptions, ValueTransform};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // power law over eight decades, interpolated as ln f over ln x
    let f = |x: f64| 3.0 * x.powf(2.5);
    let axis = Axis::exponential(1e-4, 1e4, 12).unwrap();
    let interpolant =
        Interpolant1D::with_settings(axis, f, BoundaryCondition::NotAKnot, ValueTransform::Log, SplineOptions::default())
            .unwrap();

    println!("x;y;y_exact;dy;dy_exact");
    for x in [2e-4, 3e-3, 0.5, 7.0, 120.0, 9e3] {
        println!(
            "{:e};{:e};{:e};{:e};{:e}",
            x,
            interpolant.evaluate(x).unwrap(),
            f(x),
            interpolant.first_derivative(x).unwrap(),
            7.5 * x.powf(1.5)
        );
    }
}
