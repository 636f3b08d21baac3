use cubic_splines::{Axis, BoundaryCondition, Spline1D};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let axis = Axis::exponential(0.01, 100.0, 25).unwrap();
    let spline = Spline1D::from_fn(&axis, f64::ln, BoundaryCondition::NotAKnot).unwrap();

    let number_of_steps = 60;
    let fine = Axis::exponential(0.01, 100.0, number_of_steps + 1).unwrap();
    let x_vector = fine.nodes();

    let result = spline.evaluate_batch(&x_vector).unwrap();

    println!("x;y;error");
    for (x, y) in x_vector.iter().zip(result) {
        println!("{:.4};{:.6};{:.2e}", x, y, y - x.ln());
    }
}
