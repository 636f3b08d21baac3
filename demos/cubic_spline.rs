use cubic_splines::{BoundaryCondition, Spline1D};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let knots = [0.0, 1.0, 2.0, 4.0, 5.0, 6.0];
    let samples = [1.0, -1.0, 0.0, 3.0, 1.0, 1.0];

    let spline = Spline1D::new(&knots, &samples, BoundaryCondition::clamped(0.0, -1.0)).unwrap();

    let (x_min, x_max) = spline.domain();
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y;dy;d2y");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!(
            "{:.2};{:.3};{:.3};{:.3}",
            x,
            spline.evaluate(x).unwrap(),
            spline.derivative(x, 1).unwrap(),
            spline.derivative(x, 2).unwrap()
        );
    }
}
