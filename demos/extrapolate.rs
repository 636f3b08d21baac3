use cubic_splines::{BoundaryCondition, Extrapolation, Spline1D, SplineOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let knots = [1.0, 2.0, 3.0, 4.0, 5.0];
    let samples = [1.0, 0.0, -2.0, 1.0, 1.0];

    let policies = [Extrapolation::Extrapolate, Extrapolation::Clamp, Extrapolation::Error];
    let splines: Vec<Spline1D> = policies
        .iter()
        .map(|policy| {
            let options = SplineOptions::default().with_extrapolation(*policy);
            Spline1D::with_options(&knots, &samples, BoundaryCondition::NotAKnot, options).unwrap()
        })
        .collect();

    let x_min = 0.0;
    let x_max = 6.0;
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;extrapolate;clamp;error");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        let columns: Vec<String> = splines
            .iter()
            .map(|spline| match spline.evaluate(x) {
                Ok(y) => format!("{:.2}", y),
                Err(_) => "-".to_string(),
            })
            .collect();
        println!("{:.2};{}", x, columns.join(";"));
    }
}
