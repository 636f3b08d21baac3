use cubic_splines::{Axis, BoundaryCondition, Direction, ParameterGuess, Spline1D, Spline2D};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let axis = Axis::exp_m1(0.1, 50.0, 30).unwrap();
    let spline = Spline1D::from_fn(&axis, |x| x.sqrt(), BoundaryCondition::NotAKnot).unwrap();

    println!("value;x;x_exact");
    for value in [0.5, 1.0, 2.0, 4.0, 7.0] {
        let x = spline.find_parameter(value, ParameterGuess::default()).unwrap();
        println!("{:.2};{:.6};{:.6}", value, x, value * value);
    }

    let axis_x = Axis::linear(0.0, 1.0, 6).unwrap();
    let axis_y = Axis::linear(1.0, 3.0, 6).unwrap();
    let surface = Spline2D::from_fn(&axis_x, &axis_y, |x, y| x * y, BoundaryCondition::Natural, BoundaryCondition::Natural)
        .unwrap();

    println!("y;x where x*y = 0.5");
    for y in [1.0, 1.5, 2.0, 2.5, 3.0] {
        let x = surface.find_parameter(0.5, Direction::X, y, ParameterGuess::default()).unwrap();
        println!("{:.2};{:.6}", y, x);
    }
}
