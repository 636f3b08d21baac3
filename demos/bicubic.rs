use cubic_splines::{Axis, BoundaryCondition, Spline2D};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let axis_x = Axis::linear(-2.0, 2.0, 9).unwrap();
    let axis_y = Axis::linear(-2.0, 2.0, 9).unwrap();
    let surface = |x: f64, y: f64| (-(x * x + y * y)).exp();

    let spline = Spline2D::from_fn(&axis_x, &axis_y, surface, BoundaryCondition::NotAKnot, BoundaryCondition::NotAKnot)
        .unwrap();

    let number_of_steps = 20;
    let step = 4.0 / number_of_steps as f64;

    println!("x;y;z;dz_dx;dz_dy;error");
    for i in 0..=number_of_steps {
        for j in 0..=number_of_steps {
            let x = -2.0 + step * i as f64;
            let y = -2.0 + step * j as f64;
            let z = spline.evaluate(x, y).unwrap();
            let [dx, dy] = spline.gradient(x, y).unwrap();
            println!("{:.2};{:.2};{:.4};{:.4};{:.4};{:.2e}", x, y, z, dx, dy, z - surface(x, y));
        }
    }
}
