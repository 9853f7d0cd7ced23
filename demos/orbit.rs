use std::error::Error;
use std::f64::consts::PI;
use vec2d::*;

fn main() -> Result<(), Box<dyn Error>> {
    let center = Vector::parse("10, 10")?;
    // satellite starts 5 units right of center
    let mut offset = Vector::from_slice(&[5.0, 0.0])?;

    let steps = 8;
    for step in 0..steps {
        let position = center.add(offset);
        println!(
            "step {}: position ({}) angle {:.3} distance {:.3}",
            step,
            position,
            offset.angle_of(),
            position.distance(center)
        );
        offset.irotate(2.0 * PI / steps as f64);
    }
    println!("step {}: position ({})", steps, center.add(offset));

    // back where it started, up to rounding
    let start = Vector::new(5.0, 0.0);
    println!("closed orbit: {}", offset.distance(start) < 1e-9);

    let velocity = offset.yx().mul(-1.0).normalized();
    println!("heading {:?} speed {}", velocity.to_json(), velocity.magnitude());
    Ok(())
}
