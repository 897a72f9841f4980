use aurus_steering::*;

fn main() {
    let track_width = 1.6;
    let wheelbase = 2.8;
    let counter_steer_ratio = -0.33; // rear axle turns a third as far, opposite way
    let max_front_deg = 30.0;
    let step_deg = 5.0;

    println!("Four-wheel steer sweep:");
    println!("  Track width:   {} m", track_width);
    println!("  Wheelbase:     {} m", wheelbase);
    println!("  Counter-steer: {}", counter_steer_ratio);
    println!();

    let mut front_deg = -max_front_deg;
    while front_deg <= max_front_deg {
        let input = SteeringInput::new(
            track_width,
            wheelbase,
            front_deg,
            front_deg * counter_steer_ratio,
        );
        let radius = match input.turning_radius() {
            Some(r) => format!("{:>9.3} m", r),
            None => format!("{:>11}", "straight"),
        };
        println!(
            "front {:>6.1}° rear {:>6.2}° [{:<10}] R {} {}",
            input.front_steer_deg,
            input.rear_steer_deg,
            input.mode(),
            radius,
            input.wheel_speeds()
        );
        front_deg += step_deg;
    }
}
