//! Console report for a single wheel speed calculation.

use std::fmt;

use aurus_steering::{SteeringInput, SteeringMode, WheelSpeeds};

const RULE_WIDTH: usize = 35;

/// The inputs and results of one calculation, formatted for the terminal.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    input: SteeringInput,
    speeds: WheelSpeeds,
}

impl Report {
    /// Run the calculation for `input` and keep the result for display.
    pub fn new(input: SteeringInput) -> Self {
        Report {
            input,
            speeds: input.wheel_speeds(),
        }
    }

    /// The computed wheel speeds.
    pub fn speeds(&self) -> &WheelSpeeds {
        &self.speeds
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Crab steering reports as a two-axle turn with an infinite radius.
        let (title, radius_label) = match self.input.mode() {
            SteeringMode::Straight => ("Straight", None),
            SteeringMode::FrontOnly => (
                "Front axle steering only",
                Some("Turning radius (from rear axle)"),
            ),
            SteeringMode::RearOnly => (
                "Rear axle steering only",
                Some("Turning radius (from front axle)"),
            ),
            SteeringMode::Crab | SteeringMode::FourWheel => (
                "4WS: both axles steering",
                Some("Effective turning radius (R_vehicle)"),
            ),
        };

        writeln!(f, "--- Wheel Speeds in a Turn ({title}) ---")?;
        if let (Some(label), Some(radius)) = (radius_label, self.input.turning_radius()) {
            writeln!(f, "{label}: {radius:.3} m")?;
        }

        let input = &self.input;
        writeln!(f, "Input values:")?;
        writeln!(f, "  Track width (x): {:?} m", input.track_width)?;
        writeln!(f, "  Wheelbase (y):   {:?} m", input.wheelbase)?;
        writeln!(
            f,
            "  Front steering angle: {:?}° (negative=left, positive=right)",
            input.front_steer_deg
        )?;
        writeln!(
            f,
            "  Rear steering angle:  {:?}° (negative=left, positive=right)",
            input.rear_steer_deg
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        let speeds = &self.speeds;
        writeln!(f, "Percentage of Average Speed (100%):")?;
        writeln!(f, "  Front left:  {:?}%", speeds.front_left)?;
        writeln!(f, "  Front right: {:?}%", speeds.front_right)?;
        writeln!(f, "  Rear left:   {:?}%", speeds.rear_left)?;
        writeln!(f, "  Rear right:  {:?}%", speeds.rear_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(x: f64, y: f64, front: f64, rear: f64) -> String {
        Report::new(SteeringInput::new(x, y, front, rear)).to_string()
    }

    #[test]
    fn test_four_wheel_report() {
        let expected = "\
--- Wheel Speeds in a Turn (4WS: both axles steering) ---
Effective turning radius (R_vehicle): 7.878 m
Input values:
  Track width (x): 1.6 m
  Wheelbase (y):   2.8 m
  Front steering angle: 15.0° (negative=left, positive=right)
  Rear steering angle:  -5.0° (negative=left, positive=right)
-----------------------------------
Percentage of Average Speed (100%):
  Front left:  111.58%
  Front right: 91.59%
  Rear left:   91.59%
  Rear right:  111.58%
";
        assert_eq!(render(1.6, 2.8, 15.0, -5.0), expected);
    }

    #[test]
    fn test_front_only_report() {
        let expected = "\
--- Wheel Speeds in a Turn (Front axle steering only) ---
Turning radius (from rear axle): 7.693 m
Input values:
  Track width (x): 1.6 m
  Wheelbase (y):   2.8 m
  Front steering angle: 20.0° (negative=left, positive=right)
  Rear steering angle:  0.0° (negative=left, positive=right)
-----------------------------------
Percentage of Average Speed (100%):
  Front left:  96.71%
  Front right: 116.24%
  Rear left:   89.6%
  Rear right:  110.4%
";
        assert_eq!(render(1.6, 2.8, 20.0, 0.0), expected);
    }

    #[test]
    fn test_rear_only_header() {
        let text = render(1.6, 2.8, 0.0, -20.0);
        assert!(text.starts_with(
            "--- Wheel Speeds in a Turn (Rear axle steering only) ---\n\
             Turning radius (from front axle): -7.693 m\n"
        ));
        assert!(text.contains("  Rear left:   -116.24%\n"));
    }

    #[test]
    fn test_straight_has_no_radius_line() {
        let text = render(1.6, 2.8, 0.0, 0.0);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("--- Wheel Speeds in a Turn (Straight) ---"));
        assert_eq!(lines.next(), Some("Input values:"));
        assert!(text.contains("  Front left:  100.0%\n"));
    }

    #[test]
    fn test_crab_reports_infinite_radius() {
        let text = render(1.6, 2.8, 12.0, 12.0);
        assert!(text.contains("Effective turning radius (R_vehicle): inf m\n"));
        assert!(text.contains("  Rear right:  100.0%\n"));
    }

    #[test]
    fn test_speeds_accessor() {
        let report = Report::new(SteeringInput::new(1.6, 2.8, 10.0, 5.0));
        assert_eq!(*report.speeds(), WheelSpeeds::new(102.63, 97.56, 102.63, 97.56));
    }
}
