#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for four-wheel-steer Ackermann wheel speeds."]
#![doc = ""]
#![doc = "This crate derives each wheel's turning radius about the instantaneous center of"]
#![doc = "rotation and expresses each wheel's speed as a percentage of the vehicle's average speed."]

use core::fmt;
use libm::{fabs, floor, fma, fmod, round, sqrt, tan};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Speed of every wheel, in percent of the average vehicle speed, when no wheel has
/// to travel further than another.
pub const UNIFORM_PERCENT: f64 = 100.0;

/// The five geometric regimes of a four-wheel-steered vehicle.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteeringMode {
    /// Both axles point straight ahead.
    Straight,
    /// Both axles are steered to the same nonzero angle. The body translates
    /// sideways without rotating.
    Crab,
    /// Only the front axle steers. The instantaneous center lies on the rear axle line.
    FrontOnly,
    /// Only the rear axle steers. The instantaneous center lies on the front axle line.
    RearOnly,
    /// Both axles steer, to different angles.
    FourWheel,
}

impl SteeringMode {
    /// Classify a pair of axle angles.
    ///
    /// The checks overlap at zero and equal angles, so they are evaluated in a fixed
    /// order: straight, crab, front-only, rear-only, then four-wheel. Comparisons are
    /// exact, with no tolerance.
    ///
    /// # Arguments
    ///
    /// * `front_rad`: Front axle steering angle in radians.
    /// * `rear_rad`: Rear axle steering angle in radians.
    pub fn from_radians(front_rad: f64, rear_rad: f64) -> Self {
        if front_rad == 0.0 && rear_rad == 0.0 {
            SteeringMode::Straight
        } else if front_rad == rear_rad {
            SteeringMode::Crab
        } else if rear_rad == 0.0 {
            SteeringMode::FrontOnly
        } else if front_rad == 0.0 {
            SteeringMode::RearOnly
        } else {
            SteeringMode::FourWheel
        }
    }
}

impl fmt::Display for SteeringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SteeringMode::Straight => "straight",
            SteeringMode::Crab => "crab",
            SteeringMode::FrontOnly => "front axle only",
            SteeringMode::RearOnly => "rear axle only",
            SteeringMode::FourWheel => "four-wheel",
        };
        f.pad(name)
    }
}

/// Vehicle geometry and axle steering angles for a single calculation.
///
/// Angles are signed degrees: negative steers left, positive steers right.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SteeringInput {
    /// Distance between the left and right wheels of an axle (m).
    pub track_width: f64,
    /// Distance between the front and rear axles (m).
    pub wheelbase: f64,
    /// Front axle steering angle (deg).
    pub front_steer_deg: f64,
    /// Rear axle steering angle (deg).
    pub rear_steer_deg: f64,
}

impl SteeringInput {
    /// Construct a new steering input.
    ///
    /// # Arguments
    ///
    /// * `track_width`: Distance between the left and right wheels in meters.
    /// * `wheelbase`: Distance between the front and rear axles in meters.
    /// * `front_steer_deg`: Front axle steering angle in degrees.
    /// * `rear_steer_deg`: Rear axle steering angle in degrees.
    pub const fn new(
        track_width: f64,
        wheelbase: f64,
        front_steer_deg: f64,
        rear_steer_deg: f64,
    ) -> Self {
        SteeringInput {
            track_width,
            wheelbase,
            front_steer_deg,
            rear_steer_deg,
        }
    }

    /// Front axle steering angle in radians.
    pub fn front_rad(&self) -> f64 {
        self.front_steer_deg.to_radians()
    }

    /// Rear axle steering angle in radians.
    pub fn rear_rad(&self) -> f64 {
        self.rear_steer_deg.to_radians()
    }

    /// The steering regime these angles fall into, after conversion to radians.
    pub fn mode(&self) -> SteeringMode {
        SteeringMode::from_radians(self.front_rad(), self.rear_rad())
    }

    /// The signed turning radius that governs the current regime.
    ///
    /// # Returns
    ///
    /// * `None` when driving straight.
    /// * For front-only steering, `wheelbase / tan(front)`, measured from the rear axle.
    /// * For rear-only steering, `wheelbase / tan(rear)`, measured from the front axle.
    /// * For crab and four-wheel steering, the effective radius
    ///   `wheelbase / (tan(front) - tan(rear))` from the vehicle midpoint. This is
    ///   `+inf` when the tangents cancel, as they do in a crab.
    pub fn turning_radius(&self) -> Option<f64> {
        match self.mode() {
            SteeringMode::Straight => None,
            SteeringMode::FrontOnly => Some(axle_radius(self.wheelbase, self.front_rad())),
            SteeringMode::RearOnly => Some(axle_radius(self.wheelbase, self.rear_rad())),
            SteeringMode::Crab | SteeringMode::FourWheel => Some(vehicle_radius(
                self.wheelbase,
                self.front_rad(),
                self.rear_rad(),
            )),
        }
    }

    /// Wheel speeds for this input. See [`wheel_speeds`].
    pub fn wheel_speeds(&self) -> WheelSpeeds {
        wheel_speeds(self)
    }
}

impl fmt::Display for SteeringInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x: {:.3} m, y: {:.3} m, front: {:.2}°, rear: {:.2}°)",
            self.track_width, self.wheelbase, self.front_steer_deg, self.rear_steer_deg
        )
    }
}

/// Speed of each wheel in percent of the average vehicle speed, rounded to two decimals.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSpeeds {
    /// Front left wheel (%).
    pub front_left: f64,
    /// Front right wheel (%).
    pub front_right: f64,
    /// Rear left wheel (%).
    pub rear_left: f64,
    /// Rear right wheel (%).
    pub rear_right: f64,
}

impl WheelSpeeds {
    /// Construct wheel speeds.
    pub const fn new(front_left: f64, front_right: f64, rear_left: f64, rear_right: f64) -> Self {
        WheelSpeeds {
            front_left,
            front_right,
            rear_left,
            rear_right,
        }
    }

    /// All four wheels at the same percentage.
    pub const fn uniform(percent: f64) -> Self {
        WheelSpeeds::new(percent, percent, percent, percent)
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        WheelSpeeds::new(
            f(self.front_left),
            f(self.front_right),
            f(self.rear_left),
            f(self.rear_right),
        )
    }
}

impl Default for WheelSpeeds {
    fn default() -> Self {
        WheelSpeeds::uniform(UNIFORM_PERCENT)
    }
}

impl fmt::Display for WheelSpeeds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(FL: {:.2}%, FR: {:.2}%, RL: {:.2}%, RR: {:.2}%)",
            self.front_left, self.front_right, self.rear_left, self.rear_right
        )
    }
}

/// Calculates the speed of each wheel as a percentage of the average vehicle speed,
/// using the Ackermann model for independently steered front and rear axles.
///
/// The function is total: zero or negative dimensions, coincident angles and angles
/// where the tangent diverges all produce four finite percentages. Degenerate
/// geometry (a pivot with zero radius, or no net rotation with infinite radius)
/// resolves to [`UNIFORM_PERCENT`] on every wheel.
///
/// # Arguments
///
/// * `input`: Vehicle dimensions and axle steering angles.
///
/// # Returns
///
/// The four wheel speeds, each rounded to two decimals.
pub fn wheel_speeds(input: &SteeringInput) -> WheelSpeeds {
    let half_track = input.track_width / 2.0;

    let speeds = match input.mode() {
        SteeringMode::Straight | SteeringMode::Crab => return WheelSpeeds::default(),
        SteeringMode::FrontOnly => {
            match single_axle_turn(half_track, input.wheelbase, input.front_rad()) {
                Some(SingleAxleTurn { steered, fixed }) => {
                    WheelSpeeds::new(steered[0], steered[1], fixed[0], fixed[1])
                }
                None => return WheelSpeeds::default(),
            }
        }
        SteeringMode::RearOnly => {
            match single_axle_turn(half_track, input.wheelbase, input.rear_rad()) {
                Some(SingleAxleTurn { steered, fixed }) => {
                    WheelSpeeds::new(fixed[0], fixed[1], steered[0], steered[1])
                }
                None => return WheelSpeeds::default(),
            }
        }
        SteeringMode::FourWheel => four_wheel_turn(input, half_track),
    };

    speeds.map(finish_percent)
}

/// Signed distance from the unsteered axle to the instantaneous center.
fn axle_radius(wheelbase: f64, steer_rad: f64) -> f64 {
    let t = tan(steer_rad);
    if t == 0.0 { f64::INFINITY } else { wheelbase / t }
}

/// Signed distance from the vehicle midpoint to the instantaneous center when both
/// axles steer. Infinite when the axle tangents cancel.
fn vehicle_radius(wheelbase: f64, front_rad: f64, rear_rad: f64) -> f64 {
    let denominator = tan(front_rad) - tan(rear_rad);
    if denominator == 0.0 {
        f64::INFINITY
    } else {
        wheelbase / denominator
    }
}

/// Lateral `(left, right)` offsets of an axle's wheels, picked by the sign of that
/// axle's own steering angle.
fn lateral_offsets(steer_rad: f64, half_track: f64) -> (f64, f64) {
    if steer_rad < 0.0 {
        (-half_track, half_track)
    } else {
        (half_track, -half_track)
    }
}

/// Unrounded `[left, right]` percentages for a turn where only one axle steers.
struct SingleAxleTurn {
    /// The steered axle, a wheelbase away from the instantaneous center.
    steered: [f64; 2],
    /// The unsteered axle, on the line through the instantaneous center.
    fixed: [f64; 2],
}

fn single_axle_turn(half_track: f64, wheelbase: f64, steer_rad: f64) -> Option<SingleAxleTurn> {
    let r = axle_radius(wheelbase, steer_rad);
    if r == 0.0 || !r.is_finite() {
        return None;
    }

    let left = r - half_track;
    let right = r + half_track;
    let wheelbase_sq = wheelbase * wheelbase;

    // Known quirk: the divisor is the signed radius, not its magnitude, so a left turn
    // gives negative percentages on the steered axle. Kept for output compatibility.
    Some(SingleAxleTurn {
        steered: [
            (sqrt(left * left + wheelbase_sq) / r) * 100.0,
            (sqrt(right * right + wheelbase_sq) / r) * 100.0,
        ],
        fixed: [(left / r) * 100.0, (right / r) * 100.0],
    })
}

fn four_wheel_turn(input: &SteeringInput, half_track: f64) -> WheelSpeeds {
    let front_rad = input.front_rad();
    let rear_rad = input.rear_rad();
    let r = vehicle_radius(input.wheelbase, front_rad, rear_rad);

    // Zero radius pivots about the midpoint; infinite radius has no net rotation.
    if r == 0.0 || !r.is_finite() {
        return WheelSpeeds::default();
    }

    let half_wheelbase = input.wheelbase / 2.0;
    let half_wheelbase_sq = half_wheelbase * half_wheelbase;
    let (front_left, front_right) = lateral_offsets(front_rad, half_track);
    let (rear_left, rear_right) = lateral_offsets(rear_rad, half_track);

    // Known quirk: unlike the single-axle regimes this divides by |R|.
    let percent = |lateral: f64| {
        let d = r + lateral;
        (sqrt(d * d + half_wheelbase_sq) / fabs(r)) * 100.0
    };

    WheelSpeeds::new(
        percent(front_left),
        percent(front_right),
        percent(rear_left),
        percent(rear_right),
    )
}

/// Rounds a percentage to two decimals. Non-finite values only arise when squaring
/// huge dimensions overflows and are reported as uniform speed.
fn finish_percent(percent: f64) -> f64 {
    if !percent.is_finite() {
        return UNIFORM_PERCENT;
    }
    let scaled = percent * 100.0;
    if scaled.is_finite() {
        round_scaled(percent, scaled) / 100.0
    } else {
        percent
    }
}

/// Rounds `scaled = percent * 100` to an integer as if the product were exact.
///
/// When the product lands on a half, the `fma` residual says which side the exact
/// value lies on; a true tie rounds to even.
fn round_scaled(percent: f64, scaled: f64) -> f64 {
    let lower = floor(scaled);
    if scaled - lower != 0.5 {
        return round(scaled);
    }
    let residual = fma(percent, 100.0, -scaled);
    if residual > 0.0 {
        lower + 1.0
    } else if residual < 0.0 {
        lower
    } else if fmod(lower, 2.0) == 0.0 {
        lower
    } else {
        lower + 1.0
    }
}
