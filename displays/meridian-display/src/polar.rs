//! Polar conversion for hands
//!
//! Angle 0 points straight up and angles grow clockwise, so with screen
//! coordinates (y down) the tip sits at `(sin a, -cos a) * length`.

use core::f32::consts::TAU;

use embedded_graphics::prelude::Point;
use libm::{cosf, roundf, sinf};
use meridian_core::face::{HandModel, TRIG_MAX_ANGLE};

/// Convert a fixed-point angle to radians
pub fn angle_to_radians(angle: i32) -> f32 {
    let normalized = angle.rem_euclid(TRIG_MAX_ANGLE);
    normalized as f32 * TAU / TRIG_MAX_ANGLE as f32
}

/// Point at `length` pixels from `center` in the direction of `angle`
pub fn polar_point(center: Point, angle: i32, length: u16) -> Point {
    let radians = angle_to_radians(angle);
    let length = length as f32;
    let dx = roundf(sinf(radians) * length) as i32;
    let dy = roundf(cosf(radians) * length) as i32;
    Point::new(center.x + dx, center.y - dy)
}

/// Tip of a hand drawn from `center`
pub fn hand_endpoint(center: Point, hand: &HandModel) -> Point {
    polar_point(center, hand.angle, hand.length)
}
