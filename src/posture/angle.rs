use crate::posture::landmark::Landmark;

/// Angle in degrees at vertex `b` formed by the arms `b -> a` and `b -> c`,
/// normalized to `[0, 180]`.
///
/// A zero-length arm has no direction; the result is defined as `0` in that
/// case. Use [`checked_angle`] to detect it instead.
pub fn angle(a: &Landmark, b: &Landmark, c: &Landmark) -> f32 {
    checked_angle(a, b, c).unwrap_or(0.0)
}

/// Like [`angle`], but `None` when an arm has zero length or any coordinate
/// is not finite.
pub fn checked_angle(a: &Landmark, b: &Landmark, c: &Landmark) -> Option<f32> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return None;
    }
    if is_zero_arm(a, b) || is_zero_arm(c, b) {
        return None;
    }

    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let degrees = radians.to_degrees().abs();

    if degrees > 180.0 {
        Some(360.0 - degrees)
    } else {
        Some(degrees)
    }
}

fn is_zero_arm(end: &Landmark, vertex: &Landmark) -> bool {
    end.x == vertex.x && end.y == vertex.y
}
