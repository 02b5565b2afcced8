/// Quadratic ease-out: fast start, slow finish. Maps [0, 1] onto [0, 1].
#[inline]
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
pub fn clamp_unit(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}
