/// Absolute tolerance for slab boundary tests and cursor equality.
pub const EPS: f64 = 1e-7;
