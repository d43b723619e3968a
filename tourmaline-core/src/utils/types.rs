/// Alias to a scalar floating type.
///
/// NOTE: `f64` everywhere: road distances accumulate over thousands of relaxations
/// and `f32` loses too much precision for the tie-breaking comparisons.
pub type Float = f64;
