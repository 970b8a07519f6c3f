/// Round to 2 decimal places, the precision carried by every derived
/// crore and percentage column.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
