//! Weight derivation and display formatting

/// Net cargo weight in tons.
///
/// The absolute difference keeps the register usable when the tare was
/// entered larger than gross (the historical paper-register behavior).
pub fn net_weight(gross: f64, tare: f64) -> f64 {
    (gross - tare).abs()
}

/// Weight format used on printed paperwork: three decimals, "ton" unit.
/// Load-bearing for interoperability with existing printed slips.
pub fn format_weight(weight: f64) -> String {
    format!("{weight:.3} ton")
}
