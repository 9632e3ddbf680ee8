//! Imperial-to-metric conversions applied once at the input boundary.
//! All derivation math downstream is metric.

const LB_TO_KG: f64 = 0.453592;
const FT_TO_CM: f64 = 30.48;
const IN_TO_CM: f64 = 2.54;

/// Convert a weight entered in pounds to kilograms.
pub fn lb_to_kg(lb: f64) -> f64 {
    lb * LB_TO_KG
}

/// Convert a height entered as feet + inches to centimeters.
pub fn ft_in_to_cm(feet: f64, inches: f64) -> f64 {
    feet * FT_TO_CM + inches * IN_TO_CM
}

/// Height in meters from centimeters.
pub fn cm_to_m(cm: f64) -> f64 {
    cm / 100.0
}

/// Round to one decimal place for display.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
