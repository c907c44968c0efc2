/// Molar gas constant in J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314_462_618;

/// Standard-state pressure in Pa.
pub const STANDARD_PRESSURE: f64 = 1.0e5;
