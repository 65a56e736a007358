//! Health metric calculators
//!
//! One module per calculator page. Each exposes the raw formula functions
//! (total over validated input) plus a validated report entry point whose
//! output the page shell renders directly.

pub mod bmi;
pub mod body_fat;
pub mod energy;
pub mod heart_rate;
pub mod hydration;
pub mod ideal_weight;
pub mod protein;
