//! CLI library components for lead intake.

pub mod intake;
pub mod logging;
