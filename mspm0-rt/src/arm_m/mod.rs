//! Support common to ARMv6-M parts, independent of the SoC vendor.

pub mod exc;
pub mod startup;
