//! Vector table, reset stub and default exception handler for MSPM0
//! Cortex-M0+ parts.
//!
//! The table lives in `mspm0g3507::vectors` and is placed in the
//! `.vector_table` section, which the application's linker script must put at
//! the start of flash.  Handlers are overridden at link time: see
//! `arm_m::startup`.

#![cfg_attr(not(test), no_std)]

#![deny(
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results,
    )]

pub mod arm_m;
mod lang;

#[cfg(feature = "soc-mspm0g3507")]
pub mod mspm0g3507;
