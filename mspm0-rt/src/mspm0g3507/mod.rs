//! Support for the TI MSPM0G3507.

pub mod irq;
pub mod vectors;

pub use self::irq::{Interrupt, Vector, NUM_INTERRUPTS, NUM_VECTORS};
pub use self::vectors::VectorTable;
