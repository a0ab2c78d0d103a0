//! ARMv6-M exception numbering and handler types.

use core::fmt;

/// ARMv6-M interrupt and exception handlers are merely functions conforming to
/// the C ABI.
///
/// Function pointers can't be null, so a table built out of `Handler`s can't
/// contain a null slot.  This is the property we want: a spurious exception
/// must land *somewhere* we chose.
pub type Handler = unsafe extern "C" fn();

/// The reset vector is special: it must not return.  We can model this nicely
/// in Rust's type system as a diverging function.  We additionally mark the
/// reset handler as `unsafe` because nothing, including the stack contents and
/// static data, has been established when it runs.
pub type ResetHandler = unsafe extern "C" fn() -> !;

/// Number of architecturally defined vectors on ARMv6-M, including the initial
/// stack pointer and reset.  Vendor interrupts begin at this number.
pub const NUM_EXCEPTIONS: usize = 16;

/// Vector number holding the initial main stack pointer.
pub const STACK_POINTER_VECTOR: u8 = 0;

/// Vector number holding the reset handler.
pub const RESET_VECTOR: u8 = 1;

/// Error type indicating that a vector number doesn't name the expected kind of
/// vector, either because it is out of range or because it is reserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BadVector(pub u32);

/// Result type for `BadVector`.
pub type VectorResult<T> = Result<T, BadVector>;

impl fmt::Display for BadVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "vector number {} is not defined here", self.0)
    }
}

/// The configurable system exceptions defined by ARMv6-M.
///
/// The variants are named after the handler symbols that serve them, which is
/// what lets the override macros check a name at compile time.
///
/// ARMv6-M has no MemManage, BusFault, UsageFault or DebugMonitor vectors:
/// all fault conditions escalate to `HardFault`, and those slots are reserved.
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Exception {
    /// Non-Maskable Interrupt.  Highest priority after reset, fixed at -2.
    NMI = 2,
    /// Generic fault for everything that can't be handled otherwise.  Fixed
    /// priority of -1.
    HardFault = 3,
    /// Supervisor Call, taken on the `SVC` instruction.
    SVCall = 11,
    /// Pendable service request, usually used for context switching.
    PendSV = 14,
    /// SysTick timer expiry.  Optional on ARMv6-M.
    SysTick = 15,
}

impl Exception {
    /// Every exception, in vector order.
    pub const ALL: [Exception; 5] = [
        Exception::NMI,
        Exception::HardFault,
        Exception::SVCall,
        Exception::PendSV,
        Exception::SysTick,
    ];

    /// Returns this exception's vector number.
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the name of the handler symbol for this exception.
    pub const fn name(self) -> &'static str {
        match self {
            Exception::NMI => "NMI",
            Exception::HardFault => "HardFault",
            Exception::SVCall => "SVCall",
            Exception::PendSV => "PendSV",
            Exception::SysTick => "SysTick",
        }
    }

    /// Looks up the exception with vector number `n`.  Fails for the stack
    /// pointer and reset slots, the reserved slots, and anything past the
    /// architectural range.
    pub fn from_number(n: u32) -> VectorResult<Self> {
        match n {
            2 => Ok(Exception::NMI),
            3 => Ok(Exception::HardFault),
            11 => Ok(Exception::SVCall),
            14 => Ok(Exception::PendSV),
            15 => Ok(Exception::SysTick),
            _ => Err(BadVector(n)),
        }
    }
}

/// Checks whether `n` is one of the architecturally reserved exception
/// numbers.  These have no handler of their own but still occupy a slot.
pub const fn is_reserved_exception(n: u32) -> bool {
    matches!(n, 4..=10 | 12 | 13)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn architectural_range_is_fully_classified() {
        for n in 2..NUM_EXCEPTIONS as u32 {
            let named = Exception::from_number(n).is_ok();
            assert!(named != is_reserved_exception(n), "vector {}", n);
        }
    }

    #[test]
    fn stack_pointer_and_reset_are_not_exceptions() {
        assert_eq!(Exception::from_number(0), Err(BadVector(0)));
        assert_eq!(Exception::from_number(1), Err(BadVector(1)));
        assert!(!is_reserved_exception(0));
        assert!(!is_reserved_exception(1));
    }

    #[test]
    fn numbers_round_trip() {
        for e in Exception::ALL.iter() {
            assert_eq!(Exception::from_number(e.number() as u32), Ok(*e));
        }
    }

    #[test]
    fn all_is_in_vector_order() {
        let numbers = Exception::ALL.map(Exception::number);
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn reserved_and_out_of_range_numbers_are_rejected() {
        for n in [4, 7, 10, 12, 13, 16, 255] {
            assert_eq!(Exception::from_number(n), Err(BadVector(n)));
        }
    }

    #[test]
    fn names_match_handler_symbols() {
        assert_eq!(Exception::SVCall.name(), "SVCall");
        assert_eq!(Exception::SysTick.name(), "SysTick");
    }
}
