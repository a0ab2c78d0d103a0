//! Interrupt numbering for the MSPM0G3507.
//!
//! This module adapts the architectural numbering in `arm_m::exc` to the
//! MSPM0G3507.  It provides:
//! - `enum Interrupt` naming the vendor-specific (NVIC) vectors.
//! - `enum Vector` classifying every slot of the full vector table, including
//!   the reserved ones.

use core::fmt;

use crate::arm_m::exc::{self, BadVector, Exception, VectorResult};

/// Number of NVIC interrupt lines implemented by the Cortex-M0+ core, whether
/// or not the SoC connects anything to them.
pub const NUM_INTERRUPTS: usize = 32;

/// Total number of vector table slots, from the initial stack pointer through
/// the last interrupt.
pub const NUM_VECTORS: usize = exc::NUM_EXCEPTIONS + NUM_INTERRUPTS;

/// Enumeration of the MSPM0G3507 interrupts.  The discriminant of each variant
/// is its NVIC interrupt number (IRQn); the vector number is 16 higher.
///
/// Variants are named after their handler symbols, so they keep the vendor's
/// capitalization.
///
/// IRQns 8, 11, 12, 22, 23, 26, 27 and 29 are not connected on this part and
/// have no variant.
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Interrupt {
    /// Combined peripheral group 0 (WWDT0, WWDT1, DEBUGSS, FLASHCTL, WUC,
    /// SYSCTL).
    INT_GROUP0 = 0,
    /// Combined peripheral group 1 (GPIOA, GPIOB, COMP0-2, TRNG).
    INT_GROUP1 = 1,
    TIMG8 = 2,
    UART3 = 3,
    ADC0 = 4,
    ADC1 = 5,
    CANFD0 = 6,
    DAC0 = 7,

    SPI0 = 9,
    SPI1 = 10,

    UART1 = 13,
    UART2 = 14,
    UART0 = 15,
    TIMG0 = 16,
    TIMG6 = 17,
    TIMA0 = 18,
    TIMA1 = 19,
    TIMG7 = 20,
    TIMG12 = 21,

    I2C0 = 24,
    I2C1 = 25,

    /// AES accelerator.
    AES = 28,

    RTC = 30,
    DMA = 31,
}

impl Interrupt {
    /// Every interrupt, in vector order.
    pub const ALL: [Interrupt; 24] = [
        Interrupt::INT_GROUP0,
        Interrupt::INT_GROUP1,
        Interrupt::TIMG8,
        Interrupt::UART3,
        Interrupt::ADC0,
        Interrupt::ADC1,
        Interrupt::CANFD0,
        Interrupt::DAC0,
        Interrupt::SPI0,
        Interrupt::SPI1,
        Interrupt::UART1,
        Interrupt::UART2,
        Interrupt::UART0,
        Interrupt::TIMG0,
        Interrupt::TIMG6,
        Interrupt::TIMA0,
        Interrupt::TIMA1,
        Interrupt::TIMG7,
        Interrupt::TIMG12,
        Interrupt::I2C0,
        Interrupt::I2C1,
        Interrupt::AES,
        Interrupt::RTC,
        Interrupt::DMA,
    ];

    /// Returns the NVIC interrupt number.
    pub const fn irqn(self) -> u8 {
        self as u8
    }

    /// Returns the vector table slot serving this interrupt.
    pub const fn vector_number(self) -> u8 {
        self as u8 + exc::NUM_EXCEPTIONS as u8
    }

    /// Returns the name of the handler symbol for this interrupt.
    pub const fn name(self) -> &'static str {
        match self {
            Interrupt::INT_GROUP0 => "INT_GROUP0",
            Interrupt::INT_GROUP1 => "INT_GROUP1",
            Interrupt::TIMG8 => "TIMG8",
            Interrupt::UART3 => "UART3",
            Interrupt::ADC0 => "ADC0",
            Interrupt::ADC1 => "ADC1",
            Interrupt::CANFD0 => "CANFD0",
            Interrupt::DAC0 => "DAC0",
            Interrupt::SPI0 => "SPI0",
            Interrupt::SPI1 => "SPI1",
            Interrupt::UART1 => "UART1",
            Interrupt::UART2 => "UART2",
            Interrupt::UART0 => "UART0",
            Interrupt::TIMG0 => "TIMG0",
            Interrupt::TIMG6 => "TIMG6",
            Interrupt::TIMA0 => "TIMA0",
            Interrupt::TIMA1 => "TIMA1",
            Interrupt::TIMG7 => "TIMG7",
            Interrupt::TIMG12 => "TIMG12",
            Interrupt::I2C0 => "I2C0",
            Interrupt::I2C1 => "I2C1",
            Interrupt::AES => "AES",
            Interrupt::RTC => "RTC",
            Interrupt::DMA => "DMA",
        }
    }

    /// Looks up the interrupt with NVIC number `irqn`.  Unconnected and
    /// out-of-range numbers produce `BadVector` carrying `irqn`.
    pub fn from_irqn(irqn: u32) -> VectorResult<Self> {
        Interrupt::ALL
            .iter()
            .copied()
            .find(|i| u32::from(i.irqn()) == irqn)
            .ok_or(BadVector(irqn))
    }
}

// Lets applications hand `Interrupt`s straight to `cortex_m::peripheral::NVIC`.
//
// Safety: every discriminant is a valid IRQn on this part.
#[cfg(target_os = "none")]
unsafe impl cortex_m::interrupt::InterruptNumber for Interrupt {
    #[inline]
    fn number(self) -> u16 {
        u16::from(self.irqn())
    }
}

/// Classification of a vector table slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Vector {
    /// Slot 0: the initial main stack pointer, loaded as data.
    StackPointer,
    /// Slot 1: where execution starts.
    Reset,
    /// An architectural exception.
    Exception(Exception),
    /// A vendor interrupt.
    Interrupt(Interrupt),
    /// A slot with no assigned source, architectural or vendor.  Carries the
    /// vector number.
    Reserved(u8),
}

impl Vector {
    /// Classifies slot `n`.  Only numbers past the end of the table fail.
    pub fn from_number(n: u32) -> VectorResult<Self> {
        const FIRST_IRQ: u32 = exc::NUM_EXCEPTIONS as u32;
        const END: u32 = NUM_VECTORS as u32;

        match n {
            0 => Ok(Vector::StackPointer),
            1 => Ok(Vector::Reset),
            _ if exc::is_reserved_exception(n) => Ok(Vector::Reserved(n as u8)),
            2..=15 => Exception::from_number(n).map(Vector::Exception),
            FIRST_IRQ..END => Ok(Interrupt::from_irqn(n - FIRST_IRQ)
                .map_or(Vector::Reserved(n as u8), Vector::Interrupt)),
            _ => Err(BadVector(n)),
        }
    }

    /// Returns the slot number.
    pub const fn number(self) -> u8 {
        match self {
            Vector::StackPointer => exc::STACK_POINTER_VECTOR,
            Vector::Reset => exc::RESET_VECTOR,
            Vector::Exception(e) => e.number(),
            Vector::Interrupt(i) => i.vector_number(),
            Vector::Reserved(n) => n,
        }
    }

    /// Returns the symbol that fills this slot in `VECTOR_TABLE`.
    pub const fn name(self) -> &'static str {
        match self {
            Vector::StackPointer => "__stack_top",
            Vector::Reset => "Reset",
            Vector::Exception(e) => e.name(),
            Vector::Interrupt(i) => i.name(),
            Vector::Reserved(_) => "ReservedHandler",
        }
    }

    /// Whether the application may override this slot's handler.
    pub const fn is_overridable(self) -> bool {
        matches!(self, Vector::Exception(_) | Vector::Interrupt(_))
    }

    /// Iterates over every slot in table order.
    pub fn all() -> impl Iterator<Item = Vector> {
        (0..NUM_VECTORS as u32).filter_map(|n| Vector::from_number(n).ok())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:2}: {}", self.number(), self.name())
    }
}
