//! The MSPM0G3507 vector table.
//!
//! The table is built in two steps, both at compile time: `VectorTable::new`
//! fills every handler slot with one fallback, then `exception` and
//! `interrupt` replace the slots that have a source of their own.  Reserved
//! slots can't be named, so they always keep the fallback.

use crate::arm_m::exc::{BadVector, Exception, Handler, ResetHandler, VectorResult};
use super::irq::{Interrupt, NUM_VECTORS};

/// Number of slots holding a `Handler`, i.e. everything but the initial stack
/// pointer and the reset vector.
const NUM_HANDLERS: usize = NUM_VECTORS - 2;

/// The MSPM0G3507 vector table, as read by the processor: 48 words, starting
/// with the initial stack pointer and the reset vector.
///
/// The hardware dictates the layout, so there must be nothing in between
/// entries and nothing after them.  The assertion below holds that to account.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct VectorTable {
    /// ARMv6-M processors load their initial stack pointer from the first word
    /// of the vector table.
    ///
    /// ARM uses a "full descending" stack, so the initial `sp` usually points
    /// just past the end of RAM.  We model it as a `const` pointer to
    /// discourage dereferencing such an invalid address; it's only ever data.
    initial_stack: *const u32,

    /// Entered after `initial_stack` is loaded.
    reset: ResetHandler,

    /// Vectors 2 through 47.
    handlers: [Handler; NUM_HANDLERS],
}

const _: () = assert!(size_of::<VectorTable>() == NUM_VECTORS * size_of::<usize>());

/// A table in flash is never written, and the processor is its only other
/// reader.
///
/// `VectorTable` is almost `Sync` out of the box.  The exception is the pointer
/// used for `initial_stack`, which is never dereferenced.
unsafe impl Sync for VectorTable {}

impl VectorTable {
    /// Creates a table with every handler slot set to `fallback`.
    ///
    /// In practice, this is used in a chain of builder calls:
    ///
    /// ```ignore
    /// pub static VECTORS: VectorTable = VectorTable::new(stack, reset, trap)
    ///     .exception(Exception::SysTick, my_tick_handler)
    ///     .interrupt(Interrupt::UART0, my_uart_handler);
    /// ```
    pub const fn new(
        initial_stack: *const u32,
        reset: ResetHandler,
        fallback: Handler,
    ) -> Self {
        VectorTable {
            initial_stack,
            reset,
            handlers: [fallback; NUM_HANDLERS],
        }
    }

    /// Routes `exception` to `handler`.
    pub const fn exception(mut self, exception: Exception, handler: Handler) -> Self {
        self.handlers[handler_index(exception.number())] = handler;
        self
    }

    /// Routes `interrupt` to `handler`.
    pub const fn interrupt(mut self, interrupt: Interrupt, handler: Handler) -> Self {
        self.handlers[handler_index(interrupt.vector_number())] = handler;
        self
    }

    /// The value loaded into `sp` at reset, exactly as given to `new`.
    pub fn initial_stack(&self) -> *const u32 {
        self.initial_stack
    }

    /// The handler entered at reset, exactly as given to `new`.
    pub fn reset(&self) -> ResetHandler {
        self.reset
    }

    /// Returns the handler in slot `n`.  The stack pointer and reset slots
    /// don't hold a `Handler`, so they fail along with out-of-range numbers.
    pub fn handler(&self, n: u32) -> VectorResult<Handler> {
        let index = usize::try_from(n).map_err(|_| BadVector(n))?;
        index
            .checked_sub(2)
            .and_then(|i| self.handlers.get(i))
            .copied()
            .ok_or(BadVector(n))
    }

    /// Returns slot `n` as the word the processor will read.
    pub fn word(&self, n: u32) -> VectorResult<usize> {
        match n {
            0 => Ok(self.initial_stack as usize),
            1 => Ok(self.reset as usize),
            _ => self.handler(n).map(|h| h as usize),
        }
    }

    /// Iterates over all slots, as words, in table order.
    pub fn words(&self) -> impl Iterator<Item = usize> + '_ {
        (0..NUM_VECTORS as u32).filter_map(move |n| self.word(n).ok())
    }
}

/// Maps a vector number to its index in `VectorTable::handlers`.
const fn handler_index(vector: u8) -> usize {
    vector as usize - 2
}

#[cfg(target_os = "none")]
pub use self::placed::VECTOR_TABLE;

#[cfg(target_os = "none")]
mod placed {
    use super::VectorTable;
    use crate::arm_m::exc::Exception;
    use crate::arm_m::startup::Reset;
    use crate::mspm0g3507::irq::Interrupt;

    // Every handler here is `PROVIDE`d as an alias of `DefaultHandler` by
    // `device.x`, unless the application defines it.
    #[allow(non_snake_case)]
    extern "C" {
        /// Provided by the linker script: one past the top of the initial
        /// stack.
        static __stack_top: u32;

        fn ReservedHandler();

        fn NMI();
        fn HardFault();
        fn SVCall();
        fn PendSV();
        fn SysTick();

        fn INT_GROUP0();
        fn INT_GROUP1();
        fn TIMG8();
        fn UART3();
        fn ADC0();
        fn ADC1();
        fn CANFD0();
        fn DAC0();
        fn SPI0();
        fn SPI1();
        fn UART1();
        fn UART2();
        fn UART0();
        fn TIMG0();
        fn TIMG6();
        fn TIMA0();
        fn TIMA1();
        fn TIMG7();
        fn TIMG12();
        fn I2C0();
        fn I2C1();
        fn AES();
        fn RTC();
        fn DMA();
    }

    /// The ROM vector table.
    ///
    /// This is placed in ROM by the application's linker script because of its
    /// assigned `link_section`, which must land at the start of flash.  The
    /// linker script should also name it with `EXTERN`, so that it (and
    /// everything it points at) survives garbage collection.
    #[used]
    #[no_mangle]
    #[link_section = ".vector_table"]
    pub static VECTOR_TABLE: VectorTable =
        VectorTable::new(&raw const __stack_top, Reset, ReservedHandler)
            .exception(Exception::NMI, NMI)
            .exception(Exception::HardFault, HardFault)
            .exception(Exception::SVCall, SVCall)
            .exception(Exception::PendSV, PendSV)
            .exception(Exception::SysTick, SysTick)
            .interrupt(Interrupt::INT_GROUP0, INT_GROUP0)
            .interrupt(Interrupt::INT_GROUP1, INT_GROUP1)
            .interrupt(Interrupt::TIMG8, TIMG8)
            .interrupt(Interrupt::UART3, UART3)
            .interrupt(Interrupt::ADC0, ADC0)
            .interrupt(Interrupt::ADC1, ADC1)
            .interrupt(Interrupt::CANFD0, CANFD0)
            .interrupt(Interrupt::DAC0, DAC0)
            .interrupt(Interrupt::SPI0, SPI0)
            .interrupt(Interrupt::SPI1, SPI1)
            .interrupt(Interrupt::UART1, UART1)
            .interrupt(Interrupt::UART2, UART2)
            .interrupt(Interrupt::UART0, UART0)
            .interrupt(Interrupt::TIMG0, TIMG0)
            .interrupt(Interrupt::TIMG6, TIMG6)
            .interrupt(Interrupt::TIMA0, TIMA0)
            .interrupt(Interrupt::TIMA1, TIMA1)
            .interrupt(Interrupt::TIMG7, TIMG7)
            .interrupt(Interrupt::TIMG12, TIMG12)
            .interrupt(Interrupt::I2C0, I2C0)
            .interrupt(Interrupt::I2C1, I2C1)
            .interrupt(Interrupt::AES, AES)
            .interrupt(Interrupt::RTC, RTC)
            .interrupt(Interrupt::DMA, DMA);
}
