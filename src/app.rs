//! The bare-metal side of the demo.

use core::sync::atomic::{AtomicU32, Ordering};

use cortex_m::peripheral::{syst::SystClkSource, Peripherals, NVIC};
use mspm0_rt::mspm0g3507::Interrupt;

#[cfg(feature = "defmt")]
use defmt_rtt as _;

// Runtime entry: initializes .data and .bss, then calls `demo_main`.
core::arch::global_asm!(include_str!("../runtime.s"));

macro_rules! info {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)*);
    };
}

/// MCLK comes out of reset running from SYSOSC at 32 MHz; this gives a 1 ms
/// tick.
const SYSTICK_RELOAD: u32 = 32_000 - 1;

/// Milliseconds since boot.  Only `tick` writes it.
static TICKS: AtomicU32 = AtomicU32::new(0);

#[no_mangle]
pub extern "C" fn demo_main() -> ! {
    let Some(mut p) = Peripherals::take() else {
        // Someone took them before us.  Nothing sensible to do.
        loop {
            cortex_m::asm::bkpt();
        }
    };

    info!(
        "booted, vector table at {=usize:#x}",
        &mspm0_rt::mspm0g3507::vectors::VECTOR_TABLE as *const _ as usize
    );

    p.SYST.set_clock_source(SystClkSource::Core);
    p.SYST.set_reload(SYSTICK_RELOAD);
    p.SYST.clear_current();
    p.SYST.enable_interrupt();
    p.SYST.enable_counter();

    // UART0 itself is left unconfigured; unmasking it just makes its vector
    // live.
    unsafe { NVIC::unmask(Interrupt::UART0) };

    loop {
        cortex_m::asm::wfi();
    }
}

fn tick() {
    // No read-modify-write atomics on ARMv6-M, but we're the only writer.
    let now = TICKS.load(Ordering::Relaxed).wrapping_add(1);
    TICKS.store(now, Ordering::Relaxed);

    if now % 1000 == 0 {
        info!("up {=u32} s", now / 1000);
    }
}

fn uart0() {
    info!("UART0 at {=u32} ms", TICKS.load(Ordering::Relaxed));
}

mspm0_rt::exception!(SysTick, tick);
mspm0_rt::interrupt!(UART0, uart0);
