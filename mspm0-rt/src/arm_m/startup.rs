//! Reset and default exception handlers for ARMv6-M bare metal targets.
//!
//! `Reset` does nothing but call the runtime entry point, which the
//! application (or its C runtime) provides under the symbol
//! `__mspm0rt_entry`.  That function is responsible for everything else:
//! initializing `.data`, zeroing `.bss`, clocks, and eventually `main`.  It
//! must not return; if it does, `Reset` traps.
//!
//! Any vector the application doesn't claim is bound to `DefaultHandler` by the
//! `PROVIDE` lines in `device.x`.  To claim one, define a handler with the
//! same name, preferably through the macros here so typos are caught:
//!
//! ```ignore
//! fn tick() {
//!     // code here
//! }
//!
//! mspm0_rt::exception!(SysTick, tick);
//! ```

// `Reset` and `DefaultHandler` are written in assembly so that nothing the
// compiler might generate can sit between the runtime entry returning and the
// trap.
#[cfg(all(target_arch = "arm", target_os = "none"))]
core::arch::global_asm!(include_str!("startup.s"));

#[cfg(target_os = "none")]
#[allow(non_snake_case)]
extern "C" {
    /// The reset stub defined in `startup.s`.
    pub fn Reset() -> !;

    /// The shared fallback for unclaimed vectors, defined in `startup.s`.
    pub fn DefaultHandler();
}

/// Defines the handler for one of the architectural exceptions, replacing
/// `DefaultHandler` for that vector at link time.
///
/// Syntax:
///
/// ```ignore
/// fn on_svc() {
///     dispatch_syscall()
/// }
///
/// mspm0_rt::exception!(SVCall, on_svc);
/// ```
///
/// The name must be one of the variants of `arm_m::exc::Exception`; anything
/// else fails to compile.
#[macro_export]
macro_rules! exception {
    ($name:ident, $handler:path) => {
        #[doc(hidden)]
        #[no_mangle]
        #[allow(non_snake_case)]
        pub unsafe extern "C" fn $name() {
            const _: $crate::arm_m::exc::Exception =
                $crate::arm_m::exc::Exception::$name;

            let handler: fn() = $handler;
            handler()
        }
    };
}

/// Defines the handler for one of the device interrupts, replacing
/// `DefaultHandler` for that vector at link time.
///
/// Syntax:
///
/// ```ignore
/// fn on_uart() {
///     drain_fifo()
/// }
///
/// mspm0_rt::interrupt!(UART0, on_uart);
/// ```
///
/// The name must be one of the variants of the device's `Interrupt`
/// enumeration; anything else fails to compile.
#[cfg(feature = "soc-mspm0g3507")]
#[macro_export]
macro_rules! interrupt {
    ($name:ident, $handler:path) => {
        #[doc(hidden)]
        #[no_mangle]
        #[allow(non_snake_case)]
        pub unsafe extern "C" fn $name() {
            const _: $crate::mspm0g3507::irq::Interrupt =
                $crate::mspm0g3507::irq::Interrupt::$name;

            let handler: fn() = $handler;
            handler()
        }
    };
}
