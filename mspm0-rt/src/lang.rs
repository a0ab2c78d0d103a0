/// This will be invoked on `panic!`.  Applications can override this by
/// adding the `app-panic-handler` feature.
///
/// Like `DefaultHandler`, a panic halts where a debugger can find it.
#[cfg(all(target_os = "none", not(feature = "app-panic-handler")))]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {
        cortex_m::asm::bkpt();
    }
}
