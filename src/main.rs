//! Demonstration application for the LP-MSPM0G3507 LaunchPad.
//!
//! On the board, this claims exactly two vectors, SysTick and UART0, and leaves
//! every other one to `DefaultHandler`.  On a hosted target it prints the
//! resulting vector map instead.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod app;

#[cfg(not(target_os = "none"))]
mod map;

#[cfg(not(target_os = "none"))]
fn main() {
    use mspm0_rt::mspm0g3507::Vector;

    for v in Vector::all() {
        println!("{:<24} -> {}", v.to_string(), map::routed_to(v));
    }
}
