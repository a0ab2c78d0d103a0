//! Checks `device.x` against the vectors the table expects the linker to
//! resolve.  A missing `PROVIDE` is a link failure for every application that
//! doesn't define that handler itself.

use mspm0_rt::arm_m::exc::Exception;
use mspm0_rt::mspm0g3507::{Interrupt, Vector};

const DEVICE_X: &str = include_str!("../device.x");

/// `(symbol, target)` for each `PROVIDE` line.
fn provides() -> Vec<(&'static str, &'static str)> {
    DEVICE_X
        .lines()
        .filter_map(|l| l.trim().strip_prefix("PROVIDE(")?.strip_suffix(");"))
        .filter_map(|binding| binding.split_once('='))
        .map(|(symbol, target)| (symbol.trim(), target.trim()))
        .collect()
}

#[test]
fn every_overridable_vector_is_provided() {
    let provided: Vec<&str> = provides().iter().map(|(s, _)| *s).collect();
    for v in Vector::all().filter(|v| v.is_overridable()) {
        assert!(provided.contains(&v.name()), "no PROVIDE for {}", v);
    }
    assert!(provided.contains(&"ReservedHandler"));
}

#[test]
fn everything_defaults_to_the_shared_handler() {
    for (symbol, target) in provides() {
        assert_eq!(target, "DefaultHandler", "{} is bound elsewhere", symbol);
    }
}

#[test]
fn nothing_extra_is_provided() {
    let expected = Exception::ALL.len() + Interrupt::ALL.len() + 1;
    assert_eq!(provides().len(), expected);
}

#[test]
fn no_symbol_is_provided_twice() {
    let mut symbols: Vec<&str> = provides().into_iter().map(|(s, _)| s).collect();
    symbols.sort_unstable();
    let before = symbols.len();
    symbols.dedup();
    assert_eq!(symbols.len(), before);
}

#[test]
fn reset_and_stack_are_not_weak() {
    for (symbol, _) in provides() {
        assert_ne!(symbol, Vector::Reset.name());
        assert_ne!(symbol, Vector::StackPointer.name());
        assert_ne!(symbol, "DefaultHandler");
    }
}
