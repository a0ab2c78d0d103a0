//! Where each vector of the demo image ends up.

use mspm0_rt::arm_m::exc::Exception;
use mspm0_rt::mspm0g3507::{Interrupt, Vector};

/// Vectors the demo defines handlers for.  Keep in sync with the
/// `exception!`/`interrupt!` invocations in `app`.
pub const CLAIMED: [Vector; 2] = [
    Vector::Exception(Exception::SysTick),
    Vector::Interrupt(Interrupt::UART0),
];

/// Who ends up handling `v` once the image is linked.
pub fn routed_to(v: Vector) -> &'static str {
    match v {
        Vector::StackPointer => "(data)",
        Vector::Reset => "mspm0-rt",
        _ if CLAIMED.contains(&v) => "application",
        _ => "DefaultHandler",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_vectors_go_to_the_application() {
        let claimed: Vec<u8> = Vector::all()
            .filter(|v| routed_to(*v) == "application")
            .map(Vector::number)
            .collect();
        assert_eq!(claimed, [15, 31]);
    }

    #[test]
    fn everything_else_but_sp_and_reset_defaults() {
        let defaulted = Vector::all()
            .filter(|v| routed_to(*v) == "DefaultHandler")
            .count();
        assert_eq!(defaulted, 48 - 2 - CLAIMED.len());
    }

    #[test]
    fn claimed_vectors_are_overridable() {
        assert!(CLAIMED.iter().all(|v| v.is_overridable()));
    }

    #[test]
    fn app_claims_match_the_list() {
        let app = include_str!("app.rs");
        for v in CLAIMED.iter() {
            let call = match v {
                Vector::Exception(e) => format!("mspm0_rt::exception!({},", e.name()),
                Vector::Interrupt(i) => format!("mspm0_rt::interrupt!({},", i.name()),
                _ => unreachable!(),
            };
            assert!(app.contains(&call), "app doesn't claim {}", v);
        }
        assert_eq!(app.matches("mspm0_rt::exception!(").count()
                   + app.matches("mspm0_rt::interrupt!(").count(),
                   CLAIMED.len());
    }
}
