use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    // Only bare-metal builds get linked against `link.x`; the hosted build is
    // just the vector map printer.
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("none") {
        // `link.x` and `runtime.s` live at the crate root; `device.x` is on
        // the search path courtesy of mspm0-rt's build script.
        let root = env::var("CARGO_MANIFEST_DIR")?;
        println!("cargo:rustc-link-search={}", root);
        println!("cargo:rustc-link-arg-bins=-Tlink.x");

        if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
            println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
        }
    }

    println!("cargo:rerun-if-changed=link.x");
    println!("cargo:rerun-if-changed=runtime.s");
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
