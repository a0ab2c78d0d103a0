use std::{env, error::Error, fs::File, io::Write as _, path::PathBuf};

fn main() -> Result<(), Box<dyn Error>> {
    // build directory for this crate
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or("OUT_DIR not set")?);

    // put `device.x` in the build directory, where the application's linker
    // script can `INCLUDE` it
    File::create(out_dir.join("device.x"))?.write_all(include_bytes!("device.x"))?;
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=device.x");
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
