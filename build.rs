use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // Only the firmware build needs a linker script; host builds and tests
    // link normally.
    if env::var_os("CARGO_FEATURE_TM4C129X").is_some() {
        let out = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
        fs::write(out.join("memory.x"), include_bytes!("memory.x"))
            .expect("failed to copy memory.x into OUT_DIR");
        println!("cargo:rustc-link-search={}", out.display());

        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}
