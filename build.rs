//! Compiles the C comparison kernels when a usable C compiler is present.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");

    let compiler = cc::Build::new().try_get_compiler();
    let compiler = match compiler {
        Ok(c) => c,
        Err(e) => {
            println!("cargo:warning=No C compiler found ({}). C kernels disabled.", e);
            return;
        }
    };

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let compiler_name = if compiler.is_like_clang() {
        if target_os == "macos" {
            "Apple Clang"
        } else {
            "Clang"
        }
    } else if compiler.is_like_gnu() {
        "GCC"
    } else if compiler.is_like_msvc() {
        "MSVC"
    } else {
        println!("cargo:warning=C compiler is not GCC, Clang or MSVC. C kernels disabled.");
        return;
    };

    let rustflags = env::var("CARGO_ENCODED_RUSTFLAGS").unwrap_or_default();
    let native = rustflags.contains("target-cpu=native");

    let mut build = cc::Build::new();
    let c_files = match glob::glob("src/**/*.c") {
        Ok(paths) => paths.filter_map(|entry| entry.ok()),
        Err(e) => {
            println!("cargo:warning=Bad C source pattern ({}). C kernels disabled.", e);
            return;
        }
    };
    for file in c_files {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
    }

    // Keep strict IEEE semantics: the C kernel must sum in index order
    build.opt_level(3).flag_if_supported("-ffp-contract=off");
    if native {
        build.flag_if_supported("-march=native");
    }

    if let Err(e) = build.try_compile("lab_kernels_c") {
        println!("cargo:warning=C kernels failed to compile ({}). C kernels disabled.", e);
        return;
    }

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}
