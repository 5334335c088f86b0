use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let output_file = PathBuf::from(&crate_dir)
        .join("../../Vec3fFFI.h")
        .display()
        .to_string();

    // Generate C bindings using cbindgen. The vector struct lives in the
    // core crate, so dependency parsing must be on for it to be emitted.
    cbindgen::Builder::new()
        .with_crate(crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("VEC3F_FFI_H")
        .with_documentation(true)
        .with_pragma_once(false)
        .with_parse_deps(true)
        .with_parse_include(&["vec3f-core"])
        .generate()
        .expect("Unable to generate C bindings")
        .write_to_file(output_file);

    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=../core/src/vector3.rs");
}
