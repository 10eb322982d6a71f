#![forbid(unsafe_code)]
#![deny(missing_docs, unused_must_use)]
#![warn(clippy::all, clippy::pedantic)]
//! Browser entry point for the backoffice dashboard.
//!
//! Native builds only explain how to produce the wasm bundle.

#[cfg(target_arch = "wasm32")]
fn main() {
    backoffice_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
const BUILD_HINT: &str = "backoffice-ui runs in the browser. Build the bundle with \
`trunk build` (target wasm32-unknown-unknown) and serve the dist/ directory.\n";

#[cfg(not(target_arch = "wasm32"))]
fn write_build_hint(out: &mut impl std::io::Write) -> std::io::Result<()> {
    out.write_all(BUILD_HINT.as_bytes())?;
    out.flush()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    write_build_hint(&mut std::io::stderr().lock())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn build_hint_names_the_wasm_target() {
        let mut out = Vec::new();
        write_build_hint(&mut out).expect("vec writer");
        let text = String::from_utf8(out).expect("utf-8 hint");
        assert!(text.contains("wasm32-unknown-unknown"));
        assert!(text.ends_with('\n'));
    }
}
