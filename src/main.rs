/// Binary entrypoint for the `pngspeak` executable.
///
/// Keeps the binary thin — all launcher logic lives in the `pngspeak_lib`
/// crate so unit tests can import library functions directly. The exit code
/// returned by `run()` (usually the encoder's own) becomes our exit code.
fn main() {
    std::process::exit(pngspeak_lib::run());
}
