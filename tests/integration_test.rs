use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;

#[cfg(unix)]
fn write_fake_encoder(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let script = dir.join(".pngspeak");
    fs::write(&script, body).expect("write fake encoder");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).expect("chmod fake encoder");
    script
}

#[test]
fn missing_arguments_print_usage_and_exit_1() {
    let bin = assert_cmd::cargo::cargo_bin!("pngspeak");
    let out = Command::new(&bin).output().expect("run pngspeak");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {}", stderr);

    let out = Command::new(&bin).arg("only-input").output().expect("run pngspeak");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
}

#[test]
fn help_and_version_print_to_stdout_and_exit_0() {
    let bin = assert_cmd::cargo::cargo_bin!("pngspeak");

    let out = Command::new(&bin).arg("--help").output().expect("run pngspeak --help");
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Usage"), "stdout was: {}", stdout);

    let out = Command::new(&bin).arg("--version").output().expect("run pngspeak --version");
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("pngspeak"));
}

#[cfg(unix)]
#[test]
fn forwards_bytes_and_canonical_flags() {
    // The fake encoder records its argv and copies stdin to stdout, so one run
    // checks both the flag vector and the redirection contract.
    let dir = tempfile::tempdir().expect("tempdir");
    let args_log = dir.path().join("args.log");
    let script = write_fake_encoder(
        dir.path(),
        &format!("#!/bin/sh\necho \"$@\" > {}\ncat\n", args_log.display()),
    );

    let input = dir.path().join("in.bin");
    let output = dir.path().join("out.png");
    let payload: Vec<u8> = (0u16..512).map(|i| (i % 251) as u8).collect();
    fs::write(&input, &payload).expect("write input");

    let bin = assert_cmd::cargo::cargo_bin!("pngspeak");
    let mut cmd = Command::new(&bin);
    cmd.arg(&input).arg(&output).arg("--encoder").arg(&script);
    cmd.assert().success();

    assert_eq!(fs::read(&output).expect("read output"), payload);
    let logged = fs::read_to_string(&args_log).expect("read args log");
    assert_eq!(logged.trim(), "-W 16 -uw 128 -uh 4096");
}

#[cfg(unix)]
#[test]
fn encoder_failure_propagates_exit_code() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = write_fake_encoder(dir.path(), "#!/bin/sh\nexit 3\n");
    let input = dir.path().join("in.bin");
    fs::write(&input, b"x").expect("write input");

    let bin = assert_cmd::cargo::cargo_bin!("pngspeak");
    let out = Command::new(&bin)
        .arg(&input)
        .arg(dir.path().join("out.png"))
        .arg("--encoder")
        .arg(&script)
        .output()
        .expect("run pngspeak");
    assert_eq!(out.status.code(), Some(3));
}

#[test]
fn integration_params_and_locate() {
    // Library-level sanity: default params render the canonical flag vector
    // and an explicit encoder path is honored as-is.
    let args = pngspeak_lib::encoder::EncodeParams::default().to_args();
    assert_eq!(args, ["-W", "16", "-uw", "128", "-uh", "4096"]);
    let p = std::path::Path::new("/tmp/.pngspeak");
    assert_eq!(pngspeak_lib::locate::encoder_path(Some(p)).expect("locate"), p);
}
