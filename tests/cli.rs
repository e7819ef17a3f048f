use std::process::Command;

fn infobox(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_infobox"))
        .args(args)
        .output()
        .expect("failed to run infobox")
}

#[cfg(all(feature = "native", unix, not(target_os = "macos")))]
fn infobox_without_display(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_infobox"))
        .args(args)
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .output()
        .expect("failed to run infobox")
}

#[test]
fn no_arguments_fails_before_any_dialog() {
    let output = infobox(&[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing argument <MESSAGE>"), "{stderr}");
}

#[test]
fn one_argument_fails_before_any_dialog() {
    let output = infobox(&["Hello"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing argument <TITLE>"), "{stderr}");
}

#[cfg(all(feature = "native", unix, not(target_os = "macos")))]
#[test]
fn double_dash_reaches_the_presenter() {
    let output = infobox_without_display(&["--", "x"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("missing argument"), "{stderr}");
    assert!(stderr.contains("cannot show dialog"), "{stderr}");
}

#[cfg(all(feature = "native", unix, not(target_os = "macos")))]
#[test]
fn no_display_fails_without_output() {
    let output = infobox_without_display(&["Hello", "Greeting"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot show dialog"), "{stderr}");
}
