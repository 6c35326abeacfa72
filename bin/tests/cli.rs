use assert_cmd::Command;

fn run() -> std::process::Output {
    Command::cargo_bin("hostarch")
        .expect("binary should build")
        .output()
        .expect("binary should run")
}

#[test]
fn reports_one_architecture_line() {
    let output = run();
    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    let line = lines.next().expect("one line of output");
    assert_eq!(lines.next(), None);

    let value = line
        .strip_prefix("CPU architecture: ")
        .expect("line should carry the label");
    assert!(!value.is_empty());
}

#[test]
fn repeated_runs_report_the_same_machine() {
    let first = run();
    let second = run();
    assert_eq!(first.stdout, second.stdout);
}
