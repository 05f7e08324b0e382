use std::process::{Command, Output};

fn wordgen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wordgen"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn assert_fifteen_words(output: Output) {
    assert!(output.status.success(), "status: {:?}", output.status);
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 15);
    for line in lines {
        assert!(!line.is_empty());
        assert!(line.len() == 4 || line.len() == 6, "Bad word '{}'", line);
        assert!(line.chars().all(|c| c.is_ascii_alphabetic()), "Bad word '{}'", line);
    }
}

#[test]
fn test_prints_fifteen_words() {
    assert_fifteen_words(wordgen().output().unwrap());
}

#[test]
fn test_arguments_are_ignored() {
    assert_fifteen_words(wordgen().args(["extra", "--seed", "42"]).output().unwrap());
}
