//! The binary's behavior before it takes over the terminal.

use std::io::ErrorKind;
use std::net::TcpListener;
use std::process::{Command, Stdio};

fn idc_admin(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_idc-admin"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run idc-admin")
}

#[test]
fn test_empty_credentials_exit_without_request() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to port 0");
    listener.set_nonblocking(true).unwrap();
    let endpoint = format!("http://{}/v1/server", listener.local_addr().unwrap());

    let output = idc_admin(&["--username", "", "--password", "", "--endpoint", &endpoint]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please provide both username and password"));
    assert!(stderr.contains("--username"));
    assert!(output.stdout.is_empty());

    let err = listener.accept().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WouldBlock);
}

#[test]
fn test_missing_password_exits_with_usage() {
    let output = idc_admin(&["--username", "ops"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please provide both username and password"));
    assert!(stderr.contains("--password"));
}
