//! Process-level shutdown behaviour of the stdio server.

#![cfg(all(unix, feature = "stdio"))]

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use serde_json::{Value, json};

const REPLY_TIMEOUT: Duration = Duration::from_secs(10);
const EXIT_TIMEOUT: Duration = Duration::from_secs(5);

fn spawn_server() -> Child {
    Command::new(env!("CARGO_BIN_EXE_polypizza_mcp_server"))
        .env("POLYPIZZA_AUTH_TOKEN", "test-token")
        .env("POLYPIZZA_API_BASE_URL", "http://127.0.0.1:1")
        .env("MCP_TRANSPORT", "stdio")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap()
}

/// Forward stdout lines to a channel so reads can time out.
fn stdout_lines(child: &mut Child) -> Receiver<String> {
    let stdout = child.stdout.take().unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in BufReader::new(stdout).lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn send(stdin: &mut ChildStdin, message: Value) {
    writeln!(stdin, "{message}").unwrap();
    stdin.flush().unwrap();
}

fn reply(lines: &Receiver<String>) -> Value {
    let line = lines.recv_timeout(REPLY_TIMEOUT).unwrap();
    serde_json::from_str(&line).unwrap()
}

#[test]
fn test_interrupt_exits_cleanly_with_stdin_open() {
    let mut child = spawn_server();
    let lines = stdout_lines(&mut child);
    let mut stdin = child.stdin.take().unwrap();

    send(
        &mut stdin,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "shutdown-test", "version": "0.0.0"}
            }
        }),
    );
    assert_eq!(reply(&lines)["id"], 1);

    send(&mut stdin, json!({"jsonrpc": "2.0", "method": "notifications/initialized"}));
    send(
        &mut stdin,
        json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "tools/call",
            "params": {"name": "nope", "arguments": {}}
        }),
    );
    assert_eq!(reply(&lines)["result"]["isError"], true);

    // Give the interrupt listener time to install after the handshake.
    thread::sleep(Duration::from_millis(300));

    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    let deadline = Instant::now() + EXIT_TIMEOUT;
    let exit = loop {
        if let Some(exit) = child.try_wait().unwrap() {
            break exit;
        }
        if Instant::now() >= deadline {
            child.kill().unwrap();
            panic!("server still running {EXIT_TIMEOUT:?} after SIGINT");
        }
        thread::sleep(Duration::from_millis(50));
    };

    // stdin is still open here; the process must not wait on it.
    drop(stdin);
    assert_eq!(exit.code(), Some(0));
}
