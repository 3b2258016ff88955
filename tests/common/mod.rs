//! Shared test infrastructure for integration tests.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::ffi::OsStr;
use std::process::{Command, Output};
use std::thread;
use std::time::Duration;

/// A local HTTP server answering every request with one canned response.
pub struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    /// Serve `status` with a JSON `body` until the test process exits.
    pub fn respond(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
        let addr = listener.local_addr().expect("test server address");
        let response = format!(
            "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            reason(status),
            body.len()
        );
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else {
                    continue;
                };
                read_request_head(&mut stream);
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });
        Self { addr }
    }

    /// Accept connections but never answer them.
    pub fn silent() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
        let addr = listener.local_addr().expect("test server address");
        thread::spawn(move || {
            let mut held = Vec::new();
            for stream in listener.incoming().flatten() {
                held.push(stream);
            }
        });
        Self { addr }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// A loopback URL with nothing listening behind it.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let addr = listener.local_addr().expect("probe port address");
    drop(listener);
    format!("http://{addr}/")
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

fn read_request_head(stream: &mut TcpStream) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut head = Vec::new();
    let mut buf = [0u8; 512];
    while !head.windows(4).any(|window| window == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
}

/// Temporary workspace holding a config, an input file, and an output sink.
pub struct ActionFixture {
    pub dir: tempfile::TempDir,
}

impl ActionFixture {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("input.txt"), "original").expect("write input file");
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a config pointing at this fixture's files and `api_url`.
    pub fn write_config(&self, api_url: &str, extra: &str) -> PathBuf {
        let config = format!(
            r#"input_text = "the cat sat"
find_word = "cat"
replace_word = "dog"
number_list = [1, 2, 3, 4]
input_file = {input:?}
output_file = {output:?}
append_text = "appended"
api_url = {api_url:?}
{extra}
"#,
            input = self.path("input.txt").display().to_string(),
            output = self.path("output.txt").display().to_string(),
        );
        let path = self.path("action.toml");
        std::fs::write(&path, config).expect("write config");
        path
    }

    pub fn github_output(&self) -> PathBuf {
        self.path("github_output")
    }

    /// Contents of the output sink, or empty when nothing was written.
    pub fn outputs(&self) -> String {
        std::fs::read_to_string(self.github_output()).unwrap_or_default()
    }
}

/// Run the action binary against `config`, publishing to `github_output`.
pub fn run_action_binary(config: &Path, github_output: &Path) -> Output {
    run_action_binary_in(Path::new("."), config, github_output)
}

/// Run the action binary from `cwd` with the given environment values.
pub fn run_action_binary_in(
    cwd: &Path,
    config: impl AsRef<OsStr>,
    github_output: impl AsRef<OsStr>,
) -> Output {
    Command::new(env!("CARGO_BIN_EXE_setup-my-action"))
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env("INPUT_CONFIG_PATH", config)
        .env("GITHUB_OUTPUT", github_output)
        .output()
        .expect("run setup-my-action")
}
