//! Minimal passive-mode FTP server for integration tests.
//!
//! Serves files from an in-memory map and understands just enough of the
//! protocol for a client to log in, change directory and retrieve. Every
//! command line received is recorded. Retrievals can be told to stall: the
//! server sends half the body, goes quiet, and only then replies 426.

use std::collections::BTreeMap;
use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default)]
pub struct FtpServerOptions {
    /// How many RETR commands (counted across all sessions) stall.
    pub stalled_retrievals: usize,
    /// How long a stalled data connection stays silent before the 426 reply.
    pub stall: Duration,
}

struct State {
    files: BTreeMap<String, Vec<u8>>,
    opts: FtpServerOptions,
    retrievals: AtomicUsize,
    commands: Mutex<Vec<String>>,
}

impl State {
    fn has_dir(&self, dir: &str) -> bool {
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        self.files.keys().any(|path| path.starts_with(&prefix))
    }
}

pub struct FtpServer {
    /// `ftp://127.0.0.1:<port>`
    pub address: String,
    state: Arc<State>,
}

impl FtpServer {
    /// Command lines received so far, in arrival order.
    pub fn commands(&self) -> Vec<String> {
        self.state.commands.lock().unwrap().clone()
    }

    /// Just the command verbs, e.g. `["USER", "PASS", "TYPE", ...]`.
    pub fn verbs(&self) -> Vec<String> {
        self.commands()
            .iter()
            .map(|c| c.split(' ').next().unwrap_or_default().to_string())
            .collect()
    }
}

/// Starts the server in a background thread; it runs until the process exits.
pub fn start(files: &[(&str, &[u8])], opts: FtpServerOptions) -> FtpServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let state = Arc::new(State {
        files: files
            .iter()
            .map(|(path, body)| (path.to_string(), body.to_vec()))
            .collect(),
        opts,
        retrievals: AtomicUsize::new(0),
        commands: Mutex::new(Vec::new()),
    });
    let shared = Arc::clone(&state);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let state = Arc::clone(&shared);
            thread::spawn(move || {
                let _ = handle(stream, &state);
            });
        }
    });
    FtpServer {
        address: format!("ftp://127.0.0.1:{}", port),
        state,
    }
}

fn reply(out: &mut TcpStream, line: &str) -> io::Result<()> {
    out.write_all(format!("{}\r\n", line).as_bytes())?;
    out.flush()
}

fn handle(stream: TcpStream, state: &State) -> io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut out = stream;
    reply(&mut out, "220 test server ready")?;

    let mut cwd = "/".to_string();
    let mut passive: Option<TcpListener> = None;
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim_end();
        let (verb, arg) = line.split_once(' ').unwrap_or((line, ""));
        let verb = verb.to_ascii_uppercase();
        state.commands.lock().unwrap().push(line.to_string());

        match verb.as_str() {
            "USER" => reply(&mut out, "331 password required")?,
            "PASS" => reply(&mut out, "230 logged in")?,
            "TYPE" => reply(&mut out, "200 type set")?,
            "CWD" => {
                if state.has_dir(arg) {
                    cwd = arg.trim_end_matches('/').to_string();
                    reply(&mut out, "250 ok")?;
                } else {
                    reply(&mut out, "550 no such directory")?;
                }
            }
            "PASV" => {
                let data = TcpListener::bind("127.0.0.1:0")?;
                let port = data.local_addr()?.port();
                passive = Some(data);
                reply(
                    &mut out,
                    &format!(
                        "227 Entering Passive Mode (127,0,0,1,{},{})",
                        port >> 8,
                        port & 0xff
                    ),
                )?;
            }
            "RETR" => retrieve(&mut out, passive.take(), state, &cwd, arg)?,
            "QUIT" => {
                reply(&mut out, "221 bye")?;
                return Ok(());
            }
            _ => reply(&mut out, "502 command not implemented")?,
        }
    }
}

fn retrieve(
    out: &mut TcpStream,
    passive: Option<TcpListener>,
    state: &State,
    cwd: &str,
    name: &str,
) -> io::Result<()> {
    let path = format!("{}/{}", cwd, name);
    let Some(body) = state.files.get(&path) else {
        return reply(out, "550 no such file");
    };
    let Some(passive) = passive else {
        return reply(out, "425 use PASV first");
    };
    let n = state.retrievals.fetch_add(1, Ordering::SeqCst);
    reply(out, "150 opening data connection")?;
    let (mut data, _) = passive.accept()?;
    if n < state.opts.stalled_retrievals {
        data.write_all(&body[..body.len() / 2])?;
        thread::sleep(state.opts.stall);
        drop(data);
        return reply(out, "426 transfer aborted");
    }
    data.write_all(body)?;
    drop(data);
    reply(out, "226 transfer complete")
}
