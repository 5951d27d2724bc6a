//! [`Transport`] over a synchronous FTP session (`suppaftp`).

use std::io::{self, Read, Write};
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use anyhow::{Context, Result};
use suppaftp::types::FileType;
use suppaftp::{FtpError, FtpStream};

use super::transport::{Transport, TransportError};
use crate::config::ServerConfig;

/// FTP reply 550: requested action not taken (file/directory unavailable).
const REPLY_UNAVAILABLE: u32 = 550;

/// Which operation an FTP error came from; decides how 550 is reported.
#[derive(Debug, Clone, Copy)]
enum Op<'a> {
    Login,
    Cwd(&'a str),
    List,
    Retr(&'a str),
}

/// An FTP control connection logged in and switched to binary mode.
///
/// Keeps its [`ServerConfig`] so [`Transport::reset`] can open a fresh session.
pub struct FtpTransport {
    server: ServerConfig,
    stream: FtpStream,
}

impl FtpTransport {
    /// Connects to `server`, logs in and selects binary transfers.
    pub fn connect(server: &ServerConfig) -> Result<Self> {
        let addr = server.socket_addr()?;
        tracing::info!("connecting to ftp server {}", addr);
        let stream = open_session(server, &addr)
            .with_context(|| format!("connect to {} as {}", addr, server.user))?;
        Ok(Self {
            server: server.clone(),
            stream,
        })
    }

    /// Sends QUIT and drops the connection.
    pub fn quit(mut self) -> Result<()> {
        self.stream.quit().context("ftp quit")?;
        Ok(())
    }
}

fn resolve(addr: &str) -> Result<SocketAddr, TransportError> {
    addr.to_socket_addrs()
        .map_err(TransportError::Connection)?
        .next()
        .ok_or_else(|| {
            TransportError::Connection(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} resolved to no address", addr),
            ))
        })
}

fn open_session(server: &ServerConfig, addr: &str) -> Result<FtpStream, TransportError> {
    let timeout = server.timeout();
    let mut stream = FtpStream::connect_timeout(resolve(addr)?, timeout)
        .map_err(|e| map_ftp_error(e, Op::Login))?;
    set_timeouts(stream.get_ref(), timeout)?;
    stream
        .login(server.user.as_str(), server.password.as_str())
        .map_err(|e| map_ftp_error(e, Op::Login))?;
    stream
        .transfer_type(FileType::Binary)
        .map_err(|e| map_ftp_error(e, Op::Login))?;
    Ok(stream)
}

fn set_timeouts(socket: &std::net::TcpStream, timeout: Duration) -> Result<(), TransportError> {
    socket
        .set_read_timeout(Some(timeout))
        .and_then(|_| socket.set_write_timeout(Some(timeout)))
        .map_err(TransportError::Connection)
}

impl Transport for FtpTransport {
    fn change_dir(&mut self, path: &str) -> Result<(), TransportError> {
        tracing::debug!("CWD {}", path);
        self.stream
            .cwd(path)
            .map_err(|e| map_ftp_error(e, Op::Cwd(path)))
    }

    fn list_dir(&mut self) -> Result<Vec<String>, TransportError> {
        self.stream
            .nlst(None)
            .map_err(|e| map_ftp_error(e, Op::List))
    }

    fn retrieve(&mut self, filename: &str, sink: &mut dyn Write) -> Result<u64, TransportError> {
        tracing::debug!("RETR {}", filename);
        let mut data = self
            .stream
            .retr_as_stream(filename)
            .map_err(|e| map_ftp_error(e, Op::Retr(filename)))?;
        set_timeouts(data.get_ref(), self.server.timeout())?;
        // On a copy error the final transfer reply stays unread; the session
        // is only usable again after `reset`.
        let copied = copy_into(&mut data, sink)?;
        self.stream
            .finalize_retr_stream(data)
            .map_err(|e| map_ftp_error(e, Op::Retr(filename)))?;
        Ok(copied)
    }

    fn reset(&mut self) -> Result<(), TransportError> {
        let addr = self.server.socket_addr().map_err(|e| {
            TransportError::Connection(io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))
        })?;
        tracing::info!("reconnecting to ftp server {}", addr);
        // The old session is dropped without QUIT: its control stream may be
        // out of step or dead.
        self.stream = open_session(&self.server, &addr)?;
        Ok(())
    }
}

/// Copies the data stream into `sink`. Read failures are connection
/// problems; write failures are local and reported as [`TransportError::Io`].
fn copy_into(reader: &mut dyn Read, sink: &mut dyn Write) -> Result<u64, TransportError> {
    let mut buf = [0u8; 64 * 1024];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(map_io_error(e)),
        };
        if n == 0 {
            break;
        }
        sink.write_all(&buf[..n]).map_err(TransportError::Io)?;
        total += n as u64;
    }
    Ok(total)
}

/// Socket read timeouts surface as `WouldBlock` on Unix and `TimedOut` on Windows.
fn map_io_error(e: io::Error) -> TransportError {
    match e.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TransportError::Timeout,
        _ => TransportError::Connection(e),
    }
}

fn map_ftp_error(err: FtpError, op: Op<'_>) -> TransportError {
    match err {
        FtpError::ConnectionError(e) => map_io_error(e),
        FtpError::UnexpectedResponse(resp) => {
            let code = resp.status.code();
            match (code, op) {
                (REPLY_UNAVAILABLE, Op::Cwd(path)) => TransportError::DirectoryUnavailable {
                    path: path.to_string(),
                },
                (REPLY_UNAVAILABLE, Op::Retr(name)) => TransportError::FileUnavailable {
                    name: name.to_string(),
                },
                _ => TransportError::Rejected {
                    code,
                    message: String::from_utf8_lossy(&resp.body).trim().to_string(),
                    transient: (400..500).contains(&code),
                },
            }
        }
        other => TransportError::Rejected {
            code: 0,
            message: other.to_string(),
            transient: false,
        },
    }
}
