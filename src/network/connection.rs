//! Connection Handler
//!
//! Drives the codec over one server connection.

use std::io::{BufReader, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};

use crate::config::ClientConfig;
use crate::error::{KvError, Result};
use crate::protocol::{read_reply_with, write_command, DecodeOptions, Reply};

/// A single client connection
///
/// Owns its stream; every operation takes `&mut self`, so one command is
/// written and its reply fully read before the next can start.
pub struct Connection<S: Read + Write> {
    /// Stream, buffered on the read side. Writes go straight through.
    stream: BufReader<S>,

    /// Limits applied while decoding replies
    options: DecodeOptions,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection<TcpStream> {
    /// Open a TCP connection using the address and timeouts in `config`
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let addr = config.addr();
        let stream = match config.connect_timeout() {
            Some(timeout) => connect_with_timeout(&addr, timeout)?,
            None => TcpStream::connect(&addr)?,
        };

        // Disable Nagle's algorithm; every command is a single small write
        stream.set_nodelay(true)?;
        stream.set_read_timeout(config.read_timeout())?;
        stream.set_write_timeout(config.write_timeout())?;

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or(addr);

        tracing::debug!("Connected to {}", peer_addr);

        Ok(Self {
            stream: BufReader::new(stream),
            options: config.decode_options(),
            peer_addr,
        })
    }
}

fn connect_with_timeout(addr: &str, timeout: std::time::Duration) -> Result<TcpStream> {
    let mut last_err = None;
    for socket_addr in addr.to_socket_addrs()? {
        match TcpStream::connect_timeout(&socket_addr, timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) => {
                tracing::debug!("Connect to {} failed: {}", socket_addr, e);
                last_err = Some(e);
            }
        }
    }

    Err(match last_err {
        Some(e) => KvError::Io(e),
        None => KvError::Config(format!("{addr} did not resolve to any address")),
    })
}

impl<S: Read + Write> Connection<S> {
    /// Wrap an already established stream
    pub fn new(stream: S) -> Self {
        Self::with_options(stream, DecodeOptions::default())
    }

    pub fn with_options(stream: S, options: DecodeOptions) -> Self {
        Self {
            stream: BufReader::new(stream),
            options,
            peer_addr: "stream".to_string(),
        }
    }

    /// Send a command and wait for its reply
    ///
    /// A server-reported error comes back as `Ok(Reply::Error(..))`.
    pub fn execute<A: AsRef<[u8]>>(&mut self, args: &[A]) -> Result<Reply> {
        self.send(args)?;
        self.receive()
    }

    /// Encode and write one command
    pub fn send<A: AsRef<[u8]>>(&mut self, args: &[A]) -> Result<()> {
        if let Some(name) = args.first() {
            tracing::trace!(
                "Sending {} ({} args) to {}",
                String::from_utf8_lossy(name.as_ref()),
                args.len(),
                self.peer_addr
            );
        }
        write_command(self.stream.get_mut(), args)
    }

    /// Read one complete reply
    pub fn receive(&mut self) -> Result<Reply> {
        match read_reply_with(&mut self.stream, &self.options) {
            Ok(reply) => {
                tracing::trace!("Received {} reply from {}", reply.kind(), self.peer_addr);
                Ok(reply)
            }
            Err(e) => {
                tracing::warn!("Error reading from {}: {}", self.peer_addr, e);
                Err(e.into())
            }
        }
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }

    /// Borrow the underlying stream
    pub fn get_ref(&self) -> &S {
        self.stream.get_ref()
    }
}
