//! kvwire CLI Client
//!
//! Interactive shell for a Redis-compatible key-value server.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use kvwire::protocol::render;
use kvwire::shell::{Input, Session};
use kvwire::{ClientConfig, Connection};
use tracing_subscriber::{fmt, EnvFilter};

/// kvwire CLI
#[derive(Parser, Debug)]
#[command(name = "kvwire-cli")]
#[command(about = "Interactive client for Redis-compatible key-value servers")]
#[command(version)]
struct Args {
    /// Server IP address or host name
    #[arg(long, default_value = "127.0.0.1")]
    ip: String,

    /// Server port
    #[arg(long, default_value = "6379")]
    port: u16,

    /// Connect timeout in milliseconds (0 = wait forever)
    #[arg(long, default_value = "5000")]
    connect_timeout_ms: u64,

    /// Socket read timeout in milliseconds (0 = wait forever)
    #[arg(long, default_value = "0")]
    read_timeout_ms: u64,

    /// Socket write timeout in milliseconds (0 = wait forever)
    #[arg(long, default_value = "0")]
    write_timeout_ms: u64,

    /// Reject reply lines longer than this many bytes
    #[arg(long)]
    max_line_length: Option<usize>,
}

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with replies
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = ClientConfig::builder()
        .host(&args.ip)
        .port(args.port)
        .connect_timeout_ms(args.connect_timeout_ms)
        .read_timeout_ms(args.read_timeout_ms)
        .write_timeout_ms(args.write_timeout_ms)
        .max_line_length(args.max_line_length)
        .build();

    let addr = config.addr();
    tracing::info!("kvwire-cli v{} connecting to {}", kvwire::VERSION, addr);

    let mut connection = match Connection::connect(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Could not connect to server {addr}: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run_repl(&mut connection, Session::new(addr)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Read-eval-print loop; returns on `quit`, end of input, or a fatal error
fn run_repl<S: io::Read + io::Write>(
    connection: &mut Connection<S>,
    mut session: Session,
) -> kvwire::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{}", session.prompt())?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        let args = match Session::parse_input(&line) {
            Ok(Input::Command(args)) => args,
            Ok(Input::Empty) => continue,
            Ok(Input::Quit) => return Ok(()),
            Err(e) => {
                writeln!(stdout, "error command: {e}\nPlease input a valid command.")?;
                continue;
            }
        };

        match connection.execute(&args) {
            Ok(reply) => {
                writeln!(stdout, "{}", render(&reply))?;
                session.observe(&args, &reply);
            }
            Err(e) if e.is_connection_fatal() => return Err(e),
            Err(e) => writeln!(stdout, "{e}")?,
        }
    }
}
