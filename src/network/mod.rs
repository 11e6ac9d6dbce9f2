//! Network Module
//!
//! Client side of a server connection.
//!
//! ## Model
//! - One blocking stream per connection
//! - Strict request/reply alternation, no pipelining
//! - Timeouts come from [`ClientConfig`](crate::config::ClientConfig)

mod connection;

pub use connection::Connection;
