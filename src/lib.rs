/*!
 * Courier - two-call remote-procedure client
 *
 * Collects a numeric array and a message from the operator, has the array
 * sorted by a remote service, then delivers the message together with the
 * sender's network address to a remote echo service, all over a single
 * gRPC channel:
 * - Input collection from the terminal (array size, elements, message)
 * - Origin address resolution for the local host
 * - One channel, two sequential service calls, deterministic output
 * - Defensive validation of both service responses
 */

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod netaddr;
pub mod orchestrator;

// Re-export commonly used types
pub use config::{CourierConfig, LogLevel};
pub use error::{CourierError, Result};
pub use input::RunInput;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }
}
