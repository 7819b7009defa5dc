//! Courier Connect: client-side gRPC connectivity for the courier client.
//!
//! A [`RemoteCourier`] owns a single channel to the remote endpoint and
//! exposes both service contracts over it:
//!
//! - **SortService.SortArray**: returns the request values in ascending order
//! - **MessageService.SendMessage**: echoes the message text and origin address
//!
//! The [`CourierService`] trait is the seam the orchestrator calls through,
//! so tests can substitute an in-memory implementation without a network
//! stack.
//!
//! # Example
//!
//! ```rust,no_run
//! use courier_connect::{CourierService, OutboundMessage, RemoteCourier};
//!
//! async fn example() -> Result<(), courier_connect::ConnectError> {
//!     let courier = RemoteCourier::connect("http://127.0.0.1:12345").await?;
//!
//!     let sorted = courier.sort_array(vec![5, 3, 1, 4, 2]).await?;
//!     let ack = courier
//!         .send_message(OutboundMessage::new("hola", "192.168.1.10"))
//!         .await?;
//!
//!     println!("{sorted:?} / {}", ack.text);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod remote;
pub mod service;

pub use error::ConnectError;
pub use remote::RemoteCourier;
pub use service::{CourierService, MessageAck, OutboundMessage};
