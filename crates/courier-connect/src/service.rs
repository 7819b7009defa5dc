//! Domain types and the capability trait covering both remote services.

use async_trait::async_trait;

use crate::error::ConnectError;

/// A message queued for delivery, paired with the sender's network address.
///
/// Immutable once constructed; the acknowledgment is a distinct value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Message text; may be empty
    pub text: String,

    /// The sender's own resolvable network address
    pub origin_address: String,
}

impl OutboundMessage {
    pub fn new(text: impl Into<String>, origin_address: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin_address: origin_address.into(),
        }
    }
}

/// Acknowledgment from the message service.
///
/// The echo contract requires both fields to equal the request's;
/// [`crate::RemoteCourier`] rejects acks that deviate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageAck {
    pub text: String,
    pub origin_address: String,
}

/// The two remote operations, behind one seam.
///
/// Both calls of a run go through a single implementation so the
/// orchestrator's sequencing stays uniform. [`crate::RemoteCourier`] is the
/// gRPC-backed implementation; tests substitute an in-memory one.
#[async_trait]
pub trait CourierService: Send + Sync {
    /// Sort `values` remotely, returning the same multiset in ascending order.
    ///
    /// The input may be empty. Failure is fatal to the run; there is no
    /// local sorting fallback.
    async fn sort_array(&self, values: Vec<i64>) -> Result<Vec<i64>, ConnectError>;

    /// Deliver `message` remotely, returning the service's echo of it.
    async fn send_message(
        &self,
        message: OutboundMessage,
    ) -> Result<MessageAck, ConnectError>;
}
