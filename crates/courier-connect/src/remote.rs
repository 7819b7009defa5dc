//! RemoteCourier: CourierService implementation backed by a single gRPC channel

use std::collections::HashMap;

use async_trait::async_trait;
use courier_proto::message_service_client::MessageServiceClient;
use courier_proto::sort_service_client::SortServiceClient;
use courier_proto::{Array, Message};
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

use crate::error::ConnectError;
use crate::service::{CourierService, MessageAck, OutboundMessage};

/// Client for both remote services over one shared channel.
///
/// Both generated clients are built over clones of the same
/// `tonic::transport::Channel` (channels are cheaply cloneable handles to
/// one underlying connection), so the two calls of a run reuse a single
/// transport connection. Dropping the `RemoteCourier` releases the channel;
/// ownership guarantees the release happens exactly once per run, on every
/// exit path.
///
/// No timeout is configured on the endpoint: an unresponsive remote blocks
/// the caller indefinitely. Known limitation carried from the service
/// contract.
pub struct RemoteCourier {
    sorter: SortServiceClient<Channel>,
    messenger: MessageServiceClient<Channel>,
    endpoint: String,
}

impl RemoteCourier {
    /// Connect to `address` (e.g. `http://127.0.0.1:12345`).
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError::ConnectionFailed`] when the address is not a
    /// valid endpoint or the remote is unreachable or refuses the
    /// connection.
    pub async fn connect(address: impl Into<String>) -> Result<Self, ConnectError> {
        let address = address.into();

        let endpoint = Endpoint::from_shared(address.clone()).map_err(|e| {
            ConnectError::ConnectionFailed {
                endpoint: address.clone(),
                reason: format!("invalid endpoint: {e}"),
            }
        })?;

        debug!("Connecting to {}", address);

        let channel = endpoint
            .connect()
            .await
            .map_err(|e| ConnectError::ConnectionFailed {
                endpoint: address.clone(),
                reason: e.to_string(),
            })?;

        info!("Connected to {}", address);

        Ok(Self {
            sorter: SortServiceClient::new(channel.clone()),
            messenger: MessageServiceClient::new(channel),
            endpoint: address,
        })
    }
}

impl Drop for RemoteCourier {
    fn drop(&mut self) {
        debug!("Released channel to {}", self.endpoint);
    }
}

#[async_trait]
impl CourierService for RemoteCourier {
    async fn sort_array(&self, values: Vec<i64>) -> Result<Vec<i64>, ConnectError> {
        debug!("Sorting {} values remotely", values.len());

        let request = Array {
            data: values.clone(),
        };

        let response = self.sorter.clone().sort_array(request).await?;
        let sorted = response.into_inner().data;

        // The response must hold the same multiset of values, in
        // ascending order.
        if !is_permutation(&values, &sorted) {
            return Err(ConnectError::ContractViolation(format!(
                "sort response is not a permutation of the request \
                 ({} values sent, {} received)",
                values.len(),
                sorted.len()
            )));
        }
        if !is_sorted(&sorted) {
            return Err(ConnectError::ContractViolation(
                "sort response is not in ascending order".to_string(),
            ));
        }

        debug!("Received {} sorted values", sorted.len());

        Ok(sorted)
    }

    async fn send_message(
        &self,
        message: OutboundMessage,
    ) -> Result<MessageAck, ConnectError> {
        debug!("Sending message from {}", message.origin_address);

        let request = Message {
            text: message.text.clone(),
            origin_address: message.origin_address.clone(),
        };

        let response = self.messenger.clone().send_message(request).await?;
        let ack = response.into_inner();

        if ack.text != message.text || ack.origin_address != message.origin_address {
            return Err(ConnectError::ContractViolation(format!(
                "acknowledgment does not echo the request \
                 (got text {:?} from {:?})",
                ack.text, ack.origin_address
            )));
        }

        debug!("Message acknowledged by {}", self.endpoint);

        Ok(MessageAck {
            text: ack.text,
            origin_address: ack.origin_address,
        })
    }
}

fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

fn is_permutation(a: &[i64], b: &[i64]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut counts: HashMap<i64, i64> = HashMap::new();
    for &v in a {
        *counts.entry(v).or_default() += 1;
    }
    for &v in b {
        match counts.get_mut(&v) {
            Some(c) => *c -= 1,
            None => return false,
        }
    }

    counts.values().all(|&c| c == 0)
}
