/*!
 * Run orchestration: one channel, two sequential remote calls
 */

use std::io::Write;

use courier_connect::{CourierService, OutboundMessage, RemoteCourier};
use tracing::{debug, info};

use crate::config::CourierConfig;
use crate::error::Result;
use crate::input::RunInput;

/// Execute one full run against the configured endpoint.
///
/// Echoes the unsorted array, acquires the channel, then delegates to
/// [`run`]. The channel is owned by this scope, so it is released exactly
/// once whether the calls succeed or fail.
pub async fn execute<W: Write>(
    config: &CourierConfig,
    input: RunInput,
    origin_address: &str,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "unsorted array: {:?}", input.values)?;

    let courier = RemoteCourier::connect(config.endpoint.clone()).await?;

    run(&courier, input, origin_address, out).await
}

/// Drive the two remote calls over an already-acquired service connection.
///
/// Sequencing is fixed: sort first, print the result, then deliver the
/// message and print its acknowledgment. The sorted line is written before
/// the message call is issued, so a later failure leaves it in place.
pub async fn run<S, W>(
    service: &S,
    input: RunInput,
    origin_address: &str,
    out: &mut W,
) -> Result<()>
where
    S: CourierService,
    W: Write,
{
    debug!("Issuing sort call for {} values", input.values.len());
    let sorted = service.sort_array(input.values).await?;
    writeln!(out, "sorted array: {:?}", sorted)?;

    debug!("Issuing message call from {}", origin_address);
    let ack = service
        .send_message(OutboundMessage::new(input.message, origin_address))
        .await?;
    writeln!(out, "message sent: {}", ack.text)?;
    writeln!(out, "sender address sent: {}", ack.origin_address)?;

    info!("Run complete");

    Ok(())
}
