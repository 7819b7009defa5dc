//! Orchestrator tests over an in-memory service implementation.
//!
//! The fake stands in for the remote endpoint so the sequencing and the
//! printed output can be pinned down without a network stack.

use async_trait::async_trait;
use courier::config::CourierConfig;
use courier::error::CourierError;
use courier::input::RunInput;
use courier::orchestrator;
use courier_connect::{ConnectError, CourierService, MessageAck, OutboundMessage};

/// In-memory stand-in for the remote endpoint.
#[derive(Default)]
struct FakeCourier {
    fail_sort: bool,
    fail_message: bool,
}

#[async_trait]
impl CourierService for FakeCourier {
    async fn sort_array(&self, mut values: Vec<i64>) -> Result<Vec<i64>, ConnectError> {
        if self.fail_sort {
            return Err(ConnectError::ContractViolation("sort offline".into()));
        }
        values.sort_unstable();
        Ok(values)
    }

    async fn send_message(
        &self,
        message: OutboundMessage,
    ) -> Result<MessageAck, ConnectError> {
        if self.fail_message {
            return Err(ConnectError::ContractViolation("delivery offline".into()));
        }
        Ok(MessageAck {
            text: message.text,
            origin_address: message.origin_address,
        })
    }
}

fn run_input(values: Vec<i64>, message: &str) -> RunInput {
    RunInput {
        values,
        message: message.to_string(),
    }
}

#[tokio::test]
async fn test_full_run_output() {
    let service = FakeCourier::default();
    let mut out = Vec::new();

    let input = run_input(vec![5, 3, 1, 4, 2], "hola");
    orchestrator::run(&service, input, "192.168.1.10", &mut out)
        .await
        .unwrap();

    let output = String::from_utf8(out).unwrap();
    assert_eq!(
        output,
        "sorted array: [1, 2, 3, 4, 5]\n\
         message sent: hola\n\
         sender address sent: 192.168.1.10\n"
    );
}

#[tokio::test]
async fn test_empty_run_output() {
    let service = FakeCourier::default();
    let mut out = Vec::new();

    let input = run_input(vec![], "");
    orchestrator::run(&service, input, "127.0.0.1", &mut out)
        .await
        .unwrap();

    let output = String::from_utf8(out).unwrap();
    assert_eq!(
        output,
        "sorted array: []\n\
         message sent: \n\
         sender address sent: 127.0.0.1\n"
    );
}

#[tokio::test]
async fn test_sort_failure_prints_nothing() {
    let service = FakeCourier {
        fail_sort: true,
        ..Default::default()
    };
    let mut out = Vec::new();

    let input = run_input(vec![2, 1], "hola");
    let result = orchestrator::run(&service, input, "192.168.1.10", &mut out).await;

    assert!(matches!(result, Err(CourierError::RemoteCall(_))));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_message_failure_keeps_sorted_output() {
    let service = FakeCourier {
        fail_message: true,
        ..Default::default()
    };
    let mut out = Vec::new();

    let input = run_input(vec![2, 1], "hola");
    let result = orchestrator::run(&service, input, "192.168.1.10", &mut out).await;

    assert!(matches!(result, Err(CourierError::RemoteCall(_))));

    // The sorted line was printed before the message call failed, and is
    // not retracted.
    let output = String::from_utf8(out).unwrap();
    assert_eq!(output, "sorted array: [1, 2]\n");
}

#[tokio::test]
async fn test_unreachable_endpoint_fails_before_any_call_output() {
    // Grab an ephemeral port, then close it so the connect attempt is
    // refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = CourierConfig {
        endpoint: format!("http://{addr}"),
        ..Default::default()
    };
    let mut out = Vec::new();

    let input = run_input(vec![5, 3, 1, 4, 2], "hola");
    let result = orchestrator::execute(&config, input, "192.168.1.10", &mut out).await;

    match &result {
        Err(err @ CourierError::Connection { .. }) => {
            assert_ne!(err.exit_code(), 0);
        }
        other => panic!("expected Connection error, got {other:?}"),
    }

    // Only the input echo was printed; neither call produced output.
    let output = String::from_utf8(out).unwrap();
    assert_eq!(output, "unsorted array: [5, 3, 1, 4, 2]\n");
}
