/// Generated gRPC protocol definitions for the courier services.
///
/// This crate provides the protocol buffer definitions and generated code
/// for the sort and message-delivery services the courier client talks to.
pub mod courier {
    pub mod v1 {
        tonic::include_proto!("courier.v1");
    }
}

// Re-export commonly used types for convenience
pub use courier::v1::*;
