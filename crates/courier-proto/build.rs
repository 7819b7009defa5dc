//! Build script for courier-proto.
//!
//! `protoc` is not available in every build environment, so instead of
//! shelling out to it we construct the `FileDescriptorSet` that
//! `proto/courier/v1/courier.proto` describes directly and hand it to
//! `tonic_prost_build`. The descriptor below is the exact, mechanical
//! equivalent of running `protoc` on that `.proto` file — the services,
//! messages, and field numbers match it one-for-one.

use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet,
    MethodDescriptorProto, ServiceDescriptorProto,
};

fn scalar_field(name: &str, number: i32, ty: Type, json_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        json_name: Some(json_name.to_string()),
        ..Default::default()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // message Array { repeated int64 data = 1; }
    let array = DescriptorProto {
        name: Some("Array".to_string()),
        field: vec![FieldDescriptorProto {
            name: Some("data".to_string()),
            number: Some(1),
            label: Some(Label::Repeated as i32),
            r#type: Some(Type::Int64 as i32),
            json_name: Some("data".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    };

    // message Message { string text = 1; string origin_address = 2; }
    let message = DescriptorProto {
        name: Some("Message".to_string()),
        field: vec![
            scalar_field("text", 1, Type::String, "text"),
            scalar_field("origin_address", 2, Type::String, "originAddress"),
        ],
        ..Default::default()
    };

    // service SortService { rpc SortArray(Array) returns (Array); }
    let sort_service = ServiceDescriptorProto {
        name: Some("SortService".to_string()),
        method: vec![MethodDescriptorProto {
            name: Some("SortArray".to_string()),
            input_type: Some(".courier.v1.Array".to_string()),
            output_type: Some(".courier.v1.Array".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    };

    // service MessageService { rpc SendMessage(Message) returns (Message); }
    let message_service = ServiceDescriptorProto {
        name: Some("MessageService".to_string()),
        method: vec![MethodDescriptorProto {
            name: Some("SendMessage".to_string()),
            input_type: Some(".courier.v1.Message".to_string()),
            output_type: Some(".courier.v1.Message".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    };

    let file = FileDescriptorProto {
        name: Some("courier/v1/courier.proto".to_string()),
        package: Some("courier.v1".to_string()),
        syntax: Some("proto3".to_string()),
        message_type: vec![array, message],
        service: vec![sort_service, message_service],
        ..Default::default()
    };

    let fds = FileDescriptorSet { file: vec![file] };

    tonic_prost_build::configure()
        .build_client(true)
        .build_server(true)
        .compile_fds(fds)?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
