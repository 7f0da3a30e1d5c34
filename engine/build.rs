// The service is declared in Rust and its messages derive `prost::Message`
// (see src/services/proto.rs), so no protoc is needed at build time.
use tonic_build::manual::{Builder, Method, Service};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let valuation_service = Service::builder()
        .name("ValuationEngine")
        .package("valuation")
        .method(
            Method::builder()
                .name("calculate_dcf")
                .route_name("CalculateDcf")
                .input_type("crate::services::proto::DcfRequest")
                .output_type("crate::services::proto::DcfResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            Method::builder()
                .name("get_default_inputs")
                .route_name("GetDefaultInputs")
                .input_type("crate::services::proto::DefaultInputsRequest")
                .output_type("crate::services::proto::DcfRequest")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    Builder::new()
        .build_server(true) // Generate server code
        .build_client(true) // The CLI and the integration tests talk to the engine through it
        .compile(&[valuation_service]);
}
