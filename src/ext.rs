//! Public extension contracts for attaching broker-issued tokens to outbound requests.

pub mod request_signer;

pub use request_signer::*;
