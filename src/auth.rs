//! Identity, credential, and access-token models used by the broker.

pub mod credential;
pub mod id;
pub mod key;
pub mod token;

pub use credential::*;
pub use id::*;
pub use key::*;
pub use token::{access::*, secret::*};
