//! Access token values and the wire payload they are built from.

pub mod access;
pub mod secret;
