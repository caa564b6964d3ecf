// Adapters layer: concrete implementations of the remote store port.

pub mod http;
#[cfg(feature = "fetch")]
pub mod s3;
