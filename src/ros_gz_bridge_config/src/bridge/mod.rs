//! Bridge specification records produced by the loader

pub mod types;

pub use types::{BridgeDirection, BridgeSpec, DEFAULT_PUBLISHER_QUEUE, DEFAULT_SUBSCRIBER_QUEUE};
