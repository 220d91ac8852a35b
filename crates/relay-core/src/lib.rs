#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod broadcast;
pub mod channel;
pub mod echo;
pub mod error;
pub mod message;
pub mod ports;
pub mod settings;

// Re-export commonly used types for convenience
pub use broadcast::{Broadcaster, PublishReport, Subscription, SubscriptionHandle};
pub use channel::{ChannelSink, MessageReceiver, channel_sink};
pub use echo::EchoResponse;
pub use error::DeliveryError;
pub use message::Message;
pub use ports::{MessageSink, NoopSink};
pub use settings::{
    DEFAULT_KEEP_ALIVE_SECS, DEFAULT_QUEUE_CAPACITY, RelaySettings, SettingsError,
    validate_settings,
};
