pub mod client;

pub use client::RateFeedClient;
