mod client;

pub use client::SourceClient;
