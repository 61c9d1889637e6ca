mod client;
mod poller;
pub(crate) mod resources;

pub use client::Client;
pub use poller::{AppliancePoller, PollerConfig};
