//! Domain state types shared by the registry and the CLI.

mod connection;
mod profile;

pub use connection::ConnectionState;
pub use profile::{Profile, ProfileStatus};
