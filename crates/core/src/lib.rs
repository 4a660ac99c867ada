//! Domain types shared by the storage and HTTP layers.
//!
//! Nothing in here touches the database or the network.

pub mod error;
pub mod pagination;
pub mod password;
pub mod tecnico;
pub mod types;
