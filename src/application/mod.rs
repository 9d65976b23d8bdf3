//! Application services: the gateway port, collection store and form rules.

pub mod forms;
pub mod gateway;
mod lock;
pub mod notify;
pub mod store;
