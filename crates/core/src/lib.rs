//! Domain primitives shared by every farm-management crate.
//!
//! Nothing in here performs I/O: the storage layer lives in `agri-db`, the
//! weather client in `agri-weather`, and the HTTP surface in `agri-api`.

pub mod email;
pub mod error;
pub mod finance;
pub mod forms;
pub mod types;
