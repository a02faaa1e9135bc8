//! State management module
//!
//! This module holds all gallery state:
//! - The record type and id generation (data.rs)
//! - The ordered in-memory image list (store.rs)
//! - The record currently open full-screen (selection.rs)
//!
//! Nothing here is persisted; everything lives as long as the window.

pub mod data;
pub mod selection;
pub mod store;

pub use data::{IdGenerator, ImageRecord, RecordId};
pub use selection::SelectionState;
pub use store::ImageStore;
