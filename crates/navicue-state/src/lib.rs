//! # navicue-state
//!
//! The User State Store. Holds the slowly-changing `UserContext`, the rolling
//! `MindblockState`, and the outcome history for one user session.
//!
//! `UserStateStore::record_outcome` is the only way to mutate mindblock state;
//! the selector and the lifecycle controller only ever borrow it immutably.

mod mindblock;
mod store;
mod window;

pub use mindblock::{MindblockBuilder, MindblockState};
pub use store::{StateSnapshot, UserStateStore};
pub use window::RecentWindow;
