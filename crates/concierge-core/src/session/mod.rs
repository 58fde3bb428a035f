//! Session model and id synthesis.

pub mod model;

pub use model::{new_session_id, ClientInfo, Session};
