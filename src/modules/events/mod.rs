mod hub;
pub mod routes;

pub use hub::{ChangeEvent, ChangeHub, ChangeOp};
