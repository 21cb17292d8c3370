//! Network layer: the client side of an IRC connection.
//!
//! A [`Session`] owns one framed TCP connection. [`run_session`] drives it
//! from connect to disconnect; reconnecting is left to the caller.

mod session;

pub use session::{Session, SessionEnd, run_session};
