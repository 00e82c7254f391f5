//! Types and rules shared by the JamSpots server and the browser app.
//!
//! Everything here compiles both natively and to `wasm32`, so the server can
//! enforce the same slug, naming and content rules the UI pre-checks with.

pub mod client;
pub mod filter;
pub mod model;
pub mod requests;
pub mod responses;
pub mod slug;
