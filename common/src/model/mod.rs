pub mod location;
pub mod session;
