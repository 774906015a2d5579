//! Core type definitions for envcmp

mod error;
mod identity;
mod index;

pub use error::EnvCmpError;
pub use identity::FileIdentity;
pub use index::IdentityIndex;
