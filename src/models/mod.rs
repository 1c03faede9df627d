//! Domain models shared by all providers.
//!
//! Providers normalize their wire formats into these types, so everything
//! downstream (resolver, cache, callers) is source-agnostic.

mod constructor;
mod driver;
mod session;

pub use constructor::Constructor;
pub use driver::Driver;
pub use session::{Circuit, Session, SessionKind};
