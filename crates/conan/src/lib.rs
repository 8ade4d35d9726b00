//! Drives the Conan command line with TheAtlasEngine's defaults.
//!
//! Nothing here resolves dependencies or builds anything itself: every
//! operation is a command line handed to the host tool through an
//! [`Executor`].
mod client;
#[deny(missing_docs)]
mod error;

pub mod exec;
pub mod install;
pub mod platform;
pub mod recipe;
pub mod remote;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use client::Conan;
pub use error::Error;
pub use exec::{Executor, Invocation, Output, System};
pub use install::ConfigInstall;
pub use platform::{Platform, Profile};
pub use recipe::{BuildType, Forwarded, Recipe, Verb};
pub use remote::{Remote, RemoteStatus};
