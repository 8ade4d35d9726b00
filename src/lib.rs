//! TheAtlasEngine's companion commands for the Conan package manager.
pub mod cli;
