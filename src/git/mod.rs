//! Git Operations Module
//!
//! Everything that talks to git or to the filesystem layout of git
//! repositories, split into focused submodules.

pub mod branch;
pub mod commit;
pub mod locator;
