//! Represents an abstract version-control repository.
//!
//! ## Design Goals
//!
//! Rsvcs intends to allow repositories to be stored in multiple different
//! mechanisms. While it includes built-in support for local on-disk
//! repositories (see the `rsvcs_on_disk` crate), you could envision
//! repositories stored entirely in memory, or on a remote file system or
//! database.

mod error;
pub use error::{Error, Result};

/// A struct that implements the `Repo` trait represents a particular
/// mechanism for storing and accessing version-control metadata.
///
/// The required methods on this trait represent the most primitive
/// operations which must be defined for a given storage architecture.
/// Consider the information stored in the control directory of a typical
/// on-disk repository. You will be building an alternative to that
/// storage mechanism.
pub trait Repo {}
