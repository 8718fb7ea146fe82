//! Domain logic - pure rules independent of git and the filesystem

pub mod intent;
pub mod tag;
pub mod version;

pub use intent::ReleaseIntent;
pub use tag::Tag;
pub use version::{BumpKind, Version};
