//! Shared test utilities for bemtree.

pub mod fixtures;
pub mod memory;

pub use fixtures::UnitTestFixture;
pub use memory::MemoryWorkspace;
