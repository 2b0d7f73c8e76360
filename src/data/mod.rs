// mod.rs - Data structures module

pub mod reference;

// Re-export main types for convenience
pub use reference::ReferenceSequence;
