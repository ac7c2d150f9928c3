#![no_std] // Keeps the vocabulary usable from WASM/embedded hosts

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod morphology;
pub mod model;

// Re-export core types for convenience
pub use ids::RuleId;
pub use model::DeclinedForm;
pub use morphology::*;
