// Sorting domain module
// Pure classification rules and the measurement record they operate on

mod classify;
mod measurement;
mod stack;

// Re-export public types
pub use classify::{classify, is_bulky, is_heavy};
pub use measurement::{FieldError, Measurement, RawField};
pub use stack::Stack;
