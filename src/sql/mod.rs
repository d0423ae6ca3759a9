//! SQL text for the profile table: identifiers from validated config only, values as parameters.

mod builder;
pub use builder::*;
