//! Domain models for the screening core.

mod condition;
mod prediction;
mod report;
mod session;
mod symptom;

pub use condition::*;
pub use prediction::*;
pub use report::*;
pub use session::*;
pub use symptom::*;
