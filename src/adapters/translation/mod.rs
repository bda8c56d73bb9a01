//! Translation Adapters.
//!
//! - `PassthroughTranslator` - returns text untranslated
//! - `MockTranslator` - dictionary-backed test double with failure injection

mod mock;
mod passthrough;

pub use mock::MockTranslator;
pub use passthrough::PassthroughTranslator;
