pub use crate::errors::{ScaffoldError, ScaffoldResult};
pub use crate::record::TestRecord;

pub mod cli;
pub mod console;
pub mod discovery;
pub mod editor;
pub mod errors;
pub mod parser;
pub mod persist;
pub mod record;
pub mod template;
pub mod workflow;
