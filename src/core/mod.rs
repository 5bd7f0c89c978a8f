pub mod engine;

pub use crate::domain::model::{Invocation, Stage, StatusReport};
pub use crate::domain::ports::{InvocationProvider, Reporter};
pub use crate::utils::error::Result;
