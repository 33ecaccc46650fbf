pub mod command;
pub mod comparison;
pub mod protocol;
pub mod setup;
pub mod workflow;

pub use command::{Category, Command, Invocation};
pub use comparison::{ComparisonRow, Verdict};
pub use protocol::Protocol;
pub use setup::SetupCard;
pub use workflow::{CodeSample, Difficulty, Workflow};
