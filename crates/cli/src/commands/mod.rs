//! CLI Commands

pub mod agents;
pub mod init;
pub mod playbook;
pub mod random;
pub mod recommend;
pub mod threats;

pub use agents::AgentsCommand;
pub use init::InitCommand;
pub use playbook::PlaybookCommand;
pub use random::RandomCommand;
pub use recommend::RecommendCommand;
pub use threats::ThreatsCommand;
