// Job Board - API Core
//
// Backend for a real-estate job board: job postings are validated, stored,
// listed newest-first and deleted. Business rules live in domains/jobs,
// infrastructure (storage gateway, connection lifecycle) in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
