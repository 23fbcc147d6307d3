pub mod company_finder;
pub mod contact_directory;
pub mod contact_resolver;
pub mod data_persistance;
pub mod deduplicator;
pub mod estimator;
pub mod extractor;
pub mod pipeline;
pub mod scorer;

pub use company_finder::*;
pub use contact_directory::*;
pub use data_persistance::*;
pub use estimator::*;
pub use pipeline::*;
