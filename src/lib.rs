pub mod loader;
pub mod output;
pub mod pipeline;
pub mod schema;
pub mod stats;
