// HTTP plumbing shared by remote sources
pub mod core;

// Record source implementations
pub mod sources;
