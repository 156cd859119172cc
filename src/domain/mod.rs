// Lap records, fields and time handling
pub mod lap;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
