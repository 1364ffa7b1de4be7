// Shared kernel used by every feature module.

pub mod application; // Shared application layer patterns
pub mod database; // r2d2 connection pool wrapper
pub mod errors; // Shared error types
pub mod utils; // Validation and logging helpers

// Re-exports for convenience
pub use database::Database;
