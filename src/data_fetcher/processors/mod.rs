pub mod columns;
pub mod flatten;
pub mod table;

// Re-export the projection configuration and helpers
pub use columns::*;
// Re-export flattening utilities
pub use flatten::*;
// Re-export the table type
pub use table::*;
