pub mod games;
pub mod http_client;
pub mod players;
pub mod teams;
pub mod urls;

mod fetch_utils;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::*;
// Re-export the endpoint functions
pub use games::*;
pub use players::*;
pub use teams::*;
