pub mod config;
pub mod injector;

// Re-export commonly used types for convenience.
pub use config::InjectorConfig;
pub use injector::{FileOutcome, InjectionSummary, LinkInjector};
