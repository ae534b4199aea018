//! Logging facilities for Lattice select.
//!
//! Lattice select uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("lattice_select_core=trace,lattice_select=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "lattice_select_core";
    /// Item normalization target.
    pub const ITEMS: &str = "lattice_select_core::items";
    /// Select state target.
    pub const SELECT: &str = "lattice_select::select";
    /// Signal/slot target.
    pub const SIGNAL: &str = "lattice_select::signal";
}

/// Macros for common tracing patterns.
///
/// Thin wrappers around the `tracing` macros with consistent target naming.
#[macro_export]
macro_rules! select_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::SELECT, $($arg)*)
    };
}

#[macro_export]
macro_rules! select_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::SELECT, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn test_targets_nest_under_crate_names() {
        assert!(targets::ITEMS.starts_with(targets::CORE));
        assert_eq!(targets::SELECT.split("::").next(), Some("lattice_select"));
        assert_eq!(targets::SIGNAL.split("::").next(), Some("lattice_select"));
    }
}
