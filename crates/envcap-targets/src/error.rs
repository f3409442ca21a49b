//! Error types for target resolution.

/// Errors that can occur while resolving target identifiers.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// No registered pattern matched the supplied string.
    #[error("unknown target '{target}'\nsupported targets:\n{}", render_supported(.supported))]
    UnknownTarget {
        /// The string that failed to resolve.
        target: String,
        /// Display name and description of every registered pattern.
        supported: Vec<(&'static str, &'static str)>,
    },
}

/// Result type for target resolution.
pub type Result<T> = std::result::Result<T, TargetError>;

fn render_supported(supported: &[(&'static str, &'static str)]) -> String {
    supported
        .iter()
        .map(|(name, description)| format!("  {name:<28} {description}"))
        .collect::<Vec<_>>()
        .join("\n")
}
