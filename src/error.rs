use thiserror::Error;

/// Errors raised while building a diagram or reading cells out of it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoronoiError {
    /// A site has a NaN or infinite coordinate.
    #[error("site {index} has a non-finite coordinate")]
    NonFiniteSite { index: usize },

    /// The bounding polygon cannot be used for clipping.
    #[error("invalid bounding polygon: {0}")]
    InvalidBoundary(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Finite vertices were requested for a cell that still extends to infinity.
    /// Supply a bounding polygon, or read the cell through `Diagram::edges`.
    #[error("region {region} is unbounded; supply a bounding polygon to extract its vertices")]
    UnboundedRegion { region: usize },

    #[error("region {region} does not exist (diagram has {count} regions)")]
    UnknownRegion { region: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, VoronoiError>;
