//! Common definitions for the particle visualizer

/// Topic names shared between the node binary and launch tooling
pub mod topics {
    /// Weighted particle cloud published by the localization estimator
    pub const WEIGHTED_PARTICLECLOUD: &str = "weighted_particlecloud";

    /// Marker output consumed by the visualization layer
    pub const WEIGHTED_PARTICLECLOUD_MARKERS: &str = "weighted_particlecloud_markers";
}

/// Startup parameter defaults
pub mod defaults {
    /// Normalization ceiling used to scale weights into colors
    pub const MAX_WEIGHT: f64 = 0.0075;

    /// Render rate in ticks per second
    pub const UPDATE_RATE: f64 = 10.0;
}
