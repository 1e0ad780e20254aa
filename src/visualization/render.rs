//! Particle cloud to marker array rendering

use nav2_msgs::msg::ParticleCloud;
use visualization_msgs::msg::{Marker, MarkerArray};

use crate::common::defaults;

/// Renderer configuration, fixed at startup
#[derive(Debug, Clone, Copy)]
pub struct RendererConfig {
    /// Weight mapped to full green; weights are scaled against this ceiling
    pub max_weight: f64,
    /// Render rate in ticks per second
    pub update_rate: f64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        RendererConfig {
            max_weight: defaults::MAX_WEIGHT,
            update_rate: defaults::UPDATE_RATE,
        }
    }
}

/// Renders a particle cloud into one arrow marker per particle.
///
/// Stateless: the output is a function of the input cloud and the
/// configuration only.
#[derive(Debug)]
pub struct MarkerRenderer {
    config: RendererConfig,
}

impl MarkerRenderer {
    /// Create a renderer with the given configuration
    pub fn new(config: RendererConfig) -> Self {
        MarkerRenderer { config }
    }

    /// The configuration this renderer was built with
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Build a marker array from a particle cloud.
    ///
    /// Marker ids are the particle indices, so a viewer replacing by id
    /// maps markers to particles across successive arrays. If the cloud
    /// shrank since the last render, the viewer keeps the stale higher
    /// ids; no DELETE markers are emitted for them.
    ///
    /// The weight/max_weight ratio is not clamped: weights outside
    /// [0, max_weight] produce color components outside [0, 1], and a
    /// zero max_weight produces infinite or NaN components. Both are
    /// passed through unchanged.
    pub fn render(&self, cloud: &ParticleCloud) -> MarkerArray {
        let mut marker_array = MarkerArray::default();
        marker_array.markers.reserve(cloud.particles.len());

        for (idx, particle) in cloud.particles.iter().enumerate() {
            let mut marker = Marker::default();
            marker.header = cloud.header.clone();
            marker.id = idx as i32;
            marker.type_ = Marker::ARROW;
            marker.action = Marker::ADD;

            // Thin forward-pointing arrow
            marker.scale.x = 0.2;
            marker.scale.y = 0.02;
            marker.scale.z = 0.02;

            marker.pose = particle.pose.clone();

            // Green = high weight, red = low
            let ratio = particle.weight / self.config.max_weight;
            marker.color.r = (1.0 - ratio) as f32;
            marker.color.g = ratio as f32;
            marker.color.b = 0.0;
            marker.color.a = 1.0;

            marker_array.markers.push(marker);
        }

        marker_array
    }
}
