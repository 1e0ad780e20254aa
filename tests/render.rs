use particle_viz::visualization::render::{MarkerRenderer, RendererConfig};
use particle_viz::visualization::VisualizationStack;

use nav2_msgs::msg::{Particle, ParticleCloud};
use visualization_msgs::msg::Marker;

/// Build a cloud in the "map" frame with one particle per weight, each at
/// a distinct pose so pose copying can be checked.
fn make_cloud(weights: &[f64]) -> ParticleCloud {
    let mut cloud = ParticleCloud::default();
    cloud.header.frame_id = "map".to_string();
    cloud.header.stamp.sec = 42;

    for (i, weight) in weights.iter().enumerate() {
        let mut particle = Particle::default();
        particle.pose.position.x = i as f64;
        particle.pose.position.y = -(i as f64);
        particle.pose.orientation.w = 1.0;
        particle.weight = *weight;
        cloud.particles.push(particle);
    }

    cloud
}

fn default_renderer() -> MarkerRenderer {
    MarkerRenderer::new(RendererConfig::default())
}

/// A cloud with N particles renders to exactly N markers with ids 0..N-1
/// in particle order.
#[test]
fn one_marker_per_particle_with_index_ids() {
    let renderer = default_renderer();
    let cloud = make_cloud(&[0.001, 0.002, 0.003, 0.004, 0.005]);

    let marker_array = renderer.render(&cloud);

    assert_eq!(marker_array.markers.len(), 5);
    for (idx, marker) in marker_array.markers.iter().enumerate() {
        assert_eq!(marker.id, idx as i32, "marker id must be the particle index");
        assert_eq!(
            marker.pose, cloud.particles[idx].pose,
            "marker pose must be copied verbatim from particle {}",
            idx
        );
    }
}

/// Every marker is a thin forward-pointing arrow stamped with the cloud
/// header.
#[test]
fn marker_shape_and_header() {
    let renderer = default_renderer();
    let cloud = make_cloud(&[0.004]);

    let marker_array = renderer.render(&cloud);
    let marker = &marker_array.markers[0];

    assert_eq!(marker.type_, Marker::ARROW);
    assert_eq!(marker.action, Marker::ADD);
    assert_eq!(marker.scale.x, 0.2);
    assert_eq!(marker.scale.y, 0.02);
    assert_eq!(marker.scale.z, 0.02);
    assert_eq!(marker.header, cloud.header);
}

/// Zero weight is full red, max_weight is full green, half of max_weight
/// is the midpoint, all at full opacity.
#[test]
fn weight_to_color_endpoints() {
    let config = RendererConfig::default();
    let renderer = MarkerRenderer::new(config);
    let cloud = make_cloud(&[0.0, config.max_weight / 2.0, config.max_weight]);

    let marker_array = renderer.render(&cloud);

    let low = &marker_array.markers[0].color;
    assert_eq!((low.r, low.g, low.b, low.a), (1.0, 0.0, 0.0, 1.0));

    let mid = &marker_array.markers[1].color;
    assert_eq!((mid.r, mid.g, mid.b, mid.a), (0.5, 0.5, 0.0, 1.0));

    let high = &marker_array.markers[2].color;
    assert_eq!((high.r, high.g, high.b, high.a), (0.0, 1.0, 0.0, 1.0));
}

/// The half-weight / full-weight scenario: ids, poses and colors all line
/// up with the source particles.
#[test]
fn two_particle_scenario() {
    let renderer = MarkerRenderer::new(RendererConfig {
        max_weight: 0.0075,
        ..RendererConfig::default()
    });
    let cloud = make_cloud(&[0.00375, 0.0075]);

    let marker_array = renderer.render(&cloud);
    assert_eq!(marker_array.markers.len(), 2);

    let first = &marker_array.markers[0];
    assert_eq!(first.id, 0);
    assert_eq!(first.pose, cloud.particles[0].pose);
    assert_eq!(
        (first.color.r, first.color.g, first.color.b, first.color.a),
        (0.5, 0.5, 0.0, 1.0)
    );

    let second = &marker_array.markers[1];
    assert_eq!(second.id, 1);
    assert_eq!(second.pose, cloud.particles[1].pose);
    assert_eq!(
        (second.color.r, second.color.g, second.color.b, second.color.a),
        (0.0, 1.0, 0.0, 1.0)
    );
}

/// Weights outside [0, max_weight] are not clamped; the color components
/// go out of [0, 1] accordingly.
#[test]
fn out_of_range_weights_are_not_clamped() {
    let config = RendererConfig::default();
    let renderer = MarkerRenderer::new(config);
    let cloud = make_cloud(&[2.0 * config.max_weight]);

    let marker_array = renderer.render(&cloud);
    let color = &marker_array.markers[0].color;

    assert_eq!(color.g, 2.0);
    assert_eq!(color.r, -1.0);
    assert_eq!(color.a, 1.0);
}

/// A zero normalization ceiling makes the ratio undefined; the NaN
/// propagates into the red and green components instead of panicking.
#[test]
fn zero_max_weight_propagates_nan() {
    let renderer = MarkerRenderer::new(RendererConfig {
        max_weight: 0.0,
        ..RendererConfig::default()
    });
    let cloud = make_cloud(&[0.0]);

    let marker_array = renderer.render(&cloud);
    let color = &marker_array.markers[0].color;

    assert!(color.r.is_nan());
    assert!(color.g.is_nan());
    assert_eq!(color.b, 0.0);
    assert_eq!(color.a, 1.0);
}

/// An empty cloud renders to an empty marker array rather than failing.
#[test]
fn empty_cloud_renders_empty_array() {
    let renderer = default_renderer();
    let marker_array = renderer.render(&ParticleCloud::default());
    assert!(marker_array.markers.is_empty());
}

/// Rendering the same stored cloud twice, with no update in between,
/// yields structurally identical marker arrays.
#[test]
fn render_is_idempotent() {
    let stack = VisualizationStack::new();
    stack.store().update(make_cloud(&[0.001, 0.006]));

    let first = stack.tick();
    let second = stack.tick();
    assert_eq!(first, second);
}

/// With no cloud ever received, every tick yields the empty batch.
#[test]
fn ticks_without_updates_yield_empty_batches() {
    let stack = VisualizationStack::new();

    for _ in 0..3 {
        let marker_array = stack.tick();
        assert!(marker_array.markers.is_empty());
    }
}
