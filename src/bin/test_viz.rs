use particle_viz::visualization::render::RendererConfig;
use particle_viz::visualization::VisualizationStack;
use particle_viz::ParticleVizCore;

use nav2_msgs::msg::{Particle, ParticleCloud};

fn main() {
    println!("Initializing Particle Viz Core...");

    let mut core = ParticleVizCore::new();

    // Create a visualization stack with the default normalization ceiling
    let config = RendererConfig::default();
    let viz_stack = VisualizationStack::with_config(config);
    let store = viz_stack.store();

    // Register components
    core.register(viz_stack);

    // Initialize the core
    match core.init() {
        Ok(_) => println!("Core initialized successfully!"),
        Err(e) => {
            println!("Failed to initialize core: {}", e);
            return;
        }
    }

    // Feed a synthetic cloud: three particles spanning the weight range
    let mut cloud = ParticleCloud::default();
    cloud.header.frame_id = "map".to_string();

    for (i, weight) in [0.0, config.max_weight / 2.0, config.max_weight]
        .iter()
        .enumerate()
    {
        let mut particle = Particle::default();
        particle.pose.position.x = i as f64;
        particle.pose.orientation.w = 1.0;
        particle.weight = *weight;
        cloud.particles.push(particle);
    }

    store.update(cloud);

    // Render one tick and show the resulting colors
    if let Some(viz_stack) = core.visualization_stack_mut() {
        let marker_array = viz_stack.tick();
        println!("Rendered {} markers", marker_array.markers.len());

        for marker in &marker_array.markers {
            println!(
                "marker id={} color=({}, {}, {}, {})",
                marker.id, marker.color.r, marker.color.g, marker.color.b, marker.color.a
            );
        }
    }

    // Shutdown the core
    match core.shutdown() {
        Ok(_) => println!("Core shutdown successfully!"),
        Err(e) => println!("Failed to shutdown core: {}", e),
    }
}
