use anyhow::{Error, Result};
use particle_viz::{
    common::topics, visualization::render::RendererConfig, visualization::store::ParticleStore,
    visualization::VisualizationStack, ParticleVizCore,
};
use rclrs::{
    Context, CreateBasicExecutor, Node, RclrsErrorFilter, SpinOptions, QOS_PROFILE_DEFAULT,
};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

// Import the message types directly from the crates
use nav2_msgs::msg::ParticleCloud;
use visualization_msgs::msg::MarkerArray;

struct ParticleVizNode {
    core: Mutex<ParticleVizCore>,
    node: Arc<Node>,
    marker_publisher: Arc<rclrs::Publisher<MarkerArray>>,
    cloud_subscription: Mutex<Option<Arc<rclrs::Subscription<ParticleCloud>>>>,
    running: Arc<Mutex<bool>>,
}

impl ParticleVizNode {
    pub fn new(executor: &rclrs::Executor, name: &str) -> Result<Arc<Self>, rclrs::RclrsError> {
        // Create a node using the executor
        let node = executor.create_node(name)?;

        // Default parameters
        let config = RendererConfig::default();

        // Print parameter values
        println!(
            "Using parameters: update_rate={}, max_weight={}",
            config.update_rate, config.max_weight
        );
        println!(
            "Topics: particle cloud={}, markers={}",
            topics::WEIGHTED_PARTICLECLOUD,
            topics::WEIGHTED_PARTICLECLOUD_MARKERS
        );

        // Create the visualization stack and grab the store handle before
        // the stack is moved into the core
        let viz_stack = VisualizationStack::with_config(config);
        let store = viz_stack.store();
        let tick_period = Duration::from_secs_f64(1.0 / config.update_rate);

        // Register components
        let mut core = ParticleVizCore::new();
        core.register(viz_stack);

        // Initialize the core
        if let Err(e) = core.init() {
            eprintln!("Failed to initialize core: {}", e);
        }

        // Create publisher for the marker array
        let marker_publisher = node.create_publisher::<MarkerArray>(
            topics::WEIGHTED_PARTICLECLOUD_MARKERS,
            QOS_PROFILE_DEFAULT,
        )?;

        // Create the node instance with a running flag
        let running = Arc::new(Mutex::new(true));

        let particle_viz_node = Arc::new(ParticleVizNode {
            core: Mutex::new(core),
            node,
            marker_publisher,
            cloud_subscription: None.into(),
            running,
        });

        // Set up the particle cloud subscription; each delivery overwrites
        // the stored cloud wholesale
        let cloud_subscription = particle_viz_node
            .node
            .create_subscription::<ParticleCloud, _>(
                topics::WEIGHTED_PARTICLECLOUD,
                QOS_PROFILE_DEFAULT,
                move |msg: ParticleCloud| {
                    Self::cloud_callback(&store, msg);
                },
            )?;

        *particle_viz_node.cloud_subscription.lock().unwrap() = Some(cloud_subscription);

        // Start a thread to render the latest cloud at a fixed rate
        let particle_viz_node_clone = Arc::clone(&particle_viz_node);
        let running_clone = Arc::clone(&particle_viz_node.running);

        thread::spawn(move || {
            while *running_clone.lock().unwrap() {
                particle_viz_node_clone.timer_callback();
                thread::sleep(tick_period); // 10 Hz by default
            }
        });

        Ok(particle_viz_node)
    }

    fn cloud_callback(store: &ParticleStore, msg: ParticleCloud) {
        store.update(msg);
    }

    fn timer_callback(&self) {
        // Render whatever the store currently holds; an empty store just
        // produces an empty marker array
        let mut core = self.core.lock().unwrap();

        if let Some(viz_stack) = core.visualization_stack_mut() {
            if !viz_stack.is_active() {
                return;
            }

            let marker_array = viz_stack.tick();

            if let Err(e) = self.marker_publisher.publish(&marker_array) {
                eprintln!("Failed to publish marker array: {}", e);
            }
        } else {
            eprintln!("Visualization stack not found, skipping tick");
        }
    }
}

impl Drop for ParticleVizNode {
    fn drop(&mut self) {
        // Stop the render thread when the node is dropped
        if let Ok(mut running) = self.running.lock() {
            *running = false;
        }

        let mut core = self.core.lock().unwrap();
        if let Err(e) = core.shutdown() {
            eprintln!("Failed to shutdown core: {}", e);
        }
    }
}

fn main() -> Result<(), Error> {
    println!("Initializing Particle Viz Node...");

    // Create the ROS 2 context and executor
    // TODO: This will automatically read parameters from the parameter file
    // when launched with --ros-args --params-file /path/to/config/particle_viz_params.yaml
    let mut executor = Context::default_from_env()?.create_basic_executor();

    // Create the particle visualization node
    let _particle_viz_node = ParticleVizNode::new(&executor, "particle_viz")?;

    println!("Particle Viz Node initialized. Starting to spin...");
    println!("To use with parameters: ros2 run particle_viz particle_viz_node --ros-args --params-file /path/to/particle_viz/config/particle_viz_params.yaml");

    // Spin the executor to process callbacks
    executor
        .spin(SpinOptions::default())
        .first_error()
        .map_err(|err| err.into())
}
