//! Visualization module for the particle weight visualizer
pub mod render;
pub mod store;

use self::render::{MarkerRenderer, RendererConfig};
use self::store::ParticleStore;
use crate::lifecycle::{LifecycleNode, LifecycleNodeBase, State};
use std::any::Any;
use visualization_msgs::msg::MarkerArray;

/// Visualization stack: owns the particle store and the renderer.
///
/// Inbound clouds land in the store through a cloned handle; each render
/// tick snapshots the store and produces one marker array.
pub struct VisualizationStack {
    base: LifecycleNodeBase,
    store: ParticleStore,
    renderer: MarkerRenderer,
}

impl VisualizationStack {
    /// Create a visualization stack with default configuration
    pub fn new() -> Self {
        VisualizationStack::with_config(RendererConfig::default())
    }

    /// Create a visualization stack with a specific configuration
    pub fn with_config(config: RendererConfig) -> Self {
        VisualizationStack {
            base: LifecycleNodeBase::new("visualization_stack"),
            store: ParticleStore::new(),
            renderer: MarkerRenderer::new(config),
        }
    }

    /// Clone of the store handle, for the subscription callback
    pub fn store(&self) -> ParticleStore {
        self.store.clone()
    }

    /// The renderer configuration
    pub fn config(&self) -> &RendererConfig {
        self.renderer.config()
    }

    /// Whether the stack has been activated
    pub fn is_active(&self) -> bool {
        self.base.get_state().is_active()
    }

    /// Render the current cloud into a marker array.
    ///
    /// Re-renders whatever the store holds; if no cloud has arrived the
    /// result is an empty array.
    pub fn tick(&self) -> MarkerArray {
        self.renderer.render(&self.store.current())
    }
}

impl LifecycleNode for VisualizationStack {
    fn on_configure(&mut self) -> Result<(), String> {
        println!("Configuring {}", self.base.name());
        self.base.set_state(State::Inactive);
        Ok(())
    }

    fn on_activate(&mut self) -> Result<(), String> {
        println!("Activating {}", self.base.name());
        self.base.set_state(State::Active);
        Ok(())
    }

    fn on_deactivate(&mut self) -> Result<(), String> {
        println!("Deactivating {}", self.base.name());
        self.base.set_state(State::Inactive);
        Ok(())
    }

    fn on_cleanup(&mut self) -> Result<(), String> {
        println!("Cleaning up {}", self.base.name());
        self.base.set_state(State::Unconfigured);
        Ok(())
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
