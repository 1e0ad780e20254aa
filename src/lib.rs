pub mod common;
pub mod lifecycle;
pub mod visualization;

use crate::lifecycle::LifecycleNode;
use crate::visualization::VisualizationStack;

/// Core of the particle weight visualizer
pub struct ParticleVizCore {
    components: Vec<Box<dyn LifecycleNode>>,
}

impl ParticleVizCore {
    /// Create a new instance of ParticleVizCore
    pub fn new() -> Self {
        ParticleVizCore {
            components: Vec::new(),
        }
    }

    /// Register a component with the core
    pub fn register<T: LifecycleNode + 'static>(&mut self, component: T) {
        self.components.push(Box::new(component));
    }

    /// Configure and activate all registered components
    pub fn init(&mut self) -> Result<(), String> {
        for component in &mut self.components {
            component.on_configure()?;
            component.on_activate()?;
        }
        Ok(())
    }

    /// Deactivate and clean up all registered components
    pub fn shutdown(&mut self) -> Result<(), String> {
        for component in &mut self.components {
            component.on_deactivate()?;
            component.on_cleanup()?;
        }
        Ok(())
    }

    /// Get a reference to the visualization stack, if one is registered
    pub fn visualization_stack_mut(&mut self) -> Option<&mut VisualizationStack> {
        self.components
            .iter_mut()
            .find_map(|component| component.as_any_mut().downcast_mut::<VisualizationStack>())
    }
}
