//! Component lifecycle management

use std::any::Any;

/// Trait for components managed by the visualizer core
pub trait LifecycleNode: Send + Sync {
    /// Configure the component
    fn on_configure(&mut self) -> Result<(), String>;

    /// Activate the component
    fn on_activate(&mut self) -> Result<(), String>;

    /// Deactivate the component
    fn on_deactivate(&mut self) -> Result<(), String>;

    /// Clean up the component
    fn on_cleanup(&mut self) -> Result<(), String>;

    /// Convert to Any for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// State of a lifecycle component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Unconfigured,
    Inactive,
    Active,
    Finalized,
}

impl State {
    /// Whether the component is in the Active state
    pub fn is_active(&self) -> bool {
        matches!(self, State::Active)
    }
}

/// Shared bookkeeping for lifecycle components
pub struct LifecycleNodeBase {
    name: String,
    state: State,
}

impl LifecycleNodeBase {
    /// Create a new base in the Unconfigured state
    pub fn new(name: &str) -> Self {
        LifecycleNodeBase {
            name: name.to_string(),
            state: State::Unconfigured,
        }
    }

    /// Component name, used in transition logging
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current state
    pub fn get_state(&self) -> State {
        self.state
    }

    /// Set the state
    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }
}
