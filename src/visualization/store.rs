//! Latest-value store for inbound particle clouds

use nav2_msgs::msg::ParticleCloud;
use std::sync::{Arc, Mutex};

/// Holds the most recently received particle cloud.
///
/// The handle is cheap to clone; all clones share one cloud. The
/// subscription callback writes through one clone while the render loop
/// reads through another, so replacement and snapshot serialize on the
/// inner mutex and a reader can never observe a partially replaced cloud.
#[derive(Clone)]
pub struct ParticleStore {
    latest: Arc<Mutex<ParticleCloud>>,
}

impl ParticleStore {
    /// Create a store holding an empty cloud (no particles, default header)
    pub fn new() -> Self {
        ParticleStore {
            latest: Arc::new(Mutex::new(ParticleCloud::default())),
        }
    }

    /// Replace the stored cloud wholesale.
    ///
    /// No validation is performed; whatever arrived is what the next
    /// `current()` returns. The previous cloud is discarded.
    pub fn update(&self, cloud: ParticleCloud) {
        *self.latest.lock().unwrap() = cloud;
    }

    /// Snapshot of the most recently stored cloud.
    ///
    /// Returns the empty cloud if nothing has been received yet.
    pub fn current(&self) -> ParticleCloud {
        self.latest.lock().unwrap().clone()
    }
}
