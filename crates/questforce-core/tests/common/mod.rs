use std::sync::Arc;

use jiff::Timestamp;
use questforce_core::{ManualClock, Registry, RegistryBuilder};

/// 2026-02-01T00:00:00Z
pub const NOW: Timestamp = Timestamp::constant(1_769_904_000, 0);

/// Helper function to create a registry over the seed data with a fixed clock
pub fn create_test_registry() -> (Arc<ManualClock>, Registry) {
    let clock = Arc::new(ManualClock::new(NOW));
    let registry = RegistryBuilder::new()
        .with_clock(clock.clone())
        .build()
        .expect("Failed to create registry");
    (clock, registry)
}
