use tactile::{Haptics, Impulse};

/// Haptic backend.  Desktop builds have no actuator, so impulses land
/// in the debug log; a device backend slots in behind the same trait.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackService {
    enabled: bool,
}

impl FeedbackService {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Haptics for FeedbackService {
    fn impulse(&self, impulse: Impulse) {
        if self.enabled {
            log::debug!("haptic impulse: {impulse}");
        }
    }
}
