use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreatAssessment {
    pub threat_level: ThreatLevel,
    pub analysis: String,
}

/// Stub intrusion detection system.
///
/// Tracks only its own active flag and returns a constant low-threat
/// verdict for every request.
#[derive(Debug, Default)]
pub struct IntrusionDetection {
    active: AtomicBool,
}

impl IntrusionDetection {
    #[must_use]
    pub const fn new() -> Self {
        Self { active: AtomicBool::new(false) }
    }

    pub fn start(&self) {
        self.active.store(true, Ordering::SeqCst);
        tracing::info!("Intrusion detection started (stub)");
    }

    pub fn stop(&self) {
        self.active.store(false, Ordering::SeqCst);
        tracing::info!("Intrusion detection stopped (stub)");
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    // TODO: replace the constant verdict with real anomaly scoring once the
    // request-pattern model lands.
    #[must_use]
    pub fn analyze_request(&self, _method: &str, _path: &str) -> ThreatAssessment {
        ThreatAssessment {
            threat_level: ThreatLevel::Low,
            analysis: "stub_implementation".to_string(),
        }
    }
}
