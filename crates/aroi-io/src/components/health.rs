//! Service status badge fed by the startup health probe.

use dioxus::prelude::*;

/// Outcome of the startup `GET /health` probe.
///
/// Informational only: an offline badge never blocks the upload flow,
/// since the probe may race the service starting up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    /// Probe still in flight.
    Checking,
    /// Service answered and reported its model loaded.
    Online,
    /// Probe failed or the service is not ready.
    Offline,
}

impl ServiceStatus {
    /// Badge text for this status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Checking => "กำลังตรวจสอบบริการ...",
            Self::Online => "บริการพร้อมใช้งาน",
            Self::Offline => "ไม่พบบริการทำนายผล",
        }
    }

    /// CSS class selecting the badge color.
    const fn class(self) -> &'static str {
        match self {
            Self::Checking => "text-[var(--muted)]",
            Self::Online => "text-[var(--text-success)]",
            Self::Offline => "text-[var(--text-error)]",
        }
    }
}

/// Props for the [`StatusBadge`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StatusBadgeProps {
    /// Current probe outcome.
    status: ServiceStatus,
}

/// Small colored dot + text reflecting the health probe outcome.
#[component]
pub fn StatusBadge(props: StatusBadgeProps) -> Element {
    let class = props.status.class();
    let label = props.status.label();
    rsx! {
        p { class: "text-sm {class}", "● {label}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_label() {
        for status in [
            ServiceStatus::Checking,
            ServiceStatus::Online,
            ServiceStatus::Offline,
        ] {
            assert!(!status.label().is_empty());
        }
    }
}
