//! Alert region for a failed prediction request.

use dioxus::prelude::*;

/// Props for the [`ErrorBanner`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ErrorBannerProps {
    /// The user-facing failure message.
    message: String,
    /// Base URL of the backing service, shown in the hint so the user
    /// knows what to check.
    service_url: String,
}

/// Error alert with a hint to check that the backing service is up.
///
/// Every failure -- transport, HTTP status, malformed body -- arrives
/// here as the same generic message; the view stays interactive.
#[component]
pub fn ErrorBanner(props: ErrorBannerProps) -> Element {
    rsx! {
        div {
            role: "alert",
            class: "p-4 bg-[var(--error-bg)] border-l-4 border-[var(--error-border)] rounded-lg",
            p { class: "font-semibold text-[var(--text-error)]", "เกิดข้อผิดพลาด:" }
            p { class: "text-[var(--text-error)]", "{props.message}" }
            p { class: "text-sm mt-2 text-[var(--text-secondary)]",
                "⚠️ กรุณาตรวจสอบว่าบริการทำนายผลกำลังทำงานอยู่ที่ {props.service_url}"
            }
        }
    }
}
