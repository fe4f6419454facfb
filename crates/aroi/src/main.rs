//! aroi: upload a photo of a Thai dish, send it to the prediction
//! service, and show what came back.

use aroi_api::{ApiConfig, Session, SessionEvent};
use aroi_io::{
    ErrorBanner, FileUpload, ResultsPanel, ServiceStatus, StatusBadge, client, console, preview,
};
use dioxus::prelude::*;

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the page state -- one [`Session`] signal advanced through
/// [`Session::apply`], plus the preview Blob URL and the health badge
/// -- and wires the upload, submit, reset, and result components
/// together. Rendering is a pure function of that state.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let mut session = use_signal(Session::default);
    let mut preview_url = use_signal(|| Option::<String>::None);
    let mut service_status = use_signal(|| ServiceStatus::Checking);

    // --- Startup health probe ---
    // Fires once; the outcome only feeds the status badge and never
    // blocks the upload flow.
    use_effect(move || {
        spawn(async move {
            let config = ApiConfig::from_build_env();
            match client::health(&config).await {
                Ok(health) if health.is_ready() => service_status.set(ServiceStatus::Online),
                Ok(_) => service_status.set(ServiceStatus::Offline),
                Err(err) => {
                    client::trace_error(&err);
                    service_status.set(ServiceStatus::Offline);
                }
            }
        });
    });

    // --- File upload handler ---
    let on_upload = move |image: aroi_api::SelectedImage| {
        // Swap the preview URL, revoking the one it replaces.
        if let Some(old) = preview_url() {
            preview::revoke_blob_url(&old);
        }
        match preview::image_to_blob_url(&image) {
            Ok(url) => preview_url.set(Some(url)),
            Err(err) => {
                // Prediction still works without a preview.
                console::error(&format!("preview failed: {err}"));
                preview_url.set(None);
            }
        }
        session.set(session().apply(SessionEvent::ImageSelected(image)));
    };

    // --- Submit handler ---
    // One request in flight at a time: RequestStarted is a session
    // no-op unless an image is selected and nothing is loading, and
    // the button below is disabled in the same condition.
    let on_submit = move |_| {
        let current = session();
        let Some(image) = current.image().cloned() else {
            return;
        };
        if !current.can_submit() {
            return;
        }
        session.set(current.apply(SessionEvent::RequestStarted));

        spawn(async move {
            let config = ApiConfig::from_build_env();
            match client::predict(&config, &image).await {
                Ok(response) => {
                    let next = (*session.peek())
                        .clone()
                        .apply(SessionEvent::RequestSucceeded(response));
                    session.set(next);
                }
                Err(err) => {
                    client::trace_error(&err);
                    let next = (*session.peek()).clone().apply(SessionEvent::RequestFailed(
                        client::GENERIC_FAILURE_MESSAGE.to_owned(),
                    ));
                    session.set(next);
                }
            }
        });
    };

    // --- Reset handler ---
    let on_reset = move |_| {
        if let Some(old) = preview_url() {
            preview::revoke_blob_url(&old);
        }
        preview_url.set(None);
        session.set(session().apply(SessionEvent::Reset));
    };

    let current = session();
    let base_url = ApiConfig::from_build_env().base_url().to_owned();

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/theme.css") }

        div { class: "min-h-screen bg-[var(--bg)] text-[var(--text)] py-12 px-4",
            div { class: "max-w-4xl mx-auto",
                header { class: "text-center mb-12",
                    h1 { class: "text-5xl font-bold text-[var(--text-heading)] mb-4",
                        "🍜 ระบบทายชื่ออาหารไทย"
                    }
                    p { class: "text-[var(--text-secondary)] text-lg mb-2",
                        "อัปโหลดรูปอาหารไทยแล้วให้ AI ทายชื่ออาหารให้คุณ"
                    }
                    StatusBadge { status: service_status() }
                }

                div { class: "bg-[var(--surface-raised)] rounded-2xl shadow-2xl p-8",
                    // Upload zone with inline preview
                    div { class: "mb-8",
                        FileUpload {
                            preview_url: preview_url(),
                            on_upload: on_upload,
                        }
                    }

                    // Actions
                    div { class: "flex gap-4 mb-8",
                        button {
                            class: "flex-1 px-8 py-4 rounded-xl font-semibold text-lg text-white bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)] disabled:opacity-50 disabled:cursor-not-allowed transition-colors",
                            disabled: !current.can_submit(),
                            onclick: on_submit,
                            if current.loading() {
                                "กำลังทำนาย..."
                            } else {
                                "🔮 ทายชื่ออาหาร"
                            }
                        }
                        if current.image().is_some() {
                            button {
                                class: "px-6 py-4 rounded-xl font-semibold bg-[var(--btn-secondary)] hover:bg-[var(--btn-secondary-hover)] text-[var(--text)] transition-colors",
                                onclick: on_reset,
                                "ล้าง"
                            }
                        }
                    }

                    // Error display
                    if let Some(err) = current.error() {
                        div { class: "mb-8",
                            ErrorBanner {
                                message: err.to_owned(),
                                service_url: base_url.clone(),
                            }
                        }
                    }

                    // Results
                    if let Some(response) = current.response() {
                        ResultsPanel { response: response.clone() }
                    }
                }

                footer { class: "text-center mt-8 text-[var(--text-secondary)]",
                    p { "พัฒนาด้วย Dioxus + WebAssembly 🦀" }
                }
            }
        }
    }
}
