//! File upload component with drag-and-drop, file picker, and inline
//! preview of the selected photo.

use aroi_api::{SelectImageError, SelectedImage};
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Object URL of the currently selected image, shown inside the
    /// drop zone. `None` shows the picker prompt instead.
    preview_url: Option<String>,
    /// Called with the validated image after a successful selection.
    on_upload: EventHandler<SelectedImage>,
}

/// A drag-and-drop zone with a file picker, showing the chosen photo
/// in place once one is selected.
///
/// Files are validated by sniffing their bytes, not by extension:
/// anything that is not a PNG, JPEG, BMP, or WebP image is reported
/// inline and produces no upload event.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let on_upload = props.on_upload;

    // Validate, read, and forward the first file from a list.
    //
    // Shared by the file-picker (`handle_files`) and drag-and-drop
    // (`handle_drop`) paths so the validation/read/callback logic
    // lives in one place.
    let process_files = move |files: Vec<FileData>| async move {
        if let Some(file) = files.first() {
            let name = file.name();
            match file.read_bytes().await {
                Ok(bytes) => match SelectedImage::from_bytes(bytes.to_vec(), name.clone()) {
                    Ok(image) => {
                        error.set(None);
                        on_upload.call(image);
                    }
                    Err(e) => {
                        error.set(Some(reject_text(&e, &name)));
                    }
                },
                Err(e) => {
                    error.set(Some(format!("อ่านไฟล์ {name} ไม่สำเร็จ: {e}")));
                }
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let border_class = if dragging() {
        "border-[var(--border-accent)] bg-[var(--surface-active)]"
    } else {
        "border-[var(--border-muted)] bg-[var(--surface)]"
    };

    rsx! {
        label {
            class: "flex flex-col items-center justify-center w-full min-h-64 border-2 border-dashed rounded-xl cursor-pointer transition-colors {border_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            if let Some(ref url) = props.preview_url {
                img {
                    src: "{url}",
                    alt: "รูปที่เลือก",
                    class: "w-full max-h-64 object-contain rounded-xl",
                }
            } else {
                div { class: "flex flex-col items-center justify-center py-6 text-[var(--muted)]",
                    Icon { width: 64, height: 64, icon: LdUpload }
                    p { class: "mt-4 mb-1 text-lg text-[var(--text)] font-semibold",
                        "คลิกเพื่อเลือกรูปภาพ หรือลากมาวางที่นี่"
                    }
                    p { class: "text-sm text-[var(--text-secondary)]",
                        "รองรับไฟล์ PNG, JPG, WebP หรือ BMP"
                    }
                }
            }

            if let Some(ref err) = error() {
                p { class: "text-[var(--text-error)] mt-2 mb-2", "{err}" }
            }

            input {
                r#type: "file",
                accept: "image/*",
                class: "hidden",
                onchange: handle_files,
            }
        }
    }
}

/// Thai inline message for a rejected file.
fn reject_text(err: &SelectImageError, name: &str) -> String {
    match err {
        SelectImageError::EmptyFile => format!("ไฟล์ {name} ว่างเปล่า"),
        SelectImageError::NotAnImage | SelectImageError::UnsupportedFormat(_) => {
            format!("ไฟล์ {name} ไม่ใช่รูปภาพที่รองรับ (PNG, JPG, WebP, BMP)")
        }
    }
}
