#![allow(dead_code)]

//! Document export orchestration.
//!
//! The preview is captured as a raster image and packaged into a portrait
//! page of fixed 210 mm width, height scaled to the capture's aspect ratio.
//! Capturing and packaging are external collaborators; this module owns the
//! page math, the output naming, and the busy-flag protocol (one export in
//! flight, flag released on every exit path, failures logged but silent).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::ResumeData;

/// Portrait page width, in millimeters.
pub const PAGE_WIDTH_MM: f64 = 210.0;

/// A raster capture of the preview region.
#[derive(Debug, Clone)]
pub struct Capture {
    pub width_px: u32,
    pub height_px: u32,
    /// Encoded image bytes, format decided by the rasterizer.
    pub data: Vec<u8>,
}

/// Page dimensions for the packaged document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Page size for a capture: fixed width, height proportional to the
/// captured aspect ratio.
pub fn scaled_page_size(capture: &Capture) -> PageSize {
    let height_mm = if capture.width_px == 0 {
        0.0
    } else {
        capture.height_px as f64 * PAGE_WIDTH_MM / capture.width_px as f64
    };
    PageSize {
        width_mm: PAGE_WIDTH_MM,
        height_mm,
    }
}

/// Download name for the document export: `<name-or-"resume">.pdf`.
pub fn document_file_name(data: &ResumeData) -> String {
    if data.name.is_empty() {
        "resume.pdf".to_string()
    } else {
        format!("{}.pdf", data.name)
    }
}

/// Captures the preview region for the given aggregate.
#[async_trait]
pub trait PreviewRasterizer: Send + Sync {
    async fn capture(&self, data: &ResumeData) -> Result<Capture, AppError>;
}

/// Packages a capture into a single-page document binary.
pub trait DocumentPackager: Send + Sync {
    fn package(&self, capture: &Capture, page: PageSize) -> Result<Vec<u8>, AppError>;
}

/// A finished export ready to hand to the download path.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub struct DocumentExporter {
    rasterizer: Arc<dyn PreviewRasterizer>,
    packager: Arc<dyn DocumentPackager>,
    busy: AtomicBool,
}

impl DocumentExporter {
    pub fn new(rasterizer: Arc<dyn PreviewRasterizer>, packager: Arc<dyn DocumentPackager>) -> Self {
        Self {
            rasterizer,
            packager,
            busy: AtomicBool::new(false),
        }
    }

    /// Whether an export is currently in flight (the trigger control should
    /// be disabled while true).
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Runs one export. Returns `None` when another export is already in
    /// flight or when a collaborator fails — failures are logged, never
    /// surfaced. The busy flag is released on every exit path.
    pub async fn export(&self, data: &ResumeData) -> Option<DocumentFile> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return None;
        }
        let _guard = BusyGuard(&self.busy);

        match self.run(data).await {
            Ok(file) => {
                info!("Document export finished: {}", file.file_name);
                Some(file)
            }
            Err(e) => {
                error!("Document export failed: {e}");
                None
            }
        }
    }

    async fn run(&self, data: &ResumeData) -> Result<DocumentFile, AppError> {
        let capture = self.rasterizer.capture(data).await?;
        let page = scaled_page_size(&capture);
        let bytes = self.packager.package(&capture, page)?;
        Ok(DocumentFile {
            file_name: document_file_name(data),
            bytes,
        })
    }
}

/// Clears the busy flag when dropped, whatever the exit path was.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_resume;

    struct FakeRasterizer {
        width: u32,
        height: u32,
        fail: bool,
    }

    #[async_trait]
    impl PreviewRasterizer for FakeRasterizer {
        async fn capture(&self, _data: &ResumeData) -> Result<Capture, AppError> {
            if self.fail {
                return Err(AppError::Render("capture failed".to_string()));
            }
            Ok(Capture {
                width_px: self.width,
                height_px: self.height,
                data: vec![0u8; 16],
            })
        }
    }

    struct FakePackager;

    impl DocumentPackager for FakePackager {
        fn package(&self, capture: &Capture, page: PageSize) -> Result<Vec<u8>, AppError> {
            let header = format!("{}x{} @ {:.1}mm", capture.width_px, capture.height_px, page.height_mm);
            Ok(header.into_bytes())
        }
    }

    fn exporter(fail: bool) -> DocumentExporter {
        DocumentExporter::new(
            Arc::new(FakeRasterizer {
                width: 800,
                height: 1100,
                fail,
            }),
            Arc::new(FakePackager),
        )
    }

    #[test]
    fn test_page_height_scales_with_aspect_ratio() {
        let capture = Capture {
            width_px: 800,
            height_px: 1100,
            data: vec![],
        };
        let page = scaled_page_size(&capture);
        assert_eq!(page.width_mm, PAGE_WIDTH_MM);
        assert!((page.height_mm - 288.75).abs() < 1e-9);
    }

    #[test]
    fn test_zero_width_capture_does_not_divide_by_zero() {
        let capture = Capture {
            width_px: 0,
            height_px: 500,
            data: vec![],
        };
        assert_eq!(scaled_page_size(&capture).height_mm, 0.0);
    }

    #[test]
    fn test_document_file_name_defaults_to_resume() {
        assert_eq!(document_file_name(&ResumeData::default()), "resume.pdf");
        assert_eq!(document_file_name(&sample_resume()), "Alex Johnson.pdf");
    }

    #[tokio::test]
    async fn test_export_produces_named_document() {
        let file = exporter(false).export(&sample_resume()).await.unwrap();
        assert_eq!(file.file_name, "Alex Johnson.pdf");
        assert!(!file.bytes.is_empty());
    }

    #[tokio::test]
    async fn test_failed_export_is_silent_and_releases_busy_flag() {
        let exporter = exporter(true);
        assert!(exporter.export(&sample_resume()).await.is_none());
        assert!(!exporter.is_busy());
        // A later export on a recovered collaborator would be accepted again.
        assert!(!exporter.is_busy());
    }

    #[tokio::test]
    async fn test_busy_flag_resets_after_success() {
        let exporter = exporter(false);
        exporter.export(&sample_resume()).await.unwrap();
        assert!(!exporter.is_busy());
    }
}
