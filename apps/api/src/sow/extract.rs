//! Upload decoding: turns the bytes of an uploaded document into analysable text.
//!
//! PDF parsing is CPU-bound and runs on the blocking pool under a deadline, so a
//! pathological upload neither stalls the async workers nor hangs the request.

use std::time::Duration;

use crate::errors::AppError;

const PDF_MIME: &str = "application/pdf";
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// An uploaded file as received from the multipart body.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl UploadedDocument {
    pub fn is_pdf(&self) -> bool {
        self.content_type.as_deref() == Some(PDF_MIME)
            || self.filename.to_lowercase().ends_with(".pdf")
            || self.data.starts_with(PDF_MAGIC)
    }
}

/// PDFs go through `pdf-extract`; everything else is decoded as (lossy) UTF-8.
pub async fn extract_text(document: UploadedDocument) -> Result<String, AppError> {
    if !document.is_pdf() {
        return Ok(String::from_utf8_lossy(&document.data).into_owned());
    }
    extract_pdf_text(document, PDF_EXTRACTION_TIMEOUT).await
}

async fn extract_pdf_text(
    document: UploadedDocument,
    deadline: Duration,
) -> Result<String, AppError> {
    let filename = document.filename;
    let data = document.data;

    let extracted = tokio::time::timeout(
        deadline,
        tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&data).map_err(|e| format!("{e:?}"))
        }),
    )
    .await
    .map_err(|_| AppError::UnprocessableEntity(format!("Timed out reading PDF '{filename}'")))?
    // A panic inside the parser surfaces here as a join error.
    .map_err(|e| {
        AppError::UnprocessableEntity(format!("Could not read PDF '{filename}': {e}"))
    })?;

    extracted.map_err(|e| {
        AppError::UnprocessableEntity(format!("Could not read PDF '{filename}': {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(filename: &str, content_type: Option<&str>, data: &[u8]) -> UploadedDocument {
        UploadedDocument {
            filename: filename.to_string(),
            content_type: content_type.map(str::to_string),
            data: data.to_vec(),
        }
    }

    #[tokio::test]
    async fn test_plain_text_is_decoded() {
        let doc = upload("req.txt", Some("text/plain"), b"Migrate to BigQuery");
        assert_eq!(extract_text(doc).await.unwrap(), "Migrate to BigQuery");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced_not_rejected() {
        let doc = upload("req.txt", None, &[b'o', b'k', 0xff, b'!']);
        assert_eq!(extract_text(doc).await.unwrap(), "ok\u{fffd}!");
    }

    #[test]
    fn test_pdf_detection() {
        assert!(upload("a.PDF", None, b"").is_pdf());
        assert!(upload("upload", Some("application/pdf"), b"").is_pdf());
        assert!(upload("upload.bin", None, b"%PDF-1.4\n").is_pdf());
        assert!(!upload("notes.md", Some("text/markdown"), b"# Notes").is_pdf());
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_unprocessable() {
        let doc = upload("broken.pdf", Some("application/pdf"), b"definitely not a pdf");
        assert!(matches!(
            extract_text(doc).await,
            Err(AppError::UnprocessableEntity(_))
        ));
    }

    #[tokio::test]
    async fn test_truncated_pdf_is_unprocessable() {
        let doc = upload(
            "truncated.pdf",
            None,
            b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\nxref\n0 2\n",
        );
        match extract_text(doc).await {
            Err(AppError::UnprocessableEntity(msg)) => assert!(msg.contains("truncated.pdf")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
