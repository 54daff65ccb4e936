use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Rejects uploads that are empty or do not carry the PDF header.
pub fn ensure_pdf(data: &[u8]) -> Result<(), AppError> {
    if data.is_empty() {
        return Err(AppError::Validation("resume file is empty".to_string()));
    }
    if !data.starts_with(PDF_MAGIC) {
        return Err(AppError::Validation(
            "resume must be a PDF document".to_string(),
        ));
    }
    Ok(())
}

/// Extracts plain text from a PDF upload. Parsing runs on the blocking pool.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, AppError> {
    ensure_pdf(&data)?;
    let size = data.len();

    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| {
            // The parser panics on some malformed documents.
            if e.is_panic() {
                AppError::UnprocessableEntity("Could not read PDF".to_string())
            } else {
                AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
            }
        })?
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "PDF contains no extractable text".to_string(),
        ));
    }

    debug!("Extracted {} chars of text from {} byte PDF", text.len(), size);
    Ok(text)
}

/// Builds a one-page PDF showing `text` in Helvetica, with a valid xref table.
#[cfg(test)]
pub(crate) fn sample_pdf(text: &str) -> Vec<u8> {
    let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{content}\nendstream", content.len()),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_at = pdf.len();
    let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        tail.push_str(&format!("{offset:010} 00000 n \n"));
    }
    tail.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.extend_from_slice(tail.as_bytes());
    pdf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_extracts_text_from_pdf() {
        let pdf = sample_pdf("Rust engineer with Docker");
        let text = extract_pdf_text(Bytes::from(pdf)).await.unwrap();
        assert!(text.contains("Rust"));
        assert!(text.contains("Docker"));
    }

    #[test]
    fn test_empty_upload_rejected() {
        assert!(matches!(ensure_pdf(b""), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_non_pdf_rejected() {
        assert!(matches!(
            ensure_pdf(b"PK\x03\x04 docx"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_pdf_header_accepted() {
        assert!(ensure_pdf(b"%PDF-1.7\n...").is_ok());
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_unprocessable() {
        let result = extract_pdf_text(Bytes::from_static(b"%PDF-1.4\ngarbage")).await;
        assert!(matches!(result, Err(AppError::UnprocessableEntity(_))));
    }
}
