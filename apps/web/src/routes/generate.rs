//! Axum route handler for PDF generation.

use std::sync::Arc;

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use chrono::Utc;
use tracing::{info, warn};

use crate::document::{build_pdf, download_filename};
use crate::errors::AppError;
use crate::models::submission::ResumeSubmission;
use crate::state::AppState;

/// POST /generate
///
/// Reads the form fields (missing ones are empty), renders the résumé and
/// returns it as a `{slug}-{YYYYMMDD}.pdf` attachment.
pub async fn handle_generate(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, AppError> {
    let submission = read_submission(request).await;
    let now = Utc::now();
    let filename = download_filename(&submission.full_name, now.date_naive());

    // Layout and encoding are CPU-bound
    let fonts = Arc::clone(&state.fonts);
    let pdf = tokio::task::spawn_blocking(move || build_pdf(&submission, (*fonts).clone(), now))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    info!(%filename, bytes = pdf.len(), "Generated resume PDF");

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, Bytes::from(pdf)).into_response())
}

/// Decodes a multipart or urlencoded body. Any other or missing content type
/// is read as urlencoded; an unreadable body counts as an empty form.
async fn read_submission(request: Request) -> ResumeSubmission {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        });

    if is_multipart {
        return match Multipart::from_request(request, &()).await {
            Ok(multipart) => read_multipart(multipart).await,
            Err(rejection) => {
                warn!(%rejection, "Unreadable multipart form, rendering defaults");
                ResumeSubmission::default()
            }
        };
    }

    match Bytes::from_request(request, &()).await {
        Ok(body) => ResumeSubmission::from_pairs(form_urlencoded::parse(&body)),
        Err(rejection) => {
            warn!(%rejection, "Unreadable form body, rendering defaults");
            ResumeSubmission::default()
        }
    }
}

/// Text fields only; file parts are skipped. A malformed part ends the read
/// and keeps what came before it.
async fn read_multipart(mut multipart: Multipart) -> ResumeSubmission {
    let mut pairs = Vec::new();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Malformed multipart form");
                break;
            }
        };
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match field.text().await {
            Ok(value) => pairs.push((name, value)),
            Err(e) => {
                warn!(error = %e, field = %name, "Malformed multipart field");
                break;
            }
        }
    }
    ResumeSubmission::from_pairs(pairs)
}
