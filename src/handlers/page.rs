//! Page handlers - the interactive form

use axum::{
    extract::{
        multipart::{Multipart, MultipartError},
        State,
    },
    response::Html,
};

use super::analysis::{log_rejection, score_sample};
use crate::input::Submission;
use crate::render::{self, Outcome};
use crate::{AppResult, AppState};

/// Field carrying the uploaded CSV
pub const FILE_FIELD: &str = "eeg_file";

/// Field carrying the pasted values
pub const TEXT_FIELD: &str = "eeg_text";

/// Empty form
pub async fn index() -> Html<String> {
    Html(render::page(&Outcome::Idle, ""))
}

/// Form submission. Input errors, and forms that cannot be read at all,
/// render on the page with `200 OK` so the user can correct and resubmit.
pub async fn analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Html<String>> {
    let (file, text) = match read_form(multipart).await {
        Ok(form) => form,
        Err(err) => {
            let reason = err.body_text();
            tracing::info!(status = %err.status(), "Unreadable form: {}", reason);
            return Ok(Html(render::page(&Outcome::Unreadable(&reason), "")));
        }
    };

    let source = if file.is_some() { "file" } else { "text" };
    let submission = Submission::from_sources(file.as_deref(), Some(text.as_str()));

    let html = match submission {
        Submission::Idle => render::page(&Outcome::Idle, &text),
        Submission::Invalid(err) => {
            log_rejection(source, &err);
            render::page(&Outcome::Rejected(&err), &text)
        }
        Submission::Valid(sample) => {
            let (sample, result) = score_sample(state.context.clone(), sample).await?;
            render::page(
                &Outcome::Scored {
                    sample: &sample,
                    result: &result,
                },
                &text,
            )
        }
    };

    Ok(Html(html))
}

/// Collect the uploaded file (if one was picked) and the pasted text
async fn read_form(mut multipart: Multipart) -> Result<(Option<Vec<u8>>, String), MultipartError> {
    let mut file: Option<Vec<u8>> = None;
    let mut text = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == FILE_FIELD {
            // browsers send an empty, unnamed part when no file was picked
            let picked = field.file_name().is_some_and(|n| !n.is_empty());
            let bytes = field.bytes().await?;
            if picked || !bytes.is_empty() {
                file = Some(bytes.to_vec());
            }
        } else if name == TEXT_FIELD {
            text = field.text().await?;
        }
    }

    Ok((file, text))
}
