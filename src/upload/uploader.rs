use crate::upload::error::UploadError;
use crate::upload::types::{SelectedFile, StatusClass, UploadRequest, UploadResult};
use crate::upload::view::StatusView;
use crate::utils::file_size::FileSizeUtils;
use hyper::ext::ReasonPhrase;
use log::{debug, error, info, warn};

const UPLOAD_PATH: &str = "/api/upload_function";
const LOADING_MESSAGE: &str = "Uploading file, please wait...";

/// Builds `{endpoint}/api/upload_function?email=<percent-encoded email>`.
pub fn build_upload_url(endpoint: &str, email: &str) -> String {
    format!(
        "{}{}?email={}",
        endpoint.trim_end_matches('/'),
        UPLOAD_PATH,
        urlencoding::encode(email)
    )
}

/// The reason phrase the server sent. hyper only records it when it differs
/// from the canonical one for the status code.
fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

fn success_message(job_id: &str) -> String {
    format!(
        "Upload succeeded! Your job ID is: {}. Results will be sent to your email once the analysis completes.",
        job_id
    )
}

fn validate(email: &str, file: Option<&SelectedFile>) -> Result<UploadRequest, UploadError> {
    if email.is_empty() {
        return Err(UploadError::MissingEmail);
    }
    let file = file.ok_or(UploadError::MissingFile)?;
    Ok(UploadRequest {
        email: email.to_string(),
        file: file.clone(),
    })
}

#[derive(Clone)]
pub struct Uploader {
    client: reqwest::Client,
    endpoint: String,
}

impl Uploader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Validates the inputs, sends the file and reports every step to `view`.
    ///
    /// Validation failures are reported without touching the loading state
    /// or the network. Once loading has been entered it is always left again,
    /// whatever the outcome of the request.
    pub async fn submit<V: StatusView + ?Sized>(
        &self,
        view: &mut V,
        email: &str,
        file: Option<&SelectedFile>,
    ) -> Result<UploadResult, UploadError> {
        let request = match validate(email, file) {
            Ok(request) => request,
            Err(e) => {
                debug!("Rejected upload: {}", e);
                view.set_status(&e.to_string(), StatusClass::Error);
                return Err(e);
            }
        };

        view.set_status(LOADING_MESSAGE, StatusClass::Neutral);
        view.set_loading(true);

        let outcome = self.send(&request).await;
        match &outcome {
            Ok(result) => {
                view.set_status(&success_message(&result.job_id), StatusClass::Success);
            }
            Err(e) => {
                error!("Upload of '{}' failed: {}", request.file.name, e);
                view.set_status(&format!("Error: {}", e), StatusClass::Error);
            }
        }

        view.set_loading(false);
        outcome
    }

    async fn send(&self, request: &UploadRequest) -> Result<UploadResult, UploadError> {
        let url = build_upload_url(&self.endpoint, &request.email);
        debug!("Upload URL: {}", url);

        let body = tokio::fs::read(&request.file.path).await?;
        info!(
            "Uploading '{}' ({}) for {}",
            request.file.name,
            FileSizeUtils::format_size(body.len() as u64),
            request.email
        );

        let response = self.client.post(&url).body(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upload endpoint answered with status: {}", status);
            return Err(UploadError::Status {
                code: status.as_u16(),
                reason: reason_phrase(&response),
            });
        }

        let bytes = response.bytes().await?;
        let result: UploadResult = serde_json::from_slice(&bytes)?;
        info!(
            "Upload accepted with job ID {} (status: {})",
            result.job_id,
            result.status.as_deref().unwrap_or("unknown")
        );
        Ok(result)
    }
}
