use tracing::{info, warn};

use crate::client::{ApiClient, FilePart};
use crate::error::ApiError;
use crate::forms;
use crate::models::{Attachment, Content, NewContentRequest, UpdateContentRequest};
use crate::mutation::CascadeReport;

pub const CONTENTS_PATH: &str = "/contents";
pub const ATTACHMENTS_PATH: &str = "/attachments";

#[derive(Clone)]
pub struct ContentService {
    api: ApiClient,
}

impl ContentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create(&self, req: &NewContentRequest) -> Result<Content, ApiError> {
        forms::validate(req)?;
        self.api.post(CONTENTS_PATH, req).await
    }

    pub async fn get(&self, id: i64) -> Result<Content, ApiError> {
        self.api.get(&format!("{}/{}", CONTENTS_PATH, id)).await
    }

    pub async fn update(&self, id: i64, req: &UpdateContentRequest) -> Result<Content, ApiError> {
        forms::validate(req)?;
        self.api.patch(&format!("{}/{}", CONTENTS_PATH, id), req).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("{}/{}", CONTENTS_PATH, id)).await
    }

    pub async fn attachments(&self, content_id: i64) -> Result<Vec<Attachment>, ApiError> {
        self.api
            .get(&format!("{}/{}/attachments", CONTENTS_PATH, content_id))
            .await
    }

    pub async fn upload_attachment(&self, content_id: i64, file: FilePart) -> Result<Attachment, ApiError> {
        let name = file.file_name.clone();
        let attachment: Attachment = self
            .api
            .upload(&format!("{}/{}/attachments", CONTENTS_PATH, content_id), file)
            .await?;
        info!("Uploaded {} to content {} as attachment {}", name, content_id, attachment.id);
        Ok(attachment)
    }

    pub async fn delete_attachment(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("{}/{}", ATTACHMENTS_PATH, id)).await
    }

    /// Deletes each attachment, then the content itself.
    ///
    /// Not transactional. A failed attachment delete is logged and recorded
    /// in the report but never stops the remaining steps; only the final
    /// content delete decides the returned `Result`.
    pub async fn delete_with_attachments(
        &self,
        content_id: i64,
        attachments: &[Attachment],
    ) -> Result<CascadeReport, ApiError> {
        let mut report = CascadeReport::default();

        for attachment in attachments {
            match self.delete_attachment(attachment.id).await {
                Ok(()) => report.deleted_children.push(attachment.id),
                Err(e) => {
                    warn!(
                        "Failed to delete attachment {} of content {}: {}",
                        attachment.id, content_id, e
                    );
                    report.failed_children.push((attachment.id, e));
                }
            }
        }

        self.delete(content_id).await?;
        info!(
            "Deleted content {} ({} of {} attachments removed)",
            content_id,
            report.deleted_children.len(),
            report.attempted()
        );
        Ok(report)
    }
}
