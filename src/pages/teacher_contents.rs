use tracing::warn;

use crate::client::FilePart;
use crate::error::ApiError;
use crate::forms::FormState;
use crate::list::{Filters, ListController, LoadOutcome, SearchBox};
use crate::models::{Attachment, Content, ContentStatus, ContentType, NewContentRequest, Role};
use crate::mutation::{CascadeReport, Confirm};
use crate::services::ContentService;
use crate::services::content_service::CONTENTS_PATH;
use crate::session::AppContext;

use super::KEYWORD;

/// Contents of one course instance plus the attachment panel of the
/// selected content.
pub struct TeacherContents {
    pub course_instance_id: i64,
    pub list: ListController<Content>,
    search: SearchBox,
    contents: ContentService,
    selected: Option<(i64, Vec<Attachment>)>,
}

impl TeacherContents {
    pub async fn open(ctx: &AppContext, course_instance_id: i64) -> Result<Self, ApiError> {
        ctx.require_role(&[Role::Teacher, Role::Admin])?;
        let mut filters = Filters::new();
        filters.set("courseInstanceId", &course_instance_id.to_string());
        let config = ctx.config();
        let list =
            ListController::with_filters(ctx.api().clone(), CONTENTS_PATH, config.page_size, filters);
        let search = SearchBox::attach(&list, KEYWORD, config.search_debounce);
        list.load(0).await;
        Ok(Self {
            course_instance_id,
            list,
            search,
            contents: ContentService::new(ctx.api().clone()),
            selected: None,
        })
    }

    pub fn search(&self, text: &str) {
        self.search.input(text);
    }

    pub async fn filter_type(&self, content_type: Option<ContentType>) -> LoadOutcome {
        self.list
            .set_filter("type", content_type.map(ContentType::as_str).unwrap_or_default())
            .await
    }

    pub async fn filter_status(&self, status: Option<ContentStatus>) -> LoadOutcome {
        self.list
            .set_filter("status", status.map(ContentStatus::as_str).unwrap_or_default())
            .await
    }

    pub async fn create_content(&self, form: &mut FormState, req: &NewContentRequest) -> Option<Content> {
        let created = form.submit(req, || self.contents.create(req)).await?;
        self.list.reload().await;
        Some(created)
    }

    /// Opens the attachment panel of one content.
    pub async fn select(&mut self, content_id: i64) -> Result<&[Attachment], ApiError> {
        let attachments = self.contents.attachments(content_id).await?;
        let (_, attachments) = self.selected.insert((content_id, attachments));
        Ok(attachments.as_slice())
    }

    pub fn attachments(&self) -> &[Attachment] {
        self.selected
            .as_ref()
            .map(|(_, list)| list.as_slice())
            .unwrap_or_default()
    }

    pub async fn upload(&mut self, content_id: i64, file: FilePart) -> Result<Attachment, ApiError> {
        let attachment = self.contents.upload_attachment(content_id, file).await?;
        if let Some((selected_id, list)) = self.selected.as_mut() {
            if *selected_id == content_id {
                list.push(attachment.clone());
            }
        }
        Ok(attachment)
    }

    pub async fn delete_attachment(&mut self, id: i64, confirm: &dyn Confirm) -> Result<bool, ApiError> {
        if !confirm.confirm("Delete this attachment?") {
            return Ok(false);
        }
        self.contents.delete_attachment(id).await?;
        if let Some((_, list)) = self.selected.as_mut() {
            list.retain(|a| a.id != id);
        }
        Ok(true)
    }

    /// Deletes a content and its attachments after confirmation.
    ///
    /// The attachment list is fetched fresh. If that fails the content is
    /// still deleted. `Ok(None)` when the user declined.
    pub async fn delete_content(
        &mut self,
        content_id: i64,
        confirm: &dyn Confirm,
    ) -> Result<Option<CascadeReport>, ApiError> {
        if !confirm.confirm("Delete this content and all of its attachments?") {
            return Ok(None);
        }
        let attachments = match self.contents.attachments(content_id).await {
            Ok(attachments) => attachments,
            Err(e) => {
                warn!(
                    "Could not list attachments of content {}, deleting it anyway: {}",
                    content_id, e
                );
                Vec::new()
            }
        };

        let report = self
            .contents
            .delete_with_attachments(content_id, &attachments)
            .await?;
        if !report.is_clean() {
            warn!(
                "Content {} deleted with {} attachment failures",
                content_id,
                report.failed_children.len()
            );
        }
        if matches!(self.selected, Some((id, _)) if id == content_id) {
            self.selected = None;
        }
        self.list.reload_after_removal().await;
        Ok(Some(report))
    }
}
