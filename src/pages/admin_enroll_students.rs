use std::collections::BTreeSet;

use crate::error::ApiError;
use crate::forms::FormState;
use crate::list::{Filters, ListController, SearchBox};
use crate::models::{BulkEnrollRequest, BulkEnrollResult, CourseInstance, Role, User};
use crate::services::user_service::USERS_PATH;
use crate::services::{CourseInstanceService, EnrollmentService};
use crate::session::AppContext;

use super::KEYWORD;

/// Picks students from a paged list and enrolls them into one instance.
pub struct AdminEnrollStudents {
    pub instance: CourseInstance,
    pub students: ListController<User>,
    search: SearchBox,
    selected: BTreeSet<i64>,
    enrollments: EnrollmentService,
}

impl AdminEnrollStudents {
    pub async fn open(ctx: &AppContext, course_instance_id: i64) -> Result<Self, ApiError> {
        ctx.require_role(&[Role::Admin])?;
        let instance = CourseInstanceService::new(ctx.api().clone())
            .get(course_instance_id)
            .await?;

        let mut filters = Filters::new();
        filters.set("role", Role::Student.as_str());
        let config = ctx.config();
        let students =
            ListController::with_filters(ctx.api().clone(), USERS_PATH, config.page_size, filters);
        let search = SearchBox::attach(&students, KEYWORD, config.search_debounce);
        students.load(0).await;

        Ok(Self {
            instance,
            students,
            search,
            selected: BTreeSet::new(),
            enrollments: EnrollmentService::new(ctx.api().clone()),
        })
    }

    pub fn search(&self, text: &str) {
        self.search.input(text);
    }

    /// Returns whether the student is selected afterwards.
    pub fn toggle_selection(&mut self, student_id: i64) -> bool {
        if self.selected.remove(&student_id) {
            false
        } else {
            self.selected.insert(student_id);
            true
        }
    }

    pub fn selected(&self) -> Vec<i64> {
        self.selected.iter().copied().collect()
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub async fn enroll_selected(&mut self, form: &mut FormState) -> Option<BulkEnrollResult> {
        let req = BulkEnrollRequest {
            course_instance_id: self.instance.id,
            student_ids: self.selected(),
        };
        let enrollments = self.enrollments.clone();
        let result = form
            .submit(&req, || {
                enrollments.enroll_students(req.course_instance_id, req.student_ids.clone())
            })
            .await?;
        self.selected.clear();
        self.students.reload().await;
        Some(result)
    }
}
