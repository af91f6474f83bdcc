use lms_client::client::PageResponse;
use lms_client::models::Course;
use lms_client::services::course_service::COURSES_PATH;
use lms_client::{AppContext, ClientConfig};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "lms_client=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::new_from_env()?;
    info!("using api at {}", config.api_base_url);
    let mut ctx = AppContext::from_config(config)?;

    if let (Ok(email), Ok(password)) = (std::env::var("LMS_EMAIL"), std::env::var("LMS_PASSWORD")) {
        match ctx.sign_in(&email, &password).await {
            Ok(session) => info!("signed in as {}", session.user.full_name()),
            Err(e) => warn!("sign in failed: {}", e.user_message()),
        }
    }

    if let Some(dashboard) = ctx.dashboard() {
        info!("dashboard home: {}", dashboard.home_path());
    }

    let query = vec![
        ("page".to_string(), "0".to_string()),
        ("size".to_string(), ctx.config().page_size.to_string()),
    ];
    match ctx.api().get_page::<Course>(COURSES_PATH, &query).await {
        Ok(page) => log_courses(&page),
        Err(e) => warn!("could not list courses: {}", e.user_message()),
    }

    ctx.sign_out().await;
    Ok(())
}

fn log_courses(page: &PageResponse<Course>) {
    info!(
        "courses page {}/{} ({} total)",
        page.number + 1,
        page.total_pages.max(1),
        page.total_elements
    );
    for course in &page.content {
        info!(
            "  #{} {} [{}] {} credits",
            course.id,
            course.title,
            course.code.as_deref().unwrap_or("-"),
            course.credit
        );
    }
}
