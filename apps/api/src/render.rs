use askama::Template;
use axum::response::Html;

use crate::errors::AppError;

/// Renders an askama template into an HTML response body.
pub fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}
