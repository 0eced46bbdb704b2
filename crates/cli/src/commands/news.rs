//! Store news listing.

use saranya_storefront::error::{AppError, Result};
use saranya_storefront::news;
use tracing::info;

/// List news newest first, or print one item in full when `id` is given.
///
/// # Errors
///
/// Returns an error if `id` does not match a news item.
pub fn show(id: Option<&str>) -> Result<()> {
    let Some(id) = id else {
        for item in news::all() {
            info!(
                "[{}] {} | {} | {}",
                item.id,
                item.date.format("%B %-d, %Y"),
                item.category,
                item.title
            );
            info!("    {}", item.excerpt);
        }
        return Ok(());
    };

    let item = news::find(id).ok_or_else(|| AppError::NotFound(format!("news item {id}")))?;
    info!("{} ({})", item.title, item.category);
    info!("{}", item.date.format("%B %-d, %Y"));
    info!("{}", item.content);
    Ok(())
}
