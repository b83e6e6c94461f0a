// src/unfurl/breadcrumbs.rs
//! Recursive, bounded resolution of a page's ancestor trail.
//!
//! The trail runs from the outermost resolved ancestor down to the page
//! itself and is built by prepending as the recursion unwinds. The depth
//! budget counts ancestor resolutions: a page walked with budget 2 shows
//! its parent and grandparent, and the grandparent's own parent is never
//! fetched. Crossing a database does not consume budget, and the database's
//! own name is deliberately never added to the trail.

use crate::api::NotionReader;
use crate::model::{DatabaseObject, PageObject, Parent};
use futures::future::{BoxFuture, FutureExt};

/// Resolves the breadcrumb trail for a retrieved page.
///
/// An exhausted budget yields an empty trail; a terminal page contributes
/// nothing but is logged. Fetch failures along the chain truncate the trail
/// at the last resolvable ancestor.
pub async fn page_breadcrumbs(
    reader: &dyn NotionReader,
    page: PageObject,
    depth: u8,
) -> Vec<String> {
    if depth == 0 {
        return Vec::new();
    }
    walk_page(reader, page, depth).await
}

fn walk_page(reader: &dyn NotionReader, page: PageObject, depth: u8) -> BoxFuture<'_, Vec<String>> {
    async move {
        let page = match page {
            PageObject::Page(page) => page,
            PageObject::Partial { id } => {
                log::error!("Page data not found for {}", id);
                return Vec::new();
            }
        };

        let mut trail = vec![page.title()];

        match &page.parent {
            Parent::Database { database_id } if depth > 0 => {
                match reader.retrieve_database(database_id).await {
                    Ok(database) => {
                        let mut ancestors = walk_database(reader, database, depth - 1).await;
                        ancestors.append(&mut trail);
                        trail = ancestors;
                    }
                    Err(e) => {
                        log::error!("Failed to retrieve database {}: {}", database_id, e);
                    }
                }
            }
            Parent::Page { page_id } if depth > 0 => match reader.retrieve_page(page_id).await {
                Ok(parent) => {
                    let mut ancestors = walk_page(reader, parent, depth - 1).await;
                    ancestors.append(&mut trail);
                    trail = ancestors;
                }
                Err(e) => {
                    log::error!("Failed to retrieve page {}: {}", page_id, e);
                }
            },
            // Workspace-rooted and block-parented pages end the trail, as
            // does an exhausted budget.
            _ => {}
        }

        trail
    }
    .boxed()
}

/// Resolves the ancestor contribution of a database in the chain.
///
/// The database itself adds no title; only its own page ancestry is walked,
/// at the budget the database hop already paid for.
fn walk_database(
    reader: &dyn NotionReader,
    database: DatabaseObject,
    depth: u8,
) -> BoxFuture<'_, Vec<String>> {
    async move {
        let database = match database {
            DatabaseObject::Database(database) => database,
            DatabaseObject::Partial { id } => {
                log::error!("Database data not found for {}", id);
                return Vec::new();
            }
        };

        let Parent::Page { page_id } = &database.parent else {
            return Vec::new();
        };
        if depth == 0 {
            return Vec::new();
        }

        match reader.retrieve_page(page_id).await {
            // The database level does not count against the budget, so the
            // parent page is walked at the same depth.
            Ok(parent) => walk_page(reader, parent, depth).await,
            Err(e) => {
                log::error!("Failed to retrieve page {}: {}", page_id, e);
                Vec::new()
            }
        }
    }
    .boxed()
}
