//! Post browsing commands.

use craftica_client::models::PostFilter;
use craftica_core::ReactionKind;

use super::{CliError, resources};

/// List posts.
pub async fn list(page: Option<u32>, limit: Option<u32>) -> Result<(), CliError> {
    let resources = resources()?;
    let filter = PostFilter {
        page,
        limit,
        store_id: None,
    };
    let posts = resources.posts(&filter).await?;

    tracing::info!(
        "Page {}/{} ({} posts total)",
        posts.page,
        posts.total_pages,
        posts.total
    );
    for post in &posts.data {
        tracing::info!("  [{}] {} ({})", post.id, post.title, post.date);
    }
    Ok(())
}

/// Show one post, with its comments and reactions.
pub async fn show(id: &str) -> Result<(), CliError> {
    let resources = resources()?;
    let Some(post) = resources.post(Some(id)).await? else {
        return Err(CliError::InvalidInput(format!("invalid post id: {id}")));
    };

    tracing::info!("Post {}", post.id);
    tracing::info!("  Title: {}", post.title);
    tracing::info!("  Date: {}", post.date);
    tracing::info!("  Store: {}", post.store_id);
    tracing::info!("  Product: {}", post.product_id);
    tracing::info!("  {}", post.description);

    if let Some(reactions) = resources.reactions(Some(id)).await? {
        let likes = reactions
            .iter()
            .filter(|r| r.kind == ReactionKind::Like)
            .count();
        let dislikes = reactions.len() - likes;
        tracing::info!("  Reactions: {likes} likes, {dislikes} dislikes");
    }

    if let Some(comments) = resources.comments(Some(id)).await? {
        tracing::info!("  Comments ({}):", comments.len());
        for comment in &comments {
            tracing::info!("    [{}] {}", comment.user_id, comment.body);
        }
    }
    Ok(())
}
