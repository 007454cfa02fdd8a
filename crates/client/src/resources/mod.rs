//! Keyed read-through caching over the API client.
//!
//! Every read is identified by a [`ResourceKey`] and served through `moka`,
//! so concurrent reads of the same key share one request and later reads of
//! the same key are answered from memory. Caches have no expiry: entries
//! live until [`MarketResources::mutate`] or an explicit invalidation drops
//! them, which keeps "stale after a write" windows out of the picture.

mod key;
mod state;

pub use key::ResourceKey;
pub use state::ResourceState;

use std::sync::Arc;

use moka::future::Cache;
use tracing::debug;

use craftica_core::{PostId, ProductId, StoreId};

use crate::api::CrafticaClient;
use crate::error::ApiError;
use crate::models::{
    Comment, Page, Post, PostFilter, Product, ProductFilter, Reaction, Store, StoreFilter,
};

use key::valid_id;

const CACHE_CAPACITY: u64 = 1000;

fn cache<V>() -> Cache<ResourceKey, V>
where
    V: Clone + Send + Sync + 'static,
{
    Cache::builder().max_capacity(CACHE_CAPACITY).build()
}

/// Cached, deduplicated access to marketplace resources.
///
/// Cheap to clone; all clones share the same caches and client.
#[derive(Clone)]
pub struct MarketResources {
    inner: Arc<ResourcesInner>,
}

struct ResourcesInner {
    client: CrafticaClient,
    store_pages: Cache<ResourceKey, Page<Store>>,
    stores: Cache<ResourceKey, Store>,
    product_pages: Cache<ResourceKey, Page<Product>>,
    products: Cache<ResourceKey, Product>,
    post_pages: Cache<ResourceKey, Page<Post>>,
    posts: Cache<ResourceKey, Post>,
    comments: Cache<ResourceKey, Vec<Comment>>,
    reactions: Cache<ResourceKey, Vec<Reaction>>,
}

impl MarketResources {
    #[must_use]
    pub fn new(client: CrafticaClient) -> Self {
        Self {
            inner: Arc::new(ResourcesInner {
                client,
                store_pages: cache(),
                stores: cache(),
                product_pages: cache(),
                products: cache(),
                post_pages: cache(),
                posts: cache(),
                comments: cache(),
                reactions: cache(),
            }),
        }
    }

    /// The underlying API client, for writes. After a write, call
    /// [`mutate`](Self::mutate) on the keys the write affected.
    #[must_use]
    pub fn client(&self) -> &CrafticaClient {
        &self.inner.client
    }

    // =========================================================================
    // Cached reads
    // =========================================================================

    /// A page of stores for `filter`, fetched at most once per key.
    ///
    /// # Errors
    ///
    /// Returns the API error, shared between every caller that joined the
    /// same in-flight fetch. Errors are not cached; the next read retries.
    pub async fn stores(&self, filter: &StoreFilter) -> Result<Page<Store>, Arc<ApiError>> {
        let key = ResourceKey::Stores(filter.clone());
        let client = self.inner.client.clone();
        let filter = filter.clone();
        self.inner
            .store_pages
            .try_get_with(key, async move { client.get_stores(&filter).await })
            .await
    }

    /// A single store, or `Ok(None)` without any request when `id` is
    /// absent, empty, or the literal `"undefined"`.
    ///
    /// # Errors
    ///
    /// Returns the API error for a failed fetch.
    pub async fn store(&self, id: Option<&str>) -> Result<Option<Store>, Arc<ApiError>> {
        let Some(id) = valid_id(id) else {
            return Ok(None);
        };
        let id = StoreId::new(id);
        let client = self.inner.client.clone();
        let fetch_id = id.clone();
        self.inner
            .stores
            .try_get_with(ResourceKey::Store(id), async move {
                client.get_store(&fetch_id).await
            })
            .await
            .map(Some)
    }

    /// A page of products for `filter`.
    ///
    /// # Errors
    ///
    /// Returns the API error for a failed fetch.
    pub async fn products(&self, filter: &ProductFilter) -> Result<Page<Product>, Arc<ApiError>> {
        let key = ResourceKey::Products(filter.clone());
        let client = self.inner.client.clone();
        let filter = filter.clone();
        self.inner
            .product_pages
            .try_get_with(key, async move { client.get_products(&filter).await })
            .await
    }

    /// A single product, guarded like [`store`](Self::store).
    ///
    /// # Errors
    ///
    /// Returns the API error for a failed fetch.
    pub async fn product(&self, id: Option<&str>) -> Result<Option<Product>, Arc<ApiError>> {
        let Some(id) = valid_id(id) else {
            return Ok(None);
        };
        let id = ProductId::new(id);
        let client = self.inner.client.clone();
        let fetch_id = id.clone();
        self.inner
            .products
            .try_get_with(ResourceKey::Product(id), async move {
                client.get_product(&fetch_id).await
            })
            .await
            .map(Some)
    }

    /// A page of posts for `filter`.
    ///
    /// # Errors
    ///
    /// Returns the API error for a failed fetch.
    pub async fn posts(&self, filter: &PostFilter) -> Result<Page<Post>, Arc<ApiError>> {
        let key = ResourceKey::Posts(filter.clone());
        let client = self.inner.client.clone();
        let filter = filter.clone();
        self.inner
            .post_pages
            .try_get_with(key, async move { client.get_posts(&filter).await })
            .await
    }

    /// A single post, guarded like [`store`](Self::store).
    ///
    /// # Errors
    ///
    /// Returns the API error for a failed fetch.
    pub async fn post(&self, id: Option<&str>) -> Result<Option<Post>, Arc<ApiError>> {
        let Some(id) = valid_id(id) else {
            return Ok(None);
        };
        let id = PostId::new(id);
        let client = self.inner.client.clone();
        let fetch_id = id.clone();
        self.inner
            .posts
            .try_get_with(ResourceKey::Post(id), async move {
                client.get_post(&fetch_id).await
            })
            .await
            .map(Some)
    }

    /// The comments under a post, keyed by the post id and guarded like
    /// [`store`](Self::store).
    ///
    /// # Errors
    ///
    /// Returns the API error for a failed fetch.
    pub async fn comments(
        &self,
        post_id: Option<&str>,
    ) -> Result<Option<Vec<Comment>>, Arc<ApiError>> {
        let Some(post_id) = valid_id(post_id) else {
            return Ok(None);
        };
        let post_id = PostId::new(post_id);
        let client = self.inner.client.clone();
        let fetch_id = post_id.clone();
        self.inner
            .comments
            .try_get_with(ResourceKey::Comments(post_id), async move {
                client.get_comments_for_post(&fetch_id).await
            })
            .await
            .map(Some)
    }

    /// The reactions under a post, keyed by the post id and guarded like
    /// [`store`](Self::store).
    ///
    /// # Errors
    ///
    /// Returns the API error for a failed fetch.
    pub async fn reactions(
        &self,
        post_id: Option<&str>,
    ) -> Result<Option<Vec<Reaction>>, Arc<ApiError>> {
        let Some(post_id) = valid_id(post_id) else {
            return Ok(None);
        };
        let post_id = PostId::new(post_id);
        let client = self.inner.client.clone();
        let fetch_id = post_id.clone();
        self.inner
            .reactions
            .try_get_with(ResourceKey::Reactions(post_id), async move {
                client.get_reactions_for_post(&fetch_id).await
            })
            .await
            .map(Some)
    }

    // =========================================================================
    // Invalidation
    // =========================================================================

    /// Drop the cached entry for `key` and fetch it again.
    ///
    /// Callers that just wrote through [`client`](Self::client) use this to
    /// bring the cache back in line. A failed refetch is logged and swallowed;
    /// the entry simply stays absent until the next read retries it.
    pub async fn mutate(&self, key: &ResourceKey) {
        self.invalidate(key).await;
        if let Err(err) = self.refetch(key).await {
            debug!(error = %err, ?key, "revalidation fetch failed");
        }
    }

    /// Drop the cached entry for `key` without refetching.
    pub async fn invalidate(&self, key: &ResourceKey) {
        match key {
            ResourceKey::Stores(_) => self.inner.store_pages.invalidate(key).await,
            ResourceKey::Store(_) => self.inner.stores.invalidate(key).await,
            ResourceKey::Products(_) => self.inner.product_pages.invalidate(key).await,
            ResourceKey::Product(_) => self.inner.products.invalidate(key).await,
            ResourceKey::Posts(_) => self.inner.post_pages.invalidate(key).await,
            ResourceKey::Post(_) => self.inner.posts.invalidate(key).await,
            ResourceKey::Comments(_) => self.inner.comments.invalidate(key).await,
            ResourceKey::Reactions(_) => self.inner.reactions.invalidate(key).await,
        }
    }

    /// Drop every cached entry. Used on logout, when nothing previously
    /// fetched should survive the session.
    pub fn invalidate_all(&self) {
        self.inner.store_pages.invalidate_all();
        self.inner.stores.invalidate_all();
        self.inner.product_pages.invalidate_all();
        self.inner.products.invalidate_all();
        self.inner.post_pages.invalidate_all();
        self.inner.posts.invalidate_all();
        self.inner.comments.invalidate_all();
        self.inner.reactions.invalidate_all();
    }

    async fn refetch(&self, key: &ResourceKey) -> Result<(), Arc<ApiError>> {
        match key {
            ResourceKey::Stores(filter) => {
                self.stores(filter).await?;
            }
            ResourceKey::Store(id) => {
                self.store(Some(id.as_str())).await?;
            }
            ResourceKey::Products(filter) => {
                self.products(filter).await?;
            }
            ResourceKey::Product(id) => {
                self.product(Some(id.as_str())).await?;
            }
            ResourceKey::Posts(filter) => {
                self.posts(filter).await?;
            }
            ResourceKey::Post(id) => {
                self.post(Some(id.as_str())).await?;
            }
            ResourceKey::Comments(post_id) => {
                self.comments(Some(post_id.as_str())).await?;
            }
            ResourceKey::Reactions(post_id) => {
                self.reactions(Some(post_id.as_str())).await?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for MarketResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketResources").finish_non_exhaustive()
    }
}
