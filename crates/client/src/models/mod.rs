//! Domain records mirrored from the backend, plus request payloads and
//! filters.
//!
//! Each entity module pairs the read shape with its create/update payloads.
//! Wire field names are the backend's; identifiers deserialize from either
//! JSON numbers or strings (see `craftica_core`).

pub mod comment;
pub mod page;
pub mod post;
pub mod product;
pub mod reaction;
pub mod store;
pub mod user;

pub use comment::{Comment, CommentUpdate, NewComment};
pub use page::Page;
pub use post::{NewPost, Post, PostFilter, PostUpdate};
pub use product::{NewProduct, Product, ProductFilter, ProductUpdate};
pub use reaction::{NewReaction, Reaction, ReactionUpdate};
pub use store::{NewStore, Store, StoreFilter, StoreUpdate};
pub use user::{Credential, Location, LoginCredentials, NewUser, User, UserUpdate};
