//! Trait surfaces that describe interactions with Jellyfin data models.

pub mod codec;
pub mod item_like;
pub mod message_like;

/// Frequently used traits for client and tooling crates.
pub mod prelude {
    pub use super::codec::{JsonCodec, QueryEncode};
    pub use super::item_like::ItemLike;
    pub use super::message_like::MessageLike;
    pub use jellyfin_model::schema::{Schema, SchemaBuilder};
}
