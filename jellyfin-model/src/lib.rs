//! Data transfer models for the Jellyfin media server API.

pub use ::chrono;
pub use ::uuid;

#[doc(hidden)]
pub use ::paste as __paste;

pub mod schema;

pub mod configuration;
pub mod enums;
pub mod error;
pub mod item;
pub mod live_tv;
pub mod media;
pub mod prelude;
pub mod query;
pub mod session;
pub mod ticks;
pub mod websocket;

// Intentionally curated re-exports for downstream consumers.
pub use configuration::{
    EncodingOptions, LibraryOptions, NetworkConfiguration, ServerConfiguration,
    SystemInfo, UserConfiguration, UserDto, UserPolicy,
};
pub use enums::{BaseItemKind, MediaType, SessionMessageType};
pub use error::{ModelError, Result as ModelResult};
pub use item::{BaseItemDto, BaseItemDtoQueryResult, UserItemDataDto};
pub use live_tv::{
    GetProgramsDto, SearchHint, SearchHintResult, SeriesTimerInfoDto,
    TimerInfoDto,
};
pub use media::{
    DeviceProfile, MediaSourceInfo, MediaStream, PlaybackInfoDto,
    PlaybackInfoResponse, PlaybackProgressInfo, PlaybackStartInfo,
    PlaybackStopInfo,
};
pub use schema::{FieldHash, Schema, SchemaBuilder};
pub use session::{GeneralCommand, PlayRequest, PlaystateRequest, SessionInfoDto};
pub use ticks::{TICKS_PER_SECOND, duration_to_ticks, ticks_to_duration};
pub use websocket::{
    ForceKeepAliveMessage, InboundKeepAliveMessage, InboundWebSocketMessage,
    OutboundKeepAliveMessage, OutboundWebSocketMessage,
};
