//! Client focused snapshot of the model surface.
//! Prefer importing from this module instead of individual tree nodes when
//! writing code that talks to a Jellyfin server.

pub use super::configuration::{
    EncodingOptions, LibraryOptions, NetworkConfiguration, ServerConfiguration,
    SystemInfo, TypeOptions, UserConfiguration, UserDto, UserPolicy,
};
pub use super::enums::*;
pub use super::error::{ModelError, Result as ModelResult};
pub use super::item::{
    BaseItemDto, BaseItemDtoQueryResult, BaseItemPerson, ChapterInfo,
    ExternalUrl, ImageBlurHashes, MediaUrl, NameGuidPair, UserItemDataDto,
};
pub use super::live_tv::{
    GetProgramsDto, ListingsProviderInfo, LiveTvOptions, SearchHint,
    SearchHintResult, SeriesTimerInfoDto, TimerInfoDto, TunerHostInfo,
};
pub use super::media::{
    DeviceProfile, MediaAttachment, MediaSourceInfo, MediaStream,
    PlaybackInfoDto, PlaybackInfoResponse, PlaybackProgressInfo,
    PlaybackStartInfo, PlaybackStopInfo, QueueItem, TranscodingProfile,
};
pub use super::schema::{FieldHash, Schema, SchemaBuilder};
pub use super::session::{
    ClientCapabilitiesDto, GeneralCommand, PlayRequest, PlayerStateInfo,
    PlaystateRequest, SessionInfoDto,
};
pub use super::ticks::{duration_to_ticks, ticks_to_duration};
pub use super::websocket::{
    ForceKeepAliveMessage, InboundKeepAliveMessage, InboundWebSocketMessage,
    OutboundKeepAliveMessage, OutboundWebSocketMessage, SessionsMessage,
    SessionsStartMessage, SessionsStopMessage,
};
