//! Client sessions and the remote-control requests sent to them.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::enums::{
    GeneralCommandType, HardwareAccelerationType, MediaType, PlayCommand, PlayMethod,
    PlaybackOrder, PlaystateCommand, RepeatMode, TranscodeReason,
};
use crate::item::BaseItemDto;
use crate::jellyfin_dto;
use crate::media::{DeviceProfile, QueueItem};
use crate::schema::StringMap;
use crate::ticks::ticks_to_duration;

jellyfin_dto! {
    /// A connected client as reported by `GET /Sessions` and the
    /// `Sessions` websocket feed.
    pub struct SessionInfoDto {
        "PlayState" play_state: PlayerStateInfo,
        "AdditionalUsers" additional_users: Vec<SessionUserInfo>,
        "Capabilities" capabilities: ClientCapabilitiesDto,
        "RemoteEndPoint" remote_end_point: String,
        "PlayableMediaTypes" playable_media_types: Vec<MediaType> = Vec::new(),
        "Id" id: String,
        "UserId" user_id: Uuid,
        "UserName" user_name: String,
        "Client" client: String,
        "LastActivityDate" last_activity_date: DateTime<Utc>,
        "LastPlaybackCheckIn" last_playback_check_in: DateTime<Utc>,
        "LastPausedDate" last_paused_date: DateTime<Utc>,
        "DeviceName" device_name: String,
        "DeviceType" device_type: String,
        "NowPlayingItem" now_playing_item: BaseItemDto,
        "NowViewingItem" now_viewing_item: BaseItemDto,
        "DeviceId" device_id: String,
        "ApplicationVersion" application_version: String,
        "TranscodingInfo" transcoding_info: TranscodingInfo,
        "IsActive" is_active: bool,
        "SupportsMediaControl" supports_media_control: bool,
        "SupportsRemoteControl" supports_remote_control: bool,
        "NowPlayingQueue" now_playing_queue: Vec<QueueItem>,
        "NowPlayingQueueFullItems" now_playing_queue_full_items: Vec<BaseItemDto>,
        "HasCustomDeviceName" has_custom_device_name: bool,
        "PlaylistItemId" playlist_item_id: String,
        "ServerId" server_id: String,
        "UserPrimaryImageTag" user_primary_image_tag: String,
        "SupportedCommands" supported_commands: Vec<GeneralCommandType> = Vec::new(),
    }
}

impl SessionInfoDto {
    /// Something is loaded and not paused.
    pub fn is_playing(&self) -> bool {
        let paused = self
            .play_state
            .as_ref()
            .and_then(|state| state.is_paused)
            .unwrap_or(false);
        self.now_playing_item.is_some() && !paused
    }

    /// Whether the client reported activity within `window` before `now`.
    pub fn is_active_within(&self, now: DateTime<Utc>, window: Duration) -> bool {
        let Some(last) = self.last_activity_date else {
            return false;
        };
        match chrono::Duration::from_std(window) {
            Ok(window) => now.signed_duration_since(last) <= window,
            Err(_) => true,
        }
    }

    pub fn supports_command(&self, command: GeneralCommandType) -> bool {
        self.supported_commands
            .as_ref()
            .is_some_and(|commands| commands.contains(&command))
    }
}

jellyfin_dto! {
    pub struct PlayerStateInfo {
        "PositionTicks" position_ticks: i64,
        "CanSeek" can_seek: bool,
        "IsPaused" is_paused: bool,
        "IsMuted" is_muted: bool,
        "VolumeLevel" volume_level: i32,
        "AudioStreamIndex" audio_stream_index: i32,
        "SubtitleStreamIndex" subtitle_stream_index: i32,
        "MediaSourceId" media_source_id: String,
        "PlayMethod" play_method: PlayMethod,
        "RepeatMode" repeat_mode: RepeatMode,
        "PlaybackOrder" playback_order: PlaybackOrder,
        "LiveStreamId" live_stream_id: String,
    }
}

impl PlayerStateInfo {
    pub fn position(&self) -> Option<Duration> {
        self.position_ticks.and_then(ticks_to_duration)
    }
}

jellyfin_dto! {
    pub struct SessionUserInfo {
        "UserId" user_id: Uuid,
        "UserName" user_name: String,
    }
}

jellyfin_dto! {
    pub struct ClientCapabilitiesDto {
        "PlayableMediaTypes" playable_media_types: Vec<MediaType>,
        "SupportedCommands" supported_commands: Vec<GeneralCommandType>,
        "SupportsMediaControl" supports_media_control: bool,
        "SupportsPersistentIdentifier" supports_persistent_identifier: bool,
        "DeviceProfile" device_profile: DeviceProfile,
        "AppStoreUrl" app_store_url: String,
        "IconUrl" icon_url: String,
    }
}

jellyfin_dto! {
    pub struct TranscodingInfo {
        "AudioCodec" audio_codec: String,
        "VideoCodec" video_codec: String,
        "Container" container: String,
        "IsVideoDirect" is_video_direct: bool,
        "IsAudioDirect" is_audio_direct: bool,
        "Bitrate" bitrate: i32,
        "Framerate" framerate: f32,
        "CompletionPercentage" completion_percentage: f64,
        "Width" width: i32,
        "Height" height: i32,
        "AudioChannels" audio_channels: i32,
        "HardwareAccelerationType" hardware_acceleration_type: HardwareAccelerationType,
        "TranscodeReasons" transcode_reasons: Vec<TranscodeReason>,
    }
}

jellyfin_dto! {
    /// Remote-control command addressed to a session.
    pub struct GeneralCommand {
        "Name" name: GeneralCommandType,
        "ControllingUserId" controlling_user_id: Uuid,
        "Arguments" arguments: StringMap,
    }
}

impl GeneralCommand {
    /// Adds one argument, creating the map on first use.
    pub fn with_argument(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), Some(value.into()));
        self
    }
}

jellyfin_dto! {
    pub struct PlayRequest {
        "ItemIds" item_ids: Vec<Uuid>,
        "StartPositionTicks" start_position_ticks: i64,
        "PlayCommand" play_command: PlayCommand,
        "ControllingUserId" controlling_user_id: Uuid,
        "SubtitleStreamIndex" subtitle_stream_index: i32,
        "AudioStreamIndex" audio_stream_index: i32,
        "MediaSourceId" media_source_id: String,
        "StartIndex" start_index: i32,
    }
}

jellyfin_dto! {
    pub struct PlaystateRequest {
        "Command" command: PlaystateCommand,
        "SeekPositionTicks" seek_position_ticks: i64,
        "ControllingUserId" controlling_user_id: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().expect("valid timestamp")
    }

    #[test]
    fn paused_sessions_are_not_playing() {
        let playing = SessionInfoDto::new()
            .with_now_playing_item(BaseItemDto::new().with_name("Heat"))
            .with_play_state(PlayerStateInfo::new().with_is_paused(false));
        assert!(playing.is_playing());

        let paused = playing
            .clone()
            .with_play_state(PlayerStateInfo::new().with_is_paused(true));
        assert!(!paused.is_playing());
        assert!(!SessionInfoDto::new().is_playing());
    }

    #[test]
    fn activity_window_is_inclusive() {
        let session = SessionInfoDto::new().with_last_activity_date(at(1_000));
        assert!(session.is_active_within(at(1_300), Duration::from_secs(300)));
        assert!(!session.is_active_within(at(1_301), Duration::from_secs(300)));
        assert!(!SessionInfoDto::new().is_active_within(at(0), Duration::from_secs(300)));
    }

    #[test]
    fn supported_commands_default_to_empty() {
        let session = SessionInfoDto::new();
        assert_eq!(session.supported_commands, Some(Vec::new()));
        assert!(!session.supports_command(GeneralCommandType::DisplayMessage));
    }

    #[test]
    fn general_command_arguments_accumulate() {
        let command = GeneralCommand::new()
            .with_name(GeneralCommandType::DisplayMessage)
            .with_argument("Header", "Doorbell")
            .with_argument("TimeoutMs", "5000");
        let json = serde_json::to_value(&command).expect("encode");
        assert_eq!(json["Name"], "DisplayMessage");
        assert_eq!(json["Arguments"]["Header"], "Doorbell");
        assert_eq!(json["Arguments"]["TimeoutMs"], "5000");
    }
}
