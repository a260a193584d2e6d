//! Media sources, streams, playback reports and device profiles.

use std::time::Duration;

use uuid::Uuid;

use crate::enums::{
    AudioSpatialFormat, CodecType, DlnaProfileType, EncodingContext, IsoType, MediaProtocol,
    MediaSourceType, MediaStreamProtocol, MediaStreamType, MediaType, PlayMethod,
    PlaybackErrorCode, PlaybackOrder, ProfileConditionType, ProfileConditionValue, RepeatMode,
    SubtitleDeliveryMethod, TranscodeSeekInfo, TransportStreamTimestamp, Video3DFormat,
    VideoRange, VideoRangeType, VideoType,
};
use crate::item::BaseItemDto;
use crate::jellyfin_dto;
use crate::schema::StringMap;
use crate::ticks::ticks_to_duration;

jellyfin_dto! {
    /// One playable version of an item, as negotiated for a client.
    pub struct MediaSourceInfo {
        "Protocol" protocol: MediaProtocol,
        "Id" id: String,
        "Path" path: String,
        "EncoderPath" encoder_path: String,
        "EncoderProtocol" encoder_protocol: MediaProtocol,
        "Type" kind: MediaSourceType,
        "Container" container: String,
        "Size" size: i64,
        "Name" name: String,
        "IsRemote" is_remote: bool,
        "ETag" etag: String,
        "RunTimeTicks" run_time_ticks: i64,
        "ReadAtNativeFramerate" read_at_native_framerate: bool,
        "IgnoreDts" ignore_dts: bool,
        "IgnoreIndex" ignore_index: bool,
        "GenPtsInput" gen_pts_input: bool,
        "SupportsTranscoding" supports_transcoding: bool,
        "SupportsDirectStream" supports_direct_stream: bool,
        "SupportsDirectPlay" supports_direct_play: bool,
        "IsInfiniteStream" is_infinite_stream: bool,
        "UseMostCompatibleTranscodingProfile" use_most_compatible_transcoding_profile: bool = false,
        "RequiresOpening" requires_opening: bool,
        "OpenToken" open_token: String,
        "RequiresClosing" requires_closing: bool,
        "LiveStreamId" live_stream_id: String,
        "BufferMs" buffer_ms: i32,
        "RequiresLooping" requires_looping: bool,
        "SupportsProbing" supports_probing: bool,
        "VideoType" video_type: VideoType,
        "IsoType" iso_type: IsoType,
        "Video3DFormat" video_3d_format: Video3DFormat,
        "MediaStreams" media_streams: Vec<MediaStream>,
        "MediaAttachments" media_attachments: Vec<MediaAttachment>,
        "Formats" formats: Vec<String>,
        "Bitrate" bitrate: i32,
        "FallbackMaxStreamingBitrate" fallback_max_streaming_bitrate: i32,
        "Timestamp" timestamp: TransportStreamTimestamp,
        "RequiredHttpHeaders" required_http_headers: StringMap,
        "TranscodingUrl" transcoding_url: String,
        "TranscodingSubProtocol" transcoding_sub_protocol: MediaStreamProtocol,
        "TranscodingContainer" transcoding_container: String,
        "AnalyzeDurationMs" analyze_duration_ms: i32,
        "DefaultAudioStreamIndex" default_audio_stream_index: i32,
        "DefaultSubtitleStreamIndex" default_subtitle_stream_index: i32,
        "HasSegments" has_segments: bool,
    }
}

impl MediaSourceInfo {
    pub fn run_time(&self) -> Option<Duration> {
        self.run_time_ticks.and_then(ticks_to_duration)
    }

    /// Streams of one type, in container order.
    pub fn streams_of(&self, kind: MediaStreamType) -> impl Iterator<Item = &MediaStream> {
        self.media_streams
            .iter()
            .flatten()
            .filter(move |stream| stream.kind == Some(kind))
    }

    /// The stream the server will pick for audio unless told otherwise.
    pub fn default_audio_stream(&self) -> Option<&MediaStream> {
        let index = self.default_audio_stream_index?;
        self.streams_of(MediaStreamType::Audio)
            .find(|stream| stream.index == Some(index))
    }
}

jellyfin_dto! {
    /// A single elementary stream inside a media source.
    pub struct MediaStream {
        "Codec" codec: String,
        "CodecTag" codec_tag: String,
        "Language" language: String,
        "ColorRange" color_range: String,
        "ColorSpace" color_space: String,
        "ColorTransfer" color_transfer: String,
        "ColorPrimaries" color_primaries: String,
        "DvVersionMajor" dv_version_major: i32,
        "DvVersionMinor" dv_version_minor: i32,
        "DvProfile" dv_profile: i32,
        "DvLevel" dv_level: i32,
        "RpuPresentFlag" rpu_present_flag: i32,
        "ElPresentFlag" el_present_flag: i32,
        "BlPresentFlag" bl_present_flag: i32,
        "DvBlSignalCompatibilityId" dv_bl_signal_compatibility_id: i32,
        "Rotation" rotation: i32,
        "Comment" comment: String,
        "TimeBase" time_base: String,
        "CodecTimeBase" codec_time_base: String,
        "Title" title: String,
        "Hdr10PlusPresentFlag" hdr10_plus_present_flag: bool,
        "VideoRange" video_range: VideoRange = VideoRange::Unknown,
        "VideoRangeType" video_range_type: VideoRangeType = VideoRangeType::Unknown,
        "VideoDoViTitle" video_dovi_title: String,
        "AudioSpatialFormat" audio_spatial_format: AudioSpatialFormat = AudioSpatialFormat::None,
        "LocalizedUndefined" localized_undefined: String,
        "LocalizedDefault" localized_default: String,
        "LocalizedForced" localized_forced: String,
        "LocalizedExternal" localized_external: String,
        "LocalizedHearingImpaired" localized_hearing_impaired: String,
        "DisplayTitle" display_title: String,
        "NalLengthSize" nal_length_size: String,
        "IsInterlaced" is_interlaced: bool,
        "IsAVC" is_avc: bool,
        "ChannelLayout" channel_layout: String,
        "BitRate" bit_rate: i32,
        "BitDepth" bit_depth: i32,
        "RefFrames" ref_frames: i32,
        "PacketLength" packet_length: i32,
        "Channels" channels: i32,
        "SampleRate" sample_rate: i32,
        "IsDefault" is_default: bool,
        "IsForced" is_forced: bool,
        "IsHearingImpaired" is_hearing_impaired: bool,
        "Height" height: i32,
        "Width" width: i32,
        "AverageFrameRate" average_frame_rate: f32,
        "RealFrameRate" real_frame_rate: f32,
        "ReferenceFrameRate" reference_frame_rate: f32,
        "Profile" profile: String,
        "Type" kind: MediaStreamType,
        "AspectRatio" aspect_ratio: String,
        "Index" index: i32,
        "Score" score: i32,
        "IsExternal" is_external: bool,
        "DeliveryMethod" delivery_method: SubtitleDeliveryMethod,
        "DeliveryUrl" delivery_url: String,
        "IsExternalUrl" is_external_url: bool,
        "IsTextSubtitleStream" is_text_subtitle_stream: bool,
        "SupportsExternalStream" supports_external_stream: bool,
        "Path" path: String,
        "PixelFormat" pixel_format: String,
        "Level" level: f64,
        "IsAnamorphic" is_anamorphic: bool,
    }
}

jellyfin_dto! {
    pub struct MediaAttachment {
        "Codec" codec: String,
        "CodecTag" codec_tag: String,
        "Comment" comment: String,
        "Index" index: i32,
        "FileName" file_name: String,
        "MimeType" mime_type: String,
        "DeliveryUrl" delivery_url: String,
    }
}

jellyfin_dto! {
    /// Request body of `POST /Items/{itemId}/PlaybackInfo`.
    pub struct PlaybackInfoDto {
        "UserId" user_id: Uuid,
        "MaxStreamingBitrate" max_streaming_bitrate: i32,
        "StartTimeTicks" start_time_ticks: i64,
        "AudioStreamIndex" audio_stream_index: i32,
        "SubtitleStreamIndex" subtitle_stream_index: i32,
        "MaxAudioChannels" max_audio_channels: i32,
        "MediaSourceId" media_source_id: String,
        "LiveStreamId" live_stream_id: String,
        "DeviceProfile" device_profile: DeviceProfile,
        "EnableDirectPlay" enable_direct_play: bool,
        "EnableDirectStream" enable_direct_stream: bool,
        "EnableTranscoding" enable_transcoding: bool,
        "AllowVideoStreamCopy" allow_video_stream_copy: bool,
        "AllowAudioStreamCopy" allow_audio_stream_copy: bool,
        "AutoOpenLiveStream" auto_open_live_stream: bool,
        "AlwaysBurnInSubtitleWhenTranscoding" always_burn_in_subtitle_when_transcoding: bool,
    }
}

jellyfin_dto! {
    pub struct PlaybackInfoResponse {
        "MediaSources" media_sources: Vec<MediaSourceInfo>,
        "PlaySessionId" play_session_id: String,
        "ErrorCode" error_code: PlaybackErrorCode,
    }
}

jellyfin_dto! {
    /// Reported by a client when playback begins.
    pub struct PlaybackStartInfo {
        "CanSeek" can_seek: bool,
        "Item" item: BaseItemDto,
        "ItemId" item_id: Uuid,
        "SessionId" session_id: String,
        "MediaSourceId" media_source_id: String,
        "AudioStreamIndex" audio_stream_index: i32,
        "SubtitleStreamIndex" subtitle_stream_index: i32,
        "IsPaused" is_paused: bool,
        "IsMuted" is_muted: bool,
        "PositionTicks" position_ticks: i64,
        "PlaybackStartTimeTicks" playback_start_time_ticks: i64,
        "VolumeLevel" volume_level: i32,
        "Brightness" brightness: i32,
        "AspectRatio" aspect_ratio: String,
        "PlayMethod" play_method: PlayMethod,
        "LiveStreamId" live_stream_id: String,
        "PlaySessionId" play_session_id: String,
        "RepeatMode" repeat_mode: RepeatMode,
        "PlaybackOrder" playback_order: PlaybackOrder,
        "NowPlayingQueue" now_playing_queue: Vec<QueueItem>,
        "PlaylistItemId" playlist_item_id: String,
    }
}

jellyfin_dto! {
    /// Reported periodically by a client while playing.
    pub struct PlaybackProgressInfo {
        "CanSeek" can_seek: bool,
        "Item" item: BaseItemDto,
        "ItemId" item_id: Uuid,
        "SessionId" session_id: String,
        "MediaSourceId" media_source_id: String,
        "AudioStreamIndex" audio_stream_index: i32,
        "SubtitleStreamIndex" subtitle_stream_index: i32,
        "IsPaused" is_paused: bool,
        "IsMuted" is_muted: bool,
        "PositionTicks" position_ticks: i64,
        "PlaybackStartTimeTicks" playback_start_time_ticks: i64,
        "VolumeLevel" volume_level: i32,
        "Brightness" brightness: i32,
        "AspectRatio" aspect_ratio: String,
        "PlayMethod" play_method: PlayMethod,
        "LiveStreamId" live_stream_id: String,
        "PlaySessionId" play_session_id: String,
        "RepeatMode" repeat_mode: RepeatMode,
        "PlaybackOrder" playback_order: PlaybackOrder,
        "NowPlayingQueue" now_playing_queue: Vec<QueueItem>,
        "PlaylistItemId" playlist_item_id: String,
    }
}

impl PlaybackProgressInfo {
    pub fn position(&self) -> Option<Duration> {
        self.position_ticks.and_then(ticks_to_duration)
    }
}

jellyfin_dto! {
    pub struct PlaybackStopInfo {
        "Item" item: BaseItemDto,
        "ItemId" item_id: Uuid,
        "SessionId" session_id: String,
        "MediaSourceId" media_source_id: String,
        "PositionTicks" position_ticks: i64,
        "LiveStreamId" live_stream_id: String,
        "PlaySessionId" play_session_id: String,
        "Failed" failed: bool,
        "NextMediaType" next_media_type: MediaType,
        "PlaylistItemId" playlist_item_id: String,
        "NowPlayingQueue" now_playing_queue: Vec<QueueItem>,
    }
}

jellyfin_dto! {
    pub struct QueueItem {
        "Id" id: Uuid,
        "PlaylistItemId" playlist_item_id: String,
    }
}

jellyfin_dto! {
    /// Capabilities a client advertises so the server can pick
    /// direct play, remux or transcode.
    pub struct DeviceProfile {
        "Name" name: String,
        "Id" id: Uuid,
        "MaxStreamingBitrate" max_streaming_bitrate: i32,
        "MaxStaticBitrate" max_static_bitrate: i32,
        "MusicStreamingTranscodingBitrate" music_streaming_transcoding_bitrate: i32,
        "MaxStaticMusicBitrate" max_static_music_bitrate: i32,
        "DirectPlayProfiles" direct_play_profiles: Vec<DirectPlayProfile>,
        "TranscodingProfiles" transcoding_profiles: Vec<TranscodingProfile>,
        "ContainerProfiles" container_profiles: Vec<ContainerProfile>,
        "CodecProfiles" codec_profiles: Vec<CodecProfile>,
        "SubtitleProfiles" subtitle_profiles: Vec<SubtitleProfile>,
    }
}

jellyfin_dto! {
    pub struct DirectPlayProfile {
        "Container" container: String,
        "AudioCodec" audio_codec: String,
        "VideoCodec" video_codec: String,
        "Type" kind: DlnaProfileType,
    }
}

jellyfin_dto! {
    pub struct TranscodingProfile {
        "Container" container: String,
        "Type" kind: DlnaProfileType,
        "VideoCodec" video_codec: String,
        "AudioCodec" audio_codec: String,
        "Protocol" protocol: MediaStreamProtocol,
        "EstimateContentLength" estimate_content_length: bool = false,
        "EnableMpegtsM2TsMode" enable_mpegts_m2ts_mode: bool = false,
        "TranscodeSeekInfo" transcode_seek_info: TranscodeSeekInfo = TranscodeSeekInfo::Auto,
        "CopyTimestamps" copy_timestamps: bool = false,
        "Context" context: EncodingContext = EncodingContext::Streaming,
        "EnableSubtitlesInManifest" enable_subtitles_in_manifest: bool = false,
        "MaxAudioChannels" max_audio_channels: String,
        "MinSegments" min_segments: i32 = 0,
        "SegmentLength" segment_length: i32 = 0,
        "BreakOnNonKeyFrames" break_on_non_key_frames: bool = false,
        "Conditions" conditions: Vec<ProfileCondition> = Vec::new(),
        "EnableAudioVbrEncoding" enable_audio_vbr_encoding: bool = true,
    }
}

jellyfin_dto! {
    pub struct ContainerProfile {
        "Type" kind: DlnaProfileType,
        "Conditions" conditions: Vec<ProfileCondition>,
        "Container" container: String,
        "SubContainer" sub_container: String,
    }
}

jellyfin_dto! {
    pub struct CodecProfile {
        "Type" kind: CodecType,
        "Conditions" conditions: Vec<ProfileCondition>,
        "ApplyConditions" apply_conditions: Vec<ProfileCondition>,
        "Codec" codec: String,
        "Container" container: String,
        "SubContainer" sub_container: String,
    }
}

jellyfin_dto! {
    pub struct ProfileCondition {
        "Condition" condition: ProfileConditionType,
        "Property" property: ProfileConditionValue,
        "Value" value: String,
        "IsRequired" is_required: bool,
    }
}

jellyfin_dto! {
    pub struct SubtitleProfile {
        "Format" format: String,
        "Method" method: SubtitleDeliveryMethod,
        "DidlMode" didl_mode: String,
        "Language" language: String,
        "Container" container: String,
    }
}
