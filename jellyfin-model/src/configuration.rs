//! Server, network and user settings plus the system information record.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::enums::{
    DeinterlaceMethod, DownMixStereoAlgorithms, DynamicDayOfWeek, EmbeddedSubtitleOptions,
    EncoderPreset, HardwareAccelerationType, ImageResolution, ImageSavingConvention, ImageType,
    ProcessPriorityClass, SubtitlePlaybackMode, SyncPlayUserAccessType, TonemappingAlgorithm,
    TonemappingMode, TonemappingRange, TrickplayScanBehavior, UnratedItem,
};
use crate::jellyfin_dto;

jellyfin_dto! {
    /// Server-wide settings (`GET /System/Configuration`).
    pub struct ServerConfiguration {
        "LogFileRetentionDays" log_file_retention_days: i32,
        "IsStartupWizardCompleted" is_startup_wizard_completed: bool,
        "CachePath" cache_path: String,
        "PreviousVersion" previous_version: String,
        "PreviousVersionStr" previous_version_str: String,
        "EnableMetrics" enable_metrics: bool,
        "EnableNormalizedItemByNameIds" enable_normalized_item_by_name_ids: bool,
        "IsPortAuthorized" is_port_authorized: bool,
        "QuickConnectAvailable" quick_connect_available: bool,
        "EnableCaseSensitiveItemIds" enable_case_sensitive_item_ids: bool,
        "DisableLiveTvChannelUserDataName" disable_live_tv_channel_user_data_name: bool,
        "MetadataPath" metadata_path: String,
        "PreferredMetadataLanguage" preferred_metadata_language: String,
        "MetadataCountryCode" metadata_country_code: String,
        "SortReplaceCharacters" sort_replace_characters: Vec<String> = Vec::new(),
        "SortRemoveCharacters" sort_remove_characters: Vec<String> = Vec::new(),
        "SortRemoveWords" sort_remove_words: Vec<String> = Vec::new(),
        "MinResumePct" min_resume_pct: i32,
        "MaxResumePct" max_resume_pct: i32,
        "MinResumeDurationSeconds" min_resume_duration_seconds: i32,
        "MinAudiobookResume" min_audiobook_resume: i32,
        "MaxAudiobookResume" max_audiobook_resume: i32,
        "InactiveSessionThreshold" inactive_session_threshold: i32,
        "LibraryMonitorDelay" library_monitor_delay: i32,
        "LibraryUpdateDuration" library_update_duration: i32,
        "CacheSize" cache_size: i32,
        "ImageSavingConvention" image_saving_convention: ImageSavingConvention,
        "MetadataOptions" metadata_options: Vec<MetadataOptions> = Vec::new(),
        "SkipDeserializationForBasicTypes" skip_deserialization_for_basic_types: bool,
        "ServerName" server_name: String,
        "UICulture" ui_culture: String,
        "SaveMetadataHidden" save_metadata_hidden: bool,
        "ContentTypes" content_types: Vec<NameValuePair> = Vec::new(),
        "RemoteClientBitrateLimit" remote_client_bitrate_limit: i32,
        "EnableFolderView" enable_folder_view: bool,
        "EnableGroupingMoviesIntoCollections" enable_grouping_movies_into_collections: bool,
        "EnableGroupingShowsIntoCollections" enable_grouping_shows_into_collections: bool,
        "DisplaySpecialsWithinSeasons" display_specials_within_seasons: bool,
        "CodecsUsed" codecs_used: Vec<String> = Vec::new(),
        "PluginRepositories" plugin_repositories: Vec<RepositoryInfo> = Vec::new(),
        "EnableExternalContentInSuggestions" enable_external_content_in_suggestions: bool,
        "ImageExtractionTimeoutMs" image_extraction_timeout_ms: i32,
        "PathSubstitutions" path_substitutions: Vec<PathSubstitution> = Vec::new(),
        "EnableSlowResponseWarning" enable_slow_response_warning: bool,
        "SlowResponseThresholdMs" slow_response_threshold_ms: i64,
        "CorsHosts" cors_hosts: Vec<String> = Vec::new(),
        "ActivityLogRetentionDays" activity_log_retention_days: i32,
        "LibraryScanFanoutConcurrency" library_scan_fanout_concurrency: i32,
        "LibraryMetadataRefreshConcurrency" library_metadata_refresh_concurrency: i32,
        "AllowClientLogUpload" allow_client_log_upload: bool,
        "DummyChapterDuration" dummy_chapter_duration: i32,
        "ChapterImageResolution" chapter_image_resolution: ImageResolution,
        "ParallelImageEncodingLimit" parallel_image_encoding_limit: i32,
        "CastReceiverApplications" cast_receiver_applications: Vec<CastReceiverApplication> = Vec::new(),
        "TrickplayOptions" trickplay_options: TrickplayOptions,
        "EnableLegacyAuthorization" enable_legacy_authorization: bool,
    }
}

impl ServerConfiguration {
    /// Whether a played percentage falls inside the resumable window.
    pub fn is_resumable(&self, played_pct: f64) -> bool {
        let min = f64::from(self.min_resume_pct.unwrap_or(5));
        let max = f64::from(self.max_resume_pct.unwrap_or(90));
        played_pct >= min && played_pct < max
    }
}

jellyfin_dto! {
    /// Per item-type provider ordering.
    pub struct MetadataOptions {
        "ItemType" item_type: String,
        "DisabledMetadataSavers" disabled_metadata_savers: Vec<String>,
        "LocalMetadataReaderOrder" local_metadata_reader_order: Vec<String>,
        "DisabledMetadataFetchers" disabled_metadata_fetchers: Vec<String>,
        "MetadataFetcherOrder" metadata_fetcher_order: Vec<String>,
        "DisabledImageFetchers" disabled_image_fetchers: Vec<String>,
        "ImageFetcherOrder" image_fetcher_order: Vec<String>,
    }
}

jellyfin_dto! {
    pub struct NameValuePair {
        "Name" name: String,
        "Value" value: String,
    }
}

jellyfin_dto! {
    pub struct RepositoryInfo {
        "Name" name: String,
        "Url" url: String,
        "Enabled" enabled: bool,
    }
}

jellyfin_dto! {
    pub struct PathSubstitution {
        "From" from: String,
        "To" to: String,
    }
}

jellyfin_dto! {
    pub struct CastReceiverApplication {
        "Id" id: String,
        "Name" name: String,
    }
}

jellyfin_dto! {
    pub struct TrickplayOptions {
        "EnableHwAcceleration" enable_hw_acceleration: bool,
        "EnableHwEncoding" enable_hw_encoding: bool,
        "EnableKeyFrameOnlyExtraction" enable_key_frame_only_extraction: bool,
        "ScanBehavior" scan_behavior: TrickplayScanBehavior,
        "ProcessPriority" process_priority: ProcessPriorityClass,
        "Interval" interval: i32,
        "WidthResolutions" width_resolutions: Vec<i32>,
        "TileWidth" tile_width: i32,
        "TileHeight" tile_height: i32,
        "Qscale" qscale: i32,
        "JpegQuality" jpeg_quality: i32,
        "ProcessThreads" process_threads: i32,
    }
}

jellyfin_dto! {
    pub struct NetworkConfiguration {
        "BaseUrl" base_url: String,
        "EnableHttps" enable_https: bool,
        "RequireHttps" require_https: bool,
        "CertificatePath" certificate_path: String,
        "CertificatePassword" certificate_password: String,
        "InternalHttpPort" internal_http_port: i32,
        "InternalHttpsPort" internal_https_port: i32,
        "PublicHttpPort" public_http_port: i32,
        "PublicHttpsPort" public_https_port: i32,
        "AutoDiscovery" auto_discovery: bool,
        "EnableUPnP" enable_upnp: bool,
        "EnableIPv4" enable_ipv4: bool,
        "EnableIPv6" enable_ipv6: bool,
        "EnableRemoteAccess" enable_remote_access: bool,
        "LocalNetworkSubnets" local_network_subnets: Vec<String> = Vec::new(),
        "LocalNetworkAddresses" local_network_addresses: Vec<String> = Vec::new(),
        "KnownProxies" known_proxies: Vec<String> = Vec::new(),
        "IgnoreVirtualInterfaces" ignore_virtual_interfaces: bool,
        "VirtualInterfaceNames" virtual_interface_names: Vec<String> = Vec::new(),
        "EnablePublishedServerUriByRequest" enable_published_server_uri_by_request: bool,
        "PublishedServerUriBySubnet" published_server_uri_by_subnet: Vec<String> = Vec::new(),
        "RemoteIPFilter" remote_ip_filter: Vec<String> = Vec::new(),
        "IsRemoteIPFilterBlacklist" is_remote_ip_filter_blacklist: bool,
    }
}

jellyfin_dto! {
    pub struct UserConfiguration {
        "AudioLanguagePreference" audio_language_preference: String,
        "PlayDefaultAudioTrack" play_default_audio_track: bool,
        "SubtitleLanguagePreference" subtitle_language_preference: String,
        "DisplayMissingEpisodes" display_missing_episodes: bool,
        "GroupedFolders" grouped_folders: Vec<Uuid> = Vec::new(),
        "SubtitleMode" subtitle_mode: SubtitlePlaybackMode,
        "DisplayCollectionsView" display_collections_view: bool,
        "EnableLocalPassword" enable_local_password: bool,
        "OrderedViews" ordered_views: Vec<Uuid> = Vec::new(),
        "LatestItemsExcludes" latest_items_excludes: Vec<Uuid> = Vec::new(),
        "MyMediaExcludes" my_media_excludes: Vec<Uuid> = Vec::new(),
        "HidePlayedInLatest" hide_played_in_latest: bool,
        "RememberAudioSelections" remember_audio_selections: bool,
        "RememberSubtitleSelections" remember_subtitle_selections: bool,
        "EnableNextEpisodeAutoPlay" enable_next_episode_auto_play: bool,
        "CastReceiverId" cast_receiver_id: String,
    }
}

jellyfin_dto! {
    /// Permissions and limits attached to one user account.
    pub struct UserPolicy {
        "IsAdministrator" is_administrator: bool,
        "IsHidden" is_hidden: bool,
        "EnableCollectionManagement" enable_collection_management: bool = false,
        "EnableSubtitleManagement" enable_subtitle_management: bool = false,
        "EnableLyricManagement" enable_lyric_management: bool = false,
        "IsDisabled" is_disabled: bool,
        "MaxParentalRating" max_parental_rating: i32,
        "MaxParentalSubRating" max_parental_sub_rating: i32,
        "BlockedTags" blocked_tags: Vec<String>,
        "AllowedTags" allowed_tags: Vec<String>,
        "EnableUserPreferenceAccess" enable_user_preference_access: bool,
        "AccessSchedules" access_schedules: Vec<AccessSchedule>,
        "BlockUnratedItems" block_unrated_items: Vec<UnratedItem>,
        "EnableRemoteControlOfOtherUsers" enable_remote_control_of_other_users: bool,
        "EnableSharedDeviceControl" enable_shared_device_control: bool,
        "EnableRemoteAccess" enable_remote_access: bool,
        "EnableLiveTvManagement" enable_live_tv_management: bool,
        "EnableLiveTvAccess" enable_live_tv_access: bool,
        "EnableMediaPlayback" enable_media_playback: bool,
        "EnableAudioPlaybackTranscoding" enable_audio_playback_transcoding: bool,
        "EnableVideoPlaybackTranscoding" enable_video_playback_transcoding: bool,
        "EnablePlaybackRemuxing" enable_playback_remuxing: bool,
        "ForceRemoteSourceTranscoding" force_remote_source_transcoding: bool,
        "EnableContentDeletion" enable_content_deletion: bool,
        "EnableContentDeletionFromFolders" enable_content_deletion_from_folders: Vec<String>,
        "EnableContentDownloading" enable_content_downloading: bool,
        "EnableSyncTranscoding" enable_sync_transcoding: bool,
        "EnableMediaConversion" enable_media_conversion: bool,
        "EnabledDevices" enabled_devices: Vec<String>,
        "EnableAllDevices" enable_all_devices: bool,
        "EnabledChannels" enabled_channels: Vec<Uuid>,
        "EnableAllChannels" enable_all_channels: bool,
        "EnabledFolders" enabled_folders: Vec<Uuid>,
        "EnableAllFolders" enable_all_folders: bool,
        "InvalidLoginAttemptCount" invalid_login_attempt_count: i32,
        "LoginAttemptsBeforeLockout" login_attempts_before_lockout: i32,
        "MaxActiveSessions" max_active_sessions: i32,
        "EnablePublicSharing" enable_public_sharing: bool,
        "BlockedMediaFolders" blocked_media_folders: Vec<Uuid>,
        "BlockedChannels" blocked_channels: Vec<Uuid>,
        "RemoteClientBitrateLimit" remote_client_bitrate_limit: i32,
        "AuthenticationProviderId" authentication_provider_id: String,
        "PasswordResetProviderId" password_reset_provider_id: String,
        "SyncPlayAccess" sync_play_access: SyncPlayUserAccessType,
    }
}

impl UserPolicy {
    /// Failed logins have reached the lockout threshold. A threshold of zero
    /// or below disables lockout.
    pub fn is_locked_out(&self) -> bool {
        match (self.invalid_login_attempt_count, self.login_attempts_before_lockout) {
            (Some(attempts), Some(limit)) if limit > 0 => attempts >= limit,
            _ => false,
        }
    }
}

jellyfin_dto! {
    pub struct AccessSchedule {
        "Id" id: i32,
        "UserId" user_id: Uuid,
        "DayOfWeek" day_of_week: DynamicDayOfWeek,
        "StartHour" start_hour: f64,
        "EndHour" end_hour: f64,
    }
}

jellyfin_dto! {
    pub struct UserDto {
        "Name" name: String,
        "ServerId" server_id: String,
        "ServerName" server_name: String,
        "Id" id: Uuid,
        "PrimaryImageTag" primary_image_tag: String,
        "HasPassword" has_password: bool,
        "HasConfiguredPassword" has_configured_password: bool,
        "HasConfiguredEasyPassword" has_configured_easy_password: bool,
        "EnableAutoLogin" enable_auto_login: bool,
        "LastLoginDate" last_login_date: DateTime<Utc>,
        "LastActivityDate" last_activity_date: DateTime<Utc>,
        "Configuration" configuration: UserConfiguration,
        "Policy" policy: UserPolicy,
        "PrimaryImageAspectRatio" primary_image_aspect_ratio: f64,
    }
}

jellyfin_dto! {
    /// Server identity and paths (`GET /System/Info`).
    pub struct SystemInfo {
        "LocalAddress" local_address: String,
        "ServerName" server_name: String,
        "Version" version: String,
        "ProductName" product_name: String,
        "OperatingSystem" operating_system: String,
        "Id" id: String,
        "StartupWizardCompleted" startup_wizard_completed: bool,
        "OperatingSystemDisplayName" operating_system_display_name: String,
        "PackageName" package_name: String,
        "HasPendingRestart" has_pending_restart: bool,
        "IsShuttingDown" is_shutting_down: bool,
        "SupportsLibraryMonitor" supports_library_monitor: bool,
        "WebSocketPortNumber" web_socket_port_number: i32,
        "CompletedInstallations" completed_installations: Vec<InstallationInfo>,
        "CanSelfRestart" can_self_restart: bool = true,
        "CanLaunchWebBrowser" can_launch_web_browser: bool = false,
        "ProgramDataPath" program_data_path: String,
        "WebPath" web_path: String,
        "ItemsByNamePath" items_by_name_path: String,
        "CachePath" cache_path: String,
        "LogPath" log_path: String,
        "InternalMetadataPath" internal_metadata_path: String,
        "TranscodingTempPath" transcoding_temp_path: String,
        "CastReceiverApplications" cast_receiver_applications: Vec<CastReceiverApplication>,
        "HasUpdateAvailable" has_update_available: bool = false,
        "EncoderLocation" encoder_location: String = "System",
        "SystemArchitecture" system_architecture: String = "X64",
    }
}

jellyfin_dto! {
    pub struct InstallationInfo {
        "Guid" guid: Uuid,
        "Name" name: String,
        "Version" version: String,
        "Changelog" changelog: String,
        "SourceUrl" source_url: String,
        "Checksum" checksum: String,
    }
}

jellyfin_dto! {
    /// Transcoding settings from `GET /System/Configuration/encoding`.
    pub struct EncodingOptions {
        "EncodingThreadCount" encoding_thread_count: i32,
        "TranscodingTempPath" transcoding_temp_path: String,
        "FallbackFontPath" fallback_font_path: String,
        "EnableFallbackFont" enable_fallback_font: bool,
        "EnableAudioVbr" enable_audio_vbr: bool,
        "DownMixAudioBoost" down_mix_audio_boost: f64,
        "DownMixStereoAlgorithm" down_mix_stereo_algorithm: DownMixStereoAlgorithms,
        "MaxMuxingQueueSize" max_muxing_queue_size: i32,
        "EnableThrottling" enable_throttling: bool,
        "ThrottleDelaySeconds" throttle_delay_seconds: i32,
        "EnableSegmentDeletion" enable_segment_deletion: bool,
        "SegmentKeepSeconds" segment_keep_seconds: i32,
        "HardwareAccelerationType" hardware_acceleration_type: HardwareAccelerationType,
        "EncoderAppPath" encoder_app_path: String,
        "EncoderAppPathDisplay" encoder_app_path_display: String,
        "VaapiDevice" vaapi_device: String,
        "QsvDevice" qsv_device: String,
        "EnableTonemapping" enable_tonemapping: bool,
        "EnableVppTonemapping" enable_vpp_tonemapping: bool,
        "EnableVideoToolboxTonemapping" enable_video_toolbox_tonemapping: bool,
        "TonemappingAlgorithm" tonemapping_algorithm: TonemappingAlgorithm,
        "TonemappingMode" tonemapping_mode: TonemappingMode,
        "TonemappingRange" tonemapping_range: TonemappingRange,
        "TonemappingDesat" tonemapping_desat: f64,
        "TonemappingPeak" tonemapping_peak: f64,
        "TonemappingParam" tonemapping_param: f64,
        "VppTonemappingBrightness" vpp_tonemapping_brightness: f64,
        "VppTonemappingContrast" vpp_tonemapping_contrast: f64,
        "H264Crf" h264_crf: i32,
        "H265Crf" h265_crf: i32,
        "EncoderPreset" encoder_preset: EncoderPreset,
        "DeinterlaceDoubleRate" deinterlace_double_rate: bool,
        "DeinterlaceMethod" deinterlace_method: DeinterlaceMethod,
        "EnableDecodingColorDepth10Hevc" enable_decoding_color_depth10_hevc: bool,
        "EnableDecodingColorDepth10Vp9" enable_decoding_color_depth10_vp9: bool,
        "EnableDecodingColorDepth10HevcRext" enable_decoding_color_depth10_hevc_rext: bool,
        "EnableDecodingColorDepth12HevcRext" enable_decoding_color_depth12_hevc_rext: bool,
        "EnableEnhancedNvdecDecoder" enable_enhanced_nvdec_decoder: bool,
        "PreferSystemNativeHwDecoder" prefer_system_native_hw_decoder: bool,
        "EnableIntelLowPowerH264HwEncoder" enable_intel_low_power_h264_hw_encoder: bool,
        "EnableIntelLowPowerHevcHwEncoder" enable_intel_low_power_hevc_hw_encoder: bool,
        "EnableHardwareEncoding" enable_hardware_encoding: bool,
        "AllowHevcEncoding" allow_hevc_encoding: bool,
        "AllowAv1Encoding" allow_av1_encoding: bool,
        "EnableSubtitleExtraction" enable_subtitle_extraction: bool,
        "HardwareDecodingCodecs" hardware_decoding_codecs: Vec<String>,
        "AllowOnDemandMetadataBasedKeyframeExtractionForExtensions"
            allow_on_demand_metadata_based_keyframe_extraction_for_extensions: Vec<String>,
    }
}

impl EncodingOptions {
    /// Whether a hardware backend other than `none` is selected.
    pub fn uses_hardware_acceleration(&self) -> bool {
        self.hardware_acceleration_type
            .is_some_and(|kind| kind != HardwareAccelerationType::None)
    }
}

jellyfin_dto! {
    pub struct MediaPathInfo {
        "Path" path: String,
    }
}

jellyfin_dto! {
    pub struct ImageOption {
        "Type" kind: ImageType,
        "Limit" limit: i32,
        "MinWidth" min_width: i32,
    }
}

jellyfin_dto! {
    /// Fetcher and image settings for one item type inside a library.
    pub struct TypeOptions {
        "Type" kind: String,
        "MetadataFetchers" metadata_fetchers: Vec<String>,
        "MetadataFetcherOrder" metadata_fetcher_order: Vec<String>,
        "ImageFetchers" image_fetchers: Vec<String>,
        "ImageFetcherOrder" image_fetcher_order: Vec<String>,
        "ImageOptions" image_options: Vec<ImageOption>,
    }
}

jellyfin_dto! {
    /// Per-library settings, as stored in a virtual folder.
    pub struct LibraryOptions {
        "Enabled" enabled: bool,
        "EnablePhotos" enable_photos: bool,
        "EnableRealtimeMonitor" enable_realtime_monitor: bool,
        "EnableLUFSScan" enable_lufs_scan: bool,
        "EnableChapterImageExtraction" enable_chapter_image_extraction: bool,
        "ExtractChapterImagesDuringLibraryScan" extract_chapter_images_during_library_scan: bool,
        "EnableTrickplayImageExtraction" enable_trickplay_image_extraction: bool,
        "ExtractTrickplayImagesDuringLibraryScan" extract_trickplay_images_during_library_scan: bool,
        "PathInfos" path_infos: Vec<MediaPathInfo> = Vec::new(),
        "SaveLocalMetadata" save_local_metadata: bool,
        "EnableInternetProviders" enable_internet_providers: bool,
        "EnableAutomaticSeriesGrouping" enable_automatic_series_grouping: bool,
        "EnableEmbeddedTitles" enable_embedded_titles: bool,
        "EnableEmbeddedExtrasTitles" enable_embedded_extras_titles: bool,
        "EnableEmbeddedEpisodeInfos" enable_embedded_episode_infos: bool,
        "AutomaticRefreshIntervalDays" automatic_refresh_interval_days: i32,
        "PreferredMetadataLanguage" preferred_metadata_language: String,
        "MetadataCountryCode" metadata_country_code: String,
        "SeasonZeroDisplayName" season_zero_display_name: String,
        "MetadataSavers" metadata_savers: Vec<String>,
        "DisabledLocalMetadataReaders" disabled_local_metadata_readers: Vec<String> = Vec::new(),
        "LocalMetadataReaderOrder" local_metadata_reader_order: Vec<String>,
        "DisabledSubtitleFetchers" disabled_subtitle_fetchers: Vec<String> = Vec::new(),
        "SubtitleFetcherOrder" subtitle_fetcher_order: Vec<String> = Vec::new(),
        "DisabledMediaSegmentProviders" disabled_media_segment_providers: Vec<String> = Vec::new(),
        "MediaSegmentProviderOrder" media_segment_provider_order: Vec<String> = Vec::new(),
        "SkipSubtitlesIfEmbeddedSubtitlesPresent"
            skip_subtitles_if_embedded_subtitles_present: bool,
        "SkipSubtitlesIfAudioTrackMatches" skip_subtitles_if_audio_track_matches: bool,
        "SubtitleDownloadLanguages" subtitle_download_languages: Vec<String>,
        "RequirePerfectSubtitleMatch" require_perfect_subtitle_match: bool,
        "SaveSubtitlesWithMedia" save_subtitles_with_media: bool,
        "SaveLyricsWithMedia" save_lyrics_with_media: bool = false,
        "SaveTrickplayWithMedia" save_trickplay_with_media: bool = false,
        "DisabledLyricFetchers" disabled_lyric_fetchers: Vec<String> = Vec::new(),
        "LyricFetcherOrder" lyric_fetcher_order: Vec<String> = Vec::new(),
        "PreferNonstandardArtistsTag" prefer_nonstandard_artists_tag: bool = false,
        "UseCustomTagDelimiters" use_custom_tag_delimiters: bool = false,
        "CustomTagDelimiters" custom_tag_delimiters: Vec<String> = Vec::new(),
        "DelimiterWhitelist" delimiter_whitelist: Vec<String> = Vec::new(),
        "AutomaticallyAddToCollection" automatically_add_to_collection: bool,
        "AllowEmbeddedSubtitles" allow_embedded_subtitles: EmbeddedSubtitleOptions,
        "TypeOptions" type_options: Vec<TypeOptions> = Vec::new(),
    }
}

impl LibraryOptions {
    /// Options for one item type (`"Movie"`, `"Series"`, ...), if configured.
    pub fn type_options_for(&self, kind: &str) -> Option<&TypeOptions> {
        self.type_options
            .as_deref()?
            .iter()
            .find(|options| options.kind.as_deref() == Some(kind))
    }
}
