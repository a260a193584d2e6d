//! Live TV recordings, guide queries, tuner setup and search hints.


use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::configuration::NameValuePair;
use crate::enums::{
    BaseItemKind, DayOfWeek, DayPattern, ImageType, ItemFields, ItemSortBy, KeepUntil, MediaType,
    RecordingStatus, SortOrder,
};
use crate::item::BaseItemDto;
use crate::jellyfin_dto;
use crate::schema::StringMap;

jellyfin_dto! {
    /// A single scheduled or finished recording.
    pub struct TimerInfoDto {
        "Id" id: String,
        "Type" kind: String,
        "ServerId" server_id: String,
        "ExternalId" external_id: String,
        "ChannelId" channel_id: Uuid,
        "ExternalChannelId" external_channel_id: String,
        "ChannelName" channel_name: String,
        "ChannelPrimaryImageTag" channel_primary_image_tag: String,
        "ProgramId" program_id: String,
        "ExternalProgramId" external_program_id: String,
        "Name" name: String,
        "Overview" overview: String,
        "StartDate" start_date: DateTime<Utc>,
        "EndDate" end_date: DateTime<Utc>,
        "ServiceName" service_name: String,
        "Priority" priority: i32,
        "PrePaddingSeconds" pre_padding_seconds: i32,
        "PostPaddingSeconds" post_padding_seconds: i32,
        "IsPrePaddingRequired" is_pre_padding_required: bool,
        "ParentBackdropItemId" parent_backdrop_item_id: String,
        "ParentBackdropImageTags" parent_backdrop_image_tags: Vec<String>,
        "IsPostPaddingRequired" is_post_padding_required: bool,
        "KeepUntil" keep_until: KeepUntil,
        "Status" status: RecordingStatus,
        "SeriesTimerId" series_timer_id: String,
        "ExternalSeriesTimerId" external_series_timer_id: String,
        "RunTimeTicks" run_time_ticks: i64,
        "ProgramInfo" program_info: BaseItemDto,
    }
}

impl TimerInfoDto {
    /// Recording window including pre- and post-padding.
    pub fn padded_window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let pre = Duration::seconds(i64::from(self.pre_padding_seconds.unwrap_or(0)));
        let post = Duration::seconds(i64::from(self.post_padding_seconds.unwrap_or(0)));
        Some((self.start_date? - pre, self.end_date? + post))
    }
}

jellyfin_dto! {
    /// Recurring recording rule for a series.
    pub struct SeriesTimerInfoDto {
        "Id" id: String,
        "Type" kind: String,
        "ServerId" server_id: String,
        "ExternalId" external_id: String,
        "ChannelId" channel_id: Uuid,
        "ExternalChannelId" external_channel_id: String,
        "ChannelName" channel_name: String,
        "ChannelPrimaryImageTag" channel_primary_image_tag: String,
        "ProgramId" program_id: String,
        "ExternalProgramId" external_program_id: String,
        "Name" name: String,
        "Overview" overview: String,
        "StartDate" start_date: DateTime<Utc>,
        "EndDate" end_date: DateTime<Utc>,
        "ServiceName" service_name: String,
        "Priority" priority: i32,
        "PrePaddingSeconds" pre_padding_seconds: i32,
        "PostPaddingSeconds" post_padding_seconds: i32,
        "IsPrePaddingRequired" is_pre_padding_required: bool,
        "ParentBackdropItemId" parent_backdrop_item_id: String,
        "ParentBackdropImageTags" parent_backdrop_image_tags: Vec<String>,
        "IsPostPaddingRequired" is_post_padding_required: bool,
        "KeepUntil" keep_until: KeepUntil,
        "RecordAnyTime" record_any_time: bool,
        "SkipEpisodesInLibrary" skip_episodes_in_library: bool,
        "RecordAnyChannel" record_any_channel: bool,
        "KeepUpTo" keep_up_to: i32,
        "RecordNewOnly" record_new_only: bool,
        "Days" days: Vec<DayOfWeek>,
        "DayPattern" day_pattern: DayPattern,
        "ImageTags" image_tags: StringMap,
        "ParentThumbItemId" parent_thumb_item_id: String,
        "ParentThumbImageTag" parent_thumb_image_tag: String,
        "ParentPrimaryImageItemId" parent_primary_image_item_id: Uuid,
        "ParentPrimaryImageTag" parent_primary_image_tag: String,
    }
}

jellyfin_dto! {
    /// Request body of `POST /LiveTv/Programs`.
    pub struct GetProgramsDto {
        "ChannelIds" channel_ids: Vec<Uuid>,
        "UserId" user_id: Uuid,
        "MinStartDate" min_start_date: DateTime<Utc>,
        "HasAired" has_aired: bool,
        "IsAiring" is_airing: bool,
        "MaxStartDate" max_start_date: DateTime<Utc>,
        "MinEndDate" min_end_date: DateTime<Utc>,
        "MaxEndDate" max_end_date: DateTime<Utc>,
        "IsMovie" is_movie: bool,
        "IsSeries" is_series: bool,
        "IsNews" is_news: bool,
        "IsKids" is_kids: bool,
        "IsSports" is_sports: bool,
        "StartIndex" start_index: i32,
        "Limit" limit: i32,
        "SortBy" sort_by: Vec<ItemSortBy>,
        "SortOrder" sort_order: Vec<SortOrder>,
        "Genres" genres: Vec<String>,
        "GenreIds" genre_ids: Vec<Uuid>,
        "EnableImages" enable_images: bool,
        "EnableTotalRecordCount" enable_total_record_count: bool = true,
        "ImageTypeLimit" image_type_limit: i32,
        "EnableImageTypes" enable_image_types: Vec<ImageType>,
        "EnableUserData" enable_user_data: bool,
        "SeriesTimerId" series_timer_id: String,
        "LibrarySeriesId" library_series_id: Uuid,
        "Fields" fields: Vec<ItemFields>,
    }
}

jellyfin_dto! {
    pub struct LiveTvOptions {
        "GuideDays" guide_days: i32,
        "RecordingPath" recording_path: String,
        "MovieRecordingPath" movie_recording_path: String,
        "SeriesRecordingPath" series_recording_path: String,
        "EnableRecordingSubfolders" enable_recording_subfolders: bool,
        "EnableOriginalAudioWithEncodedRecordings" enable_original_audio_with_encoded_recordings: bool,
        "TunerHosts" tuner_hosts: Vec<TunerHostInfo>,
        "ListingProviders" listing_providers: Vec<ListingsProviderInfo>,
        "PrePaddingSeconds" pre_padding_seconds: i32,
        "PostPaddingSeconds" post_padding_seconds: i32,
        "MediaLocationsCreated" media_locations_created: Vec<String>,
        "RecordingPostProcessor" recording_post_processor: String,
        "RecordingPostProcessorArguments" recording_post_processor_arguments: String,
        "SaveRecordingNFO" save_recording_nfo: bool,
        "SaveRecordingImages" save_recording_images: bool,
    }
}

jellyfin_dto! {
    /// Guide data source such as Schedules Direct or an XMLTV file.
    pub struct ListingsProviderInfo {
        "Id" id: String,
        "Type" kind: String,
        "Username" username: String,
        "Password" password: String,
        "ListingsId" listings_id: String,
        "ZipCode" zip_code: String,
        "Country" country: String,
        "Path" path: String,
        "EnabledTuners" enabled_tuners: Vec<String>,
        "EnableAllTuners" enable_all_tuners: bool,
        "NewsCategories" news_categories: Vec<String>,
        "SportsCategories" sports_categories: Vec<String>,
        "KidsCategories" kids_categories: Vec<String>,
        "MovieCategories" movie_categories: Vec<String>,
        "ChannelMappings" channel_mappings: Vec<NameValuePair>,
        "MoviePrefix" movie_prefix: String,
        "PreferredLanguage" preferred_language: String,
        "UserAgent" user_agent: String,
    }
}

jellyfin_dto! {
    pub struct TunerHostInfo {
        "Id" id: String,
        "Url" url: String,
        "Type" kind: String,
        "DeviceId" device_id: String,
        "FriendlyName" friendly_name: String,
        "ImportFavoritesOnly" import_favorites_only: bool,
        "AllowHWTranscoding" allow_hw_transcoding: bool,
        "AllowFmp4TranscodingContainer" allow_fmp4_transcoding_container: bool,
        "AllowStreamSharing" allow_stream_sharing: bool,
        "FallbackMaxStreamingBitrate" fallback_max_streaming_bitrate: i32,
        "EnableStreamLooping" enable_stream_looping: bool,
        "Source" source: String,
        "TunerCount" tuner_count: i32,
        "UserAgent" user_agent: String,
        "IgnoreDts" ignore_dts: bool,
    }
}

jellyfin_dto! {
    /// One hit from `GET /Search/Hints`.
    pub struct SearchHint {
        "ItemId" item_id: Uuid,
        "Id" id: Uuid,
        "Name" name: String,
        "MatchedTerm" matched_term: String,
        "IndexNumber" index_number: i32,
        "ProductionYear" production_year: i32,
        "ParentIndexNumber" parent_index_number: i32,
        "PrimaryImageTag" primary_image_tag: String,
        "ThumbImageTag" thumb_image_tag: String,
        "ThumbImageItemId" thumb_image_item_id: String,
        "BackdropImageTag" backdrop_image_tag: String,
        "BackdropImageItemId" backdrop_image_item_id: String,
        "Type" kind: BaseItemKind,
        "IsFolder" is_folder: bool,
        "RunTimeTicks" run_time_ticks: i64,
        "MediaType" media_type: MediaType = MediaType::Unknown,
        "StartDate" start_date: DateTime<Utc>,
        "EndDate" end_date: DateTime<Utc>,
        "Series" series: String,
        "Status" status: String,
        "Album" album: String,
        "AlbumId" album_id: Uuid,
        "AlbumArtist" album_artist: String,
        "Artists" artists: Vec<String> = Vec::new(),
        "SongCount" song_count: i32,
        "EpisodeCount" episode_count: i32,
        "ChannelId" channel_id: Uuid,
        "ChannelName" channel_name: String,
        "PrimaryImageAspectRatio" primary_image_aspect_ratio: f64,
    }
}

jellyfin_dto! {
    pub struct SearchHintResult {
        "SearchHints" search_hints: Vec<SearchHint>,
        "TotalRecordCount" total_record_count: i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn padded_window_extends_both_ends() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 20, 0, 0).single().expect("start");
        let end = Utc.with_ymd_and_hms(2024, 5, 1, 21, 0, 0).single().expect("end");
        let timer = TimerInfoDto::new()
            .with_start_date(start)
            .with_end_date(end)
            .with_pre_padding_seconds(60)
            .with_post_padding_seconds(300);

        let (from, to) = timer.padded_window().expect("window");
        assert_eq!(from, start - Duration::seconds(60));
        assert_eq!(to, end + Duration::seconds(300));
        assert_eq!(TimerInfoDto::new().padded_window(), None);
    }

    #[test]
    fn get_programs_counts_records_unless_told_otherwise() {
        assert_eq!(GetProgramsDto::new().enable_total_record_count, Some(true));
        let query: GetProgramsDto =
            serde_json::from_value(json!({"EnableTotalRecordCount": false})).expect("decode");
        assert_eq!(query.enable_total_record_count, Some(false));
    }

    #[test]
    fn search_hint_defaults() {
        let hint: SearchHint = serde_json::from_value(json!({"Name": "Alien"})).expect("decode");
        assert_eq!(hint.media_type, Some(MediaType::Unknown));
        assert_eq!(hint.artists, Some(Vec::new()));
    }

    #[test]
    fn recording_status_rejects_unknown_values() {
        let result = serde_json::from_value::<TimerInfoDto>(json!({"Status": "Paused"}));
        assert!(result.is_err());
    }
}
