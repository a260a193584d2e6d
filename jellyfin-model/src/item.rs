//! Library items and the small records hanging off them.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::enums::{
    BaseItemKind, ChannelType, CollectionType, DayOfWeek, ExtraType, ImageOrientation,
    ImageType, IsoType, LocationType, MediaType, MetadataField, PersonKind, PlayAccess,
    ProgramAudio, Video3DFormat, VideoType,
};
use crate::jellyfin_dto;
use crate::schema::StringMap;
use crate::media::{MediaSourceInfo, MediaStream};
use crate::ticks::ticks_to_duration;

/// BlurHash strings keyed by image tag.
pub type BlurHashMap = StringMap;

jellyfin_dto! {
    /// Item descriptor returned by nearly every library endpoint.
    ///
    /// Movies, episodes, folders, channels, programs, people and photos all
    /// share this shape; which fields are populated depends on the
    /// [`BaseItemKind`] and the `Fields` the caller asked for.
    pub struct BaseItemDto {
        "Name" name: String,
        "OriginalTitle" original_title: String,
        "ServerId" server_id: String,
        "Id" id: Uuid,
        "Etag" etag: String,
        "SourceType" source_type: String,
        "PlaylistItemId" playlist_item_id: String,
        "DateCreated" date_created: DateTime<Utc>,
        "DateLastMediaAdded" date_last_media_added: DateTime<Utc>,
        "ExtraType" extra_type: ExtraType,
        "AirsBeforeSeasonNumber" airs_before_season_number: i32,
        "AirsAfterSeasonNumber" airs_after_season_number: i32,
        "AirsBeforeEpisodeNumber" airs_before_episode_number: i32,
        "CanDelete" can_delete: bool,
        "CanDownload" can_download: bool,
        "HasLyrics" has_lyrics: bool,
        "HasSubtitles" has_subtitles: bool,
        "PreferredMetadataLanguage" preferred_metadata_language: String,
        "PreferredMetadataCountryCode" preferred_metadata_country_code: String,
        "Container" container: String,
        "SortName" sort_name: String,
        "ForcedSortName" forced_sort_name: String,
        "Video3DFormat" video_3d_format: Video3DFormat,
        "PremiereDate" premiere_date: DateTime<Utc>,
        "ExternalUrls" external_urls: Vec<ExternalUrl>,
        "MediaSources" media_sources: Vec<MediaSourceInfo>,
        "CriticRating" critic_rating: f32,
        "ProductionLocations" production_locations: Vec<String>,
        "Path" path: String,
        "EnableMediaSourceDisplay" enable_media_source_display: bool,
        "OfficialRating" official_rating: String,
        "CustomRating" custom_rating: String,
        "ChannelId" channel_id: Uuid,
        "ChannelName" channel_name: String,
        "Overview" overview: String,
        "Taglines" taglines: Vec<String>,
        "Genres" genres: Vec<String>,
        "CommunityRating" community_rating: f32,
        "CumulativeRunTimeTicks" cumulative_run_time_ticks: i64,
        "RunTimeTicks" run_time_ticks: i64,
        "PlayAccess" play_access: PlayAccess,
        "AspectRatio" aspect_ratio: String,
        "ProductionYear" production_year: i32,
        "IsPlaceHolder" is_place_holder: bool,
        "Number" number: String,
        "ChannelNumber" channel_number: String,
        "IndexNumber" index_number: i32,
        "IndexNumberEnd" index_number_end: i32,
        "ParentIndexNumber" parent_index_number: i32,
        "RemoteTrailers" remote_trailers: Vec<MediaUrl>,
        "ProviderIds" provider_ids: StringMap,
        "IsHD" is_hd: bool,
        "IsFolder" is_folder: bool,
        "ParentId" parent_id: Uuid,
        "Type" kind: BaseItemKind,
        "People" people: Vec<BaseItemPerson>,
        "Studios" studios: Vec<NameGuidPair>,
        "GenreItems" genre_items: Vec<NameGuidPair>,
        "ParentLogoItemId" parent_logo_item_id: Uuid,
        "ParentBackdropItemId" parent_backdrop_item_id: Uuid,
        "ParentBackdropImageTags" parent_backdrop_image_tags: Vec<String>,
        "LocalTrailerCount" local_trailer_count: i32,
        "UserData" user_data: UserItemDataDto,
        "RecursiveItemCount" recursive_item_count: i32,
        "ChildCount" child_count: i32,
        "SeriesName" series_name: String,
        "SeriesId" series_id: Uuid,
        "SeasonId" season_id: Uuid,
        "SpecialFeatureCount" special_feature_count: i32,
        "DisplayPreferencesId" display_preferences_id: String,
        "Status" status: String,
        "AirTime" air_time: String,
        "AirDays" air_days: Vec<DayOfWeek>,
        "Tags" tags: Vec<String>,
        "PrimaryImageAspectRatio" primary_image_aspect_ratio: f64,
        "Artists" artists: Vec<String>,
        "ArtistItems" artist_items: Vec<NameGuidPair>,
        "Album" album: String,
        "CollectionType" collection_type: CollectionType,
        "DisplayOrder" display_order: String,
        "AlbumId" album_id: Uuid,
        "AlbumPrimaryImageTag" album_primary_image_tag: String,
        "SeriesPrimaryImageTag" series_primary_image_tag: String,
        "AlbumArtist" album_artist: String,
        "AlbumArtists" album_artists: Vec<NameGuidPair>,
        "SeasonName" season_name: String,
        "MediaStreams" media_streams: Vec<MediaStream>,
        "VideoType" video_type: VideoType,
        "PartCount" part_count: i32,
        "MediaSourceCount" media_source_count: i32,
        "ImageTags" image_tags: StringMap,
        "BackdropImageTags" backdrop_image_tags: Vec<String>,
        "ScreenshotImageTags" screenshot_image_tags: Vec<String>,
        "ParentLogoImageTag" parent_logo_image_tag: String,
        "ParentArtItemId" parent_art_item_id: Uuid,
        "ParentArtImageTag" parent_art_image_tag: String,
        "SeriesThumbImageTag" series_thumb_image_tag: String,
        "ImageBlurHashes" image_blur_hashes: ImageBlurHashes,
        "SeriesStudio" series_studio: String,
        "ParentThumbItemId" parent_thumb_item_id: Uuid,
        "ParentThumbImageTag" parent_thumb_image_tag: String,
        "ParentPrimaryImageItemId" parent_primary_image_item_id: Uuid,
        "ParentPrimaryImageTag" parent_primary_image_tag: String,
        "Chapters" chapters: Vec<ChapterInfo>,
        /// Trickplay manifests keyed by media source id, then by width.
        "Trickplay" trickplay: BTreeMap<String, BTreeMap<String, TrickplayInfoDto>>,
        "LocationType" location_type: LocationType,
        "IsoType" iso_type: IsoType,
        "MediaType" media_type: MediaType = MediaType::Unknown,
        "EndDate" end_date: DateTime<Utc>,
        "LockedFields" locked_fields: Vec<MetadataField>,
        "TrailerCount" trailer_count: i32,
        "MovieCount" movie_count: i32,
        "SeriesCount" series_count: i32,
        "ProgramCount" program_count: i32,
        "EpisodeCount" episode_count: i32,
        "SongCount" song_count: i32,
        "AlbumCount" album_count: i32,
        "ArtistCount" artist_count: i32,
        "MusicVideoCount" music_video_count: i32,
        "LockData" lock_data: bool,
        "Width" width: i32,
        "Height" height: i32,
        "CameraMake" camera_make: String,
        "CameraModel" camera_model: String,
        "Software" software: String,
        "ExposureTime" exposure_time: f64,
        "FocalLength" focal_length: f64,
        "ImageOrientation" image_orientation: ImageOrientation,
        "Aperture" aperture: f64,
        "ShutterSpeed" shutter_speed: f64,
        "Latitude" latitude: f64,
        "Longitude" longitude: f64,
        "Altitude" altitude: f64,
        "IsoSpeedRating" iso_speed_rating: i32,
        "SeriesTimerId" series_timer_id: String,
        "ProgramId" program_id: String,
        "ChannelPrimaryImageTag" channel_primary_image_tag: String,
        "StartDate" start_date: DateTime<Utc>,
        "CompletionPercentage" completion_percentage: f64,
        "IsRepeat" is_repeat: bool,
        "EpisodeTitle" episode_title: String,
        "ChannelType" channel_type: ChannelType,
        "Audio" audio: ProgramAudio,
        "IsMovie" is_movie: bool,
        "IsSports" is_sports: bool,
        "IsSeries" is_series: bool,
        "IsLive" is_live: bool,
        "IsNews" is_news: bool,
        "IsKids" is_kids: bool,
        "IsPremiere" is_premiere: bool,
        "TimerId" timer_id: String,
        "NormalizationGain" normalization_gain: f32,
        /// Program currently airing on a channel item.
        "CurrentProgram" current_program: Box<BaseItemDto>,
    }
}

impl BaseItemDto {
    /// Playback length, when the server reported one.
    pub fn run_time(&self) -> Option<Duration> {
        self.run_time_ticks.and_then(ticks_to_duration)
    }

    /// Whether this item is a live TV guide entry rather than library media.
    pub fn is_live_program(&self) -> bool {
        matches!(
            self.kind,
            Some(BaseItemKind::Program | BaseItemKind::LiveTvProgram | BaseItemKind::TvProgram)
        )
    }

    pub fn image_tag(&self, image_type: ImageType) -> Option<&str> {
        self.image_tags
            .as_ref()
            .and_then(|tags| tags.get(image_type.as_str()))
            .and_then(Option::as_deref)
    }

    pub fn provider_id(&self, provider: &str) -> Option<&str> {
        self.provider_ids
            .as_ref()
            .and_then(|ids| ids.get(provider))
            .and_then(Option::as_deref)
    }
}

jellyfin_dto! {
    pub struct ExternalUrl {
        "Name" name: String,
        "Url" url: String,
    }
}

jellyfin_dto! {
    pub struct MediaUrl {
        "Url" url: String,
        "Name" name: String,
    }
}

jellyfin_dto! {
    pub struct NameGuidPair {
        "Name" name: String,
        "Id" id: Uuid,
    }
}

jellyfin_dto! {
    /// Cast or crew member attached to an item.
    pub struct BaseItemPerson {
        "Name" name: String,
        "Id" id: Uuid,
        "Role" role: String,
        "Type" kind: PersonKind = PersonKind::Unknown,
        "PrimaryImageTag" primary_image_tag: String,
        "ImageBlurHashes" image_blur_hashes: ImageBlurHashes,
    }
}

jellyfin_dto! {
    /// Per-user state of an item.
    pub struct UserItemDataDto {
        "Rating" rating: f64,
        "PlayedPercentage" played_percentage: f64,
        "UnplayedItemCount" unplayed_item_count: i32,
        "PlaybackPositionTicks" playback_position_ticks: i64,
        "PlayCount" play_count: i32,
        "IsFavorite" is_favorite: bool,
        "Likes" likes: bool,
        "LastPlayedDate" last_played_date: DateTime<Utc>,
        "Played" played: bool,
        "Key" key: String,
        "ItemId" item_id: Uuid,
    }
}

jellyfin_dto! {
    /// BlurHash placeholders per image type, each keyed by image tag.
    pub struct ImageBlurHashes {
        "Primary" primary: BlurHashMap,
        "Art" art: BlurHashMap,
        "Backdrop" backdrop: BlurHashMap,
        "Banner" banner: BlurHashMap,
        "Logo" logo: BlurHashMap,
        "Thumb" thumb: BlurHashMap,
        "Disc" disc: BlurHashMap,
        "Box" box_image: BlurHashMap,
        "Screenshot" screenshot: BlurHashMap,
        "Menu" menu: BlurHashMap,
        "Chapter" chapter: BlurHashMap,
        "BoxRear" box_rear: BlurHashMap,
        "Profile" profile: BlurHashMap,
    }
}

jellyfin_dto! {
    pub struct ChapterInfo {
        "StartPositionTicks" start_position_ticks: i64,
        "Name" name: String,
        "ImagePath" image_path: String,
        "ImageDateModified" image_date_modified: DateTime<Utc>,
        "ImageTag" image_tag: String,
    }
}

jellyfin_dto! {
    /// Layout of one trickplay tile set.
    pub struct TrickplayInfoDto {
        "Width" width: i32,
        "Height" height: i32,
        "TileWidth" tile_width: i32,
        "TileHeight" tile_height: i32,
        "ThumbnailCount" thumbnail_count: i32,
        /// Milliseconds between thumbnails.
        "Interval" interval: i32,
        "Bandwidth" bandwidth: i32,
    }
}

jellyfin_dto! {
    pub struct BaseItemDtoQueryResult {
        "Items" items: Vec<BaseItemDto>,
        "TotalRecordCount" total_record_count: i32,
        "StartIndex" start_index: i32,
    }
}
