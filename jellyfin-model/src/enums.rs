//! String enums shared across the models.
//!
//! Every variant carries its exact wire spelling. Jellyfin is not consistent
//! about casing (`CollectionType` and `MediaStreamProtocol` are lowercase,
//! most others PascalCase), so the spellings are never derived from the
//! variant names. A value outside the list fails deserialization.

use crate::string_enum;

string_enum! {
    /// Concrete type of a library item.
    pub enum BaseItemKind {
        AggregateFolder => "AggregateFolder",
        Audio => "Audio",
        AudioBook => "AudioBook",
        BasePluginFolder => "BasePluginFolder",
        Book => "Book",
        BoxSet => "BoxSet",
        Channel => "Channel",
        ChannelFolderItem => "ChannelFolderItem",
        CollectionFolder => "CollectionFolder",
        Episode => "Episode",
        Folder => "Folder",
        Genre => "Genre",
        ManualPlaylistsFolder => "ManualPlaylistsFolder",
        Movie => "Movie",
        LiveTvChannel => "LiveTvChannel",
        LiveTvProgram => "LiveTvProgram",
        MusicAlbum => "MusicAlbum",
        MusicArtist => "MusicArtist",
        MusicGenre => "MusicGenre",
        MusicVideo => "MusicVideo",
        Person => "Person",
        Photo => "Photo",
        PhotoAlbum => "PhotoAlbum",
        Playlist => "Playlist",
        PlaylistsFolder => "PlaylistsFolder",
        Program => "Program",
        Recording => "Recording",
        Season => "Season",
        Series => "Series",
        Studio => "Studio",
        Trailer => "Trailer",
        TvChannel => "TvChannel",
        TvProgram => "TvProgram",
        UserRootFolder => "UserRootFolder",
        UserView => "UserView",
        Video => "Video",
        Year => "Year",
    }
}

string_enum! {
    pub enum MediaType {
        Unknown => "Unknown",
        Video => "Video",
        Audio => "Audio",
        Photo => "Photo",
        Book => "Book",
    }
}

string_enum! {
    /// Library collection type. Lowercase on the wire.
    pub enum CollectionType {
        Unknown => "unknown",
        Movies => "movies",
        TvShows => "tvshows",
        Music => "music",
        MusicVideos => "musicvideos",
        Trailers => "trailers",
        HomeVideos => "homevideos",
        BoxSets => "boxsets",
        Books => "books",
        Photos => "photos",
        LiveTv => "livetv",
        Playlists => "playlists",
        Folders => "folders",
    }
}

string_enum! {
    pub enum ExtraType {
        Unknown => "Unknown",
        Clip => "Clip",
        Trailer => "Trailer",
        BehindTheScenes => "BehindTheScenes",
        DeletedScene => "DeletedScene",
        Interview => "Interview",
        Scene => "Scene",
        Sample => "Sample",
        ThemeSong => "ThemeSong",
        ThemeVideo => "ThemeVideo",
        Featurette => "Featurette",
        Short => "Short",
    }
}

string_enum! {
    pub enum Video3DFormat {
        HalfSideBySide => "HalfSideBySide",
        FullSideBySide => "FullSideBySide",
        FullTopAndBottom => "FullTopAndBottom",
        HalfTopAndBottom => "HalfTopAndBottom",
        Mvc => "MVC",
    }
}

string_enum! {
    pub enum PlayAccess {
        Full => "Full",
        None => "None",
    }
}

string_enum! {
    pub enum DayOfWeek {
        Sunday => "Sunday",
        Monday => "Monday",
        Tuesday => "Tuesday",
        Wednesday => "Wednesday",
        Thursday => "Thursday",
        Friday => "Friday",
        Saturday => "Saturday",
    }
}

string_enum! {
    /// Day selector used by access schedules; adds the grouped days.
    pub enum DynamicDayOfWeek {
        Sunday => "Sunday",
        Monday => "Monday",
        Tuesday => "Tuesday",
        Wednesday => "Wednesday",
        Thursday => "Thursday",
        Friday => "Friday",
        Saturday => "Saturday",
        Everyday => "Everyday",
        Weekday => "Weekday",
        Weekend => "Weekend",
    }
}

string_enum! {
    pub enum VideoType {
        VideoFile => "VideoFile",
        Iso => "Iso",
        Dvd => "Dvd",
        BluRay => "BluRay",
    }
}

string_enum! {
    pub enum LocationType {
        FileSystem => "FileSystem",
        Remote => "Remote",
        Virtual => "Virtual",
    }
}

string_enum! {
    pub enum IsoType {
        Dvd => "Dvd",
        BluRay => "BluRay",
    }
}

string_enum! {
    /// EXIF orientation of a photo.
    pub enum ImageOrientation {
        TopLeft => "TopLeft",
        TopRight => "TopRight",
        BottomRight => "BottomRight",
        BottomLeft => "BottomLeft",
        LeftTop => "LeftTop",
        RightTop => "RightTop",
        RightBottom => "RightBottom",
        LeftBottom => "LeftBottom",
    }
}

string_enum! {
    pub enum ChannelType {
        Tv => "TV",
        Radio => "Radio",
    }
}

string_enum! {
    pub enum ProgramAudio {
        Mono => "Mono",
        Stereo => "Stereo",
        Dolby => "Dolby",
        DolbyDigital => "DolbyDigital",
        Thx => "Thx",
        Atmos => "Atmos",
    }
}

string_enum! {
    /// Metadata fields a user can lock against refreshes.
    pub enum MetadataField {
        Cast => "Cast",
        Genres => "Genres",
        ProductionLocations => "ProductionLocations",
        Studios => "Studios",
        Tags => "Tags",
        Name => "Name",
        Overview => "Overview",
        Runtime => "Runtime",
        OfficialRating => "OfficialRating",
    }
}

string_enum! {
    pub enum ImageType {
        Primary => "Primary",
        Art => "Art",
        Backdrop => "Backdrop",
        Banner => "Banner",
        Logo => "Logo",
        Thumb => "Thumb",
        Disc => "Disc",
        Box => "Box",
        Screenshot => "Screenshot",
        Menu => "Menu",
        Chapter => "Chapter",
        BoxRear => "BoxRear",
        Profile => "Profile",
    }
}

string_enum! {
    pub enum PersonKind {
        Unknown => "Unknown",
        Actor => "Actor",
        Director => "Director",
        Composer => "Composer",
        Writer => "Writer",
        GuestStar => "GuestStar",
        Producer => "Producer",
        Conductor => "Conductor",
        Lyricist => "Lyricist",
        Arranger => "Arranger",
        Engineer => "Engineer",
        Mixer => "Mixer",
        Remixer => "Remixer",
        Creator => "Creator",
        Artist => "Artist",
        AlbumArtist => "AlbumArtist",
        Author => "Author",
        Illustrator => "Illustrator",
        Penciller => "Penciller",
        Inker => "Inker",
        Colorist => "Colorist",
        Letterer => "Letterer",
        CoverArtist => "CoverArtist",
        Editor => "Editor",
        Translator => "Translator",
    }
}

string_enum! {
    pub enum MediaProtocol {
        File => "File",
        Http => "Http",
        Rtmp => "Rtmp",
        Rtsp => "Rtsp",
        Udp => "Udp",
        Rtp => "Rtp",
        Ftp => "Ftp",
    }
}

string_enum! {
    pub enum MediaSourceType {
        Default => "Default",
        Grouping => "Grouping",
        Placeholder => "Placeholder",
    }
}

string_enum! {
    pub enum TransportStreamTimestamp {
        None => "None",
        Zero => "Zero",
        Valid => "Valid",
    }
}

string_enum! {
    /// Delivery protocol of a transcoded stream. Lowercase on the wire.
    pub enum MediaStreamProtocol {
        Http => "http",
        Hls => "hls",
    }
}

string_enum! {
    pub enum MediaStreamType {
        Audio => "Audio",
        Video => "Video",
        Subtitle => "Subtitle",
        EmbeddedImage => "EmbeddedImage",
        Data => "Data",
        Lyric => "Lyric",
    }
}

string_enum! {
    pub enum SubtitleDeliveryMethod {
        Encode => "Encode",
        Embed => "Embed",
        External => "External",
        Hls => "Hls",
        Drop => "Drop",
    }
}

string_enum! {
    pub enum VideoRange {
        Unknown => "Unknown",
        Sdr => "SDR",
        Hdr => "HDR",
    }
}

string_enum! {
    pub enum VideoRangeType {
        Unknown => "Unknown",
        Sdr => "SDR",
        Hdr10 => "HDR10",
        Hlg => "HLG",
        Dovi => "DOVI",
        DoviWithHdr10 => "DOVIWithHDR10",
        DoviWithHlg => "DOVIWithHLG",
        DoviWithSdr => "DOVIWithSDR",
        Hdr10Plus => "HDR10Plus",
    }
}

string_enum! {
    pub enum AudioSpatialFormat {
        None => "None",
        DolbyAtmos => "DolbyAtmos",
        Dtsx => "DTSX",
    }
}

string_enum! {
    pub enum PlayMethod {
        Transcode => "Transcode",
        DirectStream => "DirectStream",
        DirectPlay => "DirectPlay",
    }
}

string_enum! {
    pub enum PlaybackErrorCode {
        NotAllowed => "NotAllowed",
        NoCompatibleStream => "NoCompatibleStream",
        RateLimitExceeded => "RateLimitExceeded",
    }
}

string_enum! {
    pub enum RepeatMode {
        RepeatNone => "RepeatNone",
        RepeatAll => "RepeatAll",
        RepeatOne => "RepeatOne",
    }
}

string_enum! {
    pub enum PlaybackOrder {
        Default => "Default",
        Shuffle => "Shuffle",
    }
}

string_enum! {
    pub enum ImageSavingConvention {
        Legacy => "Legacy",
        Compatible => "Compatible",
    }
}

string_enum! {
    pub enum ImageResolution {
        MatchSource => "MatchSource",
        P144 => "P144",
        P240 => "P240",
        P360 => "P360",
        P480 => "P480",
        P720 => "P720",
        P1080 => "P1080",
        P1440 => "P1440",
        P2160 => "P2160",
    }
}

string_enum! {
    pub enum TrickplayScanBehavior {
        Blocking => "Blocking",
        NonBlocking => "NonBlocking",
    }
}

string_enum! {
    pub enum ProcessPriorityClass {
        Normal => "Normal",
        Idle => "Idle",
        High => "High",
        RealTime => "RealTime",
        BelowNormal => "BelowNormal",
        AboveNormal => "AboveNormal",
    }
}

string_enum! {
    pub enum SyncPlayUserAccessType {
        CreateAndJoinGroups => "CreateAndJoinGroups",
        JoinGroups => "JoinGroups",
        None => "None",
    }
}

string_enum! {
    /// Item categories that can be blocked when they carry no rating.
    pub enum UnratedItem {
        Movie => "Movie",
        Trailer => "Trailer",
        Series => "Series",
        Music => "Music",
        Book => "Book",
        LiveTvChannel => "LiveTvChannel",
        LiveTvProgram => "LiveTvProgram",
        ChannelContent => "ChannelContent",
        Other => "Other",
    }
}

string_enum! {
    pub enum SubtitlePlaybackMode {
        Default => "Default",
        Always => "Always",
        OnlyForced => "OnlyForced",
        None => "None",
        Smart => "Smart",
    }
}

string_enum! {
    pub enum KeepUntil {
        UntilDeleted => "UntilDeleted",
        UntilSpaceNeeded => "UntilSpaceNeeded",
        UntilWatched => "UntilWatched",
        UntilDate => "UntilDate",
    }
}

string_enum! {
    pub enum RecordingStatus {
        New => "New",
        InProgress => "InProgress",
        Completed => "Completed",
        Cancelled => "Cancelled",
        ConflictedOk => "ConflictedOk",
        ConflictedNotOk => "ConflictedNotOk",
        Error => "Error",
    }
}

string_enum! {
    pub enum DayPattern {
        Daily => "Daily",
        Weekdays => "Weekdays",
        Weekends => "Weekends",
    }
}

string_enum! {
    pub enum ItemSortBy {
        Default => "Default",
        AiredEpisodeOrder => "AiredEpisodeOrder",
        Album => "Album",
        AlbumArtist => "AlbumArtist",
        Artist => "Artist",
        DateCreated => "DateCreated",
        OfficialRating => "OfficialRating",
        DatePlayed => "DatePlayed",
        PremiereDate => "PremiereDate",
        StartDate => "StartDate",
        SortName => "SortName",
        Name => "Name",
        Random => "Random",
        Runtime => "Runtime",
        CommunityRating => "CommunityRating",
        ProductionYear => "ProductionYear",
        PlayCount => "PlayCount",
        CriticRating => "CriticRating",
        IsFolder => "IsFolder",
        IsUnplayed => "IsUnplayed",
        IsPlayed => "IsPlayed",
        SeriesSortName => "SeriesSortName",
        VideoBitRate => "VideoBitRate",
        AirTime => "AirTime",
        Studio => "Studio",
        IsFavoriteOrLiked => "IsFavoriteOrLiked",
        DateLastContentAdded => "DateLastContentAdded",
        SeriesDatePlayed => "SeriesDatePlayed",
        ParentIndexNumber => "ParentIndexNumber",
        IndexNumber => "IndexNumber",
        SimilarityScore => "SimilarityScore",
        SearchScore => "SearchScore",
    }
}

string_enum! {
    pub enum SortOrder {
        Ascending => "Ascending",
        Descending => "Descending",
    }
}

string_enum! {
    /// Optional item fields a query can ask the server to populate.
    pub enum ItemFields {
        AirTime => "AirTime",
        CanDelete => "CanDelete",
        CanDownload => "CanDownload",
        ChannelInfo => "ChannelInfo",
        Chapters => "Chapters",
        Trickplay => "Trickplay",
        ChildCount => "ChildCount",
        CumulativeRunTimeTicks => "CumulativeRunTimeTicks",
        CustomRating => "CustomRating",
        DateCreated => "DateCreated",
        DateLastMediaAdded => "DateLastMediaAdded",
        DisplayPreferencesId => "DisplayPreferencesId",
        Etag => "Etag",
        ExternalUrls => "ExternalUrls",
        Genres => "Genres",
        HomePageUrl => "HomePageUrl",
        ItemCounts => "ItemCounts",
        MediaSourceCount => "MediaSourceCount",
        MediaSources => "MediaSources",
        OriginalTitle => "OriginalTitle",
        Overview => "Overview",
        ParentId => "ParentId",
        Path => "Path",
        People => "People",
        PlayAccess => "PlayAccess",
        ProductionLocations => "ProductionLocations",
        ProviderIds => "ProviderIds",
        PrimaryImageAspectRatio => "PrimaryImageAspectRatio",
        RecursiveItemCount => "RecursiveItemCount",
        Settings => "Settings",
        ScreenshotImageTags => "ScreenshotImageTags",
        SeriesPrimaryImage => "SeriesPrimaryImage",
        SeriesStudio => "SeriesStudio",
        SortName => "SortName",
        SpecialEpisodeNumbers => "SpecialEpisodeNumbers",
        Studios => "Studios",
        Taglines => "Taglines",
        Tags => "Tags",
        RemoteTrailers => "RemoteTrailers",
        MediaStreams => "MediaStreams",
        SeasonUserData => "SeasonUserData",
        ServiceName => "ServiceName",
        ThemeSongIds => "ThemeSongIds",
        ThemeVideoIds => "ThemeVideoIds",
        ExternalEtag => "ExternalEtag",
        PresentationUniqueKey => "PresentationUniqueKey",
        InheritedParentalRatingValue => "InheritedParentalRatingValue",
        ExternalSeriesId => "ExternalSeriesId",
        SeriesPresentationUniqueKey => "SeriesPresentationUniqueKey",
        DateLastRefreshed => "DateLastRefreshed",
        DateLastSaved => "DateLastSaved",
        RefreshState => "RefreshState",
        ChannelImage => "ChannelImage",
        EnableMediaSourceDisplay => "EnableMediaSourceDisplay",
        Width => "Width",
        Height => "Height",
        ExtraIds => "ExtraIds",
        LocalTrailerCount => "LocalTrailerCount",
        IsHd => "IsHD",
        SpecialFeatureCount => "SpecialFeatureCount",
    }
}

string_enum! {
    /// Remote-control commands a session may support.
    pub enum GeneralCommandType {
        MoveUp => "MoveUp",
        MoveDown => "MoveDown",
        MoveLeft => "MoveLeft",
        MoveRight => "MoveRight",
        PageUp => "PageUp",
        PageDown => "PageDown",
        PreviousLetter => "PreviousLetter",
        NextLetter => "NextLetter",
        ToggleOsd => "ToggleOsd",
        ToggleContextMenu => "ToggleContextMenu",
        Select => "Select",
        Back => "Back",
        TakeScreenshot => "TakeScreenshot",
        SendKey => "SendKey",
        SendString => "SendString",
        GoHome => "GoHome",
        GoToSettings => "GoToSettings",
        VolumeUp => "VolumeUp",
        VolumeDown => "VolumeDown",
        Mute => "Mute",
        Unmute => "Unmute",
        ToggleMute => "ToggleMute",
        SetVolume => "SetVolume",
        SetAudioStreamIndex => "SetAudioStreamIndex",
        SetSubtitleStreamIndex => "SetSubtitleStreamIndex",
        ToggleFullscreen => "ToggleFullscreen",
        DisplayContent => "DisplayContent",
        GoToSearch => "GoToSearch",
        DisplayMessage => "DisplayMessage",
        SetRepeatMode => "SetRepeatMode",
        ChannelUp => "ChannelUp",
        ChannelDown => "ChannelDown",
        Guide => "Guide",
        ToggleStats => "ToggleStats",
        PlayMediaSource => "PlayMediaSource",
        PlayTrailers => "PlayTrailers",
        SetShuffleQueue => "SetShuffleQueue",
        PlayState => "PlayState",
        PlayNext => "PlayNext",
        ToggleOsdMenu => "ToggleOsdMenu",
        Play => "Play",
        SetMaxStreamingBitrate => "SetMaxStreamingBitrate",
        SetPlaybackOrder => "SetPlaybackOrder",
    }
}

string_enum! {
    pub enum DlnaProfileType {
        Audio => "Audio",
        Video => "Video",
        Photo => "Photo",
        Subtitle => "Subtitle",
        Lyric => "Lyric",
    }
}

string_enum! {
    pub enum TranscodeSeekInfo {
        Auto => "Auto",
        Bytes => "Bytes",
    }
}

string_enum! {
    pub enum EncodingContext {
        Streaming => "Streaming",
        Static => "Static",
    }
}

string_enum! {
    pub enum ProfileConditionType {
        Equals => "Equals",
        NotEquals => "NotEquals",
        LessThanEqual => "LessThanEqual",
        GreaterThanEqual => "GreaterThanEqual",
        EqualsAny => "EqualsAny",
    }
}

string_enum! {
    pub enum ProfileConditionValue {
        AudioChannels => "AudioChannels",
        AudioBitrate => "AudioBitrate",
        AudioProfile => "AudioProfile",
        Width => "Width",
        Height => "Height",
        Has64BitOffsets => "Has64BitOffsets",
        PacketLength => "PacketLength",
        VideoBitDepth => "VideoBitDepth",
        VideoBitrate => "VideoBitrate",
        VideoFramerate => "VideoFramerate",
        VideoLevel => "VideoLevel",
        VideoProfile => "VideoProfile",
        VideoTimestamp => "VideoTimestamp",
        IsAnamorphic => "IsAnamorphic",
        RefFrames => "RefFrames",
        NumAudioStreams => "NumAudioStreams",
        NumVideoStreams => "NumVideoStreams",
        IsSecondaryAudio => "IsSecondaryAudio",
        VideoCodecTag => "VideoCodecTag",
        IsAvc => "IsAvc",
        IsInterlaced => "IsInterlaced",
        AudioSampleRate => "AudioSampleRate",
        AudioBitDepth => "AudioBitDepth",
        VideoRangeType => "VideoRangeType",
        NumStreams => "NumStreams",
    }
}

string_enum! {
    pub enum CodecType {
        Video => "Video",
        VideoAudio => "VideoAudio",
        Audio => "Audio",
    }
}

string_enum! {
    /// Why the server decided to transcode instead of direct playing.
    pub enum TranscodeReason {
        ContainerNotSupported => "ContainerNotSupported",
        VideoCodecNotSupported => "VideoCodecNotSupported",
        AudioCodecNotSupported => "AudioCodecNotSupported",
        SubtitleCodecNotSupported => "SubtitleCodecNotSupported",
        AudioIsExternal => "AudioIsExternal",
        SecondaryAudioNotSupported => "SecondaryAudioNotSupported",
        VideoProfileNotSupported => "VideoProfileNotSupported",
        VideoLevelNotSupported => "VideoLevelNotSupported",
        VideoResolutionNotSupported => "VideoResolutionNotSupported",
        VideoBitDepthNotSupported => "VideoBitDepthNotSupported",
        VideoFramerateNotSupported => "VideoFramerateNotSupported",
        RefFramesNotSupported => "RefFramesNotSupported",
        AnamorphicVideoNotSupported => "AnamorphicVideoNotSupported",
        InterlacedVideoNotSupported => "InterlacedVideoNotSupported",
        AudioChannelsNotSupported => "AudioChannelsNotSupported",
        AudioProfileNotSupported => "AudioProfileNotSupported",
        AudioSampleRateNotSupported => "AudioSampleRateNotSupported",
        AudioBitDepthNotSupported => "AudioBitDepthNotSupported",
        ContainerBitrateExceedsLimit => "ContainerBitrateExceedsLimit",
        VideoBitrateNotSupported => "VideoBitrateNotSupported",
        AudioBitrateNotSupported => "AudioBitrateNotSupported",
        UnknownVideoStreamInfo => "UnknownVideoStreamInfo",
        UnknownAudioStreamInfo => "UnknownAudioStreamInfo",
        DirectPlayError => "DirectPlayError",
        VideoRangeTypeNotSupported => "VideoRangeTypeNotSupported",
    }
}

string_enum! {
    pub enum PlaystateCommand {
        Stop => "Stop",
        Pause => "Pause",
        Unpause => "Unpause",
        NextTrack => "NextTrack",
        PreviousTrack => "PreviousTrack",
        Seek => "Seek",
        Rewind => "Rewind",
        FastForward => "FastForward",
        PlayPause => "PlayPause",
    }
}

string_enum! {
    pub enum PlayCommand {
        PlayNow => "PlayNow",
        PlayNext => "PlayNext",
        PlayLast => "PlayLast",
        PlayInstantMix => "PlayInstantMix",
        PlayShuffle => "PlayShuffle",
    }
}

string_enum! {
    /// Value of `MessageType` on websocket messages.
    pub enum SessionMessageType {
        ForceKeepAlive => "ForceKeepAlive",
        GeneralCommand => "GeneralCommand",
        UserDataChanged => "UserDataChanged",
        Sessions => "Sessions",
        Play => "Play",
        SyncPlayCommand => "SyncPlayCommand",
        SyncPlayGroupUpdate => "SyncPlayGroupUpdate",
        Playstate => "Playstate",
        RestartRequired => "RestartRequired",
        ServerShuttingDown => "ServerShuttingDown",
        ServerRestarting => "ServerRestarting",
        LibraryChanged => "LibraryChanged",
        UserDeleted => "UserDeleted",
        UserUpdated => "UserUpdated",
        SeriesTimerCreated => "SeriesTimerCreated",
        TimerCreated => "TimerCreated",
        SeriesTimerCancelled => "SeriesTimerCancelled",
        TimerCancelled => "TimerCancelled",
        RefreshProgress => "RefreshProgress",
        ScheduledTaskEnded => "ScheduledTaskEnded",
        PackageInstallationCancelled => "PackageInstallationCancelled",
        PackageInstallationFailed => "PackageInstallationFailed",
        PackageInstallationCompleted => "PackageInstallationCompleted",
        PackageInstalling => "PackageInstalling",
        PackageUninstalled => "PackageUninstalled",
        ActivityLogEntry => "ActivityLogEntry",
        ScheduledTasksInfo => "ScheduledTasksInfo",
        ActivityLogEntryStart => "ActivityLogEntryStart",
        ActivityLogEntryStop => "ActivityLogEntryStop",
        SessionsStart => "SessionsStart",
        SessionsStop => "SessionsStop",
        ScheduledTasksInfoStart => "ScheduledTasksInfoStart",
        ScheduledTasksInfoStop => "ScheduledTasksInfoStop",
        KeepAlive => "KeepAlive",
    }
}

string_enum! {
    /// Stereo downmix filter applied to multichannel audio.
    pub enum DownMixStereoAlgorithms {
        None => "None",
        Dave750 => "Dave750",
        NightmodeDialogue => "NightmodeDialogue",
        Rfc7845 => "Rfc7845",
        Ac4 => "Ac4",
    }
}

string_enum! {
    pub enum HardwareAccelerationType {
        None => "none",
        Amf => "amf",
        Qsv => "qsv",
        Nvenc => "nvenc",
        V4l2m2m => "v4l2m2m",
        Vaapi => "vaapi",
        VideoToolbox => "videotoolbox",
        Rkmpp => "rkmpp",
    }
}

string_enum! {
    pub enum TonemappingAlgorithm {
        None => "none",
        Clip => "clip",
        Linear => "linear",
        Gamma => "gamma",
        Reinhard => "reinhard",
        Hable => "hable",
        Mobius => "mobius",
        Bt2390 => "bt2390",
    }
}

string_enum! {
    pub enum TonemappingMode {
        Auto => "auto",
        Max => "max",
        Rgb => "rgb",
        Lum => "lum",
        Itp => "itp",
    }
}

string_enum! {
    pub enum TonemappingRange {
        Auto => "auto",
        Tv => "tv",
        Pc => "pc",
    }
}

string_enum! {
    /// x264/x265 speed preset.
    pub enum EncoderPreset {
        Auto => "auto",
        Placebo => "placebo",
        Veryslow => "veryslow",
        Slower => "slower",
        Slow => "slow",
        Medium => "medium",
        Fast => "fast",
        Faster => "faster",
        Veryfast => "veryfast",
        Superfast => "superfast",
        Ultrafast => "ultrafast",
    }
}

string_enum! {
    pub enum DeinterlaceMethod {
        Yadif => "yadif",
        Bwdif => "bwdif",
    }
}

string_enum! {
    /// Which embedded subtitle streams a library exposes.
    pub enum EmbeddedSubtitleOptions {
        AllowAll => "AllowAll",
        AllowText => "AllowText",
        AllowImage => "AllowImage",
        AllowNone => "AllowNone",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irregular_spellings_are_preserved() {
        assert_eq!(CollectionType::TvShows.as_str(), "tvshows");
        assert_eq!(MediaStreamProtocol::Hls.as_str(), "hls");
        assert_eq!(ChannelType::Tv.as_str(), "TV");
        assert_eq!(VideoRangeType::DoviWithHdr10.as_str(), "DOVIWithHDR10");
        assert_eq!(ItemFields::IsHd.as_str(), "IsHD");
        assert_eq!(HardwareAccelerationType::VideoToolbox.as_str(), "videotoolbox");
        assert_eq!(EmbeddedSubtitleOptions::AllowText.as_str(), "AllowText");
    }

    #[test]
    fn every_variant_parses_back_from_its_spelling() {
        for kind in BaseItemKind::ALL {
            assert_eq!(kind.as_str().parse::<BaseItemKind>().ok(), Some(*kind));
        }
        for message in SessionMessageType::ALL {
            assert_eq!(
                message.to_string().parse::<SessionMessageType>().ok(),
                Some(*message)
            );
        }
    }

    #[test]
    fn unknown_wire_value_is_a_decode_error() {
        let result = serde_json::from_str::<MediaType>("\"Hologram\"");
        assert!(result.is_err());
        assert!("Hologram".parse::<MediaType>().is_err());
    }
}
