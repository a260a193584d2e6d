use jellyfin_model::media::TranscodingProfile;
use jellyfin_model::prelude::*;
use serde_json::{Value, json};

#[test]
fn empty_object_decodes_to_new() {
    let item: BaseItemDto = serde_json::from_str("{}").expect("decode");
    assert_eq!(item, BaseItemDto::new());

    let profile: TranscodingProfile =
        serde_json::from_str("{}").expect("decode");
    assert_eq!(profile, TranscodingProfile::new());

    let info: SystemInfo = serde_json::from_str("{}").expect("decode");
    assert_eq!(info, SystemInfo::new());

    let library: LibraryOptions = serde_json::from_str("{}").expect("decode");
    assert_eq!(library, LibraryOptions::new());

    let encoding: EncodingOptions = serde_json::from_str("{}").expect("decode");
    assert_eq!(encoding, EncodingOptions::new());
}

#[test]
fn library_options_defaults_are_applied() {
    let options = LibraryOptions::new();
    assert_eq!(options.path_infos, Some(Vec::new()));
    assert_eq!(options.type_options, Some(Vec::new()));
    assert_eq!(options.subtitle_fetcher_order, Some(Vec::new()));
    assert_eq!(options.save_lyrics_with_media, Some(false));
    assert_eq!(options.save_trickplay_with_media, Some(false));
    assert_eq!(options.prefer_nonstandard_artists_tag, Some(false));
    assert_eq!(options.use_custom_tag_delimiters, Some(false));
    assert_eq!(options.enabled, None);
    assert_eq!(options.allow_embedded_subtitles, None);

    let json = serde_json::to_value(&options).expect("encode");
    assert_eq!(json.as_object().map(|members| members.len()), Some(15));
    assert_eq!(json["SaveLyricsWithMedia"], json!(false));
}

#[test]
fn encoding_options_have_no_defaults() {
    assert_eq!(
        serde_json::to_string(&EncodingOptions::new()).expect("encode"),
        "{}"
    );
    let options: EncodingOptions = serde_json::from_value(json!({
        "DownMixStereoAlgorithm": "Dave750",
        "TonemappingRange": "tv",
        "DeinterlaceMethod": "bwdif"
    }))
    .expect("decode");
    assert_eq!(
        options.down_mix_stereo_algorithm,
        Some(DownMixStereoAlgorithms::Dave750)
    );
    assert_eq!(options.tonemapping_range, Some(TonemappingRange::Tv));
    assert_eq!(options.deinterlace_method, Some(DeinterlaceMethod::Bwdif));
}

#[test]
fn fresh_item_only_emits_its_defaults() {
    let json = serde_json::to_value(BaseItemDto::new()).expect("encode");
    assert_eq!(json, json!({"MediaType": "Unknown"}));
}

#[test]
fn transcoding_profile_defaults_are_applied() {
    let profile = TranscodingProfile::new();
    assert_eq!(profile.estimate_content_length, Some(false));
    assert_eq!(profile.transcode_seek_info, Some(TranscodeSeekInfo::Auto));
    assert_eq!(profile.context, Some(EncodingContext::Streaming));
    assert_eq!(profile.min_segments, Some(0));
    assert_eq!(profile.enable_audio_vbr_encoding, Some(true));
    assert_eq!(profile.conditions, Some(Vec::new()));
    assert_eq!(profile.container, None);
}

#[test]
fn system_info_defaults_are_applied() {
    let info = SystemInfo::new();
    assert_eq!(info.can_self_restart, Some(true));
    assert_eq!(info.can_launch_web_browser, Some(false));
    assert_eq!(info.has_update_available, Some(false));
    assert_eq!(info.encoder_location.as_deref(), Some("System"));
    assert_eq!(info.system_architecture.as_deref(), Some("X64"));
}

#[test]
fn explicit_null_clears_a_default() {
    let item: BaseItemDto =
        serde_json::from_str(r#"{"MediaType":null}"#).expect("decode");
    assert_eq!(item.media_type, None);
    assert_eq!(serde_json::to_value(&item).expect("encode"), json!({}));
}

#[test]
fn absent_key_keeps_the_default_while_present_key_wins() {
    let stream: MediaStream =
        serde_json::from_str(r#"{"VideoRange":"HDR"}"#).expect("decode");
    assert_eq!(stream.video_range, Some(VideoRange::Hdr));
    assert_eq!(stream.video_range_type, Some(VideoRangeType::Unknown));
    assert_eq!(stream.audio_spatial_format, Some(AudioSpatialFormat::None));
}

#[test]
fn unset_fields_are_omitted_not_null() {
    let person = BaseItemPerson::new().with_name("Ana de Armas");
    let json = serde_json::to_value(&person).expect("encode");
    let members = json.as_object().expect("object");
    assert!(members.values().all(|value| !value.is_null()));
    assert_eq!(members.len(), 2);
    assert_eq!(json["Type"], Value::from("Unknown"));
}

#[test]
fn clearing_a_field_removes_it_from_output() {
    let item = BaseItemDto::new()
        .with_name("Heat")
        .clear_name()
        .clear_media_type();
    assert_eq!(serde_json::to_string(&item).expect("encode"), "{}");
}
