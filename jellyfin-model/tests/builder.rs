use jellyfin_model::media::{DirectPlayProfile, TranscodingProfile};
use jellyfin_model::prelude::*;
use jellyfin_model::uuid::Uuid;

#[test]
fn builder_starts_from_defaults() {
    let item = BaseItemDto::builder().name("Arrival").build();
    assert_eq!(item.name.as_deref(), Some("Arrival"));
    assert_eq!(item.media_type, Some(MediaType::Unknown));
}

#[test]
fn builder_matches_fluent_setters() {
    let id = Uuid::from_u128(0x42);
    let built = BaseItemDto::builder()
        .id(id)
        .name("Arrival")
        .kind(BaseItemKind::Movie)
        .production_year(2016)
        .build();
    let fluent = BaseItemDto::new()
        .with_id(id)
        .with_name("Arrival")
        .with_kind(BaseItemKind::Movie)
        .with_production_year(2016);
    assert_eq!(built, fluent);
}

#[test]
fn to_builder_leaves_the_source_untouched() {
    let base = TranscodingProfile::new()
        .with_container("ts")
        .with_kind(DlnaProfileType::Video);
    let tweaked = base.to_builder().container("mp4").build();

    assert_eq!(base.container.as_deref(), Some("ts"));
    assert_eq!(tweaked.container.as_deref(), Some("mp4"));
    assert_eq!(tweaked.kind, base.kind);
    assert_eq!(tweaked.enable_audio_vbr_encoding, Some(true));
}

#[test]
fn generic_code_can_build_through_the_schema_trait() {
    fn blank<T: Schema>() -> T {
        T::builder().build()
    }

    assert_eq!(blank::<DeviceProfile>(), DeviceProfile::new());
    assert_eq!(<BaseItemDto as Schema>::NAME, "BaseItemDto");
}

#[test]
fn nested_collections_build_up() {
    let profile = DeviceProfile::builder()
        .name("Living Room TV")
        .max_streaming_bitrate(120_000_000)
        .direct_play_profiles(vec![
            DirectPlayProfile::new()
                .with_container("mkv,mp4")
                .with_kind(DlnaProfileType::Video),
        ])
        .build();

    let profiles = profile.direct_play_profiles.as_deref().expect("profiles");
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].container.as_deref(), Some("mkv,mp4"));
}
