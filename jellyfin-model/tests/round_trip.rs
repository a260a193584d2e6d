use jellyfin_model::prelude::*;
use jellyfin_model::uuid::Uuid;
use serde_json::Value;

const EPISODE: &str = include_str!("fixtures/episode.json");
const SESSIONS: &str = include_str!("fixtures/sessions.json");

fn reparse<T: serde::Serialize>(value: &T) -> Value {
    let text = serde_json::to_string(value).expect("encode");
    serde_json::from_str(&text).expect("reparse")
}

#[test]
fn episode_fixture_survives_decode_and_encode() {
    let original: Value = serde_json::from_str(EPISODE).expect("fixture json");
    let item: BaseItemDto = serde_json::from_str(EPISODE).expect("decode");

    assert_eq!(item.kind, Some(BaseItemKind::Episode));
    assert_eq!(item.media_type, Some(MediaType::Video));
    assert_eq!(item.community_rating, Some(8.4));
    assert_eq!(item.provider_id("Imdb"), Some("tt0959621"));
    assert_eq!(item.provider_id("TvRage"), None);
    assert_eq!(item.image_tag(ImageType::Primary), Some("5f4e3d2c1b0a"));

    assert_eq!(reparse(&item), original);
}

#[test]
fn episode_fixture_nested_models_decode() {
    let item: BaseItemDto = serde_json::from_str(EPISODE).expect("decode");

    let people = item.people.as_deref().expect("people");
    assert_eq!(people.len(), 2);
    assert_eq!(people[0].kind, Some(PersonKind::Actor));
    assert_eq!(people[1].role, None);

    let source = &item.media_sources.as_deref().expect("sources")[0];
    let audio = source.default_audio_stream().expect("default audio");
    assert_eq!(audio.codec.as_deref(), Some("ac3"));
    assert_eq!(
        source.streams_of(MediaStreamType::Video).count(),
        1
    );

    let tiles = &item.trickplay.as_ref().expect("trickplay")
        ["3f1c5e2a8b7d4c6e9a0b1d2e3f4a5b6c"]["320"];
    assert_eq!(tiles.thumbnail_count, Some(348));
    assert_eq!(
        item.run_time(),
        Some(std::time::Duration::from_secs(3_480))
    );
}

#[test]
fn sessions_message_fixture_round_trips() {
    let original: Value = serde_json::from_str(SESSIONS).expect("fixture json");
    let message: OutboundWebSocketMessage =
        serde_json::from_str(SESSIONS).expect("decode");

    let OutboundWebSocketMessage::Sessions(sessions) = &message else {
        panic!("expected a sessions message, got {message:?}");
    };
    let session = &sessions.data.as_deref().expect("data")[0];
    assert!(session.is_playing());
    assert!(session.supports_command(GeneralCommandType::DisplayMessage));
    assert_eq!(
        session.play_state.as_ref().and_then(|state| state.repeat_mode),
        Some(RepeatMode::RepeatNone)
    );

    assert_eq!(reparse(&message), original);
}

#[test]
fn null_map_values_are_kept() {
    let item: BaseItemDto =
        serde_json::from_str(r#"{"Name":"x","ProviderIds":{"Tvdb":null,"Tmdb":"1"}}"#)
            .expect("decode");

    let ids = item.provider_ids.as_ref().expect("provider ids");
    assert_eq!(ids.get("Tvdb"), Some(&None));
    assert_eq!(item.provider_id("Tmdb"), Some("1"));
    assert_eq!(
        serde_json::to_string(&item).expect("encode"),
        r#"{"Name":"x","ProviderIds":{"Tmdb":"1","Tvdb":null},"MediaType":"Unknown"}"#
    );
    assert_eq!(
        item.clear_media_type().to_url_query_string().expect("query"),
        "Name=x&ProviderIds[Tmdb]=1"
    );
}

#[test]
fn simple_uuid_form_decodes_to_the_same_id() {
    let hyphenated: BaseItemDto = serde_json::from_str(
        r#"{"Id":"3f1c5e2a-8b7d-4c6e-9a0b-1d2e3f4a5b6c"}"#,
    )
    .expect("decode hyphenated");
    let simple: BaseItemDto =
        serde_json::from_str(r#"{"Id":"3f1c5e2a8b7d4c6e9a0b1d2e3f4a5b6c"}"#)
            .expect("decode simple");

    assert_eq!(hyphenated.id, simple.id);
    let id: Uuid = simple.id.expect("id");
    assert_eq!(id.to_string(), "3f1c5e2a-8b7d-4c6e-9a0b-1d2e3f4a5b6c");
}

#[test]
fn unknown_members_are_ignored() {
    let item: BaseItemDto = serde_json::from_str(
        r#"{"Name":"Heat","SomethingNewInTenEleven":{"x":1}}"#,
    )
    .expect("decode");
    assert_eq!(item.name.as_deref(), Some("Heat"));
    assert!(!reparse(&item).as_object().expect("object").contains_key(
        "SomethingNewInTenEleven"
    ));
}

#[test]
fn unknown_enum_spelling_is_a_decode_error() {
    let result =
        serde_json::from_str::<BaseItemDto>(r#"{"Type":"Hologram"}"#);
    assert!(result.is_err());
}
