use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use jellyfin_contracts::message_like::MessageLike;
use jellyfin_model::configuration::{
    EncodingOptions, LibraryOptions, NetworkConfiguration, ServerConfiguration,
    SystemInfo, UserConfiguration, UserDto, UserPolicy,
};
use jellyfin_model::enums::SessionMessageType;
use jellyfin_model::item::{BaseItemDto, BaseItemDtoQueryResult};
use jellyfin_model::live_tv::{
    GetProgramsDto, LiveTvOptions, SearchHintResult, SeriesTimerInfoDto,
    TimerInfoDto,
};
use jellyfin_model::media::{
    DeviceProfile, MediaSourceInfo, MediaStream, PlaybackInfoDto,
    PlaybackInfoResponse, PlaybackProgressInfo, PlaybackStartInfo,
    PlaybackStopInfo,
};
use jellyfin_model::query::to_query_string;
use jellyfin_model::session::{
    GeneralCommand, PlayRequest, PlaystateRequest, SessionInfoDto,
};
use jellyfin_model::websocket::{
    InboundWebSocketMessage, OutboundWebSocketMessage,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Result of decoding a payload and encoding it again.
#[derive(Debug)]
pub struct CheckReport {
    pub members: usize,
    /// Top-level members the model does not carry; they vanish on re-encode.
    pub dropped: Vec<String>,
    pub message_type: Option<SessionMessageType>,
}

macro_rules! schema_args {
    ($($(#[$meta:meta])* $variant:ident => $ty:ty),* $(,)?) => {
        /// Payload shapes the CLI knows how to decode.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
        pub enum SchemaArg {
            $($(#[$meta])* $variant,)*
        }

        impl SchemaArg {
            pub fn query(self, text: &str, prefix: Option<&str>) -> Result<String> {
                match self {
                    $(Self::$variant => query_as::<$ty>(text, prefix),)*
                }
            }

            pub fn check(self, text: &str) -> Result<CheckReport> {
                let mut report = match self {
                    $(Self::$variant => check_as::<$ty>(text)?,)*
                };
                report.message_type = self.message_type(text)?;
                Ok(report)
            }
        }
    };
}

schema_args! {
    BaseItem => BaseItemDto,
    BaseItemQueryResult => BaseItemDtoQueryResult,
    MediaSource => MediaSourceInfo,
    MediaStream => MediaStream,
    PlaybackInfo => PlaybackInfoDto,
    PlaybackInfoResponse => PlaybackInfoResponse,
    PlaybackStart => PlaybackStartInfo,
    PlaybackProgress => PlaybackProgressInfo,
    PlaybackStop => PlaybackStopInfo,
    DeviceProfile => DeviceProfile,
    Session => SessionInfoDto,
    GeneralCommand => GeneralCommand,
    PlayRequest => PlayRequest,
    PlaystateRequest => PlaystateRequest,
    ServerConfiguration => ServerConfiguration,
    NetworkConfiguration => NetworkConfiguration,
    EncodingOptions => EncodingOptions,
    LibraryOptions => LibraryOptions,
    SystemInfo => SystemInfo,
    User => UserDto,
    UserConfiguration => UserConfiguration,
    UserPolicy => UserPolicy,
    Timer => TimerInfoDto,
    SeriesTimer => SeriesTimerInfoDto,
    GetPrograms => GetProgramsDto,
    LiveTvOptions => LiveTvOptions,
    SearchHints => SearchHintResult,
    /// Any server-to-client websocket message.
    OutboundMessage => OutboundWebSocketMessage,
    /// Any client-to-server websocket message.
    InboundMessage => InboundWebSocketMessage,
}

impl SchemaArg {
    /// Websocket discriminant of the payload, for the message variants.
    pub fn message_type(self, text: &str) -> Result<Option<SessionMessageType>> {
        let kind = match self {
            Self::OutboundMessage => {
                MessageLike::message_type(&decode::<OutboundWebSocketMessage>(text)?)
            }
            Self::InboundMessage => {
                MessageLike::message_type(&decode::<InboundWebSocketMessage>(text)?)
            }
            _ => None,
        };
        Ok(kind)
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).with_context(|| {
        format!("payload does not decode as {}", std::any::type_name::<T>())
    })
}

fn query_as<T>(text: &str, prefix: Option<&str>) -> Result<String>
where
    T: Serialize + DeserializeOwned,
{
    let value: T = decode(text)?;
    Ok(to_query_string(&value, prefix)?)
}

fn check_as<T>(text: &str) -> Result<CheckReport>
where
    T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let original: Value = serde_json::from_str(text).context("payload is not JSON")?;
    let decoded: T = decode(text)?;
    let encoded = serde_json::to_string(&decoded)?;
    let again: T = serde_json::from_str(&encoded)
        .context("re-encoded payload no longer decodes")?;
    if again != decoded {
        debug!(?decoded, ?again, "round trip mismatch");
        bail!("decoded value changed after a round trip");
    }

    let reencoded: Value = serde_json::from_str(&encoded)?;
    let (members, dropped) = match (&original, &reencoded) {
        (Value::Object(before), Value::Object(after)) => (
            before.len(),
            before
                .keys()
                .filter(|key| !after.contains_key(*key))
                .cloned()
                .collect(),
        ),
        _ => (0, Vec::new()),
    };

    Ok(CheckReport {
        members,
        dropped,
        message_type: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_unknown_members() {
        let report = SchemaArg::BaseItem
            .check(r#"{"Name":"Heat","Bogus":1}"#)
            .expect("check");
        assert_eq!(report.members, 2);
        assert_eq!(report.dropped, ["Bogus"]);
        assert_eq!(report.message_type, None);
    }

    #[test]
    fn check_names_websocket_messages() {
        let report = SchemaArg::OutboundMessage
            .check(r#"{"MessageType":"ForceKeepAlive","Data":60}"#)
            .expect("check");
        assert_eq!(report.message_type, Some(SessionMessageType::ForceKeepAlive));
        assert!(report.dropped.is_empty());
    }

    #[test]
    fn query_rejects_wrong_shapes() {
        assert!(SchemaArg::Session.query("[1, 2]", None).is_err());
        assert_eq!(
            SchemaArg::GeneralCommand
                .query(r#"{"Name":"Mute"}"#, Some("cmd"))
                .expect("query"),
            "cmd[Name]=Mute"
        );
    }
}
