//! Messages exchanged over the `/socket` websocket.
//!
//! Every message carries a `MessageType` discriminant. Each concrete message
//! types that field with a single-variant tag enum, so a payload of the wrong
//! kind fails to decode and a missing key falls back to the right constant.
//! [`OutboundWebSocketMessage`] and [`InboundWebSocketMessage`] dispatch on
//! the discriminant and keep anything they do not model as raw JSON.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::enums::SessionMessageType;
use crate::error::{ModelError, Result};
use crate::item::UserItemDataDto;
use crate::session::{GeneralCommand, PlayRequest, PlaystateRequest, SessionInfoDto};
use crate::jellyfin_dto;
use crate::schema::FieldHash;

macro_rules! message_tag {
    ($(#[$meta:meta])* $name:ident, $variant:ident => $wire:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
        )]
        pub enum $name {
            #[default]
            #[serde(rename = $wire)]
            $variant,
        }

        impl $name {
            pub const fn as_str(&self) -> &'static str {
                $wire
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($wire)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(value: &str) -> Result<Self> {
                if value == $wire {
                    Ok($name::$variant)
                } else {
                    Err(ModelError::UnknownVariant {
                        kind: stringify!($name),
                        value: value.to_string(),
                    })
                }
            }
        }

        // `null` decodes like a missing key; any other value must match.
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                match Option::<String>::deserialize(deserializer)? {
                    None => Ok($name::$variant),
                    Some(value) if value == $wire => Ok($name::$variant),
                    Some(other) => Err(<D::Error as de::Error>::invalid_value(
                        de::Unexpected::Str(&other),
                        &$wire,
                    )),
                }
            }
        }

        impl FieldHash for $name {
            fn hash_field<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(self, state);
            }

            fn eq_field(&self, other: &Self) -> bool {
                self == other
            }
        }

        impl From<$name> for SessionMessageType {
            fn from(_: $name) -> Self {
                SessionMessageType::$variant
            }
        }
    };
}

message_tag!(
    /// Discriminant of keep-alive messages in both directions.
    KeepAliveType, KeepAlive => "KeepAlive"
);
message_tag!(ForceKeepAliveType, ForceKeepAlive => "ForceKeepAlive");
message_tag!(SessionsType, Sessions => "Sessions");
message_tag!(PlayType, Play => "Play");
message_tag!(PlaystateType, Playstate => "Playstate");
message_tag!(GeneralCommandMessageType, GeneralCommand => "GeneralCommand");
message_tag!(LibraryChangedType, LibraryChanged => "LibraryChanged");
message_tag!(UserDataChangedType, UserDataChanged => "UserDataChanged");
message_tag!(ServerRestartingType, ServerRestarting => "ServerRestarting");
message_tag!(ServerShuttingDownType, ServerShuttingDown => "ServerShuttingDown");
message_tag!(RestartRequiredType, RestartRequired => "RestartRequired");
message_tag!(SessionsStartType, SessionsStart => "SessionsStart");
message_tag!(SessionsStopType, SessionsStop => "SessionsStop");

/// Ties a message struct to its discriminant.
macro_rules! message_kind {
    ($($message:ident => $kind:ident),* $(,)?) => {
        $(
            impl $message {
                pub const MESSAGE_TYPE: SessionMessageType = SessionMessageType::$kind;
            }
        )*
    };
}

jellyfin_dto! {
    /// Server keep-alive acknowledgement.
    pub struct OutboundKeepAliveMessage {
        "MessageId" message_id: Uuid,
    }
    tag "MessageType" message_type: KeepAliveType
}

jellyfin_dto! {
    /// Sent on connect; `Data` is the server's keep-alive timeout in seconds.
    pub struct ForceKeepAliveMessage {
        "Data" data: i32,
        "MessageId" message_id: Uuid,
    }
    tag "MessageType" message_type: ForceKeepAliveType
}

impl ForceKeepAliveMessage {
    /// How often a client should send keep-alives: half the server timeout.
    pub fn keep_alive_interval(&self) -> Option<Duration> {
        let seconds = u64::try_from(self.data?).ok()?;
        Some(Duration::from_millis(seconds * 500))
    }
}

jellyfin_dto! {
    pub struct SessionsMessage {
        "Data" data: Vec<SessionInfoDto>,
        "MessageId" message_id: Uuid,
    }
    tag "MessageType" message_type: SessionsType
}

jellyfin_dto! {
    pub struct PlayMessage {
        "Data" data: PlayRequest,
        "MessageId" message_id: Uuid,
    }
    tag "MessageType" message_type: PlayType
}

jellyfin_dto! {
    pub struct PlaystateMessage {
        "Data" data: PlaystateRequest,
        "MessageId" message_id: Uuid,
    }
    tag "MessageType" message_type: PlaystateType
}

jellyfin_dto! {
    pub struct GeneralCommandMessage {
        "Data" data: GeneralCommand,
        "MessageId" message_id: Uuid,
    }
    tag "MessageType" message_type: GeneralCommandMessageType
}

jellyfin_dto! {
    /// Library paths and items touched by a scan.
    pub struct LibraryUpdateInfo {
        "FoldersAddedTo" folders_added_to: Vec<String>,
        "FoldersRemovedFrom" folders_removed_from: Vec<String>,
        "ItemsAdded" items_added: Vec<String>,
        "ItemsRemoved" items_removed: Vec<String>,
        "ItemsUpdated" items_updated: Vec<String>,
        "CollectionFolders" collection_folders: Vec<String>,
        "IsEmpty" is_empty: bool,
    }
}

jellyfin_dto! {
    pub struct LibraryChangedMessage {
        "Data" data: LibraryUpdateInfo,
        "MessageId" message_id: Uuid,
    }
    tag "MessageType" message_type: LibraryChangedType
}

jellyfin_dto! {
    pub struct UserDataChangeInfo {
        "UserId" user_id: Uuid,
        "UserDataList" user_data_list: Vec<UserItemDataDto>,
    }
}

jellyfin_dto! {
    pub struct UserDataChangedMessage {
        "Data" data: UserDataChangeInfo,
        "MessageId" message_id: Uuid,
    }
    tag "MessageType" message_type: UserDataChangedType
}

jellyfin_dto! {
    pub struct ServerRestartingMessage {
        "MessageId" message_id: Uuid,
    }
    tag "MessageType" message_type: ServerRestartingType
}

jellyfin_dto! {
    pub struct ServerShuttingDownMessage {
        "MessageId" message_id: Uuid,
    }
    tag "MessageType" message_type: ServerShuttingDownType
}

jellyfin_dto! {
    pub struct RestartRequiredMessage {
        "MessageId" message_id: Uuid,
    }
    tag "MessageType" message_type: RestartRequiredType
}

jellyfin_dto! {
    /// Client keep-alive.
    pub struct InboundKeepAliveMessage {
    }
    tag "MessageType" message_type: KeepAliveType
}

jellyfin_dto! {
    /// Subscribes to the `Sessions` feed; `Data` is
    /// `"<initialDelayMs>,<intervalMs>"`.
    pub struct SessionsStartMessage {
        "Data" data: String,
    }
    tag "MessageType" message_type: SessionsStartType
}

impl SessionsStartMessage {
    pub fn with_schedule(self, initial_delay: Duration, interval: Duration) -> Self {
        self.with_data(format!(
            "{},{}",
            initial_delay.as_millis(),
            interval.as_millis()
        ))
    }

    /// Parses `Data` back into `(initial delay, interval)`.
    pub fn schedule(&self) -> Option<(Duration, Duration)> {
        let (delay, interval) = self.data.as_deref()?.split_once(',')?;
        let delay = delay.trim().parse().ok().map(Duration::from_millis)?;
        let interval = interval.trim().parse().ok().map(Duration::from_millis)?;
        Some((delay, interval))
    }
}

jellyfin_dto! {
    pub struct SessionsStopMessage {
    }
    tag "MessageType" message_type: SessionsStopType
}

message_kind! {
    OutboundKeepAliveMessage => KeepAlive,
    ForceKeepAliveMessage => ForceKeepAlive,
    SessionsMessage => Sessions,
    PlayMessage => Play,
    PlaystateMessage => Playstate,
    GeneralCommandMessage => GeneralCommand,
    LibraryChangedMessage => LibraryChanged,
    UserDataChangedMessage => UserDataChanged,
    ServerRestartingMessage => ServerRestarting,
    ServerShuttingDownMessage => ServerShuttingDown,
    RestartRequiredMessage => RestartRequired,
    InboundKeepAliveMessage => KeepAlive,
    SessionsStartMessage => SessionsStart,
    SessionsStopMessage => SessionsStop,
}

fn message_type_of(value: &Value) -> Result<&str> {
    value
        .get("MessageType")
        .and_then(Value::as_str)
        .ok_or_else(|| ModelError::InvalidMessage("missing MessageType".to_string()))
}

/// Any message the server sends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutboundWebSocketMessage {
    KeepAlive(OutboundKeepAliveMessage),
    ForceKeepAlive(ForceKeepAliveMessage),
    Sessions(SessionsMessage),
    Play(PlayMessage),
    Playstate(PlaystateMessage),
    GeneralCommand(GeneralCommandMessage),
    LibraryChanged(LibraryChangedMessage),
    UserDataChanged(UserDataChangedMessage),
    ServerRestarting(ServerRestartingMessage),
    ServerShuttingDown(ServerShuttingDownMessage),
    RestartRequired(RestartRequiredMessage),
    /// A message type this crate does not model, kept verbatim.
    Unknown(Value),
}

impl OutboundWebSocketMessage {
    pub fn from_value(value: Value) -> Result<Self> {
        let kind = message_type_of(&value)?;
        let message = match kind.parse::<SessionMessageType>() {
            Ok(SessionMessageType::KeepAlive) => Self::KeepAlive(serde_json::from_value(value)?),
            Ok(SessionMessageType::ForceKeepAlive) => {
                Self::ForceKeepAlive(serde_json::from_value(value)?)
            }
            Ok(SessionMessageType::Sessions) => Self::Sessions(serde_json::from_value(value)?),
            Ok(SessionMessageType::Play) => Self::Play(serde_json::from_value(value)?),
            Ok(SessionMessageType::Playstate) => Self::Playstate(serde_json::from_value(value)?),
            Ok(SessionMessageType::GeneralCommand) => {
                Self::GeneralCommand(serde_json::from_value(value)?)
            }
            Ok(SessionMessageType::LibraryChanged) => {
                Self::LibraryChanged(serde_json::from_value(value)?)
            }
            Ok(SessionMessageType::UserDataChanged) => {
                Self::UserDataChanged(serde_json::from_value(value)?)
            }
            Ok(SessionMessageType::ServerRestarting) => {
                Self::ServerRestarting(serde_json::from_value(value)?)
            }
            Ok(SessionMessageType::ServerShuttingDown) => {
                Self::ServerShuttingDown(serde_json::from_value(value)?)
            }
            Ok(SessionMessageType::RestartRequired) => {
                Self::RestartRequired(serde_json::from_value(value)?)
            }
            _ => {
                debug!(message_type = kind, "keeping unmodelled outbound message as raw json");
                Self::Unknown(value)
            }
        };
        Ok(message)
    }

    /// Discriminant of the wrapped message. `None` only for unknown
    /// messages whose type string is not a known [`SessionMessageType`].
    pub fn message_type(&self) -> Option<SessionMessageType> {
        match self {
            Self::KeepAlive(_) => Some(OutboundKeepAliveMessage::MESSAGE_TYPE),
            Self::ForceKeepAlive(_) => Some(ForceKeepAliveMessage::MESSAGE_TYPE),
            Self::Sessions(_) => Some(SessionsMessage::MESSAGE_TYPE),
            Self::Play(_) => Some(PlayMessage::MESSAGE_TYPE),
            Self::Playstate(_) => Some(PlaystateMessage::MESSAGE_TYPE),
            Self::GeneralCommand(_) => Some(GeneralCommandMessage::MESSAGE_TYPE),
            Self::LibraryChanged(_) => Some(LibraryChangedMessage::MESSAGE_TYPE),
            Self::UserDataChanged(_) => Some(UserDataChangedMessage::MESSAGE_TYPE),
            Self::ServerRestarting(_) => Some(ServerRestartingMessage::MESSAGE_TYPE),
            Self::ServerShuttingDown(_) => Some(ServerShuttingDownMessage::MESSAGE_TYPE),
            Self::RestartRequired(_) => Some(RestartRequiredMessage::MESSAGE_TYPE),
            Self::Unknown(value) => message_type_of(value).ok()?.parse().ok(),
        }
    }

    pub fn message_id(&self) -> Option<Uuid> {
        match self {
            Self::KeepAlive(message) => message.message_id,
            Self::ForceKeepAlive(message) => message.message_id,
            Self::Sessions(message) => message.message_id,
            Self::Play(message) => message.message_id,
            Self::Playstate(message) => message.message_id,
            Self::GeneralCommand(message) => message.message_id,
            Self::LibraryChanged(message) => message.message_id,
            Self::UserDataChanged(message) => message.message_id,
            Self::ServerRestarting(message) => message.message_id,
            Self::ServerShuttingDown(message) => message.message_id,
            Self::RestartRequired(message) => message.message_id,
            Self::Unknown(value) => value
                .get("MessageId")
                .and_then(Value::as_str)
                .and_then(|id| id.parse().ok()),
        }
    }
}

impl<'de> Deserialize<'de> for OutboundWebSocketMessage {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// Any message a client sends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InboundWebSocketMessage {
    KeepAlive(InboundKeepAliveMessage),
    SessionsStart(SessionsStartMessage),
    SessionsStop(SessionsStopMessage),
    Unknown(Value),
}

impl InboundWebSocketMessage {
    pub fn keep_alive() -> Self {
        Self::KeepAlive(InboundKeepAliveMessage::new())
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let kind = message_type_of(&value)?;
        let message = match kind.parse::<SessionMessageType>() {
            Ok(SessionMessageType::KeepAlive) => Self::KeepAlive(serde_json::from_value(value)?),
            Ok(SessionMessageType::SessionsStart) => {
                Self::SessionsStart(serde_json::from_value(value)?)
            }
            Ok(SessionMessageType::SessionsStop) => {
                Self::SessionsStop(serde_json::from_value(value)?)
            }
            _ => {
                debug!(message_type = kind, "keeping unmodelled inbound message as raw json");
                Self::Unknown(value)
            }
        };
        Ok(message)
    }

    pub fn message_type(&self) -> Option<SessionMessageType> {
        match self {
            Self::KeepAlive(_) => Some(InboundKeepAliveMessage::MESSAGE_TYPE),
            Self::SessionsStart(_) => Some(SessionsStartMessage::MESSAGE_TYPE),
            Self::SessionsStop(_) => Some(SessionsStopMessage::MESSAGE_TYPE),
            Self::Unknown(value) => message_type_of(value).ok()?.parse().ok(),
        }
    }
}

impl<'de> Deserialize<'de> for InboundWebSocketMessage {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keep_alive_serialises_its_discriminant() {
        let id = Uuid::nil();
        let message = OutboundKeepAliveMessage::new().with_message_id(id);
        let json = serde_json::to_value(&message).expect("encode");
        assert_eq!(
            json,
            json!({"MessageId": "00000000-0000-0000-0000-000000000000", "MessageType": "KeepAlive"})
        );
    }

    #[test]
    fn missing_discriminant_falls_back_to_the_constant() {
        let message: OutboundKeepAliveMessage =
            serde_json::from_value(json!({})).expect("decode");
        assert_eq!(message.message_type, KeepAliveType::KeepAlive);
    }

    #[test]
    fn null_discriminant_still_encodes_the_constant() {
        let message: OutboundKeepAliveMessage = serde_json::from_value(json!({
            "MessageId": "00000000-0000-0000-0000-000000000001",
            "MessageType": null
        }))
        .expect("decode");
        let json = serde_json::to_value(&message).expect("encode");
        assert_eq!(json["MessageType"], "KeepAlive");

        let envelope: OutboundWebSocketMessage =
            serde_json::from_value(json).expect("envelope decodes its own output");
        assert_eq!(envelope, OutboundWebSocketMessage::KeepAlive(message));
    }

    #[test]
    fn bare_messages_always_carry_their_discriminant() {
        assert_eq!(
            serde_json::to_string(&SessionsStopMessage::new()).expect("encode"),
            r#"{"MessageType":"SessionsStop"}"#
        );
        assert_eq!(
            serde_json::to_string(&OutboundKeepAliveMessage::default()).expect("encode"),
            r#"{"MessageType":"KeepAlive"}"#
        );
    }

    #[test]
    fn wrong_discriminant_is_rejected() {
        let result =
            serde_json::from_value::<OutboundKeepAliveMessage>(json!({"MessageType": "Sessions"}));
        assert!(result.is_err());
    }

    #[test]
    fn force_keep_alive_interval_is_half_the_timeout() {
        let message = ForceKeepAliveMessage::new().with_data(60);
        assert_eq!(message.keep_alive_interval(), Some(Duration::from_secs(30)));
        let odd = ForceKeepAliveMessage::new().with_data(15);
        assert_eq!(odd.keep_alive_interval(), Some(Duration::from_millis(7_500)));
        assert_eq!(ForceKeepAliveMessage::new().keep_alive_interval(), None);
        assert_eq!(
            ForceKeepAliveMessage::new().with_data(-4).keep_alive_interval(),
            None
        );
    }

    #[test]
    fn envelope_dispatches_on_message_type() {
        let raw = json!({
            "MessageType": "ForceKeepAlive",
            "MessageId": "5d1cf3b2-9a4e-4f7e-8f0b-8d6c0d1b2a3c",
            "Data": 60
        });
        let message: OutboundWebSocketMessage =
            serde_json::from_value(raw.clone()).expect("decode");
        assert!(matches!(
            &message,
            OutboundWebSocketMessage::ForceKeepAlive(inner) if inner.data == Some(60)
        ));
        assert_eq!(message.message_type(), Some(SessionMessageType::ForceKeepAlive));
        assert_eq!(serde_json::to_value(&message).expect("encode"), raw);
    }

    #[test]
    fn unmodelled_messages_are_kept_raw() {
        let raw = json!({"MessageType": "ScheduledTasksInfo", "Data": []});
        let message: OutboundWebSocketMessage =
            serde_json::from_value(raw.clone()).expect("decode");
        assert_eq!(message, OutboundWebSocketMessage::Unknown(raw));
        assert_eq!(message.message_type(), Some(SessionMessageType::ScheduledTasksInfo));
        assert_eq!(message.message_id(), None);
    }

    #[test]
    fn envelope_without_discriminant_fails() {
        assert!(serde_json::from_value::<OutboundWebSocketMessage>(json!({"Data": 1})).is_err());
    }

    #[test]
    fn sessions_start_schedule_round_trips() {
        let message = SessionsStartMessage::new()
            .with_schedule(Duration::ZERO, Duration::from_millis(1_500));
        assert_eq!(message.data.as_deref(), Some("0,1500"));
        assert_eq!(
            message.schedule(),
            Some((Duration::ZERO, Duration::from_millis(1_500)))
        );

        let inbound: InboundWebSocketMessage =
            serde_json::from_value(serde_json::to_value(&message).expect("encode"))
                .expect("decode");
        assert_eq!(inbound, InboundWebSocketMessage::SessionsStart(message));
    }

    #[test]
    fn inbound_keep_alive_is_bare() {
        let json = serde_json::to_string(&InboundWebSocketMessage::keep_alive()).expect("encode");
        assert_eq!(json, r#"{"MessageType":"KeepAlive"}"#);
    }
}
