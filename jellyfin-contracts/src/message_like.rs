use jellyfin_model::enums::SessionMessageType;
use jellyfin_model::websocket::{
    ForceKeepAliveMessage, GeneralCommandMessage, InboundKeepAliveMessage,
    InboundWebSocketMessage, LibraryChangedMessage, OutboundKeepAliveMessage,
    OutboundWebSocketMessage, PlayMessage, PlaystateMessage,
    RestartRequiredMessage, ServerRestartingMessage, ServerShuttingDownMessage,
    SessionsMessage, SessionsStartMessage, SessionsStopMessage,
    UserDataChangedMessage,
};
use uuid::Uuid;

/// Common view over websocket messages and their envelopes.
pub trait MessageLike {
    /// `None` only for raw messages whose type this crate does not know.
    fn message_type(&self) -> Option<SessionMessageType>;

    /// Inbound messages never carry an id.
    fn message_id(&self) -> Option<Uuid>;
}

macro_rules! outbound_message_like {
    ($($message:ty),* $(,)?) => {
        $(
            impl MessageLike for $message {
                fn message_type(&self) -> Option<SessionMessageType> {
                    Some(<$message>::MESSAGE_TYPE)
                }

                fn message_id(&self) -> Option<Uuid> {
                    self.message_id
                }
            }
        )*
    };
}

macro_rules! inbound_message_like {
    ($($message:ty),* $(,)?) => {
        $(
            impl MessageLike for $message {
                fn message_type(&self) -> Option<SessionMessageType> {
                    Some(<$message>::MESSAGE_TYPE)
                }

                fn message_id(&self) -> Option<Uuid> {
                    None
                }
            }
        )*
    };
}

outbound_message_like!(
    OutboundKeepAliveMessage,
    ForceKeepAliveMessage,
    SessionsMessage,
    PlayMessage,
    PlaystateMessage,
    GeneralCommandMessage,
    LibraryChangedMessage,
    UserDataChangedMessage,
    ServerRestartingMessage,
    ServerShuttingDownMessage,
    RestartRequiredMessage,
);

inbound_message_like!(
    InboundKeepAliveMessage,
    SessionsStartMessage,
    SessionsStopMessage,
);

impl MessageLike for OutboundWebSocketMessage {
    fn message_type(&self) -> Option<SessionMessageType> {
        OutboundWebSocketMessage::message_type(self)
    }

    fn message_id(&self) -> Option<Uuid> {
        OutboundWebSocketMessage::message_id(self)
    }
}

impl MessageLike for InboundWebSocketMessage {
    fn message_type(&self) -> Option<SessionMessageType> {
        InboundWebSocketMessage::message_type(self)
    }

    fn message_id(&self) -> Option<Uuid> {
        None
    }
}
