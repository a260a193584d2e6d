use jellyfin_model::ModelResult;
use jellyfin_model::query;
use jellyfin_model::schema::Schema;
use serde_json::Value;
use tracing::debug;

/// JSON encoding and decoding for any generated model.
pub trait JsonCodec: Schema {
    fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn to_json_pretty(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn from_json(text: &str) -> ModelResult<Self> {
        logged(serde_json::from_str(text))
    }

    fn from_json_slice(bytes: &[u8]) -> ModelResult<Self> {
        logged(serde_json::from_slice(bytes))
    }

    fn from_json_value(value: Value) -> ModelResult<Self> {
        logged(serde_json::from_value(value))
    }
}

fn logged<T: Schema>(result: serde_json::Result<T>) -> ModelResult<T> {
    result.map_err(|err| {
        debug!(schema = T::NAME, error = %err, "json decode failed");
        err.into()
    })
}

impl<T: Schema> JsonCodec for T {}

/// Query-string encoding for any generated model.
pub trait QueryEncode: Schema {
    /// Form style: `Name=a&Tags=x&Tags=y`.
    fn to_query(&self) -> ModelResult<String> {
        query::to_query_string(self, None)
    }

    /// Deep-object style nested under `prefix`: `p[Name]=a&p[Tags][0]=x`.
    fn to_query_with_prefix(&self, prefix: &str) -> ModelResult<String> {
        query::to_query_string(self, Some(prefix))
    }
}

impl<T: Schema> QueryEncode for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    use jellyfin_model::item::BaseItemDto;
    use jellyfin_model::{ModelError, SessionInfoDto};

    #[test]
    fn json_codec_round_trips_through_text_and_value() {
        let session = SessionInfoDto::new()
            .with_id("abc")
            .with_user_name("jesse");
        let text = session.to_json().expect("encode");
        assert_eq!(SessionInfoDto::from_json(&text).expect("decode"), session);

        let value: Value = serde_json::from_str(&text).expect("value");
        assert_eq!(
            SessionInfoDto::from_json_value(value).expect("decode value"),
            session
        );
        assert_eq!(
            SessionInfoDto::from_json_slice(text.as_bytes()).expect("decode"),
            session
        );
    }

    #[test]
    fn pretty_output_is_multiline() {
        let item = BaseItemDto::new().with_name("Heat");
        let pretty = item.to_json_pretty().expect("encode");
        assert!(pretty.contains('\n'));
        assert_eq!(BaseItemDto::from_json(&pretty).expect("decode"), item);
    }

    #[test]
    fn decode_errors_surface_as_model_errors() {
        let err = BaseItemDto::from_json("{\"Name\": 3}").expect_err("must fail");
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn decode_failure_log(decode: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, decode);
        let bytes = captured.0.lock().expect("lock").clone();
        String::from_utf8(bytes).expect("utf8 log")
    }

    #[test]
    fn every_decode_path_logs_failures() {
        let from_value = decode_failure_log(|| {
            let _ = BaseItemDto::from_json_value(serde_json::json!({"Name": 3}));
        });
        assert!(from_value.contains("json decode failed"), "{from_value}");
        assert!(from_value.contains("BaseItemDto"), "{from_value}");

        let from_slice = decode_failure_log(|| {
            let _ = SessionInfoDto::from_json_slice(b"[");
        });
        assert!(from_slice.contains("SessionInfoDto"), "{from_slice}");

        let quiet = decode_failure_log(|| {
            let _ = BaseItemDto::from_json("{}");
        });
        assert!(quiet.is_empty(), "{quiet}");
    }

    #[test]
    fn query_encode_matches_inherent_helpers() {
        let item = BaseItemDto::new().with_name("Heat").clear_media_type();
        assert_eq!(item.to_query().expect("encode"), "Name=Heat");
        assert_eq!(
            item.to_query_with_prefix("item").expect("encode"),
            item.to_url_query_string_with_prefix("item").expect("encode")
        );
    }
}
