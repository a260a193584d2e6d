use std::time::Duration;

use jellyfin_model::enums::{BaseItemKind, MediaType};
use jellyfin_model::item::BaseItemDto;
use jellyfin_model::live_tv::{SearchHint, TimerInfoDto};
use jellyfin_model::ticks::ticks_to_duration;
use uuid::Uuid;

// Uniform read view over the models that stand in for a library item
pub trait ItemLike {
    /// Id of the library item this value refers to.
    fn item_id(&self) -> Option<Uuid>;

    fn display_name(&self) -> Option<&str>;

    fn kind(&self) -> Option<BaseItemKind>;

    fn run_time(&self) -> Option<Duration>;

    /// Falls back to [`MediaType::Unknown`] when the server left it out.
    fn media_type(&self) -> MediaType;
}

impl ItemLike for BaseItemDto {
    fn item_id(&self) -> Option<Uuid> {
        self.id
    }

    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn kind(&self) -> Option<BaseItemKind> {
        self.kind
    }

    fn run_time(&self) -> Option<Duration> {
        BaseItemDto::run_time(self)
    }

    fn media_type(&self) -> MediaType {
        self.media_type.unwrap_or(MediaType::Unknown)
    }
}

impl ItemLike for SearchHint {
    fn item_id(&self) -> Option<Uuid> {
        self.item_id.or(self.id)
    }

    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn kind(&self) -> Option<BaseItemKind> {
        self.kind
    }

    fn run_time(&self) -> Option<Duration> {
        self.run_time_ticks.and_then(ticks_to_duration)
    }

    fn media_type(&self) -> MediaType {
        self.media_type.unwrap_or(MediaType::Unknown)
    }
}

/// A timer stands in for the program it records.
impl ItemLike for TimerInfoDto {
    fn item_id(&self) -> Option<Uuid> {
        self.program_info.as_ref().and_then(|program| program.id)
    }

    fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or_else(|| {
            self.program_info
                .as_ref()
                .and_then(|program| program.name.as_deref())
        })
    }

    fn kind(&self) -> Option<BaseItemKind> {
        self.program_info.as_ref().and_then(|program| program.kind)
    }

    fn run_time(&self) -> Option<Duration> {
        if let Some(ticks) = self.run_time_ticks {
            return ticks_to_duration(ticks);
        }
        let span = self.end_date? - self.start_date?;
        span.to_std().ok()
    }

    fn media_type(&self) -> MediaType {
        self.program_info
            .as_ref()
            .and_then(|program| program.media_type)
            .filter(|media_type| *media_type != MediaType::Unknown)
            .unwrap_or(MediaType::Video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jellyfin_model::chrono::{TimeZone, Utc};

    fn describe(item: &impl ItemLike) -> String {
        format!(
            "{} [{}]",
            item.display_name().unwrap_or("?"),
            item.media_type()
        )
    }

    #[test]
    fn base_item_reports_its_own_fields() {
        let id = Uuid::from_u128(7);
        let item = BaseItemDto::new()
            .with_id(id)
            .with_name("Heat")
            .with_kind(BaseItemKind::Movie)
            .with_media_type(MediaType::Video)
            .with_run_time_ticks(102_000_000_000_i64);
        assert_eq!(item.item_id(), Some(id));
        assert_eq!(ItemLike::run_time(&item), Some(Duration::from_secs(10_200)));
        assert_eq!(describe(&item), "Heat [Video]");
    }

    #[test]
    fn search_hint_prefers_item_id() {
        let hint = SearchHint::new()
            .with_id(Uuid::from_u128(1))
            .with_item_id(Uuid::from_u128(2))
            .with_name("Heat");
        assert_eq!(hint.item_id(), Some(Uuid::from_u128(2)));
        assert_eq!(describe(&hint), "Heat [Unknown]");

        let legacy = SearchHint::new().with_id(Uuid::from_u128(1));
        assert_eq!(legacy.item_id(), Some(Uuid::from_u128(1)));
    }

    #[test]
    fn timer_falls_back_to_program_and_schedule() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 20, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 1, 21, 30, 0).unwrap();
        let timer = TimerInfoDto::new()
            .with_start_date(start)
            .with_end_date(end)
            .with_program_info(
                BaseItemDto::new()
                    .with_id(Uuid::from_u128(9))
                    .with_name("Evening News")
                    .with_kind(BaseItemKind::Program),
            );

        assert_eq!(timer.item_id(), Some(Uuid::from_u128(9)));
        assert_eq!(timer.display_name(), Some("Evening News"));
        assert_eq!(timer.kind(), Some(BaseItemKind::Program));
        assert_eq!(timer.run_time(), Some(Duration::from_secs(5_400)));
        assert_eq!(timer.media_type(), MediaType::Video);
    }
}
