use crate::error::{
    BadDateTimeFormatterSnafu, InvalidLocaleSnafu, InvalidTimezoneSnafu, RollcallError,
    RollcallResult,
};
use icu::{
    calendar::preferences::CalendarAlgorithm,
    datetime::{
        DateTimeFormatter, DateTimeFormatterPreferences, fieldsets::YMD, options::Alignment,
        preferences::HourCycle,
    },
    locale::Locale,
    time::{TimeZoneInfo, ZonedDateTime, zone::models::AtTime},
};
use jiff::{
    Timestamp, Zoned,
    civil::{Date, DateTime},
    tz::TimeZone,
};
use jiff_icu::ConvertFrom;
use snafu::ResultExt;

#[derive(Debug, Clone)]
pub struct DateLocaleConfig {
    pub timezone: TimeZone,
    pub locale: Locale,
    dtf_prefs: DateTimeFormatterPreferences,
}

/// A short-date formatter built for one render pass.
pub struct ShortDates<'a> {
    timezone: &'a TimeZone,
    formatter: DateTimeFormatter<YMD>,
}

impl DateLocaleConfig {
    fn dtf_prefs_and_locale_from_strings(
        locale: String,
        hour_cycle: String,
        calendar_algorithm: String,
    ) -> RollcallResult<(Locale, DateTimeFormatterPreferences)> {
        let locale =
            Locale::try_from_str(&locale).context(InvalidLocaleSnafu { provided: locale })?;
        let hour_cycle = match hour_cycle.as_str() {
            "h23" => HourCycle::H23,
            "h11" => HourCycle::H11,
            "h12" => HourCycle::H12,
            _ => {
                return Err(RollcallError::InvalidHourCycle {
                    provided: hour_cycle,
                });
            }
        };
        let calendar_algorithm = match calendar_algorithm.as_str() {
            "gregorian" => CalendarAlgorithm::Iso8601,
            "buddhist" => CalendarAlgorithm::Buddhist,
            "chinese" => CalendarAlgorithm::Chinese,
            "japanese" => CalendarAlgorithm::Japanese,
            "hebrew" => CalendarAlgorithm::Hebrew,
            "dangi" => CalendarAlgorithm::Dangi,
            _ => {
                return Err(RollcallError::InvalidCalendarAlgorithm {
                    provided: calendar_algorithm,
                });
            }
        };

        let mut prefs = DateTimeFormatterPreferences::default();
        prefs.locale_preferences = (&locale).into();
        prefs.hour_cycle = Some(hour_cycle);
        prefs.calendar_algorithm = Some(calendar_algorithm);
        Ok((locale, prefs))
    }

    pub fn new(
        timezone: String,
        locale: String,
        hour_cycle: String,
        calendar_algorithm: String,
    ) -> RollcallResult<Self> {
        let timezone = TimeZone::get(&timezone).context(InvalidTimezoneSnafu { tz: timezone })?;

        let (locale, dtf_prefs) =
            Self::dtf_prefs_and_locale_from_strings(locale, hour_cycle, calendar_algorithm)?;

        let config = Self {
            timezone,
            locale,
            dtf_prefs,
        };
        config.short_dates()?; //locale must have date data
        Ok(config)
    }

    pub fn short_dates(&self) -> RollcallResult<ShortDates<'_>> {
        let formatter = DateTimeFormatter::try_new(self.dtf_prefs, {
            let mut fieldset = YMD::short();
            fieldset.alignment = Some(Alignment::Column);
            fieldset
        })
        .context(BadDateTimeFormatterSnafu)?;

        Ok(ShortDates {
            timezone: &self.timezone,
            formatter,
        })
    }
}

impl ShortDates<'_> {
    pub fn format(&self, zoned: &Zoned) -> String {
        let in_global_tz = zoned.with_time_zone(self.timezone.clone());
        let zdt = ZonedDateTime::<_, TimeZoneInfo<AtTime>>::convert_from(&in_global_tz);
        self.formatter.format(&zdt).to_string()
    }

    /// Accepts RFC 3339 timestamps, plus offset-less date-times and bare dates (read in the
    /// configured timezone). `None` for anything else, so callers can leave the cell empty.
    pub fn format_str(&self, raw: &str) -> Option<String> {
        let raw = raw.trim();
        let zoned = if let Ok(timestamp) = raw.parse::<Timestamp>() {
            timestamp.to_zoned(self.timezone.clone())
        } else if let Ok(datetime) = raw.parse::<DateTime>() {
            datetime.to_zoned(self.timezone.clone()).ok()?
        } else {
            raw.parse::<Date>()
                .ok()?
                .to_zoned(self.timezone.clone())
                .ok()?
        };
        Some(self.format(&zoned))
    }
}
