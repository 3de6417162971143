//! Timestamp parsing - the two-branch fallback parse.
//!
//! A candidate is first tried as a date/time string, then as a base-10
//! epoch-millisecond integer. The integer branch accepts a sign, so
//! pre-1970 instants resolve like any other.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::features::timestamp::dtos::{InvalidDateDto, TimestampDto, TimestampResult};
use crate::shared::constants::{INVALID_DATE_MESSAGE, ISO_DATE_FORMAT, UTC_DATE_FORMAT};
use crate::shared::validation::{DATE_REGEX, EPOCH_MILLIS_REGEX};

/// Current time as a resolved timestamp
pub fn current() -> TimestampDto {
    from_datetime(Utc::now())
}

/// Resolve an optional path parameter: absent or empty input means "now",
/// anything else goes through the fallback parse.
pub fn resolve(input: Option<&str>) -> TimestampResult {
    match input {
        None => TimestampResult::Resolved(current()),
        Some(raw) if raw.is_empty() => TimestampResult::Resolved(current()),
        Some(raw) => parse(raw),
    }
}

fn parse(raw: &str) -> TimestampResult {
    if let Some(dt) = parse_date_string(raw) {
        return TimestampResult::Resolved(from_datetime(dt));
    }

    if EPOCH_MILLIS_REGEX.is_match(raw) {
        if let Some(dto) = raw.parse::<i64>().ok().and_then(from_millis) {
            return TimestampResult::Resolved(dto);
        }
    }

    TimestampResult::Invalid(InvalidDateDto {
        error: INVALID_DATE_MESSAGE.to_string(),
    })
}

/// Accepted date/time shapes: RFC 3339, naive datetime, ISO calendar date
/// (interpreted as midnight UTC). Pure digit strings never match, which is
/// what routes them to the epoch branch.
fn parse_date_string(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(ndt.and_utc());
    }

    if DATE_REGEX.is_match(raw) {
        if let Ok(date) = NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT) {
            return date.and_hms_opt(0, 0, 0).map(|ndt| ndt.and_utc());
        }
    }

    None
}

fn from_datetime(dt: DateTime<Utc>) -> TimestampDto {
    TimestampDto {
        unix: dt.timestamp_millis(),
        utc: dt.format(UTC_DATE_FORMAT).to_string(),
    }
}

/// Epoch milliseconds outside chrono's representable range resolve to None
/// and fall through to "Invalid Date".
fn from_millis(millis: i64) -> Option<TimestampDto> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(from_datetime)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_resolved(result: TimestampResult) -> TimestampDto {
        match result {
            TimestampResult::Resolved(dto) => dto,
            TimestampResult::Invalid(_) => panic!("expected a resolved timestamp"),
        }
    }

    #[test]
    fn test_iso_date_resolves_to_midnight_utc() {
        let dto = expect_resolved(resolve(Some("2015-12-25")));
        assert_eq!(dto.unix, 1451001600000);
        assert_eq!(dto.utc, "Fri, 25 Dec 2015 00:00:00 GMT");
    }

    #[test]
    fn test_epoch_millis_string_resolves_to_same_instant() {
        let dto = expect_resolved(resolve(Some("1451001600000")));
        assert_eq!(dto.unix, 1451001600000);
        assert_eq!(dto.utc, "Fri, 25 Dec 2015 00:00:00 GMT");
    }

    #[test]
    fn test_negative_epoch_is_accepted() {
        let dto = expect_resolved(resolve(Some("-86400000")));
        assert_eq!(dto.unix, -86400000);
        assert_eq!(dto.utc, "Wed, 31 Dec 1969 00:00:00 GMT");
    }

    #[test]
    fn test_rfc3339_with_offset_converts_to_utc() {
        let dto = expect_resolved(resolve(Some("2015-12-25T07:00:00+07:00")));
        assert_eq!(dto.unix, 1451001600000);
        assert_eq!(dto.utc, "Fri, 25 Dec 2015 00:00:00 GMT");
    }

    #[test]
    fn test_naive_datetime_is_read_as_utc() {
        let dto = expect_resolved(resolve(Some("2015-12-25T00:00:00")));
        assert_eq!(dto.unix, 1451001600000);
    }

    #[test]
    fn test_unparseable_input_yields_invalid_date() {
        for raw in ["not-a-date", "2015-13-45", "145100.5", "12,345"] {
            match resolve(Some(raw)) {
                TimestampResult::Invalid(dto) => assert_eq!(dto.error, "Invalid Date"),
                TimestampResult::Resolved(dto) => {
                    panic!("'{}' unexpectedly resolved to {:?}", raw, dto)
                }
            }
        }
    }

    #[test]
    fn test_absent_and_empty_input_mean_now() {
        let before = Utc::now().timestamp_millis();
        let absent = expect_resolved(resolve(None));
        let empty = expect_resolved(resolve(Some("")));
        let after = Utc::now().timestamp_millis();

        assert!(before <= absent.unix && absent.unix <= after);
        assert!(before <= empty.unix && empty.unix <= after);
    }

    #[test]
    fn test_out_of_range_epoch_is_invalid() {
        let result = resolve(Some(&i64::MAX.to_string()));
        assert!(matches!(result, TimestampResult::Invalid(_)));
    }
}
