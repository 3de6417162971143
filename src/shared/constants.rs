/// Storage and query format for calendar dates (lexicographically sortable)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Human-readable date format used in exercise responses, e.g. "Fri Dec 25 2015"
pub const HUMAN_DATE_FORMAT: &str = "%a %b %d %Y";

/// UTC string format used by the timestamp service,
/// e.g. "Fri, 25 Dec 2015 00:00:00 GMT"
pub const UTC_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Lower bound for exercise log range queries when `from` is omitted
pub const EPOCH_START_DATE: &str = "1970-01-01";

/// Payload value returned for unparseable timestamp input
pub const INVALID_DATE_MESSAGE: &str = "Invalid Date";
