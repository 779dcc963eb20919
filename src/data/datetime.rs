use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z", "%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%d %H:%M:%S%z"];

const NAIVE_FORMATS: &[&str] = &[
	"%Y-%m-%d %H:%M:%S%.f",
	"%Y-%m-%dT%H:%M:%S%.f",
	"%Y-%m-%d %H:%M:%S",
	"%Y-%m-%dT%H:%M:%S",
	"%Y-%m-%d %H:%M",
	"%Y-%m-%dT%H:%M",
];

/// Look up an IANA timezone name such as `Pacific/Auckland`.
pub fn parse_timezone(name: &str) -> Option<Tz> {
	name.parse::<Tz>().ok()
}

/// Parse a timestamp string.
///
/// Input that carries its own offset (RFC 3339, `+hhmm` suffixes, `@unix`)
/// keeps it; zone-less input is interpreted in `timezone`, or UTC. `now`
/// yields the current instant in `timezone`.
pub fn parse_timestamp(text: &str, timezone: Option<Tz>) -> Option<DateTime<FixedOffset>> {
	let text = text.trim();
	if text.is_empty() {
		return None;
	}

	let zone = timezone.unwrap_or(Tz::UTC);

	if text.eq_ignore_ascii_case("now") {
		return Some(Utc::now().with_timezone(&zone).fixed_offset());
	}

	if let Some(seconds) = text.strip_prefix('@') {
		let seconds = seconds.parse::<i64>().ok()?;
		return DateTime::from_timestamp(seconds, 0).map(|instant| instant.fixed_offset());
	}

	if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
		return Some(parsed);
	}
	for format in OFFSET_FORMATS {
		if let Ok(parsed) = DateTime::parse_from_str(text, format) {
			return Some(parsed);
		}
	}

	let naive = NAIVE_FORMATS
		.iter()
		.find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
		.or_else(|| NaiveDate::parse_from_str(text, "%Y-%m-%d").ok().and_then(|date| date.and_hms_opt(0, 0, 0)))?;

	let local = zone
		.from_local_datetime(&naive)
		.earliest()
		.unwrap_or_else(|| zone.from_utc_datetime(&naive));
	Some(local.fixed_offset())
}
