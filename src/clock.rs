//! Pass-consistent clock for documentation templates.
//!
//! Every date shown on one generated page must read the same, even when the
//! template asks for "now" in several places, so the clock freezes at its
//! first reading.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Months, Utc};
use once_cell::sync::OnceCell;
use tera::{Function, Result as TeraResult, Value};

use crate::error::{StyleguideError, StyleguideResult};

/// A clock frozen at its first reading.
///
/// The instant is captured lazily on the first call to [`now`](Self::now) and
/// reused for every later call on the same instance (clones share the same
/// instant). Scoping is the owner's choice: construct one clock per render
/// pass for a per-pass timestamp, or share one across passes to reproduce the
/// process-lifetime freeze of older single-request-per-process deployments.
#[derive(Debug, Clone, Default)]
pub struct FrozenClock {
	instant: Arc<OnceCell<DateTime<Utc>>>,
}

impl FrozenClock {
	/// Creates a clock that will freeze at its first reading.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a clock frozen at a known instant, for deterministic output.
	pub fn fixed(instant: DateTime<Utc>) -> Self {
		let cell = OnceCell::new();
		let _ = cell.set(instant);
		Self {
			instant: Arc::new(cell),
		}
	}

	/// The frozen instant, captured now if this is the first reading.
	pub fn now(&self) -> DateTime<Utc> {
		*self.instant.get_or_init(Utc::now)
	}
}

/// Applies a relative modifier such as `"+1 day"` or `"-2 weeks +3 hours"`
/// to `base`, returning the shifted instant.
///
/// A modifier is one or more whitespace-separated clauses, each a signed
/// count followed by a unit (`sec`/`second`, `min`/`minute`, `hour`, `day`,
/// `week`, `fortnight`, `month`, `year`, singular or plural, any case).
/// Month and year clauses use calendar arithmetic, clamping to the end of
/// shorter months.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use styleguide_templates::apply_modifier;
///
/// let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
/// let shifted = apply_modifier(base, "+1 day").unwrap();
/// assert_eq!(shifted, Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap());
/// ```
pub fn apply_modifier(base: DateTime<Utc>, modifier: &str) -> StyleguideResult<DateTime<Utc>> {
	let invalid = || StyleguideError::InvalidModifier(modifier.to_string());

	let mut result = base;
	let mut tokens = modifier.split_whitespace();
	let mut seen_clause = false;
	while let Some(count) = tokens.next() {
		let count: i64 = count.parse().map_err(|_| invalid())?;
		let unit = tokens.next().ok_or_else(invalid)?;
		result = shift(result, count, unit, modifier)?;
		seen_clause = true;
	}

	if !seen_clause {
		return Err(invalid());
	}
	Ok(result)
}

fn shift(
	base: DateTime<Utc>,
	count: i64,
	unit: &str,
	modifier: &str,
) -> StyleguideResult<DateTime<Utc>> {
	let out_of_range = || StyleguideError::DatetimeOutOfRange(modifier.to_string());

	let unit = unit.to_ascii_lowercase();
	let delta = match unit.trim_end_matches('s') {
		"sec" | "second" => Duration::try_seconds(count),
		"min" | "minute" => Duration::try_minutes(count),
		"hour" => Duration::try_hours(count),
		"day" => Duration::try_days(count),
		"week" => Duration::try_weeks(count),
		"fortnight" => count.checked_mul(2).and_then(Duration::try_weeks),
		"month" => return shift_months(base, count).ok_or_else(out_of_range),
		"year" => {
			return count
				.checked_mul(12)
				.and_then(|months| shift_months(base, months))
				.ok_or_else(out_of_range);
		}
		_ => return Err(StyleguideError::InvalidModifier(modifier.to_string())),
	};

	let delta = delta.ok_or_else(out_of_range)?;
	base.checked_add_signed(delta).ok_or_else(out_of_range)
}

// Calendar-aware month arithmetic; Jan 31 plus one month clamps to the last
// day of February.
fn shift_months(base: DateTime<Utc>, count: i64) -> Option<DateTime<Utc>> {
	let months = u32::try_from(count.unsigned_abs()).ok().map(Months::new)?;
	if count >= 0 {
		base.checked_add_months(months)
	} else {
		base.checked_sub_months(months)
	}
}

/// Tera function behind `get_current_datetime`.
///
/// Returns the frozen instant as an RFC 3339 string; the optional `modify`
/// argument shifts a copy without touching the frozen base.
///
/// ```tera
/// {{ get_current_datetime() }}
/// {{ get_current_datetime(modify="+1 day") }}
/// ```
#[derive(Debug, Clone)]
pub struct CurrentDatetime {
	clock: FrozenClock,
}

impl CurrentDatetime {
	/// Creates the function reading from `clock`.
	pub fn new(clock: FrozenClock) -> Self {
		Self { clock }
	}
}

impl Function for CurrentDatetime {
	fn call(&self, args: &HashMap<String, Value>) -> TeraResult<Value> {
		let base = self.clock.now();
		let datetime = match args.get("modify").and_then(Value::as_str) {
			Some(modifier) if !modifier.trim().is_empty() => apply_modifier(base, modifier)
				.map_err(|e| tera::Error::chain("get_current_datetime", e))?,
			_ => base,
		};
		Ok(Value::String(datetime.to_rfc3339()))
	}
}
