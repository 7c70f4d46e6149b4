//! Construction pipeline: decode, resolve rule-set collisions, validate.

use std::fmt::Write as _;

use chrono::{DateTime, Local};
use log::debug;

use crate::error::ProxyError;
use crate::models::ProxyRecord;
use crate::parser::ProxyInput;
use crate::settings::{default_rename_timestamp_format, Settings};
use crate::store::RecordStore;
use crate::validator::validate_in;

/// Build a validated record from `input`.
///
/// Uses the local clock and the configured rename format; see
/// [`construct_at`].
pub fn construct<S>(input: &ProxyInput, store: &S) -> Result<ProxyRecord, ProxyError>
where
    S: RecordStore + ?Sized,
{
    let settings = Settings::current();
    construct_at(input, store, &Local::now(), &settings.rename_timestamp_format)
}

/// Build a validated record from `input` with an explicit clock and format.
///
/// Either a fully valid record comes back or the first error does; nothing
/// is stored here.
pub fn construct_at<S>(
    input: &ProxyInput,
    store: &S,
    now: &DateTime<Local>,
    format: &str,
) -> Result<ProxyRecord, ProxyError>
where
    S: RecordStore + ?Sized,
{
    let mut record = input.decode()?;
    record.name = resolve_rule_set_collision(
        record.name,
        |name| store.rule_set_name_exists(name),
        now,
        format,
    );
    validate_in(&record, store)?;
    Ok(record)
}

/// Rename policy for proxy names that clash with a rule-set name.
///
/// A clashing name is replaced by `now` rendered with `format`; no error is
/// raised. Non-clashing names are returned untouched. A format chrono
/// cannot render falls back to the default one.
pub fn resolve_rule_set_collision<F>(
    name: String,
    rule_set_name_exists: F,
    now: &DateTime<Local>,
    format: &str,
) -> String
where
    F: Fn(&str) -> bool,
{
    if !rule_set_name_exists(&name) {
        return name;
    }
    let mut renamed = String::new();
    if write!(renamed, "{}", now.format(format)).is_err() {
        renamed.clear();
        let _ = write!(renamed, "{}", now.format(&default_rename_timestamp_format()));
    }
    debug!("Proxy name '{}' taken by a rule set, using '{}'", name, renamed);
    renamed
}
