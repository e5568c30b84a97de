//! The invite serializer.
//!
//! Produces one `VCALENDAR` with one `VEVENT` whose `DTSTART` and `DTEND`
//! are the chosen local wall-clock times converted to UTC.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use tracing::debug;

use crate::error::InviteError;
use crate::format::{CRLF, escape_text, fold_line, format_utc};
use crate::request::{InviteRequest, resolve_date};
use crate::uid::{format_uid, next_uid_millis};
use crate::wall_time::WallTime;

/// MIME type of the serialized content.
pub const MIME_TYPE: &str = "text/calendar";

/// Extension of suggested filenames.
pub const FILE_EXTENSION: &str = "ics";

/// Default product identifier.
pub const DEFAULT_PRODID: &str = "-//Mi Calendario 2025//ES";

/// Default right-hand side of generated UIDs.
pub const DEFAULT_UID_DOMAIN: &str = "mi-calendario";

/// Description used when the request carries none.
pub const DEFAULT_DESCRIPTION: &str = "Generado desde el Calendario 2025";

/// A serialized invite ready to be written or offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invite {
    /// CRLF-terminated iCalendar text.
    pub content: String,
    /// Title with whitespace runs replaced by `_`, plus `.ics`.
    pub suggested_filename: String,
    /// Unique identifier of the event.
    pub uid: String,
    /// Event start in UTC.
    pub start: DateTime<Utc>,
    /// Event end in UTC.
    pub end: DateTime<Utc>,
}

/// Builds invites with a fixed product identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteSerializer {
    prodid: String,
    uid_domain: String,
    default_description: String,
}

impl Default for InviteSerializer {
    fn default() -> Self {
        Self {
            prodid: DEFAULT_PRODID.to_string(),
            uid_domain: DEFAULT_UID_DOMAIN.to_string(),
            default_description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl InviteSerializer {
    /// Creates a serializer with the default identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `PRODID` value.
    pub fn with_prodid(mut self, prodid: impl Into<String>) -> Self {
        self.prodid = prodid.into();
        self
    }

    /// Sets the UID domain.
    pub fn with_uid_domain(mut self, domain: impl Into<String>) -> Self {
        self.uid_domain = domain.into();
        self
    }

    /// Sets the description used when a request has none.
    pub fn with_default_description(mut self, description: impl Into<String>) -> Self {
        self.default_description = description.into();
        self
    }

    /// Serializes `request` in the process-local timezone, stamped now.
    ///
    /// # Errors
    ///
    /// See [`InviteSerializer::serialize_in`].
    pub fn serialize(&self, request: &InviteRequest) -> Result<Invite, InviteError> {
        self.serialize_in(&Local, request, Utc::now())
    }

    /// Serializes `request`, reading its wall-clock times in `tz` and
    /// stamping the invite with `generated_at`.
    ///
    /// An ambiguous local time (repeated by a backward DST shift) resolves
    /// to its earliest instant.
    ///
    /// # Errors
    ///
    /// - [`InviteError::InvalidCalendarDate`] if the date does not exist.
    /// - [`InviteError::InvalidTimeFormat`] if a time is not `HH:MM`.
    /// - [`InviteError::EndBeforeStart`] if end precedes start.
    /// - [`InviteError::NonexistentLocalTime`] if a time falls in a DST gap.
    #[tracing::instrument(
        skip_all,
        fields(year = request.year, month_index = request.month_index, day = request.day)
    )]
    pub fn serialize_in<Tz: TimeZone>(
        &self,
        tz: &Tz,
        request: &InviteRequest,
        generated_at: DateTime<Utc>,
    ) -> Result<Invite, InviteError> {
        let date = resolve_date(request.year, request.month_index, request.day)?;
        let start_time = parse_or(request.start.as_deref(), WallTime::START_OF_DAY)?;
        let end_time = parse_or(request.end.as_deref(), WallTime::END_OF_DAY)?;
        if end_time < start_time {
            return Err(InviteError::EndBeforeStart {
                start: start_time.to_string(),
                end: end_time.to_string(),
            });
        }

        let start = to_utc(tz, date, start_time)?;
        let end = to_utc(tz, date, end_time)?;
        let uid = format_uid(
            next_uid_millis(generated_at.timestamp_millis()),
            &self.uid_domain,
        );
        let description = request
            .description
            .as_deref()
            .unwrap_or(&self.default_description);

        let lines = [
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            format!("PRODID:{}", self.prodid),
            "BEGIN:VEVENT".to_string(),
            format!("UID:{uid}"),
            format!("DTSTAMP:{}", format_utc(&generated_at)),
            format!("DTSTART:{}", format_utc(&start)),
            format!("DTEND:{}", format_utc(&end)),
            format!("SUMMARY:{}", escape_text(&request.title)),
            format!("DESCRIPTION:{}", escape_text(description)),
            "END:VEVENT".to_string(),
            "END:VCALENDAR".to_string(),
        ];
        let mut content = String::new();
        for line in &lines {
            content.push_str(&fold_line(line));
            content.push_str(CRLF);
        }

        debug!(%uid, start = %start, end = %end, "serialized invite");
        Ok(Invite {
            content,
            suggested_filename: suggested_filename(&request.title),
            uid,
            start,
            end,
        })
    }
}

/// Serializes `request` with the default serializer in the local timezone.
///
/// # Errors
///
/// See [`InviteSerializer::serialize_in`].
pub fn serialize(request: &InviteRequest) -> Result<Invite, InviteError> {
    InviteSerializer::default().serialize(request)
}

/// Returns `title` with every whitespace run replaced by one `_`, plus `.ics`.
pub fn suggested_filename(title: &str) -> String {
    let mut name = String::with_capacity(title.len() + 4);
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(c);
            in_space = false;
        }
    }
    name.push('.');
    name.push_str(FILE_EXTENSION);
    name
}

fn parse_or(input: Option<&str>, default: WallTime) -> Result<WallTime, InviteError> {
    input.map(str::parse::<WallTime>).transpose().map(|t| t.unwrap_or(default))
}

fn to_utc<Tz: TimeZone>(
    tz: &Tz,
    date: NaiveDate,
    time: WallTime,
) -> Result<DateTime<Utc>, InviteError> {
    tz.from_local_datetime(&date.and_time(time.to_naive_time()))
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| InviteError::NonexistentLocalTime {
            date,
            time: time.to_string(),
        })
}
