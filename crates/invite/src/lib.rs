//! # calendari-invite
//!
//! Serializes a single-day event into iCalendar (RFC 5545) text.
//!
//! The user selects a day ([`SelectedDay`]), optionally edits the title, and
//! the selection becomes an [`InviteRequest`]. [`InviteSerializer`] reads the
//! request's wall-clock times (default `00:00` to `23:59`) in a timezone,
//! converts them to UTC and emits one `VEVENT` inside one `VCALENDAR`:
//!
//! ```text
//! BEGIN:VCALENDAR
//! VERSION:2.0
//! PRODID:-//Mi Calendario 2025//ES
//! BEGIN:VEVENT
//! UID:<millis>@mi-calendario
//! DTSTAMP:<now, UTC>
//! DTSTART:<start, UTC>
//! DTEND:<end, UTC>
//! SUMMARY:<title>
//! DESCRIPTION:<description>
//! END:VEVENT
//! END:VCALENDAR
//! ```
//!
//! Lines end in CRLF. Text values are escaped and long lines are folded.
//!
//! ```
//! use calendari_invite::{InviteRequest, InviteSerializer};
//! use chrono::{TimeZone, Utc};
//!
//! let stamp = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
//! let request = InviteRequest::new("Test", 2025, 0, 19);
//! let invite = InviteSerializer::new().serialize_in(&Utc, &request, stamp).unwrap();
//! assert!(invite.content.contains("DTSTART:20250119T000000Z\r\n"));
//! assert_eq!(invite.suggested_filename, "Test.ics");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `request` | Selected day and invite request |
//! | `serialize` | VCALENDAR assembly and UTC conversion |
//! | `format` | UTC stamps, text escaping, line folding |
//! | `wall_time` | `HH:MM` parsing |
//! | `uid` | Monotonic per-process UIDs |
//! | [`error`] | Error types |

pub mod error;
mod format;
mod request;
mod serialize;
mod uid;
mod wall_time;

pub use error::InviteError;
pub use format::{escape_text, fold_line, format_utc};
pub use request::{InviteRequest, SelectedDay, default_title};
pub use serialize::{
    DEFAULT_DESCRIPTION, DEFAULT_PRODID, DEFAULT_UID_DOMAIN, FILE_EXTENSION, Invite,
    InviteSerializer, MIME_TYPE, serialize, suggested_filename,
};
pub use wall_time::WallTime;
