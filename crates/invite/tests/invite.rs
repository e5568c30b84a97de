//! End-to-end invite generation from a calendar selection.

use calendari_classify::AnnotationTables;
use calendari_invite::{
    InviteError, InviteRequest, InviteSerializer, MIME_TYPE, SelectedDay, fold_line,
};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use chrono_tz::Europe::Madrid;

fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 15).unwrap()
}

fn lines(content: &str) -> Vec<&str> {
    content.split("\r\n").collect()
}

#[test]
fn selection_to_invite() {
    let mut selected = SelectedDay::new(2025, 2, 19).unwrap();
    assert_eq!(
        selected.describe(AnnotationTables::builtin()),
        "Fecha: 19 de Marzo. Evento: Falla (Festivo: San José)"
    );
    selected.set_title("Cremà de la falla");
    let invite = InviteSerializer::new()
        .serialize_in(&Utc, &selected.into_request(), stamp())
        .unwrap();

    let lines = lines(&invite.content);
    assert_eq!(
        &lines[..4],
        ["BEGIN:VCALENDAR", "VERSION:2.0", "PRODID:-//Mi Calendario 2025//ES", "BEGIN:VEVENT"]
    );
    assert_eq!(lines[4], format!("UID:{}", invite.uid));
    assert_eq!(lines[5], "DTSTAMP:20250301T083015Z");
    assert_eq!(lines[6], "DTSTART:20250319T000000Z");
    assert_eq!(lines[7], "DTEND:20250319T235900Z");
    assert_eq!(lines[8], "SUMMARY:Cremà de la falla");
    assert_eq!(lines[9], "DESCRIPTION:Generado desde el Calendario 2025");
    assert_eq!(&lines[10..], ["END:VEVENT", "END:VCALENDAR", ""]);
    assert_eq!(invite.suggested_filename, "Cremà_de_la_falla.ics");
    assert_eq!(MIME_TYPE, "text/calendar");
}

#[test]
fn default_title_for_selection() {
    let selected = SelectedDay::new(2025, 0, 19).unwrap();
    let invite = InviteSerializer::new()
        .serialize_in(&Utc, &selected.into_request(), stamp())
        .unwrap();
    assert!(invite.content.contains("SUMMARY:Evento día 19 de Enero\r\n"));
    assert_eq!(invite.suggested_filename, "Evento_día_19_de_Enero.ics");
}

#[test]
fn timed_event_in_local_offset() {
    let cest = FixedOffset::east_opt(2 * 3600).unwrap();
    let request = InviteRequest::new("Reunión", 2025, 5, 10)
        .with_start("9:15")
        .with_end("10:45")
        .with_description("Sala 2; planta 3, ala norte");
    let invite = InviteSerializer::new()
        .serialize_in(&cest, &request, stamp())
        .unwrap();
    assert!(invite.content.contains("DTSTART:20250610T071500Z\r\n"));
    assert!(invite.content.contains("DTEND:20250610T084500Z\r\n"));
    assert!(
        invite
            .content
            .contains("DESCRIPTION:Sala 2\\; planta 3\\, ala norte\r\n")
    );
    assert!(invite.end > invite.start);
}

#[test]
fn negative_offset_crosses_into_next_day() {
    let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
    let invite = InviteSerializer::new()
        .serialize_in(&new_york, &InviteRequest::new("x", 2025, 11, 31), stamp())
        .unwrap();
    assert!(invite.content.contains("DTSTART:20251231T050000Z\r\n"));
    assert!(invite.content.contains("DTEND:20260101T045900Z\r\n"));
}

#[test]
fn time_skipped_by_spring_forward_rejected() {
    // Madrid jumps from 02:00 to 03:00 on 2025-03-30.
    let request = InviteRequest::new("x", 2025, 2, 30).with_start("02:30");
    assert_eq!(
        InviteSerializer::new()
            .serialize_in(&Madrid, &request, stamp())
            .unwrap_err(),
        InviteError::NonexistentLocalTime {
            date: NaiveDate::from_ymd_opt(2025, 3, 30).unwrap(),
            time: "02:30".to_string(),
        }
    );
}

#[test]
fn time_repeated_by_fall_back_takes_earliest() {
    // Madrid repeats 02:00..03:00 on 2025-10-26; the first pass is CEST (+02:00).
    let request = InviteRequest::new("x", 2025, 9, 26).with_start("02:30");
    let invite = InviteSerializer::new()
        .serialize_in(&Madrid, &request, stamp())
        .unwrap();
    assert!(invite.content.contains("DTSTART:20251026T003000Z\r\n"));
    // 23:59 is after the shift, in CET (+01:00).
    assert!(invite.content.contains("DTEND:20251026T225900Z\r\n"));
}

#[test]
fn all_day_in_madrid_winter() {
    let invite = InviteSerializer::new()
        .serialize_in(&Madrid, &InviteRequest::new("Test", 2025, 0, 19), stamp())
        .unwrap();
    assert!(invite.content.contains("DTSTART:20250118T230000Z\r\n"));
    assert!(invite.content.contains("DTEND:20250119T225900Z\r\n"));
}

#[test]
fn invalid_time_rejected() {
    let request = InviteRequest::new("x", 2025, 0, 1).with_start("25:00");
    assert_eq!(
        InviteSerializer::new()
            .serialize_in(&Utc, &request, stamp())
            .unwrap_err(),
        InviteError::InvalidTimeFormat {
            input: "25:00".to_string()
        }
    );
}

#[test]
fn invalid_date_rejected() {
    let request = InviteRequest::new("x", 2025, 1, 29);
    assert_eq!(
        InviteSerializer::new()
            .serialize_in(&Utc, &request, stamp())
            .unwrap_err(),
        InviteError::InvalidCalendarDate {
            year: 2025,
            month_index: 1,
            day: 29,
        }
    );
    let request = InviteRequest::new("x", 2025, 12, 1);
    assert!(matches!(
        InviteSerializer::new().serialize_in(&Utc, &request, stamp()),
        Err(InviteError::InvalidCalendarDate { .. })
    ));
}

#[test]
fn long_summary_is_folded() {
    let title = "Presentación de las Falleras Mayores de Valencia ".repeat(4);
    let invite = InviteSerializer::new()
        .serialize_in(&Utc, &InviteRequest::new(title.trim(), 2025, 0, 19), stamp())
        .unwrap();
    for line in lines(&invite.content) {
        assert!(line.len() <= 75, "line too long: {line:?}");
    }
    let unfolded = invite.content.replace("\r\n ", "");
    assert!(unfolded.contains(&format!("SUMMARY:{}\r\n", title.trim())));
    assert_eq!(fold_line("SHORT"), "SHORT");
}

#[test]
fn uids_are_unique_within_process() {
    let serializer = InviteSerializer::new();
    let request = InviteRequest::new("x", 2025, 0, 1);
    let a = serializer.serialize_in(&Utc, &request, stamp()).unwrap();
    let b = serializer.serialize_in(&Utc, &request, stamp()).unwrap();
    assert_ne!(a.uid, b.uid);
    assert!(a.uid.ends_with("@mi-calendario"));
}
