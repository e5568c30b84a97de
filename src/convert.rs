//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result};
use tracing::info;

use calendari_classify::AnnotationTables;
use calendari_invite::{InviteRequest, InviteSerializer};

use crate::config::{CalendariConfig, InviteToml};

/// Returns the calendar year, preferring the CLI override.
pub fn resolve_year(config: &CalendariConfig, year: Option<i32>) -> i32 {
    year.unwrap_or(config.year)
}

/// Loads the configured annotation tables, or the built-in ones.
pub fn build_tables(config: &CalendariConfig) -> Result<AnnotationTables> {
    match &config.tables {
        Some(path) => {
            info!(path = %path.display(), "loading annotation tables");
            AnnotationTables::from_path(path)
                .with_context(|| format!("failed to load tables: {}", path.display()))
        }
        None => Ok(AnnotationTables::builtin().clone()),
    }
}

/// Builds the invite serializer from the `[invite]` section.
pub fn build_serializer(invite: &InviteToml) -> InviteSerializer {
    InviteSerializer::new()
        .with_prodid(&invite.prodid)
        .with_uid_domain(&invite.uid_domain)
        .with_default_description(&invite.description)
}

/// Fills unset request times from the `[invite]` section.
pub fn apply_invite_defaults(mut request: InviteRequest, invite: &InviteToml) -> InviteRequest {
    if request.start.is_none() {
        request.start = invite.start.clone();
    }
    if request.end.is_none() {
        request.end = invite.end.clone();
    }
    request
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use calendari_calendar::MonthDay;

    use super::*;

    #[test]
    fn year_override_wins() {
        let config = CalendariConfig::default();
        assert_eq!(resolve_year(&config, None), 2025);
        assert_eq!(resolve_year(&config, Some(2030)), 2030);
    }

    #[test]
    fn builtin_tables_by_default() {
        let tables = build_tables(&CalendariConfig::default()).unwrap();
        assert_eq!(&tables, AnnotationTables::builtin());
    }

    #[test]
    fn tables_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "falla_days = [\"03-15\"]\n[holidays]\n\"12-25\" = \"Navidad\"").unwrap();
        let config = CalendariConfig {
            tables: Some(file.path().to_path_buf()),
            ..CalendariConfig::default()
        };
        let tables = build_tables(&config).unwrap();
        let key: MonthDay = "03-15".parse().unwrap();
        assert!(tables.is_falla_day(key));
        assert_eq!(tables.events().count(), 0);
    }

    #[test]
    fn missing_tables_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = CalendariConfig {
            tables: Some(dir.path().join("nope.toml")),
            ..CalendariConfig::default()
        };
        let err = build_tables(&config).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load tables"));
    }

    #[test]
    fn request_times_take_precedence() {
        let invite = InviteToml {
            start: Some("09:00".to_string()),
            end: Some("18:00".to_string()),
            ..InviteToml::default()
        };
        let request = InviteRequest::new("x", 2025, 0, 1).with_end("12:00");
        let request = apply_invite_defaults(request, &invite);
        assert_eq!(request.start.as_deref(), Some("09:00"));
        assert_eq!(request.end.as_deref(), Some("12:00"));
    }
}
