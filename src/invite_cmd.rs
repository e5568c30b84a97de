//! Invite command: write a single-day `.ics` file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use calendari_invite::SelectedDay;

use crate::cli::InviteArgs;
use crate::config::CalendariConfig;
use crate::convert;

/// Serialize the invite for one day and write it to disk.
///
/// Prints the written path.
pub fn run(
    config: &CalendariConfig,
    year: i32,
    args: InviteArgs,
    out: &mut impl Write,
) -> Result<()> {
    let _cmd = info_span!("invite").entered();
    let mut selected = SelectedDay::new(year, args.month - 1, args.day)?;
    if let Some(title) = args.title {
        selected.set_title(title);
    }

    let mut request = selected.into_request();
    request.start = args.start;
    request.end = args.end;
    request.description = args.description;
    let request = convert::apply_invite_defaults(request, &config.invite);

    let invite = convert::build_serializer(&config.invite)
        .serialize(&request)
        .context("failed to build invite")?;

    let path = match args.output {
        Some(path) => path,
        None => default_output_path(config, &invite.suggested_filename)?,
    };
    std::fs::write(&path, &invite.content)
        .with_context(|| format!("failed to write invite: {}", path.display()))?;
    info!(path = %path.display(), uid = %invite.uid, "invite written");

    writeln!(out, "{}", path.display())?;
    Ok(())
}

/// Places the suggested filename in the configured output directory.
fn default_output_path(config: &CalendariConfig, filename: &str) -> Result<PathBuf> {
    if filename.contains(['/', '\\']) {
        bail!("title yields an unsafe filename {filename:?}; pass --output");
    }
    let dir = &config.invite.output_dir;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    Ok(dir.join(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(month: u32, day: u32) -> InviteArgs {
        InviteArgs {
            month,
            day,
            title: None,
            start: None,
            end: None,
            description: None,
            output: None,
        }
    }

    fn config_in(dir: &std::path::Path) -> CalendariConfig {
        let mut config = CalendariConfig::default();
        config.invite.output_dir = dir.join("invites");
        config
    }

    #[test]
    fn writes_default_filename() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut out = Vec::new();
        run(&config, 2025, args(7, 10), &mut out).unwrap();

        let path = dir.path().join("invites").join("Evento_día_10_de_Julio.ics");
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", path.display()));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(content.contains("SUMMARY:Evento día 10 de Julio\r\n"));
        assert!(content.ends_with("END:VCALENDAR\r\n"));
    }

    #[test]
    fn explicit_output_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cena.ics");
        let mut config = config_in(dir.path());
        config.invite.uid_domain = "example.org".to_string();
        let args = InviteArgs {
            title: Some("Cena".to_string()),
            start: Some("21:00".to_string()),
            end: Some("23:30".to_string()),
            description: Some("Con la familia".to_string()),
            output: Some(output.clone()),
            ..args(7, 10)
        };
        run(&config, 2025, args, &mut Vec::new()).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("SUMMARY:Cena\r\n"));
        assert!(content.contains("DESCRIPTION:Con la familia\r\n"));
        assert!(content.contains("@example.org\r\n"));
        assert!(!dir.path().join("invites").exists());
    }

    #[test]
    fn rejects_separator_in_title() {
        let dir = tempfile::tempdir().unwrap();
        let args = InviteArgs {
            title: Some("a/b".to_string()),
            ..args(7, 10)
        };
        let err = run(&config_in(dir.path()), 2025, args, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("unsafe filename"));
    }

    #[test]
    fn rejects_invalid_time_and_date() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let bad_time = InviteArgs {
            start: Some("7h".to_string()),
            ..args(7, 10)
        };
        assert!(run(&config, 2025, bad_time, &mut Vec::new()).is_err());
        assert!(run(&config, 2025, args(4, 31), &mut Vec::new()).is_err());
    }
}
