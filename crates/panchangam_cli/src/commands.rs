//! Subcommand implementations.

use std::fmt::Write as _;

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use panchangam_config::PanchangamConfig;
use panchangam_core::Engine;
use panchangam_search::{
    NewMoonEvent, PanchangamInfo, PanchangamReport, next_new_moon, panchangam_for, prev_new_moon,
};
use panchangam_time::{Tz, filter_catalog, find_zone, localize, utc_to_jd};
use panchangam_vedic_base::LinearAyanamsha;
use serde::Serialize;
use tracing::info;

use crate::cli::{InstantArgs, NewMoonArgs, ShowArgs, ZonesArgs};

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_time(s: &str) -> Result<NaiveTime, String> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| format!("invalid time {s:?}, expected HH:MM or HH:MM:SS"))
}

fn resolve_zone_arg(zone: Option<&str>, config: &PanchangamConfig) -> Result<Tz> {
    match zone {
        Some(z) => find_zone(z).ok_or_else(|| anyhow!("unknown zone or place {z:?}")),
        None => Ok(config.zone()?),
    }
}

/// Resolve the wall-clock instant, filling missing parts from `now` in `tz`.
fn local_instant(args: &InstantArgs, tz: &Tz, now: DateTime<Utc>) -> NaiveDateTime {
    let now_local = now.with_timezone(tz).naive_local();
    let date = args.date.unwrap_or(now_local.date());
    let time = args.time.unwrap_or(now_local.time());
    date.and_time(time)
}

fn engine_from(config: &PanchangamConfig) -> Result<Engine> {
    let engine_config = config.engine_config()?;
    Engine::new(engine_config).context("invalid engine configuration")
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    local: String,
    zone: &'a str,
    utc: DateTime<Utc>,
    jd_ut: f64,
    #[serde(flatten)]
    report: &'a PanchangamReport,
}

fn render_report(info: &PanchangamInfo, report: &PanchangamReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} ({} UTC)",
        info.local.format("%Y-%m-%d %H:%M:%S"),
        info.zone_id,
        info.utc.format("%Y-%m-%d %H:%M:%S")
    );
    for (label, value) in report.iter() {
        let _ = writeln!(out, "{label}: {value}");
    }
    out
}

pub fn show(args: ShowArgs, config: &PanchangamConfig) -> Result<()> {
    let tz = resolve_zone_arg(args.instant.zone.as_deref(), config)?;
    let local = local_instant(&args.instant, &tz, Utc::now());
    let mode = args.mode.unwrap_or(config.display_mode);
    let engine = engine_from(config)?;
    let search = config.conjunction_config()?;

    info!(%local, zone = tz.name(), mode = mode.as_str(), "computing panchangam");
    let panchangam = panchangam_for(&engine, &LinearAyanamsha::default(), local, &tz, &search)
        .with_context(|| format!("cannot compute panchangam for {local} in {}", tz.name()))?;
    let report = panchangam.report(mode);

    if args.json {
        let output = ShowOutput {
            local: panchangam.local.to_string(),
            zone: panchangam.zone_id,
            utc: panchangam.utc,
            jd_ut: panchangam.jd_ut,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_report(&panchangam, &report));
    }
    Ok(())
}

pub fn zones(args: ZonesArgs) -> Result<()> {
    let entries = filter_catalog(args.filter.as_deref().unwrap_or(""));
    if entries.is_empty() {
        println!("No matching locations");
    }
    for entry in entries {
        println!("{:<40} {}", entry.label, entry.id());
    }
    Ok(())
}

#[derive(Serialize)]
struct NewMoonOutput<'a> {
    zone: &'a str,
    local: String,
    #[serde(flatten)]
    event: &'a NewMoonEvent,
}

fn render_new_moon(event: &NewMoonEvent, tz: &Tz, previous: bool) -> String {
    let label = if previous { "Previous" } else { "Next" };
    format!(
        "{label} new moon: {} UTC ({} {})\n  Sun lon: {:.4} deg  Moon lon: {:.4} deg\n",
        event.utc.format("%Y-%m-%d %H:%M:%S"),
        event.utc.with_timezone(tz).format("%Y-%m-%d %H:%M:%S %Z"),
        tz.name(),
        event.sun_longitude_deg,
        event.moon_longitude_deg
    )
}

pub fn new_moon(args: NewMoonArgs, config: &PanchangamConfig) -> Result<()> {
    let tz = resolve_zone_arg(args.instant.zone.as_deref(), config)?;
    let local = local_instant(&args.instant, &tz, Utc::now());
    let utc = localize(local, &tz)?;
    let engine = engine_from(config)?;
    let search = config.conjunction_config()?;

    let jd = utc_to_jd(&utc);
    let event = if args.previous {
        prev_new_moon(&engine, jd, &search)
    } else {
        next_new_moon(&engine, jd, &search)
    }
    .with_context(|| format!("new moon search from {utc} failed"))?;

    if args.json {
        let output = NewMoonOutput {
            zone: tz.name(),
            local: event.utc.with_timezone(&tz).naive_local().to_string(),
            event: &event,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_new_moon(&event, &tz, args.previous));
    }
    Ok(())
}
