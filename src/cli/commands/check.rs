use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::Output;
use crate::config::{OutputFormat, PostfilterConfig};
use crate::filter::{FilterEngine, Mode, Verdict};
use crate::model::{Action, FilterV1, Kind, Status};
use crate::shared::{files, ids};
use crate::text::{MastodonHtml, PlainText, unicode_wrap};

const PREVIEW_CHARS: usize = 60;

#[derive(Args)]
pub struct CheckArgs {
    /// JSON array of statuses to evaluate
    #[arg(long, value_name = "FILE")]
    pub statuses: PathBuf,

    /// JSON array of version 1 filters; enables phrase matching
    #[arg(long = "v1-filters", value_name = "FILE")]
    pub v1_filters: Option<PathBuf>,

    /// Display context: home, notifications, public, thread, account
    #[arg(long)]
    pub context: Option<String>,

    /// Output format (defaults to output.format from config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Evaluate phrase expiry at this RFC 3339 instant instead of now
    #[arg(long, value_name = "TIME")]
    pub now: Option<String>,

    /// Only list statuses that are warned or hidden
    #[arg(long)]
    pub filtered_only: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    mode: Mode,
    context: Kind,
    statuses: Vec<ReportEntry<'a>>,
}

#[derive(Serialize)]
struct ReportEntry<'a> {
    id: &'a str,
    action: Action,
    filter_titles: &'a [String],
}

pub fn execute(args: CheckArgs, custom_config: Option<&str>, verbose: bool, quiet: bool) -> Result<()> {
    let settings = PostfilterConfig::load(custom_config)?.settings()?;
    let output = Output::new(verbose, quiet);
    if !settings.output.color {
        console::set_colors_enabled(false);
    }

    let kind = match &args.context {
        Some(context) => context.parse::<Kind>()?,
        None => settings.filter.context,
    };
    let now = match &args.now {
        Some(text) => DateTime::parse_from_rfc3339(text)
            .with_context(|| format!("Invalid --now timestamp: {}", text))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };
    let format = args.format.unwrap_or(settings.output.format);
    let show_none = settings.output.show_none && !args.filtered_only;

    let mut statuses: Vec<Status> = files::read_json(&args.statuses)?;
    if statuses.is_empty() {
        output.warning(&format!("No statuses in {}", args.statuses.display()));
    }
    output.verbose(&format!("Loaded {} status(es) from {}", statuses.len(), args.statuses.display()));

    let engine = match &args.v1_filters {
        Some(path) => {
            let rules: Vec<FilterV1> = files::read_json(path)?;
            output.verbose(&format!("Loaded {} phrase filter(s) from {}", rules.len(), path.display()));
            FilterEngine::legacy(&rules, now)?
        }
        None => FilterEngine::modern(),
    };

    // Newest first, as a timeline shows them
    statuses.sort_by(|a, b| ids::compare(&b.id, &a.id));
    let verdicts = engine.evaluate_all(&statuses, kind);

    let listed: Vec<(&Status, &Verdict)> = statuses
        .iter()
        .zip(&verdicts)
        .filter(|(_, verdict)| show_none || verdict.action != Action::None)
        .collect();

    match format {
        OutputFormat::Json => {
            let report = Report {
                mode: engine.mode(),
                context: kind,
                statuses: listed
                    .iter()
                    .map(|(status, verdict)| ReportEntry {
                        id: &status.id,
                        action: verdict.action,
                        filter_titles: &verdict.filter_titles,
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            output.header(&format!("Filtering {} statuses ({:?} mode)", kind, engine.mode()));
            let converter = MastodonHtml;
            for (status, verdict) in &listed {
                let preview = preview(&converter, status);
                output.decision(&status.id, verdict.action, &verdict.filter_titles, &preview);
            }

            let count = |action: Action| verdicts.iter().filter(|v| v.action == action).count();
            output.summary(count(Action::None), count(Action::Warn), count(Action::Hide));
        }
    }

    Ok(())
}

/// First line of the visible text, shortened for one-line display
fn preview(converter: &dyn PlainText, status: &Status) -> String {
    let status = status.actionable();
    let text = if status.spoiler_text.is_empty() {
        converter.to_plain_text(&status.content)
    } else {
        status.spoiler_text.clone()
    };
    let line = text.lines().next().unwrap_or("").trim();

    let mut short: String = line.chars().take(PREVIEW_CHARS).collect();
    if line.chars().count() > PREVIEW_CHARS {
        short.push('…');
    }
    unicode_wrap(&short)
}
