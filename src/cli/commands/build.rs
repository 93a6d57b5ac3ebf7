use crate::cli::commands::{RunStatus, parse_options};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{BuildOutcome, Pipeline};
use crate::errors::AppResult;
use crate::export::ReportWriter;
use crate::input::read_worklog;
use crate::runlog::RunLog;
use crate::ui::messages::{header, success, warning};
use crate::utils::mins2readable;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use std::path::Path;

/// Handle the `build` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, log: &RunLog) -> AppResult<RunStatus> {
    if let Commands::Build {
        input,
        out,
        json,
        precedence,
    } = cmd
    {
        let input_path = Path::new(input);
        let out_dir = out
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.output_path());

        log.info(
            "build",
            format!(
                "start input={} out_dir={}",
                input_path.display(),
                out_dir.display()
            ),
        );

        let worklog = match read_worklog(input_path) {
            Ok(w) => w,
            Err(e) => {
                log.error(
                    "build",
                    format!("file_error input={} error={}", input_path.display(), e),
                );
                return Err(e);
            }
        };

        let pipeline = Pipeline::new(parse_options(cfg, *precedence));
        let outcome = pipeline.build(&worklog.rows);

        let files = ReportWriter::write_all(&out_dir, &outcome, *json)?;

        print_summary(&outcome);

        let outputs: Vec<String> = files
            .all()
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        log.info(
            "build",
            format!(
                "rows={} valid={} errors={} outputs={}",
                outcome.row_count,
                outcome.entries.len(),
                outcome.errors.len(),
                outputs.join(",")
            ),
        );
        if !outcome.is_clean() {
            log.warn(
                "build",
                format!("{} row(s) rejected, see {}", outcome.errors.len(), files.errors.display()),
            );
        }
        log.info("build", "finished");

        if outcome.is_clean() {
            success(format!("BUILD DONE: reports written to {}", out_dir.display()));
            return Ok(RunStatus::Clean);
        }

        warning(format!(
            "BUILD DONE (with errors): errors={} -> {}",
            outcome.errors.len(),
            files.errors.display()
        ));
        return Ok(RunStatus::WithErrors);
    }

    Ok(RunStatus::Clean)
}

/// Print both summary tables to the terminal.
fn print_summary(outcome: &BuildOutcome) {
    header("Daily summary");
    let mut daily = Table::new(vec![
        Column::left("date"),
        Column::right("minutes"),
        Column::right("hours"),
        Column::right("entries"),
    ]);
    for d in &outcome.daily {
        daily.add_row(vec![
            d.date_str(),
            d.total_minutes.to_string(),
            mins2readable(d.total_minutes, true),
            d.entry_count.to_string(),
        ]);
    }
    println!("{}", daily.render());

    header("Process summary");
    let mut process = Table::new(vec![
        Column::left("process"),
        Column::right("minutes"),
        Column::right("entries"),
        Column::right("avg"),
        Column::right("max"),
    ]);
    for p in &outcome.process {
        process.add_row(vec![
            p.process.clone(),
            p.total_minutes.to_string(),
            p.entry_count.to_string(),
            format!("{:.2}", p.average_minutes()),
            p.max_minutes.to_string(),
        ]);
    }
    println!("{}", process.render());
}
