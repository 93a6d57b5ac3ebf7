use crate::cli::commands::{RunStatus, parse_options};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Pipeline;
use crate::errors::AppResult;
use crate::export::{ERRORS_FILE, write_errors_csv, write_file_error};
use crate::input::read_worklog;
use crate::runlog::RunLog;
use crate::ui::messages::{error, success, warning};
use crate::utils::path::expand_tilde;
use std::path::Path;

/// Handle the `validate` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, log: &RunLog) -> AppResult<RunStatus> {
    if let Commands::Validate {
        input,
        errors,
        precedence,
    } = cmd
    {
        let input_path = Path::new(input);
        let errors_path = errors
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.output_path().join(ERRORS_FILE));

        log.info("validate", format!("start input={}", input_path.display()));

        let worklog = match read_worklog(input_path) {
            Ok(w) => w,
            Err(e) => {
                log.error(
                    "validate",
                    format!("file_error input={} error={}", input_path.display(), e),
                );
                // the input error stays the one reported, even if the audit write fails
                match write_file_error(&errors_path, &e.to_string(), input) {
                    Ok(()) => error(format!("INVALID: file_error -> {}", errors_path.display())),
                    Err(write_err) => {
                        log.error(
                            "validate",
                            format!("cannot write {}: {}", errors_path.display(), write_err),
                        );
                        warning(format!(
                            "Cannot write error report {}: {}",
                            errors_path.display(),
                            write_err
                        ));
                    }
                }
                return Err(e);
            }
        };

        let options = parse_options(cfg, *precedence);
        let pipeline = Pipeline::new(options);
        let rejected = pipeline.validate(&worklog.rows);

        write_errors_csv(&errors_path, &rejected)?;
        log.info(
            "validate",
            format!(
                "rows={} errors={} precedence={} errors_csv={}",
                worklog.rows.len(),
                rejected.len(),
                options.time_precedence.as_str(),
                errors_path.display()
            ),
        );

        if rejected.is_empty() {
            success("VALID: no errors.");
            log.info("validate", "finished status=VALID");
            return Ok(RunStatus::Clean);
        }

        warning(format!(
            "INVALID: {} error(s). -> {}",
            rejected.len(),
            errors_path.display()
        ));
        log.warn("validate", "finished status=INVALID");
        return Ok(RunStatus::WithErrors);
    }

    Ok(RunStatus::Clean)
}
