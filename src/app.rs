//! Application orchestrator.
//! Loads/merges config, initializes logging, validates the roots, and runs
//! the generation and relocation phases sequentially.

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, error, info};

use bucketize::config::{self, CONFIG_ENV, Config};
use bucketize::output as out;
use bucketize::{generate, relocate};

use crate::cli::Args;
use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
            out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {cfg_env}\n"));
            out::print_info(&format!("To override, unset {CONFIG_ENV} or set it to another file."));
            return Ok(());
        }
        match config::default_config_path() {
            Some(p) => {
                out::print_info(&format!("Default bucketize config path:\n  {}\n", p.display()));
                if p.exists() {
                    out::print_info("A config file already exists at that location.");
                } else {
                    out::print_info("No config file exists there yet. Run without --print-config to create a template.");
                }
            }
            None => {
                out::print_error("Could not determine a default config path.");
            }
        }
        return Ok(());
    }

    // Create template config if none exists (before logging init)
    if let Some(path) = config::ensure_default_config_exists() {
        out::print_success(&format!(
            "A template bucketize config was written to: {}",
            path.display()
        ));
        out::print_info("Edit the file to set `source_root` and `target_root` (and optionally `log_level`, `log_file`, `file_count`). Example:\n\n<config>\n  <source_root>/path/to/unsorted</source_root>\n  <target_root>/path/to/sorted</target_root>\n  <log_level>normal</log_level>\n</config>\n");
        out::print_info(&format!(
            "Then re-run this command. To use a different location set {CONFIG_ENV}."
        ));
        return Ok(());
    }

    // Layered config: file < env vars < CLI flags.
    let mut cfg = Config::default();
    if let Some(loaded) = config::load_config()? {
        cfg = loaded;
    }
    config::apply_env_overrides(&mut cfg);
    args.apply_overrides(&mut cfg);

    // Guard must be held until exit so the file appender flushes.
    let _guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting bucketize: {:?}", args);

    cfg.validate()?;

    if !args.relocate_only {
        let mut rng = match args.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        match generate(&cfg.source_root, &mut rng, cfg.file_count) {
            Ok(report) => {
                info!(
                    written = report.written.len(),
                    failed = report.failed,
                    source = %cfg.source_root.display(),
                    "generation finished"
                );
                out::print_success(&format!(
                    "Generated {} file(s) under '{}'",
                    report.written.len(),
                    cfg.source_root.display()
                ));
                if report.failed > 0 {
                    out::print_warn(&format!(
                        "{} file(s) could not be written; see log for details",
                        report.failed
                    ));
                }
            }
            Err(e) => {
                error!(code = e.code(), error = %e, "generation aborted");
                return Err(e.into());
            }
        }
    }

    if !args.generate_only {
        match relocate(&cfg.source_root, &cfg.target_root) {
            Ok(report) => {
                info!(
                    relocated = report.relocated(),
                    failed = report.failed(),
                    target = %cfg.target_root.display(),
                    "relocation finished"
                );
                out::print_success(&format!(
                    "Relocated {} file(s) into buckets under '{}'",
                    report.relocated(),
                    cfg.target_root.display()
                ));
                if report.failed() > 0 {
                    out::print_warn(&format!(
                        "{} file(s) were skipped; see log for details",
                        report.failed()
                    ));
                }
            }
            Err(e) => {
                error!(code = e.code(), error = %e, "relocation aborted");
                return Err(e.into());
            }
        }
    }

    Ok(())
}
