//! Implementation of the `stencil engine` command.
//!
//! Resolves the render mode and property syntax from flags and
//! configuration, then prints or exports what the core service produces.

use tracing::{debug, instrument};

use stencil_adapters::{JavaPropertiesFormatter, JsonFormatter, LocalFilesystem, TomlFormatter};
use stencil_core::{
    VERSION,
    application::{EngineService, ModeConfigurator, ports::PropertiesFormatter},
    domain::RenderMode,
};

use crate::{
    cli::{EngineArgs, PropertyFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `stencil engine` command.
#[instrument(skip_all, fields(output = ?args.output))]
pub fn execute(args: EngineArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mode = resolve_mode(args.mode, &config);
    let format = args.format.unwrap_or(config.engine.format);
    debug!(%mode, %format, "Engine settings resolved");

    let service = EngineService::new(
        Box::new(ModeConfigurator::for_mode(mode)),
        build_formatter(format, mode),
        Box::new(LocalFilesystem::new()),
    );

    match args.output {
        None => {
            let rendered = service
                .render()
                .with_cli_context(|| "rendering engine properties")?;
            output.data(&rendered)?;
        }
        Some(path) => {
            service
                .export(&path, args.force)
                .with_cli_context(|| format!("exporting to '{}'", path.display()))?;
            output.success(&format!(
                "Wrote {} engine properties to {}",
                mode,
                path.display()
            ))?;
        }
    }

    Ok(())
}

/// `--mode` wins; otherwise `engine.production` decides.
fn resolve_mode(flag: Option<RenderMode>, config: &AppConfig) -> RenderMode {
    flag.unwrap_or_else(|| RenderMode::from_production_flag(config.engine.production))
}

fn build_formatter(format: PropertyFormat, mode: RenderMode) -> Box<dyn PropertiesFormatter> {
    match format {
        PropertyFormat::Properties => Box::new(
            JavaPropertiesFormatter::new()
                .with_header_line(format!("Generated by stencil {VERSION}"))
                .with_header_line(format!("mode: {mode}"))
                .with_header_line(chrono::Local::now().to_rfc3339()),
        ),
        PropertyFormat::Json => Box::new(JsonFormatter::new()),
        PropertyFormat::Toml => Box::new(TomlFormatter::new()),
    }
}
