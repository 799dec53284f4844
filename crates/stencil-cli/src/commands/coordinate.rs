//! `stencil coordinate`: parse, edit and print an artifact coordinate.

use tracing::{debug, instrument};

use stencil_core::{domain::ArtifactCoordinate, error::StencilError};

use crate::{
    cli::{CoordinateArgs, CoordinateFormat, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(input = args.coordinate.as_deref().unwrap_or("")))]
pub fn execute(args: CoordinateArgs, output: OutputManager) -> CliResult<()> {
    let format = args.format.unwrap_or(match output.format() {
        OutputFormat::Json => CoordinateFormat::Json,
        _ => CoordinateFormat::Plain,
    });

    let coordinate = build_coordinate(args)?;
    debug!(%coordinate, "Coordinate built");

    output.data(&render(&coordinate, format)?)?;
    Ok(())
}

/// Start from the positional coordinate (or an empty one) and apply the
/// field flags on top.
fn build_coordinate(args: CoordinateArgs) -> CliResult<ArtifactCoordinate> {
    let mut coordinate = match args.coordinate.as_deref() {
        Some(text) => text
            .parse::<ArtifactCoordinate>()
            .map_err(StencilError::from)?,
        None => ArtifactCoordinate::new(),
    };

    if args.group_id.is_some() {
        coordinate.set_group_id(args.group_id);
    }
    if args.artifact_id.is_some() {
        coordinate.set_artifact_id(args.artifact_id);
    }
    if args.classifier.is_some() {
        coordinate.set_classifier(args.classifier);
    }
    if args.artifact_type.is_some() {
        coordinate.set_artifact_type(args.artifact_type);
    }

    Ok(coordinate)
}

fn render(coordinate: &ArtifactCoordinate, format: CoordinateFormat) -> CliResult<String> {
    match format {
        CoordinateFormat::Plain => Ok(coordinate.to_string()),
        CoordinateFormat::Json => {
            serde_json::to_string_pretty(coordinate).map_err(|e| CliError::InvalidInput {
                message: format!("Failed to serialise coordinate: {e}"),
                source: Some(Box::new(e)),
            })
        }
    }
}
