//! Generator command execution.

use anyhow::{Context, Result};
use console::style;
use tokenbridge::{
    check_artifact, generate_file_content, generate_theme_css, write_artifacts, Artifact,
    ArtifactStatus, ThemeCssOptions, TokenSource, THEME_FILE, VARIABLES_FILE,
};

use crate::cli::{Cli, Command, ThemeArgs};

/// Result of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Artifacts were written, or all checked artifacts are fresh.
    Done,
    /// At least one checked artifact is stale or missing.
    Stale,
}

/// Runs the requested generators.
///
/// All artifacts are generated in memory first; nothing is written unless
/// every generator succeeds.
pub fn run(cli: &Cli) -> Result<Outcome> {
    let source = TokenSource::load(&cli.tokens)
        .with_context(|| format!("failed to load tokens from {}", cli.tokens.display()))?;
    if source.is_empty() {
        tracing::warn!(path = %cli.tokens.display(), "token source defines no tokens");
    }

    let artifacts = generate(cli, &source)?;
    tracing::debug!(
        tokens = source.len(),
        artifacts = artifacts.len(),
        check = cli.check,
        "artifacts generated"
    );

    if cli.check {
        return check(&artifacts);
    }

    write_artifacts(&artifacts).context("failed to write artifacts")?;
    for artifact in &artifacts {
        println!(
            "{} {}",
            style("generated").green().bold(),
            artifact.path.display()
        );
    }
    Ok(Outcome::Done)
}

fn generate(cli: &Cli, source: &TokenSource) -> Result<Vec<Artifact>> {
    let variables = || -> Result<Artifact> {
        let contents =
            generate_file_content(source).context("failed to generate the variable map")?;
        Ok(Artifact::new(cli.out_dir.join(VARIABLES_FILE), contents))
    };
    let theme = |args: &ThemeArgs| -> Result<Artifact> {
        let options = ThemeCssOptions::default()
            .framework_import(&args.framework_import)
            .variables_import(&args.variables_import);
        let contents =
            generate_theme_css(source, &options).context("failed to generate the theme stylesheet")?;
        Ok(Artifact::new(cli.out_dir.join(THEME_FILE), contents))
    };

    match cli.resolved_command() {
        Command::Map => Ok(vec![variables()?]),
        Command::Theme(args) => Ok(vec![theme(&args)?]),
        Command::All(args) => Ok(vec![variables()?, theme(&args)?]),
    }
}

fn check(artifacts: &[Artifact]) -> Result<Outcome> {
    let mut outcome = Outcome::Done;
    for artifact in artifacts {
        let status = check_artifact(&artifact.path, &artifact.contents)
            .with_context(|| format!("failed to read {}", artifact.path.display()))?;
        let label = match status {
            ArtifactStatus::Fresh => style("fresh").green(),
            ArtifactStatus::Stale => style("stale").yellow().bold(),
            ArtifactStatus::Missing => style("missing").red().bold(),
        };
        println!("{} {}", label, artifact.path.display());
        if status != ArtifactStatus::Fresh {
            outcome = Outcome::Stale;
        }
    }
    Ok(outcome)
}
