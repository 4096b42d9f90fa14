//! Detect command implementation
//!
//! Loads the candidate projects and the remembered installation directory,
//! runs detection, prints the decision and optionally remembers the target
//! directory for the next run.

use std::path::{Path, PathBuf};

use console::Style;
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::DetectArgs;
use crate::detector::PluginDetector;
use crate::domain::{InstallationDecision, Resolution};
use crate::error::{Result, project as project_error};
use crate::project::{discover_projects, load_projects};
use crate::state::DetectorState;

/// JSON shape of the detect output
#[derive(Debug, Serialize)]
struct DetectReport {
    resolution: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(flatten)]
    decision: InstallationDecision,
}

/// Run detect command
pub fn run(args: DetectArgs) -> Result<()> {
    let resolution = detect(&args)?;

    if args.json {
        let report = DetectReport {
            resolution: resolution.tag(),
            detail: resolution.detail(),
            decision: resolution.decision(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_resolution(&resolution);
    }

    Ok(())
}

/// Resolve the installation for `args`, saving state when asked to.
pub fn detect(args: &DetectArgs) -> Result<Resolution> {
    let solution = canonical_solution_path(&args.solution)?;
    let detector = PluginDetector::for_solution(&solution);
    let solution_dir = detector.solution_dir().map(Path::to_path_buf);

    let state_path = args
        .state
        .clone()
        .or_else(|| solution_dir.as_deref().map(DetectorState::default_path));
    let mut state = match &state_path {
        Some(path) => DetectorState::load(path)?,
        None => DetectorState::default(),
    };

    let previous = args
        .previous_dir
        .clone()
        .or_else(|| state.previous_installation_dir.clone())
        .map(|dir| absolutize(&dir, solution_dir.as_deref()));

    let project_paths = if args.projects.is_empty() {
        solution_dir
            .as_deref()
            .map(discover_projects)
            .unwrap_or_default()
    } else {
        args.projects.clone()
    };
    debug!("Candidate projects: {:?}", project_paths);
    let projects = load_projects(&project_paths)?;

    let resolution = detector.resolve(&projects, previous.as_deref());
    info!("Resolved plugin installation: {}", resolution.tag());

    let target = resolution.decision().target_directory;
    if args.save && !target.as_os_str().is_empty() {
        if let Some(path) = &state_path {
            state.previous_installation_dir = Some(target);
            state.save(path)?;
            info!("Saved installation directory to {}", path.display());
        }
    }

    Ok(resolution)
}

fn canonical_solution_path(solution: &Path) -> Result<PathBuf> {
    if !solution.is_file() {
        return Err(project_error::solution_not_found(solution));
    }
    dunce::canonicalize(solution).map_err(|e| project_error::read_failed(solution, e))
}

fn absolutize(dir: &Path, base: Option<&Path>) -> PathBuf {
    match base {
        Some(base) if dir.is_relative() && !dir.as_os_str().is_empty() => base.join(dir),
        _ => dir.to_path_buf(),
    }
}

fn print_resolution(resolution: &Resolution) {
    let decision = resolution.decision();
    let label = Style::new().bold();

    println!("{} {}", label.apply_to("Resolution:"), resolution.tag());
    if let Some(detail) = resolution.detail() {
        println!("{} {}", label.apply_to("Detail:"), detail);
    }
    println!(
        "{} {}",
        label.apply_to("Should install:"),
        if decision.should_install { "yes" } else { "no" }
    );
    if decision.is_sentinel() {
        println!("Nothing to do.");
        return;
    }
    if !decision.target_directory.as_os_str().is_empty() {
        println!(
            "{} {}",
            label.apply_to("Target directory:"),
            decision.target_directory.display()
        );
    }
    if !decision.version.is_zero() {
        println!("{} {}", label.apply_to("Version:"), decision.version);
    }
    if !decision.existing_files.is_empty() {
        println!("{}", label.apply_to("Existing files:"));
        for file in &decision.existing_files {
            println!("  {}", file.display());
        }
    }
}
