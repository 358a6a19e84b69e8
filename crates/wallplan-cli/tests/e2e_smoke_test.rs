use std::{fs, path::PathBuf};

use tempfile::tempdir;

use wallplan_cli::{Args, run};

/// Sample plans live at the workspace root, not in the crate
fn plans_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("plans")
}

/// Collects all .toml files from a directory
fn collect_plan_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: Option<String>, output: String) -> Args {
    Args {
        input,
        output,
        config: None,
        seed: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_plans() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let valid_plans = collect_plan_files(plans_dir());

    assert!(!valid_plans.is_empty(), "No valid plans found in plans/");

    let mut failed_plans = Vec::new();

    for plan_path in &valid_plans {
        let output_filename = format!("{}.svg", plan_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        let args = args(
            Some(plan_path.to_string_lossy().to_string()),
            output_path.to_string_lossy().to_string(),
        );

        match run(&args) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("Output file should exist");
                assert!(svg.contains("<svg"), "{} is not SVG", output_path.display());
                assert!(svg.contains("data-annotation=\"wall-outline\""));
            }
            Err(e) => failed_plans.push((plan_path.clone(), e)),
        }
    }

    if !failed_plans.is_empty() {
        eprintln!("\nValid plans that failed:");
        for (path, err) in &failed_plans {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid plan(s) failed unexpectedly", failed_plans.len());
    }
}

#[test]
fn e2e_smoke_test_error_plans() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let error_plans = collect_plan_files(plans_dir().join("errors"));

    assert!(!error_plans.is_empty(), "No error plans found in plans/errors/");

    let mut unexpectedly_succeeded = Vec::new();

    for plan_path in &error_plans {
        let output_filename = format!(
            "error_{}.svg",
            plan_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = args(
            Some(plan_path.to_string_lossy().to_string()),
            output_path.to_string_lossy().to_string(),
        );

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(plan_path.clone());
        }
        assert!(
            !output_path.exists(),
            "Failed run must not write {}",
            output_path.display()
        );
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError plans that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error plan(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_seeded_example_is_reproducible() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let first_path = temp_dir.path().join("first.svg");
    let second_path = temp_dir.path().join("second.svg");

    let mut first = args(None, first_path.to_string_lossy().to_string());
    first.seed = Some(11);
    let mut second = args(None, second_path.to_string_lossy().to_string());
    second.seed = Some(11);

    run(&first).expect("Example plan should render");
    run(&second).expect("Example plan should render");

    let first_svg = fs::read_to_string(&first_path).unwrap();
    let second_svg = fs::read_to_string(&second_path).unwrap();
    assert_eq!(first_svg, second_svg);
    assert!(first_svg.contains("viewBox=\"0 0 4200 2200\""));
    assert_eq!(first_svg.matches("data-annotation=").count(), 16);
}

#[test]
fn e2e_explicit_config_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[canvas]\npadding = 50\n").unwrap();
    let output_path = temp_dir.path().join("out.svg");

    let mut args = args(
        Some(plans_dir().join("bare-wall.toml").to_string_lossy().to_string()),
        output_path.to_string_lossy().to_string(),
    );
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("Plan should render with config");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("viewBox=\"0 0 3100 2600\""));
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("out.svg");

    let args = args(
        Some(temp_dir.path().join("absent.toml").to_string_lossy().to_string()),
        output_path.to_string_lossy().to_string(),
    );

    assert!(run(&args).is_err());
    assert!(!output_path.exists());
}
