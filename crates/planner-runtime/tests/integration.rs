// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: end-to-end planning pipeline.
//!
//! These tests exercise the complete flow from a profile JSON on disk →
//! action space → search → handoff record, proving that the four crates
//! compose correctly and that configuration errors abort before any
//! artifact is written.

use planner_runtime::{PlannerConfig, PlanningSession, RuntimeError};
use result_sink::{PlanRecord, ResultSink};
use std::path::{Path, PathBuf};
use window_planner::{Action, EpisodeProgress, NoProgress};

// ── Helpers ────────────────────────────────────────────────────

const E2E_PROFILE: &str = r#"{
  "io_speed": 10,
  "layer_sizes": [10, 10, 10],
  "t_compute": [5, 5, 5],
  "t_release": [2, 2, 2]
}"#;

fn write_profile(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("model_config.json");
    std::fs::write(&path, json).unwrap();
    path
}

fn config(dir: &Path, profile: PathBuf, limit: &str) -> PlannerConfig {
    PlannerConfig {
        profile_path: profile,
        result_path: dir.join("shared_offline_planning.bin"),
        memory_limit: Some(limit.into()),
        ..Default::default()
    }
}

// ── End-to-end ─────────────────────────────────────────────────

#[test]
fn e2e_three_layer_profile_selects_one_one() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(dir.path(), E2E_PROFILE);
    let cfg = config(dir.path(), profile, "25");
    let artifact = cfg.result_path.clone();

    let profiled = PlanningSession::new(cfg).load_profile().unwrap();
    assert_eq!(profiled.space().layer_max(), 2);
    assert_eq!(
        profiled.space().actions(),
        &[Action::new(0, 1), Action::new(0, 2), Action::new(1, 1)]
    );

    let sim = profiled.simulator();
    assert_eq!(sim.evaluate(0, 1), -3019.0);
    assert_eq!(sim.evaluate(0, 2), -3005.0);
    assert_eq!(sim.evaluate(1, 1), -2012.0);

    let report = profiled.search(&mut NoProgress).unwrap().commit().unwrap();
    assert_eq!(report.action, Action::new(1, 1));
    assert_eq!(report.predicted_latency_ms, 2012.0);

    let bytes = std::fs::read(&artifact).unwrap();
    assert_eq!(bytes.len(), 8);
    assert_eq!(PlanRecord::from_bytes(&bytes), Some(PlanRecord::new(1, 1)));
}

#[test]
fn e2e_progress_reported_every_fifty_episodes() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(dir.path(), E2E_PROFILE);

    let mut seen = Vec::new();
    let mut observer = |p: &EpisodeProgress| seen.push((p.episode, p.best.map(|b| b.action)));
    PlanningSession::new(config(dir.path(), profile, "25"))
        .load_profile()
        .unwrap()
        .search(&mut observer)
        .unwrap();

    assert_eq!(seen.len(), 10);
    assert_eq!(seen[0].0, 50);
    assert_eq!(seen[9].0, 500);
    assert!(seen.iter().all(|(_, best)| *best == Some(Action::new(1, 1))));
}

#[test]
fn e2e_overwrites_stale_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(dir.path(), E2E_PROFILE);
    let cfg = config(dir.path(), profile, "25");
    std::fs::write(&cfg.result_path, [0xAAu8; 16]).unwrap();
    let artifact = cfg.result_path.clone();

    PlanningSession::new(cfg)
        .load_profile()
        .unwrap()
        .search(&mut NoProgress)
        .unwrap()
        .commit()
        .unwrap();

    assert_eq!(ResultSink::new(artifact).read().unwrap(), PlanRecord::new(1, 1));
}

#[test]
fn e2e_exhaustive_matches_bandit() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(dir.path(), E2E_PROFILE);
    let cfg = PlannerConfig {
        strategy: "exhaustive".into(),
        ..config(dir.path(), profile, "25")
    };

    let report = PlanningSession::new(cfg)
        .load_profile()
        .unwrap()
        .search(&mut NoProgress)
        .unwrap()
        .commit()
        .unwrap();
    assert_eq!(report.strategy, "exhaustive");
    assert_eq!(report.action, Action::new(1, 1));
    assert_eq!(report.metrics.evaluations, 3);
}

// ── Failure paths ──────────────────────────────────────────────

#[test]
fn empty_action_space_is_a_planning_failure() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(dir.path(), E2E_PROFILE);
    let cfg = config(dir.path(), profile, "9");
    let artifact = cfg.result_path.clone();

    let planned = PlanningSession::new(cfg)
        .load_profile()
        .unwrap()
        .search(&mut NoProgress)
        .unwrap();
    assert_eq!(planned.space().layer_max(), 0);
    assert!(planned.commit().is_err());
    assert!(!artifact.exists());
}

#[test]
fn single_resident_layer_has_one_action() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(dir.path(), E2E_PROFILE);
    let report = PlanningSession::new(config(dir.path(), profile, "15"))
        .load_profile()
        .unwrap()
        .search(&mut NoProgress)
        .unwrap()
        .commit()
        .unwrap();
    assert_eq!(report.layer_max, 1);
    assert_eq!(report.action, Action::new(0, 1));
}

#[test]
fn missing_profile_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path(), dir.path().join("absent.json"), "25");
    let artifact = cfg.result_path.clone();

    let err = PlanningSession::new(cfg).load_profile().unwrap_err();
    assert!(matches!(err, RuntimeError::ProfileError(_)));
    assert!(!artifact.exists());
}

#[test]
fn malformed_profile_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(dir.path(), "{ \"io_speed\": ");
    let err = PlanningSession::new(config(dir.path(), profile, "25"))
        .load_profile()
        .unwrap_err();
    assert!(matches!(err, RuntimeError::ProfileError(_)));
}

#[test]
fn length_mismatch_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(
        dir.path(),
        r#"{"io_speed": 10, "layer_sizes": [10, 10], "t_compute": [5], "t_release": [2, 2]}"#,
    );
    let err = PlanningSession::new(config(dir.path(), profile, "25"))
        .load_profile()
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::ProfileError(cost_profile::ProfileError::LengthMismatch { .. })
    ));
}

#[test]
fn zero_io_speed_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(
        dir.path(),
        r#"{"io_speed": 0, "layer_sizes": [10], "t_compute": [5], "t_release": [2]}"#,
    );
    assert!(PlanningSession::new(config(dir.path(), profile, "25"))
        .load_profile()
        .is_err());
}

#[test]
fn missing_limit_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(dir.path(), E2E_PROFILE);
    let cfg = PlannerConfig {
        memory_limit: None,
        ..config(dir.path(), profile, "25")
    };
    assert!(matches!(
        PlanningSession::new(cfg).load_profile(),
        Err(RuntimeError::ConfigError(_))
    ));
}

#[test]
fn config_from_toml_drives_a_run() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write_profile(dir.path(), E2E_PROFILE);
    let artifact = dir.path().join("out.bin");
    let toml = format!(
        "profile_path = {:?}\nresult_path = {:?}\nmemory_limit = \"25M\"\nepisodes = 50\n",
        profile.display().to_string(),
        artifact.display().to_string(),
    );
    let cfg_path = dir.path().join("planner.toml");
    std::fs::write(&cfg_path, toml).unwrap();

    let cfg = PlannerConfig::from_file(&cfg_path).unwrap();
    let report = PlanningSession::new(cfg)
        .load_profile()
        .unwrap()
        .search(&mut NoProgress)
        .unwrap()
        .commit()
        .unwrap();
    assert_eq!(report.metrics.evaluations, 50);
    assert_eq!(ResultSink::new(artifact).read().unwrap(), PlanRecord::new(1, 1));
}
