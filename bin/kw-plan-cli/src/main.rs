// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # kw-plan
//!
//! Command-line interface for the offline (k, w) planner.
//!
//! ## Usage
//! ```bash
//! # Turn a runtime execution log into a cost profile
//! kw-plan convert --log-path /tmp/offline_planning_log
//!
//! # Search for the best (k, w) under a 2 GB limit and hand it off
//! kw-plan plan -m 2048 -s /tmp/shared_offline_planning.bin -p ./model_offline_config/model_config.json
//!
//! # Inspect the predicted pipeline for one configuration
//! kw-plan simulate -m 2G -p ./model_offline_config/model_config.json -k 4 -w 2
//!
//! # Override or check the handoff record by hand
//! kw-plan write -k 3 -w 2 -s /tmp/shared_offline_planning.bin
//! kw-plan read
//! ```
//!
//! ## Options and defaults
//! `plan` takes the memory limit (`-m`), artifact path (`-s`) and profile
//! path (`-p`) as flags, but none of them has to be on the command line:
//! each one can come from the `--config` TOML instead. The artifact
//! defaults to `/tmp/shared_offline_planning.bin` and the profile to
//! `./model_offline_config/model_config.json`. The memory limit has no
//! default, and a run without one fails before anything is written.
//! `-c` is the TOML planner config, not the profile JSON; pass the
//! profile with `-p`.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kw-plan",
    about = "Offline planner for resident layers (k) and prefetch window (w)",
    version,
    author,
    after_help = "Note: -c/--config is a TOML planner config; the cost profile JSON is -p/--profile. \
                  -s and -p default to /tmp/shared_offline_planning.bin and \
                  ./model_offline_config/model_config.json; -m has no default."
)]
struct Cli {
    /// Path to a TOML planner configuration (explicit flags take precedence).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for the best (k, w) and write it to the shared artifact.
    Plan {
        /// Memory limit, in the unit of the layer sizes (e.g., "2048", "2G").
        #[arg(short, long)]
        memory_limit: Option<String>,

        /// Path of the shared result artifact.
        #[arg(short = 's', long)]
        shared_path: Option<PathBuf>,

        /// Path to the cost profile JSON.
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Search strategy: ucb1, exhaustive.
        #[arg(long)]
        strategy: Option<String>,

        /// Number of bandit episodes.
        #[arg(long)]
        episodes: Option<usize>,

        /// UCB1 exploration constant.
        #[arg(long)]
        exploration: Option<f64>,

        /// Print the final report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Convert an execution log into a cost profile JSON.
    Convert {
        /// Execution log to scrape.
        #[arg(long, default_value = cost_profile::log_parser::DEFAULT_LOG_PATH)]
        log_path: PathBuf,

        /// Where to write the cost profile.
        #[arg(long, default_value = cost_profile::log_parser::DEFAULT_OUTPUT_PATH)]
        output_path: PathBuf,
    },

    /// Write a (k, w) pair to the shared artifact without searching.
    Write {
        /// Number of resident layers.
        #[arg(short, allow_negative_numbers = true)]
        k: i32,

        /// Prefetch window width.
        #[arg(short, allow_negative_numbers = true)]
        w: i32,

        /// Path of the shared result artifact.
        #[arg(short = 's', long)]
        shared_path: PathBuf,
    },

    /// Read the (k, w) pair from the shared artifact.
    Read {
        /// Path of the shared result artifact.
        #[arg(short = 's', long, default_value = result_sink::DEFAULT_SHARED_PATH)]
        shared_path: PathBuf,
    },

    /// Predict pipeline timings for one action, or tabulate every action.
    Simulate {
        /// Memory limit, in the unit of the layer sizes.
        #[arg(short, long)]
        memory_limit: Option<String>,

        /// Path to the cost profile JSON.
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Number of resident layers.
        #[arg(short, requires = "w")]
        k: Option<usize>,

        /// Prefetch window width.
        #[arg(short, requires = "k")]
        w: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Plan {
            memory_limit,
            shared_path,
            profile,
            strategy,
            episodes,
            exploration,
            json,
        } => {
            let mut config = commands::load_config(cli.config.as_deref())?;
            commands::override_with(&mut config.memory_limit, memory_limit.map(Some));
            commands::override_with(&mut config.result_path, shared_path);
            commands::override_with(&mut config.profile_path, profile);
            commands::override_with(&mut config.strategy, strategy);
            commands::override_with(&mut config.episodes, episodes);
            commands::override_with(&mut config.exploration, exploration);
            commands::plan::execute(config, json)
        }
        Commands::Convert {
            log_path,
            output_path,
        } => commands::convert::execute(log_path, output_path),
        Commands::Write { k, w, shared_path } => commands::write::execute(k, w, shared_path),
        Commands::Read { shared_path } => commands::read::execute(shared_path),
        Commands::Simulate {
            memory_limit,
            profile,
            k,
            w,
        } => {
            let mut config = commands::load_config(cli.config.as_deref())?;
            commands::override_with(&mut config.memory_limit, memory_limit.map(Some));
            commands::override_with(&mut config.profile_path, profile);
            let action = k.zip(w).map(|(k, w)| window_planner::Action::new(k, w));
            commands::simulate::execute(config, action)
        }
    }
}
