//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Terminal emotion journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Journal directory (default: MOODLOG_ROOT, then the nearest .moodlog upwards, then .)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Choose language and record mode (first run)
    Setup {
        /// Interface language (zh, en)
        #[arg(short, long)]
        language: Option<String>,

        /// Record mode (festinger)
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Show settings, onboarding progress and record count
    Status,

    /// Record how you feel right now
    Record {
        /// Emotion (happy, sad, angry, calm, anxious, excited, frustrated, peaceful)
        emotion: String,

        /// Intensity from 1 (mild) to 10 (intense)
        #[arg(short, long, allow_negative_numbers = true)]
        intensity: i64,

        /// What happened (optional)
        #[arg(short, long, default_value = "")]
        trigger: String,
    },

    /// Show today's emotional track
    Today,

    /// Show all records grouped by day
    Past,

    /// Change the interface language
    Language {
        /// Language code (zh, en)
        code: String,
    },

    /// List the emotions you can record
    Emotions,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
