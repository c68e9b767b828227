use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "ducklett")]
#[command(about = "Ducklett asks you out and remembers the date", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory [default: $DUCKLETT_PATH, then the system data dir]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Log filter; DUCKLETT_LOG takes precedence
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the full-screen page (default)
    Run,

    /// Print the saved appointment
    Status {
        #[arg(long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Validate and save an appointment without the full-screen page
    Book {
        /// Date as YYYY-MM-DD
        date: String,

        /// Time as HH:MM
        time: String,
    },

    /// Forget the saved appointment
    Reset,

    /// Show or change the light/dark preference
    Theme {
        #[arg(value_enum)]
        choice: Option<ThemeChoice>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    Toggle,
}
