use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Subcommand)]
pub(crate) enum ValidateCommand {
    /// Validate every metadata.json against the schema and record-level rules.
    Json {
        #[arg(long)]
        servers_dir: PathBuf,
        #[arg(long)]
        schema: PathBuf,
        #[arg(long)]
        inactive_file: Option<PathBuf>,
    },
    /// Validate logo/background/banner/wordmark files against the media rules.
    Media {
        #[arg(long)]
        servers_dir: PathBuf,
        #[arg(long)]
        inactive_file: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConvertCommand {
    /// Convert every server's media into the published WebP variants.
    Media {
        #[arg(long)]
        servers_dir: PathBuf,
        #[arg(long)]
        logos_out: PathBuf,
        #[arg(long)]
        backgrounds_out: PathBuf,
        #[arg(long)]
        banners_out: PathBuf,
        /// Extra square logo sizes; may be repeated.
        #[arg(long = "size", default_values_t = [256u32])]
        sizes: Vec<u32>,
        #[arg(long, default_value_t = false)]
        lossless: bool,
        #[arg(long)]
        inactive_file: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub(crate) enum IndexCommand {
    /// Scan the servers directory and write the aggregate index file.
    Write {
        #[arg(long)]
        servers_dir: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = IndexFormat::Json)]
        format: IndexFormat,
        #[arg(long, default_value_t = false)]
        include_inactive: bool,
        #[arg(long, default_value_t = false)]
        pretty: bool,
        #[arg(long)]
        inactive_file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum IndexFormat {
    Json,
    Csv,
}

impl IndexFormat {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}
