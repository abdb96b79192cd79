use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use flexi_logger::Logger;
use log::info;

use adaptive_binarize::Error;
use adaptive_binarize::config::{load_config, BinarizationConfig, DEFAULT_INPUT_PATH};
use adaptive_binarize::image::border::BorderMode;
use adaptive_binarize::threshold::{ThresholdMethod, DEFAULT_GAUSSIAN_C, DEFAULT_NIBLACK_K};
use adaptive_binarize::visualize::OutputSink;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    GaussianMean,
    Niblack,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BorderArg {
    Replicate,
    Reflect,
}

impl From<BorderArg> for BorderMode {
    fn from(arg: BorderArg) -> BorderMode {
        match arg {
            BorderArg::Replicate => BorderMode::Replicate,
            BorderArg::Reflect => BorderMode::Reflect,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "adaptive_binarize")]
#[command(about = "Binarize an image with a local adaptive threshold and show it next to the original")]
#[command(version)]
struct Cli {
    /// YAML configuration file. Command line flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the input image.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Local threshold method.
    #[arg(long, value_enum)]
    method: Option<MethodArg>,

    /// Constant subtracted from the Gaussian mean, in 8-bit intensities.
    #[arg(long)]
    c: Option<f64>,

    /// Weight of the local standard deviation for Niblack.
    #[arg(long, allow_negative_numbers = true)]
    k: Option<f64>,

    /// Window size is the image height divided by this, made odd.
    #[arg(long)]
    window_divisor: Option<usize>,

    /// Explicit odd window size, skips the height based derivation.
    #[arg(long)]
    window_size: Option<usize>,

    /// Border extension used by the local statistics.
    #[arg(long, value_enum)]
    border: Option<BorderArg>,

    /// Write the side by side comparison to this PNG instead of the terminal.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Skip presenting the comparison.
    #[arg(long)]
    no_display: bool,

    /// Also write the binary image to this PNG.
    #[arg(long)]
    save_binary: Option<PathBuf>,

    /// Log level, RUST_LOG takes precedence.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn resolve_config(&self) -> Result<BinarizationConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path).wrap_err_with(|| format!("loading configuration {}", path.display()))?,
            None => BinarizationConfig::new(DEFAULT_INPUT_PATH, ThresholdMethod::default()),
        };

        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }

        config.method = match (self.method, config.method) {
            (Some(MethodArg::GaussianMean), _) => ThresholdMethod::GaussianMean { c: self.c.unwrap_or(DEFAULT_GAUSSIAN_C) },
            (Some(MethodArg::Niblack), _) => ThresholdMethod::Niblack { k: self.k.unwrap_or(DEFAULT_NIBLACK_K) },
            (None, ThresholdMethod::GaussianMean { c }) => ThresholdMethod::GaussianMean { c: self.c.unwrap_or(c) },
            (None, ThresholdMethod::Niblack { k }) => ThresholdMethod::Niblack { k: self.k.unwrap_or(k) },
        };
        match (config.method, self.c, self.k) {
            (ThresholdMethod::Niblack { .. }, Some(_), _) =>
                return Err(Error::InvalidParameter { name: "c", reason: "only applies to --method gaussian-mean".to_string() }.into()),
            (ThresholdMethod::GaussianMean { .. }, _, Some(_)) =>
                return Err(Error::InvalidParameter { name: "k", reason: "only applies to --method niblack".to_string() }.into()),
            _ => {}
        }

        if let Some(window_divisor) = self.window_divisor {
            config.window_divisor = window_divisor;
        }
        if self.window_size.is_some() {
            config.window_size = self.window_size;
        }
        if let Some(border) = self.border {
            config.border_mode = Some(border.into());
        }
        if let Some(output) = &self.output {
            config.output_sink = OutputSink::File { path: output.clone() };
        }
        if self.no_display {
            config.output_sink = OutputSink::None;
        }
        if self.save_binary.is_some() {
            config.save_binary = self.save_binary.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let _logger = Logger::try_with_env_or_str(&cli.log_level)?
        .log_to_stderr()
        .start()?;

    let config = cli.resolve_config()?;
    let result = adaptive_binarize::run(&config)
        .wrap_err_with(|| format!("binarizing {}", config.input_path.display()))?;

    info!(
        "{}: {} of {} pixels foreground",
        config.input_path.display(),
        result.binary.foreground_count(),
        result.gray.size()
    );
    Ok(())
}
