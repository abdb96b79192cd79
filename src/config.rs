use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};
use crate::image::{border::BorderMode, grayscale::LumaWeights, image_encoding::ImageEncoding};
use crate::io::loading_parameters::LoadingParameters;
use crate::threshold::{window_size_with_divisor, ThresholdMethod, WINDOW_DIVISOR};
use crate::visualize::OutputSink;

pub const DEFAULT_INPUT_PATH: &str = "blurred.png";

/// Everything a single binarization run needs. Unset optional fields fall back
/// to the defaults of the chosen threshold method.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct BinarizationConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub method: ThresholdMethod,
    #[serde(default)]
    pub output_sink: OutputSink,
    #[serde(default = "default_window_divisor")]
    pub window_divisor: usize,
    /// Overrides the window derived from the image height
    #[serde(default)]
    pub window_size: Option<usize>,
    #[serde(default)]
    pub border_mode: Option<BorderMode>,
    #[serde(default)]
    pub luma_weights: Option<LumaWeights>,
    #[serde(default)]
    pub encoding: Option<ImageEncoding>,
    /// Also write the binary image as a PNG
    #[serde(default)]
    pub save_binary: Option<PathBuf>
}

fn default_window_divisor() -> usize {
    WINDOW_DIVISOR
}

impl Default for BinarizationConfig {
    fn default() -> BinarizationConfig {
        BinarizationConfig::new(DEFAULT_INPUT_PATH, ThresholdMethod::default())
    }
}

impl BinarizationConfig {
    pub fn new<P: AsRef<Path>>(input_path: P, method: ThresholdMethod) -> BinarizationConfig {
        BinarizationConfig {
            input_path: input_path.as_ref().to_path_buf(),
            method,
            output_sink: OutputSink::default(),
            window_divisor: WINDOW_DIVISOR,
            window_size: None,
            border_mode: None,
            luma_weights: None,
            encoding: None,
            save_binary: None
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<BinarizationConfig> {
        let config: BinarizationConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        window_size_with_divisor(0, self.window_divisor)?;
        if let Some(window_size) = self.window_size {
            crate::threshold::validate_window_size(window_size)?;
        }
        self.method.validate()
    }

    pub fn border_mode(&self) -> BorderMode {
        self.border_mode.unwrap_or_else(|| self.method.default_border_mode())
    }

    pub fn loading_parameters(&self) -> LoadingParameters {
        let defaults = LoadingParameters::for_method(&self.method);
        LoadingParameters {
            luma_weights: self.luma_weights.unwrap_or(defaults.luma_weights),
            encoding: self.encoding.unwrap_or(defaults.encoding)
        }
    }

    pub fn window_size_for_height(&self, height: usize) -> Result<usize> {
        match self.window_size {
            Some(window_size) => Ok(window_size),
            None => window_size_with_divisor(height, self.window_divisor)
        }
    }
}

pub fn load_config(file_path: &Path) -> Result<BinarizationConfig> {
    let contents = fs::read_to_string(file_path).map_err(|source| Error::Io { path: file_path.to_path_buf(), source })?;
    BinarizationConfig::from_yaml(&contents)
}
