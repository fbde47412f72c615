use crate::alphabet::{AlphaRange, AlphabetSize};
use crate::errors::SaxError;
use crate::normalize::NormalizationParams;
use crate::render::{SaxRenderer, SequentialRenderer, TabularRenderer};
use crate::window::WindowSize;

///
/// Raw run options, as given on the command line.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SaxOptions {
    pub alphabet_size: usize,
    pub iterate_start: Option<usize>,
    pub iterate_end: Option<usize>,
    pub window: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub force_tabular: bool,
    pub add_original_value: bool,
    pub threads: usize,
}

impl SaxOptions {
    pub fn new(alphabet_size: usize) -> Self {
        SaxOptions {
            alphabet_size,
            iterate_start: None,
            iterate_end: None,
            window: 0,
            mean: None,
            std: None,
            force_tabular: false,
            add_original_value: false,
            threads: 1,
        }
    }

    ///
    /// Check every option and build the run configuration.
    ///
    /// Missing sweep bounds fall back to the alphabet size, so giving only
    /// `iterate_start` sweeps from it up to the alphabet size.
    pub fn validate(&self) -> Result<SaxConfig, SaxError> {
        AlphabetSize::new(self.alphabet_size)?;
        let range = AlphaRange::new(
            self.iterate_start.unwrap_or(self.alphabet_size),
            self.iterate_end.unwrap_or(self.alphabet_size),
        )?;
        let params = NormalizationParams::from_options(self.mean, self.std)?;

        let layout = if range.is_single() && !self.force_tabular {
            OutputLayout::Sequential {
                alphabet: range.start(),
            }
        } else {
            OutputLayout::Tabular {
                range,
                original_values: self.add_original_value,
            }
        };

        Ok(SaxConfig {
            layout,
            window: WindowSize::forced(self.window),
            params,
            threads: self.threads.max(1),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputLayout {
    /// One symbol string per section, wrapped FASTA-style.
    Sequential { alphabet: AlphabetSize },
    /// One row per base with a symbol per alphabet size.
    Tabular {
        range: AlphaRange,
        original_values: bool,
    },
}

///
/// A validated run configuration.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SaxConfig {
    pub layout: OutputLayout,
    pub window: WindowSize,
    pub params: NormalizationParams,
    pub threads: usize,
}

impl SaxConfig {
    pub fn renderer(&self) -> Box<dyn SaxRenderer> {
        match self.layout {
            OutputLayout::Sequential { alphabet } => Box::new(SequentialRenderer { alphabet }),
            OutputLayout::Tabular {
                range,
                original_values,
            } => Box::new(TabularRenderer {
                range,
                original_values,
            }),
        }
    }
}
