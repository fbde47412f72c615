use crate::errors::RegionError;
use crate::models::Region;

///
/// Per-base signal values over a [Region]. `values[i]` belongs to base `region.start + i`.
/// Bases without data are carried as `NaN`.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub region: Region,
    pub values: Vec<f64>,
}

impl Signal {
    pub fn new(region: Region, values: Vec<f64>) -> Result<Self, RegionError> {
        if values.len() != region.width() as usize {
            return Err(RegionError::SignalLengthMismatch {
                width: region.width(),
                values: values.len(),
            });
        }
        Ok(Signal { region, values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    ///
    /// Split the signal into maximal runs of finite values.
    ///
    /// Each run is a [Section] borrowing its values from this signal, with a region
    /// covering exactly the run, in the order the runs appear. A signal with no data
    /// yields no sections.
    ///
    pub fn continuous_sections(&self) -> Vec<Section<'_>> {
        let mut sections = Vec::new();
        let mut run_start: Option<usize> = None;

        for (i, value) in self.values.iter().enumerate() {
            match (value.is_finite(), run_start) {
                (true, None) => run_start = Some(i),
                (false, Some(start)) => {
                    sections.push(self.slice(start, i));
                    run_start = None;
                }
                _ => {}
            }
        }

        if let Some(start) = run_start {
            sections.push(self.slice(start, self.values.len()));
        }

        sections
    }

    fn slice(&self, from: usize, to: usize) -> Section<'_> {
        Section {
            region: Region {
                chr: self.region.chr.clone(),
                start: self.region.start + from as u32,
                end: self.region.start + to as u32,
            },
            values: &self.values[from..to],
        }
    }
}

///
/// A run of finite values inside a [Signal].
///
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub region: Region,
    pub values: &'a [f64],
}

impl Section<'_> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
