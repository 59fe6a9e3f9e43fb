use anthro_model::{EngineOptions, GrowthAssessment, MeasurementInput};
use anthro_standards::ReferenceStore;
use tracing::debug_span;

use crate::classify::classify;
use crate::error::ZScoreError;
use crate::selector::compute_all;

/// Entry point for evaluating measurements.
///
/// Holds a shared reference to immutable reference data, so one engine can
/// be copied freely and used from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct GrowthEngine<'a> {
    store: &'a ReferenceStore,
    options: EngineOptions,
}

impl GrowthEngine<'static> {
    /// Engine over the embedded WHO tables with default options.
    pub fn builtin() -> Result<Self, ZScoreError> {
        Ok(Self::with_store(
            ReferenceStore::builtin()?,
            EngineOptions::default(),
        ))
    }
}

impl<'a> GrowthEngine<'a> {
    pub fn with_store(store: &'a ReferenceStore, options: EngineOptions) -> Self {
        Self { store, options }
    }

    #[must_use]
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn store(&self) -> &'a ReferenceStore {
        self.store
    }

    /// Score and classify one measurement.
    ///
    /// The result is best-effort: indicators that do not apply are `None`,
    /// indicators with invalid input are `None` and listed in
    /// `rejections`.
    ///
    /// # Errors
    ///
    /// Fails only when reference data is missing for the child's sex.
    pub fn evaluate(&self, input: &MeasurementInput) -> Result<GrowthAssessment, ZScoreError> {
        let _span = debug_span!("evaluate", sex = %input.sex).entered();
        let computed = compute_all(self.store, input, &self.options)?;
        let classification = classify(&computed.z_scores);
        Ok(GrowthAssessment {
            z_scores: computed.z_scores,
            classification,
            rejections: computed.rejections,
        })
    }
}
