use tracing::{debug, error, info};

use crate::catalog::DeviceCatalog;
use crate::clipboard::{Clipboard, ClipboardError};
use crate::render::{SummaryMode, SummaryRenderer};

use super::data::OrderFormData;
use super::field::FieldName;
use super::formatter;
use super::validation::{ValidationErrors, Validator};

/// Single owner of everything the form shows.
///
/// Input handlers run one at a time against `&mut FormState`; nothing else
/// holds a reference to the record between events.
#[derive(Debug, Clone)]
pub struct FormState {
    data: OrderFormData,
    errors: ValidationErrors,
    suggestions: Vec<String>,
    summary: String,
    catalog: DeviceCatalog,
    validator: Validator,
    renderer: SummaryRenderer,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(
            DeviceCatalog::default(),
            Validator::default(),
            SummaryRenderer::default(),
        )
    }
}

impl FormState {
    pub fn new(catalog: DeviceCatalog, validator: Validator, renderer: SummaryRenderer) -> Self {
        Self {
            data: OrderFormData::default(),
            errors: ValidationErrors::default(),
            suggestions: Vec::new(),
            summary: String::new(),
            catalog,
            validator,
            renderer,
        }
    }

    pub fn data(&self) -> &OrderFormData {
        &self.data
    }

    /// Errors from the most recent submit.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Catalog entries matching the device field as last typed.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Last rendered summary; empty until a submit succeeds.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn catalog(&self) -> &DeviceCatalog {
        &self.catalog
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn renderer(&self) -> &SummaryRenderer {
        &self.renderer
    }

    /// Applies a keystroke-level change to `field` and returns the stored value.
    pub fn apply_input(&mut self, field: FieldName, raw: &str) -> &str {
        let value = formatter::format(field, raw);
        debug!(field = field.key(), value = %value, "field updated");
        self.data = self.data.with_field(field, value);

        if field == FieldName::Device {
            self.suggestions = self.catalog.filter(raw);
            debug!(
                query = raw,
                matches = self.suggestions.len(),
                "device suggestions refreshed"
            );
        }

        self.data.get(field)
    }

    /// Picks the suggestion at `index` (zero-based).
    pub fn select_suggestion(&mut self, index: usize) -> Option<&str> {
        let entry = self.suggestions.get(index)?.clone();
        Some(self.choose_device(entry))
    }

    /// Picks a catalog entry by exact, case-insensitive name.
    pub fn select_device(&mut self, name: &str) -> Option<&str> {
        let entry = self.catalog.find(name)?.to_string();
        Some(self.choose_device(entry))
    }

    fn choose_device(&mut self, entry: String) -> &str {
        debug!(device = %entry, "device selected");
        self.data = self.data.with_field(FieldName::Device, entry);
        self.suggestions.clear();
        &self.data.device
    }

    /// Validates from scratch and, when clean, renders the summary for `mode`.
    ///
    /// A rejected submit keeps the previous summary.
    pub fn submit(&mut self, mode: SummaryMode) -> Result<&str, &ValidationErrors> {
        self.errors = self.validator.validate(&self.data);
        if !self.errors.is_valid() {
            let fields: Vec<&str> = self.errors.fields().map(FieldName::key).collect();
            info!(errors = self.errors.len(), fields = ?fields, "validation failed");
            return Err(&self.errors);
        }

        self.summary = self.renderer.render(&self.data, mode);
        info!(mode = %mode, length = self.summary.len(), "summary rendered");
        Ok(&self.summary)
    }

    /// Sends the current summary to `clipboard`. Form state is unaffected
    /// either way.
    pub fn copy_summary(&self, clipboard: &mut dyn Clipboard) -> Result<(), ClipboardError> {
        match clipboard.copy(&self.summary) {
            Ok(()) => {
                info!(length = self.summary.len(), "summary copied to clipboard");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "copy failed");
                Err(err)
            }
        }
    }

    /// Swaps in new settings while keeping the typed fields and the last
    /// summary. Errors and suggestions belong to the old settings and are
    /// dropped.
    pub fn reconfigure(
        &mut self,
        catalog: DeviceCatalog,
        validator: Validator,
        renderer: SummaryRenderer,
    ) {
        self.catalog = catalog;
        self.validator = validator;
        self.renderer = renderer;
        self.errors = ValidationErrors::default();
        self.suggestions.clear();
        info!(devices = self.catalog.len(), "form reconfigured");
    }

    /// Clears every field, error, suggestion, and the summary.
    pub fn reset(&mut self) {
        self.data = OrderFormData::default();
        self.errors = ValidationErrors::default();
        self.suggestions.clear();
        self.summary.clear();
    }
}
