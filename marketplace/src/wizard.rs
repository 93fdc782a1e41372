//! Create-listing aggregator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wizard page owns one `ListingWizard`. Sections report slices through
//! [`ListingWizard::update_form_data`]; the submit bar reads `is_submitting`
//! and `error`; the page drives the network call between
//! [`ListingWizard::begin_submit`] and [`ListingWizard::finish_submit`].

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use crate::draft::{ListingDraft, SectionSlice};
use crate::section::{SectionExpansion, SectionKey};

/// Sections that must have reported before the listing can be submitted.
pub const REQUIRED_SECTIONS: [SectionKey; 3] = [SectionKey::Basic, SectionKey::Location, SectionKey::Pricing];

/// Why a submission could not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("A submission is already in progress")]
    AlreadySubmitting,
    #[error("Please complete the {} section before submitting", .0.label())]
    MissingSection(SectionKey),
}

/// Canonical in-progress listing plus wizard chrome state.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingWizard {
    draft: ListingDraft,
    expansion: SectionExpansion,
    is_submitting: bool,
    error: Option<String>,
}

impl Default for ListingWizard {
    fn default() -> Self {
        Self {
            draft: ListingDraft::default(),
            expansion: SectionExpansion::with_expanded(SectionKey::Basic),
            is_submitting: false,
            error: None,
        }
    }
}

impl ListingWizard {
    #[must_use]
    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_expanded(&self, key: SectionKey) -> bool {
        self.expansion.is_expanded(key)
    }

    /// Merge one section's report into the draft.
    pub fn update_form_data(&mut self, slice: SectionSlice) {
        self.draft.merge(slice);
    }

    /// Flip one section's expansion. Returns the new state.
    pub fn toggle_section(&mut self, key: SectionKey) -> bool {
        self.expansion.toggle(key)
    }

    /// Number of sections that have reported at least once.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.draft.submitted_sections().len()
    }

    /// Start the final submission and hand back the request body.
    ///
    /// # Errors
    ///
    /// Fails if a submission is already running or a required section has
    /// not reported. A missing section is also recorded as the wizard error.
    pub fn begin_submit(&mut self) -> Result<ListingDraft, SubmitError> {
        if self.is_submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        if let Some(missing) = REQUIRED_SECTIONS
            .into_iter()
            .find(|key| !self.draft.is_submitted(*key))
        {
            let err = SubmitError::MissingSection(missing);
            self.error = Some(err.to_string());
            return Err(err);
        }
        self.error = None;
        self.is_submitting = true;
        Ok(self.draft.clone())
    }

    /// Record the outcome of the create-listing call.
    ///
    /// Success resets the draft; failure keeps it and surfaces the message.
    pub fn finish_submit(&mut self, result: Result<(), String>) {
        self.is_submitting = false;
        match result {
            Ok(()) => {
                self.draft.reset();
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Discard everything and start over.
    pub fn abandon(&mut self) {
        *self = Self::default();
    }
}
