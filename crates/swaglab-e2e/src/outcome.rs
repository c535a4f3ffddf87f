//! Typed outcomes for interactions that are expected to break.
//!
//! Two of the provisioned accounts ship intentionally broken cart behavior.
//! Those flows don't fail the test and don't swallow errors into log noise:
//! the tolerant entry points return a [`CartOutcome`] so tests assert the
//! defect explicitly, while genuinely unexpected failures still propagate as
//! errors.

/// The result of a cart interaction attempted under a defect-tolerant flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOutcome {
    /// The interaction took effect; the UI reflects the new cart state.
    Applied,
    /// The interaction was ignored by the app — the documented defect for
    /// this account/product pair.
    KnownDefect {
        /// What was observed instead of the expected state change.
        detail: String,
    },
}

impl CartOutcome {
    /// True when the interaction took effect.
    #[must_use]
    pub fn applied(&self) -> bool {
        matches!(self, CartOutcome::Applied)
    }

    /// Builds the defect case.
    #[must_use]
    pub fn known_defect(detail: impl Into<String>) -> Self {
        CartOutcome::KnownDefect {
            detail: detail.into(),
        }
    }
}
