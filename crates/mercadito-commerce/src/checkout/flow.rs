//! Checkout state machine.

use serde::{Deserialize, Serialize};

use crate::checkout::form::{CheckoutForm, FieldError};
use crate::checkout::payment::{PaymentSelection, ProcessingStep};

/// Where the checkout currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CheckoutStage {
    /// Buyer is filling the form.
    #[default]
    Editing,
    /// Simulated processing is running; holds the current step.
    Processing(ProcessingStep),
    /// Order confirmed. The cart should be cleared at this point.
    Complete,
}

/// Drives a checkout from form entry to confirmation.
///
/// Like the cart, the machine is total: out-of-order calls are ignored
/// instead of failing. The only rejection it knows is a form that does
/// not validate, reported back as field errors so the page can render
/// them.
///
/// ```rust,ignore
/// let mut flow = CheckoutFlow::new();
/// flow.form = form;
/// flow.payment = payment;
///
/// flow.submit()?;
/// while let CheckoutStage::Processing(step) = flow.stage() {
///     sleep(Duration::from_millis(step.duration_ms()));
///     flow.advance();
/// }
/// cart.clear();
/// ```
#[derive(Debug, Clone, Default)]
pub struct CheckoutFlow {
    /// Delivery details.
    pub form: CheckoutForm,
    /// Payment method and its details.
    pub payment: PaymentSelection,
    stage: CheckoutStage,
}

impl CheckoutFlow {
    /// A fresh checkout in the editing stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current stage.
    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// Validate the form and enter processing.
    ///
    /// On rejection the stage stays [`CheckoutStage::Editing`] and every
    /// field error is returned for display. Submitting outside the
    /// editing stage is a no-op.
    pub fn submit(&mut self) -> Result<(), Vec<FieldError>> {
        if self.stage() != CheckoutStage::Editing {
            return Ok(());
        }

        let mut errors = self.form.validate();
        errors.extend(self.payment.validate());
        if !errors.is_empty() {
            return Err(errors);
        }

        self.stage = CheckoutStage::Processing(ProcessingStep::first());
        Ok(())
    }

    /// Move the simulated run one step forward.
    ///
    /// After the last step the stage becomes [`CheckoutStage::Complete`].
    /// Outside processing this is a no-op.
    pub fn advance(&mut self) -> CheckoutStage {
        if let CheckoutStage::Processing(step) = self.stage {
            self.stage = match step.next() {
                Some(next) => CheckoutStage::Processing(next),
                None => CheckoutStage::Complete,
            };
        }
        self.stage
    }

    /// Whether the order was confirmed.
    pub fn is_complete(&self) -> bool {
        self.stage() == CheckoutStage::Complete
    }

    /// Progress through the simulated run, for the progress bar.
    pub fn progress_percent(&self) -> u8 {
        let total = ProcessingStep::ALL.len() as u32;
        match self.stage() {
            CheckoutStage::Editing => 0,
            CheckoutStage::Processing(step) => ((step.number() as u32 * 100) / (total + 1)) as u8,
            CheckoutStage::Complete => 100,
        }
    }
}
