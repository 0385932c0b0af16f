//! Payment method selection and the simulated processing sequence.

use serde::{Deserialize, Serialize};

use crate::checkout::form::{CardDetails, FieldError};

/// How the buyer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Credit or debit card.
    #[default]
    Card,
    /// Bank transfer through PSE.
    Pse,
    /// Cash on delivery.
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Pse => "pse",
            PaymentMethod::Cash => "cash",
        }
    }

    /// Label shown on the payment selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Tarjeta de crédito o débito",
            PaymentMethod::Pse => "PSE",
            PaymentMethod::Cash => "Efectivo",
        }
    }
}

/// The selected method plus whatever details it needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentSelection {
    pub method: PaymentMethod,
    /// Card fields, read when `method` is [`PaymentMethod::Card`].
    pub card: CardDetails,
    /// Bank chosen for PSE transfers.
    pub bank: Option<String>,
}

impl PaymentSelection {
    /// Validate whatever the selected method requires. Cash needs
    /// nothing.
    pub fn validate(&self) -> Vec<FieldError> {
        match self.method {
            PaymentMethod::Card => self.card.validate(),
            PaymentMethod::Pse => match self.bank.as_deref() {
                Some(bank) if !bank.trim().is_empty() => Vec::new(),
                _ => vec![FieldError {
                    field: "bank",
                    message: "Debes seleccionar un banco",
                }],
            },
            PaymentMethod::Cash => Vec::new(),
        }
    }
}

/// Stages of the simulated payment run.
///
/// There is no processor behind these: the storefront walks the stages
/// on a timer to drive the progress screen, then confirms the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessingStep {
    VerifyingInfo,
    ProcessingPayment,
    ConfirmingOrder,
}

impl ProcessingStep {
    /// All steps, in the order they run.
    pub const ALL: [ProcessingStep; 3] = [
        ProcessingStep::VerifyingInfo,
        ProcessingStep::ProcessingPayment,
        ProcessingStep::ConfirmingOrder,
    ];

    /// The step a fresh run starts on.
    pub fn first() -> Self {
        ProcessingStep::VerifyingInfo
    }

    /// Label shown on the progress screen.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProcessingStep::VerifyingInfo => "Verificando información",
            ProcessingStep::ProcessingPayment => "Procesando pago",
            ProcessingStep::ConfirmingOrder => "Confirmando pedido",
        }
    }

    /// Step number, 1-indexed.
    pub fn number(&self) -> u8 {
        match self {
            ProcessingStep::VerifyingInfo => 1,
            ProcessingStep::ProcessingPayment => 2,
            ProcessingStep::ConfirmingOrder => 3,
        }
    }

    /// How long the progress screen lingers on this stage.
    pub fn duration_ms(&self) -> u64 {
        match self {
            ProcessingStep::VerifyingInfo => 800,
            ProcessingStep::ProcessingPayment => 1200,
            ProcessingStep::ConfirmingOrder => 800,
        }
    }

    /// The following step, or `None` after the last one.
    pub fn next(&self) -> Option<ProcessingStep> {
        match self {
            ProcessingStep::VerifyingInfo => Some(ProcessingStep::ProcessingPayment),
            ProcessingStep::ProcessingPayment => Some(ProcessingStep::ConfirmingOrder),
            ProcessingStep::ConfirmingOrder => None,
        }
    }
}
