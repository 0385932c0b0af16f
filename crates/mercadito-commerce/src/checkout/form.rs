//! Checkout form data and validation.

use serde::{Deserialize, Serialize};

/// A rejected form field and the message shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Form field the message belongs to.
    pub field: &'static str,
    /// Message, as the checkout page displays it.
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Buyer contact and delivery details collected at checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    /// Department (Colombian first-level division), as an ISO code.
    pub department: String,
    pub zip_code: String,
}

impl CheckoutForm {
    /// Validate the delivery fields, returning one error per rejected
    /// field. An empty result means the form can be submitted.
    ///
    /// The postal code is optional: it only pre-fills department and
    /// city, which are validated on their own.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.full_name.trim().is_empty() {
            errors.push(FieldError::new(
                "fullName",
                "El nombre completo es requerido",
            ));
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError::new("email", "El email es requerido"));
        } else if !is_valid_email(self.email.trim()) {
            errors.push(FieldError::new("email", "Email inválido"));
        }
        if self.phone.trim().is_empty() {
            errors.push(FieldError::new("phone", "El teléfono es requerido"));
        }
        if self.address.trim().is_empty() {
            errors.push(FieldError::new("address", "La dirección es requerida"));
        }
        if self.city.trim().is_empty() {
            errors.push(FieldError::new("city", "La ciudad es requerida"));
        }
        if self.department.trim().is_empty() {
            errors.push(FieldError::new(
                "department",
                "El departamento es requerido",
            ));
        }

        errors
    }
}

/// Card fields for the card payment method.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CardDetails {
    /// Number as typed, possibly with grouping spaces.
    pub number: String,
    /// Holder name as printed on the card.
    pub holder: String,
    /// Expiry in `MM/YY` form.
    pub expiry: String,
    /// Security code.
    pub cvv: String,
}

impl CardDetails {
    /// Validate the card fields.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let compact: String = self.number.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            errors.push(FieldError::new(
                "cardNumber",
                "El número de tarjeta es requerido",
            ));
        } else if compact.len() < 15 {
            errors.push(FieldError::new("cardNumber", "Número de tarjeta inválido"));
        }

        if self.holder.trim().is_empty() {
            errors.push(FieldError::new(
                "cardName",
                "El nombre del titular es requerido",
            ));
        }

        if self.expiry.is_empty() {
            errors.push(FieldError::new(
                "cardExpiry",
                "La fecha de vencimiento es requerida",
            ));
        } else if !is_valid_expiry(&self.expiry) {
            errors.push(FieldError::new("cardExpiry", "Formato inválido (MM/YY)"));
        }

        if self.cvv.is_empty() {
            errors.push(FieldError::new("cardCvv", "El CVV es requerido"));
        } else if self.cvv.len() < 3 {
            errors.push(FieldError::new("cardCvv", "CVV inválido"));
        }

        errors
    }
}

/// The storefront's email check: something before the `@`, a domain with
/// a dot, no whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && domain.split('.').all(|p| !p.is_empty())
        }
        _ => false,
    }
}

/// `MM/YY`: two digits, slash, two digits.
fn is_valid_expiry(expiry: &str) -> bool {
    let bytes = expiry.as_bytes();
    bytes.len() == 5
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'/'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit()
}

/// Normalize card number input into space-separated groups of four
/// digits: `"4111111111111111"` becomes `"4111 1111 1111 1111"`.
pub fn format_card_number(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(*c);
    }
    out
}

/// Normalize expiry input to `MM/YY`, inserting the slash once the month
/// is typed and dropping anything past four digits.
pub fn format_expiry(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).take(4).collect();
    if digits.len() < 2 {
        digits
    } else {
        format!("{}/{}", &digits[..2], &digits[2..])
    }
}

/// Strip CVV input to at most four digits.
pub fn format_cvv(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).take(4).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> CheckoutForm {
        CheckoutForm {
            full_name: "Ana María Rojas".to_string(),
            email: "ana@example.com".to_string(),
            phone: "3001234567".to_string(),
            address: "Calle 12 # 34-56".to_string(),
            city: "Bogotá".to_string(),
            department: "DC".to_string(),
            zip_code: "110111".to_string(),
        }
    }

    fn complete_card() -> CardDetails {
        CardDetails {
            number: "4111 1111 1111 1111".to_string(),
            holder: "ANA M ROJAS".to_string(),
            expiry: "12/27".to_string(),
            cvv: "123".to_string(),
        }
    }

    fn messages_for<'a>(errors: &'a [FieldError], field: &str) -> Vec<&'a str> {
        errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn complete_form_validates() {
        assert!(complete_form().validate().is_empty());
    }

    #[test]
    fn every_missing_field_is_reported() {
        let errors = CheckoutForm::default().validate();
        for field in ["fullName", "email", "phone", "address", "city", "department"] {
            assert!(
                errors.iter().any(|e| e.field == field),
                "missing error for {field}"
            );
        }
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = complete_form();
        for bad in ["ana", "ana@", "@example.com", "ana@example", "a na@example.com"] {
            form.email = bad.to_string();
            assert_eq!(
                messages_for(&form.validate(), "email"),
                vec!["Email inválido"],
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn empty_email_gets_the_required_message() {
        let mut form = complete_form();
        form.email = "  ".to_string();
        assert_eq!(
            messages_for(&form.validate(), "email"),
            vec!["El email es requerido"]
        );
    }

    #[test]
    fn complete_card_validates() {
        assert!(complete_card().validate().is_empty());
    }

    #[test]
    fn short_card_number_is_rejected() {
        let mut card = complete_card();
        card.number = "4111 1111".to_string();
        assert_eq!(
            messages_for(&card.validate(), "cardNumber"),
            vec!["Número de tarjeta inválido"]
        );
    }

    #[test]
    fn fifteen_digit_numbers_are_accepted() {
        // American Express
        let mut card = complete_card();
        card.number = "378282246310005".to_string();
        assert!(card.validate().is_empty());
    }

    #[test]
    fn expiry_must_be_mm_slash_yy() {
        let mut card = complete_card();
        for bad in ["1227", "12/2027", "1/27", "ab/cd"] {
            card.expiry = bad.to_string();
            assert_eq!(
                messages_for(&card.validate(), "cardExpiry"),
                vec!["Formato inválido (MM/YY)"],
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn short_cvv_is_rejected() {
        let mut card = complete_card();
        card.cvv = "12".to_string();
        assert_eq!(messages_for(&card.validate(), "cardCvv"), vec!["CVV inválido"]);
    }

    #[test]
    fn card_number_formatting_groups_by_four() {
        assert_eq!(
            format_card_number("4111111111111111"),
            "4111 1111 1111 1111"
        );
        assert_eq!(format_card_number("4111 11"), "4111 11");
        assert_eq!(format_card_number("41x11"), "4111 1");
    }

    #[test]
    fn expiry_formatting_inserts_the_slash() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("1227"), "12/27");
        assert_eq!(format_expiry("12/27 extra"), "12/27");
    }

    #[test]
    fn cvv_formatting_strips_and_caps() {
        assert_eq!(format_cvv("12a34"), "1234");
        assert_eq!(format_cvv("123456"), "1234");
    }
}
