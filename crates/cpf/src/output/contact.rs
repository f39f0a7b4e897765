//! Contact form output formatting.

use cpf_content::contact::ContactReceipt;
use owo_colors::OwoColorize;

/// Formats a submission receipt as JSON.
pub fn format_receipt_json(receipt: &ContactReceipt) -> Result<String, serde_json::Error> {
    let output = serde_json::json!({
        "status": "sent",
        "receipt": receipt,
    });
    serde_json::to_string_pretty(&output)
}

/// Formats a submission receipt for the terminal.
pub fn format_receipt(receipt: &ContactReceipt, use_colors: bool) -> String {
    let headline = "Message sent. We will get back to you soon.";
    let mut output = if use_colors {
        format!("{}\n", headline.green())
    } else {
        format!("{}\n", headline)
    };
    output.push_str(&format!("Reference: {}\n", receipt.id));
    output.push_str(&format!("To: {}\n", receipt.recipient));
    output.push_str(&format!(
        "Sent: {}\n",
        receipt.submitted_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn receipt() -> ContactReceipt {
        ContactReceipt {
            id: Uuid::nil(),
            recipient: "contacto@cpf.com.py".to_string(),
            sender: "ana@example.com".to_string(),
            submitted_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_format_receipt_plain() {
        let output = format_receipt(&receipt(), false);
        assert_eq!(
            output,
            "Message sent. We will get back to you soon.\n\
             Reference: 00000000-0000-0000-0000-000000000000\n\
             To: contacto@cpf.com.py\n\
             Sent: 2024-06-01 12:30 UTC\n"
        );
    }

    #[test]
    fn test_format_receipt_json() {
        let json = format_receipt_json(&receipt()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "sent");
        assert_eq!(value["receipt"]["sender"], "ana@example.com");
        assert_eq!(value["receipt"]["id"], "00000000-0000-0000-0000-000000000000");
    }
}
