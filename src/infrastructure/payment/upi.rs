//! UPI deep link and QR image generation
//!
//! Nothing is sent to a payment provider. The customer scans the QR with a
//! UPI app, and the order is marked paid on confirmation.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{ImageEncoder, Luma};
use qrcode::QrCode;
use serde::{Deserialize, Serialize};

use crate::shared::errors::InfraError;

/// Payee details shown in the UPI app
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpiConfig {
    /// Virtual payment address, e.g. "swiftcafe@oksbi"
    pub upi_id: String,
    pub payee_name: String,
    pub currency: String,
}

impl Default for UpiConfig {
    fn default() -> Self {
        Self {
            upi_id: "swiftcafe@oksbi".to_string(),
            payee_name: "Swift Cafe".to_string(),
            currency: "INR".to_string(),
        }
    }
}

/// A payment request for a fixed amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpiPayment {
    pub upi_uri: String,
    /// `data:image/png;base64,...`
    pub qr_link: String,
}

impl UpiConfig {
    /// `upi://pay?pa=<id>&pn=<name>&am=<amount>&cu=<currency>`
    pub fn payment_uri(&self, amount: i64) -> String {
        format!(
            "upi://pay?pa={}&pn={}&am={}&cu={}",
            self.upi_id,
            urlencoding::encode(&self.payee_name),
            amount,
            self.currency
        )
    }

    pub fn payment(&self, amount: i64) -> Result<UpiPayment, InfraError> {
        let upi_uri = self.payment_uri(amount);
        let qr_link = qr_data_uri(&upi_uri)?;
        Ok(UpiPayment { upi_uri, qr_link })
    }
}

/// Render `data` as a QR code PNG and wrap it in a data URI
pub fn qr_data_uri(data: &str) -> Result<String, InfraError> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| InfraError::Qr(e.to_string()))?;

    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(8, 8)
        .quiet_zone(true)
        .build();

    let mut png: Vec<u8> = Vec::new();
    image::codecs::png::PngEncoder::new(&mut png)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::L8,
        )
        .map_err(|e| InfraError::Qr(e.to_string()))?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn payment_uri_encodes_payee_name() {
        let cfg = UpiConfig::default();
        assert_eq!(
            cfg.payment_uri(500),
            "upi://pay?pa=swiftcafe@oksbi&pn=Swift%20Cafe&am=500&cu=INR"
        );
    }

    #[test]
    fn qr_is_png_data_uri() {
        let payment = UpiConfig::default().payment(350).unwrap();
        assert!(payment.upi_uri.contains("am=350"));

        let b64 = payment
            .qr_link
            .strip_prefix("data:image/png;base64,")
            .expect("data uri prefix");
        let bytes = STANDARD.decode(b64).unwrap();
        assert!(bytes.starts_with(PNG_MAGIC));
    }
}
