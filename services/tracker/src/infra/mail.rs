use anyhow::anyhow;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::domain::repository::Mailer;
use crate::error::TrackerError;

/// Mail transport speaking to a JSON mail API (single POST endpoint,
/// bearer-token auth). The transport owns delivery entirely; the service
/// hands it a message and reports the outcome once, without retries.
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

#[derive(Serialize)]
struct Attachment {
    filename: String,
    content: String,
    content_type: String,
}

#[derive(Serialize)]
struct OutboundMessage {
    from: String,
    to: String,
    subject: String,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachments: Option<Vec<Attachment>>,
}

impl HttpMailer {
    pub fn new(client: reqwest::Client, api_url: String, api_key: String, from: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
            from,
        }
    }

    async fn post(&self, message: &OutboundMessage) -> Result<(), TrackerError> {
        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await
            .map_err(|e| TrackerError::Transport(anyhow!(e)))?;
        resp.error_for_status()
            .map_err(|e| TrackerError::Transport(anyhow!(e)))?;
        Ok(())
    }
}

impl Mailer for HttpMailer {
    async fn send_code(&self, to: &str, code: &str) -> Result<(), TrackerError> {
        let message = OutboundMessage {
            from: self.from.clone(),
            to: to.to_owned(),
            subject: "Your login code".to_owned(),
            text: format!("Your one-time login code is {code}. It expires in 5 minutes."),
            attachments: None,
        };
        self.post(&message).await
    }

    async fn send_report(&self, to: &str, pdf: &[u8]) -> Result<(), TrackerError> {
        let message = OutboundMessage {
            from: self.from.clone(),
            to: to.to_owned(),
            subject: "Your expense report".to_owned(),
            text: "Your expense report is attached as a PDF.".to_owned(),
            attachments: Some(vec![Attachment {
                filename: "expenses.pdf".to_owned(),
                content: STANDARD.encode(pdf),
                content_type: "application/pdf".to_owned(),
            }]),
        };
        self.post(&message).await
    }
}
