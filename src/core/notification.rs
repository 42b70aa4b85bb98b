//! Notification email sent to the site owner for each submission.

use super::models::{Message, OutboundEmail};

const RULE: &str = "------------------------------------------------------------";

#[must_use]
pub fn subject_for(message: &Message) -> String {
    format!("New Contact Form Submission from {}", message.name)
}

#[must_use]
pub fn body_for(message: &Message) -> String {
    format!(
        "You received a new message from your website contact form:\n\
         {RULE}\n\
         Name:    {}\n\
         Email:   {}\n\
         Message:\n\
         {}\n\
         {RULE}\n",
        message.name, message.email, message.message
    )
}

/// Builds the self-addressed notification: `sender` is both from and to.
#[must_use]
pub fn build_notification(message: &Message, sender: &str) -> OutboundEmail {
    OutboundEmail {
        from: sender.to_string(),
        to: vec![sender.to_string()],
        subject: subject_for(message),
        body_text: body_for(message),
    }
}
