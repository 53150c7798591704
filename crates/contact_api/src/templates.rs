use serde::Deserialize;
use shared::domain::ContactFields;

use crate::mailer::{Mailbox, OutboundEmail};

const PHONE_NOT_GIVEN: &str = "Niet opgegeven";
const CONFIRMATION_SUBJECT: &str = "Bevestiging van uw aanvraag - Krisma Bouw";
const SITE_FOOTER: &str = "Dit bericht is verzonden via het contactformulier op krisma-bouw.be";

const BUSINESS_PHONE: &str = "0473/78 81 72";
const BUSINESS_EMAIL: &str = "info@krisma-bouw.be";
const BUSINESS_ADDRESS: &str = "Bassegemstraat 4, 8572 Kaster";
const BUSINESS_ADDRESS_LONG: &str = "Bassegemstraat 4, 8572 Kaster (Anzegem)";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MailSettings {
    /// Inbox that receives new enquiries.
    pub notify_to: String,
    pub from: String,
    pub notification_sender_name: String,
    pub confirmation_sender_name: String,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            notify_to: BUSINESS_EMAIL.into(),
            from: "noreply@krisma-bouw.be".into(),
            notification_sender_name: "Krisma Bouw Website".into(),
            confirmation_sender_name: "Krisma Bouw".into(),
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn notification_subject(fields: &ContactFields) -> String {
    format!("Nieuw contactformulier: {}", fields.service)
}

/// Enquiry forwarded to the business inbox, reply-to set to the visitor.
pub fn notification_email(settings: &MailSettings, fields: &ContactFields) -> OutboundEmail {
    OutboundEmail {
        to: Mailbox::new(&settings.notify_to),
        from: Mailbox::named(&settings.from, &settings.notification_sender_name),
        reply_to: Some(Mailbox::named(&fields.email, &fields.name)),
        subject: notification_subject(fields),
        html: notification_html(fields),
        text: Some(notification_text(fields)),
    }
}

pub fn confirmation_email(settings: &MailSettings, fields: &ContactFields) -> OutboundEmail {
    OutboundEmail {
        to: Mailbox::new(&fields.email),
        from: Mailbox::named(&settings.from, &settings.confirmation_sender_name),
        reply_to: None,
        subject: CONFIRMATION_SUBJECT.to_string(),
        html: confirmation_html(&fields.name),
        text: None,
    }
}

fn notification_html(fields: &ContactFields) -> String {
    let email = escape_html(&fields.email);
    let phone = fields
        .phone()
        .map(escape_html)
        .unwrap_or_else(|| PHONE_NOT_GIVEN.to_string());
    let message = escape_html(&fields.message).replace('\n', "<br>");
    format!(
        r#"<html>
<head>
<style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background: #1a5f7a; color: white; padding: 20px; text-align: center; }}
    .content {{ padding: 20px; background: #f9f9f9; }}
    .field {{ margin-bottom: 15px; }}
    .label {{ font-weight: bold; color: #1a5f7a; }}
    .message-box {{ background: white; padding: 15px; border-left: 4px solid #f5a623; }}
    .footer {{ padding: 15px; text-align: center; font-size: 12px; color: #666; }}
</style>
</head>
<body>
<div class="container">
    <div class="header"><h1>Nieuw Contactformulier</h1></div>
    <div class="content">
        <div class="field"><span class="label">Naam:</span> {name}</div>
        <div class="field"><span class="label">E-mail:</span> <a href="mailto:{email}">{email}</a></div>
        <div class="field"><span class="label">Telefoon:</span> {phone}</div>
        <div class="field"><span class="label">Dienst:</span> {service}</div>
        <div class="field">
            <span class="label">Bericht:</span>
            <div class="message-box">{message}</div>
        </div>
    </div>
    <div class="footer"><p>{footer}</p></div>
</div>
</body>
</html>
"#,
        name = escape_html(&fields.name),
        service = escape_html(fields.service_label()),
        footer = SITE_FOOTER,
    )
}

fn notification_text(fields: &ContactFields) -> String {
    format!(
        "Nieuw Contactformulier - Krisma Bouw\n\
         \n\
         Naam: {name}\n\
         E-mail: {email}\n\
         Telefoon: {phone}\n\
         Dienst: {service}\n\
         \n\
         Bericht:\n\
         {message}\n\
         \n\
         ---\n\
         {footer}\n",
        name = fields.name,
        email = fields.email,
        phone = fields.phone().unwrap_or(PHONE_NOT_GIVEN),
        service = fields.service_label(),
        message = fields.message,
        footer = SITE_FOOTER,
    )
}

fn confirmation_html(name: &str) -> String {
    format!(
        r#"<html>
<head>
<style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background: #1a5f7a; color: white; padding: 30px; text-align: center; }}
    .header h1 {{ margin: 0; font-size: 24px; }}
    .content {{ padding: 30px; background: #ffffff; }}
    .footer {{ padding: 20px; text-align: center; font-size: 12px; color: #666; background: #f5f5f5; }}
    .contact-info {{ background: #f9f9f9; padding: 15px; border-radius: 8px; margin-top: 20px; }}
</style>
</head>
<body>
<div class="container">
    <div class="header"><h1>KRISMA BOUW</h1></div>
    <div class="content">
        <p>Beste {name},</p>
        <p>Bedankt voor uw bericht! Wij hebben uw aanvraag goed ontvangen en zullen zo snel mogelijk contact met u opnemen.</p>
        <p>Heeft u dringende vragen? Neem dan gerust telefonisch contact met ons op.</p>
        <div class="contact-info">
            <p><strong>Telefoon:</strong> {phone}</p>
            <p><strong>E-mail:</strong> {email}</p>
            <p><strong>Adres:</strong> {address}</p>
        </div>
        <p>Met vriendelijke groeten,<br><strong>Team Krisma Bouw</strong></p>
    </div>
    <div class="footer">
        <p>Krisma Bouw - Erkend aannemer - Lid Confederatie Bouw</p>
        <p>{address_long}</p>
    </div>
</div>
</body>
</html>
"#,
        name = escape_html(name),
        phone = BUSINESS_PHONE,
        email = BUSINESS_EMAIL,
        address = BUSINESS_ADDRESS,
        address_long = BUSINESS_ADDRESS_LONG,
    )
}

#[cfg(test)]
#[path = "tests/templates_tests.rs"]
mod tests;
