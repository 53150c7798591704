use super::*;

fn fields() -> ContactFields {
    ContactFields {
        name: "Jan <Peeters>".into(),
        email: "jan@example.be".into(),
        phone: String::new(),
        service: "pleisterwerken".into(),
        message: "Lijn één\nLijn \"twee\"".into(),
    }
}

#[test]
fn escapes_the_five_html_specials() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
    );
    assert_eq!(escape_html(""), "");
}

#[test]
fn notification_goes_to_business_with_visitor_reply_to() {
    let settings = MailSettings::default();
    let email = notification_email(&settings, &fields());

    assert_eq!(email.to.email, settings.notify_to);
    assert_eq!(email.from.name.as_deref(), Some("Krisma Bouw Website"));
    assert_eq!(
        email.reply_to,
        Some(Mailbox::named("jan@example.be", "Jan <Peeters>"))
    );
    assert_eq!(email.subject, "Nieuw contactformulier: pleisterwerken");
}

#[test]
fn notification_html_escapes_and_breaks_lines() {
    let email = notification_email(&MailSettings::default(), &fields());

    assert!(email.html.contains("Jan &lt;Peeters&gt;"));
    assert!(!email.html.contains("Jan <Peeters>"));
    assert!(email.html.contains("Lijn één<br>Lijn &quot;twee&quot;"));
    assert!(email.html.contains("<span class=\"label\">Dienst:</span> Pleisterwerken"));
    assert!(email.html.contains("Niet opgegeven"));
}

#[test]
fn notification_text_is_unescaped() {
    let mut fields = fields();
    fields.phone = "0470 12 34 56".into();
    fields.service = "dakwerken".into();
    let text = notification_email(&MailSettings::default(), &fields)
        .text
        .expect("plain text part");

    assert!(text.contains("Naam: Jan <Peeters>\n"));
    assert!(text.contains("Telefoon: 0470 12 34 56\n"));
    assert!(text.contains("Dienst: dakwerken\n"));
    assert!(text.contains("Bericht:\nLijn één\nLijn \"twee\"\n"));
}

#[test]
fn confirmation_addresses_visitor_by_name() {
    let settings = MailSettings::default();
    let email = confirmation_email(&settings, &fields());

    assert_eq!(email.to, Mailbox::new("jan@example.be"));
    assert_eq!(email.from.name.as_deref(), Some("Krisma Bouw"));
    assert_eq!(email.subject, "Bevestiging van uw aanvraag - Krisma Bouw");
    assert!(email.html.contains("Beste Jan &lt;Peeters&gt;,"));
    assert!(email.text.is_none());
    assert!(email.reply_to.is_none());
}
