//! User-facing texts. The site is Dutch-language, so these are shown verbatim.

pub const REQUIRED_FIELDS_MISSING: &str = "Alle verplichte velden moeten ingevuld zijn.";
pub const INVALID_EMAIL: &str = "Ongeldig e-mailadres.";
pub const CAPTCHA_FAILED: &str = "Captcha verificatie mislukt. Probeer opnieuw.";
pub const SUBMISSION_SENT: &str = "Bericht succesvol verzonden!";
pub const DELIVERY_FAILED: &str =
    "Er is een fout opgetreden bij het verzenden. Probeer het later opnieuw.";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

pub const FIELD_REQUIRED: &str = "Dit veld is verplicht.";
pub const FIELD_INVALID_EMAIL: &str = "Voer een geldig e-mailadres in.";
pub const CAPTCHA_MISSING: &str = "Gelieve de captcha te voltooien.";
pub const GENERIC_ERROR: &str = "Er is een fout opgetreden.";
pub const GENERIC_RETRY_LATER: &str = "Er is een fout opgetreden. Probeer het later opnieuw.";
