use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCategory {
    #[serde(rename = "pleisterwerken")]
    Plastering,
    #[serde(rename = "gyproc")]
    Drywall,
    #[serde(rename = "renovaties")]
    Renovation,
    #[serde(rename = "andere")]
    Other,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Plastering,
        ServiceCategory::Drywall,
        ServiceCategory::Renovation,
        ServiceCategory::Other,
    ];

    /// Form value posted by the site's `<select>`.
    pub fn key(self) -> &'static str {
        match self {
            ServiceCategory::Plastering => "pleisterwerken",
            ServiceCategory::Drywall => "gyproc",
            ServiceCategory::Renovation => "renovaties",
            ServiceCategory::Other => "andere",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceCategory::Plastering => "Pleisterwerken",
            ServiceCategory::Drywall => "Gyproc",
            ServiceCategory::Renovation => "Renovaties",
            ServiceCategory::Other => "Andere",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl FormField {
    pub const REQUIRED: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Service,
        FormField::Message,
    ];

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

/// A visitor's enquiry as typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactFields {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Service => &self.service,
            FormField::Message => &self.message,
        }
    }

    pub fn phone(&self) -> Option<&str> {
        let phone = self.phone.trim();
        (!phone.is_empty()).then_some(phone)
    }

    pub fn service_category(&self) -> Option<ServiceCategory> {
        ServiceCategory::from_key(&self.service)
    }

    /// Human label for the chosen service; unknown values pass through.
    pub fn service_label(&self) -> &str {
        self.service_category()
            .map(ServiceCategory::label)
            .unwrap_or(&self.service)
    }
}
