use std::fmt;

// contact form
//
// submission is simulated: a valid form is acknowledged and cleared, an invalid one is
// rejected untouched.  nothing leaves the page

pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields.";
pub const CONFIRMATION_MESSAGE: &str =
    "Thank you for your message! We will contact you within 24 hours.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Service,
    Message,
}

impl ContactField {
    pub const REQUIRED: [ContactField; 4] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Message,
    ];

    // element id in the rendered form
    pub fn id(self) -> &'static str {
        match self {
            ContactField::FirstName => "firstName",
            ContactField::LastName => "lastName",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Service => "service",
            ContactField::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactError {
    MissingFields(Vec<ContactField>),
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingFields(_) => f.write_str(VALIDATION_MESSAGE),
        }
    }
}

impl std::error::Error for ContactError {}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Service => &self.service,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Service => &mut self.service,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    // required fields only need to be non-empty; whitespace counts as an answer
    pub fn validate(&self) -> Result<(), ContactError> {
        let missing: Vec<ContactField> = ContactField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContactError::MissingFields(missing))
        }
    }

    // validate, and on success clear every field
    //
    // the returned message is what the user is shown in either case
    pub fn submit(&mut self) -> Result<&'static str, ContactError> {
        self.validate()?;
        *self = ContactForm::default();
        Ok(CONFIRMATION_MESSAGE)
    }
}
