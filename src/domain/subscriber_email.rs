use fake::faker::internet::en::SafeEmail;
use fake::Fake;
use validator::validate_email;

#[derive(Debug, Clone, serde::Serialize)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(email: String) -> Result<SubscriberEmail, String> {
        let is_valid_email = validate_email(&email);

        if !is_valid_email {
            return Err(format!("{} email is not valid", email));
        }

        Ok(Self(email))
    }

    /// Fresh fake identity for a probe run. SafeEmail output is always a
    /// syntactically valid address, so generation has no failure path.
    pub fn generate() -> SubscriberEmail {
        Self(SafeEmail().fake())
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
