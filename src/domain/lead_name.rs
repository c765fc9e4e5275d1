#[derive(Debug, Clone, serde::Serialize)]
pub struct LeadName(String);

impl LeadName {
    /// Accepts any name that is not blank once surrounding whitespace is ignored.
    /// The value is stored as submitted.
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("Full name is required".into());
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for LeadName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
