#[derive(Debug, Clone, serde::Serialize)]
pub struct LeadCity(String);

impl LeadCity {
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("City is required".into());
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for LeadCity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
