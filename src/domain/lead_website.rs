use serde::de;
use validator::ValidateUrl;

/// An absolute `http`/`https` URL.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LeadWebsite(String);

impl LeadWebsite {
    pub fn parse(s: String) -> Result<Self, String> {
        let lowercase = s.to_ascii_lowercase();
        let has_web_scheme = lowercase.starts_with("http://") || lowercase.starts_with("https://");

        if !has_web_scheme || !s.validate_url() {
            return Err(format!("website: {s} is not a valid URL."));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for LeadWebsite {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

struct LeadWebsiteVisitor;

impl de::Visitor<'_> for LeadWebsiteVisitor {
    type Value = LeadWebsite;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an http or https URL")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        LeadWebsite::parse(value.to_string()).map_err(de::Error::custom)
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        LeadWebsite::parse(value).map_err(de::Error::custom)
    }
}

impl<'de> serde::Deserialize<'de> for LeadWebsite {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_string(LeadWebsiteVisitor)
    }
}
