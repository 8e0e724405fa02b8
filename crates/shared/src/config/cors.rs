use std::fmt;

const WILDCARD: &str = "*";

/// Origins permitted to call the API cross-origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedOrigins {
    origins: Vec<String>,
}

impl AllowedOrigins {
    /// Parses a comma-separated list such as `https://a.com,https://b.com`.
    pub fn parse(raw: &str) -> Self {
        let origins = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Self { origins }
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn is_wildcard(&self) -> bool {
        self.origins.iter().any(|origin| origin == WILDCARD)
    }

    /// A request without an `Origin` header is not a browser cross-origin
    /// call and always passes.
    pub fn allows(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.is_wildcard() || self.origins.iter().any(|o| o == origin),
        }
    }
}

impl fmt::Display for AllowedOrigins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.origins.join(", "))
    }
}
