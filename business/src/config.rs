#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Absolute origin of the site API, e.g. `https://dept.example.edu`.
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    pub fn api_url(&self) -> String {
        format!("{}/api", self.api_base_url.trim_end_matches('/'))
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new("http://127.0.0.1:8080")
    }
}
