/// Represents an attribution of the imagery source, typically used for citing the imagery
/// provider or satisfying its license terms.
#[derive(Debug, Clone)]
pub struct Attribution {
    text: String,
    url: Option<String>,
}

impl Attribution {
    /// Creates a new `Attribution` with the given text and optional URL.
    pub fn new(text: impl Into<String>, url: Option<String>) -> Self {
        Self {
            text: text.into(),
            url,
        }
    }

    /// The citation or credit message.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// URL where more information about the attribution can be found.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
