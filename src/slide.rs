use serde::Deserialize;

/// A title/content pair shown by the carousel. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slide {
    title: String,
    content: String,
}

impl Slide {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_accessors() {
        let slide = Slide::new("Docker Kubernetes", "Containers and clusters");
        assert_eq!(slide.title(), "Docker Kubernetes");
        assert_eq!(slide.content(), "Containers and clusters");
    }

    #[test]
    fn test_slide_from_toml_table() {
        let slide: Slide = toml::from_str("title = \"A\"\ncontent = \"B\"").unwrap();
        assert_eq!(slide, Slide::new("A", "B"));
    }
}
