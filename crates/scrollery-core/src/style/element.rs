use super::sink::StyleSink;

/// In-memory element: inline style declarations and a class list.
///
/// Declarations keep the order in which each property was first written,
/// the way a browser keeps an element's inline `style` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementStyle {
    declarations: Vec<(String, String)>,
    classes: Vec<String>,
}

impl ElementStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element that already carries some classes
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut element = Self::new();
        for class in classes {
            element.add_class(&class.into());
        }
        element
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Render the declarations as `prop: value;` pairs
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl StyleSink for ElementStyle {
    fn set_style(&mut self, property: &str, value: &str) {
        match self.declarations.iter_mut().find(|(name, _)| name == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self
                .declarations
                .push((property.to_string(), value.to_string())),
        }
    }

    fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}
