//! Element tree pieces.
//!
//! The widget keeps an explicit tree of lightweight elements instead of
//! querying a global document: ids and class names are the observable
//! surface for styling and tests, and the renderer walks the same
//! structures each frame.

use tracing::error;

/// Descriptor for [`create_element`]. `tag` and `classes` are required;
/// a descriptor missing them still produces a (degraded) element.
#[derive(Debug, Default, Clone)]
pub struct ElementSpec {
    pub tag: Option<&'static str>,
    pub classes: Option<Vec<&'static str>>,
    pub id: Option<String>,
    pub html: Option<String>,
}

/// A single node: tag, class list, optional id, optional raw HTML body.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    classes: Vec<String>,
    pub id: Option<String>,
    pub html: Option<String>,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Shown unless the `invisible` class is set.
    pub fn visible(&self) -> bool {
        !self.has_class("invisible")
    }

    pub fn set_html(&mut self, html: &str) {
        self.html = Some(html.to_string());
    }
}

/// Build an element from a descriptor.
///
/// Missing required descriptor fields are logged and skipped; the
/// element is still returned so one malformed descriptor degrades a
/// single node instead of halting the whole widget.
pub fn create_element(spec: ElementSpec) -> Element {
    let required = [("tag", spec.tag.is_none()), ("classes", spec.classes.is_none())];
    for (name, absent) in required {
        if absent {
            error!("option {name} required to create this element");
        }
    }

    let mut element = Element {
        tag: spec.tag.unwrap_or("div").to_string(),
        classes: Vec::new(),
        id: spec.id,
        html: spec.html,
    };
    for class in spec.classes.unwrap_or_default() {
        element.add_class(class);
    }
    element
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_element_applies_classes_and_id() {
        let el = create_element(ElementSpec {
            tag: Some("div"),
            classes: Some(vec!["accordion-info", "invisible"]),
            id: Some("accordion-slide-0".to_string()),
            html: None,
        });
        assert_eq!(el.tag, "div");
        assert!(el.has_class("accordion-info"));
        assert!(!el.visible());
        assert_eq!(el.id.as_deref(), Some("accordion-slide-0"));
    }

    #[test]
    fn degraded_element_survives_missing_fields() {
        let el = create_element(ElementSpec::default());
        assert_eq!(el.tag, "div");
        assert!(el.visible());
        assert!(el.id.is_none());
    }

    #[test]
    fn class_list_is_a_set() {
        let mut el = create_element(ElementSpec {
            tag: Some("div"),
            classes: Some(vec!["circle", "white"]),
            ..Default::default()
        });
        el.add_class("circle");
        el.remove_class("circle");
        assert!(!el.has_class("circle"));
        assert!(el.has_class("white"));
    }
}
