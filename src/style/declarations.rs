//! Ordered CSS declaration lists.

/// A single `property: value` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property name, lower-cased
    pub property: String,

    /// Value with surrounding whitespace and `!important` removed
    pub value: String,
}

/// Resolved declarations for one element, in cascade order.
///
/// Declarations are kept in the order they were added. Lookups return the
/// last match, so later declarations override earlier ones, and callers
/// that apply declarations one by one see every occurrence in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    declarations: Vec<Declaration>,
}

impl StyleMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a declaration block such as the content of a `style` attribute.
    pub fn parse(css: &str) -> Self {
        let mut map = Self::new();
        map.extend_css(css);
        map
    }

    /// Append the declarations of `css`.
    ///
    /// Tokens without a colon or with an empty name or value are skipped.
    pub fn extend_css(&mut self, css: &str) {
        for token in css.split(';') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let mut parts = token.splitn(2, ':');
            let property = parts.next().unwrap_or("").trim();
            let Some(value) = parts.next() else {
                log::debug!("skipping declaration without colon: {:?}", token);
                continue;
            };
            let value = strip_important(value.trim());
            if property.is_empty() || value.is_empty() {
                log::debug!("skipping empty declaration: {:?}", token);
                continue;
            }
            self.set(property, value);
        }
    }

    /// Append a declaration.
    pub fn set(&mut self, property: &str, value: &str) {
        self.declarations.push(Declaration {
            property: property.trim().to_ascii_lowercase(),
            value: value.trim().to_string(),
        });
    }

    /// Append all declarations of another map.
    pub fn extend(&mut self, other: StyleMap) {
        self.declarations.extend(other.declarations);
    }

    /// Effective value of a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Check whether a property is declared.
    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Iterate over declarations in cascade order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Check if the map holds no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

fn strip_important(value: &str) -> &str {
    let lower = value.to_ascii_lowercase();
    match lower.rfind("!important") {
        Some(pos) if lower[pos..].trim() == "!important" => value[..pos].trim_end(),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_declarations() {
        let map = StyleMap::parse("Color: red; FONT-WEIGHT : bold ;");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("color"), Some("red"));
        assert_eq!(map.get("font-weight"), Some("bold"));
    }

    #[test]
    fn test_later_declaration_wins() {
        let map = StyleMap::parse("color: red; color: blue");
        assert_eq!(map.get("color"), Some("blue"));
        assert_eq!(map.iter().count(), 2);
    }

    #[test]
    fn test_malformed_declarations_skipped() {
        let map = StyleMap::parse("color red; : bold; width:; text-align: center");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("text-align"), Some("center"));
    }

    #[test]
    fn test_value_keeps_colons() {
        let map = StyleMap::parse("font-family: a:b");
        assert_eq!(map.get("font-family"), Some("a:b"));
    }

    #[test]
    fn test_important_is_stripped() {
        let map = StyleMap::parse("color: red !important");
        assert_eq!(map.get("color"), Some("red"));
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut map = StyleMap::parse("font-weight: bold");
        map.extend(StyleMap::parse("font-weight: normal"));
        assert_eq!(map.get("font-weight"), Some("normal"));
        assert!(map.contains("font-weight"));
        assert!(!map.contains("color"));
    }
}
