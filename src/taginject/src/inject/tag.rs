use std::fmt::{Display, Formatter, Result as FmtResult};

const PROTOTYPE: &str = "prototype";

/// How the value of a binding is obtained on each resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    /// The value registered under the name is shared by every consumer.
    #[default]
    Singleton,
    /// A factory is invoked for each resolution.
    Prototype,
}

impl Policy {
    pub fn to_str(&self) -> &'static str {
        match self {
            Self::Singleton => "singleton",
            Self::Prototype => "prototype",
        }
    }
}

impl Display for Policy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_str())
    }
}

/// A parsed field annotation such as `"db"` or `"b,prototype"`.
///
/// The first comma-separated token names the binding. The policy is
/// [`Policy::Prototype`] if any later token is exactly `prototype`, and
/// [`Policy::Singleton`] otherwise. Tokens are taken literally, whitespace
/// included, and unknown ones are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    name: &'a str,
    policy: Policy,
}

impl<'a> Tag<'a> {
    pub fn new(name: &'a str, policy: Policy) -> Self {
        Self { name, policy }
    }

    /// Returns `None` when the annotation opts out of injection, i.e. when it
    /// is empty or its first token is empty.
    pub fn parse(annotation: &'a str) -> Option<Self> {
        let mut tokens = annotation.split(',');
        let name = tokens.next().filter(|name| !name.is_empty())?;
        let policy = if tokens.any(|token| token == PROTOTYPE) {
            Policy::Prototype
        } else {
            Policy::Singleton
        };
        Some(Self::new(name, policy))
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }
}

impl Display for Tag<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.policy {
            Policy::Singleton => write!(f, "{}", self.name),
            Policy::Prototype => write!(f, "{},{}", self.name, PROTOTYPE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_parse_succeeds_when_only_name_is_given() {
        let tag = Tag::parse("db").unwrap();
        assert_eq!(tag.name(), "db");
        assert_eq!(tag.policy(), Policy::Singleton);
    }

    #[test]
    fn tag_parse_succeeds_when_prototype_is_given() {
        let tag = Tag::parse("b,prototype").unwrap();
        assert_eq!(tag, Tag::new("b", Policy::Prototype));

        let tag = Tag::parse("b,lazy,prototype").unwrap();
        assert_eq!(tag, Tag::new("b", Policy::Prototype));
    }

    #[test]
    fn tag_parse_keeps_whitespace_in_tokens() {
        assert_eq!(
            Tag::parse("b, prototype").unwrap(),
            Tag::new("b", Policy::Singleton)
        );
        assert_eq!(
            Tag::parse("b,prototype ").unwrap(),
            Tag::new("b", Policy::Singleton)
        );
        assert_eq!(Tag::parse(" db").unwrap().name(), " db");
        assert_eq!(Tag::parse("  ").unwrap().name(), "  ");
    }

    #[test]
    fn tag_parse_ignores_unknown_tokens() {
        assert_eq!(
            Tag::parse("b,lazy").unwrap(),
            Tag::new("b", Policy::Singleton)
        );
        assert_eq!(
            Tag::parse("b,prototypes").unwrap(),
            Tag::new("b", Policy::Singleton)
        );
    }

    #[test]
    fn tag_parse_only_reads_policy_from_remaining_tokens() {
        assert_eq!(
            Tag::parse("prototype").unwrap(),
            Tag::new("prototype", Policy::Singleton)
        );
    }

    #[test]
    fn tag_parse_fails_when_name_is_missing() {
        assert!(Tag::parse("").is_none());
        assert!(Tag::parse(",prototype").is_none());
        assert!(Tag::parse(",").is_none());
    }

    #[test]
    fn tag_display_succeeds() {
        assert_eq!(Tag::parse("db").unwrap().to_string(), "db");
        assert_eq!(
            Tag::parse("b,other,prototype").unwrap().to_string(),
            "b,prototype"
        );
    }
}
