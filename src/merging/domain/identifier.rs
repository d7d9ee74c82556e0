use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Separator between the four components of the textual identifier form
const SEPARATOR: char = ':';

/// Percent-escapes `%` and the separator so a component can sit before another
fn escape_component(component: &str) -> Cow<'_, str> {
    if !component.contains(|c| c == '%' || c == SEPARATOR) {
        return Cow::Borrowed(component);
    }
    let mut escaped = String::with_capacity(component.len() + 4);
    for c in component.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            SEPARATOR => escaped.push_str("%3A"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

fn unescape_component(component: &str) -> Result<String, String> {
    urlencoding::decode(component)
        .map(Cow::into_owned)
        .map_err(|e| format!("Invalid escape in identifier component '{}': {}", component, e))
}

/// Identifier value object naming a package or project
///
/// An identifier consists of four components: the provider (usually the
/// package manager), the namespace, the name and the version. Equality and
/// ordering are structural and lexicographic over these fields in that order.
///
/// The textual form is `provider:namespace:name:version`. It is used for
/// serialization, which lets identifiers act as map keys in both YAML and JSON.
/// A `:` or `%` inside the provider, namespace or name is written as `%3A` or
/// `%25`; the version is written verbatim and may contain `:`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    pub provider: String,
    pub namespace: String,
    pub name: String,
    pub version: String,
}

impl Identifier {
    /// Identifier with all components empty
    pub const EMPTY: Identifier = Identifier {
        provider: String::new(),
        namespace: String::new(),
        name: String::new(),
        version: String::new(),
    };

    pub fn new(
        provider: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            namespace: namespace.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            escape_component(&self.provider),
            escape_component(&self.namespace),
            escape_component(&self.name),
            self.version,
            sep = SEPARATOR
        )
    }
}

impl FromStr for Identifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(4, SEPARATOR).collect();
        match parts.as_slice() {
            [provider, namespace, name, version] => Ok(Identifier::new(
                unescape_component(provider)?,
                unescape_component(namespace)?,
                unescape_component(name)?,
                *version,
            )),
            _ => Err(format!(
                "Invalid identifier: '{}'. Expected the form 'provider:namespace:name:version'",
                s
            )),
        }
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
