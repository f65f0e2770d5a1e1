//! Identity Module
//!
//! Abstractions over the resource names supplied by a discovery layer, plus
//! the concrete `ObjectName`/`ObjectInstance` pair used by most drivers.

use std::fmt::{self, Debug};
use std::hash::Hash;
use std::str::FromStr;

use crate::error::{IdentityError, Result};

// == Resource Identity ==
/// A comparable name for one managed resource.
///
/// Two identities are the same cache key iff they compare equal.
pub trait ResourceIdentity: Eq + Hash + Clone + Debug + Send + Sync {
    /// The `key=value,...` portion of the name.
    fn key_property_list_string(&self) -> &str;
}

// == Resource Instance ==
/// A discovered resource handle that exposes its identity.
pub trait ResourceInstance {
    type Identity: ResourceIdentity;

    fn identity(&self) -> &Self::Identity;
}

// == Object Name ==
/// A `domain:key=value,...` resource name.
///
/// Equality and hashing use the name exactly as supplied, so the key property
/// order is part of the identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectName {
    name: String,
    /// Byte offset of the `:` separating domain from key properties
    separator: usize,
}

impl ObjectName {
    // == Constructor ==
    /// Builds an object name, splitting at the first `:`.
    ///
    /// Wildcards in the domain, or a key property list of `*` or ending in
    /// `,*`, make the name a pattern and are rejected. The key property list
    /// itself is not validated here; malformed lists
    /// degrade to partial results when parsed.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let Some(separator) = name.find(':') else {
            return Err(IdentityError::MissingDomainSeparator(name));
        };
        if name[..separator].contains(['*', '?']) {
            return Err(IdentityError::Pattern(name));
        }
        if separator + 1 == name.len() {
            return Err(IdentityError::EmptyKeyPropertyList(name));
        }
        let properties = &name[separator + 1..];
        if properties == "*" || properties.ends_with(",*") {
            return Err(IdentityError::Pattern(name));
        }
        Ok(Self { name, separator })
    }

    pub fn domain(&self) -> &str {
        &self.name[..self.separator]
    }

    pub fn key_property_list_string(&self) -> &str {
        &self.name[self.separator + 1..]
    }

    /// The full name exactly as supplied. Identity is textual, so key order
    /// matters: `d:a=1,b=2` and `d:b=2,a=1` are different names.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl ResourceIdentity for ObjectName {
    fn key_property_list_string(&self) -> &str {
        ObjectName::key_property_list_string(self)
    }
}

impl FromStr for ObjectName {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// == Object Instance ==
/// A registered resource: its name and the class implementing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectInstance {
    name: ObjectName,
    class_name: String,
}

impl ObjectInstance {
    pub fn new(name: ObjectName, class_name: impl Into<String>) -> Self {
        Self {
            name,
            class_name: class_name.into(),
        }
    }

    pub fn object_name(&self) -> &ObjectName {
        &self.name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

impl ResourceInstance for ObjectInstance {
    type Identity = ObjectName;

    fn identity(&self) -> &ObjectName {
        &self.name
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_name_split() {
        let name = ObjectName::new("java.lang:type=Memory").unwrap();
        assert_eq!(name.domain(), "java.lang");
        assert_eq!(name.key_property_list_string(), "type=Memory");
        assert_eq!(name.as_str(), "java.lang:type=Memory");
    }

    #[test]
    fn test_object_name_splits_at_first_colon() {
        let name: ObjectName = "d:k=\"a:b\"".parse().unwrap();
        assert_eq!(name.domain(), "d");
        assert_eq!(name.key_property_list_string(), "k=\"a:b\"");
    }

    #[test]
    fn test_object_name_empty_domain_allowed() {
        let name = ObjectName::new(":type=Foo").unwrap();
        assert_eq!(name.domain(), "");
        assert_eq!(name.key_property_list_string(), "type=Foo");
    }

    #[test]
    fn test_object_name_missing_separator() {
        let result = ObjectName::new("java.lang");
        assert!(matches!(
            result,
            Err(IdentityError::MissingDomainSeparator(_))
        ));
    }

    #[test]
    fn test_object_name_empty_properties() {
        let result = ObjectName::new("java.lang:");
        assert!(matches!(result, Err(IdentityError::EmptyKeyPropertyList(_))));
    }

    #[test]
    fn test_object_name_domain_pattern() {
        assert!(matches!(
            ObjectName::new("java.*:type=Memory"),
            Err(IdentityError::Pattern(_))
        ));
        assert!(matches!(
            ObjectName::new("java.lan?:type=Memory"),
            Err(IdentityError::Pattern(_))
        ));
    }

    #[test]
    fn test_object_name_property_list_pattern() {
        assert!(matches!(
            ObjectName::new("java.lang:*"),
            Err(IdentityError::Pattern(_))
        ));
        assert!(matches!(
            ObjectName::new("java.lang:type=Foo,*"),
            Err(IdentityError::Pattern(_))
        ));

        // A star inside a value is data, not a wildcard.
        let name = ObjectName::new("app:glob=*.log").unwrap();
        assert_eq!(name.key_property_list_string(), "glob=*.log");
        let name = ObjectName::new("app:a=1,b=*").unwrap();
        assert_eq!(name.key_property_list_string(), "a=1,b=*");
    }

    #[test]
    fn test_object_name_equality_is_textual() {
        let a = ObjectName::new("d:a=1,b=2").unwrap();
        let b = ObjectName::new("d:a=1,b=2").unwrap();
        let c = ObjectName::new("d:b=2,a=1").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a.as_str(), c.as_str());
        assert_eq!(a.to_string(), "d:a=1,b=2");
    }

    #[test]
    fn test_object_instance_exposes_identity() {
        let name = ObjectName::new("java.lang:type=Threading").unwrap();
        let instance = ObjectInstance::new(name.clone(), "sun.management.ThreadImpl");
        assert_eq!(instance.identity(), &name);
        assert_eq!(instance.object_name(), &name);
        assert_eq!(instance.class_name(), "sun.management.ThreadImpl");
    }
}
