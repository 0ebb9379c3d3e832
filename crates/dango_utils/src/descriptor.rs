//! Runtime type descriptors.
//!
//! Rust has no inheritance, so a hierarchy is declared explicitly: each
//! descriptor lists the capabilities it implements (in declaration order)
//! and an optional superclass. Descriptors are meant to live in `static`
//! items so they can reference each other.
//!
//! ```
//! use dango_utils::TypeDescriptor;
//!
//! static SNOWFLAKE: TypeDescriptor = TypeDescriptor::new("Snowflake", &[], None);
//! static USER: TypeDescriptor = TypeDescriptor::new("User", &[&SNOWFLAKE], None);
//! static MEMBER: TypeDescriptor = TypeDescriptor::new("Member", &[&USER], None);
//!
//! let names: Vec<_> = MEMBER.ancestors().iter().map(|d| d.name()).collect();
//! assert_eq!(names, ["Member", "User", "Snowflake"]);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Node in a declared type hierarchy.
///
/// Identity is the `name`; two descriptors with the same name are the same type.
pub struct TypeDescriptor {
    name: &'static str,
    capabilities: &'static [&'static TypeDescriptor],
    superclass: Option<&'static TypeDescriptor>,
}

impl TypeDescriptor {
    /// Declare a type with its capabilities and optional superclass.
    pub const fn new(
        name: &'static str,
        capabilities: &'static [&'static TypeDescriptor],
        superclass: Option<&'static TypeDescriptor>,
    ) -> Self {
        Self {
            name,
            capabilities,
            superclass,
        }
    }

    /// Unique name of the type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Directly declared capabilities, in declaration order.
    pub fn capabilities(&self) -> &'static [&'static TypeDescriptor] {
        self.capabilities
    }

    /// Direct superclass, if any.
    pub fn superclass(&self) -> Option<&'static TypeDescriptor> {
        self.superclass
    }

    /// Linearized ancestor chain, most specific first.
    ///
    /// Order is self, then each capability (expanded recursively), then the
    /// superclass (expanded the same way). A type reachable along several
    /// paths keeps its first position.
    pub fn ancestors(&'static self) -> Vec<&'static TypeDescriptor> {
        let mut seen = HashSet::new();
        let mut chain = Vec::new();
        linearize(self, &mut seen, &mut chain);
        chain
    }

    /// Whether `self` is `other` or has it somewhere in its ancestor chain.
    pub fn is_a(&'static self, other: &TypeDescriptor) -> bool {
        self.ancestors().iter().any(|d| d.name == other.name)
    }
}

fn linearize(
    node: &'static TypeDescriptor,
    seen: &mut HashSet<&'static str>,
    chain: &mut Vec<&'static TypeDescriptor>,
) {
    if !seen.insert(node.name) {
        return;
    }
    chain.push(node);
    for capability in node.capabilities {
        linearize(capability, seen, chain);
    }
    if let Some(parent) = node.superclass {
        linearize(parent, seen, chain);
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field(
                "capabilities",
                &self.capabilities.iter().map(|c| c.name).collect::<Vec<_>>(),
            )
            .field("superclass", &self.superclass.map(|s| s.name))
            .finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A runtime value that knows its declared type.
pub trait Described {
    /// Descriptor of the value's concrete type.
    fn descriptor(&self) -> &'static TypeDescriptor;
}
