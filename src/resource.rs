//! Resource and style reference resolution
//!
//! A layout document refers to platform resources indirectly: `@drawable/`,
//! `@string/`, `@anim/`, and `@color/` tokens name fixed resources, while a
//! leading `?` names a style attribute that must be resolved against the
//! generated, package-scoped attribute constant table. The classifiers here
//! route a raw string to the right path; [`AttributeResolver`] performs the
//! style-attribute resolution itself, memoizing both the resolved
//! identifiers and the table handles.

use crate::diagnostics_enabled;
use crate::types::NO_ID;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;

const STYLE_ATTR_PREFIX: char = '?';
const DRAWABLE_LOCAL_RESOURCE: &str = "@drawable/";
const STRING_LOCAL_RESOURCE: &str = "@string/";
const TWEEN_LOCAL_RESOURCE: &str = "@anim/";
const COLOR_LOCAL_RESOURCE: &str = "@color/";

/// Whether a value is a style-attribute indirection (`?[package:]attr/name`).
pub fn is_style_attribute(value: &str) -> bool {
    value.starts_with(STYLE_ATTR_PREFIX)
}

/// Whether a value references a local drawable resource.
pub fn is_local_drawable_resource(attribute_value: &str) -> bool {
    attribute_value.starts_with(DRAWABLE_LOCAL_RESOURCE)
}

/// Whether a value references a local string resource.
pub fn is_local_string_resource(attribute_value: &str) -> bool {
    attribute_value.starts_with(STRING_LOCAL_RESOURCE)
}

/// Whether a value references a tween animation resource.
pub fn is_tween_animation_resource(attribute_value: &str) -> bool {
    attribute_value.starts_with(TWEEN_LOCAL_RESOURCE)
}

/// Whether a value references a local color resource.
pub fn is_local_color_resource(attribute_value: &str) -> bool {
    attribute_value.starts_with(COLOR_LOCAL_RESOURCE)
}

/// Shared handle to one package's generated constant table.
pub type ConstantTable = Arc<HashMap<String, i32>>;

/// Read access to the host platform's resource constant namespaces.
pub trait ResourceNamespace {
    /// Resolve a generated constant table by its qualified name,
    /// e.g. `"com.acme.shell:attr"`.
    fn table(&self, name: &str) -> Option<ConstantTable>;

    /// Look up a name in the fixed built-in view-identifier namespace.
    fn view_id(&self, name: &str) -> Option<i32>;
}

/// In-memory [`ResourceNamespace`]: hosts register the constant tables
/// their build generates, once, at startup.
#[derive(Debug, Default)]
pub struct TableRegistry {
    tables: HashMap<String, ConstantTable>,
    view_ids: HashMap<String, i32>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_table(&mut self, name: impl Into<String>, constants: HashMap<String, i32>) {
        self.tables.insert(name.into(), Arc::new(constants));
    }

    pub fn register_view_id(&mut self, name: impl Into<String>, id: i32) {
        self.view_ids.insert(name.into(), id);
    }
}

impl ResourceNamespace for TableRegistry {
    fn table(&self, name: &str) -> Option<ConstantTable> {
        self.tables.get(name).cloned()
    }

    fn view_id(&self, name: &str) -> Option<i32> {
        self.view_ids.get(name).copied()
    }
}

/// Resolve an `@[+]namespace/name` view reference against the built-in
/// identifier namespace. References without a `/` carry no id.
pub fn view_id_from_reference(reference: &str, namespace: &dyn ResourceNamespace) -> i32 {
    match reference.find('/') {
        Some(i) => {
            let name = &reference[i + 1..];
            match namespace.view_id(name) {
                Some(id) => id,
                None => {
                    if diagnostics_enabled() {
                        log::error!("no built-in view id named {}", name);
                    }
                    0
                }
            }
        }
        None => NO_ID,
    }
}

/// Resolves style-attribute references to their integer identifiers.
///
/// Both caches grow monotonically and are never evicted: the attribute
/// vocabulary is a closed set bounded by the host's generated constants.
/// Only successful resolutions are cached; a reference that failed once
/// may still resolve against a later namespace.
pub struct AttributeResolver {
    attribute_cache: HashMap<String, i32>,
    table_cache: HashMap<String, ConstantTable>,
    attr_pattern: Regex,
}

impl AttributeResolver {
    pub fn new() -> Self {
        Self {
            attribute_cache: HashMap::new(),
            table_cache: HashMap::new(),
            attr_pattern: Regex::new(r"(?is)^(\?)(\S*)(:?)(attr/?)(\S*)$").unwrap(),
        }
    }

    /// Resolve `attribute` (`?[package:]attr/name`) to its integer id,
    /// looking the name up in `caller_package`'s table unless the
    /// reference carries its own qualifier. Unresolvable references
    /// yield 0.
    pub fn attribute_id(
        &mut self,
        attribute: &str,
        caller_package: &str,
        namespace: &dyn ResourceNamespace,
    ) -> i32 {
        if let Some(&id) = self.attribute_cache.get(attribute) {
            return id;
        }
        if attribute.len() <= 1 {
            return 0;
        }

        let (attribute_name, qualifier) = match self.attr_pattern.captures(attribute) {
            Some(captures) => (
                captures.get(5).map_or("", |m| m.as_str()).to_string(),
                captures.get(2).map_or("", |m| m.as_str()).to_string(),
            ),
            None => {
                let mut chars = attribute.chars();
                chars.next();
                (chars.as_str().to_string(), String::new())
            }
        };

        let package = if qualifier.is_empty() {
            caller_package.to_string()
        } else {
            qualifier.strip_suffix(':').unwrap_or(&qualifier).to_string()
        };

        let table_name = format!("{}:attr", package);
        let table = match self.table(&table_name, namespace) {
            Some(table) => table,
            None => {
                if diagnostics_enabled() {
                    log::error!("no attr constant table named {}", table_name);
                }
                return 0;
            }
        };

        match table.get(&attribute_name) {
            Some(&id) => {
                self.attribute_cache.insert(attribute.to_string(), id);
                id
            }
            None => {
                if diagnostics_enabled() {
                    log::error!("no constant {} in table {}", attribute_name, table_name);
                }
                0
            }
        }
    }

    fn table(&mut self, name: &str, namespace: &dyn ResourceNamespace) -> Option<ConstantTable> {
        if let Some(table) = self.table_cache.get(name) {
            return Some(table.clone());
        }
        let table = namespace.table(name)?;
        self.table_cache.insert(name.to_string(), table.clone());
        Some(table)
    }
}

impl Default for AttributeResolver {
    fn default() -> Self {
        Self::new()
    }
}
