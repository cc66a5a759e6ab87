//! Diagnostic string rendering engine.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A registered field renderer; `None` stands for an absent value.
type RenderOp<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;

/// Token rendered for absent optional fields.
const NIL: &str = "nil";

/// Rendering configuration, resolved when the engine is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribeOptions {
    /// Prefix the output with the type name and wrap the fields in brackets.
    pub include_type: bool,
    /// Explicit type name; `None` falls back to the owner type's own name.
    pub type_name: Option<String>,
    /// Render `name=value` instead of the bare value.
    pub include_field_names: bool,
    /// One field per line instead of a comma-separated list.
    pub multiline: bool,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            include_type: true,
            type_name: None,
            include_field_names: true,
            multiline: false,
        }
    }
}

/// Builder that renders a value of `T` as a diagnostic string from an
/// ordered list of named per-field accessors.
///
/// The output is human-readable, not a serialization format: field values
/// pass through verbatim, with no escaping of separators or brackets.
/// Callers that need escaping register the field through
/// [`Description::append_with`] with a renderer that escapes before
/// returning.
pub struct Description<T> {
    fields: Vec<(String, RenderOp<T>)>,
    options: DescribeOptions,
}

impl<T> Description<T> {
    /// Creates an engine with no fields and the default options.
    pub fn new() -> Self {
        Self::with_options(DescribeOptions::default())
    }

    /// Creates an engine with no fields and explicit options.
    pub fn with_options(options: DescribeOptions) -> Self {
        Self {
            fields: Vec::new(),
            options,
        }
    }

    /// Returns the rendering options.
    pub fn options(&self) -> &DescribeOptions {
        &self.options
    }

    /// Returns the number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn with_field(&self, name: String, op: RenderOp<T>) -> Self {
        let mut fields = self.fields.clone();
        fields.push((name, op));
        Self {
            fields,
            options: self.options.clone(),
        }
    }

    /// Registers a field rendered through its `Display` implementation.
    pub fn append<V, F>(&self, name: impl Into<String>, accessor: F) -> Self
    where
        V: fmt::Display + ?Sized,
        F: for<'a> Fn(&'a T) -> &'a V + Send + Sync + 'static,
    {
        self.with_field(
            name.into(),
            Arc::new(move |value| Some(accessor(value).to_string())),
        )
    }

    /// Registers an optional field; absent values render as `nil`.
    pub fn append_optional<V, F>(&self, name: impl Into<String>, accessor: F) -> Self
    where
        V: fmt::Display + ?Sized,
        F: for<'a> Fn(&'a T) -> Option<&'a V> + Send + Sync + 'static,
    {
        self.with_field(
            name.into(),
            Arc::new(move |value| accessor(value).map(|field| field.to_string())),
        )
    }

    /// Registers a field with a custom renderer; returning `None` renders
    /// the `nil` token.
    pub fn append_with<F>(&self, name: impl Into<String>, renderer: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        self.with_field(name.into(), Arc::new(renderer))
    }

    /// Renders `value` using the registered fields, in declaration order.
    pub fn describe(&self, value: &T) -> String {
        let separator = if self.options.multiline {
            if self.options.include_type {
                "\n  "
            } else {
                "\n"
            }
        } else {
            ","
        };
        let rendered: Vec<String> = self
            .fields
            .iter()
            .map(|(name, render)| {
                let field = render(value).unwrap_or_else(|| NIL.to_string());
                if self.options.include_field_names {
                    format!("{name}={field}")
                } else {
                    field
                }
            })
            .collect();
        let fields = rendered.join(separator);
        if self.options.include_type {
            let type_name = match self.options.type_name.as_deref() {
                Some(name) => name,
                None => short_type_name::<T>(),
            };
            let (prefix, suffix) = if self.options.multiline {
                ("[\n  ", "\n]")
            } else {
                ("[", "]")
            };
            format!("{type_name}{prefix}{fields}{suffix}")
        } else {
            fields
        }
    }
}

/// Last path segment of the owner type's full name.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

impl<T> Clone for Description<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            options: self.options.clone(),
        }
    }
}

impl<T> Default for Description<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Description<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Description")
            .field("fields", &self.fields.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::short_type_name;

    struct Inner;

    #[test]
    fn type_name_keeps_last_segment() {
        assert_eq!(short_type_name::<Inner>(), "Inner");
        assert_eq!(short_type_name::<u32>(), "u32");
    }
}
