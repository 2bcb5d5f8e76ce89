//! Value tree traversal.
//!
//! Any type implementing [`Walk`] can be searched for encrypted tokens. A
//! walk hands every reachable `String` leaf to a visitor along with the path
//! that leads to it. Implementations exist for the node kinds a
//! configuration value is built from:
//!
//! - strings, and scalars that are never inspected
//! - references: `Option`, `Box`, `Rc<RefCell<_>>`, `Arc<Mutex<_>>`,
//!   `Arc<RwLock<_>>`
//! - sequences: `Vec`, `VecDeque`, slices, arrays
//! - mappings: `HashMap`, `BTreeMap` (values only, keys are left alone)
//! - dynamic values: `Box<dyn Walk>`, `Box<dyn DynWalk>`, `serde_json::Value`,
//!   `toml::Value`
//!
//! `Box<dyn Walk>` can only be decrypted in place. Use `Box<dyn DynWalk>`
//! when the tree must also go through
//! [`copy_with_decrypted`](crate::copy_with_decrypted).
//!
//! Structs opt in with [`walk_fields!`](crate::walk_fields), listing the
//! fields the walk may enter. Unlisted fields are never inspected.
//!
//! ```
//! use encvar::walk_fields;
//!
//! struct Database {
//!     url: String,
//!     password: String,
//!     pool_size: u32,
//!     cache_key: String,
//! }
//!
//! walk_fields!(Database { url, password, pool_size });
//! ```

use std::fmt::{self, Write as _};

use dyn_clone::DynClone;

use crate::error::{Error, Result};

mod dynamic;
mod impls;

/// A value tree that can be searched for string leaves.
pub trait Walk {
    /// Visit every string leaf reachable from `self`.
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()>;
}

/// A [`Walk`] value that can be cloned behind a trait object.
///
/// Implemented for every `Walk + Clone` type, so `Box<dyn DynWalk>` holds
/// any of them and is itself `Clone`.
pub trait DynWalk: Walk + DynClone {}

impl<T: Walk + Clone> DynWalk for T {}

dyn_clone::clone_trait_object!(DynWalk);

/// One step of the path from the root of a walk to a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Field(&'static str),
    Index(usize),
    Key(String),
}

/// Render a path as `$.field[0]["key"]`.
pub fn format_path(path: &[Segment]) -> String {
    let mut out = String::from("$");
    for segment in path {
        // writing to a String cannot fail
        let _ = match segment {
            Segment::Field(name) => write!(out, ".{}", name),
            Segment::Index(i) => write!(out, "[{}]", i),
            Segment::Key(key) => write!(out, "[{}]", key),
        };
    }
    out
}

/// Visitor callback: path to the leaf and the leaf itself.
pub type Visit<'a> = dyn FnMut(&[Segment], &mut String) -> Result<()> + 'a;

/// Traversal state threaded through [`Walk::walk`].
pub struct Walker<'a> {
    path: Vec<Segment>,
    visit: &'a mut Visit<'a>,
}

impl<'a> Walker<'a> {
    /// Create a walker that calls `visit` for every string leaf.
    pub fn new(visit: &'a mut Visit<'a>) -> Self {
        Self {
            path: Vec::new(),
            visit,
        }
    }

    /// Walk `value` from the root.
    pub fn run<T: Walk + ?Sized>(&mut self, value: &mut T) -> Result<()> {
        value.walk(self)
    }

    /// Hand a string leaf to the visitor.
    pub fn string(&mut self, s: &mut String) -> Result<()> {
        (self.visit)(&self.path, s)
    }

    /// Descend into a named struct field.
    pub fn field<T: Walk + ?Sized>(&mut self, name: &'static str, value: &mut T) -> Result<()> {
        self.descend(Segment::Field(name), value)
    }

    /// Descend into a sequence element.
    pub fn index<T: Walk + ?Sized>(&mut self, index: usize, value: &mut T) -> Result<()> {
        self.descend(Segment::Index(index), value)
    }

    /// Descend into a mapping value. The key is only used for the path.
    pub fn entry<K, T>(&mut self, key: &K, value: &mut T) -> Result<()>
    where
        K: fmt::Debug + ?Sized,
        T: Walk + ?Sized,
    {
        self.descend(Segment::Key(format!("{:?}", key)), value)
    }

    /// Path of the node currently being walked.
    pub fn path(&self) -> String {
        format_path(&self.path)
    }

    /// Error for a shared node that cannot be borrowed for mutation.
    pub fn shared_value_error(&self) -> Error {
        Error::SharedValue { path: self.path() }
    }

    fn descend<T: Walk + ?Sized>(&mut self, segment: Segment, value: &mut T) -> Result<()> {
        self.path.push(segment);
        let result = value.walk(self);
        self.path.pop();
        result
    }
}

/// Implement [`Walk`] for a struct by listing its visible fields.
///
/// Works for named fields and tuple struct positions:
///
/// ```
/// use encvar::walk_fields;
///
/// struct Password(String);
/// walk_fields!(Password { 0 });
/// ```
#[macro_export]
macro_rules! walk_fields {
    ($ty:ty { $($field:tt),* $(,)? }) => {
        impl $crate::Walk for $ty {
            #[allow(unused_variables)]
            fn walk(&mut self, walker: &mut $crate::Walker<'_>) -> $crate::error::Result<()> {
                $( walker.field(stringify!($field), &mut self.$field)?; )*
                Ok(())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&[]), "$");
        assert_eq!(
            format_path(&[
                Segment::Field("db"),
                Segment::Index(2),
                Segment::Key("\"primary\"".to_string()),
                Segment::Field("0"),
            ]),
            r#"$.db[2]["primary"].0"#
        );
    }

    struct Inner {
        secret: String,
    }

    struct Outer {
        name: String,
        inner: Inner,
        hidden: String,
    }

    walk_fields!(Inner { secret });
    walk_fields!(Outer { name, inner });

    #[test]
    fn test_walk_fields_visits_listed_fields_in_order() {
        let mut value = Outer {
            name: "n".to_string(),
            inner: Inner {
                secret: "s".to_string(),
            },
            hidden: "h".to_string(),
        };
        let mut seen = Vec::new();
        let mut visit = |path: &[Segment], s: &mut String| -> Result<()> {
            seen.push((format_path(path), s.clone()));
            Ok(())
        };
        Walker::new(&mut visit).run(&mut value).unwrap();
        assert_eq!(
            seen,
            vec![
                ("$.name".to_string(), "n".to_string()),
                ("$.inner.secret".to_string(), "s".to_string()),
            ]
        );
        assert_eq!(value.hidden, "h");
    }

    #[test]
    fn test_visitor_error_stops_walk() {
        let mut value = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut count = 0;
        let mut visit = |path: &[Segment], _: &mut String| -> Result<()> {
            count += 1;
            if path == [Segment::Index(1)] {
                return Err(Error::SharedValue {
                    path: format_path(path),
                });
            }
            Ok(())
        };
        let err = Walker::new(&mut visit).run(&mut value).unwrap_err();
        assert!(matches!(err, Error::SharedValue { ref path } if path == "$[1]"));
        assert_eq!(count, 2);
    }
}
