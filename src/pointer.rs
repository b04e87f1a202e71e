//! JSON pointer representation for locating values in validated documents.
//!
//! This module provides [`Pointer`] and [`PointerSegment`] types for building
//! paths to values in nested JSON-like structures, rendering them in the
//! canonical `#/...` fragment form, and deriving the human-readable
//! dot/bracket property-path form used in error reports.

use std::fmt::{self, Display};

/// A segment of a JSON pointer.
///
/// Pointers are built from segments that represent either property access
/// or array indexing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PointerSegment {
    /// A property/member access (e.g., `user`, `email`)
    Property(String),
    /// An array index access (e.g., `0`, `42`)
    Index(usize),
}

impl PointerSegment {
    /// Creates a new property segment.
    pub fn property(name: impl Into<String>) -> Self {
        PointerSegment::Property(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PointerSegment::Index(idx)
    }
}

/// A pointer to a value in a nested JSON-like document.
///
/// `Pointer` identifies locations like the `email` member of the first
/// element of `users` and provides methods for building pointers
/// incrementally. It renders two ways:
///
/// - the canonical fragment form via [`Display`]/[`Pointer::to_fragment`]
///   (`#/users/0/email`), and
/// - the property-path form via [`Pointer::property_path`]
///   (`users[0].email`), the notation shown to humans in error reports.
///
/// # Example
///
/// ```rust
/// use faultline::Pointer;
///
/// let pointer = Pointer::root()
///     .push_property("users")
///     .push_index(0)
///     .push_property("email");
///
/// assert_eq!(pointer.to_string(), "#/users/0/email");
/// assert_eq!(pointer.property_path(), "users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pointer {
    segments: Vec<PointerSegment>,
}

impl Pointer {
    /// Creates an empty pointer representing the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a pointer from a sequence of segments.
    pub fn from_segments(segments: impl IntoIterator<Item = PointerSegment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Returns a new pointer with a property segment appended.
    ///
    /// This method does not modify the original pointer; it returns a new one.
    pub fn push_property(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PointerSegment::Property(name.into()));
        Self { segments }
    }

    /// Returns a new pointer with an index segment appended.
    ///
    /// This method does not modify the original pointer; it returns a new one.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PointerSegment::Index(index));
        Self { segments }
    }

    /// Returns true if this pointer designates the document root (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this pointer.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this pointer has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the pointer segments.
    pub fn segments(&self) -> impl Iterator<Item = &PointerSegment> {
        self.segments.iter()
    }

    /// Returns the canonical fragment form with the leading `#`.
    ///
    /// Property names are escaped per RFC 6901 (`~` becomes `~0`,
    /// `/` becomes `~1`). The root pointer renders as `#`.
    pub fn to_fragment(&self) -> String {
        let mut out = String::from("#");
        for segment in &self.segments {
            out.push('/');
            match segment {
                PointerSegment::Property(name) => {
                    out.push_str(&name.replace('~', "~0").replace('/', "~1"));
                }
                PointerSegment::Index(idx) => {
                    out.push_str(&idx.to_string());
                }
            }
        }
        out
    }

    /// Returns the fragment form with the leading `#` stripped.
    ///
    /// The root pointer renders as the empty string.
    pub fn pointer_path(&self) -> String {
        // to_fragment always starts with '#'
        self.to_fragment()[1..].to_string()
    }

    /// Derives the dot/bracket property-path form of this pointer.
    ///
    /// Index segments and all-digit property names render as `[n]`; any
    /// other property renders as `.name`. The concatenation is trimmed of
    /// outer dots, so the root pointer yields the empty string and
    /// segments `a`, `0`, `b` yield `a[0].b`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use faultline::Pointer;
    ///
    /// let pointer = Pointer::root().push_property("a").push_property("0");
    /// assert_eq!(pointer.property_path(), "a[0]");
    /// assert_eq!(Pointer::root().property_path(), "");
    /// ```
    pub fn property_path(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                PointerSegment::Property(name)
                    if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) =>
                {
                    out.push('[');
                    out.push_str(name);
                    out.push(']');
                }
                PointerSegment::Property(name) => {
                    out.push('.');
                    out.push_str(name);
                }
                PointerSegment::Index(idx) => {
                    out.push('[');
                    out.push_str(&idx.to_string());
                    out.push(']');
                }
            }
        }
        out.trim_matches('.').to_string()
    }
}

impl Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fragment())
    }
}
