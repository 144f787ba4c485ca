//! Newtype IDs for type-safe references to remote resources.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different resource types. Airship IDs are
//! opaque strings (UUIDs for channels, user-chosen names for templates), so
//! the wrappers hold a `String` and only reject the empty string.

/// Errors that can occur when constructing an ID.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input string is empty.
    #[error("{kind} cannot be empty")]
    Empty {
        /// Name of the ID type that was being constructed.
        kind: &'static str,
    },
}

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` as a bare JSON string (empty strings rejected)
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Constructors and accessors: `new()`, `as_str()`, `into_inner()`
/// - `Display`, `AsRef<str>` and `TryFrom<String>`/`TryFrom<&str>`
///
/// # Example
///
/// ```rust
/// # use airship_core::define_id;
/// define_id!(SegmentId);
/// define_id!(ListId);
///
/// let segment = SegmentId::new("winter-shoppers").unwrap();
/// assert_eq!(segment.as_str(), "winter-shoppers");
/// assert!(ListId::new("").is_err());
///
/// // These are different types, so this won't compile:
/// // let _: ListId = segment;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a new ID, rejecting the empty string.
            ///
            /// # Errors
            ///
            /// Returns `IdError::Empty` if `id` is empty.
            pub fn new(id: impl Into<String>) -> ::core::result::Result<Self, $crate::IdError> {
                let id = id.into();
                if id.is_empty() {
                    return Err($crate::IdError::Empty {
                        kind: stringify!($name),
                    });
                }
                Ok(Self(id))
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::IdError;

            fn try_from(id: String) -> ::core::result::Result<Self, Self::Error> {
                Self::new(id)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::IdError;

            fn try_from(id: &str) -> ::core::result::Result<Self, Self::Error> {
                Self::new(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard resource IDs
define_id!(TemplateId);
define_id!(ChannelId);
