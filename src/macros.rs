//! Generators for shapes, open enums and exceptions.
//!
//! A shape is declared once with a redaction policy on each field that needs
//! one (`=> mask` or `=> nested`); the struct, its `FilterSensitiveLog`
//! helper and its static redaction plan all come from that single list.

macro_rules! redact_field {
    (; $field:expr) => {
        ::std::clone::Clone::clone(&$field)
    };
    (mask; $field:expr) => {
        $crate::sensitive::Mask::mask(&$field)
    };
    (nested; $field:expr) => {
        $crate::sensitive::FilterSensitiveLog::filter_sensitive_log(&$field)
    };
}

macro_rules! redaction_of {
    () => {
        $crate::sensitive::Redaction::Retain
    };
    (mask) => {
        $crate::sensitive::Redaction::Mask
    };
    (nested) => {
        $crate::sensitive::Redaction::Delegate
    };
}

macro_rules! sample_field {
    () => {
        ::std::default::Default::default()
    };
    (mask) => {
        $crate::sensitive::Mask::present()
    };
    (nested) => {
        ::std::default::Default::default()
    };
}

macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $fty:ty $(=> $policy:ident)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[serde_with::skip_serializing_none]
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $fty,
            )*
            /// Members this shape does not model, passed through untouched.
            #[serde(flatten)]
            pub extra: ::serde_json::Map<String, ::serde_json::Value>,
        }

        impl $crate::sensitive::FilterSensitiveLog for $name {
            fn filter_sensitive_log(&self) -> Self {
                $name {
                    $( $field: redact_field!($($policy)? ; self.$field), )*
                    extra: ::std::clone::Clone::clone(&self.extra),
                }
            }
        }

        impl $crate::shape::Shape for $name {
            const NAME: &'static str = stringify!($name);
            const REDACTION: &'static [(&'static str, $crate::sensitive::Redaction)] = &[
                $( (stringify!($field), redaction_of!($($policy)?)), )*
            ];

            fn sensitive_sample() -> Self {
                $name {
                    $( $field: sample_field!($($policy)?), )*
                    extra: ::std::default::Default::default(),
                }
            }
        }
    };
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value this crate does not know about yet.
            Unknown(String),
        }

        impl $name {
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Unknown(raw) => raw.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                match self {
                    $name::Unknown(_) => false,
                    _ => true,
                }
            }
        }

        impl<'a> From<&'a str> for $name {
            fn from(raw: &'a str) -> Self {
                match raw {
                    $( $wire => $name::$variant, )+
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                $name::from(raw.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Ok($name::from(raw))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        /// An unset value: the empty raw string.
        impl Default for $name {
            fn default() -> Self {
                $name::Unknown(String::new())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from(raw))
            }
        }

        impl $crate::enums::OpenEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VALUES: &'static [&'static str] = $name::VALUES;

            fn as_str(&self) -> &str {
                $name::as_str(self)
            }
        }
    };
}

macro_rules! exception {
    (
        $(#[$meta:meta])*
        pub struct $name:ident : $fault:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $fty:ty $(=> $policy:ident)?
            ),* $(,)?
        }
    ) => {
        shape! {
            $(#[$meta])*
            pub struct $name {
                #[serde(alias = "message")]
                message: Option<String>,
                $(
                    $(#[$fmeta])*
                    $field : $fty $(=> $policy)?
                ),*
            }
        }

        impl $crate::exceptions::ServiceException for $name {
            const FAULT: $crate::exceptions::FaultOrigin = $crate::exceptions::FaultOrigin::$fault;

            fn message(&self) -> Option<&str> {
                self.message.as_ref().map(String::as_str)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                match self.message {
                    Some(ref message) => write!(f, "{}: {}", stringify!($name), message),
                    None => f.write_str(stringify!($name)),
                }
            }
        }

        impl ::failure::Fail for $name {}
    };
}

macro_rules! register_shapes {
    ($registry:ident; $($shape:ty),+ $(,)?) => {
        $( $registry.register::<$shape>(); )+
    };
}
