//! Generator for closed choice enums.

macro_rules! define_choices {
    (
        $(#[$outer:meta])*
        pub enum $name:ident as $kind:literal, default $default:ident {
            $( $variant:ident => ($value:literal, $label:literal) ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )*
        }

        impl $name {
            /// Value used when none is supplied.
            pub const DEFAULT: Self = Self::$default;

            /// `(value, label)` pairs in declaration order.
            pub const CHOICES: &'static [(&'static str, &'static str)] = &[
                $( ($value, $label), )*
            ];

            /// Wire value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $value, )*
                }
            }

            /// Human readable label.
            pub const fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )*
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::DEFAULT
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::choices::UnknownChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $value => Ok(Self::$variant), )*
                    other => Err($crate::domain::choices::UnknownChoice {
                        kind: $kind,
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

pub(crate) use define_choices;
