/// Defines a closed vocabulary enum whose variants persist and print as
/// fixed human labels, and generates:
/// - derives (Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)
/// - `ALL` and `label()`
/// - `Display` (the label)
/// - `FromStr` (case, space, dash and underscore insensitive)
///
/// Usage:
///   labeled_enum!(StaffRole { TeamLeader => "Team Leader", Operator => "Operator" });
#[macro_export]
macro_rules! labeled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = $crate::models::squash_label(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| $crate::models::squash_label(v.label()) == wanted)
                    .ok_or_else(|| {
                        let known: Vec<&str> = $name::ALL.iter().map(|v| v.label()).collect();
                        format!("unknown value '{}' (expected one of: {})", s.trim(), known.join(", "))
                    })
            }
        }
    };
}
