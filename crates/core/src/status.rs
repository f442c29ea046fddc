//! Text vocabularies stored in status and type columns.
//!
//! The stored values are the literal strings the procedure catalog writes
//! (`activo`, `suspendido`, ...). Each enum converts to and from those strings
//! so handlers can reject unknown values before calling the database.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

macro_rules! define_text_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal, $valid:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        /// All stored values, in declaration order.
        pub const $valid: &[&str] = &[$($val),+];

        impl $name {
            /// Return the stored string representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $val ),+
                }
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $val => Ok(Self::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "Unknown {}: '{other}'. Valid values: {}",
                        $label,
                        $valid.join(", ")
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_text_enum! {
    /// Account status (`users.status`).
    UserStatus, "user status", VALID_USER_STATUSES {
        Active = "activo",
        Suspended = "suspendido",
    }
}

define_text_enum! {
    /// Video visibility status (`videos.status`).
    VideoStatus, "video status", VALID_VIDEO_STATUSES {
        Active = "activo",
        Suspended = "suspendido",
        /// Set by moderators; never shown in public listings.
        RemovedForViolation = "eliminado_por_incumplimiento",
    }
}

define_text_enum! {
    /// Video kind (`videos.type`).
    VideoType, "video type", VALID_VIDEO_TYPES {
        Live = "live",
        Recorded = "recorded",
    }
}

define_text_enum! {
    /// Abuse report status (`reports.status`).
    ReportStatus, "report status", VALID_REPORT_STATUSES {
        Pending = "pendiente",
        Resolved = "resuelto",
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn stored_values_match_the_procedure_catalog() {
        assert_eq!(UserStatus::Suspended.as_str(), "suspendido");
        assert_eq!(VideoStatus::RemovedForViolation.as_str(), "eliminado_por_incumplimiento");
        assert_eq!(VideoType::Recorded.to_string(), "recorded");
        assert_eq!(ReportStatus::Resolved.as_str(), "resuelto");
    }

    #[test]
    fn parse_known_values() {
        assert_eq!("activo".parse::<UserStatus>().unwrap(), UserStatus::Active);
        assert_eq!("live".parse::<VideoType>().unwrap(), VideoType::Live);
        assert_eq!(
            "eliminado_por_incumplimiento".parse::<VideoStatus>().unwrap(),
            VideoStatus::RemovedForViolation
        );
    }

    #[test]
    fn parse_rejects_unknown_values_and_lists_valid_ones() {
        assert_matches!(
            "banned".parse::<UserStatus>(),
            Err(CoreError::Validation(msg)) if msg.contains("activo, suspendido")
        );
        assert!("".parse::<VideoType>().is_err());
        assert!("Live".parse::<VideoType>().is_err());
    }
}
