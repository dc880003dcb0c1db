use serde::{Deserialize, Serialize};
use std::fmt;

use crate::navigation::NavId;

/// Clinic roles. Gates which navigation entries and pages are visible.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String")]
pub enum Role {
    Admin,
    Doctor,
    Assistant,
    #[default]
    User,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Doctor, Role::Assistant, Role::User];

    /// Parse a role string from the session service. Unknown values default to User.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "doctor" => Role::Doctor,
            "assistant" => Role::Assistant,
            _ => Role::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Doctor => "Doctor",
            Role::Assistant => "Assistant",
            Role::User => "User",
        }
    }

    /// Navigation entries this role may see, including the base entry.
    pub fn nav_entries(&self) -> &'static [NavId] {
        match self {
            Role::Admin => &[
                NavId::Dashboard,
                NavId::Appointments,
                NavId::AllPatients,
                NavId::MedicalRecords,
                NavId::Doctors,
                NavId::Users,
            ],
            Role::Doctor => &[
                NavId::Dashboard,
                NavId::Appointments,
                NavId::AllPatients,
                NavId::PatientsView,
                NavId::MedicalRecords,
            ],
            Role::Assistant => &[
                NavId::Dashboard,
                NavId::Appointments,
                NavId::AllPatients,
                NavId::PatientsView,
                NavId::MedicalRecords,
                NavId::Doctors,
                NavId::BookAppointmentStaff,
            ],
            Role::User => &[
                NavId::Dashboard,
                NavId::MyAppointments,
                NavId::BookAppointmentPatient,
            ],
        }
    }

    /// Whether this role may see the given navigation entry.
    pub fn permits(&self, id: NavId) -> bool {
        self.nav_entries().contains(&id)
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::from_str_or_default(&s)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user as reported by the session service. Read-only in the UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Blank strings count as missing.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn first_upper(s: &str) -> Option<char> {
    s.chars().next().and_then(|c| c.to_uppercase().next())
}

impl User {
    /// Avatar initials: both name initials, else the email's first letter, else "U".
    pub fn initials(&self) -> String {
        if let (Some(first), Some(last)) = (present(&self.first_name), present(&self.last_name)) {
            if let (Some(f), Some(l)) = (first_upper(first), first_upper(last)) {
                return [f, l].iter().collect();
            }
        }
        present(&self.email)
            .and_then(first_upper)
            .map(String::from)
            .unwrap_or_else(|| "U".to_string())
    }

    /// Full name when both parts are known, else the email, else "User".
    pub fn display_name(&self) -> String {
        match (present(&self.first_name), present(&self.last_name)) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => present(&self.email)
                .map(str::to_string)
                .unwrap_or_else(|| "User".to_string()),
        }
    }

    pub fn role_label(&self) -> &'static str {
        self.role.unwrap_or_default().as_str()
    }

    /// Role used for navigation; absent means User.
    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or_default()
    }
}

/// Initials for an optional user. No user yields "U".
pub fn user_initials(user: Option<&User>) -> String {
    user.map(User::initials).unwrap_or_else(|| "U".to_string())
}

/// Display name for an optional user. No user yields "User".
pub fn user_display_name(user: Option<&User>) -> String {
    user.map(User::display_name)
        .unwrap_or_else(|| "User".to_string())
}

/// Role label for an optional user. No user yields "User".
pub fn user_role_label(user: Option<&User>) -> &'static str {
    user.map(User::role_label).unwrap_or(Role::User.as_str())
}
