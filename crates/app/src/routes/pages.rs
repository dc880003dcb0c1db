use dioxus::prelude::*;
use shared_types::{user_display_name, user_role_label};
use shared_ui::Skeleton;

use crate::auth::use_ui_store;

/// Stand-in body for pages whose content lives outside the shell.
#[component]
fn PlaceholderPage(title: String, description: String) -> Element {
    rsx! {
        section { class: "page",
            h2 { class: "page-title", "{title}" }
            p { class: "page-description", "{description}" }
            Skeleton { lines: 4 }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let store = use_ui_store();
    let name = user_display_name(store.current_user.read().as_ref());

    rsx! {
        PlaceholderPage {
            title: format!("Welcome, {name}"),
            description: "Today's overview.".to_string(),
        }
    }
}

#[component]
pub fn Appointments() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Appointments".to_string(),
            description: "Upcoming and past appointments across the clinic.".to_string(),
        }
    }
}

#[component]
pub fn MyAppointments() -> Element {
    rsx! {
        PlaceholderPage {
            title: "My Appointments".to_string(),
            description: "Your booked visits.".to_string(),
        }
    }
}

#[component]
pub fn AllPatients() -> Element {
    rsx! {
        PlaceholderPage {
            title: "All Patients".to_string(),
            description: "Every registered patient.".to_string(),
        }
    }
}

#[component]
pub fn PatientsView() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Patients View".to_string(),
            description: "Patients under your care.".to_string(),
        }
    }
}

#[component]
pub fn MedicalRecords() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Medical Records".to_string(),
            description: "Charts, notes and results.".to_string(),
        }
    }
}

#[component]
pub fn Doctors() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Doctors".to_string(),
            description: "Clinic physicians and their schedules.".to_string(),
        }
    }
}

#[component]
pub fn BookAppointmentStaff() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Book Appointment".to_string(),
            description: "Schedule a visit on behalf of a patient.".to_string(),
        }
    }
}

#[component]
pub fn BookAppointmentPatient() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Book Appointment".to_string(),
            description: "Pick a doctor and a time slot.".to_string(),
        }
    }
}

#[component]
pub fn Users() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Users".to_string(),
            description: "Accounts and role assignments.".to_string(),
        }
    }
}

/// Read-only view of the signed-in user's identity.
#[component]
pub fn Profile() -> Element {
    let store = use_ui_store();
    let user = store.current_user.read().clone();
    let name = user_display_name(user.as_ref());
    let role = user_role_label(user.as_ref());
    let email = user
        .as_ref()
        .and_then(|u| u.email.clone())
        .unwrap_or_else(|| "Not provided".to_string());

    rsx! {
        section { class: "page",
            h2 { class: "page-title", "Profile" }
            dl { class: "profile-details",
                dt { "Name" }
                dd { "{name}" }
                dt { "Email" }
                dd { "{email}" }
                dt { "Role" }
                dd { "{role}" }
            }
        }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Settings".to_string(),
            description: "Account preferences.".to_string(),
        }
    }
}
