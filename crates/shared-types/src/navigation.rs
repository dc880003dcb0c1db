use crate::models::Role;

/// Stable identifier of a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavId {
    Dashboard,
    Appointments,
    MyAppointments,
    AllPatients,
    PatientsView,
    MedicalRecords,
    Doctors,
    BookAppointmentStaff,
    BookAppointmentPatient,
    Users,
}

/// Icon shown next to a navigation entry. The UI layer maps these to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    LayoutDashboard,
    Calendar,
    CalendarCheck,
    Users,
    Contact,
    FileText,
    Stethoscope,
    CalendarPlus,
    UserCog,
}

/// A static, labelled link in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub id: NavId,
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

impl NavigationItem {
    /// Roles allowed to see this entry, in `Role::ALL` order.
    pub fn roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| role.permits(self.id))
            .collect()
    }

    /// Exact path match against the router's current path.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

pub const DASHBOARD_PATH: &str = "/dashboard";

/// Entries shown to every role, always listed first.
pub const BASE_ITEMS: &[NavigationItem] = &[NavigationItem {
    id: NavId::Dashboard,
    label: "Dashboard",
    path: DASHBOARD_PATH,
    icon: NavIcon::LayoutDashboard,
}];

/// Role-scoped entries in display order.
pub const ROLE_ITEMS: &[NavigationItem] = &[
    NavigationItem {
        id: NavId::Appointments,
        label: "Appointments",
        path: "/appointments",
        icon: NavIcon::Calendar,
    },
    NavigationItem {
        id: NavId::MyAppointments,
        label: "My Appointments",
        path: "/my-appointments",
        icon: NavIcon::CalendarCheck,
    },
    NavigationItem {
        id: NavId::AllPatients,
        label: "All Patients",
        path: "/patients",
        icon: NavIcon::Users,
    },
    NavigationItem {
        id: NavId::PatientsView,
        label: "Patients View",
        path: "/patients-view",
        icon: NavIcon::Contact,
    },
    NavigationItem {
        id: NavId::MedicalRecords,
        label: "Medical Records",
        path: "/medical-records",
        icon: NavIcon::FileText,
    },
    NavigationItem {
        id: NavId::Doctors,
        label: "Doctors",
        path: "/doctors",
        icon: NavIcon::Stethoscope,
    },
    // Same label as the patient entry below, different target.
    NavigationItem {
        id: NavId::BookAppointmentStaff,
        label: "Book Appointment",
        path: "/appointments/book",
        icon: NavIcon::CalendarPlus,
    },
    NavigationItem {
        id: NavId::BookAppointmentPatient,
        label: "Book Appointment",
        path: "/book-appointment",
        icon: NavIcon::CalendarPlus,
    },
    NavigationItem {
        id: NavId::Users,
        label: "Users",
        path: "/users",
        icon: NavIcon::UserCog,
    },
];

/// Visible navigation for a role: base entries first, then every role-scoped
/// entry the role permits, in table order. No role is treated as `User`.
pub fn navigation_for(role: Option<Role>) -> Vec<&'static NavigationItem> {
    let role = role.unwrap_or_default();
    BASE_ITEMS
        .iter()
        .chain(ROLE_ITEMS.iter().filter(|item| role.permits(item.id)))
        .collect()
}

/// Look up an entry by its target path.
pub fn item_for_path(path: &str) -> Option<&'static NavigationItem> {
    BASE_ITEMS
        .iter()
        .chain(ROLE_ITEMS.iter())
        .find(|item| item.path == path)
}
