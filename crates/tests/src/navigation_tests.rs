use pretty_assertions::assert_eq;
use shared_types::{navigation_for, NavId, Role, BASE_ITEMS, DASHBOARD_PATH, ROLE_ITEMS};

fn labels(role: Option<Role>) -> Vec<&'static str> {
    navigation_for(role).iter().map(|item| item.label).collect()
}

fn ids(role: Option<Role>) -> Vec<NavId> {
    navigation_for(role).iter().map(|item| item.id).collect()
}

fn all_inputs() -> Vec<Option<Role>> {
    Role::ALL.iter().copied().map(Some).chain([None]).collect()
}

#[test]
fn every_role_sees_base_plus_exactly_its_permitted_entries() {
    for role in all_inputs() {
        let effective = role.unwrap_or_default();
        let expected: Vec<NavId> = BASE_ITEMS
            .iter()
            .chain(ROLE_ITEMS.iter().filter(|item| item.roles().contains(&effective)))
            .map(|item| item.id)
            .collect();
        assert_eq!(ids(role), expected, "role {role:?}");
    }
}

#[test]
fn base_entries_always_come_first() {
    for role in all_inputs() {
        let nav = navigation_for(role);
        assert_eq!(nav[0].path, DASHBOARD_PATH, "role {role:?}");
        assert_eq!(nav[0].id, NavId::Dashboard);
    }
}

#[test]
fn role_entries_keep_table_order() {
    for role in all_inputs() {
        let positions: Vec<usize> = navigation_for(role)
            .iter()
            .skip(BASE_ITEMS.len())
            .filter_map(|item| ROLE_ITEMS.iter().position(|r| r.id == item.id))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "role {role:?}");
    }
}

#[test]
fn filter_is_deterministic() {
    for role in all_inputs() {
        assert_eq!(ids(role), ids(role));
    }
}

#[test]
fn assistant_scenario() {
    assert_eq!(
        labels(Some(Role::Assistant)),
        vec![
            "Dashboard",
            "Appointments",
            "All Patients",
            "Patients View",
            "Medical Records",
            "Doctors",
            "Book Appointment",
        ]
    );
}

#[test]
fn user_scenario() {
    assert_eq!(
        labels(Some(Role::User)),
        vec!["Dashboard", "My Appointments", "Book Appointment"]
    );
}

#[test]
fn absent_role_is_treated_as_user() {
    assert_eq!(ids(None), ids(Some(Role::User)));
}

#[test]
fn same_label_entries_are_not_deduplicated() {
    let staff = navigation_for(Some(Role::Assistant));
    let patient = navigation_for(Some(Role::User));
    let staff_book = staff.iter().find(|i| i.label == "Book Appointment").unwrap();
    let patient_book = patient.iter().find(|i| i.label == "Book Appointment").unwrap();
    assert_ne!(staff_book.path, patient_book.path);
    assert_eq!(staff_book.id, NavId::BookAppointmentStaff);
    assert_eq!(patient_book.id, NavId::BookAppointmentPatient);
}

#[test]
fn admin_sees_user_management_but_not_patient_entries() {
    let nav = ids(Some(Role::Admin));
    assert!(nav.contains(&NavId::Users));
    assert!(!nav.contains(&NavId::MyAppointments));
    assert!(!nav.contains(&NavId::PatientsView));
}

#[test]
fn active_entry_matches_exact_path_only() {
    let nav = navigation_for(Some(Role::Assistant));
    let active: Vec<&str> = nav
        .iter()
        .filter(|item| item.is_active("/appointments"))
        .map(|item| item.label)
        .collect();
    assert_eq!(active, vec!["Appointments"]);
    assert!(nav.iter().all(|item| !item.is_active("/appointments/")));
}

#[test]
fn unknown_role_string_falls_back_to_user() {
    assert_eq!(Role::from_str_or_default("receptionist"), Role::User);
    assert_eq!(Role::from_str_or_default("DOCTOR"), Role::Doctor);
}
