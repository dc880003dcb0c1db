use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdCalendarCheck, LdCalendarPlus, LdContact, LdFileText, LdLayoutDashboard,
    LdStethoscope, LdUserCog, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::NavIcon;

const SIZE: u32 = 18;

/// Lucide glyph for a navigation entry.
#[component]
pub fn NavIconGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::LayoutDashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: SIZE, height: SIZE } },
        NavIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: SIZE, height: SIZE } },
        NavIcon::CalendarCheck => rsx! { Icon::<LdCalendarCheck> { icon: LdCalendarCheck, width: SIZE, height: SIZE } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: SIZE, height: SIZE } },
        NavIcon::Contact => rsx! { Icon::<LdContact> { icon: LdContact, width: SIZE, height: SIZE } },
        NavIcon::FileText => rsx! { Icon::<LdFileText> { icon: LdFileText, width: SIZE, height: SIZE } },
        NavIcon::Stethoscope => rsx! { Icon::<LdStethoscope> { icon: LdStethoscope, width: SIZE, height: SIZE } },
        NavIcon::CalendarPlus => rsx! { Icon::<LdCalendarPlus> { icon: LdCalendarPlus, width: SIZE, height: SIZE } },
        NavIcon::UserCog => rsx! { Icon::<LdUserCog> { icon: LdUserCog, width: SIZE, height: SIZE } },
    }
}
