pub mod add_location_modal;
pub mod contact_admin_modal;
pub mod info_tooltip;
pub mod location_detail;
pub mod locations;
pub mod user_profile;
