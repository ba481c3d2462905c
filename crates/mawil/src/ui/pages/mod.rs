pub mod about;
pub mod academic_model;
pub mod admissions;
pub mod contact;
pub mod governance;
pub mod home;
pub mod not_found;
pub mod policy_detail;
pub mod policy_list;
pub mod program_detail;
pub mod program_list;
pub mod staff_directory;
