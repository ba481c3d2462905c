//! Link targets offered by the header and by each page.

use crate::domain::content::ContentStore;
use crate::domain::page::{HOME_PATH, POLICY_ROUTE_PREFIX, PROGRAM_ROUTE_PREFIX, PageDescriptor};

/// Highest number a page link can be followed with.
pub const MAX_NUMBERED_LINKS: usize = 9;
/// Target of the header "Apply Now" action.
pub const APPLY_PATH: &str = "/admissions";

/// Header tabs in display order as `(label, path)`.
pub const HEADER_LINKS: [(&str, &str); 5] = [
    ("Home", HOME_PATH),
    ("About", "/about"),
    ("Programs", "/programs"),
    ("Admissions", APPLY_PATH),
    ("Contact", "/contact"),
];

/// Footer link groups as `(heading, [(label, path)])`.
pub const FOOTER_GROUPS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Governance",
        &[
            ("Institutional Mandate", "/about"),
            ("Board of Trustees", "/governance"),
            ("Faculty Directory", "/staff"),
        ],
    ),
    (
        "Academics",
        &[
            ("Programs & Curriculum", "/programs"),
            ("Instructional Delivery", "/academic-model"),
            ("Admissions", APPLY_PATH),
            ("Student Policies", "/policies"),
        ],
    ),
    (
        "Policies",
        &[
            ("Non-Discrimination Policy", "/policies/nondiscrimination"),
            ("Privacy Policy", "/policies/privacy"),
            ("Terms of Service", "/policies/terms"),
            ("Grievance Procedures", "/policies/grievance"),
        ],
    ),
];

/// In-page link followed by number.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageLink {
    pub label: String,
    pub path: String,
}

impl PageLink {
    fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Returns the numbered links rendered on `page`, at most
/// [`MAX_NUMBERED_LINKS`] of them.
pub fn page_links(page: &PageDescriptor, content: &ContentStore) -> Vec<PageLink> {
    let mut links = match page {
        PageDescriptor::Home => vec![
            PageLink::new("View Academic Programs", "/programs"),
            PageLink::new("Admissions", APPLY_PATH),
            PageLink::new("Scientific Excellence: View Model", "/academic-model"),
            PageLink::new("Faculty & Research: View Directory", "/staff"),
            PageLink::new("Institutional Governance: View Leadership", "/governance"),
        ],
        PageDescriptor::About => vec![
            PageLink::new("Board of Trustees", "/governance"),
            PageLink::new("Faculty Directory", "/staff"),
            PageLink::new("Contact Us", "/contact"),
        ],
        PageDescriptor::Governance => vec![
            PageLink::new("Institutional Mandate", "/about"),
            PageLink::new("Faculty Directory", "/staff"),
        ],
        PageDescriptor::AcademicModel => vec![
            PageLink::new("Programs & Curriculum", "/programs"),
            PageLink::new("Student Policies", "/policies"),
        ],
        PageDescriptor::ProgramList => content
            .programs()
            .iter()
            .map(|program| {
                PageLink::new(
                    format!("View Details: {}", program.title),
                    format!("{PROGRAM_ROUTE_PREFIX}{}", program.id),
                )
            })
            .chain(std::iter::once(PageLink::new("Admissions", APPLY_PATH)))
            .collect(),
        PageDescriptor::ProgramDetail(id) if content.program(id).is_some() => vec![
            PageLink::new("Apply for this Program", APPLY_PATH),
            PageLink::new("Back to Programs", "/programs"),
        ],
        PageDescriptor::ProgramDetail(_) => vec![PageLink::new("Back to Programs", "/programs")],
        PageDescriptor::AdmissionsInfo => vec![
            PageLink::new("Programs & Curriculum", "/programs"),
            PageLink::new("Student Policies", "/policies"),
            PageLink::new("Contact Us", "/contact"),
        ],
        PageDescriptor::PolicyList => content
            .policies()
            .iter()
            .map(|policy| {
                PageLink::new(
                    policy.label.clone(),
                    format!("{POLICY_ROUTE_PREFIX}{}", policy.slug),
                )
            })
            .collect(),
        PageDescriptor::PolicyDetail(_) => vec![
            PageLink::new("All Policies", "/policies"),
            PageLink::new("Contact Us", "/contact"),
        ],
        PageDescriptor::StaffDirectory => vec![PageLink::new("Contact Us", "/contact")],
        PageDescriptor::Contact | PageDescriptor::NotFound(_) => {
            vec![PageLink::new("Return Home", HOME_PATH)]
        }
    };
    links.truncate(MAX_NUMBERED_LINKS);

    links
}

/// Returns the index of the header tab highlighted for `page`.
///
/// Program details highlight "Programs"; pages outside the header return
/// `None`.
pub fn active_header_index(page: &PageDescriptor) -> Option<usize> {
    let path = match page {
        PageDescriptor::ProgramDetail(_) => "/programs".to_string(),
        other => other.path(),
    };

    HEADER_LINKS
        .iter()
        .position(|(_, header_path)| *header_path == path)
}
