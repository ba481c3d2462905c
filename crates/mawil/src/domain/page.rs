//! Path-to-page resolution.

/// Prefix of parameterized program detail routes.
pub const PROGRAM_ROUTE_PREFIX: &str = "/programs/";
/// Prefix of parameterized policy detail routes.
pub const POLICY_ROUTE_PREFIX: &str = "/policies/";
/// Path shown when the application starts.
pub const HOME_PATH: &str = "/";

/// Resolved page kind plus the parameters its view needs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PageDescriptor {
    Home,
    About,
    Governance,
    AcademicModel,
    ProgramList,
    /// Program detail for an id that has not been checked against content.
    ProgramDetail(String),
    AdmissionsInfo,
    PolicyList,
    /// Policy detail for a slug that has not been checked against content.
    PolicyDetail(String),
    StaffDirectory,
    Contact,
    /// Unrecognized path, kept for the not-found message.
    NotFound(String),
}

static STATIC_ROUTES: [(&str, PageDescriptor); 9] = [
    (HOME_PATH, PageDescriptor::Home),
    ("/about", PageDescriptor::About),
    ("/governance", PageDescriptor::Governance),
    ("/academic-model", PageDescriptor::AcademicModel),
    ("/programs", PageDescriptor::ProgramList),
    ("/admissions", PageDescriptor::AdmissionsInfo),
    ("/policies", PageDescriptor::PolicyList),
    ("/contact", PageDescriptor::Contact),
    ("/staff", PageDescriptor::StaffDirectory),
];

impl PageDescriptor {
    /// Resolves `path` into exactly one descriptor.
    ///
    /// Parameterized prefixes are checked before the static table. Matching
    /// is case-sensitive and performs no normalization, so `/about/` does
    /// not resolve to `About`.
    pub fn resolve(path: &str) -> Self {
        if let Some(id) = parameter_segment(path, PROGRAM_ROUTE_PREFIX) {
            return Self::ProgramDetail(id.to_string());
        }

        if let Some(slug) = parameter_segment(path, POLICY_ROUTE_PREFIX) {
            return Self::PolicyDetail(slug.to_string());
        }

        STATIC_ROUTES
            .iter()
            .find(|(route, _)| *route == path)
            .map_or_else(
                || Self::NotFound(path.to_string()),
                |(_, descriptor)| descriptor.clone(),
            )
    }

    /// Returns the canonical path for this descriptor.
    pub fn path(&self) -> String {
        match self {
            Self::ProgramDetail(id) => format!("{PROGRAM_ROUTE_PREFIX}{id}"),
            Self::PolicyDetail(slug) => format!("{POLICY_ROUTE_PREFIX}{slug}"),
            Self::NotFound(path) => path.clone(),
            static_page => STATIC_ROUTES
                .iter()
                .find(|(_, descriptor)| descriptor == static_page)
                .map_or_else(|| HOME_PATH.to_string(), |(route, _)| (*route).to_string()),
        }
    }

    /// Returns the heading used in window titles and logs.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Governance => "Governance",
            Self::AcademicModel => "Academic Model",
            Self::ProgramList => "Programs",
            Self::ProgramDetail(_) => "Program Details",
            Self::AdmissionsInfo => "Admissions",
            Self::PolicyList => "Policies",
            Self::PolicyDetail(_) => "Policy",
            Self::StaffDirectory => "Staff Directory",
            Self::Contact => "Contact",
            Self::NotFound(_) => "Not Found",
        }
    }
}

/// Returns the path segment right after `prefix`, up to the next `/`.
fn parameter_segment<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;

    Some(rest.split('/').next().unwrap_or_default())
}
