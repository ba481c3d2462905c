//! Read-only institutional content: programs, staff, policies, and the
//! facts rendered by the informational pages.

use rustc_hash::FxHashMap;
use serde::Deserialize;

const EMBEDDED_CONTENT: &str = include_str!("../../resources/content.json");

/// Errors raised while loading the content store.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to parse institutional content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {kind} key `{key}` in institutional content")]
    DuplicateKey { kind: &'static str, key: String },
}

/// Institution profile shown in the header, footer, and contact page.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Institution {
    pub name: String,
    pub subtitle: String,
    pub address: PostalAddress,
    pub email: String,
    pub license_number: String,
    pub founded_year: u16,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct PostalAddress {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub postal: String,
    pub country: String,
}

impl PostalAddress {
    /// Returns the address as a single comma-separated line.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.line1, self.line2, self.city, self.postal, self.country
        )
    }
}

/// One academic program offered by the institute.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Program {
    pub id: String,
    pub title: String,
    pub level: String,
    pub duration: String,
    pub delivery: String,
    pub overview: String,
    pub prerequisites: String,
    pub modules: Vec<ProgramModule>,
    pub outcomes: Vec<String>,
}

impl Program {
    /// Returns the credit total across all curriculum modules.
    pub fn total_credits(&self) -> u32 {
        self.modules.iter().map(|module| module.credits).sum()
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct ProgramModule {
    pub code: String,
    pub title: String,
    pub credits: u32,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub credentials: String,
    pub email: String,
}

/// Policy document addressed by its slug under `/policies/`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct PolicyDocument {
    pub slug: String,
    pub title: String,
    /// Link label used by the policy index.
    pub label: String,
    pub sections: Vec<PolicySection>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct PolicySection {
    pub heading: String,
    pub blocks: Vec<PolicyBlock>,
}

/// Structured body content of a policy section.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyBlock {
    Paragraph {
        text: String,
    },
    List {
        items: Vec<String>,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct AdmissionsInfo {
    pub requirements: Vec<String>,
    pub tuition_note: String,
    pub steps: Vec<String>,
}

/// One row of the published academic calendar.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct AcademicTerm {
    pub term: String,
    pub start: String,
    pub end: String,
    pub status: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Governance {
    pub board: Vec<BoardMember>,
    pub units: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct BoardMember {
    pub name: String,
    pub title: String,
    pub biography: String,
}

#[derive(Deserialize)]
struct ContentDocument {
    institution: Institution,
    programs: Vec<Program>,
    staff: Vec<StaffMember>,
    policies: Vec<PolicyDocument>,
    admissions: AdmissionsInfo,
    calendar: Vec<AcademicTerm>,
    governance: Governance,
}

/// Immutable in-memory content loaded once at startup.
///
/// Lookups by program id and policy slug go through hash indexes built at
/// load time; enumeration preserves document order.
#[derive(Debug)]
pub struct ContentStore {
    institution: Institution,
    programs: Vec<Program>,
    program_index: FxHashMap<String, usize>,
    staff: Vec<StaffMember>,
    policies: Vec<PolicyDocument>,
    policy_index: FxHashMap<String, usize>,
    admissions: AdmissionsInfo,
    calendar: Vec<AcademicTerm>,
    governance: Governance,
}

impl ContentStore {
    /// Loads the content bundled into the binary.
    ///
    /// # Errors
    /// Returns an error when the bundled document is malformed or repeats a
    /// program id or policy slug.
    pub fn load_embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    /// Parses a content document from JSON text.
    ///
    /// # Errors
    /// Returns an error when `json` is malformed or repeats a program id or
    /// policy slug.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let document = serde_json::from_str::<ContentDocument>(json)?;
        let program_index = build_index(&document.programs, "program", |program| &program.id)?;
        let policy_index = build_index(&document.policies, "policy", |policy| &policy.slug)?;

        Ok(Self {
            institution: document.institution,
            programs: document.programs,
            program_index,
            staff: document.staff,
            policies: document.policies,
            policy_index,
            admissions: document.admissions,
            calendar: document.calendar,
            governance: document.governance,
        })
    }

    pub fn institution(&self) -> &Institution {
        &self.institution
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    /// Returns the program with `id`, if one exists.
    pub fn program(&self, id: &str) -> Option<&Program> {
        self.program_index
            .get(id)
            .and_then(|index| self.programs.get(*index))
    }

    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    pub fn policies(&self) -> &[PolicyDocument] {
        &self.policies
    }

    /// Returns the policy document addressed by `slug`, if one exists.
    pub fn policy(&self, slug: &str) -> Option<&PolicyDocument> {
        self.policy_index
            .get(slug)
            .and_then(|index| self.policies.get(*index))
    }

    pub fn admissions(&self) -> &AdmissionsInfo {
        &self.admissions
    }

    pub fn calendar(&self) -> &[AcademicTerm] {
        &self.calendar
    }

    pub fn governance(&self) -> &Governance {
        &self.governance
    }

    /// Returns department names in the order they first appear in the staff
    /// roster.
    pub fn departments(&self) -> Vec<&str> {
        let mut departments: Vec<&str> = Vec::new();
        for member in &self.staff {
            if !departments.contains(&member.department.as_str()) {
                departments.push(member.department.as_str());
            }
        }

        departments
    }

    /// Returns staff members belonging to `department`, in roster order.
    pub fn staff_in_department<'a>(
        &'a self,
        department: &'a str,
    ) -> impl Iterator<Item = &'a StaffMember> + 'a {
        self.staff
            .iter()
            .filter(move |member| member.department == department)
    }
}

fn build_index<T>(
    items: &[T],
    kind: &'static str,
    key: impl Fn(&T) -> &String,
) -> Result<FxHashMap<String, usize>, ContentError> {
    let mut index = FxHashMap::default();
    for (position, item) in items.iter().enumerate() {
        let item_key = key(item);
        if index.insert(item_key.clone(), position).is_some() {
            return Err(ContentError::DuplicateKey {
                kind,
                key: item_key.clone(),
            });
        }
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded_store() -> ContentStore {
        ContentStore::load_embedded().expect("embedded content should parse")
    }

    #[test]
    fn test_load_embedded_exposes_programs_in_document_order() {
        // Arrange
        let store = embedded_store();

        // Act
        let program_ids: Vec<&str> = store
            .programs()
            .iter()
            .map(|program| program.id.as_str())
            .collect();

        // Assert
        assert_eq!(program_ids, vec!["conservation-bio", "marine-ecosystems"]);
        assert_eq!(store.institution().email, "info@mawil.org");
    }

    #[test]
    fn test_program_lookup_returns_none_for_unknown_id() {
        // Arrange
        let store = embedded_store();

        // Act
        let known = store.program("marine-ecosystems");
        let unknown = store.program("astrophysics");

        // Assert
        assert_eq!(
            known.map(|program| program.title.as_str()),
            Some("Advanced Seminar: Marine Ecosystems")
        );
        assert!(unknown.is_none());
    }

    #[test]
    fn test_policy_lookup_is_case_sensitive() {
        // Arrange
        let store = embedded_store();

        // Act
        let exact = store.policy("privacy");
        let upper = store.policy("Privacy");

        // Assert
        assert!(exact.is_some());
        assert!(upper.is_none());
    }

    #[test]
    fn test_departments_keep_first_appearance_order() {
        // Arrange
        let store = embedded_store();

        // Act
        let departments = store.departments();

        // Assert
        assert_eq!(departments.first(), Some(&"Administration / Tech"));
        assert_eq!(departments.get(1), Some(&"Operations & Administration"));
        assert_eq!(departments.last(), Some(&"Partnerships"));
        assert_eq!(departments.len(), 9);
    }

    #[test]
    fn test_staff_in_department_filters_roster() {
        // Arrange
        let store = embedded_store();

        // Act
        let names: Vec<&str> = store
            .staff_in_department("Website & Development")
            .map(|member| member.name.as_str())
            .collect();

        // Assert
        assert_eq!(names, vec!["AbdulHakim Khan", "Omer Hijazi"]);
    }

    #[test]
    fn test_total_credits_sums_modules() {
        // Arrange
        let store = embedded_store();

        // Act
        let credits = store
            .program("conservation-bio")
            .map(Program::total_credits);

        // Assert
        assert_eq!(credits, Some(10));
    }

    #[test]
    fn test_from_json_rejects_duplicate_program_ids() {
        // Arrange
        let mut document: serde_json::Value =
            serde_json::from_str(EMBEDDED_CONTENT).expect("embedded content is JSON");
        let first_program = document["programs"][0].clone();
        document["programs"]
            .as_array_mut()
            .expect("programs is an array")
            .push(first_program);

        // Act
        let result = ContentStore::from_json(&document.to_string());

        // Assert
        assert!(matches!(
            result,
            Err(ContentError::DuplicateKey { kind: "program", ref key }) if key == "conservation-bio"
        ));
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        // Arrange
        let json = "{ \"institution\": 42 }";

        // Act
        let result = ContentStore::from_json(json);

        // Assert
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_assessment_policy_carries_grading_table() {
        // Arrange
        let store = embedded_store();

        // Act
        let has_table = store.policy("assessment").is_some_and(|policy| {
            policy.sections.iter().any(|section| {
                section
                    .blocks
                    .iter()
                    .any(|block| matches!(block, PolicyBlock::Table { rows, .. } if rows.len() == 5))
            })
        });

        // Assert
        assert!(has_table);
    }
}
