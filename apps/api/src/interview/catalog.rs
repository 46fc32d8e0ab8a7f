//! The step catalog: the fixed, ordered list of profile fields the interview
//! walks through. Immutable configuration data — order defines the only valid
//! progression.

/// How a step's answer is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free text that must not contain digits (person names).
    Name,
    Text,
    Email,
    Phone,
    Selection,
    LongText,
}

/// Whether a step collects a field or marks the end of the sequence.
/// The terminal step is an explicit marker so nothing has to key off the
/// catalog's last position or an input-type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRole {
    Collect,
    Terminal,
}

#[derive(Debug)]
pub struct StepDefinition {
    /// Unique key in the collected-data map.
    pub field: &'static str,
    pub question: &'static str,
    pub mandatory: bool,
    pub input: InputKind,
    pub role: StepRole,
    /// Static fallback suggestions, shown when no dynamic list is available.
    pub suggestions: &'static [&'static str],
}

pub static RESUME_STEPS: &[StepDefinition] = &[
    StepDefinition {
        field: "full_name",
        question: "Let's build your profile. **Upload your Resume (PDF)** or tell me your **Full Name**.",
        mandatory: true,
        input: InputKind::Name,
        role: StepRole::Collect,
        suggestions: &[],
    },
    StepDefinition {
        field: "email",
        question: "What is your **Email Address**?",
        mandatory: true,
        input: InputKind::Email,
        role: StepRole::Collect,
        suggestions: &[],
    },
    StepDefinition {
        field: "phone",
        question: "What is your **Phone Number**?",
        mandatory: true,
        input: InputKind::Phone,
        role: StepRole::Collect,
        suggestions: &[],
    },
    StepDefinition {
        field: "experience_level",
        question: "What is your **Experience Level**?",
        mandatory: true,
        input: InputKind::Selection,
        role: StepRole::Collect,
        suggestions: &["Intern", "Entry Level", "Mid Level", "Senior", "Lead"],
    },
    StepDefinition {
        field: "domain",
        question: "Which **Industry or Domain** are you interested in?",
        mandatory: true,
        input: InputKind::Text,
        role: StepRole::Collect,
        suggestions: &["Software Development", "Data Science", "Finance", "Marketing"],
    },
    StepDefinition {
        field: "job_title",
        question: "Target **Job Title**?",
        mandatory: true,
        input: InputKind::Text,
        role: StepRole::Collect,
        suggestions: &[],
    },
    StepDefinition {
        field: "skills",
        question: "Top 3-5 **Skills**? (Type 'Suggest Skills' for AI help)",
        mandatory: true,
        input: InputKind::Text,
        role: StepRole::Collect,
        suggestions: &[],
    },
    StepDefinition {
        field: "summary",
        question: "Professional **Summary**? (Type 'Generate' to see options)",
        mandatory: true,
        input: InputKind::LongText,
        role: StepRole::Collect,
        suggestions: &["Generate Options", "Show Example"],
    },
    StepDefinition {
        field: "critique",
        question: "Profile complete! Review your profile. Check ATS Score or Submit.",
        mandatory: false,
        input: InputKind::Text,
        role: StepRole::Terminal,
        suggestions: &["Check ATS Score", "Submit"],
    },
];

/// The terminal review step.
pub fn terminal_step() -> &'static StepDefinition {
    RESUME_STEPS
        .iter()
        .find(|s| s.role == StepRole::Terminal)
        .expect("catalog defines a terminal step")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fields_are_unique() {
        let fields: HashSet<_> = RESUME_STEPS.iter().map(|s| s.field).collect();
        assert_eq!(fields.len(), RESUME_STEPS.len());
    }

    #[test]
    fn test_exactly_one_terminal_step() {
        let terminals: Vec<_> = RESUME_STEPS
            .iter()
            .filter(|s| s.role == StepRole::Terminal)
            .collect();
        assert_eq!(terminals.len(), 1);
        assert_eq!(terminals[0].field, "critique");
        assert!(!terminals[0].mandatory);
    }

    #[test]
    fn test_terminal_step_is_last() {
        assert_eq!(terminal_step().field, RESUME_STEPS.last().unwrap().field);
    }

    #[test]
    fn test_mandatory_fields_precede_terminal() {
        let mandatory: Vec<_> = RESUME_STEPS
            .iter()
            .filter(|s| s.mandatory)
            .map(|s| s.field)
            .collect();
        assert_eq!(
            mandatory,
            vec![
                "full_name",
                "email",
                "phone",
                "experience_level",
                "domain",
                "job_title",
                "skills",
                "summary"
            ]
        );
    }
}
