//! LLM prompt constants for the interview module. Templates use `{placeholder}`
//! markers replaced at the call site.

/// System prompt for suggestion lists — a bare comma-separated list only.
pub const SUGGESTION_SYSTEM: &str = "You are a career advisor. \
    Respond with a single comma-separated list only. \
    Do NOT number the items. \
    Do NOT include any text before or after the list.";

/// Job-title suggestions. Replace `{experience_level}` and `{domain}`.
pub const JOB_TITLE_SUGGESTION_TEMPLATE: &str =
    "List 3 standard job titles for a '{experience_level}' professional in '{domain}'. \
     Output comma-separated.";

/// Skill suggestions. Replace `{job_title}`.
pub const SKILLS_SUGGESTION_TEMPLATE: &str =
    "List 6 distinct single skills for a '{job_title}'. Output comma-separated.";

pub const ATS_SYSTEM: &str = "You are an applicant-tracking-system reviewer. \
    Be concise and concrete. Markdown formatting is allowed.";

/// ATS scan over the whole collected profile. Replace `{profile}` with the
/// profile serialized as JSON.
pub const ATS_PROMPT_TEMPLATE: &str =
    "ATS Scan. Profile: {profile}. Give a score (0-100), 3 missing keywords, and brief feedback.";

pub const SUMMARY_SYSTEM: &str = "You are a professional resume writer. \
    Follow the output format exactly. No headers, no numbering.";

/// Two summary drafts separated by '|||'. Replace `{job_title}` and `{skills}`.
pub const SUMMARY_OPTIONS_TEMPLATE: &str =
    "Write 2 professional summaries for a '{job_title}' with skills '{skills}'. \
     Separate the two options with '|||'. No headers.";
