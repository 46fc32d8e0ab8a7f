//! LLM prompts for structuring raw resume text into profile fields.

/// System prompt — enforces JSON-only output.
pub const EXTRACT_SYSTEM: &str = "You are an expert resume analyst. \
    Extract structured profile details from raw resume text. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Extraction prompt template. Replace `{resume_text}` before sending.
/// The key set matches the interview catalog's mandatory fields exactly.
pub const EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract details from the resume text below into a JSON object.

Use EXACTLY these keys (use an empty string when a detail is absent):
{
  "full_name": "",
  "email": "",
  "phone": "",
  "experience_level": "",
  "domain": "",
  "job_title": "",
  "skills": "",
  "summary": ""
}

"experience_level" is one of: Intern, Entry Level, Mid Level, Senior, Lead.
"skills" is a single comma-separated string, not an array.
"summary" is 2-3 sentences in the candidate's voice.

RESUME TEXT:
{resume_text}"#;
