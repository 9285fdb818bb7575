/// Instruction placed before the diff.
const COMMIT_INSTRUCTION: &str = "Generate a concise git commit message for these changes.

Rules:
- Output a single commit message in plain text
- Do not use markdown formatting or code fences
- Do not add quotes, explanations or alternatives";

/// Builds the single user message sent to the model.
pub fn build_commit_prompt(diff: &str) -> String {
    format!("{}\n\n{}", COMMIT_INSTRUCTION, diff)
}
