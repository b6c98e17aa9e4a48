//! Meta-prompt templates sent to the LLM provider.
//!
//! Templates are rendered with minijinja. Template names carry a `.txt`
//! extension so auto-escaping stays off and user text is inserted verbatim.

use crate::error::Result;
use minijinja::{Environment, context};
use once_cell::sync::Lazy;

const ENGINEER_TEMPLATE_NAME: &str = "engineer.txt";
const EXPLAIN_TEMPLATE_NAME: &str = "explain.txt";

const ENGINEER_TEMPLATE: &str = r#"You are Dairo, an expert Prompt Engineering assistant. Your goal is to take a user's raw prompt and rewrite it to be significantly more effective for a large language model.

Adhere to these principles when rewriting:
1.  **Add a Persona:** Assign a clear, expert role to the LLM. For this request, the persona is: "{{ persona }}".
2.  **Provide Context:** Add necessary background information that the LLM might need to understand the user's goal.
3.  **Specify Format:** Define the desired output format (e.g., "Provide the answer in a markdown table," "Use JSON format," "Write in a friendly, encouraging tone.").
4.  **Add Constraints:** Add negative constraints to tell the model what *not* to do (e.g., "Do not use technical jargon," "Keep the explanation under 200 words.").
5.  **Be Specific and Clear:** Remove ambiguity and add detail to ensure the output is precise.

Now, take the following user's prompt and rewrite it based on all the principles above. Return ONLY the rewritten, improved prompt and nothing else. Do not include any of your own preamble or explanation.

User's Prompt:
"""
{{ user_prompt }}
""""#;

const EXPLAIN_TEMPLATE: &str = r#"You are an expert prompt engineering instructor. Your goal is to explain WHY the "Engineered Prompt" is better and more effective than the "Original Prompt".

Focus your explanation on the core principles of good prompt design that were applied, such as adding a persona, providing context, specifying a format, and adding constraints.
Keep your explanation concise, clear, and educational for someone new to prompt engineering. Use markdown for formatting if it helps clarify the points.

---
**Original Prompt:**
"""
{{ original_prompt }}
"""
---
**Engineered Prompt:**
"""
{{ engineered_prompt }}
"""
---

Now, provide the explanation."#;

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    // Sources are constants, covered by the tests below.
    env.add_template(ENGINEER_TEMPLATE_NAME, ENGINEER_TEMPLATE)
        .expect("engineer template must parse");
    env.add_template(EXPLAIN_TEMPLATE_NAME, EXPLAIN_TEMPLATE)
        .expect("explain template must parse");
    env
});

/// Renders the meta-prompt that asks the model to rewrite `user_prompt`
/// while adopting `persona_descriptor` as the assigned role.
pub fn render_engineer_prompt(persona_descriptor: &str, user_prompt: &str) -> Result<String> {
    let template = TEMPLATES.get_template(ENGINEER_TEMPLATE_NAME)?;
    Ok(template.render(context! {
        persona => persona_descriptor,
        user_prompt => user_prompt,
    })?)
}

/// Renders the meta-prompt that asks the model to explain the improvements.
pub fn render_explain_prompt(original_prompt: &str, engineered_prompt: &str) -> Result<String> {
    let template = TEMPLATES.get_template(EXPLAIN_TEMPLATE_NAME)?;
    Ok(template.render(context! {
        original_prompt => original_prompt,
        engineered_prompt => engineered_prompt,
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engineer_prompt_embeds_persona_and_prompt() {
        let rendered =
            render_engineer_prompt("a senior software architect", "Design a chat app").unwrap();

        assert!(rendered.starts_with("You are Dairo, an expert Prompt Engineering assistant."));
        assert!(rendered.contains("the persona is: \"a senior software architect\"."));
        assert!(rendered.ends_with("User's Prompt:\n\"\"\"\nDesign a chat app\n\"\"\""));
    }

    #[test]
    fn test_user_text_is_not_escaped_or_evaluated() {
        let raw = "Compare <b>A</b> & \"B\" using {{ persona }}";
        let rendered = render_engineer_prompt("an expert in the relevant field", raw).unwrap();

        assert!(rendered.contains(raw));
    }

    #[test]
    fn test_explain_prompt_embeds_both_prompts_in_order() {
        let rendered = render_explain_prompt("write a poem", "You are a poet...").unwrap();

        let original = rendered.find("write a poem").unwrap();
        let engineered = rendered.find("You are a poet...").unwrap();
        assert!(original < engineered);
        assert!(rendered.contains("**Original Prompt:**"));
        assert!(rendered.contains("**Engineered Prompt:**"));
        assert!(rendered.ends_with("Now, provide the explanation."));
    }

    #[test]
    fn test_multiline_prompt_preserved() {
        let raw = "line one\n\n  line two";
        let rendered = render_explain_prompt(raw, "x").unwrap();
        assert!(rendered.contains("\"\"\"\nline one\n\n  line two\n\"\"\""));
    }
}
