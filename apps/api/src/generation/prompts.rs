// Prompt templates for artifact generation.
// Each template embeds the technical summary verbatim at `{summary}`.

/// ABAP code generation prompt.
pub const CODE_PROMPT_TEMPLATE: &str =
    "Generate ABAP code based on the following functional summary:\n\n{summary}";

/// Unit Test Plan prompt.
pub const UTP_PROMPT_TEMPLATE: &str = "Based on the following technical summary, generate a detailed Unit Test Plan with step-by-step test cases:\n\n{summary}";

/// Technical Specification prompt.
pub const TS_PROMPT_TEMPLATE: &str = "Based on the following functional summary, generate a detailed Technical Specification document:\n\n{summary}";

/// Substitutes the summary into a template. The summary is inserted as-is, even when empty.
pub fn render(template: &str, summary: &str) -> String {
    template.replace("{summary}", summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_embeds_summary_verbatim() {
        let prompt = render(CODE_PROMPT_TEMPLATE, "Table ZSALES\nRFC Z_READ");
        assert_eq!(
            prompt,
            "Generate ABAP code based on the following functional summary:\n\nTable ZSALES\nRFC Z_READ"
        );
    }

    #[test]
    fn test_render_with_empty_summary() {
        let prompt = render(TS_PROMPT_TEMPLATE, "");
        assert!(prompt.ends_with("Technical Specification document:\n\n"));
    }

    #[test]
    fn test_each_template_has_one_placeholder() {
        for template in [CODE_PROMPT_TEMPLATE, UTP_PROMPT_TEMPLATE, TS_PROMPT_TEMPLATE] {
            assert_eq!(template.matches("{summary}").count(), 1);
        }
    }
}
