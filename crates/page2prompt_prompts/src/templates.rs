//! Instruction template for the three-length prompt request.

pub(crate) const PROMPT_BUNDLE: &str = "\
Generate three prompts (concise, normal, and detailed) based on the following information:

Shot Description: {{shot_description}}
Director's Notes: {{directors_notes}}
{{shot_block}}

{{script_block}}

{{subjects_block}}

{{style_block}}

{{director_block}}

{{camera_block}}

Guidelines:
1. Concise: About {{concise_words}} words.
2. Normal: About {{normal_words}} words.
3. Detailed: About {{detailed_words}} words.
4. Focus on describing the scene visually.
5. Incorporate style elements subtly.
6. Include camera work if specified.

Write the three prompts in that order, separated by a single blank line, without labels or numbering.";
