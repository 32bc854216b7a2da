//! Instruction templates sent to the completion gateway.

pub(crate) const SHOT_LIST: &str = "\
Given the following script, generate a proposed detailed shot list.
Include the following information for each shot, separated by pipe characters (|):
1. Timestamp
2. Scene
3. Shot
4. Reference
5. Shot Description
6. Shot Size
7. People
8. Places

Script:
{{script}}

Important instructions:
- Do not include any headers, labels, or titles in the output.
- Start each new line with the timestamp.
- Use N/A for any fields that are not applicable or cannot be determined from the script.
- For the Reference, include the exact portion of the script this shot is based on, word-for-word.
- Scene numbers should change when the script indicates a new scene (e.g., INT. ROOM - DAY).
- Shot numbers should restart at 1 for each new scene.
- Make the Shot Description add detail beyond the Reference.
- Separate multiple people or places with commas.";

pub(crate) const DIRECTOR_NOTES: &str = "\
Given the following script excerpt and shot description, write detailed director's notes for this shot.

Scene: {{scene}}
Shot: {{shot}}
Shot Size: {{size}}
Places: {{places}}
Script Excerpt: {{reference}}
Shot Description: {{description}}
People: {{people}}

{{style_block}}

{{director_block}}

Cover blocking, camera movement, lighting and performance in a single paragraph.
Director's Notes:";

pub(crate) const SUBJECT_EXTRACTION: &str = r#"Identify the recurring people, places and props in the following script.

Script:
{{script}}

{{mentions_block}}

Respond with JSON only, in this shape:
{"subjects": [{"name": "...", "description": "...", "type": "person|place|prop"}]}
Use the names exactly as they appear in the script. Keep each description to one sentence."#;
