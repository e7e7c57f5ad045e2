/// Strip markdown code fences the model sometimes wraps around its JSON
///
/// Models regularly answer with ```json ... ``` despite being told to emit
/// raw JSON, so this runs before any structural parsing.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}
