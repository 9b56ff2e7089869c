// Cross-cutting prompt fragments shared by every prompt template.
// Feature-specific templates live next to the feature that uses them.

/// Appended to prompts whose answer is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Jawab HANYA dengan satu objek JSON yang valid. \
    Jangan menambahkan teks apa pun di luar objek JSON. \
    Jangan gunakan blok kode markdown. \
    Jangan menambahkan penjelasan atau permintaan maaf.";

/// Appended to prompts whose answer is relayed as plain text.
pub const PLAIN_ANSWER_INSTRUCTION: &str =
    "Jawab hanya dengan terjemahannya saja, tanpa penjelasan tambahan.";
