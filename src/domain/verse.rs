use serde::Serialize;

/// One verse (ayah) of a chapter, in the source script.
#[derive(Debug, Clone, Serialize)]
pub struct Verse {
    /// Global sequential number across the whole text (1–6236).
    pub number: u32,
    /// 1-based position within the owning chapter.
    pub number_in_chapter: u32,
    pub text: String,
    /// Which of the 30 reading divisions this verse falls in.
    pub juz: u8,
    /// Recitation audio locator, attached during assembly.
    pub audio: Option<String>,
}
