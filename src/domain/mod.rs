pub mod chapter;
pub mod verse;
pub mod view;

pub use chapter::{slugify, Chapter, Revelation};
pub use verse::Verse;
pub use view::{ChapterView, TranslationSet};
