/// Strikethrough `~~text~~`.
pub struct Strikethrough;

impl Strikethrough {
    pub const DELIM: &'static str = "~~";
}
