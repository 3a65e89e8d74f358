/// Hard line break: two or more spaces right before a line boundary.
pub struct HardBreak;

impl HardBreak {
    pub const MIN_SPACES: usize = 2;
    pub const HTML: &'static str = "<br>\n";
}
