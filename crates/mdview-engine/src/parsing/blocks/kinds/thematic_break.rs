/// Horizontal rule: three or more of one of `-`, `*`, `_`, spaces allowed
/// between them.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: &'static [u8] = b"-*_";
    pub const MIN_COUNT: usize = 3;
    pub const HTML: &'static str = "<hr>\n";

    pub fn matches(line: &str) -> bool {
        let t = line.trim_start_matches([' ', '\t']);
        let Some(&marker) = t.as_bytes().first() else {
            return false;
        };
        if !Self::MARKERS.contains(&marker) {
            return false;
        }
        let mut count = 0usize;
        for b in t.bytes() {
            if b == marker {
                count += 1;
            } else if b != b' ' {
                return false;
            }
        }
        count >= Self::MIN_COUNT
    }
}
