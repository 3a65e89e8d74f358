//! Minimal HTML page shell around a rendered fragment.

use mdview_config::Settings;
use mdview_engine::parsing::writer::escape_text;

const LIGHT_PALETTE: &str = "--fg:#24292e;--bg:#fff;--heading:#1a1a1a;--panel:#f6f8fa;\
--border:#e1e4e8;--link:#0366d6;--muted:#6a737d;--code:#d73a49;--stripe:#f9f9f9";

const DARK_PALETTE: &str = "--fg:#d4d4d4;--bg:#1e1e1e;--heading:#e0e0e0;--panel:#2d2d2d;\
--border:#444;--link:#569cd6;--muted:#aaa;--code:#ce9178;--stripe:#252526";

const BASE_CSS: &str = "*{box-sizing:border-box}\
body{font-family:'Segoe UI',Tahoma,Geneva,Verdana,sans-serif;line-height:1.7;\
color:var(--fg);background:var(--bg);margin:0;padding:0}\
#mdv-ct{margin:0 auto;padding:12px 32px 24px}\
#mdv-ct>:first-child{margin-top:0}\
h1,h2,h3,h4,h5,h6{color:var(--heading);margin-top:1.4em;margin-bottom:.6em;font-weight:600}\
h1{font-size:2em;padding-bottom:.3em;border-bottom:1px solid var(--border)}\
h2{font-size:1.5em;padding-bottom:.25em;border-bottom:1px solid var(--border)}\
h3{font-size:1.25em}\
a{color:var(--link);text-decoration:none}a:hover{text-decoration:underline}\
code{font-family:Consolas,'Courier New',monospace;background:var(--panel);\
padding:2px 6px;border-radius:3px;font-size:.9em;color:var(--code)}\
pre{background:var(--panel);border:1px solid var(--border);border-radius:6px;\
padding:16px;overflow-x:auto;line-height:1.5;white-space:pre-wrap;word-wrap:break-word}\
pre code{background:none;padding:0;color:var(--fg)}\
blockquote{margin:.8em 0;padding:.5em 1em;border-left:4px solid var(--link);\
background:var(--panel);color:var(--muted)}\
blockquote p{margin:.4em 0}\
table{border-collapse:collapse;width:100%;margin:1em 0}\
th,td{border:1px solid var(--border);padding:8px 12px}\
th{background:var(--panel);font-weight:600}\
tr:nth-child(even){background:var(--stripe)}\
hr{border:none;border-top:1px solid var(--border);margin:1.5em 0}\
img{max-width:100%;border-radius:4px}\
ul,ol{padding-left:2em}li{margin:.3em 0}\
input[type=checkbox]{margin-right:6px}\
del{color:var(--muted)}";

const LINE_NUMBER_CSS: &str = "pre.ln{display:flex;padding-left:0}\
.ln-nums{padding:0 12px;text-align:right;color:var(--muted);\
border-right:1px solid var(--border);user-select:none;white-space:pre;\
font-family:Consolas,'Courier New',monospace;font-size:.9em}\
pre.ln code{padding-left:16px}";

/// Numbers the lines of every code block on load.
const LINE_NUMBER_JS: &str = "document.querySelectorAll('pre>code').forEach(function(c){\
var n=c.textContent.split('\\n').length,s='';\
for(var i=1;i<=n;i++)s+=i+(i<n?'\\n':'');\
var g=document.createElement('span');g.className='ln-nums';g.textContent=s;\
c.parentNode.classList.add('ln');c.parentNode.insertBefore(g,c);});";

/// Builds the stylesheet for `settings`.
pub fn stylesheet(settings: &Settings) -> String {
    let mut css = format!(":root{{{LIGHT_PALETTE}}}");
    match settings.dark_mode {
        Some(true) => css.push_str(&format!(":root{{{DARK_PALETTE}}}")),
        Some(false) => {}
        None => css.push_str(&format!(
            "@media (prefers-color-scheme:dark){{:root{{{DARK_PALETTE}}}}}"
        )),
    }
    css.push_str(BASE_CSS);
    css.push_str(&format!("body{{font-size:{}px}}", settings.font_size));
    if settings.max_width > 0 {
        css.push_str(&format!("#mdv-ct{{max-width:{}px}}", settings.max_width));
    }
    if settings.line_numbers {
        css.push_str(LINE_NUMBER_CSS);
    }
    css
}

/// Wraps a rendered fragment in a complete page.
pub fn wrap(fragment: &str, title: &str, settings: &Settings) -> String {
    let mut page = String::with_capacity(fragment.len() + 4096);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n", escape_text(title)));
    page.push_str(&format!("<style>{}</style>\n", stylesheet(settings)));
    page.push_str("</head>\n<body>\n<div id=\"mdv-ct\">\n");
    page.push_str(fragment);
    page.push_str("</div>\n");
    if settings.line_numbers {
        page.push_str(&format!("<script>{LINE_NUMBER_JS}</script>\n"));
    }
    page.push_str("</body>\n</html>\n");
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fragment_sits_inside_content_div() {
        let page = wrap("<p>hi</p>\n", "doc", &Settings::default());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<div id=\"mdv-ct\">\n<p>hi</p>\n</div>"));
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn title_is_escaped() {
        let page = wrap("", "a<b>", &Settings::default());
        assert!(page.contains("<title>a&lt;b&gt;</title>"));
    }

    #[test]
    fn font_size_and_width_come_from_settings() {
        let settings = Settings {
            font_size: 22,
            max_width: 1200,
            ..Settings::default()
        };
        let css = stylesheet(&settings);
        assert!(css.contains("body{font-size:22px}"));
        assert!(css.contains("#mdv-ct{max-width:1200px}"));
    }

    #[test]
    fn zero_width_means_no_limit() {
        let settings = Settings {
            max_width: 0,
            ..Settings::default()
        };
        assert!(!stylesheet(&settings).contains("max-width:0"));
    }

    #[test]
    fn theme_follows_host_by_default() {
        let css = stylesheet(&Settings::default());
        assert!(css.contains("@media (prefers-color-scheme:dark)"));
    }

    #[test]
    fn explicit_theme_has_no_media_query() {
        let dark = Settings {
            dark_mode: Some(true),
            ..Settings::default()
        };
        let light = Settings {
            dark_mode: Some(false),
            ..Settings::default()
        };
        assert!(!stylesheet(&dark).contains("@media"));
        assert!(stylesheet(&dark).contains("--bg:#1e1e1e"));
        assert!(!stylesheet(&light).contains("--bg:#1e1e1e"));
    }

    #[test]
    fn line_numbers_add_script() {
        let settings = Settings {
            line_numbers: true,
            ..Settings::default()
        };
        let page = wrap("", "doc", &settings);
        assert!(page.contains("<script>"));
        assert_eq!(wrap("", "doc", &Settings::default()).matches("<script>").count(), 0);
    }
}
