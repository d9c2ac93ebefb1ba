//! Server-rendered HTML pages.
//!
//! Every page is a plain `String` built with `format!`. Anything that came
//! from a user or an upstream service goes through [`escape`] first.

pub mod auth;
pub mod finance;
pub mod home;
pub mod lists;
pub mod weather;

use std::fmt::Write;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "\
body { font-family: Arial, sans-serif; background: #f7fafc; margin: 0; padding: 0; }
.container { max-width: 640px; margin: 40px auto; background: #fff; border-radius: 10px; padding: 24px 32px; box-shadow: 0 2px 8px rgba(0,0,0,0.08); }
h1, h2 { color: #388e3c; }
label { display: block; margin: 8px 0; }
table { width: 100%; border-collapse: collapse; }
td { padding: 8px; border-bottom: 1px solid #e0e0e0; }
.label { color: #388e3c; font-weight: bold; width: 40%; }
.flash-success { background: #e8f5e9; color: #2e7d32; padding: 10px; border-radius: 6px; }
.flash-error { background: #ffebee; color: #c62828; padding: 10px; border-radius: 6px; }
.back { display: inline-block; margin-top: 16px; color: #388e3c; }";

/// Wrap `body` in the shared page chrome. `title` is escaped.
pub fn layout(title: &str, body: &str) -> String {
    let mut page = String::new();
    let _ = write!(
        page,
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>\n{STYLE}\n</style>\n</head>\n<body>\n\
         <div class=\"container\">\n{body}\n</div>\n</body>\n</html>\n",
        escape(title)
    );
    page
}

/// Link back to the landing page.
pub(crate) const BACK_LINK: &str = "<a class=\"back\" href=\"/\">&#8592; Retour à l'accueil</a>";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape("Blé d'hiver"), "Blé d&#39;hiver");
        assert_eq!(escape("Tracteur"), "Tracteur");
    }

    #[test]
    fn layout_escapes_title() {
        let page = layout("<b>", "<p>corps</p>");
        assert!(page.contains("<title>&lt;b&gt;</title>"));
        assert!(page.contains("<p>corps</p>"));
    }
}
