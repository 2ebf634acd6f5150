//! Escaping for Telegram's HTML parse mode.
//!
//! Notification messages wrap the location name in `<b>` tags, so any markup
//! characters coming from the scraped page must be escaped first.

/// Escapes text for inclusion in a Telegram HTML-mode message.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_html("Mairie <annexe>"), "Mairie &lt;annexe&gt;");
        assert_eq!(escape_html("4e & 5e arrondissements"), "4e &amp; 5e arrondissements");
    }

    #[test]
    fn ampersand_is_escaped_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("Mairie du 12e"), "Mairie du 12e");
        assert_eq!(escape_html(""), "");
    }
}
