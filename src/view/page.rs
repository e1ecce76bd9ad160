//! HTML rendering of the browser page.

use crate::controller::PaginationState;
use crate::models::Character;
use crate::notify::Toast;

use super::escape_html;

pub const PAGE_TITLE: &str = "Rick and Morty Characters";

const NOT_FOUND_MESSAGE: &str = "No characters found.";

const STYLES: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,sans-serif;background:#1b1f24;color:#eef1f4}
.container{max-width:1200px;margin:0 auto;padding:24px}
.title{text-align:center;color:#97ce4c}
.controls{display:flex;gap:8px;justify-content:center;flex-wrap:wrap;margin-bottom:16px}
.controls form{display:flex;gap:8px}
input[type=search]{padding:8px 12px;border-radius:6px;border:1px solid #44505c;min-width:240px}
button{padding:8px 14px;border:0;border-radius:6px;background:#97ce4c;color:#1b1f24;cursor:pointer}
button:disabled{opacity:.4;cursor:not-allowed}
.pager{display:flex;gap:12px;align-items:center;justify-content:center;margin:16px 0}
.not-found{background:#5c1f24;padding:12px;border-radius:6px;text-align:center}
.loading{text-align:center;opacity:.7}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(180px,1fr));gap:16px}
.card button{width:100%;padding:0;background:#2a3038;color:inherit;border-radius:10px;overflow:hidden}
.avatar{width:100%;display:block}
.card-title{font-size:1rem;margin:10px}
.toasts{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:10}
.toast{display:flex;gap:12px;align-items:center;padding:10px 14px;border-radius:6px;background:#2a3038;animation:toast-out .3s ease-in forwards}
.toast button{background:transparent;color:inherit;padding:0 4px}
.toast-success{border-left:4px solid #97ce4c}
.toast-info{border-left:4px solid #3fa9f5}
@keyframes toast-out{to{opacity:0;visibility:hidden}}
"#;

// == Render Page ==
/// Renders the whole browser page for the given state and active toasts.
pub fn render_page(state: &PaginationState, toasts: &[Toast]) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", PAGE_TITLE));
    html.push_str(&format!("<style>{}</style>\n", STYLES));
    html.push_str("</head>\n<body>\n<main class=\"container\">\n");
    html.push_str(&format!("<h1 class=\"title\">{}</h1>\n", PAGE_TITLE));

    html.push_str(&render_controls(&state.search_term));
    html.push_str(&render_pager(state));

    if state.is_not_found {
        html.push_str(&format!(
            "<div class=\"not-found\" role=\"alert\">{}</div>\n",
            NOT_FOUND_MESSAGE
        ));
    }
    if state.is_loading {
        html.push_str("<p class=\"loading\">Loading&hellip;</p>\n");
    }

    html.push_str("<div class=\"grid\">\n");
    for character in &state.characters {
        html.push_str(&render_card(character));
    }
    html.push_str("</div>\n</main>\n");

    html.push_str(&render_toasts(toasts));
    html.push_str("</body>\n</html>\n");
    html
}

fn render_controls(term: &str) -> String {
    format!(
        concat!(
            "<div class=\"controls\">\n",
            "<form class=\"search\" method=\"get\" action=\"/search\">",
            "<input type=\"search\" name=\"name\" value=\"{}\" placeholder=\"Search by name\">",
            "<button type=\"submit\">Search</button></form>\n",
            "<form method=\"post\" action=\"/reset\"><button type=\"submit\">Reset</button></form>\n",
            "</div>\n"
        ),
        escape_html(term)
    )
}

fn render_pager(state: &PaginationState) -> String {
    format!(
        concat!(
            "<nav class=\"pager\">",
            "<form method=\"post\" action=\"/page/previous\"><button type=\"submit\"{}>Previous</button></form>",
            "<span class=\"page-indicator\">Page {} of {}</span>",
            "<form method=\"post\" action=\"/page/next\"><button type=\"submit\"{}>Next</button></form>",
            "</nav>\n"
        ),
        disabled_attr(state.can_go_previous()),
        state.current_page,
        state.displayed_total(),
        disabled_attr(state.can_go_next()),
    )
}

fn disabled_attr(enabled: bool) -> &'static str {
    if enabled {
        ""
    } else {
        " disabled"
    }
}

fn render_card(character: &Character) -> String {
    let name = escape_html(&character.name);
    format!(
        concat!(
            "<form class=\"card\" method=\"post\" action=\"/characters/{}/select\">",
            "<button type=\"submit\" title=\"{}\">",
            "<img src=\"{}\" alt=\"{}\" class=\"avatar\" loading=\"lazy\">",
            "<h3 class=\"card-title\">{}</h3>",
            "</button></form>\n"
        ),
        character.id,
        name,
        escape_html(&character.image),
        name,
        name,
    )
}

/// Toasts fade out client-side when their remaining time runs out; the
/// server drops them on its own sweep.
fn render_toasts(toasts: &[Toast]) -> String {
    let mut html = String::from("<div class=\"toasts\" aria-live=\"polite\">\n");
    for toast in toasts {
        html.push_str(&format!(
            concat!(
                "<div class=\"toast toast-{}\" role=\"status\" style=\"animation-delay:{}ms\">",
                "<span>{}</span>",
                "<form method=\"post\" action=\"/toasts/{}/dismiss\">",
                "<button type=\"submit\" aria-label=\"Dismiss\">&times;</button></form>",
                "</div>\n"
            ),
            toast.kind.as_str(),
            toast.remaining_ms(),
            escape_html(&toast.message),
            toast.id,
        ));
    }
    html.push_str("</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{ToastKind, ToastQueue};

    fn character(id: u64, name: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            status: "Alive".to_string(),
            species: "Human".to_string(),
            image: format!("https://example.test/{}.jpeg", id),
        }
    }

    fn loaded_state() -> PaginationState {
        PaginationState {
            current_page: 2,
            total_pages: 42,
            search_term: "rick".to_string(),
            characters: vec![character(1, "Rick Sanchez"), character(2, "Morty Smith")],
            ..PaginationState::default()
        }
    }

    #[test]
    fn test_renders_title_controls_and_cards() {
        let html = render_page(&loaded_state(), &[]);

        assert!(html.contains("<title>Rick and Morty Characters</title>"));
        assert!(html.contains("value=\"rick\""));
        assert!(html.contains("Page 2 of 42"));
        assert!(html.contains("action=\"/characters/1/select\""));
        assert!(html.contains("alt=\"Morty Smith\""));
        assert!(html.contains("https://example.test/2.jpeg"));
        assert!(!html.contains("No characters found."));
        assert!(!html.contains(" disabled"));
    }

    #[test]
    fn test_not_found_banner_disables_pager() {
        let state = PaginationState {
            search_term: "zzz-no-match".to_string(),
            is_not_found: true,
            total_pages: 42,
            current_page: 2,
            ..PaginationState::default()
        };
        let html = render_page(&state, &[]);

        assert!(html.contains("No characters found."));
        assert_eq!(html.matches(" disabled>").count(), 2);
        assert!(html.contains("Page 2 of 1<"));
        assert!(!html.contains("of 42"));
        assert!(!html.contains("class=\"card\""));
    }

    #[test]
    fn test_first_page_disables_previous_only() {
        let state = PaginationState {
            current_page: 1,
            ..loaded_state()
        };
        let html = render_page(&state, &[]);
        assert!(html.contains("<button type=\"submit\" disabled>Previous</button>"));
        assert!(html.contains("<button type=\"submit\">Next</button>"));
    }

    #[test]
    fn test_escapes_user_text() {
        let state = PaginationState {
            search_term: "<script>".to_string(),
            characters: vec![character(3, "Mr. \"Poopy\" & <Butthole>")],
            ..PaginationState::default()
        };
        let html = render_page(&state, &[]);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Mr. &quot;Poopy&quot; &amp; &lt;Butthole&gt;"));
    }

    #[test]
    fn test_renders_toasts() {
        let mut queue = ToastQueue::new(3000);
        queue.push("Search reset", ToastKind::Success);
        let html = render_page(&PaginationState::default(), &queue.active());

        assert!(html.contains("toast toast-success"));
        assert!(html.contains("Search reset"));
        assert!(html.contains("action=\"/toasts/1/dismiss\""));
    }
}
