use super::desktop::BASE_CSS;
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Layout for pages visitors reach through a share link. No CRM navigation.
pub fn public_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="robots" content="noindex";
                title { (title) }
                style { (PreEscaped(BASE_CSS)) }
            }
            body {
                header { h3 { (title) } }
                (content)
            }
        }
    }
}
