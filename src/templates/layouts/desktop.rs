use maud::{html, Markup, PreEscaped, DOCTYPE};

pub(crate) const BASE_CSS: &str = r#"
body{font-family:system-ui,sans-serif;margin:0;color:#1f2937;background:#f9fafb}
header{display:flex;align-items:center;justify-content:space-between;padding:12px 24px;background:#fff;box-shadow:0 1px 3px rgba(0,0,0,.08)}
header nav ul{display:flex;gap:16px;list-style:none;margin:0;padding:0}
a{color:#4338ca;text-decoration:none}a:hover{text-decoration:underline}
.container{max-width:1100px;margin:0 auto;padding:24px}
.card{background:#fff;border:1px solid #e5e7eb;border-radius:8px;padding:16px;margin-bottom:16px}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:16px}
.filters{display:flex;flex-wrap:wrap;gap:8px;align-items:end}
.filters label{display:flex;flex-direction:column;font-size:.8rem;color:#6b7280}
.filters input,.filters select{padding:6px;border:1px solid #d1d5db;border-radius:4px}
.badge{display:inline-block;padding:2px 8px;border-radius:999px;font-size:.75rem;background:#eef2ff;color:#3730a3}
.price{font-size:1.2rem;font-weight:700;color:#047857}
.muted{color:#6b7280;font-size:.9rem}
table{width:100%;border-collapse:collapse}th,td{padding:8px;text-align:left;border-bottom:1px solid #f3f4f6}
.btn{padding:6px 14px;background:#4f46e5;color:#fff;border:none;border-radius:4px;cursor:pointer}
.pagination{display:flex;gap:12px;align-items:center;margin-top:16px}
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Realty CRM" }
                style { (PreEscaped(BASE_CSS)) }
            }
            body {
                header {
                    h3 { a href="/" { "Realty CRM" } }
                    nav {
                        ul {
                            li { a href="/properties" { "Properties" } }
                            li { a href="/leads" { "Leads" } }
                            li { a href="/proposals" { "Proposals" } }
                            li { a href="/catalog/links" { "Shared catalogs" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
