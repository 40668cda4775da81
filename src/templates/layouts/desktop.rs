use maud::{html, Markup, PreEscaped, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · OT Tracker" }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header class="topbar" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M12 3l8 4.5v9l-8 4.5l-8 -4.5v-9l8 -4.5" {}
                        path d="M12 12l8 -4.5" {}
                        path d="M12 12v9" {}
                        path d="M12 12l-8 -4.5" {}
                    }
                    h3 { "OT Tracker" }
                    nav {
                        a href="/" { "New search" }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
.topbar { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
.topbar nav { margin-left: auto; }
.container { max-width: 1100px; margin: 2rem auto; padding: 0 1rem; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem 1.5rem; margin-bottom: 1.5rem; }
.notice { padding: 0.75rem 1rem; border-radius: 6px; background: #fef3c7; color: #92400e; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 0.5rem; border-bottom: 1px solid #e5e7eb; vertical-align: top; }
th { font-size: 0.75rem; text-transform: uppercase; color: #6b7280; }
.badge { padding: 0.1rem 0.5rem; border-radius: 9999px; font-size: 0.8rem; font-weight: 600; white-space: nowrap; }
.badge-delivered { background: #dbeafe; color: #1e40af; }
.badge-shipped { background: #ede9fe; color: #5b21b6; }
.badge-available { background: #dcfce7; color: #166534; }
.badge-none { background: #fef3c7; color: #92400e; }
details ul { margin: 0.5rem 0 0; padding-left: 1rem; }
"#;
