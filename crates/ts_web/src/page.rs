//! Server-rendered single page: the input form plus whatever the last
//! submit produced.

use ts_core::Outcome;

const TITLE: &str = "📝 Text Summarizer";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; color: #262730; }
textarea { width: 100%; height: 250px; font: inherit; padding: .5rem; box-sizing: border-box; }
button { margin-top: .75rem; padding: .4rem 1.2rem; font: inherit; cursor: pointer; }
.warning { background: #fffce7; border: 1px solid #ffe08a; padding: .75rem; border-radius: .4rem; margin-top: 1rem; }
.error { background: #ffecec; border: 1px solid #ffaeae; padding: .75rem; border-radius: .4rem; margin-top: 1rem; }
.summary { margin-top: 1rem; white-space: pre-wrap; }
footer { margin-top: 2rem; border-top: 1px solid #ddd; padding-top: .75rem; font-size: .9rem; }
"#;

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Summary(summary) => format!(
            "<section>\n<h3>Summary:</h3>\n<p class=\"summary\">{}</p>\n</section>",
            escape_html(summary)
        ),
        Outcome::Warning(message) => {
            format!("<div class=\"warning\" role=\"alert\">{}</div>", escape_html(message))
        }
        Outcome::Failure(message) => format!(
            "<div class=\"error\" role=\"alert\">Could not summarize the text: {}</div>",
            escape_html(message)
        ),
    }
}

/// Renders the page with `text` preloaded in the text area.
pub fn render(text: &str, outcome: Option<&Outcome>) -> String {
    let result = outcome.map(render_outcome).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Text Summarizer</title>
<link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>📝</text></svg>">
<style>{style}</style>
</head>
<body>
<h1>{title}</h1>
<p>Paste any article, paragraph, or text in the box below, and this app will automatically generate a concise summary using a pre-trained summarization model.</p>
<form method="post" action="/">
<label for="text">Enter text here:</label>
<textarea id="text" name="text" placeholder="Type or paste your text here...">
{text}</textarea>
<button type="submit">Summarize</button>
</form>
{result}
<footer>Made with ❤️ using Rust, axum, and a pre-trained summarization model.</footer>
</body>
</html>
"#,
        style = STYLE,
        title = TITLE,
        text = escape_html(text),
        result = result,
    )
}
