//! Render - 集計状態を HTML ドキュメントに変換する
//!
//! ドキュメント構成:
//! 1. ヘッダー（テンプレートがあればそのまま、なければ組み込み）
//! 2. Progress: バケットごとの 1 文字ストリップ
//! 3. Status: タスクごとの行（バケット順）
//! 4. Errors: タスクに紐付かないエラー（ある場合のみ）
//! 5. Logs: タスクごとの error / stderr / stdout
//!
//! 全体を文字列として組み立ててから一度に publish する。

use std::collections::HashMap;
use std::fmt::{self, Write};

use super::config::ReportConfig;
use super::status::RunStatus;
use crate::domain::{ACTION_SEPARATOR, TaskName, TaskResult};

/// Everything one render needs.
pub struct RenderInput<'a> {
    /// User template; `None` selects the built-in header.
    pub header: Option<&'a str>,
    pub status: &'a RunStatus,
    pub results: &'a HashMap<TaskName, TaskResult>,
    pub errors: &'a [String],
    pub config: &'a ReportConfig,
}

/// Build the complete document.
pub fn render_document(input: &RenderInput<'_>) -> Result<String, fmt::Error> {
    let mut doc = String::new();
    match input.header {
        Some(header) => doc.push_str(header),
        None => write_builtin_header(&mut doc, input.config)?,
    }
    write_progress(&mut doc, input.status)?;
    write_status_table(&mut doc, input.status, input.results)?;
    write_errors(&mut doc, input.errors)?;
    write_logs(&mut doc, input.status, input.results)?;
    doc.push_str("</body>\n</html>\n");
    Ok(doc)
}

fn write_builtin_header(out: &mut impl Write, config: &ReportConfig) -> fmt::Result {
    let title = escape_html(&config.title);
    write!(
        out,
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN"
  "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml">
<head>
<meta http-equiv="Content-Type" content="text/html; charset=utf-8" />
<title>{title}</title>
<link rel="stylesheet" href="{stylesheet}" type="text/css" />
</head>
<body>
<h1>{title}</h1>

"#,
        stylesheet = escape_html(&config.stylesheet),
    )
}

fn write_progress(out: &mut impl Write, status: &RunStatus) -> fmt::Result {
    out.write_str("<div class='status'><h2>Progress</h2>\n<div class='progress'>\n")?;
    for (bucket, names) in status.buckets() {
        write!(out, "<span class='progress {bucket}'>")?;
        for name in names {
            write!(
                out,
                "<a href=\"#status-{}\">{}</a>",
                escape_html(name.as_str()),
                bucket.glyph()
            )?;
        }
        out.write_str("</span>\n")?;
    }
    out.write_str("</div>\n</div>\n")
}

fn write_status_table(
    out: &mut impl Write,
    status: &RunStatus,
    results: &HashMap<TaskName, TaskResult>,
) -> fmt::Result {
    out.write_str("<div class='status'><h2>Status</h2>\n<table>\n")?;
    out.write_str(
        "<thead><tr><th>Task</th><th>Status</th><th>Started</th><th>Elapsed</th></tr></thead>\n",
    )?;
    out.write_str("<tbody>\n")?;
    for (task_status, name) in status.tasks() {
        let html_name = escape_html(name.as_str());
        let result = results.get(name);
        let started = result.and_then(TaskResult::started).unwrap_or_default();
        let elapsed = result
            .and_then(TaskResult::elapsed)
            .map(|secs| format!("{secs:.3}s"))
            .unwrap_or_default();
        writeln!(
            out,
            "<tr class='{task_status}'><td><a id='status-{html_name}' href='#log-{html_name}'>{html_name}</a></td>\
             <td>{task_status}</td><td>{started}</td><td>{elapsed}</td></tr>"
        )?;
    }
    out.write_str("</tbody>\n</table>\n</div>\n")
}

fn write_errors(out: &mut impl Write, errors: &[String]) -> fmt::Result {
    if errors.is_empty() {
        return Ok(());
    }
    out.write_str("<div class='errors'><h2>Errors</h2>\n<ul>\n")?;
    for error in errors {
        writeln!(out, "<li><pre>{}</pre></li>", escape_html(error))?;
    }
    out.write_str("</ul>\n</div>\n")
}

fn write_logs(
    out: &mut impl Write,
    status: &RunStatus,
    results: &HashMap<TaskName, TaskResult>,
) -> fmt::Result {
    out.write_str("<div class='logs'><h2>Logs</h2>\n")?;
    for (_, name) in status.tasks() {
        let html_name = escape_html(name.as_str());
        writeln!(out, "<h3 id='log-{html_name}'>{html_name}</h3>")?;

        let Some(result) = results.get(name) else {
            out.write_str("<pre class='log stderr'></pre>\n<pre class='log stdout'></pre>\n")?;
            continue;
        };
        if let Some(error) = result.error() {
            writeln!(out, "<pre class='log error'>{}</pre>", escape_html(error))?;
        }
        writeln!(
            out,
            "<pre class='log stderr'>{}</pre>",
            escape_segments(result.err_segments())
        )?;
        writeln!(
            out,
            "<pre class='log stdout'>{}</pre>",
            escape_segments(result.out_segments())
        )?;
    }
    out.write_str("</div>\n")
}

/// Escape each action's output, keeping the separator as markup.
fn escape_segments(segments: &[String]) -> String {
    segments
        .iter()
        .map(|s| escape_html(s))
        .collect::<Vec<_>>()
        .join(ACTION_SEPARATOR)
}

/// Escape text for use in HTML content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inverse of [`escape_html`].
pub fn unescape_html(s: &str) -> String {
    const ENTITIES: [(&str, char); 5] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#x27;", '\''),
    ];

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, c)) => {
                out.push(*c);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
