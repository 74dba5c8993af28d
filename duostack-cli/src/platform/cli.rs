//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use duostack_api::DuostackError;

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 2;

/// 打印错误并显示源代码上下文
///
/// 位置指向预处理后的源码，所以 `source` 应当是展开后的文本。
pub fn print_error_with_source(e: &DuostackError, source: &str) {
    eprintln!("error: {}", e);

    if let (Some(line), Some(column)) = (e.line(), e.column()) {
        if let Some(context) = format_source_context(source, line, column) {
            eprint!("{}", context);
        }
    }
}

/// 渲染错误行及其上下文，并在错误列下方画出 `^`
pub fn format_source_context(source: &str, error_line: usize, error_col: usize) -> Option<String> {
    let lines: Vec<&str> = source.lines().collect();
    if error_line == 0 || error_line > lines.len() {
        return None;
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(lines.len());
    let width = end_line.to_string().len();

    let mut out = String::new();
    let separator = "-".repeat(width + 1);
    out.push_str(&format!("{}|--\n", separator));

    for line_idx in start_line..=end_line {
        out.push_str(&format!(
            "{:>width$} | {}\n",
            line_idx,
            lines[line_idx - 1],
            width = width
        ));
        if line_idx == error_line {
            out.push_str(&format!(
                "{:width$} | {}^\n",
                "",
                " ".repeat(error_col.saturating_sub(1)),
                width = width
            ));
        }
    }

    out.push_str(&format!("{}|--\n", separator));
    Some(out)
}
