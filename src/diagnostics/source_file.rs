use colored::Colorize;

use crate::ast::Span;

const TAB_WIDTH: usize = 4;

/// A source file, split into lines with tabs expanded, so that rendered
/// columns always agree with the columns the parser reports.
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    lines: Vec<String>,
    line_num_width: usize,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: &str) -> SourceFile {
        let lines: Vec<String> = content
            .lines()
            .map(|line| line.trim_end().replace('\t', &" ".repeat(TAB_WIDTH)))
            .collect();
        let line_num_width = lines.len().to_string().len();

        SourceFile {
            name: name.into(),
            lines,
            line_num_width,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized text. This is what must be handed to the parser.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn line(&self, num: usize) -> &str {
        self.lines
            .get(num - 1)
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn gutter(&self, line_num: usize) -> String {
        format!("{:>width$} | ", line_num, width = self.line_num_width)
            .cyan()
            .to_string()
    }

    /// The affected source lines with a line-number gutter. Single-line
    /// ranges get a `^` underline, multi-line ranges are painted red from
    /// the start column to the end column.
    pub fn excerpt(&self, span: &Span) -> String {
        let (start_line, start_col) = span.start;
        let (end_line, end_col) = span.end;

        let mut output = vec![];

        if start_line == end_line {
            output.push(format!("{}{}", self.gutter(start_line), self.line(start_line)));
            output.push(format!(
                "{}{}",
                " ".repeat(self.line_num_width + 2 + start_col),
                "^".repeat(end_col.saturating_sub(start_col)).red()
            ));
        } else {
            for line_num in start_line..=end_line {
                let line = self.line(line_num);
                let painted = if line_num == start_line {
                    let (left, right) = split_at_column(line, start_col);
                    format!("{left}{}", right.red())
                } else if line_num == end_line {
                    let (left, right) = split_at_column(line, end_col);
                    format!("{}{right}", left.red())
                } else {
                    line.red().to_string()
                };
                output.push(format!("{}{painted}", self.gutter(line_num)));
            }
        }

        output.join("\n")
    }
}

/// Split a line before the given 1-based column, counting characters rather
/// than bytes.
fn split_at_column(line: &str, column: usize) -> (&str, &str) {
    let index = line
        .char_indices()
        .nth(column - 1)
        .map(|(index, _)| index)
        .unwrap_or(line.len());
    line.split_at(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_are_normalized() {
        let file = SourceFile::new("test.n", "\tprint 1\n");
        assert_eq!(file.text(), "    print 1");
    }

    #[test]
    fn test_trailing_whitespace_is_stripped() {
        let file = SourceFile::new("test.n", "print 1   \nprint 2\n");
        assert_eq!(file.text(), "print 1\nprint 2");
    }

    #[test]
    fn test_excerpt_underlines_single_line_range() {
        colored::control::set_override(false);
        let file = SourceFile::new("test.n", "var x: int = 1\n");
        let excerpt = file.excerpt(&Span {
            start: (1, 5),
            end: (1, 6),
        });
        assert_eq!(excerpt, "1 | var x: int = 1\n        ^");
    }
}
