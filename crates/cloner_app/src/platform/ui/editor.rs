//! Text editing over a single file's content.
//!
//! The content itself lives in the core; this module only knows how a key
//! turns the current text and cursor into the next text and cursor.

/// Lines moved by PageUp/PageDown.
pub const PAGE_LINES: usize = 20;

/// Spaces inserted for Tab.
const TAB: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorCursor {
    /// Zero-based line.
    pub line: usize,
    /// Zero-based column, in characters.
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Insert(char),
    Newline,
    Tab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Applies `action` and returns the new text if it changed.
pub fn apply(content: &str, cursor: &mut EditorCursor, action: EditAction) -> Option<String> {
    let mut lines: Vec<String> = content.split('\n').map(str::to_owned).collect();
    clamp(&lines, cursor);

    let changed = match action {
        EditAction::Insert(ch) => {
            insert_str(&mut lines, cursor, &ch.to_string());
            true
        }
        EditAction::Tab => {
            insert_str(&mut lines, cursor, TAB);
            true
        }
        EditAction::Newline => {
            let line = &mut lines[cursor.line];
            let rest = line.split_off(byte_index(line, cursor.column));
            lines.insert(cursor.line + 1, rest);
            cursor.line += 1;
            cursor.column = 0;
            true
        }
        EditAction::Backspace => {
            if cursor.column > 0 {
                let line = &mut lines[cursor.line];
                line.remove(byte_index(line, cursor.column - 1));
                cursor.column -= 1;
                true
            } else if cursor.line > 0 {
                let current = lines.remove(cursor.line);
                cursor.line -= 1;
                cursor.column = char_len(&lines[cursor.line]);
                lines[cursor.line].push_str(&current);
                true
            } else {
                false
            }
        }
        EditAction::Delete => {
            if cursor.column < char_len(&lines[cursor.line]) {
                let line = &mut lines[cursor.line];
                line.remove(byte_index(line, cursor.column));
                true
            } else if cursor.line + 1 < lines.len() {
                let next = lines.remove(cursor.line + 1);
                lines[cursor.line].push_str(&next);
                true
            } else {
                false
            }
        }
        EditAction::Left => {
            if cursor.column > 0 {
                cursor.column -= 1;
            } else if cursor.line > 0 {
                cursor.line -= 1;
                cursor.column = char_len(&lines[cursor.line]);
            }
            false
        }
        EditAction::Right => {
            if cursor.column < char_len(&lines[cursor.line]) {
                cursor.column += 1;
            } else if cursor.line + 1 < lines.len() {
                cursor.line += 1;
                cursor.column = 0;
            }
            false
        }
        EditAction::Up => move_vertically(&lines, cursor, -1),
        EditAction::Down => move_vertically(&lines, cursor, 1),
        EditAction::PageUp => move_vertically(&lines, cursor, -(PAGE_LINES as isize)),
        EditAction::PageDown => move_vertically(&lines, cursor, PAGE_LINES as isize),
        EditAction::Home => {
            cursor.column = 0;
            false
        }
        EditAction::End => {
            cursor.column = char_len(&lines[cursor.line]);
            false
        }
    };

    changed.then(|| lines.join("\n"))
}

/// Keeps the cursor inside `content`, e.g. after the text changed elsewhere.
pub fn clamp_to(content: &str, cursor: &mut EditorCursor) {
    let lines: Vec<String> = content.split('\n').map(str::to_owned).collect();
    clamp(&lines, cursor);
}

fn clamp(lines: &[String], cursor: &mut EditorCursor) {
    cursor.line = cursor.line.min(lines.len().saturating_sub(1));
    cursor.column = cursor.column.min(char_len(&lines[cursor.line]));
}

fn move_vertically(lines: &[String], cursor: &mut EditorCursor, delta: isize) -> bool {
    let last = lines.len().saturating_sub(1) as isize;
    cursor.line = (cursor.line as isize + delta).clamp(0, last) as usize;
    cursor.column = cursor.column.min(char_len(&lines[cursor.line]));
    false
}

fn insert_str(lines: &mut [String], cursor: &mut EditorCursor, text: &str) {
    let line = &mut lines[cursor.line];
    line.insert_str(byte_index(line, cursor.column), text);
    cursor.column += text.chars().count();
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

fn byte_index(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}
