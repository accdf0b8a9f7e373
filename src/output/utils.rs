//! Long-format column rendering

use std::fs::Metadata;
use std::time::SystemTime;

use chrono::{DateTime, Local};

const SIZE_WIDTH: usize = 9;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// `rwxrwxrwx` for the low nine permission bits of `mode`.
pub fn permission_bits(mode: u32) -> String {
    "rwxrwxrwx"
        .chars()
        .enumerate()
        .map(|(i, c)| if mode & (1 << (8 - i)) != 0 { c } else { '-' })
        .collect()
}

/// Mode string: type letters followed by permission bits.
///
/// Letters appear in the order `d L D p S u g c t`; a plain file gets a
/// single `-`. A directory reads `drwxr-xr-x`, a character device `Dcrw-rw-rw-`.
#[cfg(unix)]
pub fn format_mode(metadata: &Metadata) -> String {
    use std::os::unix::fs::{FileTypeExt, PermissionsExt};

    let ft = metadata.file_type();
    let mode = metadata.permissions().mode();

    let letters = [
        (ft.is_dir(), 'd'),
        (ft.is_symlink(), 'L'),
        (ft.is_block_device() || ft.is_char_device(), 'D'),
        (ft.is_fifo(), 'p'),
        (ft.is_socket(), 'S'),
        (mode & 0o4000 != 0, 'u'),
        (mode & 0o2000 != 0, 'g'),
        (ft.is_char_device(), 'c'),
        (mode & 0o1000 != 0, 't'),
    ];

    let mut out: String = letters
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, letter)| *letter)
        .collect();
    if out.is_empty() {
        out.push('-');
    }
    out.push_str(&permission_bits(mode));
    out
}

#[cfg(not(unix))]
pub fn format_mode(metadata: &Metadata) -> String {
    let ft = metadata.file_type();
    let mut mode = if metadata.permissions().readonly() { 0o444 } else { 0o666 };
    let letter = if ft.is_dir() {
        mode |= 0o111;
        'd'
    } else if ft.is_symlink() {
        'L'
    } else {
        '-'
    };
    format!("{}{}", letter, permission_bits(mode))
}

/// Byte count right-justified in a fixed-width field.
pub fn format_size(bytes: u64) -> String {
    format!("{:>width$}", bytes, width = SIZE_WIDTH)
}

/// Local modification time as `YYYY-MM-DD HH:MM`, or `-` when unavailable.
pub fn format_mtime(modified: Option<SystemTime>) -> String {
    match modified {
        Some(time) => DateTime::<Local>::from(time).format(TIME_FORMAT).to_string(),
        None => "-".to_string(),
    }
}
