//! Textual rendering of file type and permission bits.

use std::fs::Metadata;

/// Render type and permission bits as a ten-or-more character string.
///
/// Type and special-bit letters come first (`d` directory, `L` symlink,
/// `D` device, `c` character device, `p` named pipe, `S` socket, `u`
/// setuid, `g` setgid, `t` sticky), `-` when none apply, followed by the
/// nine `rwx` permission characters.
#[cfg(unix)]
pub fn mode_string(metadata: &Metadata) -> String {
    use std::os::unix::fs::{FileTypeExt, PermissionsExt};

    let file_type = metadata.file_type();
    let bits = metadata.permissions().mode();

    let mut out = String::with_capacity(12);
    if file_type.is_dir() {
        out.push('d');
    }
    if file_type.is_symlink() {
        out.push('L');
    }
    if file_type.is_block_device() {
        out.push('D');
    }
    if file_type.is_char_device() {
        out.push_str("Dc");
    }
    if file_type.is_fifo() {
        out.push('p');
    }
    if file_type.is_socket() {
        out.push('S');
    }
    if bits & 0o4000 != 0 {
        out.push('u');
    }
    if bits & 0o2000 != 0 {
        out.push('g');
    }
    if bits & 0o1000 != 0 {
        out.push('t');
    }
    if out.is_empty() {
        out.push('-');
    }

    push_permissions(&mut out, bits);
    out
}

/// Without unix permission bits only the type and the read-only flag are known.
#[cfg(not(unix))]
pub fn mode_string(metadata: &Metadata) -> String {
    let mut out = String::with_capacity(10);
    let file_type = metadata.file_type();
    if file_type.is_dir() {
        out.push('d');
    } else if file_type.is_symlink() {
        out.push('L');
    } else {
        out.push('-');
    }

    let mut bits = if metadata.permissions().readonly() {
        0o444
    } else {
        0o666
    };
    if file_type.is_dir() {
        bits |= 0o111;
    }
    push_permissions(&mut out, bits);
    out
}

fn push_permissions(out: &mut String, bits: u32) {
    const RWX: [char; 3] = ['r', 'w', 'x'];
    for shift in (0..9).rev() {
        if bits & (1 << shift) != 0 {
            out.push(RWX[2 - shift % 3]);
        } else {
            out.push('-');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_permissions() {
        let mut out = String::new();
        push_permissions(&mut out, 0o755);
        assert_eq!(out, "rwxr-xr-x");

        let mut out = String::new();
        push_permissions(&mut out, 0o640);
        assert_eq!(out, "rw-r-----");
    }

    #[cfg(unix)]
    #[test]
    fn test_mode_string_unix() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        let temp = TempDir::new().unwrap();
        let file = temp.path().join("script.sh");
        fs::write(&file, "#!/bin/sh").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o754)).unwrap();

        let metadata = fs::symlink_metadata(&file).unwrap();
        assert_eq!(mode_string(&metadata), "-rwxr-xr--");

        let dir = temp.path().join("sub");
        fs::create_dir(&dir).unwrap();
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o750)).unwrap();
        let metadata = fs::symlink_metadata(&dir).unwrap();
        assert_eq!(mode_string(&metadata), "drwxr-x---");

        let link = temp.path().join("link");
        std::os::unix::fs::symlink(&file, &link).unwrap();
        let metadata = fs::symlink_metadata(&link).unwrap();
        assert!(mode_string(&metadata).starts_with('L'));
    }
}
