// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Path separator conversion for paths handed between steps

/// Separator between entries of the `PATH` variable on this platform
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: char = ':';

/// Use forward slashes
pub fn to_posix_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Use backslashes
pub fn to_win32_path(path: &str) -> String {
    path.replace('/', "\\")
}

/// Use this platform's separator
pub fn to_platform_path(path: &str) -> String {
    if cfg!(windows) {
        to_win32_path(path)
    } else {
        to_posix_path(path)
    }
}
