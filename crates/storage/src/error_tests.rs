// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn read_error_message_includes_path() {
    let err = StorageError::Read {
        path: PathBuf::from("/data/install/vim"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };
    assert!(err.to_string().contains("/data/install/vim"));
}
