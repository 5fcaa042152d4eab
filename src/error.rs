// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors returned by the index-checked operations of [`LinkedList`].
///
/// Every operation validates its indices before touching the list, so a returned error
/// always means that the list is unchanged.
///
/// [`LinkedList`]: crate::LinkedList
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ListError {
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T, E = ListError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display() {
        let error = ListError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(
            error.to_string(),
            "index 5 is out of range for a list of length 3"
        );
    }
}
