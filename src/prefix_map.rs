// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Reader for libphonenumber's `prefix|description` text data
//! (geocoding, carrier and timezone files).

use std::{collections::BTreeMap, io::BufRead};

use log::trace;

use crate::phoneinfo::{errors::PrefixFileError, helper_constants::MAX_PREFIX_LINE_LENGTH};

/// Longest prefix stored in libphonenumber data, country code included.
const MAX_PREFIX_DIGITS: usize = 19;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PrefixMap {
    prefixes: BTreeMap<u64, String>,
    /// Length in digits of the longest stored prefix, bounds the lookup loop.
    longest: usize,
}

impl PrefixMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse<R: BufRead>(mut reader: R) -> Result<Self, PrefixFileError> {
        let mut map = Self::new();
        let mut line_buffer = String::with_capacity(MAX_PREFIX_LINE_LENGTH);
        let mut line_number = 0;

        loop {
            line_number += 1;
            line_buffer.clear();

            let bytes_read = reader.read_line(&mut line_buffer)?;
            if bytes_read == 0 {
                break;
            }

            if bytes_read > MAX_PREFIX_LINE_LENGTH {
                return Err(PrefixFileError::LineTooLong {
                    line_num: line_number,
                    max_len: MAX_PREFIX_LINE_LENGTH,
                });
            }

            let line = line_buffer.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((prefix_str, desc)) = line.split_once('|') {
                if prefix_str.is_empty() {
                    continue;
                }
                let prefix = prefix_str
                    .parse()
                    .map_err(|e| PrefixFileError::PrefixParseError {
                        prefix: prefix_str.to_string(),
                        source: e,
                    })?;
                map.insert_with_len(prefix, prefix_str.len(), desc.to_string());
            }
        }

        trace!("Parsed {} prefixes in {} lines", map.len(), line_number - 1);
        Ok(map)
    }

    pub fn insert(&mut self, prefix: u64, description: impl Into<String>) {
        let mut buf = itoa::Buffer::new();
        let len = buf.format(prefix).len();
        self.insert_with_len(prefix, len, description.into());
    }

    fn insert_with_len(&mut self, prefix: u64, len: usize, description: String) {
        self.longest = self.longest.max(len);
        self.prefixes.insert(prefix, description);
    }

    /// Returns the description of the longest stored prefix of `digits`.
    ///
    /// `digits` must be ASCII decimal digits, country calling code first.
    pub fn lookup(&self, digits: &str) -> Option<&str> {
        let max_len = digits.len().min(self.longest).min(MAX_PREFIX_DIGITS);
        (1..=max_len).rev().find_map(|len| {
            let prefix: u64 = digits.get(..len)?.parse().ok()?;
            self.prefixes.get(&prefix).map(String::as_str)
        })
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::PrefixMap;
    use crate::phoneinfo::errors::PrefixFileError;

    #[test]
    fn test_longest_prefix_wins() {
        let data = "\
# Copyright header
1650|California

1650253|Mountain View, CA
44|United Kingdom
";
        let map = PrefixMap::parse(Cursor::new(data)).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.lookup("16502530000"), Some("Mountain View, CA"));
        assert_eq!(map.lookup("16505550000"), Some("California"));
        assert_eq!(map.lookup("442087654321"), Some("United Kingdom"));
        assert_eq!(map.lookup("33123456789"), None);
    }

    #[test]
    fn test_last_line_without_newline() {
        let map = PrefixMap::parse(Cursor::new("4420|London")).unwrap();
        assert_eq!(map.lookup("442087654321"), Some("London"));
    }

    #[test]
    fn test_ignores_lines_without_separator() {
        let map = PrefixMap::parse(Cursor::new("not a mapping\n|orphan\n91|India\n")).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.lookup("919812345678"), Some("India"));
    }

    #[test]
    fn test_bad_prefix() {
        let err = PrefixMap::parse(Cursor::new("1650|California\n16x0|Broken\n")).unwrap_err();
        match err {
            PrefixFileError::PrefixParseError { prefix, .. } => assert_eq!(prefix, "16x0"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_line_too_long() {
        let data = format!("1|ok\n1650|{}\n", "a".repeat(3000));
        let err = PrefixMap::parse(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, PrefixFileError::LineTooLong { line_num: 2, .. }));
    }

    #[test]
    fn test_insert_and_empty() {
        let mut map = PrefixMap::new();
        assert!(map.is_empty());
        assert_eq!(map.lookup("1"), None);
        map.insert(612, "Sydney");
        assert_eq!(map.lookup("61298765432"), Some("Sydney"));
        assert_eq!(map.lookup("61"), None);
    }
}
