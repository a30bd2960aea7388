use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start_page: u32, // 1-based inclusive
    pub end_page: u32,   // 1-based inclusive
}

impl PageRange {
    pub fn new(start_page: u32, end_page: u32) -> Self {
        Self {
            start_page,
            end_page,
        }
    }

    pub fn single(page: u32) -> Self {
        Self::new(page, page)
    }

    pub fn len(&self) -> u32 {
        if self.end_page < self.start_page {
            0
        } else {
            self.end_page - self.start_page + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Zero-based, half-open view of the range: `[start - 1, end)`.
    pub fn to_zero_based(&self) -> Range<usize> {
        (self.start_page.saturating_sub(1) as usize)..(self.end_page as usize)
    }

    pub fn validate(&self, page_count: u32) -> Result<()> {
        if self.start_page < 1 || self.start_page > self.end_page || self.end_page > page_count {
            return Err(Error::PageRange {
                start: self.start_page,
                end: self.end_page,
                page_count,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for PageRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start_page, self.end_page)
    }
}

/// Accepts `N` or `N-M` (whitespace around the dash allowed).
impl FromStr for PageRange {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let re = Regex::new(r"^\s*(\d+)\s*(?:-\s*(\d+)\s*)?$").map_err(|e| e.to_string())?;
        let caps = re
            .captures(s)
            .ok_or_else(|| format!("expected N or N-M, got {s:?}"))?;
        let start: u32 = caps[1].parse().map_err(|e| format!("start page: {e}"))?;
        let end: u32 = match caps.get(2) {
            Some(m) => m.as_str().parse().map_err(|e| format!("end page: {e}"))?,
            None => start,
        };
        Ok(PageRange::new(start, end))
    }
}
