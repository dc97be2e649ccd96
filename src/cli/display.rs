// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the ints2der CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `INTS2DER_THEME` first, then `COLORFGBG`, then defaults to dark. Colors
//! are dropped entirely for `NO_COLOR` and when stdout is not a TTY, so the
//! plain-text dump is stable enough to grep in scripts and tests.
//!
//! # Theme detection order
//!
//! 1. `INTS2DER_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::io::{self, Write};
use std::sync::OnceLock;

use ints2der::utils::to_hex;
use ints2der::{DerError, Tlv, TAG_INTEGER, TAG_SEQUENCE};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

/// Bytes shown on each side of the offending byte in an error window
const ERROR_CONTEXT: usize = 8;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn theme_from(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    if let Some(theme) = explicit {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Some(bg) = colorfgbg.and_then(|v| v.split(';').next_back()) {
        if let Ok(bg_num) = bg.parse::<u8>() {
            if bg_num >= 7 && bg_num != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

fn detect_theme() -> Theme {
    let explicit = std::env::var("INTS2DER_THEME").ok();
    let colorfgbg = std::env::var("COLORFGBG").ok();
    theme_from(explicit.as_deref(), colorfgbg.as_deref())
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Write a content line: │ content          │
pub fn row<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let (b, r) = (border(), reset());
    writeln!(out, "{b}│{r}{}{}{b}│{r}", content, " ".repeat(pad))
}

/// Write section header: ┌─ LABEL ──────────┐
pub fn section_top<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    let (b, r) = (border(), reset());
    writeln!(out, "{b}┌{r}{}{b}{}┐{r}", label_part, "─".repeat(remaining))
}

/// Write section divider: ├─ LABEL ──────────┤
pub fn section_mid<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    let (b, r) = (border(), reset());
    writeln!(out, "{b}├{r}{}{b}{}┤{r}", label_part, "─".repeat(remaining))
}

/// Write section footer: └──────────────────┘
pub fn section_bot<W: Write>(out: &mut W) -> io::Result<()> {
    let (b, r) = (border(), reset());
    writeln!(out, "{b}└{}┘{r}", "─".repeat(BOX_WIDTH))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded tag badge: `[SEQ]`, `[INT]`, or the raw tag byte
pub fn tag_badge(tag: u8) -> String {
    let (label, color): (String, fn() -> String) = match tag {
        TAG_SEQUENCE => ("SEQ".to_string(), BLUE),
        TAG_INTEGER => ("INT".to_string(), GREEN),
        other => (format!("{:02X}", other), RED),
    };
    themed(color, &[], &format!("[{}]", label))
}

/// Integer value colored by sign
pub fn value_colored(value: i64) -> String {
    let color = if value < 0 { MAGENTA } else { YELLOW };
    themed(color, &[], &value.to_string())
}

/// Header and content hex for one TLV, header dimmed
fn tlv_hex(bytes: &[u8], tlv: &Tlv) -> String {
    let header = to_hex(&bytes[tlv.offset..tlv.content_start()]);
    let content = to_hex(&bytes[tlv.content_range()]);
    let header = themed(GRAY, &[], &header);
    if content.is_empty() {
        header
    } else {
        format!("{} {}", header, content)
    }
}

/// Width of the hex column: a 10-byte i64 TLV is 29 characters
const HEX_COLUMN: usize = 30;

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

/// Draw the structure of a decoded `SEQUENCE OF INTEGER` to `out`.
///
/// `records` is the output of `walk_sequence` (SEQUENCE first) and `values`
/// the decoded children in the same order.
pub fn print_inspect<W: Write>(
    out: &mut W,
    bytes: &[u8],
    records: &[Tlv],
    values: &[i64],
) -> io::Result<()> {
    let Some(outer) = records.first() else {
        return Ok(());
    };

    section_top(out, "SEQUENCE OF INTEGER")?;
    row(
        out,
        &format!(
            " {} header {}  content {}  total {}  children {}",
            tag_badge(outer.tag),
            to_hex(&bytes[outer.offset..outer.content_start()]),
            format_size(outer.content_len),
            format_size(outer.total_len()),
            values.len()
        ),
    )?;

    if !values.is_empty() {
        section_mid(out, "CHILDREN")?;
        for (i, (tlv, &value)) in records[1..].iter().zip(values).enumerate() {
            row(
                out,
                &format!(
                    " {:>5}  @{:<7} {} {}  {}",
                    i,
                    tlv.offset,
                    tag_badge(tlv.tag),
                    pad_right(&tlv_hex(bytes, tlv), HEX_COLUMN),
                    value_colored(value)
                ),
            )?;
        }
    }

    section_bot(out)
}

/// Print a hex window around the byte where decoding failed.
pub fn print_error_location(bytes: &[u8], err: &DerError) {
    let at = err.offset();
    let start = at.saturating_sub(ERROR_CONTEXT);
    let end = (at + ERROR_CONTEXT + 1).min(bytes.len());

    let mut cells = Vec::with_capacity(end.saturating_sub(start));
    for (pos, byte) in bytes.iter().enumerate().take(end).skip(start) {
        let cell = format!("{:02X}", byte);
        if pos == at {
            cells.push(themed(RED, &[BOLD], &format!("[{}]", cell)));
        } else {
            cells.push(cell);
        }
    }
    if at >= bytes.len() {
        cells.push(themed(RED, &[BOLD], "[EOF]"));
    }

    eprintln!("  offset {}: {}", at, cells.join(" "));
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
