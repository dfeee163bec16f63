// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Cantor odometer demos.
//!
//! [`to_svg`] is a minimal stand-in for a real renderer: it resolves color
//! tokens through a [`Palette`] and writes each [`DrawOp`] as an SVG element.
//! It is meant for inspection, not faithful text layout.

use std::fmt::Write as _;

use cantor_display::{DisplayList, DrawOp, HAlign, Palette, VAlign};
use peniko::Color;

/// Render `list` into a standalone SVG document of the given size.
pub fn to_svg(list: &DisplayList, palette: &Palette, width: f64, height: f64) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    for op in list {
        match op {
            DrawOp::FillRect { rect, color } => {
                let _ = writeln!(
                    svg,
                    r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                    color_to_svg(palette.color(*color)),
                );
            }
            DrawOp::Line { line, color } => {
                let _ = writeln!(
                    svg,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
                    line.p0.x,
                    line.p0.y,
                    line.p1.x,
                    line.p1.y,
                    color_to_svg(palette.color(*color)),
                );
            }
            DrawOp::Text {
                text,
                anchor,
                h_align,
                v_align,
                color,
            } => {
                let text_anchor = match h_align {
                    HAlign::Left => "start",
                    HAlign::Center => "middle",
                    HAlign::Right => "end",
                };
                let baseline = match v_align {
                    VAlign::Top => "hanging",
                    VAlign::Middle => "middle",
                    VAlign::Bottom => "text-after-edge",
                };
                let _ = writeln!(
                    svg,
                    r#"  <text x="{}" y="{}" text-anchor="{text_anchor}" dominant-baseline="{baseline}" font-family="Arial" font-size="18" fill="{}">{}</text>"#,
                    anchor.x,
                    anchor.y,
                    color_to_svg(palette.color(*color)),
                    escape(text),
                );
            }
        }
    }
    svg.push_str("</svg>\n");
    svg
}

fn color_to_svg(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
