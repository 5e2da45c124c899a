//! Human-readable text output for reports and gamut results.

use oklch_explorer_core::{to_css_oklch, ColorReport, GamutResult};

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

/// The color card, one line per field.
pub fn report_text(report: &ColorReport) -> String {
    let c = report.color;
    [
        format!("oklch:          ({} {} {})", c.l, c.c, c.h),
        format!("in gamut:       {}", yes_no(report.in_gamut)),
        format!("achromatic:     {}", yes_no(report.achromatic)),
        format!("css:            {}", report.raw.oklch),
        format!("rgb:            {}", report.raw.rgb),
        format!("hex:            {}", report.raw.hex),
        format!("clamped oklch:  {}", report.clamped.oklch),
        format!("clamped rgb:    {}", report.clamped.rgb),
        format!("clamped hex:    {}", report.clamped.hex),
    ]
    .join("\n")
}

pub fn gamut_text(result: &GamutResult) -> String {
    format!(
        "in gamut: {}\nclamped:  {}",
        yes_no(result.in_gamut),
        to_css_oklch(result.clamped)
    )
}
