//! Track geometry: how far the track can move and what "at the edge" means.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Measured extents of a track along its scroll axis, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    /// Full width of the track's content (`scrollWidth`).
    pub content_extent: f64,
    /// Width of the window onto that content (`clientWidth`).
    pub visible_extent: f64,
}

impl Metrics {
    #[must_use]
    pub fn new(content_extent: f64, visible_extent: f64) -> Self {
        Self { content_extent, visible_extent }
    }

    /// Largest valid offset. Never negative.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.content_extent - self.visible_extent).max(0.0)
    }

    /// Whether there is anything to scroll to.
    #[must_use]
    pub fn overflows(&self) -> bool {
        self.content_extent > self.visible_extent
    }

    /// Clamp an offset into `[0, max_offset]`. `NaN` maps to 0.
    #[must_use]
    pub fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }

    /// Whether `offset` is within `tolerance` of the start.
    #[must_use]
    pub fn at_start(&self, offset: f64, tolerance: f64) -> bool {
        offset <= tolerance
    }

    /// Whether `offset` is within `tolerance` of the end.
    #[must_use]
    pub fn at_end(&self, offset: f64, tolerance: f64) -> bool {
        offset >= self.max_offset() - tolerance
    }

    /// Highest discrete position when stepping by `extent`.
    ///
    /// The last position may be a partial step: with a max offset of 650 and
    /// an extent of 300, positions are 0, 300, 600 and 650. A remainder within
    /// `tolerance` of a whole step is not a position of its own.
    #[must_use]
    pub fn max_index(&self, extent: f64, tolerance: f64) -> usize {
        if extent <= 0.0 || !extent.is_finite() {
            return 0;
        }
        let reach = (self.max_offset() - tolerance.max(0.0)).max(0.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (reach / extent).ceil() as usize;
        steps
    }

    /// Offset of discrete position `index` when stepping by `extent`.
    #[must_use]
    pub fn offset_for_index(&self, index: usize, extent: f64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let raw = index as f64 * extent;
        self.clamp(raw)
    }

    /// Nearest discrete position to `offset`.
    #[must_use]
    pub fn nearest_index(&self, offset: f64, extent: f64, tolerance: f64) -> usize {
        let max_index = self.max_index(extent, tolerance);
        if max_index == 0 {
            return 0;
        }
        let offset = self.clamp(offset);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let below = ((offset / extent).floor() as usize).min(max_index);
        let above = (below + 1).min(max_index);
        let to_below = offset - self.offset_for_index(below, extent);
        let to_above = self.offset_for_index(above, extent) - offset;
        if to_above < to_below { above } else { below }
    }
}

/// Parse the leading number of a computed CSS length such as `"20px"`.
///
/// Reads the longest decimal prefix the way `parseFloat` does: an optional
/// sign, digits with at most one `.`, and an exponent only when digits follow
/// it. Whatever comes after is ignored, so `"20px 10px"` is 20, `"1e1px"` is
/// 10 and `"1.2.3px"` is 1.2. Keywords like `"normal"` yield `None`.
#[must_use]
pub fn parse_css_px(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let bytes = value.as_bytes();
    let digits_from = |start: usize| bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }
    match value[..end].parse::<f64>() {
        Ok(px) if px.is_finite() => Some(px),
        _ => None,
    }
}
