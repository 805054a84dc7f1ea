use std::collections::HashSet;

use crate::error::ParseError;
use crate::traits::Platform;
use crate::types::{AspectRatio, RefreshMode, Resolution};

/// Scan an unsigned integer at the start of `s`, skipping leading whitespace
/// and an optional `+`. Returns the value and the unconsumed rest.
fn scan_leading_uint(s: &str) -> Option<(u32, &str)> {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = s[..digits].parse().ok()?;
    Some((value, &s[digits..]))
}

/// Parse an aspect ratio of the form `W:H`
///
/// Anything after the second integer is ignored, so `"16:9 wide"` is
/// accepted. The separator must follow the first integer directly.
pub fn parse_aspect_ratio(s: &str) -> Option<AspectRatio> {
    let (num, rest) = scan_leading_uint(s)?;
    let rest = rest.strip_prefix(':')?;
    let (den, _) = scan_leading_uint(rest)?;
    if den == 0 {
        return None;
    }
    Some(AspectRatio::new(num, den))
}

/// Parse a resolution of the form `WIDTHxHEIGHT`
pub fn parse_resolution(s: &str) -> Result<Resolution, ParseError> {
    let (width, height) = s
        .split_once('x')
        .ok_or_else(|| ParseError::MissingSeparator(s.to_string()))?;

    let (width, _) =
        scan_leading_uint(width).ok_or_else(|| ParseError::InvalidInteger(s.to_string()))?;
    let (height, _) =
        scan_leading_uint(height).ok_or_else(|| ParseError::InvalidInteger(s.to_string()))?;

    if width == 0 || height == 0 {
        return Err(ParseError::ZeroDimension(s.to_string()));
    }

    Ok(Resolution::new(width, height))
}

/// Keep the modes matching `ratio`, in their original order
pub fn filter_modes_by_aspect_ratio(
    modes: &[RefreshMode],
    ratio: Option<AspectRatio>,
) -> Vec<RefreshMode> {
    match ratio {
        None => modes.to_vec(),
        Some(ratio) => modes
            .iter()
            .filter(|mode| ratio.matches_mode(mode))
            .copied()
            .collect(),
    }
}

/// Distinct resolutions in first-seen order
///
/// Monitors list every resolution once per refresh rate; only the first
/// occurrence is kept.
pub fn modes_to_resolutions(modes: &[RefreshMode]) -> Vec<Resolution> {
    let mut seen = HashSet::with_capacity(modes.len());
    modes
        .iter()
        .map(RefreshMode::resolution)
        .filter(|res| seen.insert(*res))
        .collect()
}

/// Resolution catalog of the primary monitor, optionally restricted to one
/// aspect ratio
pub fn available_resolutions(
    platform: &dyn Platform,
    ratio: Option<AspectRatio>,
) -> Vec<Resolution> {
    let modes = platform.primary_monitor_modes();
    if modes.is_empty() {
        log::debug!("Primary monitor reported no display modes");
        return Vec::new();
    }

    let filtered = filter_modes_by_aspect_ratio(&modes, ratio);
    let resolutions = modes_to_resolutions(&filtered);
    log::debug!(
        "{} modes, {} after filter {:?}, {} distinct resolutions",
        modes.len(),
        filtered.len(),
        ratio,
        resolutions.len()
    );
    resolutions
}

/// Resolution catalog formatted as `WIDTHxHEIGHT` strings
///
/// An unparsable ratio is reported to the caller instead of silently falling
/// back to the unfiltered catalog.
pub fn get_available_resolutions(
    platform: &dyn Platform,
    ratio: Option<&str>,
) -> Result<Vec<String>, ParseError> {
    let ratio = match ratio {
        Some(raw) => match parse_aspect_ratio(raw) {
            Some(ratio) => Some(ratio),
            None => {
                log::warn!("Rejecting aspect ratio filter `{raw}`");
                return Err(ParseError::InvalidAspectRatio(raw.to_string()));
            }
        },
        None => None,
    };

    Ok(available_resolutions(platform, ratio)
        .iter()
        .map(Resolution::to_string)
        .collect())
}
