// ABOUTME: Script detection for font-face selection
// ABOUTME: Classifies text as CJK-bearing or Latin-only

/// CJK Unified Ideographs block.
const CJK_RANGE: std::ops::RangeInclusive<char> = '\u{4e00}'..='\u{9fff}';

/// True if the text contains at least one CJK ideograph. Mixed-script text
/// counts as CJK so that a CJK-capable font is always picked for it.
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| CJK_RANGE.contains(&c))
}
