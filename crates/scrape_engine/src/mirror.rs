use crate::ScrapeError;

/// Marker identifying an already-mirrored URL.
const MIRROR_HOST: &str = "freedium.cfd";
/// Marker identifying a URL on the source platform.
const SOURCE_HOST: &str = "medium.com";
/// Base address prefixed to Medium URLs to route them through the mirror.
const MIRROR_BASE: &str = "https://freedium.cfd";

/// Rewrite a Medium URL into its Freedium mirror form.
///
/// Already-mirrored URLs pass through unchanged. Anything that is neither a
/// Medium nor a Freedium address is rejected before any network access.
pub fn to_mirror_url(url: &str) -> Result<String, ScrapeError> {
    if url.contains(MIRROR_HOST) {
        return Ok(url.to_string());
    }
    if !url.contains(SOURCE_HOST) {
        return Err(ScrapeError::InvalidInput(
            "not a recognized Medium article URL".to_string(),
        ));
    }
    Ok(format!("{MIRROR_BASE}/{url}"))
}
